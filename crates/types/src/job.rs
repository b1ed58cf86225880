//! Job descriptors as handed to the engine.

use crate::JobName;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Probability that a job blocks for I/O during a burst, as an integer percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockProbability(u8);

impl BlockProbability {
    /// Never blocks.
    pub const NEVER: Self = BlockProbability(0);

    /// Blocks on every eligible burst.
    pub const ALWAYS: Self = BlockProbability(100);

    /// Create from an integer percent in `[0, 100]`.
    pub fn from_percent(percent: u8) -> Result<Self, BlockProbabilityError> {
        if percent > 100 {
            return Err(BlockProbabilityError::OutOfRange(f64::from(percent) / 100.0));
        }
        Ok(Self(percent))
    }

    /// Create from a real probability in `[0, 1]`.
    ///
    /// The value is scaled to a percent and rounded to the nearest integer.
    pub fn from_fraction(probability: f64) -> Result<Self, BlockProbabilityError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(BlockProbabilityError::OutOfRange(probability));
        }
        Ok(Self((probability * 100.0).round() as u8))
    }

    /// Get the raw percent.
    pub fn percent(self) -> u32 {
        u32::from(self.0)
    }
}

impl fmt::Display for BlockProbability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Errors that can occur when constructing a block probability.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BlockProbabilityError {
    /// Probability outside `[0, 1]` (or NaN).
    #[error("block probability {0} is outside [0, 1]")]
    OutOfRange(f64),
}

/// A validated job description, one per simulated job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDescriptor {
    /// Unique job name.
    pub name: JobName,

    /// Total CPU ticks the job requires.
    pub total_service_time: u32,

    /// Chance of blocking for I/O on each burst.
    pub block_probability: BlockProbability,
}

impl JobDescriptor {
    /// Create a new job descriptor.
    pub fn new(name: JobName, total_service_time: u32, block_probability: BlockProbability) -> Self {
        Self {
            name,
            total_service_time,
            block_probability,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_rounds_to_percent() {
        assert_eq!(BlockProbability::from_fraction(0.87).unwrap().percent(), 87);
        assert_eq!(BlockProbability::from_fraction(0.29).unwrap().percent(), 29);
        assert_eq!(BlockProbability::from_fraction(0.0).unwrap(), BlockProbability::NEVER);
        assert_eq!(BlockProbability::from_fraction(1.0).unwrap(), BlockProbability::ALWAYS);
    }

    #[test]
    fn test_fraction_out_of_range() {
        assert!(BlockProbability::from_fraction(1.01).is_err());
        assert!(BlockProbability::from_fraction(-0.1).is_err());
        assert!(BlockProbability::from_fraction(f64::NAN).is_err());
        assert!(BlockProbability::from_percent(101).is_err());
    }
}
