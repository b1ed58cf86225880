//! Domain-specific identifier types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One unit of simulated wall-clock time.
pub type Tick = u64;

/// Maximum length of a job name, in characters.
pub const MAX_JOB_NAME_LEN: usize = 10;

/// Job identifier.
///
/// Index of the job in the engine's job table, assigned in input order.
/// Queues hold `JobId`s rather than the records themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub usize);

impl JobId {
    /// Get the index into the job table.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Job({})", self.0)
    }
}

/// Job name, bounded to `MAX_JOB_NAME_LEN` characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JobName(String);

impl JobName {
    /// Create a job name, rejecting names longer than `MAX_JOB_NAME_LEN`.
    pub fn new(name: impl Into<String>) -> Result<Self, JobNameError> {
        let name = name.into();
        let len = name.chars().count();
        if len > MAX_JOB_NAME_LEN {
            return Err(JobNameError::TooLong {
                len,
                max: MAX_JOB_NAME_LEN,
            });
        }
        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for JobName {
    type Error = JobNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<JobName> for String {
    fn from(name: JobName) -> Self {
        name.0
    }
}

impl fmt::Display for JobName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Forward padding flags so presenters can align columns.
        f.pad(&self.0)
    }
}

/// Errors that can occur when constructing a job name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JobNameError {
    /// Name exceeds the length bound.
    #[error("job name is {len} characters, maximum is {max}")]
    TooLong {
        /// Actual length.
        len: usize,
        /// Allowed maximum.
        max: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_name_bound() {
        assert!(JobName::new("editor").is_ok());
        assert!(JobName::new("abcdefghij").is_ok());
        assert_eq!(
            JobName::new("abcdefghijk"),
            Err(JobNameError::TooLong { len: 11, max: 10 })
        );
    }

    #[test]
    fn test_job_name_display_pads() {
        let name = JobName::new("A").unwrap();
        assert_eq!(format!("{:<4}|", name), "A   |");
    }

    #[test]
    fn test_job_name_rejected_on_deserialize() {
        let parsed: Result<JobName, _> = serde_json::from_str("\"waytoolongname\"");
        assert!(parsed.is_err());
    }
}
