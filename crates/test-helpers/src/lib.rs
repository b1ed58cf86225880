//! Test helpers for procsim.
//!
//! Provides a scripted [`RandomnessSource`] so engine tests can pin down
//! exactly which block decisions and I/O durations are drawn, plus small
//! fixture constructors for job descriptors.

use procsim_core::RandomnessSource;
use procsim_types::{BlockProbability, JobDescriptor, JobName};
use std::collections::VecDeque;

/// A `RandomnessSource` that replays a fixed list of fractions.
///
/// Draws panic once the script is exhausted, so a test fails loudly if the
/// engine consumes more randomness than the scenario expects.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandomness {
    script: VecDeque<f64>,
    consumed: usize,
}

impl ScriptedRandomness {
    /// Create a source replaying raw fractions in `[0, 1)`.
    pub fn new(fractions: impl IntoIterator<Item = f64>) -> Self {
        Self {
            script: fractions.into_iter().collect(),
            consumed: 0,
        }
    }

    /// Queue a draw that makes `percent()` return `value`.
    pub fn then_percent(self, value: u32) -> Self {
        self.then_int(0, 100, value)
    }

    /// Queue a draw that makes `uniform_int(lo, hi_exclusive)` return `value`.
    pub fn then_int(mut self, lo: u32, hi_exclusive: u32, value: u32) -> Self {
        assert!(
            (lo..hi_exclusive).contains(&value),
            "{value} is outside [{lo}, {hi_exclusive})"
        );
        let span = f64::from(hi_exclusive - lo);
        self.script.push_back((f64::from(value - lo) + 0.5) / span);
        self
    }

    /// Number of values drawn so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Number of scripted values not yet drawn.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl RandomnessSource for ScriptedRandomness {
    fn uniform_fraction(&mut self) -> f64 {
        let Some(value) = self.script.pop_front() else {
            panic!("scripted randomness exhausted after {} draws", self.consumed);
        };
        self.consumed += 1;
        value
    }
}

/// Build a job descriptor from a name, service time and block percent.
pub fn job(name: &str, total_service_time: u32, block_percent: u8) -> JobDescriptor {
    JobDescriptor::new(
        JobName::new(name).expect("fixture job name too long"),
        total_service_time,
        BlockProbability::from_percent(block_percent).expect("fixture percent out of range"),
    )
}

/// Build descriptors for jobs that never block.
pub fn no_block_jobs(jobs: &[(&str, u32)]) -> Vec<JobDescriptor> {
    jobs.iter()
        .map(|&(name, service)| job(name, service, 0))
        .collect()
}

/// The three jobs from the classic sample input.
pub fn sample_jobs() -> Vec<JobDescriptor> {
    vec![
        job("editor", 5, 87),
        job("compiler", 40, 53),
        job("adventure", 30, 72),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_values_replay_in_order() {
        let mut rng = ScriptedRandomness::default()
            .then_percent(42)
            .then_int(1, 31, 30)
            .then_int(1, 6, 1);

        assert_eq!(rng.percent(), 42);
        assert_eq!(rng.uniform_int(1, 31), 30);
        assert_eq!(rng.uniform_int(1, 6), 1);
        assert_eq!(rng.consumed(), 3);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "exhausted")]
    fn test_exhausted_script_panics() {
        let mut rng = ScriptedRandomness::default();
        rng.percent();
    }
}
