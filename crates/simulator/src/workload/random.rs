//! Seeded random job sets.

use super::WorkloadGenerator;
use procsim_types::{BlockProbability, JobDescriptor, JobName};
use std::ops::RangeInclusive;
use tracing::debug;

/// Generates `count` jobs with service times and block chances drawn
/// uniformly from the configured ranges.
#[derive(Debug, Clone)]
pub struct RandomWorkload {
    count: usize,
    service_time: RangeInclusive<u32>,
    block_percent: RangeInclusive<u8>,
}

impl RandomWorkload {
    /// Create a generator for `count` jobs of 1 to 50 ticks, 0 to 100%
    /// block chance.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            service_time: 1..=50,
            block_percent: 0..=100,
        }
    }

    /// Set the service time range.
    pub fn with_service_time(mut self, range: RangeInclusive<u32>) -> Self {
        self.service_time = range;
        self
    }

    /// Set the block chance range, in percent. Clamped to 100.
    pub fn with_block_percent(mut self, range: RangeInclusive<u8>) -> Self {
        let (lo, hi) = (*range.start(), *range.end());
        self.block_percent = lo.min(100)..=hi.min(100);
        self
    }

    /// Number of jobs generated per call.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl WorkloadGenerator for RandomWorkload {
    fn generate(&mut self, rng: &mut impl rand::Rng) -> Vec<JobDescriptor> {
        let jobs: Vec<JobDescriptor> = (0..self.count)
            .filter_map(|index| {
                let name = JobName::new(format!("job{index}")).ok()?;
                let service = if self.service_time.is_empty() {
                    *self.service_time.start()
                } else {
                    rng.gen_range(self.service_time.clone())
                };
                let percent = if self.block_percent.is_empty() {
                    *self.block_percent.start()
                } else {
                    rng.gen_range(self.block_percent.clone())
                };
                let probability = BlockProbability::from_percent(percent).ok()?;
                Some(JobDescriptor::new(name, service, probability))
            })
            .collect();

        debug!(jobs = jobs.len(), "Generated random workload");
        jobs
    }
}
