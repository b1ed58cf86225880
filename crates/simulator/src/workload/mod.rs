//! Workload sources for simulations.
//!
//! Jobs come either from a tab-separated job file or from a seeded random
//! generator.

mod file;
mod random;

pub use file::{load_jobs, parse_jobs, DescriptorError};
pub use random::RandomWorkload;

use procsim_types::JobDescriptor;

/// Trait for generating synthetic job sets.
pub trait WorkloadGenerator {
    /// Generate the full job set for one run.
    fn generate(&mut self, rng: &mut impl rand::Rng) -> Vec<JobDescriptor>;
}
