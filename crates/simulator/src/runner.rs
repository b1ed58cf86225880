//! Simulation runner.

use crate::config::SimulatorConfig;
use crate::error::SimulatorError;
use crate::workload::{load_jobs, WorkloadGenerator};
use procsim_core::{SchedulingPolicy, SeededRandomness};
use procsim_simulation::{Fcfs, RoundRobin, SchedulingEngine, SimulationOutcome};
use procsim_types::{JobDescriptor, Policy};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// ChaCha stream used for workload generation, kept apart from the
/// engine's stream so both can share one seed.
const WORKLOAD_STREAM: u64 = 1;

/// Runs one simulation per call with a fixed configuration.
pub struct Simulator {
    config: SimulatorConfig,
}

impl Simulator {
    /// Create a new simulator.
    pub fn new(config: SimulatorConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Simulate `jobs` to completion.
    pub fn run(&self, jobs: &[JobDescriptor]) -> Result<SimulationOutcome, SimulatorError> {
        let rng = SeededRandomness::new(self.config.seed);
        let capacity = self.config.queue_capacity;

        info!(
            policy = %self.config.policy,
            seed = self.config.seed,
            quantum = self.config.quantum,
            capacity,
            "Configured simulator"
        );

        let started = Instant::now();
        let outcome = match self.config.policy {
            Policy::Fcfs => drive(Fcfs, rng, jobs, capacity)?,
            Policy::RoundRobin => drive(RoundRobin::new(self.config.quantum), rng, jobs, capacity)?,
        };

        debug!(
            ticks = outcome.report.wall_clock_ticks,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Run complete"
        );

        Ok(outcome)
    }

    /// Load a job file and simulate it.
    pub fn run_file(&self, path: &Path) -> Result<SimulationOutcome, SimulatorError> {
        let jobs = load_jobs(path)?;
        self.run(&jobs)
    }

    /// Generate a job set from `workload` and simulate it.
    ///
    /// Generation is seeded from the configured seed.
    pub fn run_generated(
        &self,
        workload: &mut impl WorkloadGenerator,
    ) -> Result<(Vec<JobDescriptor>, SimulationOutcome), SimulatorError> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        rng.set_stream(WORKLOAD_STREAM);
        let jobs = workload.generate(&mut rng);
        let outcome = self.run(&jobs)?;
        Ok((jobs, outcome))
    }
}

fn drive<P: SchedulingPolicy>(
    policy: P,
    rng: SeededRandomness,
    jobs: &[JobDescriptor],
    capacity: usize,
) -> Result<SimulationOutcome, SimulatorError> {
    let mut engine = SchedulingEngine::new(policy, rng, jobs, capacity)?;
    Ok(engine.run()?)
}
