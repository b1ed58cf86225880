//! Configuration types for the simulator.

use procsim_core::DEFAULT_SEED;
use procsim_simulation::{DEFAULT_QUANTUM, DEFAULT_QUEUE_CAPACITY};
use procsim_types::Policy;

/// Configuration for a simulation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulatorConfig {
    /// Queueing discipline, fixed for the run.
    pub policy: Policy,

    /// Random seed for deterministic simulation.
    pub seed: u64,

    /// Bound on jobs held by either queue.
    pub queue_capacity: usize,

    /// Round-Robin quantum in ticks. Ignored under FCFS.
    pub quantum: u32,
}

impl SimulatorConfig {
    /// Create a new simulator configuration.
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            seed: DEFAULT_SEED,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            quantum: DEFAULT_QUANTUM,
        }
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the queue capacity.
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    /// Set the Round-Robin quantum.
    pub fn with_quantum(mut self, quantum: u32) -> Self {
        self.quantum = quantum.max(1);
        self
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self::new(Policy::RoundRobin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulatorConfig::default();
        assert_eq!(config.policy, Policy::RoundRobin);
        assert_eq!(config.seed, 12345);
        assert_eq!(config.queue_capacity, 256);
        assert_eq!(config.quantum, 5);
    }

    #[test]
    fn test_builder() {
        let config = SimulatorConfig::new(Policy::Fcfs)
            .with_seed(7)
            .with_queue_capacity(8)
            .with_quantum(0);
        assert_eq!(config.policy, Policy::Fcfs);
        assert_eq!(config.seed, 7);
        assert_eq!(config.queue_capacity, 8);
        assert_eq!(config.quantum, 1);
    }
}
