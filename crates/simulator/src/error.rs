//! Error types for the simulator.

use crate::workload::DescriptorError;
use procsim_simulation::SimulationError;
use thiserror::Error;

/// Errors from loading jobs or running a simulation.
#[derive(Debug, Error)]
pub enum SimulatorError {
    /// The job file was unreadable or a line was rejected.
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    /// The run was aborted.
    #[error(transparent)]
    Simulation(#[from] SimulationError),
}
