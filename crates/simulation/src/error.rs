//! Error types for the simulation.

use std::fmt;
use thiserror::Error;

/// Which of the two queues an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueueKind {
    /// Jobs waiting for (or holding) the CPU.
    Ready,

    /// Jobs waiting for (or using) the I/O device.
    Io,
}

impl fmt::Display for QueueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueKind::Ready => write!(f, "ready"),
            QueueKind::Io => write!(f, "I/O"),
        }
    }
}

/// Errors from `BoundedQueue` operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    /// The queue already holds `capacity` jobs.
    #[error("queue capacity of {capacity} exceeded")]
    CapacityExceeded {
        /// Configured bound.
        capacity: usize,
    },
}

/// Errors that abort a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// A queue would overflow its fixed bound. The queue is mis-sized for
    /// the job set; the run is abandoned and produces no report.
    #[error("{queue} queue capacity of {capacity} exceeded")]
    CapacityExceeded {
        /// Queue that overflowed.
        queue: QueueKind,
        /// Configured bound.
        capacity: usize,
    },
}

impl SimulationError {
    pub(crate) fn from_queue(queue: QueueKind, err: QueueError) -> Self {
        match err {
            QueueError::CapacityExceeded { capacity } => {
                SimulationError::CapacityExceeded { queue, capacity }
            }
        }
    }
}
