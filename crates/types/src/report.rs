//! Structured output of a simulation run.

use crate::{JobName, Tick};
use serde::{Deserialize, Serialize};

/// Emitted once per job, in completion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobCompletion {
    /// Job name.
    pub name: JobName,

    /// CPU time charged to the job (equals its total service time).
    pub cpu_time_spent: u32,

    /// Wall-clock tick at which the job finished.
    pub finish_tick: Tick,

    /// Times the job was given the CPU.
    pub dispatch_count: u32,

    /// Times the job blocked for I/O.
    pub io_block_count: u32,

    /// Total I/O ticks.
    pub io_time_spent: u64,
}

/// Busy/idle accounting for one device (CPU or I/O).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeviceStats {
    /// Ticks the device spent serving a job.
    pub busy: u64,

    /// Ticks the device spent idle.
    pub idle: u64,

    /// `busy / (busy + idle)`.
    pub utilization: f64,

    /// Dispatches onto the device.
    pub dispatches: u64,

    /// `jobs / (busy + idle)`.
    pub throughput: f64,
}

impl DeviceStats {
    /// Total ticks observed by the device.
    pub fn total(&self) -> u64 {
        self.busy + self.idle
    }
}

/// Final aggregate record of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Ticks executed before both queues drained.
    pub wall_clock_ticks: Tick,

    /// CPU (ready queue) statistics.
    pub cpu: DeviceStats,

    /// I/O device statistics.
    pub io: DeviceStats,
}
