//! Reduction of queue and job counters into the final report.

use crate::BoundedQueue;
use procsim_types::{DeviceStats, JobRecord, SimulationReport, Tick};

/// Builds a `SimulationReport` from final engine state.
///
/// Pure: reads the two queues' busy/idle counters and the per-job
/// dispatch and block counters, and touches nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatsCollector;

impl StatsCollector {
    /// Reduce final state into the aggregate record.
    ///
    /// CPU dispatches are the sum of per-job dispatch counts; I/O dispatches
    /// are the sum of per-job block counts.
    pub fn collect(
        ready: &BoundedQueue,
        io: &BoundedQueue,
        jobs: &[JobRecord],
        wall_clock: Tick,
    ) -> SimulationReport {
        let job_count = jobs.len() as u64;
        let cpu_dispatches = jobs.iter().map(|j| u64::from(j.dispatch_count)).sum();
        let io_dispatches = jobs.iter().map(|j| u64::from(j.block_count)).sum();

        SimulationReport {
            wall_clock_ticks: wall_clock,
            cpu: Self::device(ready, cpu_dispatches, job_count),
            io: Self::device(io, io_dispatches, job_count),
        }
    }

    fn device(queue: &BoundedQueue, dispatches: u64, job_count: u64) -> DeviceStats {
        let busy = queue.busy_ticks();
        let idle = queue.idle_ticks();
        let total = busy + idle;

        DeviceStats {
            busy,
            idle,
            utilization: ratio(busy, total),
            dispatches,
            throughput: ratio(job_count, total),
        }
    }
}

/// `numerator / denominator`, or zero when nothing was observed.
fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
