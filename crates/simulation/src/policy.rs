//! The two queueing disciplines.

use procsim_core::SchedulingPolicy;
use procsim_types::{BlockState, IoState, JobRecord, Policy, RunState};

/// Round-Robin quantum, in ticks.
pub const DEFAULT_QUANTUM: u32 = 5;

/// First-come-first-served.
///
/// A burst runs uninterrupted until the job blocks or finishes. A job counts
/// as dispatched once at load and once more every time it returns from I/O.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn kind(&self) -> Policy {
        Policy::Fcfs
    }

    fn initialize(&self, job: &mut JobRecord) {
        job.run_state = RunState::Active(job.total_service_time);
        job.block_state = BlockState::Undetermined;
        job.io_state = IoState::Undetermined;
        job.remaining_quantum = None;
        job.dispatch_count = 1;
        job.cpu_time_accumulated = job.total_service_time;
    }

    fn block_horizon(&self, remaining: u32) -> u32 {
        remaining
    }

    fn on_io_complete(&self, job: &mut JobRecord) {
        job.dispatch_count += 1;
    }
}

/// Preemptive Round-Robin.
///
/// Each CPU tenure is capped at `min(quantum, remaining run time)` ticks.
/// Dispatches are counted on every tick the job holds the CPU with its
/// block decision still pending.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: u32,
}

impl RoundRobin {
    /// Create a Round-Robin policy. A zero quantum is raised to one tick.
    pub fn new(quantum: u32) -> Self {
        Self {
            quantum: quantum.max(1),
        }
    }

    /// Configured quantum.
    pub fn quantum(&self) -> u32 {
        self.quantum
    }

    fn fresh_quantum(&self, job: &JobRecord) -> u32 {
        self.quantum.min(job.remaining_run_time().unwrap_or(0))
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self::new(DEFAULT_QUANTUM)
    }
}

impl SchedulingPolicy for RoundRobin {
    fn kind(&self) -> Policy {
        Policy::RoundRobin
    }

    fn initialize(&self, job: &mut JobRecord) {
        job.run_state = RunState::Active(job.total_service_time);
        job.remaining_quantum = Some(self.fresh_quantum(job));
        job.block_state = BlockState::Undetermined;
        job.io_state = IoState::Undetermined;
        job.dispatch_count = 0;
        job.cpu_time_accumulated = job.total_service_time;
    }

    fn on_pending_decision(&self, job: &mut JobRecord) {
        job.dispatch_count += 1;
    }

    fn block_horizon(&self, remaining: u32) -> u32 {
        self.quantum.min(remaining)
    }

    fn consume_quantum(&self, job: &mut JobRecord) -> bool {
        match job.remaining_quantum {
            // A zero quantum belongs to a job with no work left; its drain
            // tick does not count against the quantum.
            Some(0) | None => false,
            Some(left) => {
                job.remaining_quantum = Some(left - 1);
                left == 1
            }
        }
    }

    fn on_block(&self, job: &mut JobRecord) {
        job.remaining_quantum = Some(self.fresh_quantum(job));
    }

    fn on_quantum_expired(&self, job: &mut JobRecord) {
        job.remaining_quantum = Some(self.fresh_quantum(job));
        if job.block_state == BlockState::WillNotBlockThisBurst {
            job.block_state = BlockState::Undetermined;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use procsim_test_helpers::job;
    use procsim_types::JobId;

    fn record(service: u32) -> JobRecord {
        JobRecord::from_descriptor(JobId(0), &job("A", service, 50))
    }

    #[test]
    fn test_fcfs_initialize() {
        let mut job = record(12);
        Fcfs.initialize(&mut job);
        assert_eq!(job.run_state, RunState::Active(12));
        assert_eq!(job.dispatch_count, 1);
        assert_eq!(job.remaining_quantum, None);
        assert_eq!(job.cpu_time_accumulated, 12);
        assert_eq!(Fcfs.block_horizon(12), 12);
    }

    #[test]
    fn test_round_robin_initialize_caps_quantum() {
        let policy = RoundRobin::default();

        let mut long = record(12);
        policy.initialize(&mut long);
        assert_eq!(long.remaining_quantum, Some(5));
        assert_eq!(long.dispatch_count, 0);

        let mut short = record(3);
        policy.initialize(&mut short);
        assert_eq!(short.remaining_quantum, Some(3));
        assert_eq!(policy.block_horizon(3), 3);
        assert_eq!(policy.block_horizon(30), 5);
    }

    #[test]
    fn test_round_robin_quantum_expires_once() {
        let policy = RoundRobin::new(2);
        let mut job = record(10);
        policy.initialize(&mut job);

        assert!(!policy.consume_quantum(&mut job));
        assert!(policy.consume_quantum(&mut job));
        assert_eq!(job.remaining_quantum, Some(0));
        // Spent quantum stays spent.
        assert!(!policy.consume_quantum(&mut job));
    }

    #[test]
    fn test_round_robin_expiry_reopens_block_decision() {
        let policy = RoundRobin::default();
        let mut job = record(10);
        policy.initialize(&mut job);
        job.run_state = RunState::Active(3);
        job.block_state = BlockState::WillNotBlockThisBurst;

        policy.on_quantum_expired(&mut job);
        assert_eq!(job.block_state, BlockState::Undetermined);
        assert_eq!(job.remaining_quantum, Some(3));
    }

    #[test]
    fn test_zero_quantum_is_raised() {
        assert_eq!(RoundRobin::new(0).quantum(), 1);
    }
}
