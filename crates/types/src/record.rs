//! Per-job simulation state.
//!
//! A `JobRecord` is created once per descriptor at load time, mutated only
//! while its job sits in the ready or I/O queue, and read-only once the job
//! has finished. The multi-state fields are explicit variants rather than
//! sentinel integers.

use crate::{BlockProbability, JobCompletion, JobDescriptor, JobId, JobName, Tick};
use serde::{Deserialize, Serialize};

/// Remaining CPU work for a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    /// Ticks of service still owed. `Active(0)` means the job has done all of
    /// its work and spends one more (idle) tick on the CPU before finishing.
    Active(u32),

    /// Terminal state.
    Finished,
}

/// Block decision for the current burst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BlockState {
    /// Not yet decided for this burst.
    #[default]
    Undetermined,

    /// Decided: this burst runs to quantum expiry or completion.
    WillNotBlockThisBurst,

    /// Decided: the job leaves for I/O once the countdown reaches zero.
    WillBlockIn(u32),
}

/// I/O service state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IoState {
    /// Entered the I/O queue; duration not yet drawn.
    #[default]
    Undetermined,

    /// Ticks of I/O service left.
    Remaining(u32),
}

/// Mutable simulation state of a single job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    /// Position in the job table.
    pub id: JobId,

    /// Job name.
    pub name: JobName,

    /// Total CPU ticks required. Fixed for the job's lifetime.
    pub total_service_time: u32,

    /// Chance of blocking per burst. Fixed.
    pub block_probability: BlockProbability,

    /// Remaining CPU work.
    pub run_state: RunState,

    /// Block decision for the current burst.
    pub block_state: BlockState,

    /// I/O service state.
    pub io_state: IoState,

    /// Ticks left in the current quantum. Only Round-Robin uses this.
    pub remaining_quantum: Option<u32>,

    /// Times the job was given the CPU, counted per policy.
    pub dispatch_count: u32,

    /// Times the job blocked for I/O.
    pub block_count: u32,

    /// Total I/O ticks drawn for the job.
    pub io_time_accumulated: u64,

    /// CPU time charged to the job.
    pub cpu_time_accumulated: u32,

    /// Tick at which the job finished.
    pub finish_tick: Option<Tick>,
}

impl JobRecord {
    /// Build the initial record for a descriptor.
    ///
    /// Scheduling fields are left for the policy to seed before the job
    /// enters the ready queue.
    pub fn from_descriptor(id: JobId, descriptor: &JobDescriptor) -> Self {
        Self {
            id,
            name: descriptor.name.clone(),
            total_service_time: descriptor.total_service_time,
            block_probability: descriptor.block_probability,
            run_state: RunState::Active(descriptor.total_service_time),
            block_state: BlockState::Undetermined,
            io_state: IoState::Undetermined,
            remaining_quantum: None,
            dispatch_count: 0,
            block_count: 0,
            io_time_accumulated: 0,
            cpu_time_accumulated: 0,
            finish_tick: None,
        }
    }

    /// Remaining CPU ticks, or `None` once finished.
    pub fn remaining_run_time(&self) -> Option<u32> {
        match self.run_state {
            RunState::Active(remaining) => Some(remaining),
            RunState::Finished => None,
        }
    }

    /// Whether the job has reached its terminal state.
    pub fn is_finished(&self) -> bool {
        self.run_state == RunState::Finished
    }

    /// Completion record, available once the job has finished.
    pub fn completion(&self) -> Option<JobCompletion> {
        let finish_tick = self.finish_tick?;
        Some(JobCompletion {
            name: self.name.clone(),
            cpu_time_spent: self.cpu_time_accumulated,
            finish_tick,
            dispatch_count: self.dispatch_count,
            io_block_count: self.block_count,
            io_time_spent: self.io_time_accumulated,
        })
    }
}
