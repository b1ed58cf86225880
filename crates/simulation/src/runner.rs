//! The tick-driven scheduling engine.

use crate::{BoundedQueue, QueueError, QueueKind, SimulationError, StatsCollector};
use procsim_core::{RandomnessSource, SchedulingPolicy};
use procsim_types::{
    BlockState, IoState, JobCompletion, JobDescriptor, JobId, JobRecord, RunState,
    SimulationReport, Tick,
};
use tracing::{debug, info, trace, warn};

/// Longest I/O service a job can draw, in ticks.
pub const MAX_IO_TICKS: u32 = 30;

/// What the CPU did during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuEvent {
    /// Ready queue was empty.
    Idle,

    /// Head job ran and keeps the CPU.
    Ran(JobId),

    /// Head job ran and moved to the I/O queue.
    Blocked(JobId),

    /// Head job exhausted its quantum and moved to the ready-queue tail.
    Requeued(JobId),

    /// Head job finished.
    Finished(JobId),
}

impl CpuEvent {
    /// Job that held the CPU, if any.
    pub fn job(&self) -> Option<JobId> {
        match *self {
            CpuEvent::Idle => None,
            CpuEvent::Ran(id)
            | CpuEvent::Blocked(id)
            | CpuEvent::Requeued(id)
            | CpuEvent::Finished(id) => Some(id),
        }
    }
}

/// What the I/O device did during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoEvent {
    /// I/O queue was empty at tick start.
    Idle,

    /// Head job was serviced and still has I/O left.
    Served(JobId),

    /// Head job finished its I/O and moved to the ready-queue tail.
    Returned(JobId),
}

/// Result of a single tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickOutcome {
    /// Wall-clock value of this tick (the first tick is 1).
    pub tick: Tick,

    /// CPU phase result.
    pub cpu: CpuEvent,

    /// I/O phase result.
    pub io: IoEvent,

    /// Completion record, if a job finished this tick.
    pub completed: Option<JobCompletion>,
}

/// Everything a finished run produces.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationOutcome {
    /// Per-job records in completion order.
    pub completions: Vec<JobCompletion>,

    /// Aggregate statistics.
    pub report: SimulationReport,
}

/// Single-CPU, single-device scheduling engine.
///
/// Every job is owned by exactly one of the ready queue, the I/O queue, or
/// the finished set. Each tick the engine observes both queue heads, then
/// runs the CPU phase and the I/O phase in that order against those heads,
/// so a job that blocks during the CPU phase is first serviced by the I/O
/// device on the following tick.
pub struct SchedulingEngine<P: SchedulingPolicy, R: RandomnessSource> {
    policy: P,
    rng: R,
    jobs: Vec<JobRecord>,
    ready: BoundedQueue,
    io: BoundedQueue,
    wall_clock: Tick,
    completions: Vec<JobCompletion>,
}

impl<P: SchedulingPolicy, R: RandomnessSource> SchedulingEngine<P, R> {
    /// Load jobs into the ready queue under `policy`.
    ///
    /// Both queues are bounded by `capacity`. Loading more jobs than that is
    /// a sizing error and fails with `CapacityExceeded`.
    pub fn new(
        policy: P,
        rng: R,
        descriptors: &[JobDescriptor],
        capacity: usize,
    ) -> Result<Self, SimulationError> {
        let mut ready = BoundedQueue::new(capacity);
        let mut jobs = Vec::with_capacity(descriptors.len());

        for (index, descriptor) in descriptors.iter().enumerate() {
            let id = JobId(index);
            let mut record = JobRecord::from_descriptor(id, descriptor);
            policy.initialize(&mut record);
            ready
                .push(id)
                .map_err(|e| capacity_exceeded(QueueKind::Ready, e))?;
            jobs.push(record);
        }

        debug!(
            policy = %policy.kind(),
            jobs = jobs.len(),
            capacity,
            "Loaded jobs into ready queue"
        );

        Ok(Self {
            policy,
            rng,
            jobs,
            ready,
            io: BoundedQueue::new(capacity),
            wall_clock: 0,
            completions: Vec::new(),
        })
    }

    /// Whether both queues are empty.
    pub fn is_done(&self) -> bool {
        self.ready.is_empty() && self.io.is_empty()
    }

    /// Advance the simulation by one tick.
    ///
    /// Returns `Ok(None)` without advancing the clock once both queues are
    /// empty.
    pub fn tick(&mut self) -> Result<Option<TickOutcome>, SimulationError> {
        if self.is_done() {
            return Ok(None);
        }

        self.wall_clock += 1;
        let now = self.wall_clock;

        // Both heads are observed before either phase mutates a queue.
        let ready_head = self.ready.peek_head();
        let io_head = self.io.peek_head();

        let (cpu, completed) = match ready_head {
            Some(id) => self.cpu_phase(id, now)?,
            None => {
                self.ready.record_idle();
                (CpuEvent::Idle, None)
            }
        };

        let io = match io_head {
            Some(id) => self.io_phase(id)?,
            None => {
                self.io.record_idle();
                IoEvent::Idle
            }
        };

        trace!(tick = now, ?cpu, ?io, "Tick complete");
        self.observe_ownership();

        Ok(Some(TickOutcome {
            tick: now,
            cpu,
            io,
            completed,
        }))
    }

    /// Tick until both queues drain.
    pub fn run(&mut self) -> Result<SimulationOutcome, SimulationError> {
        info!(
            policy = %self.policy.kind(),
            jobs = self.jobs.len(),
            "Starting simulation"
        );

        while self.tick()?.is_some() {}

        let outcome = SimulationOutcome {
            completions: self.completions.clone(),
            report: self.report(),
        };

        info!(
            wall_clock = self.wall_clock,
            cpu_utilization = outcome.report.cpu.utilization,
            io_utilization = outcome.report.io.utilization,
            "Simulation finished"
        );

        Ok(outcome)
    }

    /// Aggregate statistics for the ticks executed so far.
    pub fn report(&self) -> SimulationReport {
        StatsCollector::collect(&self.ready, &self.io, &self.jobs, self.wall_clock)
    }

    /// Ticks executed so far.
    pub fn wall_clock(&self) -> Tick {
        self.wall_clock
    }

    /// Completion records so far, in completion order.
    pub fn completions(&self) -> &[JobCompletion] {
        &self.completions
    }

    /// All job records, in input order.
    pub fn jobs(&self) -> &[JobRecord] {
        &self.jobs
    }

    /// A single job record.
    pub fn job(&self, id: JobId) -> Option<&JobRecord> {
        self.jobs.get(id.index())
    }

    /// The ready queue.
    pub fn ready_queue(&self) -> &BoundedQueue {
        &self.ready
    }

    /// The I/O queue.
    pub fn io_queue(&self) -> &BoundedQueue {
        &self.io
    }

    /// The scheduling policy.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// The randomness source.
    pub fn rng(&self) -> &R {
        &self.rng
    }

    fn cpu_phase(
        &mut self,
        id: JobId,
        now: Tick,
    ) -> Result<(CpuEvent, Option<JobCompletion>), SimulationError> {
        let job = &mut self.jobs[id.index()];

        // Dispatch counting and the block decision only apply while the
        // decision is pending. Jobs with fewer than two ticks left stay
        // pending.
        if job.block_state == BlockState::Undetermined {
            self.policy.on_pending_decision(job);

            if let Some(remaining) = job.remaining_run_time().filter(|&r| r >= 2) {
                let roll = self.rng.percent();
                job.block_state = if roll < job.block_probability.percent() {
                    let horizon = self.policy.block_horizon(remaining);
                    BlockState::WillBlockIn(self.rng.uniform_int(1, horizon + 1))
                } else {
                    BlockState::WillNotBlockThisBurst
                };
                trace!(job = %job.name, roll, decision = ?job.block_state, "Block decision");
            }
        }

        // The tick that takes a job from zero remaining to finished is idle.
        let quantum_expired = match job.run_state {
            RunState::Active(0) => {
                self.ready.record_idle();
                job.run_state = RunState::Finished;
                self.policy.consume_quantum(job)
            }
            RunState::Active(remaining) => {
                self.ready.record_busy();
                job.run_state = RunState::Active(remaining - 1);
                self.policy.consume_quantum(job)
            }
            RunState::Finished => {
                debug_assert!(false, "finished {id} still in ready queue");
                false
            }
        };

        if let BlockState::WillBlockIn(n) = job.block_state {
            if n > 0 {
                job.block_state = BlockState::WillBlockIn(n - 1);
            }
        }

        if job.block_state == BlockState::WillBlockIn(0) {
            job.block_state = BlockState::Undetermined;
            job.io_state = IoState::Undetermined;
            job.block_count += 1;
            self.policy.on_block(job);
            debug!(
                tick = now,
                job = %job.name,
                remaining = ?job.remaining_run_time(),
                "Job blocked for I/O"
            );

            let popped = self.ready.pop();
            debug_assert_eq!(popped, Some(id));
            self.io
                .push(id)
                .map_err(|e| capacity_exceeded(QueueKind::Io, e))?;
            return Ok((CpuEvent::Blocked(id), None));
        }

        if quantum_expired {
            self.policy.on_quantum_expired(job);
            debug!(
                tick = now,
                job = %job.name,
                remaining = ?job.remaining_run_time(),
                "Quantum expired, job requeued"
            );

            let popped = self.ready.pop();
            debug_assert_eq!(popped, Some(id));
            self.ready
                .push(id)
                .map_err(|e| capacity_exceeded(QueueKind::Ready, e))?;
            return Ok((CpuEvent::Requeued(id), None));
        }

        if job.is_finished() {
            job.finish_tick = Some(now);
            let completion = job.completion();
            info!(
                tick = now,
                job = %job.name,
                dispatches = job.dispatch_count,
                blocks = job.block_count,
                io_time = job.io_time_accumulated,
                "Job finished"
            );

            let popped = self.ready.pop();
            debug_assert_eq!(popped, Some(id));
            if let Some(completion) = &completion {
                self.completions.push(completion.clone());
            }
            return Ok((CpuEvent::Finished(id), completion));
        }

        Ok((CpuEvent::Ran(id), None))
    }

    fn io_phase(&mut self, id: JobId) -> Result<IoEvent, SimulationError> {
        let job = &mut self.jobs[id.index()];

        let left = match job.io_state {
            IoState::Remaining(left) => left,
            IoState::Undetermined => {
                // A job that blocked with no CPU work left gets a fixed one-tick service.
                let duration = if job.remaining_run_time() == Some(0) {
                    1
                } else {
                    self.rng.uniform_int(1, MAX_IO_TICKS + 1)
                };
                job.io_time_accumulated += u64::from(duration);
                trace!(job = %job.name, duration, "I/O duration drawn");
                duration
            }
        };

        self.io.record_busy();
        let left = left.saturating_sub(1);
        if left > 0 {
            job.io_state = IoState::Remaining(left);
            return Ok(IoEvent::Served(id));
        }

        job.io_state = IoState::Undetermined;
        self.policy.on_io_complete(job);
        debug!(job = %job.name, "I/O complete, job returned to ready queue");

        let popped = self.io.pop();
        debug_assert_eq!(popped, Some(id));
        self.ready
            .push(id)
            .map_err(|e| capacity_exceeded(QueueKind::Ready, e))?;
        Ok(IoEvent::Returned(id))
    }

    /// Check that every job sits in exactly one place. Debug builds only.
    fn observe_ownership(&self) {
        if !cfg!(debug_assertions) {
            return;
        }

        for job in &self.jobs {
            let in_ready = self.ready.iter().filter(|&q| q == job.id).count();
            let in_io = self.io.iter().filter(|&q| q == job.id).count();
            let finished = usize::from(job.is_finished());
            debug_assert_eq!(
                in_ready + in_io + finished,
                1,
                "{} held by {in_ready} ready slots, {in_io} I/O slots, finished={}",
                job.id,
                job.is_finished()
            );
        }
    }
}

fn capacity_exceeded(queue: QueueKind, err: QueueError) -> SimulationError {
    let err = SimulationError::from_queue(queue, err);
    warn!(error = %err, "Aborting simulation");
    err
}
