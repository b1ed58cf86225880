//! Core traits for scheduling policies.

use procsim_types::{JobRecord, Policy};

/// The per-policy rules of the scheduling engine.
///
/// The engine owns the tick loop and the block/I-O model; a policy decides
/// how jobs are seeded before entering the ready queue, how dispatches are
/// counted, and whether bursts are bounded by a quantum. Implementations are:
///
/// - **Stateless across ticks**: all per-job state lives in `JobRecord`
/// - **Deterministic**: no randomness, no I/O
///
/// Dispatch counting stays with the policy on purpose. FCFS counts ready-queue
/// (re)entries, Round-Robin counts ticks spent with a pending block decision,
/// and the two are observably different.
///
/// # Example
///
/// ```ignore
/// impl SchedulingPolicy for Fcfs {
///     fn kind(&self) -> Policy {
///         Policy::Fcfs
///     }
///
///     fn initialize(&self, job: &mut JobRecord) {
///         job.dispatch_count = 1;
///         // ...
///     }
///
///     fn block_horizon(&self, remaining: u32) -> u32 {
///         remaining
///     }
/// }
/// ```
pub trait SchedulingPolicy {
    /// Which discipline this is.
    fn kind(&self) -> Policy;

    /// Seed a job's scheduling fields before it enters the ready queue.
    fn initialize(&self, job: &mut JobRecord);

    /// Called on every CPU tick at which the job's block decision is still
    /// pending, before the decision is attempted.
    fn on_pending_decision(&self, _job: &mut JobRecord) {}

    /// Largest number of ticks a job may run before blocking, given its
    /// remaining run time. The engine draws uniformly from `[1, horizon]`.
    fn block_horizon(&self, remaining: u32) -> u32;

    /// Charge one CPU tick against the job's quantum.
    ///
    /// Returns `true` exactly when this tick exhausted the quantum.
    fn consume_quantum(&self, _job: &mut JobRecord) -> bool {
        false
    }

    /// Called when the job leaves the CPU for the I/O queue.
    fn on_block(&self, _job: &mut JobRecord) {}

    /// Called when the job's quantum ran out and it is about to be requeued
    /// at the ready-queue tail.
    fn on_quantum_expired(&self, _job: &mut JobRecord) {}

    /// Called when the job finishes I/O and re-enters the ready queue.
    fn on_io_complete(&self, _job: &mut JobRecord) {}
}
