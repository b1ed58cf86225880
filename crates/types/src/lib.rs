//! Core types for the procsim scheduling simulator.
//!
//! This crate holds the data model shared by the engine and its outer
//! layers: job identity, the per-job simulation record, the policy
//! selector, and the structured records a finished run produces.

mod identifiers;
mod job;
mod policy;
mod record;
mod report;

pub use identifiers::{JobId, JobName, JobNameError, Tick, MAX_JOB_NAME_LEN};
pub use job::{BlockProbability, BlockProbabilityError, JobDescriptor};
pub use policy::{Policy, UnknownPolicy};
pub use record::{BlockState, IoState, JobRecord, RunState};
pub use report::{DeviceStats, JobCompletion, SimulationReport};
