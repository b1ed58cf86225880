//! Deterministic scheduling simulation.
//!
//! This crate provides the tick-driven engine that moves jobs between a
//! single CPU (the ready queue) and a single I/O device (the I/O queue).
//! Given the same seed and the same jobs, it produces identical results
//! every run.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                  SchedulingEngine                       │
//! │                                                         │
//! │  ┌───────────────────────┐   ┌───────────────────────┐  │
//! │  │  ready: BoundedQueue  │◄──│   io: BoundedQueue    │  │
//! │  │  head runs on the CPU │──►│  head served by I/O   │  │
//! │  └───────────┬───────────┘   └───────────────────────┘  │
//! │              │                                          │
//! │              ▼                                          │
//! │  ┌────────────────────────────────────────────────────┐ │
//! │  │  per tick: CPU phase, then I/O phase, both against │ │
//! │  │  the queue heads observed at tick start            │ │
//! │  └────────────────────────┬───────────────────────────┘ │
//! │                           │                             │
//! │                           ▼                             │
//! │  ┌────────────────────────────────────────────────────┐ │
//! │  │  StatsCollector → SimulationReport                 │ │
//! │  └────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────┘
//! ```

mod error;
mod policy;
mod queue;
mod runner;
mod stats;

pub use error::{QueueError, QueueKind, SimulationError};
pub use policy::{Fcfs, RoundRobin, DEFAULT_QUANTUM};
pub use queue::BoundedQueue;
pub use runner::{
    CpuEvent, IoEvent, SchedulingEngine, SimulationOutcome, TickOutcome, MAX_IO_TICKS,
};
pub use stats::StatsCollector;

/// Default bound on jobs held by either queue.
pub const DEFAULT_QUEUE_CAPACITY: usize = 256;
