//! Core seams for procsim.
//!
//! The scheduling engine is written against two traits defined here:
//!
//! - [`RandomnessSource`]: the only source of nondeterminism, injected into
//!   the engine rather than read from global state.
//! - [`SchedulingPolicy`]: the per-policy rules (job initialization, dispatch
//!   counting, quantum handling) the engine defers to.

mod random;
mod traits;

pub use random::{RandomnessSource, SeededRandomness, DEFAULT_SEED};
pub use traits::SchedulingPolicy;
