//! procsim Simulator
//!
//! The outer layers around the scheduling engine: loading jobs, picking a
//! policy, running the simulation and presenting its results.
//!
//! # Architecture
//!
//! The simulator builds on `procsim-simulation` to provide:
//!
//! - **Workloads**: tab-separated job files, or seeded random job sets
//! - **Configuration**: policy, seed, queue capacity and quantum
//! - **Reporting**: the classic text table, or JSON
//!
//! # Example
//!
//! ```ignore
//! use procsim_simulator::{render_text, Simulator, SimulatorConfig};
//! use procsim_types::Policy;
//!
//! let config = SimulatorConfig::new(Policy::RoundRobin).with_seed(12345);
//! let outcome = Simulator::new(config).run_file("jobs.txt".as_ref())?;
//! print!("{}", render_text(&outcome));
//! ```

pub mod config;
pub mod error;
pub mod report;
pub mod runner;
pub mod workload;

pub use config::SimulatorConfig;
pub use error::SimulatorError;
pub use report::{render_json, render_text, JsonReport};
pub use runner::Simulator;
pub use workload::{load_jobs, parse_jobs, DescriptorError, RandomWorkload, WorkloadGenerator};
