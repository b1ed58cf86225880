//! Presentation of simulation results.
//!
//! The text layout is the classic fixed-width table: one row per job in
//! completion order, then system, CPU and I/O summaries.

use procsim_simulation::SimulationOutcome;
use procsim_types::{JobCompletion, Policy, SimulationReport};
use serde::Serialize;
use std::fmt::Write;

const TABLE_HEADER: &str = "   name     CPU time  when done  cpu disp  i/o disp  i/o time";

/// Render the outcome as the fixed-width text report.
pub fn render_text(outcome: &SimulationOutcome) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_text(&mut out, outcome);
    out
}

fn write_text(out: &mut String, outcome: &SimulationOutcome) -> std::fmt::Result {
    let report = &outcome.report;

    writeln!(out, "Processes:")?;
    writeln!(out)?;
    writeln!(out, "{TABLE_HEADER}")?;
    for job in &outcome.completions {
        writeln!(
            out,
            "{:<10} {:>6}     {:>6}    {:>6}    {:>6}    {:>6}",
            job.name,
            job.cpu_time_spent,
            job.finish_tick,
            job.dispatch_count,
            job.io_block_count,
            job.io_time_spent
        )?;
    }

    writeln!(out)?;
    writeln!(out, "System:")?;
    writeln!(
        out,
        "The wall clock time at which the simulation finished: {}",
        report.wall_clock_ticks
    )?;

    writeln!(out)?;
    writeln!(out, "CPU:")?;
    writeln!(out, "Total time spent busy: {}", report.cpu.busy)?;
    writeln!(out, "Total time spent idle: {}", report.cpu.idle)?;
    writeln!(out, "CPU utilization: {:.2}", report.cpu.utilization)?;
    writeln!(out, "Number of dispatches: {}", report.cpu.dispatches)?;
    writeln!(out, "Overall throughput: {:.2}", report.cpu.throughput)?;

    writeln!(out)?;
    writeln!(out, "I/O device:")?;
    writeln!(out, "Total time spent busy: {}", report.io.busy)?;
    writeln!(out, "Total time spent idle: {}", report.io.idle)?;
    writeln!(out, "I/O utilization: {:.2}", report.io.utilization)?;
    writeln!(out, "Number of dispatches: {}", report.io.dispatches)?;
    writeln!(out, "Overall throughput: {:.2}", report.io.throughput)?;

    Ok(())
}

/// Machine-readable form of a run.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub policy: Policy,
    pub seed: u64,
    pub completions: &'a [JobCompletion],
    pub report: &'a SimulationReport,
}

impl<'a> JsonReport<'a> {
    pub fn new(policy: Policy, seed: u64, outcome: &'a SimulationOutcome) -> Self {
        Self {
            policy,
            seed,
            completions: &outcome.completions,
            report: &outcome.report,
        }
    }
}

/// Render the outcome as pretty-printed JSON.
pub fn render_json(
    policy: Policy,
    seed: u64,
    outcome: &SimulationOutcome,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport::new(policy, seed, outcome))
}
