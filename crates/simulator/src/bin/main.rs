//! procsim CLI
//!
//! Simulates a set of jobs on one CPU and one I/O device and prints
//! per-job and aggregate statistics.

use clap::{ArgGroup, Parser};
use procsim_core::DEFAULT_SEED;
use procsim_simulation::{SimulationOutcome, DEFAULT_QUANTUM, DEFAULT_QUEUE_CAPACITY};
use procsim_simulator::{render_json, render_text, RandomWorkload, Simulator, SimulatorConfig};
use procsim_types::Policy;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "procsim")]
#[command(about = "FCFS and Round-Robin CPU scheduling simulator")]
#[command(version)]
#[command(group(ArgGroup::new("policy").required(true).args(["round_robin", "fcfs"])))]
struct Cli {
    /// Schedule with preemptive Round-Robin
    #[arg(short = 'r', long)]
    round_robin: bool,

    /// Schedule first-come-first-served
    #[arg(short = 'f', long)]
    fcfs: bool,

    /// Job file, one `name<TAB>service time<TAB>probability` per line
    #[arg(required_unless_present = "random")]
    file: Option<PathBuf>,

    /// Simulate N generated jobs instead of a job file
    #[arg(long, value_name = "N", conflicts_with = "file")]
    random: Option<usize>,

    /// Random seed
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Bound on jobs held by either queue
    #[arg(long, default_value_t = DEFAULT_QUEUE_CAPACITY)]
    capacity: usize,

    /// Round-Robin quantum in ticks
    #[arg(long, default_value_t = DEFAULT_QUANTUM)]
    quantum: u32,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn policy(&self) -> Policy {
        if self.fcfs {
            Policy::Fcfs
        } else {
            Policy::RoundRobin
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = SimulatorConfig::new(cli.policy())
        .with_seed(cli.seed)
        .with_queue_capacity(cli.capacity)
        .with_quantum(cli.quantum);
    let simulator = Simulator::new(config);

    let outcome: SimulationOutcome = match (&cli.file, cli.random) {
        (Some(path), _) => simulator.run_file(path)?,
        (None, Some(count)) => simulator.run_generated(&mut RandomWorkload::new(count))?.1,
        (None, None) => return Err("a job file or --random is required".into()),
    };

    if cli.json {
        println!("{}", render_json(cli.policy(), cli.seed, &outcome)?);
    } else {
        print!("{}", render_text(&outcome));
    }

    Ok(())
}
