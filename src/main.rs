//! u-cpusched: simulate one CPU scheduling policy over a workload.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use u_cpusched::config::SimConfig;
use u_cpusched::policies::PolicyKind;
use u_cpusched::report;
use u_cpusched::scheduler::Simulation;
use u_cpusched::workload::{
    load_workload, sample_workload, seeded_random_workload, DEFAULT_RANDOM_COUNT,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Discrete-time CPU scheduling simulator.
#[derive(Parser, Debug)]
#[command(name = "u-cpusched", version)]
#[command(about = "Simulate a CPU scheduling policy and report its timeline and metrics")]
struct Cli {
    /// Policy: fcfs, sjf, srtf, priority, rr, mlq, mlfq, lottery, cfs, edf.
    #[arg(short, long)]
    scheduler: String,

    /// Workload file (`id arrival burst priority [deadline]` per line).
    #[arg(short, long, value_name = "FILE", conflicts_with = "random")]
    input: Option<PathBuf>,

    /// Generate N random processes instead of reading a file.
    #[arg(short, long, value_name = "N", num_args = 0..=1)]
    random: Option<Option<usize>>,

    /// Round Robin quantum (overrides the config file).
    #[arg(short, long)]
    quantum: Option<i64>,

    /// Seed for random workloads and the lottery draw.
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with simulation tunables.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Report format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    let policy: PolicyKind = cli.scheduler.parse()?;

    let mut config = match &cli.config {
        Some(path) => SimConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SimConfig::default(),
    };
    if let Some(quantum) = cli.quantum {
        config.quantum = quantum;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    let workload = match (&cli.input, cli.random) {
        (Some(path), _) => load_workload(path)?,
        (None, Some(count)) => {
            seeded_random_workload(count.unwrap_or(DEFAULT_RANDOM_COUNT), config.seed)
        }
        (None, None) => sample_workload(),
    };

    let outcome = Simulation::new(workload)?
        .with_config(config)
        .run(policy)?;

    match cli.format {
        Format::Text => print!("{}", report::render_text(&outcome)),
        Format::Json => println!(
            "{}",
            report::render_json(&outcome).context("failed to serialize report")?
        ),
    }
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
