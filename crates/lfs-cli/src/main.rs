use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    config::{self, ConfigArgs},
    sweep::{self, SweepArgs},
    timing::{self, TimingArgs},
    trial::{self, TrialArgs},
};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "lfs", about = "Line-fit search benchmark", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sweep every shape and strategy, writing one CSV per shape and report.json.
    Sweep(SweepArgs),
    /// Time every strategy over fixed-size sequences.
    Timing(TimingArgs),
    /// Run a single search and print its outcome.
    Trial(TrialArgs),
    /// Print the effective configuration as YAML.
    Config(ConfigArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Command::Sweep(args) => sweep::run(&args),
        Command::Timing(args) => timing::run(&args),
        Command::Trial(args) => trial::run(&args),
        Command::Config(args) => config::run(&args),
    }
}

/// Logs go to stderr, filtered by `RUST_LOG` (default `info`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
