use std::error::Error;

use clap::Args;
use lfs_bench::{run_timing, TimingReport};

use super::ConfigOverrides;

#[derive(Args, Debug)]
pub struct TimingArgs {
    #[command(flatten)]
    pub overrides: ConfigOverrides,
    /// Length of each timed sequence.
    #[arg(long)]
    pub size: Option<usize>,
    /// Queries per (strategy, shape).
    #[arg(long)]
    pub queries: Option<usize>,
}

pub fn run(args: &TimingArgs) -> Result<(), Box<dyn Error>> {
    let mut config = args.overrides.load()?;
    config.timing.enabled = true;
    if let Some(size) = args.size {
        config.timing.size = size;
    }
    if let Some(queries) = args.queries {
        config.timing.queries = queries;
    }
    config.validate()?;
    let report = run_timing(&config)?;
    print_report(&report);
    Ok(())
}

pub(crate) fn print_report(report: &TimingReport) {
    println!(
        "timing: {} queries per shape over sequences of {}",
        report.queries, report.size
    );
    for timing in &report.strategies {
        let per_guess = timing
            .nanos_per_guess
            .map(|nanos| format!("{nanos:.3} ns/guess"))
            .unwrap_or_else(|| "no guesses".to_string());
        println!(
            "  {:<16} {:>10.6} s  {:>12} guesses  {}",
            timing.strategy.name(),
            timing.total_seconds,
            timing.total_guesses,
            per_guess
        );
    }
}
