use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use lfs_bench::{run_benchmark, write_report, BenchmarkReport, CsvSink};
use tracing::{info, warn};

use super::ConfigOverrides;

#[derive(Args, Debug)]
pub struct SweepArgs {
    #[command(flatten)]
    pub overrides: ConfigOverrides,
    /// Output directory for the per-shape CSV files and report.json.
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Worker threads; 0 uses every available core.
    #[arg(long)]
    pub threads: Option<usize>,
    /// Trials per (shape, strategy, size).
    #[arg(long)]
    pub trials: Option<usize>,
    /// Largest sequence size swept.
    #[arg(long)]
    pub max_size: Option<usize>,
    /// Skip the timing pass.
    #[arg(long)]
    pub no_timing: bool,
}

pub fn run(args: &SweepArgs) -> Result<(), Box<dyn Error>> {
    let mut config = args.overrides.load()?;
    if let Some(out) = &args.out {
        config.output.dir = out.clone();
    }
    if let Some(threads) = args.threads {
        config.threads = threads;
    }
    if let Some(trials) = args.trials {
        config.trials_per_size = trials;
    }
    if let Some(max_size) = args.max_size {
        config.sizes.max = max_size;
    }
    if args.no_timing {
        config.timing.enabled = false;
    }
    config.validate()?;

    let mut sink = CsvSink::create(&config.output.dir)?;
    let report = run_benchmark(&config, &mut sink)?;
    let report_path = write_report(sink.dir(), &report)?;
    info!(
        sheets = sink.written().len(),
        report = %report_path.display(),
        "sweep finished"
    );
    if report.total_mismatches() > 0 {
        warn!(
            mismatches = report.total_mismatches(),
            "some outcomes disagreed with the linear scan"
        );
    }
    print_summary(&report);
    Ok(())
}

fn print_summary(report: &BenchmarkReport) {
    for shape in &report.shapes {
        println!("{}", shape.shape);
        for strategy in &shape.strategies {
            println!(
                "  {:<16} mean {:>10.3}  worst {:>6}  at max size {:>10.3}",
                strategy.strategy.name(),
                strategy.mean_guesses,
                strategy.worst_guesses,
                strategy.largest_size_average
            );
        }
    }
    if let Some(timing) = &report.timing {
        super::timing::print_report(timing);
    }
}
