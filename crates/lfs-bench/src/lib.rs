#![deny(missing_docs)]
#![doc = "Benchmark orchestration: randomized trials, per-size statistics, the shape worker pool, timing passes and result sinks."]

/// Trial execution and guess-count statistics.
pub mod aggregate;
/// YAML-configurable run parameters.
pub mod config;
/// Stable hashing of configurations.
pub mod hash;
/// Run report assembly.
pub mod report;
/// Worker pool over shapes.
pub mod runner;
/// Canonical JSON and YAML helpers.
pub mod serde;
/// Output sinks for per-shape sheets.
pub mod sink;
/// Wall-clock timing passes.
pub mod timing;

pub use aggregate::{run_sweep, run_trial, TrialBench, TrialStatistics};
pub use config::{BenchConfig, OutputConfig, SizeRange, TimingConfig};
pub use report::{BenchmarkReport, ShapeSummary, StrategySummary};
pub use runner::{run_benchmark, run_shape, run_sheets, worker_count, ShapeSheet, StrategyColumn};
pub use sink::{sheet_records, write_report, CsvSink, SheetSink};
pub use timing::{
    run_timing, run_timing_pass, time_queries, timing_queries, timing_sequence, StrategyTiming,
    TimingReport, TimingSample,
};
