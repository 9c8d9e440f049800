use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::thread;

use lfs_core::errors::{ErrorInfo, LfsError};
use lfs_core::RngHandle;
use lfs_search::Strategy;
use lfs_shapes::Shape;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::aggregate::{TrialBench, TrialStatistics};
use crate::config::{BenchConfig, SizeRange};
use crate::report::BenchmarkReport;
use crate::sink::SheetSink;
use crate::timing::run_timing;

/// Per-size statistics of one strategy within a sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyColumn {
    /// Strategy the rows belong to.
    pub strategy: Strategy,
    /// One entry per size, ascending.
    pub rows: Vec<TrialStatistics>,
}

/// Everything a sweep produced for one shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeSheet {
    /// Shape the sequences were generated with.
    pub shape: Shape,
    /// Sizes covered by every column.
    pub sizes: SizeRange,
    /// Columns in configured strategy order.
    pub columns: Vec<StrategyColumn>,
    /// The last sequence generated, at the largest size.
    pub sample_sequence: Vec<u64>,
    /// Verification failures across all trials of the shape.
    pub mismatches: u64,
}

/// Number of sweep workers for `shape_count` shapes.
///
/// `requested == 0` means one per available core; never more workers than
/// shapes, never fewer than one.
pub fn worker_count(requested: usize, shape_count: usize) -> usize {
    let requested = if requested == 0 {
        thread::available_parallelism()
            .map(|count| count.get())
            .unwrap_or(1)
    } else {
        requested
    };
    requested.min(shape_count).max(1)
}

/// Sweeps every configured strategy over one shape.
///
/// The shape's random stream is derived from the master seed and the shape
/// alone, so the sheet does not depend on which worker runs it.
pub fn run_shape(config: &BenchConfig, shape: Shape) -> Result<ShapeSheet, LfsError> {
    let mut rng = RngHandle::for_substream(config.seed, shape.ordinal());
    let mut bench =
        TrialBench::new(config.shape_params, &mut rng).with_verification(config.verify);
    let mut columns = Vec::with_capacity(config.strategies.len());
    for &strategy in &config.strategies {
        let rows = bench.sweep(shape, strategy, &config.sizes, config.trials_per_size)?;
        columns.push(StrategyColumn { strategy, rows });
    }
    Ok(ShapeSheet {
        shape,
        sizes: config.sizes,
        columns,
        sample_sequence: bench.last_sequence().to_vec(),
        mismatches: bench.mismatches(),
    })
}

/// Sweeps all configured shapes on a pool of worker threads.
///
/// Workers claim shape indices from a shared atomic counter until none are
/// left; each claimed shape is processed by exactly one worker. Sheets are
/// returned in configured shape order.
pub fn run_sheets(config: &BenchConfig) -> Result<Vec<ShapeSheet>, LfsError> {
    config.validate()?;
    let shapes = config.shapes.as_slice();
    let workers = worker_count(config.threads, shapes.len());
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|err| {
            LfsError::Worker(
                ErrorInfo::new("thread-pool", "failed to start the sweep workers")
                    .with_context("workers", workers)
                    .with_hint(err.to_string()),
            )
        })?;
    info!(workers, shapes = shapes.len(), "starting sweep");

    let next = AtomicUsize::new(0);
    let finished: Mutex<Vec<(usize, Result<ShapeSheet, LfsError>)>> =
        Mutex::new(Vec::with_capacity(shapes.len()));
    let joined = panic::catch_unwind(AssertUnwindSafe(|| {
        pool.scope(|scope| {
            for worker in 0..workers {
                let next = &next;
                let finished = &finished;
                scope.spawn(move |_| loop {
                    let index = next.fetch_add(1, Ordering::Relaxed);
                    let Some(&shape) = shapes.get(index) else {
                        break;
                    };
                    info!(worker, shape = shape.name(), "starting shape");
                    let sheet = run_shape(config, shape);
                    if let Ok(sheet) = &sheet {
                        info!(
                            worker,
                            shape = shape.name(),
                            mismatches = sheet.mismatches,
                            "done with shape"
                        );
                    }
                    finished
                        .lock()
                        .unwrap_or_else(PoisonError::into_inner)
                        .push((index, sheet));
                });
            }
        })
    }));
    if joined.is_err() {
        return Err(LfsError::Worker(ErrorInfo::new(
            "worker-panic",
            "a sweep worker panicked",
        )));
    }

    let mut finished = finished.into_inner().unwrap_or_else(PoisonError::into_inner);
    finished.sort_by_key(|(index, _)| *index);
    finished.into_iter().map(|(_, sheet)| sheet).collect()
}

/// Runs the full benchmark: the parallel sweep, one sheet per shape handed to
/// `sink`, then the single-threaded timing pass when enabled.
pub fn run_benchmark(
    config: &BenchConfig,
    sink: &mut dyn SheetSink,
) -> Result<BenchmarkReport, LfsError> {
    let sheets = run_sheets(config)?;
    for sheet in &sheets {
        sink.write_sheet(sheet)?;
    }
    let timing = if config.timing.enabled {
        Some(run_timing(config)?)
    } else {
        None
    };
    BenchmarkReport::new(config, &sheets, timing)
}
