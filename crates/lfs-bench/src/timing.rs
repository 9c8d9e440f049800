use std::hint::black_box;
use std::time::{Duration, Instant};

use lfs_core::{LfsError, Query, RandomSource, RngHandle, Sequence};
use lfs_search::Strategy;
use lfs_shapes::{generate, Shape, ShapeParams};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::BenchConfig;

/// Substreams at and above this offset are reserved for timing passes, so
/// they never collide with the per-shape sweep streams.
const TIMING_SUBSTREAM_BASE: u64 = 1 << 32;

/// Substream of the query batch shared by every timed shape and strategy.
const TIMING_QUERY_SUBSTREAM: u64 = TIMING_SUBSTREAM_BASE - 1;

/// Wall-clock cost of one strategy over one shape's query batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimingSample {
    /// Strategy timed.
    pub strategy: Strategy,
    /// Shape of the searched sequence.
    pub shape: Shape,
    /// Queries executed.
    pub queries: usize,
    /// Time spent across all queries.
    pub elapsed: Duration,
    /// Guesses charged across all queries.
    pub total_guesses: u64,
}

/// Totals of one strategy across every timed shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyTiming {
    /// Strategy timed.
    pub strategy: Strategy,
    /// Per-shape samples, in configured shape order.
    pub samples: Vec<TimingSample>,
    /// Sum of the samples' elapsed time, in seconds.
    pub total_seconds: f64,
    /// Sum of the samples' guesses.
    pub total_guesses: u64,
    /// Average cost of one guess; `None` when no guess was charged.
    pub nanos_per_guess: Option<f64>,
}

impl StrategyTiming {
    /// Aggregates per-shape samples.
    pub fn from_samples(strategy: Strategy, samples: Vec<TimingSample>) -> Self {
        let total_seconds: f64 = samples
            .iter()
            .map(|sample| sample.elapsed.as_secs_f64())
            .sum();
        let total_guesses: u64 = samples.iter().map(|sample| sample.total_guesses).sum();
        let nanos_per_guess =
            (total_guesses > 0).then(|| total_seconds * 1e9 / total_guesses as f64);
        Self {
            strategy,
            samples,
            total_seconds,
            total_guesses,
            nanos_per_guess,
        }
    }
}

/// Result of the timing pass for every configured strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingReport {
    /// Length of every timed sequence.
    pub size: usize,
    /// Queries per (strategy, shape).
    pub queries: usize,
    /// One entry per strategy, in configured order.
    pub strategies: Vec<StrategyTiming>,
}

/// Times `strategy` over a prepared sequence and query batch.
pub fn time_queries(
    strategy: Strategy,
    shape: Shape,
    sequence: &Sequence,
    queries: &[Query],
) -> TimingSample {
    let mut total_guesses = 0;
    let start = Instant::now();
    for &query in queries {
        let outcome = strategy.search(black_box(sequence), black_box(query));
        total_guesses += black_box(outcome).guesses;
    }
    let elapsed = start.elapsed();
    TimingSample {
        strategy,
        shape,
        queries: queries.len(),
        elapsed,
        total_guesses,
    }
}

/// Generates one `size`-element sequence of `shape` and `query_count`
/// queries from `rng`, then times `strategy` over them.
pub fn run_timing_pass<R>(
    strategy: Strategy,
    shape: Shape,
    size: usize,
    query_count: usize,
    params: &ShapeParams,
    rng: &mut R,
) -> Result<TimingSample, LfsError>
where
    R: RandomSource + ?Sized,
{
    let sequence = generate(shape, size, params, rng)?;
    let queries = draw_queries(query_count, params, rng)?;
    Ok(time_queries(strategy, shape, &sequence, &queries))
}

fn draw_queries<R>(count: usize, params: &ShapeParams, rng: &mut R) -> Result<Vec<Query>, LfsError>
where
    R: RandomSource + ?Sized,
{
    if count == 0 {
        return Err(LfsError::invalid_argument(
            "timing-params",
            "a timing pass needs at least one query",
        ));
    }
    (0..count)
        .map(|_| Query::new(rng.next_uniform(0, params.max_value)))
        .collect()
}

/// The query batch the timing pass runs against every shape.
pub fn timing_queries(config: &BenchConfig) -> Result<Vec<Query>, LfsError> {
    let mut rng = RngHandle::for_substream(config.seed, TIMING_QUERY_SUBSTREAM);
    draw_queries(config.timing.queries, &config.shape_params, &mut rng)
}

/// The sequence the timing pass searches for `shape`.
pub fn timing_sequence(config: &BenchConfig, shape: Shape) -> Result<Sequence, LfsError> {
    let mut rng = RngHandle::for_substream(config.seed, TIMING_SUBSTREAM_BASE + shape.ordinal());
    generate(shape, config.timing.size, &config.shape_params, &mut rng)
}

/// Times every configured strategy against every configured shape.
///
/// Runs on the calling thread. One query batch is drawn up front and shared
/// by every shape; each shape's sequence is generated once and searched by
/// every strategy.
pub fn run_timing(config: &BenchConfig) -> Result<TimingReport, LfsError> {
    config.timing.validate()?;
    let queries = timing_queries(config)?;
    let sequences = config
        .shapes
        .iter()
        .map(|&shape| Ok((shape, timing_sequence(config, shape)?)))
        .collect::<Result<Vec<(Shape, Sequence)>, LfsError>>()?;

    let mut strategies = Vec::with_capacity(config.strategies.len());
    for &strategy in &config.strategies {
        let mut samples = Vec::with_capacity(sequences.len());
        for (shape, sequence) in &sequences {
            let sample = time_queries(strategy, *shape, sequence, &queries);
            info!(
                strategy = strategy.name(),
                shape = shape.name(),
                seconds = sample.elapsed.as_secs_f64(),
                "timing sample"
            );
            samples.push(sample);
        }
        let totals = StrategyTiming::from_samples(strategy, samples);
        info!(
            strategy = strategy.name(),
            seconds = totals.total_seconds,
            guesses = totals.total_guesses,
            nanos_per_guess = totals.nanos_per_guess.unwrap_or(f64::NAN),
            "timing total"
        );
        strategies.push(totals);
    }
    Ok(TimingReport {
        size: config.timing.size,
        queries: config.timing.queries,
        strategies,
    })
}
