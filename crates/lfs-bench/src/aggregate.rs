use lfs_core::errors::{ErrorInfo, LfsError};
use lfs_core::{lerp, Query, RandomSource, SearchOutcome};
use lfs_search::{verify, Strategy};
use lfs_shapes::{generate_into, Shape, ShapeParams};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::SizeRange;

/// Guess-count summary for one (shape, strategy, size).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrialStatistics {
    /// Sequence size the trials ran at.
    pub size: usize,
    /// Number of trials recorded.
    pub trials: u64,
    /// Fewest guesses seen; `u64::MAX` before the first trial.
    pub min_guesses: u64,
    /// Most guesses seen.
    pub max_guesses: u64,
    /// Cumulative mean of the guesses seen so far.
    pub running_average: f64,
    /// Guesses of the most recent trial.
    pub last_sample: u64,
}

impl TrialStatistics {
    /// Empty statistics for `size`.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            trials: 0,
            min_guesses: u64::MAX,
            max_guesses: 0,
            running_average: 0.0,
            last_sample: 0,
        }
    }

    /// Folds in one trial's guess count.
    ///
    /// The mean is updated incrementally, `avg += (g - avg) / (k + 1)`, so after
    /// the last trial it equals the arithmetic mean of every sample.
    pub fn record(&mut self, guesses: u64) {
        self.min_guesses = self.min_guesses.min(guesses);
        self.max_guesses = self.max_guesses.max(guesses);
        let weight = 1.0 / (self.trials + 1) as f64;
        self.running_average = lerp(self.running_average, guesses as f64, weight);
        self.last_sample = guesses;
        self.trials += 1;
    }

    /// Statistics of an explicit list of samples.
    pub fn from_samples(size: usize, samples: impl IntoIterator<Item = u64>) -> Self {
        let mut stats = Self::new(size);
        for guesses in samples {
            stats.record(guesses);
        }
        stats
    }
}

/// Trial state owned by one worker: its random source, a reusable sequence
/// buffer and the count of verification failures seen so far.
#[derive(Debug)]
pub struct TrialBench<'r, R: RandomSource + ?Sized> {
    params: ShapeParams,
    rng: &'r mut R,
    buffer: Vec<u64>,
    verify: bool,
    mismatches: u64,
}

impl<'r, R: RandomSource + ?Sized> TrialBench<'r, R> {
    /// Creates a bench drawing from `rng`, with verification enabled.
    pub fn new(params: ShapeParams, rng: &'r mut R) -> Self {
        Self {
            params,
            rng,
            buffer: Vec::new(),
            verify: true,
            mismatches: 0,
        }
    }

    /// Enables or disables cross-checking against the linear scan.
    pub fn with_verification(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Runs one trial: draws a query, generates a fresh sequence, searches.
    pub fn trial(
        &mut self,
        shape: Shape,
        strategy: Strategy,
        size: usize,
    ) -> Result<SearchOutcome, LfsError> {
        let query = Query::new(self.rng.next_uniform(0, self.params.max_value))?;
        let buffer = std::mem::take(&mut self.buffer);
        let sequence = generate_into(shape, size, &self.params, &mut *self.rng, buffer)?;
        let outcome = strategy.search(&sequence, query);
        if self.verify {
            if let Some(mismatch) = verify(&sequence, query, &outcome) {
                self.mismatches += 1;
                warn!(
                    shape = shape.slug(),
                    strategy = strategy.slug(),
                    size,
                    query = query.value(),
                    %mismatch,
                    "verification failure"
                );
            }
        }
        self.buffer = sequence.into_values();
        Ok(outcome)
    }

    /// Runs `trials` trials at one size and summarises their guess counts.
    pub fn statistics(
        &mut self,
        shape: Shape,
        strategy: Strategy,
        size: usize,
        trials: usize,
    ) -> Result<TrialStatistics, LfsError> {
        if trials == 0 {
            return Err(LfsError::InvalidArgument(
                ErrorInfo::new("zero-trials", "at least one trial per size is required")
                    .with_context("shape", shape.slug())
                    .with_context("strategy", strategy.slug()),
            ));
        }
        let mut stats = TrialStatistics::new(size);
        for _ in 0..trials {
            let outcome = self.trial(shape, strategy, size)?;
            stats.record(outcome.guesses);
        }
        Ok(stats)
    }

    /// One [`TrialStatistics`] per size in `sizes`, ascending.
    pub fn sweep(
        &mut self,
        shape: Shape,
        strategy: Strategy,
        sizes: &SizeRange,
        trials_per_size: usize,
    ) -> Result<Vec<TrialStatistics>, LfsError> {
        sizes.validate()?;
        let mut rows = Vec::with_capacity(sizes.count());
        for size in sizes.iter() {
            let stats = self.statistics(shape, strategy, size, trials_per_size)?;
            debug!(
                shape = shape.slug(),
                strategy = strategy.slug(),
                size,
                average = stats.running_average,
                "size complete"
            );
            rows.push(stats);
        }
        Ok(rows)
    }

    /// Verification failures observed so far.
    pub fn mismatches(&self) -> u64 {
        self.mismatches
    }

    /// Values of the most recently generated sequence.
    pub fn last_sequence(&self) -> &[u64] {
        &self.buffer
    }
}

/// Runs a single verified trial.
pub fn run_trial<R>(
    shape: Shape,
    strategy: Strategy,
    size: usize,
    params: &ShapeParams,
    rng: &mut R,
) -> Result<SearchOutcome, LfsError>
where
    R: RandomSource + ?Sized,
{
    TrialBench::new(*params, rng).trial(shape, strategy, size)
}

/// Runs a verified sweep over `sizes` for one (shape, strategy).
pub fn run_sweep<R>(
    shape: Shape,
    strategy: Strategy,
    sizes: &SizeRange,
    trials_per_size: usize,
    params: &ShapeParams,
    rng: &mut R,
) -> Result<Vec<TrialStatistics>, LfsError>
where
    R: RandomSource + ?Sized,
{
    TrialBench::new(*params, rng).sweep(shape, strategy, sizes, trials_per_size)
}
