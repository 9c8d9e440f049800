use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use lfs_core::errors::{ErrorInfo, LfsError};
use lfs_search::Strategy;
use lfs_shapes::{Shape, ShapeParams};
use serde::{Deserialize, Serialize};

/// YAML-configurable parameters governing a benchmark run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Master seed; every shape and timing pass derives its own substream.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Worker threads for the sweep; zero means one per available core.
    #[serde(default)]
    pub threads: usize,
    /// Value domain of generated sequences and queries.
    #[serde(default)]
    pub shape_params: ShapeParams,
    /// Sequence sizes swept, inclusive.
    #[serde(default)]
    pub sizes: SizeRange,
    /// Randomized trials per (shape, strategy, size).
    #[serde(default = "default_trials_per_size")]
    pub trials_per_size: usize,
    /// Shapes to sweep, in output order.
    #[serde(default = "default_shapes")]
    pub shapes: Vec<Shape>,
    /// Strategies to run, in column order.
    #[serde(default = "default_strategies")]
    pub strategies: Vec<Strategy>,
    /// Cross-check every outcome against the linear scan.
    #[serde(default = "default_verify")]
    pub verify: bool,
    /// Fixed-size timing pass.
    #[serde(default)]
    pub timing: TimingConfig,
    /// Output locations.
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_seed() -> u64 {
    0x00c0_ffee
}

fn default_trials_per_size() -> usize {
    100
}

fn default_shapes() -> Vec<Shape> {
    Shape::ALL.to_vec()
}

fn default_strategies() -> Vec<Strategy> {
    Strategy::ALL.to_vec()
}

fn default_verify() -> bool {
    true
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            threads: 0,
            shape_params: ShapeParams::default(),
            sizes: SizeRange::default(),
            trials_per_size: default_trials_per_size(),
            shapes: default_shapes(),
            strategies: default_strategies(),
            verify: default_verify(),
            timing: TimingConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl BenchConfig {
    /// Loads and validates a YAML configuration file.
    pub fn load(path: &Path) -> Result<Self, LfsError> {
        let text = fs::read_to_string(path).map_err(|err| {
            LfsError::Config(
                ErrorInfo::new("config-read", "failed to read configuration")
                    .with_context("path", path.display())
                    .with_hint(err.to_string()),
            )
        })?;
        let config = Self::from_yaml_str(&text).map_err(|err| match err {
            LfsError::Config(info) => {
                LfsError::Config(info.with_context("path", path.display()))
            }
            other => other,
        })?;
        Ok(config)
    }

    /// Parses and validates a YAML document.
    pub fn from_yaml_str(text: &str) -> Result<Self, LfsError> {
        let config: BenchConfig = serde_yaml::from_str(text).map_err(|err| {
            LfsError::Config(
                ErrorInfo::new("config-parse", "configuration is not valid YAML")
                    .with_hint(err.to_string()),
            )
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations the runner cannot execute.
    pub fn validate(&self) -> Result<(), LfsError> {
        self.sizes.validate()?;
        self.shape_params.validate()?;
        if self.trials_per_size == 0 {
            return Err(LfsError::invalid_argument(
                "zero-trials",
                "trials_per_size must be at least one",
            ));
        }
        if self.shapes.is_empty() {
            return Err(LfsError::invalid_argument("no-shapes", "at least one shape is required"));
        }
        if self.strategies.is_empty() {
            return Err(LfsError::invalid_argument(
                "no-strategies",
                "at least one strategy is required",
            ));
        }
        if self.timing.enabled {
            self.timing.validate()?;
        }
        Ok(())
    }
}

/// Inclusive range of sequence sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeRange {
    /// Smallest size, at least one.
    #[serde(default = "default_min_size")]
    pub min: usize,
    /// Largest size.
    #[serde(default = "default_max_size")]
    pub max: usize,
}

fn default_min_size() -> usize {
    1
}

fn default_max_size() -> usize {
    1000
}

impl Default for SizeRange {
    fn default() -> Self {
        Self {
            min: default_min_size(),
            max: default_max_size(),
        }
    }
}

impl SizeRange {
    /// Creates the range `min..=max` without validating it.
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Sizes in ascending order.
    pub fn iter(&self) -> RangeInclusive<usize> {
        self.min..=self.max
    }

    /// Number of sizes in the range; zero when inverted.
    pub fn count(&self) -> usize {
        if self.max < self.min {
            0
        } else {
            self.max - self.min + 1
        }
    }

    /// Requires `1 <= min <= max`.
    pub fn validate(&self) -> Result<(), LfsError> {
        if self.min == 0 || self.min > self.max {
            return Err(LfsError::InvalidArgument(
                ErrorInfo::new("size-range", "size range must satisfy 1 <= min <= max")
                    .with_context("min", self.min)
                    .with_context("max", self.max),
            ));
        }
        Ok(())
    }
}

/// Parameters of the wall-clock timing pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Run the timing pass after the sweep.
    #[serde(default = "default_timing_enabled")]
    pub enabled: bool,
    /// Length of the sequence generated per shape.
    #[serde(default = "default_max_size")]
    pub size: usize,
    /// Queries executed per (strategy, shape).
    #[serde(default = "default_timing_queries")]
    pub queries: usize,
}

fn default_timing_enabled() -> bool {
    true
}

fn default_timing_queries() -> usize {
    100_000
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            enabled: default_timing_enabled(),
            size: default_max_size(),
            queries: default_timing_queries(),
        }
    }
}

impl TimingConfig {
    /// Requires a non-empty sequence and at least one query.
    pub fn validate(&self) -> Result<(), LfsError> {
        if self.size == 0 || self.queries == 0 {
            return Err(LfsError::InvalidArgument(
                ErrorInfo::new("timing-params", "timing size and query count must be positive")
                    .with_context("size", self.size)
                    .with_context("queries", self.queries),
            ));
        }
        Ok(())
    }
}

/// Output directory configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving one CSV per shape and `report.json`.
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("out")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}
