use lfs_core::errors::LfsError;
use lfs_core::provenance::{RunProvenance, SchemaVersion};
use lfs_search::Strategy;
use lfs_shapes::Shape;
use serde::{Deserialize, Serialize};

use crate::config::{BenchConfig, SizeRange};
use crate::hash::stable_hash_string;
use crate::runner::{ShapeSheet, StrategyColumn};
use crate::timing::TimingReport;

/// Condensed view of one strategy column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategySummary {
    /// Strategy summarised.
    pub strategy: Strategy,
    /// Mean of the per-size average guess counts.
    pub mean_guesses: f64,
    /// Largest guess count seen at any size.
    pub worst_guesses: u64,
    /// Average guess count at the largest size.
    pub largest_size_average: f64,
}

impl StrategySummary {
    /// Summarises a column; an empty column yields zeros.
    pub fn from_column(column: &StrategyColumn) -> Self {
        let rows = &column.rows;
        let mean_guesses = if rows.is_empty() {
            0.0
        } else {
            rows.iter().map(|row| row.running_average).sum::<f64>() / rows.len() as f64
        };
        Self {
            strategy: column.strategy,
            mean_guesses,
            worst_guesses: rows.iter().map(|row| row.max_guesses).max().unwrap_or(0),
            largest_size_average: rows.last().map(|row| row.running_average).unwrap_or(0.0),
        }
    }
}

/// Condensed view of one shape sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeSummary {
    /// Shape summarised.
    pub shape: Shape,
    /// Sizes covered.
    pub sizes: SizeRange,
    /// Verification failures recorded for the shape.
    pub mismatches: u64,
    /// One entry per strategy column.
    pub strategies: Vec<StrategySummary>,
}

impl ShapeSummary {
    /// Summarises a sheet.
    pub fn from_sheet(sheet: &ShapeSheet) -> Self {
        Self {
            shape: sheet.shape,
            sizes: sheet.sizes,
            mismatches: sheet.mismatches,
            strategies: sheet.columns.iter().map(StrategySummary::from_column).collect(),
        }
    }
}

/// Report persisted next to the CSV sheets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// Seed, configuration hash and tool versions.
    pub provenance: RunProvenance,
    /// Trials run per (shape, strategy, size).
    pub trials_per_size: usize,
    /// One summary per shape, in configured order.
    pub shapes: Vec<ShapeSummary>,
    /// Timing pass, when it ran.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub timing: Option<TimingReport>,
}

impl BenchmarkReport {
    /// Assembles the report for a finished run.
    pub fn new(
        config: &BenchConfig,
        sheets: &[ShapeSheet],
        timing: Option<TimingReport>,
    ) -> Result<Self, LfsError> {
        Ok(Self {
            provenance: provenance_for(config)?,
            trials_per_size: config.trials_per_size,
            shapes: sheets.iter().map(ShapeSummary::from_sheet).collect(),
            timing,
        })
    }

    /// Verification failures across every shape.
    pub fn total_mismatches(&self) -> u64 {
        self.shapes.iter().map(|shape| shape.mismatches).sum()
    }
}

/// Provenance block for `config`.
pub fn provenance_for(config: &BenchConfig) -> Result<RunProvenance, LfsError> {
    // workspace crates share one version
    let tool_versions = ["lfs-core", "lfs-shapes", "lfs-search", "lfs-bench"]
        .into_iter()
        .map(|name| (name.to_string(), env!("CARGO_PKG_VERSION").to_string()))
        .collect();
    Ok(RunProvenance {
        schema_version: SchemaVersion::new(1, 0, 0),
        config_hash: stable_hash_string(config)?,
        seed: config.seed,
        tool_versions,
    })
}
