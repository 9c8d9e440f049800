use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use lfs_bench::BenchConfig;

pub mod config;
pub mod sweep;
pub mod timing;
pub mod trial;

/// Flags shared by every command that runs from a configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// YAML configuration; built-in defaults when absent.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Master seed overriding the configuration.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl ConfigOverrides {
    /// Loads the configuration file, or the defaults, and applies `--seed`.
    ///
    /// Validation is left to the caller, which may still apply more flags.
    pub fn load(&self) -> Result<BenchConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => BenchConfig::load(path)?,
            None => BenchConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        Ok(config)
    }
}
