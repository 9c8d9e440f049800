use std::fmt;
use std::str::FromStr;

use lfs_core::errors::{ErrorInfo, LfsError};
use lfs_core::{Query, SearchOutcome, Sequence};
use serde::{Deserialize, Serialize};

use crate::{binary_search, hybrid_search, line_fit_search, linear_scan, EndpointReads};

/// The closed set of benchmarked strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Front-to-back scan; the reference answer.
    LinearScan,
    /// Interpolation search with free endpoint reads.
    LineFit,
    /// Interpolation search charging the two endpoint reads.
    LineFitBlind,
    /// Classic bisection.
    BinarySearch,
    /// Interpolation and bisection steps in alternation.
    Hybrid,
}

impl Strategy {
    /// Every strategy, in reporting order.
    pub const ALL: [Strategy; 5] = [
        Strategy::LinearScan,
        Strategy::LineFit,
        Strategy::LineFitBlind,
        Strategy::BinarySearch,
        Strategy::Hybrid,
    ];

    /// Runs the strategy.
    pub fn search(self, sequence: &Sequence, query: Query) -> SearchOutcome {
        match self {
            Strategy::LinearScan => linear_scan(sequence, query),
            Strategy::LineFit => line_fit_search(sequence, query, EndpointReads::Free),
            Strategy::LineFitBlind => line_fit_search(sequence, query, EndpointReads::Charged),
            Strategy::BinarySearch => binary_search(sequence, query),
            Strategy::Hybrid => hybrid_search(sequence, query),
        }
    }

    /// Display name, used for CSV column headers.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::LinearScan => "Linear Search",
            Strategy::LineFit => "Line Fit",
            Strategy::LineFitBlind => "Line Fit Blind",
            Strategy::BinarySearch => "Binary Search",
            Strategy::Hybrid => "Hybrid",
        }
    }

    /// Kebab-case identifier accepted by [`FromStr`] and serde.
    pub fn slug(self) -> &'static str {
        match self {
            Strategy::LinearScan => "linear-scan",
            Strategy::LineFit => "line-fit",
            Strategy::LineFitBlind => "line-fit-blind",
            Strategy::BinarySearch => "binary-search",
            Strategy::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = LfsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace([' ', '_'], "-");
        let wanted = match wanted.as_str() {
            "linear" | "linear-search" => "linear-scan",
            "binary" => "binary-search",
            other => other,
        };
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.slug() == wanted)
            .ok_or_else(|| {
                LfsError::InvalidArgument(
                    ErrorInfo::new("unknown-strategy", "no strategy with that name")
                        .with_context("name", s)
                        .with_hint(
                            "expected one of linear-scan, line-fit, line-fit-blind, binary-search, hybrid",
                        ),
                )
            })
    }
}
