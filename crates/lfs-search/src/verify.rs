//! Cross-checks strategy outcomes against the linear scan.

use lfs_core::{Query, SearchOutcome, Sequence};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::linear_scan;

/// Disagreement between an outcome and the linear scan on the same input.
///
/// Advisory: callers log and count it, the outcome under test is left as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum VerificationMismatch {
    /// One side found the query and the other did not.
    #[error("found {actual} but linear scan says {expected}")]
    FoundFlag {
        /// Linear scan verdict.
        expected: bool,
        /// Verdict of the strategy under test.
        actual: bool,
    },
    /// Both found the query, at positions holding different values.
    #[error("index {actual} (value {actual_value}) but linear scan says {expected} (value {expected_value})")]
    Index {
        /// Index reported by the linear scan.
        expected: usize,
        /// Index reported by the strategy under test.
        actual: usize,
        /// Value stored at `expected`.
        expected_value: u64,
        /// Value stored at `actual`.
        actual_value: u64,
    },
}

/// Compares `outcome` with the linear scan of the same `(sequence, query)`.
///
/// Different indices are fine as long as both hold the same value, since
/// duplicates may legitimately be found at any of their positions.
pub fn verify(
    sequence: &Sequence,
    query: Query,
    outcome: &SearchOutcome,
) -> Option<VerificationMismatch> {
    let reference = linear_scan(sequence, query);
    if outcome.found != reference.found {
        return Some(VerificationMismatch::FoundFlag {
            expected: reference.found,
            actual: outcome.found,
        });
    }
    match (reference.index, outcome.index) {
        (Some(expected), Some(actual)) if outcome.found && expected != actual => {
            let expected_value = sequence[expected];
            let actual_value = sequence.as_slice().get(actual).copied();
            match actual_value {
                Some(actual_value) if actual_value == expected_value => None,
                _ => Some(VerificationMismatch::Index {
                    expected,
                    actual,
                    expected_value,
                    actual_value: actual_value.unwrap_or(u64::MAX),
                }),
            }
        }
        _ => None,
    }
}
