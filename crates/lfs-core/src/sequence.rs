use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, LfsError};

/// Largest value a sequence element or query may take.
///
/// Interpolating strategies fit lines in `f64`, which represents every
/// integer up to 2^53 exactly.
pub const MAX_DOMAIN_VALUE: u64 = 1 << 53;

/// Non-empty, non-decreasing run of values searched by every strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u64>", into = "Vec<u64>")]
pub struct Sequence {
    values: Vec<u64>,
}

impl Sequence {
    /// Validates `values` and wraps them.
    ///
    /// Fails when the input is empty, out of order, or holds a value above
    /// [`MAX_DOMAIN_VALUE`].
    pub fn new(values: Vec<u64>) -> Result<Self, LfsError> {
        if values.is_empty() {
            return Err(LfsError::invalid_argument(
                "empty-sequence",
                "a sequence needs at least one element",
            ));
        }
        for (index, value) in values.iter().enumerate() {
            if *value > MAX_DOMAIN_VALUE {
                return Err(LfsError::InvalidArgument(
                    ErrorInfo::new("value-out-of-domain", "sequence value is not representable")
                        .with_context("index", index)
                        .with_context("value", value)
                        .with_context("limit", MAX_DOMAIN_VALUE),
                ));
            }
        }
        if let Some(index) = values.windows(2).position(|pair| pair[0] > pair[1]) {
            return Err(LfsError::InvalidArgument(
                ErrorInfo::new("unsorted-sequence", "sequence values must be non-decreasing")
                    .with_context("index", index)
                    .with_context("left", values[index])
                    .with_context("right", values[index + 1]),
            ));
        }
        Ok(Self { values })
    }

    /// Number of elements, always at least one.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Smallest element.
    pub fn first(&self) -> u64 {
        self.values[0]
    }

    /// Largest element.
    pub fn last(&self) -> u64 {
        self.values[self.values.len() - 1]
    }

    /// Borrows the underlying values.
    pub fn as_slice(&self) -> &[u64] {
        &self.values
    }

    /// Releases the backing buffer so the next trial can reuse its allocation.
    pub fn into_values(self) -> Vec<u64> {
        self.values
    }
}

impl Index<usize> for Sequence {
    type Output = u64;

    fn index(&self, index: usize) -> &u64 {
        &self.values[index]
    }
}

impl TryFrom<Vec<u64>> for Sequence {
    type Error = LfsError;

    fn try_from(values: Vec<u64>) -> Result<Self, Self::Error> {
        Sequence::new(values)
    }
}

impl From<Sequence> for Vec<u64> {
    fn from(sequence: Sequence) -> Self {
        sequence.values
    }
}

/// Target value for a single search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Query(u64);

impl Query {
    /// Validates that `value` lies inside the representable domain.
    pub fn new(value: u64) -> Result<Self, LfsError> {
        if value > MAX_DOMAIN_VALUE {
            return Err(LfsError::InvalidArgument(
                ErrorInfo::new("query-out-of-domain", "query is not representable")
                    .with_context("query", value)
                    .with_context("limit", MAX_DOMAIN_VALUE),
            ));
        }
        Ok(Self(value))
    }

    /// Raw query value.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for Query {
    type Error = LfsError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Query::new(value)
    }
}

impl From<Query> for u64 {
    fn from(query: Query) -> Self {
        query.0
    }
}

/// Result of running one strategy against one (sequence, query) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Whether the query is present in the sequence.
    pub found: bool,
    /// Position of the match; `None` whenever `found` is false.
    pub index: Option<usize>,
    /// Element reads charged to the strategy, surcharges included.
    pub guesses: u64,
}

impl SearchOutcome {
    /// Outcome for a match at `index`.
    pub fn found_at(index: usize, guesses: u64) -> Self {
        Self {
            found: true,
            index: Some(index),
            guesses,
        }
    }

    /// Outcome for a query that is absent.
    pub fn not_found(guesses: u64) -> Self {
        Self {
            found: false,
            index: None,
            guesses,
        }
    }

    /// Adds a fixed number of charged reads without touching the result.
    pub fn with_surcharge(self, extra: u64) -> Self {
        Self {
            guesses: self.guesses + extra,
            ..self
        }
    }
}
