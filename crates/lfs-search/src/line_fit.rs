use lfs_core::{Query, SearchOutcome, Sequence};
use serde::{Deserialize, Serialize};

use crate::bracket::bracketed_search;

/// Whether reading the first and last element is charged as guesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EndpointReads {
    /// The endpoints are assumed known in advance.
    Free,
    /// The two endpoint reads are added to every outcome.
    Charged,
}

impl EndpointReads {
    /// Guesses added on top of the loop's reads.
    pub fn surcharge(self) -> u64 {
        match self {
            EndpointReads::Free => 0,
            EndpointReads::Charged => 2,
        }
    }
}

/// Interpolation search: fit a line through the bracket endpoints, invert it
/// at the query to predict a position, read it, and move the matching
/// endpoint there.
///
/// Works well when index is roughly linear in value. A single huge outlier
/// breaks that assumption: predictions pile up just right of the low
/// endpoint and the search creeps forward one element at a time.
pub fn line_fit_search(sequence: &Sequence, query: Query, reads: EndpointReads) -> SearchOutcome {
    let target = query.value();
    bracketed_search(sequence, query, |bracket, _| bracket.interpolate(target))
        .with_surcharge(reads.surcharge())
}
