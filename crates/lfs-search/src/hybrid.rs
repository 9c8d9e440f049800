use lfs_core::{Query, SearchOutcome, Sequence};

use crate::bracket::bracketed_search;

/// Kind of prediction the hybrid search makes for one guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HybridStep {
    /// Predict from the line through the bracket endpoints.
    Interpolate,
    /// Predict the bracket midpoint.
    Bisect,
}

impl HybridStep {
    /// Step to take when `guesses` reads have already been charged.
    ///
    /// Strict alternation starting with interpolation.
    pub fn for_guess(guesses: u64) -> Self {
        if guesses % 2 == 0 {
            HybridStep::Interpolate
        } else {
            HybridStep::Bisect
        }
    }
}

/// Alternates line-fit and bisection predictions over the same bracket.
///
/// Bisection steps bound the damage on distributions where interpolation
/// stalls; interpolation steps keep the fast convergence on near-linear data.
pub fn hybrid_search(sequence: &Sequence, query: Query) -> SearchOutcome {
    let target = query.value();
    bracketed_search(sequence, query, |bracket, guesses| {
        match HybridStep::for_guess(guesses) {
            HybridStep::Interpolate => bracket.interpolate(target),
            HybridStep::Bisect => bracket.midpoint(),
        }
    })
}
