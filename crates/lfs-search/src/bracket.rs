use lfs_core::{clamp, LineFit, Query, SearchOutcome, Sequence};

/// Known endpoints surrounding the query.
///
/// While a search is active `min_index < max_index` and
/// `min_value < query < max_value`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Bracket {
    pub(crate) min_index: usize,
    pub(crate) min_value: u64,
    pub(crate) max_index: usize,
    pub(crate) max_value: u64,
}

/// How a search begins once the first and last elements are known.
#[derive(Debug)]
enum Opening {
    /// The query lies outside `[first, last]`.
    Outside,
    /// The query equals one of the endpoints.
    Endpoint(usize),
    /// The query lies strictly between the endpoints.
    Inside(Bracket),
}

impl Bracket {
    fn open(sequence: &Sequence, target: u64) -> Opening {
        let bracket = Bracket {
            min_index: 0,
            min_value: sequence.first(),
            max_index: sequence.len() - 1,
            max_value: sequence.last(),
        };
        if target < bracket.min_value || target > bracket.max_value {
            Opening::Outside
        } else if target == bracket.min_value {
            Opening::Endpoint(bracket.min_index)
        } else if target == bracket.max_value {
            Opening::Endpoint(bracket.max_index)
        } else {
            Opening::Inside(bracket)
        }
    }

    /// Line through the two endpoints in (index, value) space.
    pub(crate) fn fit(&self) -> LineFit {
        LineFit::through(self.min_index, self.min_value, self.max_index, self.max_value)
    }

    /// Index at which the endpoint line predicts `target`, rounded to nearest.
    pub(crate) fn interpolate(&self, target: u64) -> usize {
        // Negative and NaN predictions saturate to zero; the clamp fixes them up.
        self.fit().invert(target as f64).round() as usize
    }

    /// Arithmetic midpoint of the bracket.
    pub(crate) fn midpoint(&self) -> usize {
        self.min_index + (self.max_index - self.min_index) / 2
    }

    /// No untested position remains strictly between the endpoints.
    fn is_exhausted(&self) -> bool {
        self.min_index + 1 >= self.max_index
    }

    fn clamp_interior(&self, predicted: usize) -> usize {
        clamp(self.min_index + 1, self.max_index - 1, predicted)
    }

    fn narrow(&mut self, index: usize, value: u64, target: u64) {
        if value < target {
            self.min_index = index;
            self.min_value = value;
        } else {
            self.max_index = index;
            self.max_value = value;
        }
    }
}

/// Shared loop of the bracketing strategies.
///
/// `predict` receives the current bracket and the number of guesses charged
/// so far, and proposes the next index to read. The proposal is clamped into
/// the open interior of the bracket; every iteration charges one read, and the
/// adjacency check follows the bracket update. A bracket that starts adjacent
/// still costs one read, at `min_index + 1`. Reading the two endpoints is not
/// charged here.
pub(crate) fn bracketed_search<F>(sequence: &Sequence, query: Query, mut predict: F) -> SearchOutcome
where
    F: FnMut(&Bracket, u64) -> usize,
{
    let target = query.value();
    let mut bracket = match Bracket::open(sequence, target) {
        Opening::Outside => return SearchOutcome::not_found(0),
        Opening::Endpoint(index) => return SearchOutcome::found_at(index, 0),
        Opening::Inside(bracket) => bracket,
    };

    let mut guesses = 0;
    loop {
        let index = bracket.clamp_interior(predict(&bracket, guesses));
        guesses += 1;
        let value = sequence[index];
        if value == target {
            return SearchOutcome::found_at(index, guesses);
        }
        bracket.narrow(index, value, target);
        if bracket.is_exhausted() {
            return SearchOutcome::not_found(guesses);
        }
    }
}
