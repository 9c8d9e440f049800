use lfs_core::{Query, SearchOutcome, Sequence};

/// Bisection over the inclusive index bracket `[0, len - 1]`.
pub fn binary_search(sequence: &Sequence, query: Query) -> SearchOutcome {
    let target = query.value();
    let mut lower = 0usize;
    let mut upper = sequence.len() - 1;
    let mut guesses = 0;
    loop {
        guesses += 1;
        let guess = lower + (upper - lower) / 2;
        let value = sequence[guess];

        if value == target {
            return SearchOutcome::found_at(guess, guesses);
        } else if value < target {
            lower = guess + 1;
        } else {
            // lower is zero here as well, so nothing is left on the left side
            if guess == 0 {
                return SearchOutcome::not_found(guesses);
            }
            upper = guess - 1;
        }

        if lower > upper {
            return SearchOutcome::not_found(guesses);
        }
    }
}
