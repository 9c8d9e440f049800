use lfs_core::{Query, SearchOutcome, Sequence};

/// Reads positions from the front until one holds a value `>= query`.
///
/// Every visited position costs one guess, including the one that stops the
/// scan. This is the ground truth the other strategies are verified against.
pub fn linear_scan(sequence: &Sequence, query: Query) -> SearchOutcome {
    let target = query.value();
    let mut guesses = 0;
    for (index, &value) in sequence.as_slice().iter().enumerate() {
        guesses += 1;
        if value == target {
            return SearchOutcome::found_at(index, guesses);
        }
        if value > target {
            break;
        }
    }
    SearchOutcome::not_found(guesses)
}
