use lfs_core::{Query, SearchOutcome, Sequence};
use lfs_search::{
    binary_search, hybrid_search, line_fit_search, linear_scan, EndpointReads, HybridStep,
    Strategy,
};

fn odds() -> Sequence {
    Sequence::new(vec![1, 3, 5, 7, 9, 11, 13, 15]).expect("sequence")
}

fn query(value: u64) -> Query {
    Query::new(value).expect("query")
}

#[test]
fn line_fit_hits_evenly_spaced_values_in_one_guess() {
    let outcome = line_fit_search(&odds(), query(9), EndpointReads::Free);
    assert_eq!(outcome, SearchOutcome::found_at(4, 1));
}

#[test]
fn binary_search_visits_three_midpoints() {
    let outcome = binary_search(&odds(), query(9));
    assert_eq!(outcome, SearchOutcome::found_at(4, 3));
}

#[test]
fn absent_value_is_reported_by_every_strategy() {
    let sequence = odds();
    let scan = linear_scan(&sequence, query(4));
    assert!(!scan.found);
    assert_eq!(scan.guesses, 3);
    for strategy in Strategy::ALL {
        let outcome = strategy.search(&sequence, query(4));
        assert!(!outcome.found, "{strategy} claimed to find 4");
        assert_eq!(outcome.index, None);
    }
}

#[test]
fn linear_scan_charges_every_visited_position() {
    let sequence = odds();
    assert_eq!(linear_scan(&sequence, query(1)), SearchOutcome::found_at(0, 1));
    assert_eq!(linear_scan(&sequence, query(15)), SearchOutcome::found_at(7, 8));
    assert_eq!(linear_scan(&sequence, query(16)), SearchOutcome::not_found(8));
    assert_eq!(linear_scan(&sequence, query(0)), SearchOutcome::not_found(1));
}

#[test]
fn endpoints_and_out_of_range_queries_are_free_for_line_fit() {
    let sequence = odds();
    assert_eq!(
        line_fit_search(&sequence, query(1), EndpointReads::Free),
        SearchOutcome::found_at(0, 0)
    );
    assert_eq!(
        line_fit_search(&sequence, query(15), EndpointReads::Free),
        SearchOutcome::found_at(7, 0)
    );
    assert_eq!(
        line_fit_search(&sequence, query(0), EndpointReads::Free),
        SearchOutcome::not_found(0)
    );
    assert_eq!(hybrid_search(&sequence, query(99)), SearchOutcome::not_found(0));
}

#[test]
fn blind_variant_adds_two_even_on_early_exits() {
    let sequence = odds();
    for value in [0, 1, 4, 9, 15, 99] {
        let free = line_fit_search(&sequence, query(value), EndpointReads::Free);
        let blind = Strategy::LineFitBlind.search(&sequence, query(value));
        assert_eq!(blind.guesses, free.guesses + 2, "query {value}");
        assert_eq!(blind.found, free.found);
        assert_eq!(blind.index, free.index);
    }
}

#[test]
fn single_element_sequences() {
    let sequence = Sequence::new(vec![42]).expect("sequence");
    for strategy in Strategy::ALL {
        let hit = strategy.search(&sequence, query(42));
        assert!(hit.found, "{strategy}");
        assert_eq!(hit.index, Some(0));
        let miss = strategy.search(&sequence, query(41));
        assert!(!miss.found, "{strategy}");
    }
    assert_eq!(binary_search(&sequence, query(7)), SearchOutcome::not_found(1));
}

#[test]
fn binary_search_stops_at_the_left_edge() {
    let sequence = Sequence::new(vec![5, 6]).expect("sequence");
    assert_eq!(binary_search(&sequence, query(2)), SearchOutcome::not_found(1));
    assert_eq!(binary_search(&sequence, query(6)), SearchOutcome::found_at(1, 2));
}

#[test]
fn adjacent_bracket_is_charged_one_read() {
    let sequence = Sequence::new(vec![1, 5]).expect("sequence");
    assert_eq!(
        line_fit_search(&sequence, query(3), EndpointReads::Free),
        SearchOutcome::not_found(1)
    );
    assert_eq!(
        line_fit_search(&sequence, query(3), EndpointReads::Charged),
        SearchOutcome::not_found(3)
    );
    assert_eq!(hybrid_search(&sequence, query(3)), SearchOutcome::not_found(1));
    for strategy in [Strategy::LineFit, Strategy::LineFitBlind, Strategy::Hybrid] {
        assert!(!strategy.search(&sequence, query(3)).found);
    }
}

#[test]
fn outlier_makes_line_fit_creep_but_terminate() {
    let mut values: Vec<u64> = (0..100).collect();
    values.push(20_000);
    let sequence = Sequence::new(values).expect("sequence");
    let n = sequence.len() as u64;

    let fit = line_fit_search(&sequence, query(50), EndpointReads::Free);
    assert_eq!(fit.index, Some(50));
    assert!(fit.guesses <= n, "line fit took {} guesses", fit.guesses);
    // the outlier drags every prediction to the left edge of the bracket
    assert!(fit.guesses > 40, "expected near-linear creep, got {}", fit.guesses);

    let hybrid = hybrid_search(&sequence, query(50));
    assert_eq!(hybrid.index, Some(50));
    assert!(hybrid.guesses < fit.guesses);

    let absent = line_fit_search(&sequence, query(150), EndpointReads::Free);
    assert!(!absent.found);
    assert!(absent.guesses <= n);
}

#[test]
fn hybrid_alternates_starting_with_interpolation() {
    assert_eq!(HybridStep::for_guess(0), HybridStep::Interpolate);
    assert_eq!(HybridStep::for_guess(1), HybridStep::Bisect);
    assert_eq!(HybridStep::for_guess(2), HybridStep::Interpolate);
    assert_eq!(HybridStep::for_guess(7), HybridStep::Bisect);
}

#[test]
fn hybrid_first_step_matches_line_fit() {
    let outcome = hybrid_search(&odds(), query(9));
    assert_eq!(outcome, SearchOutcome::found_at(4, 1));
}

#[test]
fn duplicates_may_be_found_at_any_copy() {
    let sequence = Sequence::new(vec![1, 4, 4, 4, 4, 4, 9]).expect("sequence");
    for strategy in Strategy::ALL {
        let outcome = strategy.search(&sequence, query(4));
        assert!(outcome.found, "{strategy}");
        let index = outcome.index.expect("index");
        assert_eq!(sequence[index], 4);
    }
}

#[test]
fn names_round_trip() {
    for strategy in Strategy::ALL {
        assert_eq!(strategy.slug().parse::<Strategy>().expect("slug"), strategy);
        assert_eq!(strategy.name().parse::<Strategy>().expect("name"), strategy);
    }
    assert_eq!("binary".parse::<Strategy>().expect("alias"), Strategy::BinarySearch);
    let err = "ternary".parse::<Strategy>().unwrap_err();
    assert_eq!(err.info().code, "unknown-strategy");
    assert_eq!(
        serde_json::to_string(&Strategy::LineFitBlind).expect("json"),
        "\"line-fit-blind\""
    );
}
