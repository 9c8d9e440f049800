use lfs_bench::{
    run_timing, run_timing_pass, time_queries, timing_queries, timing_sequence, BenchConfig,
    StrategyTiming,
};
use lfs_core::{Query, RngHandle, Sequence};
use lfs_search::Strategy;
use lfs_shapes::{Shape, ShapeParams};

fn timing_config() -> BenchConfig {
    let mut config = BenchConfig::default();
    config.seed = 3;
    config.timing.size = 200;
    config.timing.queries = 500;
    config
}

#[test]
fn every_strategy_is_timed_on_every_shape() {
    let config = timing_config();
    let report = run_timing(&config).expect("timing");
    assert_eq!(report.size, 200);
    assert_eq!(report.queries, 500);
    assert_eq!(report.strategies.len(), Strategy::ALL.len());
    for (timing, strategy) in report.strategies.iter().zip(Strategy::ALL) {
        assert_eq!(timing.strategy, strategy);
        assert_eq!(timing.samples.len(), Shape::ALL.len());
        assert!(timing.samples.iter().all(|sample| sample.queries == 500));
        assert!(timing.total_guesses > 0);
        assert!(timing.nanos_per_guess.is_some());
    }
}

#[test]
fn guess_totals_are_reproducible() {
    let config = timing_config();
    let first = run_timing(&config).expect("first");
    let second = run_timing(&config).expect("second");
    let totals = |report: &lfs_bench::TimingReport| {
        report
            .strategies
            .iter()
            .map(|timing| timing.total_guesses)
            .collect::<Vec<_>>()
    };
    assert_eq!(totals(&first), totals(&second));
}

#[test]
fn blind_variant_costs_two_more_per_query() {
    let config = timing_config();
    let report = run_timing(&config).expect("timing");
    let find = |strategy| {
        report
            .strategies
            .iter()
            .find(|timing| timing.strategy == strategy)
            .expect("strategy timed")
    };
    let fit = find(Strategy::LineFit);
    let blind = find(Strategy::LineFitBlind);
    let surcharge = 2 * config.timing.queries as u64 * Shape::ALL.len() as u64;
    assert_eq!(blind.total_guesses, fit.total_guesses + surcharge);
}

#[test]
fn time_queries_sums_guesses() {
    let sequence = Sequence::new(vec![1, 3, 5, 7, 9, 11, 13, 15]).expect("sequence");
    let queries: Vec<Query> = [9, 4, 15]
        .into_iter()
        .map(|value| Query::new(value).expect("query"))
        .collect();
    let sample = time_queries(Strategy::LinearScan, Shape::Linear, &sequence, &queries);
    assert_eq!(sample.queries, 3);
    // 9 at index 4, 4 rejected at index 2, 15 at index 7
    assert_eq!(sample.total_guesses, 5 + 3 + 8);
}

#[test]
fn zero_queries_are_rejected() {
    let mut rng = RngHandle::from_seed(1);
    let err = run_timing_pass(
        Strategy::BinarySearch,
        Shape::Random,
        10,
        0,
        &ShapeParams::default(),
        &mut rng,
    )
    .unwrap_err();
    assert_eq!(err.info().code, "timing-params");
}

#[test]
fn empty_sample_sets_have_no_per_guess_cost() {
    let timing = StrategyTiming::from_samples(Strategy::Hybrid, Vec::new());
    assert_eq!(timing.total_guesses, 0);
    assert_eq!(timing.nanos_per_guess, None);
}

#[test]
fn one_query_batch_serves_every_shape() {
    let config = timing_config();
    let queries = timing_queries(&config).expect("queries");
    assert_eq!(queries.len(), 500);
    assert_eq!(queries, timing_queries(&config).expect("queries again"));

    let report = run_timing(&config).expect("timing");
    for timing in &report.strategies {
        for sample in &timing.samples {
            let sequence = timing_sequence(&config, sample.shape).expect("sequence");
            assert_eq!(sequence.len(), 200);
            let replay = time_queries(timing.strategy, sample.shape, &sequence, &queries);
            assert_eq!(replay.total_guesses, sample.total_guesses);
        }
    }
}
