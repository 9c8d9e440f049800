use lfs_bench::{run_sweep, run_trial, SizeRange, TrialBench, TrialStatistics};
use lfs_core::RngHandle;
use lfs_search::Strategy;
use lfs_shapes::{Shape, ShapeParams};
use proptest::prelude::*;

#[test]
fn statistics_track_min_max_last_and_mean() {
    let stats = TrialStatistics::from_samples(10, [4, 9, 1, 6]);
    assert_eq!(stats.size, 10);
    assert_eq!(stats.trials, 4);
    assert_eq!(stats.min_guesses, 1);
    assert_eq!(stats.max_guesses, 9);
    assert_eq!(stats.last_sample, 6);
    assert!((stats.running_average - 5.0).abs() < 1e-9);
}

#[test]
fn sweep_matches_repeated_single_trials() {
    let params = ShapeParams::default();
    let sizes = SizeRange::new(1, 12);
    let trials = 7;

    let mut sweep_rng = RngHandle::from_seed(41);
    let rows = run_sweep(
        Shape::Random,
        Strategy::Hybrid,
        &sizes,
        trials,
        &params,
        &mut sweep_rng,
    )
    .expect("sweep");

    let mut trial_rng = RngHandle::from_seed(41);
    for (row, size) in rows.iter().zip(sizes.iter()) {
        let samples: Vec<u64> = (0..trials)
            .map(|_| {
                run_trial(Shape::Random, Strategy::Hybrid, size, &params, &mut trial_rng)
                    .expect("trial")
                    .guesses
            })
            .collect();
        let mean = samples.iter().sum::<u64>() as f64 / samples.len() as f64;
        assert_eq!(row.size, size);
        assert_eq!(row.trials, trials as u64);
        assert_eq!(row.min_guesses, *samples.iter().min().unwrap());
        assert_eq!(row.max_guesses, *samples.iter().max().unwrap());
        assert_eq!(row.last_sample, *samples.last().unwrap());
        assert!((row.running_average - mean).abs() < 1e-9);
    }
}

#[test]
fn linear_scan_on_single_element_costs_one_guess() {
    let mut rng = RngHandle::from_seed(5);
    let rows = run_sweep(
        Shape::Linear,
        Strategy::LinearScan,
        &SizeRange::new(1, 1),
        20,
        &ShapeParams::default(),
        &mut rng,
    )
    .expect("sweep");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].min_guesses, 1);
    assert_eq!(rows[0].max_guesses, 1);
}

#[test]
fn verified_trials_report_no_mismatches() {
    let mut rng = RngHandle::from_seed(17);
    let mut bench = TrialBench::new(ShapeParams::default(), &mut rng);
    for shape in Shape::ALL {
        for strategy in Strategy::ALL {
            bench
                .sweep(shape, strategy, &SizeRange::new(1, 40), 5)
                .expect("sweep");
        }
    }
    assert_eq!(bench.mismatches(), 0);
    assert_eq!(bench.last_sequence().len(), 40);
}

#[test]
fn zero_trials_and_inverted_ranges_are_rejected() {
    let params = ShapeParams::default();
    let mut rng = RngHandle::from_seed(1);
    let err = run_sweep(
        Shape::Linear,
        Strategy::BinarySearch,
        &SizeRange::new(1, 4),
        0,
        &params,
        &mut rng,
    )
    .unwrap_err();
    assert_eq!(err.info().code, "zero-trials");

    let err = run_sweep(
        Shape::Linear,
        Strategy::BinarySearch,
        &SizeRange::new(5, 4),
        3,
        &params,
        &mut rng,
    )
    .unwrap_err();
    assert_eq!(err.info().code, "size-range");

    let err = run_trial(Shape::Linear, Strategy::BinarySearch, 0, &params, &mut rng).unwrap_err();
    assert_eq!(err.info().code, "empty-sequence");
}

proptest! {
    #[test]
    fn running_average_matches_arithmetic_mean(samples in prop::collection::vec(0u64..5_000, 1..200)) {
        let stats = TrialStatistics::from_samples(1, samples.iter().copied());
        let mean = samples.iter().sum::<u64>() as f64 / samples.len() as f64;
        prop_assert!((stats.running_average - mean).abs() < 1e-9);
        prop_assert!(stats.min_guesses as f64 <= stats.running_average + 1e-9);
        prop_assert!(stats.running_average <= stats.max_guesses as f64 + 1e-9);
    }
}
