use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lfs_bench::{run_sheets, BenchConfig, SizeRange, TrialBench};
use lfs_core::RngHandle;
use lfs_search::Strategy;
use lfs_shapes::{Shape, ShapeParams};

fn bench_trials(c: &mut Criterion) {
    let mut group = c.benchmark_group("trial");
    for size in [16usize, 256, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut rng = RngHandle::from_seed(0xbe7c);
            let mut bench = TrialBench::new(ShapeParams::default(), &mut rng);
            b.iter(|| {
                black_box(
                    bench
                        .trial(Shape::Random, Strategy::Hybrid, size)
                        .expect("trial"),
                )
            });
        });
    }
    group.finish();
}

fn bench_sweep(c: &mut Criterion) {
    let mut config = BenchConfig::default();
    config.sizes = SizeRange::new(1, 64);
    config.trials_per_size = 10;
    config.timing.enabled = false;

    let mut group = c.benchmark_group("sweep");
    group.sample_size(10);
    for threads in [1usize, 0] {
        config.threads = threads;
        let label = if threads == 0 { "auto" } else { "single" };
        group.bench_with_input(BenchmarkId::from_parameter(label), &config, |b, config| {
            b.iter(|| black_box(run_sheets(config).expect("sheets")));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_trials, bench_sweep);
criterion_main!(benches);
