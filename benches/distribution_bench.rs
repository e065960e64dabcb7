//! Benchmark for Distribution sampling.
//!
//! Measures the cost of the closure chains built by the combinators and of
//! the lazily recursive geometric distribution.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use kleisli::probability::{Distribution, RandomSource};
use std::hint::black_box;

// =============================================================================
// Primitive Distributions
// =============================================================================

fn benchmark_primitives(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("distribution_primitives");
    let mut rng = RandomSource::seeded(42);

    let uniform = Distribution::uniform();
    group.bench_function("uniform", |bencher| {
        bencher.iter(|| black_box(uniform.sample(&mut rng)));
    });

    let gaussian = Distribution::gaussian();
    group.bench_function("gaussian", |bencher| {
        bencher.iter(|| black_box(gaussian.sample(&mut rng)));
    });

    let Ok(coin) = Distribution::bernoulli(1.0, 3.0) else {
        return;
    };
    group.bench_function("bernoulli", |bencher| {
        bencher.iter(|| black_box(coin.sample(&mut rng)));
    });

    group.finish();
}

// =============================================================================
// Geometric
// =============================================================================

fn benchmark_geometric(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("distribution_geometric");
    let mut rng = RandomSource::seeded(7);

    for failure_weight in [1.0, 9.0, 99.0] {
        let Ok(trials) = Distribution::geometric(1.0, failure_weight) else {
            continue;
        };
        group.bench_with_input(
            BenchmarkId::new("failure_weight", failure_weight),
            &trials,
            |bencher, trials| {
                bencher.iter(|| black_box(trials.sample(&mut rng)));
            },
        );
    }

    group.finish();
}

// =============================================================================
// Combinator Chains
// =============================================================================

fn benchmark_chains(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("distribution_chain");
    let mut rng = RandomSource::seeded(3);

    let mapped = Distribution::uniform()
        .map(|x| x + 1.0)
        .map(|x| x * 2.0)
        .map(|x| x - 3.0)
        .map(|x| x * 4.0)
        .map(|x| x + 5.0);
    group.bench_function("map_5", |bencher| {
        bencher.iter(|| black_box(mapped.sample(&mut rng)));
    });

    let chained = Distribution::fair_coin().flat_map(|heads| {
        if heads {
            Distribution::gaussian()
        } else {
            Distribution::uniform()
        }
    });
    group.bench_function("flat_map_branch", |bencher| {
        bencher.iter(|| black_box(chained.sample(&mut rng)));
    });

    let zipped = Distribution::uniform().zip3(Distribution::gaussian(), Distribution::fair_coin());
    group.bench_function("zip3", |bencher| {
        bencher.iter(|| black_box(zipped.sample(&mut rng)));
    });

    group.finish();
}

fn benchmark_sequence(criterion: &mut Criterion) {
    criterion.bench_function("to_sequence_take_1000", |bencher| {
        bencher.iter(|| {
            let total: f64 = Distribution::uniform()
                .to_sequence(RandomSource::seeded(black_box(11)))
                .take(1_000)
                .sum();
            black_box(total)
        });
    });
}

criterion_group!(
    benches,
    benchmark_primitives,
    benchmark_geometric,
    benchmark_chains,
    benchmark_sequence
);

criterion_main!(benches);
