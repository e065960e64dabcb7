//! Benchmark for Maybe, Either projections, Reader and State.

use criterion::{Criterion, criterion_group, criterion_main};
use kleisli::control::{Either, Maybe, either};
use kleisli::effect::{Reader, State};
use std::hint::black_box;

// =============================================================================
// Maybe / Either
// =============================================================================

fn benchmark_maybe_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("maybe_chain");

    group.bench_function("flat_map_5", |bencher| {
        bencher.iter(|| {
            let result = Maybe::present(black_box(1))
                .flat_map(|x| Maybe::present(x + 1))
                .flat_map(|x| Maybe::present(x * 2))
                .flat_map(|x| Maybe::present(x + 3))
                .flat_map(|x| Maybe::present(x * 4))
                .flat_map(|x| Maybe::present(x + 5));
            black_box(result)
        });
    });

    group.bench_function("zip3", |bencher| {
        bencher.iter(|| {
            let result = Maybe::present(black_box(1)).zip3(Maybe::present(2), Maybe::present(3));
            black_box(result)
        });
    });

    group.finish();
}

fn benchmark_either_projection(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("either_projection");

    group.bench_function("value_map_5", |bencher| {
        bencher.iter(|| {
            let result = Either::<String, i32>::value(black_box(1))
                .into_value_projection()
                .map(|x| x + 1)
                .map(|x| x * 2)
                .map(|x| x + 3)
                .map(|x| x * 4)
                .map(|x| x + 5)
                .into_either();
            black_box(result)
        });
    });

    group.bench_function("error_map_passthrough", |bencher| {
        bencher.iter(|| {
            let result = Either::<i32, String>::value(String::from("kept"))
                .into_error_projection()
                .map(|x| x + 1)
                .into_either();
            black_box(result)
        });
    });

    group.bench_function("either_no_panic", |bencher| {
        bencher.iter(|| black_box(either(|| black_box(20) + 22).is_value()));
    });

    group.finish();
}

// =============================================================================
// Reader / State
// =============================================================================

fn benchmark_reader(criterion: &mut Criterion) {
    let reader = Reader::new(|context: i32| context + 1)
        .flat_map(|x| Reader::new(move |context: i32| x * context))
        .zip2(Reader::ask())
        .map(|(first, second)| first + second);

    criterion.bench_function("reader_chain", |bencher| {
        bencher.iter(|| black_box(reader.read(black_box(10))));
    });
}

fn benchmark_state(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("state");

    let counter = State::new(|count: u64| (count + 1, count));
    let chained = counter
        .clone()
        .zip3(counter.clone(), counter)
        .map(|(a, b, c)| a + b + c);
    group.bench_function("zip3", |bencher| {
        bencher.iter(|| black_box(chained.run(black_box(0))));
    });

    group.bench_function("modify_10", |bencher| {
        bencher.iter(|| {
            let program = (0..10).fold(State::modify(|s: u64| s), |program, _| {
                program.flat_map(|()| State::modify(|s: u64| s + 1))
            });
            black_box(program.exec(black_box(0)))
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_maybe_chain,
    benchmark_either_projection,
    benchmark_reader,
    benchmark_state
);

criterion_main!(benches);
