//! Benchmark for lazy and eager combinators.
//!
//! Compares lazy pipelines against materializing each step, and measures the
//! cost of wrapper normalization and early termination.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lazyfn::{
    Enumerable, IterCursor, any, chain, filter, flat_map, map, range_inclusive, reduce, take, to_array,
};
use std::hint::black_box;

// =============================================================================
// 1. Pipelines
// =============================================================================

fn benchmark_pipeline(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("pipeline");

    for size in [100_i64, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("lazy", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let evens = filter(range_inclusive(1, black_box(size)), |n: &i64| n % 2 == 0);
                let squares = map(evens, |n: i64| n * n);
                black_box(reduce(squares, 0_i64, |n, sum| n + sum).unwrap())
            });
        });

        group.bench_with_input(BenchmarkId::new("materialized", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let numbers = to_array(range_inclusive(1, black_box(size))).unwrap();
                let evens = to_array(filter(numbers, |n: &i64| n % 2 == 0)).unwrap();
                let squares = to_array(map(evens, |n: i64| n * n)).unwrap();
                black_box(reduce(squares, 0_i64, |n, sum| n + sum).unwrap())
            });
        });
    }

    group.finish();
}

// =============================================================================
// 2. Early Termination
// =============================================================================

fn benchmark_early_termination(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("early_termination");

    group.bench_function("take_from_unbounded", |bencher| {
        bencher.iter(|| {
            let naturals = Enumerable::stateful(IterCursor::new(0_u64..));
            black_box(to_array(take(naturals, black_box(100))).unwrap())
        });
    });

    group.bench_function("any_first_match", |bencher| {
        bencher.iter(|| {
            black_box(any(range_inclusive(0, 1_000_000), |n: &i64| *n == black_box(10)).unwrap())
        });
    });

    group.finish();
}

// =============================================================================
// 3. Normalization
// =============================================================================

fn benchmark_wrapper_depth(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("wrapper_depth");

    for depth in [1_usize, 16, 128] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |bencher, &depth| {
            bencher.iter(|| {
                let mut enumerable = Enumerable::from(vec![1, 2, 3]);
                for _ in 0..depth {
                    enumerable = Enumerable::wrap(enumerable);
                }
                black_box(to_array(enumerable).unwrap())
            });
        });
    }

    group.finish();
}

// =============================================================================
// 4. Splicing
// =============================================================================

fn benchmark_splicing(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("splicing");

    group.bench_function("chain_100_sources", |bencher| {
        bencher.iter(|| {
            let sources: Vec<Vec<u32>> = (0..100).map(|index| vec![index; 10]).collect();
            black_box(to_array(chain(sources)).unwrap())
        });
    });

    group.bench_function("flat_map_words", |bencher| {
        let lines: Vec<&str> = vec!["the quick brown fox"; 250];
        bencher.iter(|| {
            let words = flat_map(lines.clone(), |line| line.split(' ').collect::<Vec<_>>());
            black_box(to_array(words).unwrap())
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_pipeline,
    benchmark_early_termination,
    benchmark_wrapper_depth,
    benchmark_splicing
);
criterion_main!(benches);
