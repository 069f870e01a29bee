//! Benchmarks for optio containers

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use futures::executor::block_on;

use optio_core::{AsJson, AsyncOptional, Optional};

fn bench_of_classification(c: &mut Criterion) {
    c.bench_function("optional_of_some", |b| {
        b.iter(|| black_box(Optional::of(black_box(Some(42u64)))))
    });
}

fn bench_map_chain(c: &mut Criterion) {
    c.bench_function("optional_map_chain", |b| {
        b.iter(|| {
            black_box(
                Optional::present(black_box(7u64))
                    .map(|n| n + 1)
                    .filter(|n| n % 2 == 0)
                    .flat_map(|n| Optional::present(n * 3))
                    .or_else(0),
            )
        })
    });
}

fn bench_absent_short_circuit(c: &mut Criterion) {
    c.bench_function("optional_absent_chain", |b| {
        b.iter(|| {
            black_box(
                Optional::<u64>::empty()
                    .map(|n| n + 1)
                    .flat_map(|n| Optional::present(n * 3))
                    .or_else(black_box(0)),
            )
        })
    });
}

fn bench_async_resolve(c: &mut Criterion) {
    c.bench_function("async_optional_map_resolve", |b| {
        b.iter(|| {
            black_box(block_on(
                AsyncOptional::from_pending(async { black_box(5u64) })
                    .map(|n| n * 2)
                    .resolve(),
            ))
        })
    });
}

fn bench_as_json(c: &mut Criterion) {
    let optional = Optional::present(vec![1u32, 2, 3, 4]);

    c.bench_function("optional_as_json", |b| {
        b.iter(|| black_box(optional.as_json()))
    });
}

criterion_group!(
    benches,
    bench_of_classification,
    bench_map_chain,
    bench_absent_short_circuit,
    bench_async_resolve,
    bench_as_json,
);
criterion_main!(benches);
