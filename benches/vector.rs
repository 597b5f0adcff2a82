//! Vector performance benchmarks.
//!
//! Measures the cost of the core container operations:
//! - Appends that repeatedly outgrow their storage (doubling growth)
//! - Appends into pre-reserved storage (no relocation)
//! - Worst-case positional insert and remove (front of the sequence)
//! - Element-wise cloning

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use oxidex_vec::Vector;

fn bench_push_growth(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_growth");

    for size in [100usize, 1_000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut values = Vector::new();
                for n in 0..size {
                    values.push(black_box(n));
                }
                values
            });
        });
    }

    group.finish();
}

fn bench_push_reserved(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_reserved");

    for size in [100usize, 1_000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut values = Vector::with_capacity(size);
                for n in 0..size {
                    values.push(black_box(n));
                }
                values
            });
        });
    }

    group.finish();
}

fn bench_insert_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_front");

    for size in [100usize, 1_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut values = Vector::with_capacity(size);
                for n in 0..size {
                    values.insert(0, black_box(n));
                }
                values
            });
        });
    }

    group.finish();
}

fn bench_remove_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_front");

    for size in [100usize, 1_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter_batched(
                || {
                    let mut values = Vector::with_capacity(size);
                    for n in 0..size {
                        values.push(n);
                    }
                    values
                },
                |mut values| {
                    while !values.is_empty() {
                        black_box(values.remove(0));
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_clone(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone");

    for size in [100usize, 1_000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let mut source = Vector::with_capacity(size);
            for n in 0..size {
                source.push(n);
            }

            b.iter(|| black_box(source.clone()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_push_growth,
    bench_push_reserved,
    bench_insert_front,
    bench_remove_front,
    bench_clone
);
criterion_main!(benches);
