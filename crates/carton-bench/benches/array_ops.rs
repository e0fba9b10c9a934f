//! Criterion micro-benchmarks for growth, insertion, erasure and copying.

use std::hint::black_box;

use carton_array::DynamicArray;
use carton_bench::{edit_positions, filled_array};
use carton_rational::Rational;
use criterion::{criterion_group, criterion_main, Criterion};

/// Benchmark: 10K pushes from the default minimal capacity.
fn bench_push_back_10k(c: &mut Criterion) {
    c.bench_function("push_back_10k", |b| {
        b.iter(|| {
            let mut array = DynamicArray::new().unwrap();
            for i in 0..10_000u64 {
                array.push_back(i).unwrap();
            }
            black_box(array.len());
        });
    });
}

/// Baseline: the same pushes into a `Vec`.
fn bench_vec_push_10k(c: &mut Criterion) {
    c.bench_function("vec_push_10k", |b| {
        b.iter(|| {
            let mut vec = Vec::new();
            for i in 0..10_000u64 {
                vec.push(i);
            }
            black_box(vec.len());
        });
    });
}

/// Benchmark: 1K single-element inserts at deterministic positions.
fn bench_insert_1k(c: &mut Criterion) {
    let positions = edit_positions(1_000, 1_000, 1, 42);
    c.bench_function("insert_1k", |b| {
        b.iter(|| {
            let mut array = filled_array(1_000);
            for &pos in &positions {
                array.insert(pos, 0).unwrap();
            }
            black_box(array.len());
        });
    });
}

/// Benchmark: erase a 10K array down to nothing, one element at a time,
/// exercising the shrink path.
fn bench_erase_10k(c: &mut Criterion) {
    let positions = edit_positions(10_000, 10_000, -1, 42);
    c.bench_function("erase_10k", |b| {
        b.iter(|| {
            let mut array = filled_array(10_000);
            for &pos in &positions {
                array.erase(pos, 1);
            }
            black_box(array.capacity());
        });
    });
}

/// Benchmark: copy a 10K array of rationals.
fn bench_clone_rational_10k(c: &mut Criterion) {
    let mut array = DynamicArray::new().unwrap();
    for d in 1..=10_000i64 {
        array.push_back(Rational::new(1, d).unwrap()).unwrap();
    }
    c.bench_function("clone_rational_10k", |b| {
        b.iter(|| {
            let copy = array.try_clone().unwrap();
            black_box(copy.len());
        });
    });
}

criterion_group!(
    benches,
    bench_push_back_10k,
    bench_vec_push_10k,
    bench_insert_1k,
    bench_erase_10k,
    bench_clone_rational_10k
);
criterion_main!(benches);
