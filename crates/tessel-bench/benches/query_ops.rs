//! Criterion micro-benchmarks for specification queries and sorting.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use tessel_bench::{populated_repository, REFERENCE_SIZE};
use tessel_core::{Quadrant, ShapeKind};
use tessel_query::{ShapeComparator, ShapeOrder, Specification};

/// Benchmark: single-leaf quadrant filter over 10K shapes.
fn bench_find_quadrant_10k(c: &mut Criterion) {
    let repo = populated_repository(42, REFERENCE_SIZE);
    let spec = Specification::in_quadrant(Quadrant::First);

    c.bench_function("find_quadrant_10k", |b| {
        b.iter(|| black_box(repo.find(&spec).len()));
    });
}

/// Benchmark: a nested AND/OR/NOT tree over 10K shapes.
fn bench_find_compound_10k(c: &mut Criterion) {
    let repo = populated_repository(42, REFERENCE_SIZE);
    let spec = (Specification::of_kind(ShapeKind::Cone)
        & Specification::volume_between(100.0, f64::INFINITY))
        | (Specification::area_between(0.0, 50.0) & !Specification::in_quadrant(Quadrant::Third));

    c.bench_function("find_compound_10k", |b| {
        b.iter(|| black_box(repo.find(&spec).len()));
    });
}

/// Benchmark: case-insensitive name search over 10K shapes.
fn bench_find_by_name_10k(c: &mut Criterion) {
    let repo = populated_repository(42, REFERENCE_SIZE);

    c.bench_function("find_by_name_10k", |b| {
        b.iter(|| black_box(repo.find_by_name("SHAPE_99", false).len()));
    });
}

/// Benchmark: stable sort of 10K shapes by distance from the origin.
fn bench_sort_distance_10k(c: &mut Criterion) {
    let repo = populated_repository(42, REFERENCE_SIZE);

    c.bench_function("sort_distance_10k", |b| {
        b.iter(|| black_box(repo.sort(&ShapeOrder::DistanceFromOrigin).len()));
    });
}

/// Benchmark: composite comparator (x, then reversed name) over 10K shapes.
fn bench_sort_composite_10k(c: &mut Criterion) {
    let repo = populated_repository(42, REFERENCE_SIZE);
    let by = ShapeOrder::FirstPointX.then(ShapeOrder::Name.reversed());

    c.bench_function("sort_composite_10k", |b| {
        b.iter(|| black_box(repo.sort(&by).len()));
    });
}

criterion_group!(
    benches,
    bench_find_quadrant_10k,
    bench_find_compound_10k,
    bench_find_by_name_10k,
    bench_sort_distance_10k,
    bench_sort_composite_10k
);
criterion_main!(benches);
