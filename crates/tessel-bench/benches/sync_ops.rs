//! Criterion micro-benchmarks for mutation, notification and store sync.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use tessel_bench::{populated_repository, REFERENCE_SIZE};
use tessel_core::{Point, ShapeKind};
use tessel_test_utils::scatter_shapes;

/// Benchmark: one geometry mutation, including recompute and store push.
fn bench_mutate_one(c: &mut Criterion) {
    let mut repo = populated_repository(7, 1_000);
    let id = repo
        .all_of_kind(ShapeKind::Rectangle)
        .first()
        .map(|s| s.id().to_string())
        .unwrap();
    let mut x = 0.0;

    c.bench_function("mutate_one_rectangle", |b| {
        b.iter(|| {
            x += 1.0;
            let mut shape = repo.get_mut(&id).unwrap();
            shape.set_bottom_right(Point::planar(x, -x)).unwrap();
            black_box(repo.store().get_area(&id));
        });
    });
}

/// Benchmark: rename every shape in a 10K repository.
fn bench_rename_all_10k(c: &mut Criterion) {
    let mut repo = populated_repository(7, REFERENCE_SIZE);
    let ids: Vec<String> = repo.iter().map(|s| s.id().to_string()).collect();

    c.bench_function("rename_all_10k", |b| {
        b.iter(|| {
            for id in &ids {
                if let Some(mut shape) = repo.get_mut(id) {
                    shape.set_name(id.as_str());
                }
            }
        });
    });
}

/// Benchmark: add 10K fresh shapes (agent attach + store priming).
fn bench_add_10k(c: &mut Criterion) {
    c.bench_function("add_10k", |b| {
        b.iter_batched(
            || scatter_shapes(11, REFERENCE_SIZE),
            |shapes| {
                let mut repo = populated_repository(0, 0);
                repo.extend(shapes);
                black_box(repo.count())
            },
            BatchSize::LargeInput,
        );
    });
}

/// Benchmark: store statistics over a 10K population.
fn bench_statistics_10k(c: &mut Criterion) {
    let repo = populated_repository(7, REFERENCE_SIZE);

    c.bench_function("statistics_10k", |b| {
        b.iter(|| black_box(repo.statistics()));
    });
}

criterion_group!(
    benches,
    bench_mutate_one,
    bench_rename_all_10k,
    bench_add_10k,
    bench_statistics_10k
);
criterion_main!(benches);
