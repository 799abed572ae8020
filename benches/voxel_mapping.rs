//! Criterion benchmarks for affine construction and voxel mapping.
//!
//! Run with: cargo bench --bench voxel_mapping
//!
//! These benchmarks track regression in the per-index hot path:
//! - get_affine() construction
//! - map_voxel_index() one-shot mapping (includes inversion)
//! - VoxelMapper::map() with the inverse computed up front

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use voxmap::{get_affine, map_voxel_index, Affine, VoxelMapper};

fn volume_pair() -> (Affine, Affine) {
    let a = get_affine(
        &[0.0, 0.0, 0.0],
        &[1.0, 1.0, 5.0],
        &[1.0, 0.0, 5.0],
        &[0.0, 1.0, 0.0],
        None,
    )
    .unwrap();
    let b = get_affine(
        &[20.0, 10.0, 5.0],
        &[1.0, 1.0, 5.0],
        &[-1.0, 0.0, 0.0],
        &[0.0, 0.0, 1.0],
        None,
    )
    .unwrap();
    (a, b)
}

fn bench_get_affine(c: &mut Criterion) {
    c.bench_function("get_affine", |b| {
        b.iter(|| {
            get_affine(
                black_box(&[20.0, 10.0, 5.0]),
                black_box(&[1.0, 1.0, 5.0]),
                black_box(&[-1.0, 0.0, 0.0]),
                black_box(&[0.0, 0.0, 1.0]),
                None,
            )
            .unwrap()
        })
    });
}

fn bench_mapping(c: &mut Criterion) {
    let (a, b) = volume_pair();
    let index = [10.0, 2.0, 12.0];
    let mut group = c.benchmark_group("map_voxel_index");

    group.bench_function("one_shot", |bench| {
        bench.iter(|| map_voxel_index(black_box(&index), &a, &b).unwrap())
    });

    let mapper = VoxelMapper::new(&a, &b).unwrap();
    group.bench_function("prepared", |bench| {
        bench.iter(|| mapper.map(black_box(&index)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_get_affine, bench_mapping);
criterion_main!(benches);
