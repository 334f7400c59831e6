//! Benchmark for the grid loss kernel.
//!
//! The matcher evaluates every baked catalog variant against every
//! sub-block of a tile, so this loop dominates a tile bake.
//!
//! Run with: cargo bench --package slabcraft_geometry --bench loss_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use slabcraft_geometry::Grid;

fn benchmark_mae_loss(c: &mut Criterion) {
    let grid = Grid::of8([[0.5; 8]; 8]);
    let target = [0.75f32; 64];

    c.bench_function("mae_loss_8x8", |b| {
        b.iter(|| black_box(grid.loss(black_box(&target), 1.0)))
    });
}

fn benchmark_catalog_sweep(c: &mut Criterion) {
    // A few hundred variants is the realistic catalog size once every
    // enabled shape is rotation- and option-expanded.
    let variants: Vec<Grid> = (0..300)
        .map(|i| {
            let v = (i % 8) as f32 / 8.0;
            Grid::of2([[v, v], [1.0 - v, 1.0 - v]]).upscale(2)
        })
        .collect();
    let target = [0.5f32; 16];

    let mut group = c.benchmark_group("catalog_sweep");
    group.throughput(Throughput::Elements(variants.len() as u64));
    group.bench_function("300_variants_4x4", |b| {
        b.iter(|| {
            for grid in &variants {
                black_box(grid.loss(black_box(&target), 1.0));
            }
        });
    });
    group.finish();
}

criterion_group!(benches, benchmark_mae_loss, benchmark_catalog_sweep);
criterion_main!(benches);
