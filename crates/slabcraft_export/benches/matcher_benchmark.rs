//! Benchmark for the variant-ranking hot loop.
//!
//! A tile bake ranks every baked variant against 128x128 sub-blocks, so
//! the rank-and-sort path dominates export time at high resolutions.
//!
//! Run with: cargo bench --package slabcraft_export --bench matcher_benchmark

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use slabcraft_catalog::{ShapeCatalog, ShapeOption};
use slabcraft_export::{rank_variants, LayerSettings, VariantTable};

const MAPPING: &str = "block,slab,stairs,layer\n\
                       stone,stone_slab,stone_stairs,snow\n";

fn full_table() -> VariantTable {
    let catalog = Arc::new(ShapeCatalog::from_csv(MAPPING, "").unwrap());
    let mut settings = LayerSettings::default();
    for name in [
        "head",
        "alt_layer",
        "vert_corner",
        "quarter",
        "vert_quarter",
        "corner_slab",
        "vert_corner_slab",
        "eighth_slab",
        "vert_slab",
    ] {
        settings
            .shapes
            .insert(name.to_owned(), ShapeOption::Disable);
    }
    for name in ["slab", "stairs", "layer"] {
        settings.shapes.insert(name.to_owned(), ShapeOption::Enable);
    }
    VariantTable::build(&catalog, &settings, false)
}

fn benchmark_rank_variants(c: &mut Criterion) {
    let table = full_table();
    let target = [0.6f32, 1.2, 0.3, 0.9];

    let mut group = c.benchmark_group("rank_variants");
    group.throughput(Throughput::Elements(table.entries().len() as u64));
    group.bench_function("slab_stair_layer_table", |b| {
        b.iter(|| black_box(rank_variants(table.grids(), black_box(&target), 1.0)));
    });
    group.finish();
}

fn benchmark_tile_of_rankings(c: &mut Criterion) {
    let table = full_table();
    let target = [0.6f32, 1.2, 0.3, 0.9];

    let mut group = c.benchmark_group("tile_rankings");
    group.sample_size(10);
    group.throughput(Throughput::Elements(128 * 128));
    group.bench_function("128x128_sub_blocks", |b| {
        b.iter(|| {
            for _ in 0..128 * 128 {
                black_box(rank_variants(table.grids(), black_box(&target), 1.0));
            }
        });
    });
    group.finish();
}

criterion_group!(benches, benchmark_rank_variants, benchmark_tile_of_rankings);
criterion_main!(benches);
