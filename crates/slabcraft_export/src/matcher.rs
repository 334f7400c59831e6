//! # The Shape Matcher
//!
//! Ranks every baked variant against each resolution-squared sub-block
//! of a difference map and writes the full index permutation into a
//! shapemap.
//!
//! In stacked mode the difference values are first normalized so the
//! minimum layer is 0; each relative-Z layer is the sub-block clamped to
//! `[z, z + 1]` and shifted down by `z`. Uniform layers short-circuit to
//! the EMPTY or FULL sentinel without running the matcher.

use std::sync::Arc;

use slabcraft_geometry::Grid;
use slabcraft_terrain::HeightField;

use crate::shapemap::{FlatShapemap, Shapemap, StackedShapemap};
use crate::variants::VariantTable;

/// Ranks all `grids` against `target`, best (lowest loss) first.
///
/// The sort is stable, so equal losses keep their original enumeration
/// order and ties resolve to the lower catalog-variant index. (The
/// original packed the IEEE-754 loss bits and the index into one sort
/// key; sorting the tuples directly is the portable equivalent.)
#[must_use]
pub fn rank_variants(grids: &[Grid], target: &[f32], exponent: f32) -> Vec<u32> {
    let mut ranked: Vec<(f32, u32)> = grids
        .iter()
        .enumerate()
        .map(|(i, grid)| (grid.loss(target, exponent), i as u32))
        .collect();
    ranked.sort_by(|a, b| a.0.total_cmp(&b.0));
    ranked.into_iter().map(|(_, index)| index).collect()
}

fn all_zeros(values: &[f32]) -> bool {
    values.iter().all(|v| *v == 0.0)
}

fn all_ones(values: &[f32]) -> bool {
    values.iter().all(|v| *v == 1.0)
}

/// Builds the shapemap for a tile's difference map.
///
/// Flat mode writes one ranking per column. Stacked mode walks each
/// column's relative-Z layers from top to bottom, ranking against the
/// full table while the column is still "top" (no non-empty layer seen)
/// and against the stacked table below.
#[must_use]
pub fn build_shapemap(
    mut diff: HeightField,
    table: &VariantTable,
    stacking: bool,
    exponent: f32,
) -> Arc<dyn Shapemap> {
    let res = table.resolution as usize;
    let size = diff.size() / res;
    let cells = res * res;
    let mut scratch = vec![0.0f32; cells];

    if stacking {
        let (min, max) = diff.min_max();
        let max_z = max.ceil() as i32;
        let min_z = min.floor() as i32;
        let range = (max_z - min_z).max(0) as usize;
        // Normalize so the lowest layer starts at zero.
        diff.shift(min_z as f32);

        let full = table.full_index();
        let empty = table.empty_index();
        let full_stacked = table.full_index_stacked();

        let mut clamped = vec![0.0f32; cells];
        let mut rankings: Vec<Vec<u32>> = Vec::with_capacity(size * size * range);
        for x in 0..size {
            for y in 0..size {
                copy_sub_block(&diff, x, y, res, &mut scratch);
                let mut top = true;
                let mut column: Vec<Vec<u32>> = Vec::with_capacity(range);
                for z in (0..range).rev() {
                    let zf = z as f32;
                    for (out, v) in clamped.iter_mut().zip(&scratch) {
                        *out = v.clamp(zf, zf + 1.0) - zf;
                    }
                    let ranking = if all_zeros(&clamped) {
                        vec![empty]
                    } else if all_ones(&clamped) {
                        vec![if top { full } else { full_stacked }]
                    } else {
                        let grids = if top {
                            table.grids()
                        } else {
                            table.grids_stacked()
                        };
                        rank_variants(grids, &clamped, exponent)
                    };
                    if ranking[0] != empty {
                        top = false;
                    }
                    column.push(ranking);
                }
                // The walk was top-down; store bottom-up.
                column.reverse();
                rankings.extend(column);
            }
        }
        Arc::new(StackedShapemap::new(size, rankings, min_z, max_z))
    } else {
        let mut rankings = Vec::with_capacity(size * size);
        for x in 0..size {
            for y in 0..size {
                copy_sub_block(&diff, x, y, res, &mut scratch);
                rankings.push(rank_variants(table.grids(), &scratch, exponent));
            }
        }
        Arc::new(FlatShapemap::new(size, rankings))
    }
}

fn copy_sub_block(diff: &HeightField, x: usize, y: usize, res: usize, out: &mut [f32]) {
    let row_base = x * res;
    let col_base = y * res;
    let mut k = 0;
    for i in 0..res {
        for j in 0..res {
            out[k] = diff.get(row_base + i, col_base + j);
            k += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slabcraft_catalog::{ShapeCatalog, ShapeOption};
    use slabcraft_world::constants::LOSS_EXPONENT;

    use crate::settings::LayerSettings;

    const MAPPING: &str = "block,slab,stairs\nstone,stone_slab,stone_stairs\n";

    fn catalog() -> ShapeCatalog {
        ShapeCatalog::from_csv(MAPPING, "").unwrap()
    }

    fn slab_stair_settings() -> LayerSettings {
        let mut settings = LayerSettings::default();
        for name in [
            "layer",
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
        settings
            .shapes
            .insert("slab".to_owned(), ShapeOption::Enable);
        settings
            .shapes
            .insert("stairs".to_owned(), ShapeOption::Enable);
        settings
    }

    #[test]
    fn stable_sort_breaks_ties_by_lower_index() {
        let grids = vec![
            Grid::of1(1.0),
            Grid::of1(0.5),
            Grid::of1(0.5),
            Grid::of1(0.0),
        ];
        let ranking = rank_variants(&grids, &[0.5], 1.0);
        assert_eq!(ranking, vec![1, 2, 0, 3]);
    }

    #[test]
    fn a_full_unit_ranks_the_full_sentinel_first_at_loss_zero() {
        let catalog = catalog();
        let table = VariantTable::build(&catalog, &slab_stair_settings(), true);
        // Resolution 2: a one-block rise is a uniform sub-block of 2.
        let ranking = rank_variants(table.grids(), &[2.0; 4], LOSS_EXPONENT);
        assert_eq!(ranking[0], table.full_index());
        assert_eq!(
            table.grids()[table.full_index() as usize].loss(&[2.0; 4], LOSS_EXPONENT),
            0.0
        );
    }

    #[test]
    fn a_uniform_half_block_ranks_the_slab_first() {
        let catalog = catalog();
        let table = VariantTable::build(&catalog, &slab_stair_settings(), true);
        // Slab baked at resolution 2 is uniformly 1.
        let ranking = rank_variants(table.grids(), &[1.0; 4], LOSS_EXPONENT);
        assert_eq!(ranking[0], 0);
        assert_eq!(table.entry(0).shape, catalog.index_of("slab").unwrap());
        // Every stair variant scores a nonzero loss here.
        let stair_losses: Vec<f32> = (1..13)
            .map(|i| table.grids()[i].loss(&[1.0; 4], LOSS_EXPONENT))
            .collect();
        assert!(stair_losses.iter().all(|l| *l > 0.0));
    }

    #[test]
    fn stacked_layer_count_spans_the_normalized_range() {
        let catalog = catalog();
        let settings = slab_stair_settings();
        let table = VariantTable::build(&catalog, &settings, true);
        let size = slabcraft_world::constants::TILE_SIZE;
        let mut diff = HeightField::new(size * 2);
        for x in 0..size * 2 {
            for y in 0..size * 2 {
                // Values spanning [0.3, 1.6]: ceil(1.6) - floor(0.3) = 2.
                diff.set(x, y, if (x + y) % 2 == 0 { 0.3 } else { 1.6 });
            }
        }
        let map = build_shapemap(diff, &table, true, LOSS_EXPONENT);
        assert_eq!(map.range(), 2);
        assert_eq!(map.min_z(), 0);
        assert_eq!(map.max_z(), 2);
    }

    #[test]
    fn stacked_uniform_layers_shortcut_to_the_sentinels() {
        let catalog = catalog();
        let settings = slab_stair_settings();
        let table = VariantTable::build(&catalog, &settings, true);
        let size = slabcraft_world::constants::TILE_SIZE;
        // Flat tile with one column rising 2.5 blocks: its sub-block
        // spans three layers (0.5 partial over two full ones).
        let mut diff = HeightField::new(size * 2);
        for x in 0..2 {
            for y in 0..2 {
                diff.set(x, y, 2.5);
            }
        }
        let map = build_shapemap(diff, &table, true, LOSS_EXPONENT);
        assert_eq!(map.range(), 3);
        // Top layer is partial and gets a full ranking.
        assert!(map.indices_at(0, 0, 2).len() > 1);
        // The layers below are exactly full; the top flag was consumed
        // by the partial layer above, so they shortcut to stacked-FULL.
        assert_eq!(map.indices_at(0, 0, 1), &[table.full_index_stacked()]);
        assert_eq!(map.indices_at(0, 0, 0), &[table.full_index_stacked()]);
        // Flat columns shortcut every layer to EMPTY.
        assert_eq!(map.indices_at(5, 5, 2), &[table.empty_index()]);
        assert_eq!(map.indices_at(5, 5, 0), &[table.empty_index()]);
    }
}
