//! # The Variant Table
//!
//! Built once per layer: every enabled shape baked at the layer's
//! resolution, flattened into one indexed list the matcher ranks over.
//! Each variant records which shape produced it, its local output index,
//! its placement height, and the option it was baked with.
//!
//! When stacking is off, every baked grid is additionally enumerated as
//! a one-higher fill (`add(1)`) and a cut (`sub(1)`), so a single flat
//! ranking covers all three placements. A parallel table restricted to
//! stackable shapes serves the lower layers of stacked columns. FULL and
//! EMPTY close both tables so every ranking has a guaranteed fallback.

use std::collections::HashSet;

use slabcraft_catalog::shapes::{AltLayerShape, LayerShape};
use slabcraft_catalog::{ShapeCatalog, ShapeOption};
use slabcraft_geometry::Grid;

use crate::settings::LayerSettings;

/// One baked catalog variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariantEntry {
    /// Catalog index of the producing shape.
    pub shape: usize,
    /// Local output-material index within the shape.
    pub local: usize,
    /// Placement height: 0 cuts at the surface, 1 fills one block up,
    /// 2 fills two blocks up.
    pub height: u8,
    /// Option the variant was baked with.
    pub option: ShapeOption,
}

/// The baked variant lists for one layer.
pub struct VariantTable {
    /// Resolution every variant was baked at.
    pub resolution: u32,
    grids: Vec<Grid>,
    entries: Vec<VariantEntry>,
    grids_stacked: Vec<Grid>,
    entries_stacked: Vec<VariantEntry>,
    layer_indices: HashSet<u32>,
    disabled: bool,
}

impl VariantTable {
    /// Bakes the table for a layer. The resolution is the maximum of the
    /// enabled shapes' minimum resolutions.
    #[must_use]
    pub fn build(catalog: &ShapeCatalog, settings: &LayerSettings, stacking: bool) -> Self {
        let mut any_enabled = false;
        let mut resolution = 1;
        for i in 0..catalog.normal_count() {
            let shape = catalog.shape(i);
            let option = settings.option_for(shape);
            if option != ShapeOption::Disable {
                any_enabled = true;
                resolution = resolution.max(shape.min_resolution(option));
            }
        }
        if !any_enabled {
            return Self {
                resolution: 1,
                grids: Vec::new(),
                entries: Vec::new(),
                grids_stacked: Vec::new(),
                entries_stacked: Vec::new(),
                layer_indices: HashSet::new(),
                disabled: true,
            };
        }

        let mut grids = Vec::new();
        let mut entries = Vec::new();
        let mut grids_stacked = Vec::new();
        let mut entries_stacked = Vec::new();

        for i in 0..catalog.normal_count() {
            let shape = catalog.shape(i);
            let option = settings.option_for(shape);
            if option == ShapeOption::Disable {
                continue;
            }
            let baked = shape.bake_variants(option, resolution);
            if baked.is_empty() {
                continue;
            }
            for (local, grid) in baked.iter().enumerate() {
                grids.push(grid.clone());
                entries.push(VariantEntry {
                    shape: i,
                    local,
                    height: 1,
                    option,
                });
            }
            if shape.supports_stacking() {
                for (local, grid) in baked.iter().enumerate() {
                    grids_stacked.push(grid.clone());
                    entries_stacked.push(VariantEntry {
                        shape: i,
                        local,
                        height: 1,
                        option,
                    });
                }
            }
            if !stacking {
                for (local, grid) in baked.iter().enumerate() {
                    let mut lifted = grid.clone();
                    lifted.add(1.0);
                    grids.push(lifted);
                    entries.push(VariantEntry {
                        shape: i,
                        local,
                        height: 2,
                        option,
                    });
                }
                for (local, grid) in baked.iter().enumerate() {
                    let mut lowered = grid.clone();
                    lowered.sub(1.0);
                    grids.push(lowered);
                    entries.push(VariantEntry {
                        shape: i,
                        local,
                        height: 0,
                        option,
                    });
                }
            }
        }

        // FULL then EMPTY close both tables.
        for sentinel in [catalog.full_index(), catalog.empty_index()] {
            let baked = catalog
                .shape(sentinel)
                .bake_variants(ShapeOption::Enable, resolution);
            let entry = VariantEntry {
                shape: sentinel,
                local: 0,
                height: 1,
                option: ShapeOption::Enable,
            };
            grids.push(baked[0].clone());
            entries.push(entry);
            grids_stacked.push(baked[0].clone());
            entries_stacked.push(entry);
        }

        let layer_indices = entries
            .iter()
            .enumerate()
            .filter(|(_, e)| {
                let name = catalog.shape(e.shape).name();
                name == LayerShape::NAME || name == AltLayerShape::NAME
            })
            .map(|(i, _)| i as u32)
            .collect();

        Self {
            resolution,
            grids,
            entries,
            grids_stacked,
            entries_stacked,
            layer_indices,
            disabled: false,
        }
    }

    /// Whether every shape was disabled; the layer is then a no-op.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Baked grids of the top table.
    #[must_use]
    pub fn grids(&self) -> &[Grid] {
        &self.grids
    }

    /// Baked grids of the stacked table.
    #[must_use]
    pub fn grids_stacked(&self) -> &[Grid] {
        &self.grids_stacked
    }

    /// Entries of the top table.
    #[must_use]
    pub fn entries(&self) -> &[VariantEntry] {
        &self.entries
    }

    /// Entries of the stacked table.
    #[must_use]
    pub fn entries_stacked(&self) -> &[VariantEntry] {
        &self.entries_stacked
    }

    /// Entry at a top-table index.
    #[must_use]
    pub fn entry(&self, index: u32) -> VariantEntry {
        self.entries[index as usize]
    }

    /// Entry at a stacked-table index.
    #[must_use]
    pub fn entry_stacked(&self, index: u32) -> VariantEntry {
        self.entries_stacked[index as usize]
    }

    /// Top-table index of the FULL sentinel.
    #[must_use]
    pub fn full_index(&self) -> u32 {
        self.entries.len() as u32 - 2
    }

    /// Top-table index of the EMPTY sentinel.
    #[must_use]
    pub fn empty_index(&self) -> u32 {
        self.entries.len() as u32 - 1
    }

    /// Stacked-table index of the FULL sentinel.
    #[must_use]
    pub fn full_index_stacked(&self) -> u32 {
        self.entries_stacked.len() as u32 - 2
    }

    /// Stacked-table index of the EMPTY sentinel.
    #[must_use]
    pub fn empty_index_stacked(&self) -> u32 {
        self.entries_stacked.len() as u32 - 1
    }

    /// Top-table indices of layer-family variants.
    #[must_use]
    pub fn layer_indices(&self) -> &HashSet<u32> {
        &self.layer_indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slabcraft_catalog::ShapeKind;

    const MAPPING: &str = "block,slab,stairs,layer\n\
                           stone,stone_slab,stone_stairs,snow\n";

    fn catalog() -> ShapeCatalog {
        ShapeCatalog::from_csv(MAPPING, "").unwrap()
    }

    fn settings(pairs: &[(&str, ShapeOption)]) -> LayerSettings {
        let mut settings = LayerSettings::default();
        // Unlisted shapes default per shape; pin everything explicitly.
        for name in [
            "slab",
            "stairs",
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
        for (name, option) in pairs {
            settings.shapes.insert((*name).to_owned(), *option);
        }
        settings
    }

    #[test]
    fn all_disabled_layers_produce_a_disabled_table() {
        let catalog = catalog();
        let table = VariantTable::build(&catalog, &settings(&[]), false);
        assert!(table.is_disabled());
    }

    #[test]
    fn flat_tables_enumerate_fill_two_and_cut_copies() {
        let catalog = catalog();
        let table = VariantTable::build(
            &catalog,
            &settings(&[("slab", ShapeOption::Enable)]),
            false,
        );
        // slab fill-one, fill-two, cut, then FULL and EMPTY.
        assert_eq!(table.entries().len(), 5);
        assert_eq!(table.entry(0).height, 1);
        assert_eq!(table.entry(1).height, 2);
        assert_eq!(table.entry(2).height, 0);
        assert_eq!(table.grids()[0].get(0), 0.5);
        assert_eq!(table.grids()[1].get(0), 1.5);
        assert_eq!(table.grids()[2].get(0), -0.5);
        assert_eq!(catalog.kind(table.entry(table.full_index()).shape), ShapeKind::Full);
        assert_eq!(
            catalog.kind(table.entry(table.empty_index()).shape),
            ShapeKind::Empty
        );
    }

    #[test]
    fn stacking_skips_the_extra_heights() {
        let catalog = catalog();
        let table = VariantTable::build(
            &catalog,
            &settings(&[("slab", ShapeOption::Enable), ("stairs", ShapeOption::Enable)]),
            true,
        );
        // 1 slab + 12 stairs + 2 sentinels, fill-one only.
        assert_eq!(table.entries().len(), 15);
        assert!(table.entries().iter().all(|e| e.height == 1));
        // Only stairs stack; the stacked table is 12 + 2 sentinels.
        assert_eq!(table.entries_stacked().len(), 14);
    }

    #[test]
    fn resolution_is_the_max_of_enabled_minimums() {
        let catalog = catalog();
        let table = VariantTable::build(
            &catalog,
            &settings(&[("slab", ShapeOption::Enable)]),
            false,
        );
        assert_eq!(table.resolution, 1);
        let table = VariantTable::build(
            &catalog,
            &settings(&[("slab", ShapeOption::Enable), ("stairs", ShapeOption::Enable)]),
            false,
        );
        assert_eq!(table.resolution, 2);
        // The slab template is upscaled to match.
        assert_eq!(table.grids()[0].size(), 2);
        assert_eq!(table.grids()[0].get(0), 1.0);
    }

    #[test]
    fn layer_family_indices_are_tracked() {
        let catalog = catalog();
        let table = VariantTable::build(
            &catalog,
            &settings(&[("slab", ShapeOption::Enable), ("layer", ShapeOption::Enable)]),
            true,
        );
        // slab at 0, layer variants at 1..=7.
        assert!(!table.layer_indices().contains(&0));
        for i in 1..=7 {
            assert!(table.layer_indices().contains(&i));
        }
    }
}
