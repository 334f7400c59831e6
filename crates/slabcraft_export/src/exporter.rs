//! # The Detail Exporter
//!
//! Renders one chunk at a time: resolves each column's ranked candidate
//! list against the base material's availability sets and applies the
//! placement policy (cut/fill heights, solid-replacement rules,
//! waterlogging, double-block collapse).

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};

use slabcraft_catalog::{Placement, ShapeCatalog, ShapeKind};
use slabcraft_terrain::{difference_map, upscale_tile, HeightField, TerrainError};
use slabcraft_world::constants::{
    CHUNK_SIZE, EXTENDED_NAMESPACE, LOSS_EXPONENT, PROP_HALF, PROP_WATERLOGGED, TILE_SIZE,
};
use slabcraft_world::{Material, MaterialPalette, TerrainSource, TerrainTile, VoxelSink};

use crate::cache::ShapemapCache;
use crate::matcher::build_shapemap;
use crate::settings::LayerSettings;
use crate::shapemap::Shapemap;
use crate::variants::VariantTable;

/// Allowed variant-index sets for one base material.
struct AvailabilitySets {
    /// Top-table indices the material provides.
    top: HashSet<u32>,
    /// `top` with the layer-family shapes removed.
    top_no_layer: HashSet<u32>,
    /// Stacked-table indices the material provides.
    stacked: HashSet<u32>,
}

/// Per-layer exporter: owns the baked variant table, the tile-level
/// shapemap cache, and the per-material availability cache.
pub struct DetailExporter {
    catalog: Arc<ShapeCatalog>,
    settings: LayerSettings,
    table: VariantTable,
    stacking: bool,
    disabled: bool,
    cache: ShapemapCache,
    availability: Mutex<HashMap<String, Arc<AvailabilitySets>>>,
}

impl DetailExporter {
    /// Creates the exporter for a layer, baking its variant table.
    ///
    /// A layer with every shape disabled, or a mimic layer with an empty
    /// remap table, renders as a no-op.
    #[must_use]
    pub fn new(catalog: Arc<ShapeCatalog>, settings: LayerSettings) -> Self {
        let stacking = settings.stacking && settings.allow_extended;
        let mut disabled = false;
        if settings.mimic_terrain && settings.mapping.is_empty() {
            warn!(layer = %settings.name, "layer has an empty terrain mapping");
            disabled = true;
        }
        let table = VariantTable::build(&catalog, &settings, stacking);
        if table.is_disabled() {
            disabled = true;
        }
        Self {
            catalog,
            settings,
            table,
            stacking,
            disabled,
            cache: ShapemapCache::new(),
            availability: Mutex::new(HashMap::new()),
        }
    }

    /// Whether the layer renders as a no-op.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// The resolution the layer's variants were baked at.
    #[must_use]
    pub fn resolution(&self) -> u32 {
        self.table.resolution
    }

    /// Renders the detail layer into one chunk of a tile.
    ///
    /// # Errors
    ///
    /// Propagates resampling contract violations; these cannot occur for
    /// a resolution derived from the baked catalog.
    pub fn render(
        &self,
        tile: &dyn TerrainTile,
        source: &dyn TerrainSource,
        chunk: &mut dyn VoxelSink,
        palette: &dyn MaterialPalette,
        seed: u64,
    ) -> Result<(), TerrainError> {
        if self.disabled {
            return Ok(());
        }

        let key = (tile.tile_x(), tile.tile_y());
        let shapemap = self.cache.get_or_compute(key, || {
            debug!(tile_x = key.0, tile_y = key.1, "baking tile shapemap");
            let upscaled = if self.table.resolution == 1 {
                // No resampling needed, just copy the heights over.
                let mut field = HeightField::new(TILE_SIZE);
                for x in 0..TILE_SIZE {
                    for y in 0..TILE_SIZE {
                        field.set(x, y, tile.height(x, y));
                    }
                }
                field
            } else {
                upscale_tile(tile, source, self.settings.interpolation, self.table.resolution)?
            };
            let diff = difference_map(&upscaled, tile, self.settings.height_offset)?;
            Ok(build_shapemap(diff, &self.table, self.stacking, LOSS_EXPONENT))
        })?;

        let x_offset = ((chunk.chunk_x() & 7) << 4) as usize;
        let z_offset = ((chunk.chunk_z() & 7) << 4) as usize;

        for x in 0..CHUNK_SIZE {
            let local_x = x_offset + x;
            let world_x = (chunk.chunk_x() << 4) + x as i32;
            for z in 0..CHUNK_SIZE {
                let local_z = z_offset + z;
                let world_z = (chunk.chunk_z() << 4) + z as i32;
                if !tile.detail_present(local_x, local_z) {
                    continue;
                }
                let column = ColumnContext {
                    x,
                    z,
                    local_x,
                    local_z,
                    world_x,
                    world_z,
                    terrain_height: tile.int_height(local_x, local_z),
                };
                if self.stacking {
                    self.render_stacked_column(
                        tile,
                        chunk,
                        palette,
                        seed,
                        shapemap.as_ref(),
                        &column,
                    );
                } else {
                    self.render_flat_column(
                        tile,
                        chunk,
                        palette,
                        seed,
                        shapemap.as_ref(),
                        &column,
                    );
                }
            }
        }

        self.cache.note_chunk_done(key);
        Ok(())
    }

    fn base_material(
        &self,
        block_below: &Material,
        palette: &dyn MaterialPalette,
        seed: u64,
        column: &ColumnContext,
    ) -> Option<Material> {
        if self.settings.mimic_terrain {
            self.settings.mapping.get(block_below.id()).cloned()
        } else {
            Some(palette.pick(
                seed,
                column.world_x,
                column.world_z,
                column.terrain_height + 1,
            ))
        }
    }

    fn render_stacked_column(
        &self,
        _tile: &dyn TerrainTile,
        chunk: &mut dyn VoxelSink,
        palette: &dyn MaterialPalette,
        seed: u64,
        shapemap: &dyn Shapemap,
        column: &ColumnContext,
    ) {
        let block_below = chunk.material(column.x, column.terrain_height, column.z);
        let Some(base) = self.base_material(&block_below, palette, seed, column) else {
            // Mimic layer without a remap for the underlying block.
            return;
        };
        let sets = self.availability_for(&base);
        let min_z = shapemap.min_z();
        let range = shapemap.range();

        let mut top = true;
        for rel_z in (0..range).rev() {
            let mut update_top = true;
            let allowed = if top { &sets.top } else { &sets.stacked };
            let Some(mut idx) = shapemap.index_at(column.local_x, column.local_z, rel_z, allowed)
            else {
                continue;
            };

            if top && self.table.layer_indices().contains(&idx) && rel_z >= 1 {
                // Layer-family shapes may only rest on a full block.
                // The rule is applied asymmetrically between the top and
                // lower layers on purpose; see the design notes before
                // "correcting" it.
                let below =
                    shapemap.index_at(column.local_x, column.local_z, rel_z - 1, &sets.stacked);
                if below != Some(self.table.full_index_stacked()) {
                    let Some(redo) = shapemap.index_at(
                        column.local_x,
                        column.local_z,
                        rel_z,
                        &sets.top_no_layer,
                    ) else {
                        continue;
                    };
                    idx = redo;
                    if idx == self.table.empty_index() {
                        update_top = false;
                    }
                }
            }

            let entry = if top {
                self.table.entry(idx)
            } else {
                self.table.entry_stacked(idx)
            };
            let Some(mut material) =
                self.catalog
                    .material(entry.shape, &base, entry.local, entry.option)
            else {
                // EMPTY, or no output material for this shape.
                continue;
            };

            let full_idx = if top {
                self.table.full_index()
            } else {
                self.table.full_index_stacked()
            };
            let dz = rel_z as i32 + min_z + 1;
            if idx == full_idx && dz <= 0 {
                // A full block at or below the original surface is the
                // terrain itself.
                continue;
            }

            let y = column.terrain_height + dz;
            let block_above = chunk.material(column.x, y + 1, column.z);
            if block_above.is_watery() && self.catalog.kind(entry.shape) != ShapeKind::Full {
                material = material.with_property(PROP_WATERLOGGED, "true");
            }

            self.catalog.shape(entry.shape).place(
                Placement {
                    world_x: column.world_x,
                    world_y: y,
                    world_z: column.world_z,
                    local_x: column.x,
                    local_z: column.z,
                },
                chunk,
                &material,
                &base,
            );
            if update_top {
                top = false;
            }
        }
    }

    fn render_flat_column(
        &self,
        tile: &dyn TerrainTile,
        chunk: &mut dyn VoxelSink,
        palette: &dyn MaterialPalette,
        seed: u64,
        shapemap: &dyn Shapemap,
        column: &ColumnContext,
    ) {
        let h = column.terrain_height;
        let block_below = if h >= chunk.min_height() && h < chunk.max_height() {
            chunk.material(column.x, h, column.z)
        } else {
            Material::air()
        };
        if !block_below.is_solid() {
            return;
        }
        let Some(base) = self.base_material(&block_below, palette, seed, column) else {
            return;
        };

        let above = |dy: i32| {
            (h < chunk.max_height() - dy).then(|| chunk.material(column.x, h + dy, column.z))
        };
        let block_above = above(1);
        let block_two_above = above(2);
        let block_three_above = above(3);

        let sets = self.availability_for(&base);
        let Some(idx) = shapemap.index_at(column.local_x, column.local_z, 0, &sets.top) else {
            return;
        };
        let entry = self.table.entry(idx);
        let Some(mut material) =
            self.catalog
                .material(entry.shape, &base, entry.local, entry.option)
        else {
            return;
        };
        if material.in_namespace(EXTENDED_NAMESPACE) && !self.settings.allow_extended {
            return;
        }

        let kind = self.catalog.kind(entry.shape);
        let place = |chunk: &mut dyn VoxelSink, y: i32, material: &Material| {
            self.catalog.shape(entry.shape).place(
                Placement {
                    world_x: column.world_x,
                    world_y: y,
                    world_z: column.world_z,
                    local_x: column.x,
                    local_z: column.z,
                },
                chunk,
                material,
                &base,
            );
        };

        match entry.height {
            1 => {
                let Some(block_above) = block_above else {
                    return;
                };
                if kind != ShapeKind::Full && self.fill_blocked(&block_above) {
                    return;
                }
                if block_above.is_watery() && kind != ShapeKind::Full {
                    material = material.with_property(PROP_WATERLOGGED, "true");
                }
                place(chunk, h + 1, &material);
                if is_double_block(&block_above, block_two_above.as_ref()) {
                    chunk.set_material(column.x, h + 2, column.z, Material::air());
                }
            }
            2 => {
                if block_above.is_none() {
                    return;
                }
                // The lower block of a two-high fill is the base itself.
                chunk.set_material(column.x, h + 1, column.z, base.clone());
                let Some(block_two) = block_two_above else {
                    return;
                };
                if kind != ShapeKind::Full && self.fill_blocked(&block_two) {
                    return;
                }
                if block_two.is_watery() && kind != ShapeKind::Full {
                    material = material.with_property(PROP_WATERLOGGED, "true");
                }
                place(chunk, h + 2, &material);
                if is_double_block(&block_two, block_three_above.as_ref()) {
                    chunk.set_material(column.x, h + 3, column.z, Material::air());
                }
            }
            _ => {
                // A cut replaces the surface block itself.
                if block_below.is_watery()
                    || tile.water_level(column.local_x, column.local_z) == h
                {
                    material = material.with_property(PROP_WATERLOGGED, "true");
                } else if block_above.as_ref().is_some_and(Material::is_watery) {
                    material = material.with_property(PROP_WATERLOGGED, "true");
                }
                place(chunk, h, &material);
                if is_double_block(&block_below, block_above.as_ref()) {
                    chunk.set_material(column.x, h + 1, column.z, Material::air());
                }
            }
        }
    }

    /// Whether the replacement policy forbids a non-FULL fill over the
    /// existing block.
    fn fill_blocked(&self, existing: &Material) -> bool {
        if self.settings.replace_non_solid {
            existing.is_solid()
        } else {
            !existing.is_air() && !existing.is_watery()
        }
    }

    fn availability_for(&self, base: &Material) -> Arc<AvailabilitySets> {
        if let Some(sets) = self.availability.lock().get(base.id()) {
            return Arc::clone(sets);
        }
        let sets = Arc::new(self.compute_availability(base));
        self.availability
            .lock()
            .insert(base.id().to_owned(), Arc::clone(&sets));
        sets
    }

    fn compute_availability(&self, base: &Material) -> AvailabilitySets {
        let names = self.catalog.available_shape_names(base.id());
        let top = self.allowed_indices(&names, base, false);
        let stacked = self.allowed_indices(&names, base, true);
        let top_no_layer = top
            .iter()
            .copied()
            .filter(|i| !self.table.layer_indices().contains(i))
            .collect();
        AvailabilitySets {
            top,
            top_no_layer,
            stacked,
        }
    }

    fn allowed_indices(
        &self,
        names: &[&'static str],
        base: &Material,
        stacked: bool,
    ) -> HashSet<u32> {
        let entries = if stacked {
            self.table.entries_stacked()
        } else {
            self.table.entries()
        };
        let mut allowed = HashSet::new();
        for (i, entry) in entries.iter().enumerate() {
            let shape = self.catalog.shape(entry.shape);
            if !names.contains(&shape.name()) {
                continue;
            }
            let mapped_ok = self.settings.allow_extended
                || self
                    .catalog
                    .mapped_output(entry.shape, base.id())
                    .is_some_and(|out| !out.starts_with(EXTENDED_NAMESPACE));
            if mapped_ok || matches!(shape.kind(), ShapeKind::Full | ShapeKind::Empty) {
                allowed.insert(i as u32);
            }
        }
        allowed
    }
}

/// Per-column coordinates threaded through the resolvers.
struct ColumnContext {
    x: usize,
    z: usize,
    local_x: usize,
    local_z: usize,
    world_x: i32,
    world_z: i32,
    terrain_height: i32,
}

/// Whether two stacked blocks are the halves of one double-height block
/// (such as tall grass) that a partial overwrite would orphan.
fn is_double_block(lower: &Material, upper: Option<&Material>) -> bool {
    let Some(upper) = upper else {
        return false;
    };
    lower.property(PROP_HALF) == Some("lower")
        && upper.property(PROP_HALF) == Some("upper")
        && lower.id() == upper.id()
}
