//! Player-head decoration.
//!
//! The head shape is the only one with a placement side effect: besides
//! the block write it attaches a secondary entity record carrying the
//! per-base-material texture reference. A base material listed in the
//! head table makes the shape available even without a mapping-row
//! entry.

use std::sync::Arc;

use slabcraft_geometry::Grid;
use slabcraft_world::{HeadEntity, Material, VoxelSink};

use crate::mapping::HeadTable;
use crate::option::ShapeOption;
use crate::shape::{Placement, Shape};

/// Block id every head resolves to.
pub const HEAD_BLOCK_ID: &str = "minecraft:player_head";

/// Centered head decoration, half a block tall over the middle quarter
/// of the cell.
pub struct HeadShape {
    table: Arc<HeadTable>,
    material: Material,
    template: Grid,
}

impl HeadShape {
    /// Stable catalog name.
    pub const NAME: &'static str = "head";

    /// Creates the shape over a loaded head table.
    #[must_use]
    pub fn new(table: Arc<HeadTable>) -> Self {
        Self {
            table,
            material: Material::new(HEAD_BLOCK_ID),
            template: Grid::of4([
                [0.0, 0.0, 0.0, 0.0],
                [0.0, 0.5, 0.5, 0.0],
                [0.0, 0.5, 0.5, 0.0],
                [0.0, 0.0, 0.0, 0.0],
            ]),
        }
    }
}

impl Shape for HeadShape {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn display_name(&self) -> &'static str {
        "Head"
    }

    fn available_options(&self) -> &'static [ShapeOption] {
        &[ShapeOption::Enable, ShapeOption::Disable]
    }

    fn vanilla(&self) -> bool {
        true
    }

    fn min_resolution(&self, _option: ShapeOption) -> u32 {
        4
    }

    fn bake_variants(&self, option: ShapeOption, resolution: u32) -> Vec<Grid> {
        debug_assert!(resolution >= self.min_resolution(option));
        if option == ShapeOption::Enable {
            vec![self.template.upscale(resolution / 4)]
        } else {
            Vec::new()
        }
    }

    fn output_materials(&self, _output: &str, _option: ShapeOption) -> Vec<Material> {
        // The output id is fixed; only the attached texture varies.
        vec![self.material.clone()]
    }

    fn place(
        &self,
        at: Placement,
        sink: &mut dyn VoxelSink,
        _material: &Material,
        base: &Material,
    ) {
        if let Some(texture) = self.table.texture(base.id()) {
            sink.set_material(at.local_x, at.world_y, at.local_z, self.material.clone());
            sink.attach_head(HeadEntity {
                x: at.world_x,
                y: at.world_y,
                z: at.world_z,
                texture: texture.to_owned(),
            });
        }
    }
}
