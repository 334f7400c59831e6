//! Extended-namespace corner slab: a half-height slab with one quarter
//! missing.

use slabcraft_geometry::Grid;
use slabcraft_world::constants::{PROP_FACING, PROP_HALF};
use slabcraft_world::Material;

use crate::option::ShapeOption;
use crate::shape::{push_with_rotations, Shape};

const FACINGS: [&str; 4] = ["south", "east", "north", "west"];

/// Corner slab shape.
pub struct CornerSlabShape {
    template: Grid,
}

impl CornerSlabShape {
    /// Stable catalog name.
    pub const NAME: &'static str = "corner_slab";

    /// Creates the shape with its canonical template.
    #[must_use]
    pub fn new() -> Self {
        Self {
            template: Grid::of2([[1.0, 1.0], [1.0, 0.0]]),
        }
    }
}

impl Default for CornerSlabShape {
    fn default() -> Self {
        Self::new()
    }
}

impl Shape for CornerSlabShape {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn display_name(&self) -> &'static str {
        "Corner Slab"
    }

    fn available_options(&self) -> &'static [ShapeOption] {
        &[ShapeOption::Disable, ShapeOption::Enable]
    }

    fn vanilla(&self) -> bool {
        false
    }

    fn min_resolution(&self, _option: ShapeOption) -> u32 {
        2
    }

    fn bake_variants(&self, option: ShapeOption, resolution: u32) -> Vec<Grid> {
        debug_assert!(resolution >= self.min_resolution(option));
        let mut grids = Vec::new();
        if option == ShapeOption::Enable {
            push_with_rotations(&self.template.upscale(resolution / 2), &mut grids);
        }
        grids
    }

    fn output_materials(&self, output: &str, _option: ShapeOption) -> Vec<Material> {
        FACINGS
            .iter()
            .map(|facing| {
                Material::new(output)
                    .with_property(PROP_FACING, facing)
                    .with_property(PROP_HALF, "bottom")
            })
            .collect()
    }

    fn fallback_output(&self, base: &Material) -> Option<String> {
        Some(format!("{}_corner_slab", base.id()))
    }
}
