//! Extended-namespace eighth slab: a half-height quarter of the cell.
//! The four orientations are authored directly instead of being
//! rotation-expanded.

use slabcraft_geometry::Grid;
use slabcraft_world::constants::{PROP_FACING, PROP_HALF};
use slabcraft_world::Material;

use crate::option::ShapeOption;
use crate::shape::Shape;

const FACINGS: [&str; 4] = ["south", "east", "north", "west"];

/// Eighth slab shape.
pub struct EighthSlabShape {
    templates: [Grid; 4],
}

impl EighthSlabShape {
    /// Stable catalog name.
    pub const NAME: &'static str = "eighth_slab";

    /// Creates the shape with its four authored orientations.
    #[must_use]
    pub fn new() -> Self {
        Self {
            templates: [
                Grid::of2([[1.0, 0.0], [0.0, 0.0]]),
                Grid::of2([[0.0, 1.0], [0.0, 0.0]]),
                Grid::of2([[0.0, 0.0], [0.0, 1.0]]),
                Grid::of2([[0.0, 0.0], [1.0, 0.0]]),
            ],
        }
    }
}

impl Default for EighthSlabShape {
    fn default() -> Self {
        Self::new()
    }
}

impl Shape for EighthSlabShape {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn display_name(&self) -> &'static str {
        "Eighth Slab"
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
        if option != ShapeOption::Enable {
            return Vec::new();
        }
        self.templates
            .iter()
            .map(|t| t.upscale(resolution / 2))
            .collect()
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_authored_orientations() {
        let shape = EighthSlabShape::new();
        let grids = shape.bake_variants(ShapeOption::Enable, 2);
        assert_eq!(grids.len(), 4);
        assert_eq!(grids[0].values(), &[1.0, 0.0, 0.0, 0.0]);
        assert_eq!(grids[2].values(), &[0.0, 0.0, 0.0, 1.0]);
    }
}
