//! Extended-namespace quarter slab: thin horizontal strips along one
//! edge of the cell, plus a three-quarter complement.

use slabcraft_geometry::Grid;
use slabcraft_world::constants::{PROP_FACING, PROP_HALF, PROP_LAYER};
use slabcraft_world::Material;

use crate::option::ShapeOption;
use crate::shape::{push_with_rotations, Shape};

const FACINGS: [&str; 4] = ["east", "north", "west", "south"];

/// Quarter slab shape.
pub struct QuarterSlabShape {
    thin4: Grid,
    half2: Grid,
    thick4: Grid,
}

impl QuarterSlabShape {
    /// Stable catalog name.
    pub const NAME: &'static str = "quarter";

    /// Creates the shape with its canonical templates.
    #[must_use]
    pub fn new() -> Self {
        Self {
            thin4: Grid::of4([
                [1.0, 1.0, 1.0, 1.0],
                [0.0, 0.0, 0.0, 0.0],
                [0.0, 0.0, 0.0, 0.0],
                [0.0, 0.0, 0.0, 0.0],
            ]),
            half2: Grid::of2([[1.0, 1.0], [0.0, 0.0]]),
            thick4: Grid::of4([
                [3.0, 3.0, 3.0, 3.0],
                [3.0, 3.0, 3.0, 3.0],
                [3.0, 3.0, 3.0, 3.0],
                [0.0, 0.0, 0.0, 0.0],
            ]),
        }
    }

    fn family_layers(option: ShapeOption) -> &'static [&'static str] {
        match option {
            ShapeOption::Halves => &["2"],
            _ => &["1", "2", "3"],
        }
    }
}

impl Default for QuarterSlabShape {
    fn default() -> Self {
        Self::new()
    }
}

impl Shape for QuarterSlabShape {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn display_name(&self) -> &'static str {
        "Quarter Slab"
    }

    fn available_options(&self) -> &'static [ShapeOption] {
        &[
            ShapeOption::Disable,
            ShapeOption::Quarters,
            ShapeOption::Halves,
        ]
    }

    fn vanilla(&self) -> bool {
        false
    }

    fn min_resolution(&self, option: ShapeOption) -> u32 {
        match option {
            ShapeOption::Quarters => 4,
            ShapeOption::Halves => 2,
            _ => 1,
        }
    }

    fn bake_variants(&self, option: ShapeOption, resolution: u32) -> Vec<Grid> {
        debug_assert!(resolution >= self.min_resolution(option));
        let mut grids = Vec::new();
        match option {
            ShapeOption::Halves => {
                push_with_rotations(&self.half2.upscale(resolution / 2), &mut grids);
            }
            ShapeOption::Quarters => {
                push_with_rotations(&self.thin4.upscale(resolution / 4), &mut grids);
                push_with_rotations(&self.half2.upscale(resolution / 2), &mut grids);
                push_with_rotations(&self.thick4.upscale(resolution / 4), &mut grids);
            }
            _ => {}
        }
        grids
    }

    fn output_materials(&self, output: &str, option: ShapeOption) -> Vec<Material> {
        let mut mats = Vec::new();
        for layer in Self::family_layers(option) {
            for facing in FACINGS {
                mats.push(
                    Material::new(output)
                        .with_property(PROP_FACING, facing)
                        .with_property(PROP_LAYER, layer)
                        .with_property(PROP_HALF, "bottom"),
                );
            }
        }
        mats
    }

    fn fallback_output(&self, base: &Material) -> Option<String> {
        Some(format!("{}_quarter_slab", base.id()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_counts_per_option() {
        let shape = QuarterSlabShape::new();
        assert_eq!(shape.bake_variants(ShapeOption::Halves, 2).len(), 4);
        assert_eq!(shape.bake_variants(ShapeOption::Quarters, 4).len(), 12);
        assert!(shape.bake_variants(ShapeOption::Disable, 4).is_empty());
    }

    #[test]
    fn quarters_enumerate_thin_half_thick() {
        let shape = QuarterSlabShape::new();
        let grids = shape.bake_variants(ShapeOption::Quarters, 4);
        assert_eq!(grids[0].get(0), 1.0);
        // Half family upscaled from 2x2 doubles its values.
        assert_eq!(grids[4].get(0), 2.0);
        assert_eq!(grids[8].get(0), 3.0);
    }

    #[test]
    fn fallback_synthesizes_a_quarter_slab_id() {
        let shape = QuarterSlabShape::new();
        assert_eq!(
            shape.fallback_output(&Material::new("stone")).unwrap(),
            "minecraft:stone_quarter_slab"
        );
    }
}
