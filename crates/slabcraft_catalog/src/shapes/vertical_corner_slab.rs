//! Extended-namespace vertical corner slab: a full-height sliver next to
//! a half-height one, hinged left or right.

use slabcraft_geometry::Grid;
use slabcraft_world::constants::{PROP_FACING, PROP_HALF, PROP_HINGE};
use slabcraft_world::Material;

use crate::option::ShapeOption;
use crate::shape::{push_with_rotations, Shape};

/// (facing, hinge) per local index; the order is permuted against the
/// rotation enumeration and kept exactly as authored.
const STATES: [(&str, &str); 8] = [
    ("south", "right"),
    ("east", "left"),
    ("north", "left"),
    ("west", "right"),
    ("north", "right"),
    ("west", "left"),
    ("south", "left"),
    ("east", "right"),
];

/// Vertical corner slab shape.
pub struct VerticalCornerSlabShape {
    left: Grid,
    right: Grid,
}

impl VerticalCornerSlabShape {
    /// Stable catalog name.
    pub const NAME: &'static str = "vert_corner_slab";

    /// Creates the shape with its canonical templates.
    #[must_use]
    pub fn new() -> Self {
        Self {
            left: Grid::of2([[2.0, 0.0], [1.0, 0.0]]),
            right: Grid::of2([[0.0, 2.0], [0.0, 1.0]]),
        }
    }
}

impl Default for VerticalCornerSlabShape {
    fn default() -> Self {
        Self::new()
    }
}

impl Shape for VerticalCornerSlabShape {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn display_name(&self) -> &'static str {
        "Vertical Corner Slab"
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
            push_with_rotations(&self.left.upscale(resolution / 2), &mut grids);
            push_with_rotations(&self.right.upscale(resolution / 2), &mut grids);
        }
        grids
    }

    fn output_materials(&self, output: &str, _option: ShapeOption) -> Vec<Material> {
        STATES
            .iter()
            .map(|(facing, hinge)| {
                Material::new(output)
                    .with_property(PROP_FACING, facing)
                    .with_property(PROP_HINGE, hinge)
                    .with_property(PROP_HALF, "bottom")
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_variants_and_states() {
        let shape = VerticalCornerSlabShape::new();
        let grids = shape.bake_variants(ShapeOption::Enable, 2);
        assert_eq!(grids.len(), 8);
        let mats = shape.output_materials("conquest:stone_vcs", ShapeOption::Enable);
        assert_eq!(mats.len(), 8);
        assert_eq!(mats[0].property(PROP_FACING), Some("south"));
        assert_eq!(mats[0].property(PROP_HINGE), Some("right"));
        assert_eq!(mats[1].property(PROP_FACING), Some("east"));
        assert_eq!(mats[1].property(PROP_HINGE), Some("left"));
    }
}
