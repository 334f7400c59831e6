//! Stairs: straight, inner-corner and outer-corner families, each in
//! four orientations. Available in the base namespace.

use slabcraft_geometry::Grid;
use slabcraft_world::constants::{PROP_FACING, PROP_HALF, PROP_SHAPE};
use slabcraft_world::Material;

use crate::option::ShapeOption;
use crate::shape::{push_with_rotations, Shape};

/// Stair block with its corner variants.
pub struct StairShape {
    straight: Grid,
    inner: Grid,
    outer: Grid,
}

impl StairShape {
    /// Stable catalog name.
    pub const NAME: &'static str = "stairs";

    /// Creates the shape with its canonical templates.
    #[must_use]
    pub fn new() -> Self {
        Self {
            straight: Grid::of2([[1.0, 1.0], [0.5, 0.5]]),
            inner: Grid::of2([[0.5, 1.0], [1.0, 1.0]]),
            outer: Grid::of2([[1.0, 0.5], [0.5, 0.5]]),
        }
    }
}

impl Default for StairShape {
    fn default() -> Self {
        Self::new()
    }
}

/// Local-index order of the twelve stair materials: straight N/E/S/W,
/// then inner, then outer, matching the rotation enumeration of the
/// templates.
const STAIR_STATES: [(&str, &str); 12] = [
    ("west", "straight"),
    ("south", "straight"),
    ("east", "straight"),
    ("north", "straight"),
    ("east", "inner_right"),
    ("east", "inner_left"),
    ("west", "inner_right"),
    ("west", "inner_left"),
    ("west", "outer_right"),
    ("west", "outer_left"),
    ("east", "outer_right"),
    ("east", "outer_left"),
];

impl Shape for StairShape {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn display_name(&self) -> &'static str {
        "Stairs"
    }

    fn available_options(&self) -> &'static [ShapeOption] {
        &[ShapeOption::Enable, ShapeOption::Disable]
    }

    fn vanilla(&self) -> bool {
        true
    }

    fn min_resolution(&self, _option: ShapeOption) -> u32 {
        2
    }

    fn supports_stacking(&self) -> bool {
        true
    }

    fn default_option(&self) -> ShapeOption {
        ShapeOption::Enable
    }

    fn bake_variants(&self, option: ShapeOption, resolution: u32) -> Vec<Grid> {
        debug_assert!(resolution >= self.min_resolution(option));
        if option != ShapeOption::Enable {
            return Vec::new();
        }
        let scale = resolution / 2;
        let mut grids = Vec::with_capacity(12);
        push_with_rotations(&self.straight.upscale(scale), &mut grids);
        push_with_rotations(&self.inner.upscale(scale), &mut grids);
        push_with_rotations(&self.outer.upscale(scale), &mut grids);
        grids
    }

    fn output_materials(&self, output: &str, _option: ShapeOption) -> Vec<Material> {
        STAIR_STATES
            .iter()
            .map(|(facing, shape)| {
                Material::new(output)
                    .with_property(PROP_FACING, facing)
                    .with_property(PROP_SHAPE, shape)
                    .with_property(PROP_HALF, "bottom")
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_variants_in_rotation_order() {
        let shape = StairShape::new();
        let grids = shape.bake_variants(ShapeOption::Enable, 2);
        assert_eq!(grids.len(), 12);
        // Canonical straight stair first, then its quarter turns.
        assert_eq!(grids[0].values(), &[1.0, 1.0, 0.5, 0.5]);
        assert_eq!(grids[1].values(), &[0.5, 1.0, 0.5, 1.0]);
        assert_eq!(grids[2].values(), &[0.5, 0.5, 1.0, 1.0]);
        assert_eq!(grids[3].values(), &[1.0, 0.5, 1.0, 0.5]);
    }

    #[test]
    fn upscaled_bake_matches_resolution() {
        let shape = StairShape::new();
        let grids = shape.bake_variants(ShapeOption::Enable, 4);
        assert_eq!(grids[0].size(), 4);
        assert_eq!(grids[0].get(0), 2.0);
    }

    #[test]
    fn material_states_line_up_with_variants() {
        let shape = StairShape::new();
        let mats = shape.output_materials("minecraft:oak_stairs", ShapeOption::Enable);
        assert_eq!(mats.len(), 12);
        assert_eq!(mats[0].property(PROP_FACING), Some("west"));
        assert_eq!(mats[0].property(PROP_SHAPE), Some("straight"));
        assert_eq!(mats[4].property(PROP_SHAPE), Some("inner_right"));
        assert_eq!(mats[11].property(PROP_SHAPE), Some("outer_left"));
        assert!(mats.iter().all(|m| m.property(PROP_HALF) == Some("bottom")));
    }
}
