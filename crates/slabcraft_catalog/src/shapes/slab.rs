//! Half-height slab. Available in the base namespace.

use slabcraft_geometry::Grid;
use slabcraft_world::constants::PROP_TYPE;
use slabcraft_world::Material;

use crate::option::ShapeOption;
use crate::shape::Shape;

/// Bottom-half slab: a single half-height cell.
pub struct SlabShape {
    template: Grid,
}

impl SlabShape {
    /// Stable catalog name.
    pub const NAME: &'static str = "slab";

    /// Creates the shape with its canonical template.
    #[must_use]
    pub fn new() -> Self {
        Self {
            template: Grid::of1(0.5),
        }
    }
}

impl Default for SlabShape {
    fn default() -> Self {
        Self::new()
    }
}

impl Shape for SlabShape {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn display_name(&self) -> &'static str {
        "Slab"
    }

    fn available_options(&self) -> &'static [ShapeOption] {
        &[ShapeOption::Enable, ShapeOption::Disable]
    }

    fn vanilla(&self) -> bool {
        true
    }

    fn min_resolution(&self, _option: ShapeOption) -> u32 {
        1
    }

    fn default_option(&self) -> ShapeOption {
        ShapeOption::Enable
    }

    fn bake_variants(&self, option: ShapeOption, resolution: u32) -> Vec<Grid> {
        debug_assert!(resolution >= self.min_resolution(option));
        if option == ShapeOption::Enable {
            vec![self.template.upscale(resolution)]
        } else {
            Vec::new()
        }
    }

    fn output_materials(&self, output: &str, _option: ShapeOption) -> Vec<Material> {
        vec![Material::new(output).with_property(PROP_TYPE, "bottom")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bakes_one_variant_when_enabled() {
        let shape = SlabShape::new();
        let grids = shape.bake_variants(ShapeOption::Enable, 2);
        assert_eq!(grids.len(), 1);
        assert_eq!(grids[0].values(), &[1.0, 1.0, 1.0, 1.0]);
        assert!(shape.bake_variants(ShapeOption::Disable, 2).is_empty());
    }

    #[test]
    fn output_is_a_bottom_slab() {
        let shape = SlabShape::new();
        let mats = shape.output_materials("minecraft:stone_slab", ShapeOption::Enable);
        assert_eq!(mats.len(), 1);
        assert_eq!(mats[0].id(), "minecraft:stone_slab");
        assert_eq!(mats[0].property(PROP_TYPE), Some("bottom"));
    }
}
