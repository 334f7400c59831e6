//! Snow-style layer block: seven partial heights in eighths of a block.

use slabcraft_geometry::Grid;
use slabcraft_world::constants::PROP_LAYERS;
use slabcraft_world::Material;

use crate::option::ShapeOption;
use crate::shape::Shape;

/// Layer block, 1/8 through 7/8 of a block tall.
pub struct LayerShape;

impl LayerShape {
    /// Stable catalog name.
    pub const NAME: &'static str = "layer";
}

impl Shape for LayerShape {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn display_name(&self) -> &'static str {
        "Layer"
    }

    fn available_options(&self) -> &'static [ShapeOption] {
        &[ShapeOption::Disable, ShapeOption::Enable]
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
        if option != ShapeOption::Enable {
            return Vec::new();
        }
        (1..8)
            .map(|i| Grid::of1(i as f32 / 8.0).upscale(resolution))
            .collect()
    }

    fn output_materials(&self, output: &str, _option: ShapeOption) -> Vec<Material> {
        (1..8)
            .map(|i| Material::new(output).with_property(PROP_LAYERS, &i.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_heights() {
        let grids = LayerShape.bake_variants(ShapeOption::Enable, 1);
        assert_eq!(grids.len(), 7);
        assert_eq!(grids[0].get(0), 0.125);
        assert_eq!(grids[6].get(0), 0.875);

        let mats = LayerShape.output_materials("minecraft:snow", ShapeOption::Enable);
        assert_eq!(mats[0].property(PROP_LAYERS), Some("1"));
        assert_eq!(mats[6].property(PROP_LAYERS), Some("7"));
    }
}
