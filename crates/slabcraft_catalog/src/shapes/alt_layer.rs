//! Extended-namespace alternative layer block.

use slabcraft_geometry::Grid;
use slabcraft_world::constants::PROP_LAYER;
use slabcraft_world::Material;

use crate::option::ShapeOption;
use crate::shape::Shape;

/// Height table; the first entry is reserved and never baked.
const HEIGHTS: [f32; 4] = [0.125, 0.25, 0.5, 0.75];

/// Extended layer block with quarter-step heights.
pub struct AltLayerShape;

impl AltLayerShape {
    /// Stable catalog name.
    pub const NAME: &'static str = "alt_layer";
}

impl Shape for AltLayerShape {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn display_name(&self) -> &'static str {
        "Alt Layer"
    }

    fn available_options(&self) -> &'static [ShapeOption] {
        &[ShapeOption::Disable, ShapeOption::Enable]
    }

    fn vanilla(&self) -> bool {
        false
    }

    fn min_resolution(&self, _option: ShapeOption) -> u32 {
        1
    }

    fn bake_variants(&self, option: ShapeOption, resolution: u32) -> Vec<Grid> {
        if option != ShapeOption::Enable {
            return Vec::new();
        }
        HEIGHTS[1..]
            .iter()
            .map(|h| Grid::of1(*h).upscale(resolution))
            .collect()
    }

    fn output_materials(&self, output: &str, _option: ShapeOption) -> Vec<Material> {
        (1..=HEIGHTS.len())
            .map(|j| Material::new(output).with_property(PROP_LAYER, &j.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bakes_three_heights() {
        let grids = AltLayerShape.bake_variants(ShapeOption::Enable, 1);
        assert_eq!(grids.len(), 3);
        assert_eq!(grids[0].get(0), 0.25);
        assert_eq!(grids[2].get(0), 0.75);
    }

    #[test]
    fn outputs_use_the_extended_layer_key() {
        let mats = AltLayerShape.output_materials("conquest:dirt_layer", ShapeOption::Enable);
        assert_eq!(mats.len(), 4);
        assert_eq!(mats[0].property(PROP_LAYER), Some("1"));
        assert_eq!(mats[3].property(PROP_LAYER), Some("4"));
    }
}
