//! Extended-namespace vertical slab: a full-height wall strip in three
//! thicknesses plus a three-quarter complement.

use slabcraft_geometry::Grid;
use slabcraft_world::constants::{PROP_FACING, PROP_LAYER};
use slabcraft_world::Material;

use crate::option::ShapeOption;
use crate::shape::{push_with_rotations, Shape};

const FACINGS: [&str; 4] = ["east", "north", "west", "south"];

/// Vertical slab shape.
pub struct VerticalSlabShape {
    thin8: Grid,
    thin4: Grid,
    half2: Grid,
    thick4: Grid,
}

impl VerticalSlabShape {
    /// Stable catalog name.
    pub const NAME: &'static str = "vert_slab";

    /// Creates the shape with its canonical templates.
    #[must_use]
    pub fn new() -> Self {
        let mut thin8_rows = [[0.0f32; 8]; 8];
        thin8_rows[0] = [8.0; 8];
        let mut thin4_rows = [[0.0f32; 4]; 4];
        thin4_rows[0] = [4.0; 4];
        let mut thick4_rows = [[4.0f32; 4]; 4];
        thick4_rows[3] = [0.0; 4];
        Self {
            thin8: Grid::of8(thin8_rows),
            thin4: Grid::of4(thin4_rows),
            half2: Grid::of2([[1.0, 1.0], [0.0, 0.0]]),
            thick4: Grid::of4(thick4_rows),
        }
    }

    fn family_layers(option: ShapeOption) -> &'static [&'static str] {
        match option {
            ShapeOption::Halves => &["3"],
            ShapeOption::Quarters => &["3", "2", "4"],
            _ => &["3", "2", "4", "1"],
        }
    }
}

impl Default for VerticalSlabShape {
    fn default() -> Self {
        Self::new()
    }
}

impl Shape for VerticalSlabShape {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn display_name(&self) -> &'static str {
        "Vertical Slab"
    }

    fn available_options(&self) -> &'static [ShapeOption] {
        &[
            ShapeOption::Disable,
            ShapeOption::Eighths,
            ShapeOption::Quarters,
            ShapeOption::Halves,
        ]
    }

    fn vanilla(&self) -> bool {
        false
    }

    fn min_resolution(&self, option: ShapeOption) -> u32 {
        match option {
            ShapeOption::Eighths => 8,
            ShapeOption::Quarters => 4,
            ShapeOption::Halves => 2,
            _ => 1,
        }
    }

    fn bake_variants(&self, option: ShapeOption, resolution: u32) -> Vec<Grid> {
        debug_assert!(resolution >= self.min_resolution(option));
        if option == ShapeOption::Disable {
            return Vec::new();
        }
        let mut grids = Vec::new();
        push_with_rotations(&self.half2.upscale(resolution / 2), &mut grids);
        if option == ShapeOption::Halves {
            return grids;
        }
        push_with_rotations(&self.thin4.upscale(resolution / 4), &mut grids);
        push_with_rotations(&self.thick4.upscale(resolution / 4), &mut grids);
        if option == ShapeOption::Eighths {
            push_with_rotations(&self.thin8.upscale(resolution / 8), &mut grids);
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
                        .with_property(PROP_LAYER, layer),
                );
            }
        }
        mats
    }

    fn fallback_output(&self, base: &Material) -> Option<String> {
        Some(format!("{}_vertical_slab", base.id()))
    }
}
