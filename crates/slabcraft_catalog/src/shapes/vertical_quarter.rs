//! Extended-namespace vertical quarter. Catalog slot and mapping column
//! are reserved; no templates are baked yet.
//!
//! TODO: author the vertical-quarter template family once the extended
//! block set's layer states for it are pinned down.

use slabcraft_geometry::Grid;
use slabcraft_world::Material;

use crate::option::ShapeOption;
use crate::shape::Shape;

/// Vertical quarter placeholder shape.
pub struct VerticalQuarterShape;

impl VerticalQuarterShape {
    /// Stable catalog name.
    pub const NAME: &'static str = "vert_quarter";
}

impl Shape for VerticalQuarterShape {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn display_name(&self) -> &'static str {
        "Vertical Quarter"
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

    fn min_resolution(&self, _option: ShapeOption) -> u32 {
        4
    }

    fn bake_variants(&self, _option: ShapeOption, _resolution: u32) -> Vec<Grid> {
        Vec::new()
    }

    fn output_materials(&self, _output: &str, _option: ShapeOption) -> Vec<Material> {
        Vec::new()
    }
}
