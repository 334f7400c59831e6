//! The FULL and EMPTY sentinels.
//!
//! Both sit at fixed tail positions of every catalog enumeration and are
//! unconditionally available, so a ranked candidate walk always
//! terminates: FULL resolves to the base material itself, EMPTY resolves
//! to no placement at all.

use slabcraft_geometry::Grid;
use slabcraft_world::Material;

use crate::option::ShapeOption;
use crate::shape::{Shape, ShapeKind};

/// Full-block sentinel.
pub struct FullShape {
    template: Grid,
}

impl FullShape {
    /// Stable catalog name.
    pub const NAME: &'static str = "full";

    /// Creates the sentinel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            template: Grid::of1(1.0),
        }
    }
}

impl Default for FullShape {
    fn default() -> Self {
        Self::new()
    }
}

impl Shape for FullShape {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn display_name(&self) -> &'static str {
        "Full"
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Full
    }

    fn available_options(&self) -> &'static [ShapeOption] {
        &[]
    }

    fn vanilla(&self) -> bool {
        true
    }

    fn min_resolution(&self, _option: ShapeOption) -> u32 {
        1
    }

    fn always_active(&self) -> bool {
        true
    }

    fn bake_variants(&self, _option: ShapeOption, resolution: u32) -> Vec<Grid> {
        vec![self.template.upscale(resolution)]
    }

    fn output_materials(&self, _output: &str, _option: ShapeOption) -> Vec<Material> {
        // Resolved by the catalog to the base material directly.
        Vec::new()
    }
}

/// Empty sentinel.
pub struct EmptyShape {
    template: Grid,
}

impl EmptyShape {
    /// Stable catalog name.
    pub const NAME: &'static str = "empty";

    /// Creates the sentinel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            template: Grid::of1(0.0),
        }
    }
}

impl Default for EmptyShape {
    fn default() -> Self {
        Self::new()
    }
}

impl Shape for EmptyShape {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn display_name(&self) -> &'static str {
        "Empty"
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Empty
    }

    fn available_options(&self) -> &'static [ShapeOption] {
        &[]
    }

    fn vanilla(&self) -> bool {
        true
    }

    fn min_resolution(&self, _option: ShapeOption) -> u32 {
        1
    }

    fn always_active(&self) -> bool {
        true
    }

    fn bake_variants(&self, _option: ShapeOption, resolution: u32) -> Vec<Grid> {
        vec![self.template.upscale(resolution)]
    }

    fn output_materials(&self, _output: &str, _option: ShapeOption) -> Vec<Material> {
        // Resolved by the catalog to the unmapped sentinel.
        Vec::new()
    }
}
