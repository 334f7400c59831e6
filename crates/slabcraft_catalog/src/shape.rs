//! # The Shape Trait
//!
//! One interface for every catalog entry: bake oriented geometry
//! variants for a selected option and resolution, and construct the
//! concrete output materials those variants resolve to.

use slabcraft_geometry::{Grid, Rotation};
use slabcraft_world::{Material, VoxelSink};

use crate::option::ShapeOption;

/// Sentinel classification of a catalog entry, compared by value where
/// the resolver needs to special-case the guaranteed fallbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    /// The always-available full-block sentinel.
    Full,
    /// The always-available empty sentinel.
    Empty,
    /// An ordinary catalog shape.
    Normal,
}

/// Position of a single placement, in both global and chunk-local terms.
#[derive(Clone, Copy, Debug)]
pub struct Placement {
    /// Global X coordinate.
    pub world_x: i32,
    /// Global Y (vertical) coordinate.
    pub world_y: i32,
    /// Global Z coordinate.
    pub world_z: i32,
    /// Chunk-local X coordinate.
    pub local_x: usize,
    /// Chunk-local Z coordinate.
    pub local_z: usize,
}

/// A catalog entry: a family of height templates plus the rule mapping a
/// base material to the concrete output materials of each variant.
pub trait Shape: Send + Sync {
    /// Stable name; persisted as a mapping-file column key.
    fn name(&self) -> &'static str;

    /// Human-readable name.
    fn display_name(&self) -> &'static str;

    /// Sentinel classification.
    fn kind(&self) -> ShapeKind {
        ShapeKind::Normal
    }

    /// Options this shape accepts.
    fn available_options(&self) -> &'static [ShapeOption];

    /// Whether the shape's outputs belong to the base namespace. If not,
    /// the shape is only usable when the extended namespace is allowed.
    fn vanilla(&self) -> bool;

    /// Minimum resolution required to bake the given option.
    fn min_resolution(&self, option: ShapeOption) -> u32;

    /// Whether the shape may appear below the top of a stacked column.
    fn supports_stacking(&self) -> bool {
        false
    }

    /// Whether the shape is available regardless of the per-material
    /// mapping (for shapes that do not depend on the base material).
    fn always_active(&self) -> bool {
        false
    }

    /// Option preselected when a layer does not configure this shape.
    fn default_option(&self) -> ShapeOption {
        ShapeOption::Disable
    }

    /// Bakes the ordered geometry variants for an option at a
    /// resolution. Returns an empty list for [`ShapeOption::Disable`].
    ///
    /// Callers must guarantee `resolution >= min_resolution(option)`.
    fn bake_variants(&self, option: ShapeOption, resolution: u32) -> Vec<Grid>;

    /// Builds the concrete output material list for a mapped output id,
    /// ordered by local variant index.
    fn output_materials(&self, output: &str, option: ShapeOption) -> Vec<Material>;

    /// Synthesized output id used when the mapping row has no entry for
    /// this shape, if the shape defines one.
    fn fallback_output(&self, _base: &Material) -> Option<String> {
        None
    }

    /// Writes the shape into a chunk. The default writes a single block;
    /// the head shape overrides this to attach its entity record.
    fn place(
        &self,
        at: Placement,
        sink: &mut dyn VoxelSink,
        material: &Material,
        _base: &Material,
    ) {
        sink.set_material(at.local_x, at.world_y, at.local_z, material.clone());
    }
}

/// Pushes a template and its three quarter-turn copies in enumeration
/// order: canonical, +90, +180, +270.
pub(crate) fn push_with_rotations(grid: &Grid, out: &mut Vec<Grid>) {
    out.push(grid.clone());
    for turn in Rotation::QUARTER_TURNS {
        out.push(grid.rotate(turn));
    }
}
