//! # Voxel Write Traits
//!
//! The engine's only output channels: block writes into a chunk and, for
//! the head shape, a secondary entity record carrying a texture
//! reference.

use crate::material::Material;

/// Secondary entity record attached next to a placed head block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadEntity {
    /// Global X coordinate.
    pub x: i32,
    /// Global Y (vertical) coordinate.
    pub y: i32,
    /// Global Z coordinate.
    pub z: i32,
    /// Texture reference for the head.
    pub texture: String,
}

/// A writable chunk of voxels. Horizontal coordinates are chunk-local
/// (0..`CHUNK_SIZE`); the vertical coordinate is absolute.
pub trait VoxelSink {
    /// Chunk grid X position.
    fn chunk_x(&self) -> i32;

    /// Chunk grid Z position.
    fn chunk_z(&self) -> i32;

    /// Lowest buildable height (inclusive).
    fn min_height(&self) -> i32;

    /// Highest buildable height (exclusive).
    fn max_height(&self) -> i32;

    /// Reads the material at a position.
    fn material(&self, x: usize, y: i32, z: usize) -> Material;

    /// Writes the material at a position.
    fn set_material(&mut self, x: usize, y: i32, z: usize, material: Material);

    /// Attaches a head entity record.
    fn attach_head(&mut self, head: HeadEntity);
}

/// Source of base materials for columns that do not mimic the terrain.
pub trait MaterialPalette {
    /// Picks the material for a global position, deterministically for a
    /// given seed.
    fn pick(&self, seed: u64, x: i32, z: i32, y: i32) -> Material;
}
