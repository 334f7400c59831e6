//! # Terrain Access Traits
//!
//! The host editor owns the terrain data; the engine reads it through
//! these traits. Coordinates are tile-local (0..`TILE_SIZE`).

/// One authoritative elevation tile.
pub trait TerrainTile {
    /// Tile grid X coordinate.
    fn tile_x(&self) -> i32;

    /// Tile grid Y coordinate.
    fn tile_y(&self) -> i32;

    /// Unrounded surface height at a column.
    fn height(&self, x: usize, y: usize) -> f32;

    /// Authoritative integer surface height at a column.
    fn int_height(&self, x: usize, y: usize) -> i32;

    /// Water level at a column.
    fn water_level(&self, x: usize, y: usize) -> i32;

    /// Whether the detail layer is painted on a column.
    fn detail_present(&self, x: usize, y: usize) -> bool;
}

/// Tile lookup by tile-grid coordinates, used to pad a tile from its
/// eight neighbors before resampling.
pub trait TerrainSource {
    /// Returns the tile at the given tile-grid position, if it exists.
    fn tile(&self, tile_x: i32, tile_y: i32) -> Option<&dyn TerrainTile>;
}
