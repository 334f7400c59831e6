//! # Difference Map
//!
//! Per upscaled sub-cell: `(upscaled - int_height + offset) * resolution`.
//! The multiplication keeps the differences in the unit system of the
//! baked catalog templates once a cell is subdivided; at resolution 1 the
//! values are used as-is.

use slabcraft_world::constants::TILE_SIZE;
use slabcraft_world::TerrainTile;

use crate::field::HeightField;
use crate::interpolate::TerrainError;

/// Builds the difference map between an upscaled heightmap and the
/// tile's authoritative integer heights, biased by `add_height`.
///
/// # Errors
///
/// Returns [`TerrainError::ResolutionNotPowerOfTwo`] if the upscaled
/// field's size is not a power-of-two multiple of the tile size.
pub fn difference_map(
    upscaled: &HeightField,
    tile: &dyn TerrainTile,
    add_height: f32,
) -> Result<HeightField, TerrainError> {
    let resolution = (upscaled.size() / TILE_SIZE) as u32;
    if resolution == 0 || !resolution.is_power_of_two() {
        return Err(TerrainError::ResolutionNotPowerOfTwo(resolution));
    }

    let mut out = HeightField::new(upscaled.size());
    if resolution == 1 {
        for x in 0..TILE_SIZE {
            for y in 0..TILE_SIZE {
                let diff = upscaled.get(x, y) - tile.int_height(x, y) as f32 + add_height;
                out.set(x, y, diff);
            }
        }
    } else {
        let res = resolution as usize;
        for i1 in 0..TILE_SIZE {
            for i2 in 0..TILE_SIZE {
                let base_height = tile.int_height(i1, i2) as f32;
                let offset = add_height - base_height;
                let row_start = i1 * res;
                let col_start = i2 * res;
                for i3 in 0..res {
                    for i4 in 0..res {
                        let x = row_start + i3;
                        let y = col_start + i4;
                        out.set(x, y, (upscaled.get(x, y) + offset) * res as f32);
                    }
                }
            }
        }
    }
    Ok(out)
}
