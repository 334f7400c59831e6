//! # Tile Upscaling
//!
//! Pads a tile with a two-cell border taken from its neighbors (clamped
//! to the center tile where a neighbor is absent), resamples at a
//! power-of-two resolution with center-aligned bilinear or Catmull-Rom
//! bicubic convolution, and trims the border back off.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use slabcraft_world::constants::{TILE_PADDING, TILE_SIZE};
use slabcraft_world::{TerrainSource, TerrainTile};

use crate::field::HeightField;

/// Errors from the resampling pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TerrainError {
    /// The requested resolution was not a power of two. This is an
    /// internal contract the call sites must guarantee.
    #[error("resolution must be a power of two, got {0}")]
    ResolutionNotPowerOfTwo(u32),
}

/// Interpolation method used when a tile is upscaled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpolation {
    /// 4-tap bilinear resampling.
    #[default]
    Bilinear,
    /// 4x4 Catmull-Rom bicubic convolution.
    Bicubic,
}

const PADDED_SIZE: usize = TILE_SIZE + 2 * TILE_PADDING;

/// Fills `buffer` (sized `TILE_SIZE + 2 * pad`) with the tile's heights
/// surrounded by a `pad`-cell border from its neighbors. Missing
/// neighbors clamp to the center tile's edge.
pub fn pad_tile(
    tile: &dyn TerrainTile,
    source: &dyn TerrainSource,
    pad: usize,
    buffer: &mut HeightField,
) {
    let padded = TILE_SIZE + 2 * pad;
    debug_assert_eq!(buffer.size(), padded);

    for x in 0..TILE_SIZE {
        for y in 0..TILE_SIZE {
            buffer.set(x + pad, y + pad, tile.height(x, y));
        }
    }

    for dx in -1i32..=1 {
        for dy in -1i32..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let neighbor = source.tile(tile.tile_x() + dx, tile.tile_y() + dy);

            let (x_start, x_end) = border_range(dx, pad, padded);
            let (y_start, y_end) = border_range(dy, pad, padded);

            for px in x_start..x_end {
                for py in y_start..y_end {
                    let value = match neighbor {
                        Some(neighbor) => {
                            // Map the padded index back to the neighbor's
                            // local coordinates.
                            let nx = px as i32 - (dx * TILE_SIZE as i32 + pad as i32);
                            let ny = py as i32 - (dy * TILE_SIZE as i32 + pad as i32);
                            neighbor.height(nx as usize, ny as usize)
                        }
                        None => {
                            let cx = px.clamp(pad, TILE_SIZE + pad - 1);
                            let cy = py.clamp(pad, TILE_SIZE + pad - 1);
                            buffer.get(cx, cy)
                        }
                    };
                    buffer.set(px, py, value);
                }
            }
        }
    }
}

fn border_range(d: i32, pad: usize, padded: usize) -> (usize, usize) {
    match d {
        -1 => (0, pad),
        0 => (pad, TILE_SIZE + pad),
        _ => (TILE_SIZE + pad, padded),
    }
}

/// Upscales a tile to `resolution` samples per cell.
///
/// # Errors
///
/// Returns [`TerrainError::ResolutionNotPowerOfTwo`] on an invalid
/// resolution; valid call sites derive the resolution from the baked
/// catalog and cannot hit this at runtime.
pub fn upscale_tile(
    tile: &dyn TerrainTile,
    source: &dyn TerrainSource,
    method: Interpolation,
    resolution: u32,
) -> Result<HeightField, TerrainError> {
    if resolution == 0 || !resolution.is_power_of_two() {
        return Err(TerrainError::ResolutionNotPowerOfTwo(resolution));
    }
    let scale = resolution as usize;

    let mut padded = HeightField::new(PADDED_SIZE);
    pad_tile(tile, source, TILE_PADDING, &mut padded);

    let upscaled = resample(&padded, scale, method);

    // Trim the padding back off at the upscaled offset.
    let final_size = TILE_SIZE * scale;
    let offset = TILE_PADDING * scale;
    let mut out = HeightField::new(final_size);
    for x in 0..final_size {
        for y in 0..final_size {
            out.set(x, y, upscaled.get(x + offset, y + offset));
        }
    }
    Ok(out)
}

fn resample(input: &HeightField, scale: usize, method: Interpolation) -> HeightField {
    let out_size = input.size() * scale;
    let mut out = HeightField::new(out_size);
    for y in 0..out_size {
        // Center alignment: the center of an output pixel maps onto the
        // corresponding center in the input.
        let src_y = ((y as f32 + 0.5) / scale as f32) - 0.5;
        for x in 0..out_size {
            let src_x = ((x as f32 + 0.5) / scale as f32) - 0.5;
            let value = match method {
                Interpolation::Bilinear => bilinear_sample(input, src_x, src_y),
                Interpolation::Bicubic => bicubic_sample(input, src_x, src_y),
            };
            out.set(y, x, value);
        }
    }
    out
}

#[inline]
fn clamp_index(i: i32, max: usize) -> usize {
    i.clamp(0, max as i32) as usize
}

fn bilinear_sample(img: &HeightField, x: f32, y: f32) -> f32 {
    let n = img.size() - 1;
    let x1 = x.floor() as i32;
    let y1 = y.floor() as i32;
    let x_frac = x - x1 as f32;
    let y_frac = y - y1 as f32;
    let x_inv = 1.0 - x_frac;

    let xl = clamp_index(x1, n);
    let xr = clamp_index(x1 + 1, n);
    let yt = clamp_index(y1, n);
    let yb = clamp_index(y1 + 1, n);

    let v00 = img.get(yt, xl);
    let v10 = img.get(yt, xr);
    let v01 = img.get(yb, xl);
    let v11 = img.get(yb, xr);

    (v00 * x_inv + v10 * x_frac) * (1.0 - y_frac) + (v01 * x_inv + v11 * x_frac) * y_frac
}

fn bicubic_sample(img: &HeightField, x: f32, y: f32) -> f32 {
    let n = img.size() - 1;
    let x_int = x.floor() as i32;
    let y_int = y.floor() as i32;
    let x_frac = x - x_int as f32;
    let y_frac = y - y_int as f32;

    // Kernel weights for taps at -1, 0, +1, +2.
    let wx = [
        cubic(x_frac + 1.0),
        cubic(x_frac),
        cubic(x_frac - 1.0),
        cubic(x_frac - 2.0),
    ];
    let wy = [
        cubic(y_frac + 1.0),
        cubic(y_frac),
        cubic(y_frac - 1.0),
        cubic(y_frac - 2.0),
    ];

    let ys = [
        clamp_index(y_int - 1, n),
        clamp_index(y_int, n),
        clamp_index(y_int + 1, n),
        clamp_index(y_int + 2, n),
    ];
    let xs = [
        clamp_index(x_int - 1, n),
        clamp_index(x_int, n),
        clamp_index(x_int + 1, n),
        clamp_index(x_int + 2, n),
    ];

    let mut result = 0.0;
    for (wy, row) in wy.iter().zip(ys) {
        let mut acc = 0.0;
        for (wx, col) in wx.iter().zip(xs) {
            acc += img.get(row, col) * wx;
        }
        result += wy * acc;
    }
    result
}

/// Catmull-Rom kernel.
fn cubic(t: f32) -> f32 {
    let t = t.abs();
    if t <= 1.0 {
        (1.5 * t - 2.5) * t * t + 1.0
    } else if t < 2.0 {
        ((-0.5 * t + 2.5) * t - 4.0) * t + 2.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SlopeTile {
        base: f32,
    }

    impl TerrainTile for SlopeTile {
        fn tile_x(&self) -> i32 {
            0
        }
        fn tile_y(&self) -> i32 {
            0
        }
        fn height(&self, x: usize, _y: usize) -> f32 {
            self.base + x as f32
        }
        fn int_height(&self, x: usize, _y: usize) -> i32 {
            (self.base + x as f32).floor() as i32
        }
        fn water_level(&self, _x: usize, _y: usize) -> i32 {
            0
        }
        fn detail_present(&self, _x: usize, _y: usize) -> bool {
            true
        }
    }

    struct Lonely;

    impl TerrainSource for Lonely {
        fn tile(&self, _tile_x: i32, _tile_y: i32) -> Option<&dyn TerrainTile> {
            None
        }
    }

    #[test]
    fn resolution_must_be_a_power_of_two() {
        let tile = SlopeTile { base: 0.0 };
        assert_eq!(
            upscale_tile(&tile, &Lonely, Interpolation::Bilinear, 3).unwrap_err(),
            TerrainError::ResolutionNotPowerOfTwo(3)
        );
        assert_eq!(
            upscale_tile(&tile, &Lonely, Interpolation::Bicubic, 0).unwrap_err(),
            TerrainError::ResolutionNotPowerOfTwo(0)
        );
    }

    #[test]
    fn missing_neighbors_clamp_to_the_center_tile() {
        let tile = SlopeTile { base: 64.0 };
        let mut buffer = HeightField::new(TILE_SIZE + 2 * TILE_PADDING);
        pad_tile(&tile, &Lonely, TILE_PADDING, &mut buffer);
        // Border rows repeat the first/last tile rows.
        assert_eq!(buffer.get(0, 10), tile.height(0, 8));
        assert_eq!(
            buffer.get(TILE_SIZE + 2 * TILE_PADDING - 1, 10),
            tile.height(TILE_SIZE - 1, 8)
        );
    }

    #[test]
    fn neighbor_heights_fill_the_border() {
        struct Flat(f32, i32, i32);
        impl TerrainTile for Flat {
            fn tile_x(&self) -> i32 {
                self.1
            }
            fn tile_y(&self) -> i32 {
                self.2
            }
            fn height(&self, _x: usize, _y: usize) -> f32 {
                self.0
            }
            fn int_height(&self, _x: usize, _y: usize) -> i32 {
                self.0 as i32
            }
            fn water_level(&self, _x: usize, _y: usize) -> i32 {
                0
            }
            fn detail_present(&self, _x: usize, _y: usize) -> bool {
                true
            }
        }
        struct WithNorth {
            north: Flat,
        }
        impl TerrainSource for WithNorth {
            fn tile(&self, tile_x: i32, tile_y: i32) -> Option<&dyn TerrainTile> {
                (tile_x == -1 && tile_y == 0).then_some(&self.north as &dyn TerrainTile)
            }
        }

        let tile = Flat(10.0, 0, 0);
        let source = WithNorth {
            north: Flat(99.0, -1, 0),
        };
        let mut buffer = HeightField::new(TILE_SIZE + 2 * TILE_PADDING);
        pad_tile(&tile, &source, TILE_PADDING, &mut buffer);
        assert_eq!(buffer.get(0, TILE_PADDING + 5), 99.0);
        assert_eq!(buffer.get(TILE_PADDING, TILE_PADDING + 5), 10.0);
    }

    #[test]
    fn constant_field_survives_both_methods() {
        struct Flat;
        impl TerrainTile for Flat {
            fn tile_x(&self) -> i32 {
                0
            }
            fn tile_y(&self) -> i32 {
                0
            }
            fn height(&self, _x: usize, _y: usize) -> f32 {
                7.25
            }
            fn int_height(&self, _x: usize, _y: usize) -> i32 {
                7
            }
            fn water_level(&self, _x: usize, _y: usize) -> i32 {
                0
            }
            fn detail_present(&self, _x: usize, _y: usize) -> bool {
                true
            }
        }

        for method in [Interpolation::Bilinear, Interpolation::Bicubic] {
            let out = upscale_tile(&Flat, &Lonely, method, 2).unwrap();
            assert_eq!(out.size(), TILE_SIZE * 2);
            for v in out.values() {
                assert!(
                    (v - 7.25).abs() < 1e-4,
                    "{method:?} distorted a constant field: {v}"
                );
            }
        }
    }

    #[test]
    fn bilinear_midpoints_average_neighbors() {
        let tile = SlopeTile { base: 0.0 };
        let out = upscale_tile(&tile, &Lonely, Interpolation::Bilinear, 2).unwrap();
        // Sample centers land at x +/- 0.25 along the slope.
        let mid = TILE_SIZE / 2;
        let expected = tile.height(mid, 0) + 0.25;
        assert!((out.get(2 * mid + 1, 10) - expected).abs() < 1e-4);
    }

    #[test]
    fn identity_at_resolution_one() {
        let tile = SlopeTile { base: 3.0 };
        let out = upscale_tile(&tile, &Lonely, Interpolation::Bilinear, 1).unwrap();
        assert_eq!(out.size(), TILE_SIZE);
        for x in 0..TILE_SIZE {
            assert!((out.get(x, 0) - tile.height(x, 0)).abs() < 1e-5);
        }
    }
}
