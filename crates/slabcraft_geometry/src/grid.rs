//! # Square Grid Type
//!
//! A `Grid` is an immutable-size square float grid in row-major order.
//! Shape templates, their rotated/upscaled variants, and terrain
//! difference sub-blocks are all grids, so a single loss kernel compares
//! any of them.
//!
//! Sizes 1, 2, 4 and 8 are stored in fixed arrays; every other size falls
//! back to a heap vector. The fallback is semantically identical - only
//! storage differs.

use thiserror::Error;

/// Errors from grid construction and orientation parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Input rows did not form a square grid.
    #[error("grid input must be square: {rows} rows but row {row} has {cols} columns")]
    NotSquare {
        /// Number of rows supplied.
        rows: usize,
        /// Index of the offending row.
        row: usize,
        /// Length of the offending row.
        cols: usize,
    },
    /// Rotation angle was not a multiple of 90 degrees.
    #[error("rotation must be a multiple of 90 degrees, got {0}")]
    InvalidRotation(i32),
}

/// A quarter-turn rotation applied clockwise about the grid center.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// No rotation.
    R0,
    /// 90 degrees clockwise.
    R90,
    /// 180 degrees.
    R180,
    /// 270 degrees clockwise.
    R270,
}

impl Rotation {
    /// The three non-identity turns, in the order template variants are
    /// enumerated (canonical, +90, +180, +270).
    pub const QUARTER_TURNS: [Self; 3] = [Self::R90, Self::R180, Self::R270];

    /// Parses an angle in degrees.
    ///
    /// Any multiple of 90 is accepted, including negatives; everything
    /// else is a contract violation reported as
    /// [`GridError::InvalidRotation`].
    ///
    /// # Errors
    ///
    /// Returns an error if `degrees` is not a multiple of 90.
    pub fn from_degrees(degrees: i32) -> Result<Self, GridError> {
        match degrees.rem_euclid(360) {
            0 => Ok(Self::R0),
            90 => Ok(Self::R90),
            180 => Ok(Self::R180),
            270 => Ok(Self::R270),
            _ => Err(GridError::InvalidRotation(degrees)),
        }
    }

    /// Number of clockwise quarter turns this rotation represents.
    #[inline]
    #[must_use]
    pub const fn quarter_turns(self) -> usize {
        match self {
            Self::R0 => 0,
            Self::R90 => 1,
            Self::R180 => 2,
            Self::R270 => 3,
        }
    }
}

/// Immutable-size square numeric grid.
///
/// Values are quantized sub-cell height contributions, not raw samples;
/// [`Grid::upscale`] multiplies them by the scale factor so magnitudes
/// stay comparable once a cell is subdivided.
#[derive(Clone, Debug, PartialEq)]
pub enum Grid {
    /// 1×1 grid.
    Size1([f32; 1]),
    /// 2×2 grid.
    Size2([f32; 4]),
    /// 4×4 grid.
    Size4([f32; 16]),
    /// 8×8 grid.
    Size8([f32; 64]),
    /// Generic N×N fallback.
    SizeN {
        /// Side length.
        size: usize,
        /// Row-major cell values, `size * size` long.
        data: Vec<f32>,
    },
}

impl Grid {
    /// Creates a 1×1 grid.
    #[inline]
    #[must_use]
    pub const fn of1(value: f32) -> Self {
        Self::Size1([value])
    }

    /// Creates a 2×2 grid from rows.
    #[inline]
    #[must_use]
    pub const fn of2(rows: [[f32; 2]; 2]) -> Self {
        Self::Size2([rows[0][0], rows[0][1], rows[1][0], rows[1][1]])
    }

    /// Creates a 4×4 grid from rows.
    #[must_use]
    pub fn of4(rows: [[f32; 4]; 4]) -> Self {
        let mut data = [0.0; 16];
        for (r, row) in rows.iter().enumerate() {
            data[r * 4..r * 4 + 4].copy_from_slice(row);
        }
        Self::Size4(data)
    }

    /// Creates an 8×8 grid from rows.
    #[must_use]
    pub fn of8(rows: [[f32; 8]; 8]) -> Self {
        let mut data = [0.0; 64];
        for (r, row) in rows.iter().enumerate() {
            data[r * 8..r * 8 + 8].copy_from_slice(row);
        }
        Self::Size8(data)
    }

    /// Creates a grid from dynamically-sized rows.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::NotSquare`] if any row length differs from the
    /// row count.
    pub fn from_rows(rows: &[Vec<f32>]) -> Result<Self, GridError> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(GridError::NotSquare {
                    rows: size,
                    row: r,
                    cols: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self::from_flat(size, data))
    }

    /// Wraps row-major data in the variant appropriate for `size`.
    fn from_flat(size: usize, data: Vec<f32>) -> Self {
        debug_assert_eq!(data.len(), size * size);
        match size {
            1 => Self::Size1([data[0]]),
            2 => {
                let mut arr = [0.0; 4];
                arr.copy_from_slice(&data);
                Self::Size2(arr)
            }
            4 => {
                let mut arr = [0.0; 16];
                arr.copy_from_slice(&data);
                Self::Size4(arr)
            }
            8 => {
                let mut arr = [0.0; 64];
                arr.copy_from_slice(&data);
                Self::Size8(arr)
            }
            _ => Self::SizeN { size, data },
        }
    }

    /// Side length of the grid.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        match self {
            Self::Size1(_) => 1,
            Self::Size2(_) => 2,
            Self::Size4(_) => 4,
            Self::Size8(_) => 8,
            Self::SizeN { size, .. } => *size,
        }
    }

    /// Row-major cell values.
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[f32] {
        match self {
            Self::Size1(data) => data,
            Self::Size2(data) => data,
            Self::Size4(data) => data,
            Self::Size8(data) => data,
            Self::SizeN { data, .. } => data,
        }
    }

    #[inline]
    fn values_mut(&mut self) -> &mut [f32] {
        match self {
            Self::Size1(data) => data,
            Self::Size2(data) => data,
            Self::Size4(data) => data,
            Self::Size8(data) => data,
            Self::SizeN { data, .. } => data,
        }
    }

    /// Flat-indexed read.
    #[inline]
    #[must_use]
    pub fn get(&self, i: usize) -> f32 {
        self.values()[i]
    }

    /// Adds `value` to every cell in place.
    #[inline]
    pub fn add(&mut self, value: f32) {
        for cell in self.values_mut() {
            *cell += value;
        }
    }

    /// Subtracts `value` from every cell in place.
    #[inline]
    pub fn sub(&mut self, value: f32) {
        for cell in self.values_mut() {
            *cell -= value;
        }
    }

    /// Returns an upscaled copy: every cell's value is multiplied by
    /// `scale` and replicated into a `scale`×`scale` block.
    ///
    /// `upscale(1)` is an identity copy.
    ///
    /// # Panics
    ///
    /// Panics if `scale` is zero; callers derive it from a validated
    /// resolution and may not pass zero.
    #[must_use]
    pub fn upscale(&self, scale: u32) -> Self {
        assert!(scale >= 1, "upscale factor must be at least 1");
        if scale == 1 {
            return self.clone();
        }
        let scale = scale as usize;
        let size = self.size();
        let new_size = size * scale;
        let input = self.values();
        let mut data = vec![0.0; new_size * new_size];
        for r in 0..new_size {
            let src_row = r / scale;
            for c in 0..new_size {
                data[r * new_size + c] = input[src_row * size + c / scale] * scale as f32;
            }
        }
        Self::from_flat(new_size, data)
    }

    /// Returns a copy rotated clockwise by the given quarter turns.
    ///
    /// Rotation is a pure index permutation; four applications of
    /// [`Rotation::R90`] reproduce the original grid.
    #[must_use]
    pub fn rotate(&self, rotation: Rotation) -> Self {
        let size = self.size();
        let input = self.values();
        let n = size - 1;
        let mut data = vec![0.0; size * size];
        for r in 0..size {
            for c in 0..size {
                let src = match rotation {
                    Rotation::R0 => r * size + c,
                    Rotation::R90 => (n - c) * size + r,
                    Rotation::R180 => (n - r) * size + (n - c),
                    Rotation::R270 => c * size + (n - r),
                };
                data[r * size + c] = input[src];
            }
        }
        Self::from_flat(size, data)
    }

    /// Loss against a flat target of the same length:
    /// `sum(|cell_i - target_i| ^ exponent)`.
    ///
    /// Exponent 1 is mean absolute error (the production default),
    /// exponent 2 mean squared error; both have dedicated fast paths.
    #[must_use]
    pub fn loss(&self, target: &[f32], exponent: f32) -> f32 {
        let values = self.values();
        debug_assert_eq!(values.len(), target.len());
        if exponent == 1.0 {
            values
                .iter()
                .zip(target)
                .map(|(a, b)| (a - b).abs())
                .sum()
        } else if exponent == 2.0 {
            values
                .iter()
                .zip(target)
                .map(|(a, b)| {
                    let d = a - b;
                    d * d
                })
                .sum()
        } else {
            values
                .iter()
                .zip(target)
                .map(|(a, b)| (a - b).abs().powf(exponent))
                .sum()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid3() -> Grid {
        Grid::from_rows(&[
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ])
        .unwrap()
    }

    #[test]
    fn rejects_non_square_input() {
        let err = Grid::from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            GridError::NotSquare {
                rows: 2,
                row: 1,
                cols: 1
            }
        );
    }

    #[test]
    fn degrees_parse_multiples_of_90_only() {
        assert_eq!(Rotation::from_degrees(0).unwrap(), Rotation::R0);
        assert_eq!(Rotation::from_degrees(90).unwrap(), Rotation::R90);
        assert_eq!(Rotation::from_degrees(450).unwrap(), Rotation::R90);
        assert_eq!(Rotation::from_degrees(-90).unwrap(), Rotation::R270);
        assert_eq!(
            Rotation::from_degrees(45).unwrap_err(),
            GridError::InvalidRotation(45)
        );
    }

    #[test]
    fn upscale_by_one_is_identity() {
        let g = Grid::of2([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(g.upscale(1), g);
        let n = grid3();
        assert_eq!(n.upscale(1), n);
    }

    #[test]
    fn upscale_replicates_and_scales() {
        let g = Grid::of1(0.5);
        let up = g.upscale(2);
        assert_eq!(up.size(), 2);
        assert_eq!(up.values(), &[1.0, 1.0, 1.0, 1.0]);

        let g = Grid::of2([[1.0, 2.0], [3.0, 4.0]]);
        let up = g.upscale(2);
        assert_eq!(up.size(), 4);
        assert_eq!(
            up.values(),
            &[
                2.0, 2.0, 4.0, 4.0, //
                2.0, 2.0, 4.0, 4.0, //
                6.0, 6.0, 8.0, 8.0, //
                6.0, 6.0, 8.0, 8.0,
            ]
        );
    }

    #[test]
    fn upscale_composes_multiplicatively() {
        let g = Grid::of2([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(g.upscale(2).upscale(2), g.upscale(4));
        let n = grid3();
        assert_eq!(n.upscale(2).upscale(2), n.upscale(4));
    }

    #[test]
    fn rotate_zero_is_identity() {
        let g = grid3();
        assert_eq!(g.rotate(Rotation::R0), g);
    }

    #[test]
    fn four_quarter_turns_reproduce_the_grid() {
        let g = grid3();
        let rotated = g
            .rotate(Rotation::R90)
            .rotate(Rotation::R90)
            .rotate(Rotation::R90)
            .rotate(Rotation::R90);
        assert_eq!(rotated, g);
    }

    #[test]
    fn quarter_turn_then_three_quarters_is_identity() {
        let g = Grid::of2([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(g.rotate(Rotation::R90).rotate(Rotation::R270), g);
    }

    #[test]
    fn clockwise_quarter_turn_permutation() {
        let g = Grid::of2([[1.0, 2.0], [3.0, 4.0]]);
        // [a b; c d] -> [c a; d b]
        assert_eq!(g.rotate(Rotation::R90).values(), &[3.0, 1.0, 4.0, 2.0]);
        assert_eq!(g.rotate(Rotation::R180).values(), &[4.0, 3.0, 2.0, 1.0]);
        assert_eq!(g.rotate(Rotation::R270).values(), &[2.0, 4.0, 1.0, 3.0]);
    }

    #[test]
    fn fixed_and_generic_storage_agree() {
        // Same data through the 2x2 fast path and the N fallback.
        let fixed = Grid::of2([[1.0, 2.0], [3.0, 4.0]]);
        let generic = Grid::SizeN {
            size: 2,
            data: vec![1.0, 2.0, 3.0, 4.0],
        };
        let target = [0.5, 1.5, 2.5, 3.5];
        assert_eq!(fixed.loss(&target, 1.0), generic.loss(&target, 1.0));
        assert_eq!(
            fixed.rotate(Rotation::R90).values(),
            generic.rotate(Rotation::R90).values()
        );
        assert_eq!(fixed.upscale(3).values(), generic.upscale(3).values());
    }

    #[test]
    fn loss_is_symmetric_in_its_arguments() {
        let g = Grid::of2([[1.0, 2.0], [3.0, 4.0]]);
        let t = Grid::of2([[4.0, 1.0], [0.0, 7.0]]);
        assert_eq!(g.loss(t.values(), 1.0), t.loss(g.values(), 1.0));
        assert_eq!(g.loss(t.values(), 2.0), t.loss(g.values(), 2.0));
    }

    #[test]
    fn loss_exponents() {
        let g = Grid::of1(3.0);
        assert_eq!(g.loss(&[1.0], 1.0), 2.0);
        assert_eq!(g.loss(&[1.0], 2.0), 4.0);
        assert!((g.loss(&[1.0], 3.0) - 8.0).abs() < 1e-6);
    }

    #[test]
    fn scalar_add_sub_round_trip() {
        let mut g = Grid::of2([[1.0, 2.0], [3.0, 4.0]]);
        g.add(1.0);
        assert_eq!(g.values(), &[2.0, 3.0, 4.0, 5.0]);
        g.sub(1.0);
        assert_eq!(g.values(), &[1.0, 2.0, 3.0, 4.0]);
    }
}
