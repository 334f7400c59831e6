//! # Slabcraft Geometry
//!
//! Square numeric grids used to describe block-shape height templates and
//! terrain difference sub-blocks.
//!
//! ## Design Principles
//!
//! 1. **Fixed-size fast paths**: 1×1 through 8×8 grids live on the stack
//! 2. **One semantics**: the generic N×N fallback matches the fixed paths
//!    cell-for-cell
//! 3. **Closed orientation type**: a rotation is one of four quarter turns,
//!    validated once at the edge
//!
//! ## Example
//!
//! ```rust,ignore
//! use slabcraft_geometry::{Grid, Rotation};
//!
//! let stair = Grid::of2([[1.0, 1.0], [0.5, 0.5]]);
//! let east = stair.rotate(Rotation::R90);
//! let baked = east.upscale(2);
//! let loss = baked.loss(&[2.0; 16], 1.0);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod grid;

pub use grid::{Grid, GridError, Rotation};
