//! # Slabcraft Terrain
//!
//! Resamples an authoritative elevation tile to a sub-block resolution
//! and turns the result into the difference map the shape matcher
//! consumes.
//!
//! The pipeline is: pad the tile by a fixed border from its neighbors,
//! resample (bilinear or bicubic), trim the border, then subtract the
//! authoritative integer heights.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod difference;
pub mod field;
pub mod interpolate;

pub use difference::difference_map;
pub use field::HeightField;
pub use interpolate::{upscale_tile, Interpolation, TerrainError};
