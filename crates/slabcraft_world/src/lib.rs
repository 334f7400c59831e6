//! # Slabcraft World Types
//!
//! The collaborator-facing surface of the engine: opaque [`Material`]
//! values, the terrain/voxel access traits the host editor implements,
//! and the constants every other crate agrees on.
//!
//! The engine never interprets material properties beyond setting and
//! reading `facing`, `shape`, `half`, `waterlogged` and the extended
//! layer/hinge keys; everything else is carried through untouched.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod constants;
pub mod material;
pub mod terrain;
pub mod voxel;

pub use material::Material;
pub use terrain::{TerrainSource, TerrainTile};
pub use voxel::{HeadEntity, MaterialPalette, VoxelSink};
