//! # Slabcraft Export
//!
//! The engine that turns a difference map into block placements: rank
//! every baked catalog variant per sub-block, cache the ranking per
//! tile, then walk each column's ranking until the first shape the base
//! material can actually provide.
//!
//! ## Data Flow
//!
//! ```text
//! TerrainSource -> Interpolator -> DifferenceMap -> ShapeMatcher
//!     -> Shapemap (flat or stacked, cached per tile)
//!     -> ColumnResolver (availability-filtered) -> placements
//! ```
//!
//! Sorting the entire ranking, not just the arg-min, is deliberate: the
//! globally best shape may be unavailable for the active base material,
//! and the resolver walks the ranking to the first allowed index in
//! O(k) instead of re-running the matcher under a filtered candidate
//! set.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod cache;
pub mod exporter;
pub mod matcher;
pub mod settings;
pub mod shapemap;
pub mod variants;

pub use cache::ShapemapCache;
pub use exporter::DetailExporter;
pub use matcher::{build_shapemap, rank_variants};
pub use settings::{LayerSettings, SettingsError};
pub use shapemap::{FlatShapemap, Shapemap, StackedShapemap};
pub use variants::{VariantEntry, VariantTable};
