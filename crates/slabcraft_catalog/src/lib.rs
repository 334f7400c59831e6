//! # Slabcraft Shape Catalog
//!
//! The catalog of physical block shapes the matcher can choose from:
//! slabs, stairs, layers, heads, and the extended-namespace corner and
//! vertical families, plus the FULL and EMPTY sentinels that guarantee a
//! fallback in every ranking.
//!
//! ## Design Principles
//!
//! 1. **Built once**: [`ShapeCatalog`] is constructed before any export
//!    worker starts and is read-only afterwards
//! 2. **Stable order**: a shape's catalog index doubles as its persisted
//!    key in the material mapping file
//! 3. **Injected, not static**: the catalog is an explicit value passed
//!    by reference into the matcher and resolver
//!
//! ## Example
//!
//! ```rust,ignore
//! use slabcraft_catalog::{ShapeCatalog, ShapeOption};
//!
//! let catalog = ShapeCatalog::from_csv(mapping_csv, heads_csv)?;
//! let slab = catalog.index_of("slab").unwrap();
//! let grids = catalog.shape(slab).bake_variants(ShapeOption::Enable, 2);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod mapping;
pub mod option;
pub mod shape;
pub mod shapes;

pub use catalog::ShapeCatalog;
pub use mapping::{CatalogError, HeadTable, MappingTable};
pub use option::ShapeOption;
pub use shape::{Placement, Shape, ShapeKind};
