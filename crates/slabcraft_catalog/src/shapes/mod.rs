//! Concrete catalog shapes, one module per geometric family.
//!
//! Template values are quantized heights where 2 units equal one full
//! block at the shape's native resolution; upscaling keeps them
//! comparable at higher resolutions.

pub mod alt_layer;
pub mod corner_slab;
pub mod eighth_slab;
pub mod head;
pub mod layer;
pub mod quarter_slab;
pub mod sentinel;
pub mod slab;
pub mod stair;
pub mod vertical_corner;
pub mod vertical_corner_slab;
pub mod vertical_quarter;
pub mod vertical_slab;

pub use alt_layer::AltLayerShape;
pub use corner_slab::CornerSlabShape;
pub use eighth_slab::EighthSlabShape;
pub use head::HeadShape;
pub use layer::LayerShape;
pub use quarter_slab::QuarterSlabShape;
pub use sentinel::{EmptyShape, FullShape};
pub use slab::SlabShape;
pub use stair::StairShape;
pub use vertical_corner::VerticalCornerShape;
pub use vertical_corner_slab::VerticalCornerSlabShape;
pub use vertical_quarter::VerticalQuarterShape;
pub use vertical_slab::VerticalSlabShape;
