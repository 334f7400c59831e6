//! World-level constants shared across the engine.

/// Side length of a terrain tile in columns.
pub const TILE_SIZE: usize = 128;

/// Side length of a chunk in columns.
pub const CHUNK_SIZE: usize = 16;

/// Chunks per tile (8 x 8); a tile's shapemap is evicted once this many
/// chunks have consumed it.
pub const CHUNKS_PER_TILE: u32 = 64;

/// Padding border, in cells, taken from neighbor tiles before resampling.
pub const TILE_PADDING: usize = 2;

/// Largest supported upscale resolution.
pub const MAX_RESOLUTION: u32 = 8;

/// Loss exponent used in production: 1 for MAE, 2 for MSE.
pub const LOSS_EXPONENT: f32 = 1.0;

/// Namespace of the base block set.
pub const VANILLA_NAMESPACE: &str = "minecraft";

/// Namespace of the extended (Conquest) block set, gated behind an
/// explicit per-layer toggle.
pub const EXTENDED_NAMESPACE: &str = "conquest";

/// `facing` block property key.
pub const PROP_FACING: &str = "facing";
/// `shape` block property key (stair corner variants).
pub const PROP_SHAPE: &str = "shape";
/// `half` block property key.
pub const PROP_HALF: &str = "half";
/// `type` block property key (slab top/bottom).
pub const PROP_TYPE: &str = "type";
/// `waterlogged` block property key.
pub const PROP_WATERLOGGED: &str = "waterlogged";
/// `layers` block property key (vanilla layer blocks).
pub const PROP_LAYERS: &str = "layers";
/// `layer` block property key (extended namespace).
pub const PROP_LAYER: &str = "layer";
/// `hinge` block property key (extended namespace).
pub const PROP_HINGE: &str = "hinge";
