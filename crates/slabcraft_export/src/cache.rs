//! # Per-Tile Shapemap Cache
//!
//! A shapemap is computed lazily the first time any chunk of its tile is
//! rendered, then shared by the remaining chunks and evicted once the
//! tile's full chunk count has been observed.
//!
//! The whole check-then-act sequence lives under one lock: concurrent
//! workers cannot duplicate a bake or evict an entry another worker is
//! about to read. Computation happens while the lock is held, which
//! serializes tile bakes; the bake is pure, so that is a throughput
//! trade, never a correctness one.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use slabcraft_world::constants::CHUNKS_PER_TILE;

use crate::shapemap::Shapemap;

type TileKey = (i32, i32);

#[derive(Default)]
struct Inner {
    maps: HashMap<TileKey, Arc<dyn Shapemap>>,
    counts: HashMap<TileKey, u32>,
}

/// Tile-keyed shapemap cache with chunk-count-based eviction.
#[derive(Default)]
pub struct ShapemapCache {
    inner: Mutex<Inner>,
}

impl ShapemapCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached shapemap for a tile, computing it first if
    /// absent. The computation may fail; nothing is cached in that
    /// case.
    ///
    /// # Errors
    ///
    /// Propagates the compute error.
    pub fn get_or_compute<E>(
        &self,
        key: TileKey,
        compute: impl FnOnce() -> Result<Arc<dyn Shapemap>, E>,
    ) -> Result<Arc<dyn Shapemap>, E> {
        let mut inner = self.inner.lock();
        if let Some(map) = inner.maps.get(&key) {
            return Ok(Arc::clone(map));
        }
        let map = compute()?;
        inner.maps.insert(key, Arc::clone(&map));
        Ok(map)
    }

    /// Records that one chunk of the tile has been rendered. Evicts the
    /// tile's shapemap when the full chunk count is reached and returns
    /// whether it did.
    pub fn note_chunk_done(&self, key: TileKey) -> bool {
        let mut inner = self.inner.lock();
        let count = inner.counts.entry(key).or_insert(0);
        *count += 1;
        if *count >= CHUNKS_PER_TILE {
            inner.maps.remove(&key);
            inner.counts.remove(&key);
            debug!(tile_x = key.0, tile_y = key.1, "evicted tile shapemap");
            true
        } else {
            false
        }
    }

    /// Number of cached shapemaps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().maps.len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().maps.is_empty()
    }
}
