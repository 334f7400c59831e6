//! # The Shape Catalog
//!
//! An immutable, injected value built once at startup: the ordered shape
//! list (indices are persisted keys), the CSV material mapping, the head
//! table, and a lock-guarded memoization of derived output materials.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use slabcraft_world::Material;

use crate::mapping::{CatalogError, HeadTable, MappingTable};
use crate::option::ShapeOption;
use crate::shape::{Shape, ShapeKind};
use crate::shapes::{
    head::HEAD_BLOCK_ID, AltLayerShape, CornerSlabShape, EighthSlabShape, EmptyShape, FullShape,
    HeadShape, LayerShape, QuarterSlabShape, SlabShape, StairShape, VerticalCornerShape,
    VerticalCornerSlabShape, VerticalQuarterShape, VerticalSlabShape,
};

type MaterialKey = (usize, String, ShapeOption);

/// The catalog: every shape the matcher can choose from, in stable
/// order, with the FULL and EMPTY sentinels at the tail.
pub struct ShapeCatalog {
    shapes: Vec<Box<dyn Shape>>,
    normal_count: usize,
    mapping: MappingTable,
    heads: Arc<HeadTable>,
    material_cache: Mutex<HashMap<MaterialKey, Option<Arc<Vec<Material>>>>>,
}

impl ShapeCatalog {
    /// Builds the catalog from the two mapping documents.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if either document is malformed; the
    /// engine cannot run without a catalog.
    pub fn from_csv(mapping_csv: &str, heads_csv: &str) -> Result<Self, CatalogError> {
        let heads = Arc::new(HeadTable::parse(heads_csv)?);

        let shapes: Vec<Box<dyn Shape>> = vec![
            // Base-namespace shapes first.
            Box::new(SlabShape::new()),
            Box::new(StairShape::new()),
            Box::new(LayerShape),
            Box::new(HeadShape::new(Arc::clone(&heads))),
            // Extended-namespace shapes.
            Box::new(AltLayerShape),
            Box::new(VerticalCornerShape::new()),
            Box::new(QuarterSlabShape::new()),
            Box::new(VerticalQuarterShape),
            Box::new(CornerSlabShape::new()),
            Box::new(VerticalCornerSlabShape::new()),
            Box::new(EighthSlabShape::new()),
            Box::new(VerticalSlabShape::new()),
            // Sentinels stay at the tail.
            Box::new(FullShape::new()),
            Box::new(EmptyShape::new()),
        ];
        let normal_count = shapes
            .iter()
            .filter(|s| s.kind() == ShapeKind::Normal)
            .count();

        let names: Vec<&'static str> = shapes[..normal_count].iter().map(|s| s.name()).collect();
        let mapping = MappingTable::parse(mapping_csv, &names)?;

        debug!(
            shapes = shapes.len(),
            mapped_materials = mapping.len(),
            "shape catalog built"
        );

        Ok(Self {
            shapes,
            normal_count,
            mapping,
            heads,
            material_cache: Mutex::new(HashMap::new()),
        })
    }

    /// Builds the catalog from files on disk.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] or a parse error.
    pub fn from_files(mapping_path: &Path, heads_path: &Path) -> Result<Self, CatalogError> {
        Self::from_csv(
            &std::fs::read_to_string(mapping_path)?,
            &std::fs::read_to_string(heads_path)?,
        )
    }

    /// Number of catalog entries, sentinels included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the catalog is empty (never true for a built catalog).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Number of non-sentinel entries.
    #[must_use]
    pub fn normal_count(&self) -> usize {
        self.normal_count
    }

    /// The shape at a catalog index.
    ///
    /// # Panics
    ///
    /// Panics on an out-of-range index; indices come from this catalog.
    #[must_use]
    pub fn shape(&self, index: usize) -> &dyn Shape {
        self.shapes[index].as_ref()
    }

    /// Iterates over all entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Shape> {
        self.shapes.iter().map(Box::as_ref)
    }

    /// Sentinel classification of an entry.
    #[must_use]
    pub fn kind(&self, index: usize) -> ShapeKind {
        self.shapes[index].kind()
    }

    /// Catalog index of the FULL sentinel.
    #[must_use]
    pub fn full_index(&self) -> usize {
        self.shapes.len() - 2
    }

    /// Catalog index of the EMPTY sentinel.
    #[must_use]
    pub fn empty_index(&self) -> usize {
        self.shapes.len() - 1
    }

    /// Looks up a shape index by stable name.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.shapes.iter().position(|s| s.name() == name)
    }

    /// The head-texture table.
    #[must_use]
    pub fn heads(&self) -> &HeadTable {
        &self.heads
    }

    /// The mapped output id for a shape and base material, if any.
    ///
    /// The head shape is special-cased: a base material with a head
    /// texture maps to the head block even without a mapping-row entry.
    #[must_use]
    pub fn mapped_output(&self, shape_index: usize, base_id: &str) -> Option<&str> {
        if self.shapes[shape_index].name() == HeadShape::NAME && self.heads.contains(base_id) {
            return Some(HEAD_BLOCK_ID);
        }
        self.mapping.output(base_id, shape_index)
    }

    /// Resolves the concrete output material for a catalog variant.
    ///
    /// FULL resolves to the base material itself and EMPTY to `None`
    /// ("place nothing"). For normal shapes, `None` means the base
    /// material has no mapping for this shape; the resolver skips the
    /// placement.
    ///
    /// Derived lists are memoized per (shape, base material, option);
    /// a racing recomputation is tolerated because the derivation is
    /// pure.
    #[must_use]
    pub fn material(
        &self,
        shape_index: usize,
        base: &Material,
        local: usize,
        option: ShapeOption,
    ) -> Option<Material> {
        let shape = &self.shapes[shape_index];
        match shape.kind() {
            ShapeKind::Full => return Some(base.clone()),
            ShapeKind::Empty => return None,
            ShapeKind::Normal => {}
        }

        let key = (shape_index, base.id().to_owned(), option);
        let cached = self.material_cache.lock().get(&key).cloned();
        let list = match cached {
            Some(list) => list,
            None => {
                let output = self
                    .mapped_output(shape_index, base.id())
                    .map(str::to_owned)
                    .or_else(|| shape.fallback_output(base));
                let list = output.map(|id| Arc::new(shape.output_materials(&id, option)));
                self.material_cache.lock().insert(key, list.clone());
                list
            }
        };
        list.and_then(|l| l.get(local).cloned())
    }

    /// Names of the shapes available for a base material.
    ///
    /// EMPTY and FULL are unconditionally included; normal shapes
    /// require a non-blank mapping cell; the head shape is additionally
    /// available whenever the head table lists the base material.
    #[must_use]
    pub fn available_shape_names(&self, base_id: &str) -> Vec<&'static str> {
        let mut names = vec![EmptyShape::NAME, FullShape::NAME];
        if let Some(row) = self.mapping.row(base_id) {
            for (index, cell) in row.iter().enumerate() {
                if cell.is_some() {
                    names.push(self.shapes[index].name());
                }
            }
        }
        if !names.contains(&HeadShape::NAME) && self.heads.contains(base_id) {
            names.push(HeadShape::NAME);
        }
        names
    }
}
