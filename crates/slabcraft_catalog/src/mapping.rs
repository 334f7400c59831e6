//! # Material Mapping Tables
//!
//! Two CSV-backed tables feed the catalog:
//!
//! - the **shape mapping**: a header row of shape names, then one row per
//!   base material listing the output material for each shape column (a
//!   blank cell means the shape is unavailable for that base material);
//! - the **head table**: `base_id, texture` rows consumed by the head
//!   shape at placement time.
//!
//! Ids without a namespace prefix are assumed to belong to the vanilla
//! namespace. Loading failures are fatal: the engine cannot run without
//! a catalog.

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

use slabcraft_world::constants::VANILLA_NAMESPACE;

/// Errors raised while building the catalog from its mapping files.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A mapping file could not be read.
    #[error("failed to read mapping file: {0}")]
    Io(#[from] std::io::Error),

    /// The shape mapping file has no header row.
    #[error("shape mapping file is empty")]
    MissingHeader,

    /// The header references a shape name the catalog does not define.
    #[error("mapping header references unknown shape {0:?}")]
    UnknownShape(String),

    /// A data row could not be parsed.
    #[error("malformed mapping row at line {line}: {reason}")]
    MalformedRow {
        /// 1-based line number in the file.
        line: usize,
        /// What was wrong with the row.
        reason: String,
    },
}

/// Prefixes the vanilla namespace onto bare ids.
fn namespaced(id: &str) -> String {
    if id.contains(':') {
        id.to_owned()
    } else {
        format!("{VANILLA_NAMESPACE}:{id}")
    }
}

/// Base-material rows of per-shape output ids, indexed by catalog
/// position. Column order in the file defines the lookup index.
#[derive(Debug, Default)]
pub struct MappingTable {
    rows: HashMap<String, Vec<Option<String>>>,
}

impl MappingTable {
    /// Parses the shape mapping CSV.
    ///
    /// `shape_names` is the catalog's ordered list of non-sentinel shape
    /// names; header columns are resolved against it so the file may
    /// list columns in any order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the header is missing, references an
    /// unknown shape, or a row has more cells than the header.
    pub fn parse(csv: &str, shape_names: &[&'static str]) -> Result<Self, CatalogError> {
        let mut lines = csv.lines().enumerate();
        let header = loop {
            match lines.next() {
                Some((_, line)) if line.trim().is_empty() => {}
                Some((_, line)) => break line,
                None => return Err(CatalogError::MissingHeader),
            }
        };

        let columns: Vec<&str> = header.split(',').map(str::trim).collect();
        // Column 0 is the base-material key; the rest are shape names.
        let mut indices = Vec::with_capacity(columns.len());
        indices.push(usize::MAX);
        for name in &columns[1..] {
            let idx = shape_names
                .iter()
                .position(|n| n == name)
                .ok_or_else(|| CatalogError::UnknownShape((*name).to_owned()))?;
            indices.push(idx);
        }

        let mut rows = HashMap::new();
        for (i, line) in lines {
            if line.trim().is_empty() {
                continue;
            }
            let cells: Vec<&str> = line.split(',').map(str::trim).collect();
            if cells.len() > columns.len() {
                return Err(CatalogError::MalformedRow {
                    line: i + 1,
                    reason: format!(
                        "{} cells but the header has {} columns",
                        cells.len(),
                        columns.len()
                    ),
                });
            }
            let base = namespaced(cells[0]);
            let mut row = vec![None; shape_names.len()];
            for (j, cell) in cells.iter().enumerate().skip(1) {
                if !cell.is_empty() {
                    row[indices[j]] = Some(namespaced(cell));
                }
            }
            rows.insert(base, row);
        }

        Ok(Self { rows })
    }

    /// The mapped output id for a base material and catalog index, if
    /// the row exists and the cell is non-blank.
    #[must_use]
    pub fn output(&self, base_id: &str, shape_index: usize) -> Option<&str> {
        self.rows
            .get(base_id)
            .and_then(|row| row.get(shape_index))
            .and_then(|cell| cell.as_deref())
    }

    /// The whole row for a base material.
    #[must_use]
    pub fn row(&self, base_id: &str) -> Option<&[Option<String>]> {
        self.rows.get(base_id).map(Vec::as_slice)
    }

    /// Number of base materials mapped.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no base materials are mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Base material to head-texture table.
#[derive(Debug, Default)]
pub struct HeadTable {
    heads: HashMap<String, String>,
}

impl HeadTable {
    /// Parses the head CSV (`base_id, texture` per row, no header).
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MalformedRow`] on rows without a texture
    /// cell.
    pub fn parse(csv: &str) -> Result<Self, CatalogError> {
        let mut heads = HashMap::new();
        for (i, line) in csv.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let mut cells = line.split(',').map(str::trim);
            let base = cells.next().unwrap_or_default();
            let texture = cells.next().ok_or_else(|| CatalogError::MalformedRow {
                line: i + 1,
                reason: "expected base material and texture".to_owned(),
            })?;
            heads.insert(namespaced(base), texture.to_owned());
        }
        Ok(Self { heads })
    }

    /// Loads and parses the head CSV from disk.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] or a parse error.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        Self::parse(&std::fs::read_to_string(path)?)
    }

    /// The texture for a base material.
    #[must_use]
    pub fn texture(&self, base_id: &str) -> Option<&str> {
        self.heads.get(base_id).map(String::as_str)
    }

    /// Whether a base material has a head texture.
    #[must_use]
    pub fn contains(&self, base_id: &str) -> bool {
        self.heads.contains_key(base_id)
    }
}
