//! # Layer Settings
//!
//! The plain record a layer hands the exporter: which shapes are active
//! and with which option, how the tile is interpolated, and the
//! placement policy toggles. Loaded once at startup; the exporter never
//! persists it back.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use slabcraft_catalog::{Shape, ShapeOption};
use slabcraft_terrain::Interpolation;
use slabcraft_world::Material;

/// Errors from parsing a layer settings document.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The TOML document did not parse into a settings record.
    #[error("invalid layer settings: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Per-layer configuration record.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerSettings {
    /// Display name of the layer.
    pub name: String,
    /// Selected option per shape name; shapes not listed use their
    /// default option.
    pub shapes: BTreeMap<String, ShapeOption>,
    /// Interpolation method for the tile upscale.
    pub interpolation: Interpolation,
    /// If `true`, fills replace solid blocks and leave non-solids; if
    /// `false`, fills only replace air and water.
    pub replace_non_solid: bool,
    /// If `true`, the base material mimics the underlying terrain block
    /// through [`LayerSettings::mapping`] instead of using a palette.
    pub mimic_terrain: bool,
    /// Underlying block id to base material, used when mimicking.
    pub mapping: BTreeMap<String, Material>,
    /// Whether vertical stacking is requested. Only effective together
    /// with [`LayerSettings::allow_extended`].
    pub stacking: bool,
    /// Whether extended-namespace shapes and materials may be used.
    pub allow_extended: bool,
    /// Additive height bias applied to the difference map.
    pub height_offset: f32,
}

impl Default for LayerSettings {
    fn default() -> Self {
        Self {
            name: String::new(),
            shapes: BTreeMap::new(),
            interpolation: Interpolation::Bilinear,
            replace_non_solid: false,
            mimic_terrain: false,
            mapping: BTreeMap::new(),
            stacking: false,
            allow_extended: false,
            height_offset: 0.0,
        }
    }
}

impl LayerSettings {
    /// Parses a TOML settings document.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Parse`] on malformed input.
    pub fn from_toml_str(document: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(document)?)
    }

    /// The option selected for a shape, falling back to the shape's
    /// default when the layer does not configure it.
    #[must_use]
    pub fn option_for(&self, shape: &dyn Shape) -> ShapeOption {
        self.shapes
            .get(shape.name())
            .copied()
            .unwrap_or_else(|| shape.default_option())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_settings_document() {
        let doc = r#"
            name = "slopes"
            interpolation = "bicubic"
            replace_non_solid = true
            stacking = true
            allow_extended = true
            height_offset = 0.5

            [shapes]
            slab = "enable"
            stairs = "enable"
            vert_corner = "quarters"
            layer = "disable"
        "#;
        let settings = LayerSettings::from_toml_str(doc).unwrap();
        assert_eq!(settings.name, "slopes");
        assert_eq!(settings.interpolation, Interpolation::Bicubic);
        assert_eq!(settings.shapes["vert_corner"], ShapeOption::Quarters);
        assert_eq!(settings.shapes["layer"], ShapeOption::Disable);
        assert!((settings.height_offset - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn rejects_unknown_options() {
        let doc = "[shapes]\nslab = \"sixteenths\"\n";
        assert!(LayerSettings::from_toml_str(doc).is_err());
    }

    #[test]
    fn defaults_are_conservative() {
        let settings = LayerSettings::default();
        assert!(!settings.stacking);
        assert!(!settings.allow_extended);
        assert_eq!(settings.interpolation, Interpolation::Bilinear);
    }
}
