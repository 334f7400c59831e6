//! # Opaque Material Values
//!
//! A [`Material`] is a namespaced block identifier plus a set of string
//! properties. The engine treats it as opaque: it compares materials,
//! checks their namespace, and derives new values with single properties
//! changed. Solidity and water-ness are attributes the host palette
//! stamps onto the value; the engine only reads them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{PROP_WATERLOGGED, VANILLA_NAMESPACE};

/// Identifier of the air block, also used as the "place nothing" result.
pub const AIR_ID: &str = "minecraft:air";

/// Identifier of the still water block.
pub const WATER_ID: &str = "minecraft:water";

/// A block material: namespaced id, string properties, host-stamped
/// attributes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Material {
    /// Namespaced identifier, e.g. `minecraft:stone_slab`.
    id: String,
    /// Block-state properties, ordered for stable equality.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    properties: BTreeMap<String, String>,
    /// Whether the host considers this block solid.
    #[serde(default = "default_solid")]
    solid: bool,
    /// Whether this block is a water variant (still, flowing, falling).
    #[serde(default)]
    water: bool,
}

const fn default_solid() -> bool {
    true
}

impl Material {
    /// Creates a solid material; ids without a namespace prefix are
    /// assumed to belong to the vanilla namespace.
    #[must_use]
    pub fn new(id: &str) -> Self {
        let id = if id.contains(':') {
            id.to_owned()
        } else {
            format!("{VANILLA_NAMESPACE}:{id}")
        };
        Self {
            id,
            properties: BTreeMap::new(),
            solid: true,
            water: false,
        }
    }

    /// The air block.
    #[must_use]
    pub fn air() -> Self {
        Self::new(AIR_ID).with_solidity(false)
    }

    /// A still-water block.
    #[must_use]
    pub fn water() -> Self {
        Self::new(WATER_ID).with_solidity(false).with_water(true)
    }

    /// Full namespaced identifier.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Namespace part of the identifier.
    #[must_use]
    pub fn namespace(&self) -> &str {
        self.id.split(':').next().unwrap_or(VANILLA_NAMESPACE)
    }

    /// Identifier without the namespace prefix.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        match self.id.split_once(':') {
            Some((_, name)) => name,
            None => &self.id,
        }
    }

    /// Whether the identifier lives in the given namespace.
    #[inline]
    #[must_use]
    pub fn in_namespace(&self, namespace: &str) -> bool {
        self.namespace() == namespace
    }

    /// Whether this is the air block.
    #[inline]
    #[must_use]
    pub fn is_air(&self) -> bool {
        self.id == AIR_ID
    }

    /// Whether the host considers the block solid.
    #[inline]
    #[must_use]
    pub fn is_solid(&self) -> bool {
        self.solid
    }

    /// Whether the block is a water variant.
    #[inline]
    #[must_use]
    pub fn is_water_block(&self) -> bool {
        self.water
    }

    /// Whether the block carries water: a water variant, or waterlogged.
    #[must_use]
    pub fn is_watery(&self) -> bool {
        self.water || self.property(PROP_WATERLOGGED) == Some("true")
    }

    /// Reads a property value.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Whether the property is present.
    #[must_use]
    pub fn has_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Returns a copy with one property set.
    #[must_use]
    pub fn with_property(&self, key: &str, value: &str) -> Self {
        let mut copy = self.clone();
        copy.properties.insert(key.to_owned(), value.to_owned());
        copy
    }

    /// Returns a copy with the solidity attribute set.
    #[must_use]
    pub fn with_solidity(mut self, solid: bool) -> Self {
        self.solid = solid;
        self
    }

    /// Returns a copy with the water attribute set.
    #[must_use]
    pub fn with_water(mut self, water: bool) -> Self {
        self.water = water;
        self
    }
}
