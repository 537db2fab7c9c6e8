//! Block type registry: maps numeric block ids to [`BlockTypeDef`] metadata.
//!
//! The registry is built once before rendering starts and is read-only
//! afterwards. Air is always id 0. Ids are sparse, so storage is a hash map
//! rather than a dense array.

use std::collections::HashMap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::query::BlockImages;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Transparency mode for a block type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transparency {
    /// Fully hides whatever is behind it.
    Opaque,
    /// Partially transparent (e.g. water, leaves, glass).
    SemiTransparent,
    /// Completely transparent (e.g. air).
    FullyTransparent,
}

/// Full descriptor for a block type.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BlockTypeDef {
    /// Human-readable name (e.g. "stone", "grass").
    pub name: String,
    /// Transparency mode.
    pub transparency: Transparency,
}

impl BlockTypeDef {
    pub fn new(name: &str, transparency: Transparency) -> Self {
        Self {
            name: name.to_string(),
            transparency,
        }
    }
}

/// Errors that can occur during block type registration.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A type with the same name has already been registered.
    #[error("duplicate block type name: {0}")]
    DuplicateName(String),
    /// A type with the same id has already been registered.
    #[error("duplicate block id: {0}")]
    DuplicateId(u16),
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Maps block id → [`BlockTypeDef`] with reverse lookup by name.
pub struct BlockTypeRegistry {
    types: FxHashMap<u16, BlockTypeDef>,
    name_to_id: HashMap<String, u16>,
}

impl BlockTypeRegistry {
    /// Creates a new registry with Air pre-registered as id 0.
    pub fn new() -> Self {
        let mut types = FxHashMap::default();
        types.insert(0, BlockTypeDef::new("air", Transparency::FullyTransparent));
        let mut name_to_id = HashMap::new();
        name_to_id.insert("air".to_string(), 0);
        Self { types, name_to_id }
    }

    /// Creates a registry holding the classic block ids the overlays care about.
    pub fn with_classic_blocks() -> Self {
        use Transparency::*;

        let mut registry = Self::new();
        let defs: [(u16, &str, Transparency); 16] = [
            (1, "stone", Opaque),
            (2, "grass", Opaque),
            (3, "dirt", Opaque),
            (4, "cobblestone", Opaque),
            (8, "flowing_water", SemiTransparent),
            (9, "water", SemiTransparent),
            (12, "sand", Opaque),
            (17, "log", Opaque),
            (18, "leaves", SemiTransparent),
            (20, "glass", SemiTransparent),
            (31, "tallgrass", FullyTransparent),
            (50, "torch", FullyTransparent),
            (78, "snow_layer", SemiTransparent),
            (106, "vine", FullyTransparent),
            (111, "waterlily", FullyTransparent),
            (161, "leaves2", SemiTransparent),
        ];
        for (id, name, transparency) in defs {
            // Ids and names above are distinct.
            let _ = registry.register(id, BlockTypeDef::new(name, transparency));
        }
        registry
    }

    /// Registers a block type under the given id.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateId`] or [`RegistryError::DuplicateName`]
    /// if either is already taken.
    pub fn register(&mut self, id: u16, def: BlockTypeDef) -> Result<(), RegistryError> {
        if self.types.contains_key(&id) {
            return Err(RegistryError::DuplicateId(id));
        }
        if self.name_to_id.contains_key(&def.name) {
            return Err(RegistryError::DuplicateName(def.name));
        }
        self.name_to_id.insert(def.name.clone(), id);
        self.types.insert(id, def);
        Ok(())
    }

    /// Returns the definition for an id, if registered.
    pub fn get(&self, id: u16) -> Option<&BlockTypeDef> {
        self.types.get(&id)
    }

    /// Returns the id for a named block type, or `None` if not found.
    pub fn lookup_by_name(&self, name: &str) -> Option<u16> {
        self.name_to_id.get(name).copied()
    }

    /// Returns the total number of registered types (including Air).
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` if only Air is registered.
    pub fn is_empty(&self) -> bool {
        self.types.len() <= 1
    }

    /// Returns `true` if the given block type is transparent (fully or semi).
    ///
    /// Unknown ids are treated like air.
    pub fn is_transparent(&self, id: u16) -> bool {
        match self.types.get(&id) {
            Some(def) => def.transparency != Transparency::Opaque,
            None => true,
        }
    }

    /// Returns `true` if the given block type is fully transparent, like air,
    /// torches or tall grass. Unknown ids count as air.
    pub fn is_fully_transparent(&self, id: u16) -> bool {
        match self.types.get(&id) {
            Some(def) => def.transparency == Transparency::FullyTransparent,
            None => true,
        }
    }
}

impl Default for BlockTypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockImages for BlockTypeRegistry {
    fn is_block_transparent(&self, id: u16, _data: u16) -> bool {
        self.is_transparent(id)
    }

    fn is_block_free_space(&self, id: u16, _data: u16) -> bool {
        self.is_fully_transparent(id)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_air_is_id_zero() {
        let registry = BlockTypeRegistry::new();
        let air = registry.get(0).unwrap();
        assert_eq!(air.name, "air");
        assert_eq!(air.transparency, Transparency::FullyTransparent);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut registry = BlockTypeRegistry::new();
        registry
            .register(1, BlockTypeDef::new("stone", Transparency::Opaque))
            .unwrap();
        let result = registry.register(1, BlockTypeDef::new("granite", Transparency::Opaque));
        assert!(matches!(result, Err(RegistryError::DuplicateId(1))));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut registry = BlockTypeRegistry::new();
        registry
            .register(1, BlockTypeDef::new("stone", Transparency::Opaque))
            .unwrap();
        let result = registry.register(5, BlockTypeDef::new("stone", Transparency::Opaque));
        assert!(matches!(result, Err(RegistryError::DuplicateName(_))));
    }

    #[test]
    fn test_classic_transparency() {
        let registry = BlockTypeRegistry::with_classic_blocks();
        assert!(!registry.is_block_transparent(1, 0));
        assert!(!registry.is_block_transparent(2, 0));
        assert!(registry.is_block_transparent(0, 0));
        assert!(registry.is_block_transparent(9, 0));
        assert!(registry.is_block_transparent(18, 4));
        assert_eq!(registry.lookup_by_name("vine"), Some(106));
        assert_eq!(registry.len(), 17);
    }

    #[test]
    fn test_unknown_id_is_transparent() {
        let registry = BlockTypeRegistry::new();
        assert!(registry.is_transparent(4000));
        assert!(registry.is_block_free_space(4000, 0));
    }

    #[test]
    fn test_free_space_excludes_semi_transparent() {
        let registry = BlockTypeRegistry::with_classic_blocks();
        for id in [0, 31, 50, 106] {
            assert!(registry.is_block_free_space(id, 0), "id {id}");
        }
        for id in [1, 8, 9, 18, 20, 161] {
            assert!(!registry.is_block_free_space(id, 0), "id {id}");
        }
    }
}
