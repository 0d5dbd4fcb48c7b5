use crate::ConfigError;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque handle to a voxel material. Id 0 is reserved for empty space.
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub struct MaterialId(pub u16);

impl MaterialId {
    pub const EMPTY: MaterialId = MaterialId(0);
}

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

const EMPTY_NAME: &str = "air";

/// Interns material names so configuration and world data agree on `MaterialId`s. Ids are handed
/// out in first-seen order, after the reserved empty material.
#[derive(Clone, Debug)]
pub struct MaterialPalette {
    names: IndexSet<String>,
}

impl Default for MaterialPalette {
    fn default() -> Self {
        Self::new()
    }
}

impl MaterialPalette {
    pub fn new() -> Self {
        let mut names = IndexSet::new();
        names.insert(EMPTY_NAME.to_string());

        Self { names }
    }

    /// Returns the id for `name`, assigning the next free id if it hasn't been seen.
    pub fn intern(&mut self, name: &str) -> Result<MaterialId, ConfigError> {
        if let Some(i) = self.names.get_index_of(name) {
            return Ok(MaterialId(i as u16));
        }
        if self.names.len() > u16::MAX as usize {
            return Err(ConfigError::PaletteFull {
                material: name.to_string(),
            });
        }
        let (i, _) = self.names.insert_full(name.to_string());

        Ok(MaterialId(i as u16))
    }

    pub fn get(&self, name: &str) -> Option<MaterialId> {
        self.names.get_index_of(name).map(|i| MaterialId(i as u16))
    }
}
