use crate::{MaterialId, TreeBlockType};

use fnv::FnvHashSet;

/// Index of a definition in its registry. Lower ids were registered first.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TreeDefinitionId(pub usize);

/// One configured kind of tree. Immutable once the registry is built.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreeDefinition {
    pub key: String,
    pub log_materials: FnvHashSet<MaterialId>,
    pub leaf_materials: FnvHashSet<MaterialId>,
    /// Logs farther than this from every trunk voxel are not part of the tree (when the distance
    /// gate is active).
    pub max_log_distance_from_trunk: u32,
    pub max_leaf_distance_from_log: u32,
    /// Leaves are flooded through all 26 neighbors instead of the 6 face neighbors.
    pub detect_leaves_diagonally: bool,
    /// Seconds to hold the feller in cooldown instead of the host's global setting.
    pub topple_cooldown_override: Option<u32>,
}

impl TreeDefinition {
    pub fn matches_log(&self, material: MaterialId) -> bool {
        self.log_materials.contains(&material)
    }

    pub fn matches_leaf(&self, material: MaterialId) -> bool {
        self.leaf_materials.contains(&material)
    }

    pub fn matches(&self, material: MaterialId, kind: TreeBlockType) -> bool {
        match kind {
            TreeBlockType::Log => self.matches_log(material),
            TreeBlockType::Leaf => self.matches_leaf(material),
        }
    }
}
