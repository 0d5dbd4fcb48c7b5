use crate::{
    ConfigError, MaterialId, MaterialPalette, TreeBlockType, TreeDefinition, TreeDefinitionConfig,
    TreeDefinitionId,
};

use fnv::FnvHashSet;
use itertools::Itertools;
use std::fmt;

/// The definitions a set of tree voxels could still belong to, in registration order.
///
/// Only [`TreeDefinitionRegistry`] creates these, and narrowing only ever removes members.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Candidates {
    ids: Vec<TreeDefinitionId>,
}

impl Candidates {
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn contains(&self, id: TreeDefinitionId) -> bool {
        self.ids.binary_search(&id).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = TreeDefinitionId> + '_ {
        self.ids.iter().copied()
    }

    /// The tie-break winner: the earliest registered definition still remaining.
    pub fn first(&self) -> Option<TreeDefinitionId> {
        self.ids.first().copied()
    }

    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.ids.iter().all(|id| other.contains(*id))
    }
}

impl fmt::Display for Candidates {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}]", self.ids.iter().map(|id| id.0).join(", "))
    }
}

/// Every configured tree definition, in registration order.
#[derive(Clone, Debug, Default)]
pub struct TreeDefinitionRegistry {
    definitions: Vec<TreeDefinition>,
}

impl TreeDefinitionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a definition after the existing ones. Rejects the definitions that detection can't
    /// work with, so detection never has to re-validate.
    pub fn register(&mut self, definition: TreeDefinition) -> Result<TreeDefinitionId, ConfigError> {
        if definition.log_materials.is_empty() {
            return Err(ConfigError::EmptyLogMaterials {
                tree: definition.key,
            });
        }
        if definition.max_log_distance_from_trunk == 0 {
            return Err(ConfigError::InvalidLogDistance {
                tree: definition.key,
            });
        }
        if self.definitions.iter().any(|d| d.key == definition.key) {
            return Err(ConfigError::DuplicateTree {
                tree: definition.key,
            });
        }
        let id = TreeDefinitionId(self.definitions.len());
        self.definitions.push(definition);

        Ok(id)
    }

    /// Resolves material names through `palette` and registers each definition in order.
    pub fn from_config(
        configs: &[TreeDefinitionConfig],
        palette: &mut MaterialPalette,
    ) -> Result<Self, ConfigError> {
        let mut registry = Self::new();
        for config in configs {
            let resolve = |names: &[String], palette: &mut MaterialPalette| {
                names
                    .iter()
                    .map(|n| palette.intern(n))
                    .collect::<Result<FnvHashSet<MaterialId>, _>>()
            };
            let log_materials = resolve(&config.log_materials, palette)?;
            let leaf_materials = resolve(&config.leaf_materials, palette)?;
            registry.register(TreeDefinition {
                key: config.key.clone(),
                log_materials,
                leaf_materials,
                max_log_distance_from_trunk: config.max_log_distance_from_trunk,
                max_leaf_distance_from_log: config.max_leaf_distance_from_log,
                detect_leaves_diagonally: config.detect_leaves_diagonally,
                topple_cooldown_override: config.topple_cooldown_override,
            })?;
        }
        log::debug!(
            "Registered {} tree definitions: {}",
            registry.len(),
            registry.definitions.iter().map(|d| d.key.as_str()).join(", ")
        );

        Ok(registry)
    }

    pub fn get(&self, id: TreeDefinitionId) -> Option<&TreeDefinition> {
        self.definitions.get(id.0)
    }

    pub fn id_by_key(&self, key: &str) -> Option<TreeDefinitionId> {
        self.definitions
            .iter()
            .position(|d| d.key == key)
            .map(TreeDefinitionId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TreeDefinitionId, &TreeDefinition)> {
        self.definitions
            .iter()
            .enumerate()
            .map(|(i, d)| (TreeDefinitionId(i), d))
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// All definitions that accept `material` as a log. Empty means the voxel is not a tree log.
    pub fn candidates_for_log(&self, material: MaterialId) -> Candidates {
        Candidates {
            ids: self
                .iter()
                .filter(|(_, d)| d.matches_log(material))
                .map(|(id, _)| id)
                .collect(),
        }
    }

    /// The members of `candidates` consistent with a voxel of `material` classified as `kind`.
    pub fn narrow(
        &self,
        candidates: &Candidates,
        material: MaterialId,
        kind: TreeBlockType,
    ) -> Candidates {
        Candidates {
            ids: candidates
                .iter()
                .filter(|id| self.get(*id).map_or(false, |d| d.matches(material, kind)))
                .collect(),
        }
    }

    /// Resolves candidate ids to definitions, in registration order.
    pub fn definitions_of<'a>(
        &'a self,
        candidates: &'a Candidates,
    ) -> impl Iterator<Item = &'a TreeDefinition> + 'a {
        candidates.iter().filter_map(move |id| self.get(id))
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::tree_definition;

    fn oak_and_dark_oak() -> (TreeDefinitionRegistry, MaterialId, MaterialId, MaterialId) {
        let oak_log = MaterialId(1);
        let dark_log = MaterialId(2);
        let oak_leaves = MaterialId(3);
        let mut registry = TreeDefinitionRegistry::new();
        registry
            .register(tree_definition("oak", &[oak_log], &[oak_leaves], 6))
            .unwrap();
        registry
            .register(tree_definition("dark_oak", &[oak_log, dark_log], &[], 6))
            .unwrap();

        (registry, oak_log, dark_log, oak_leaves)
    }

    #[test]
    fn test_candidates_for_log_in_registration_order() {
        let (registry, oak_log, dark_log, _) = oak_and_dark_oak();

        let both = registry.candidates_for_log(oak_log);
        assert_eq!(
            both.iter().collect::<Vec<_>>(),
            vec![TreeDefinitionId(0), TreeDefinitionId(1)]
        );
        assert_eq!(both.first(), Some(TreeDefinitionId(0)));

        let dark = registry.candidates_for_log(dark_log);
        assert_eq!(dark.first(), registry.id_by_key("dark_oak"));
        assert!(registry.candidates_for_log(MaterialId(9)).is_empty());
    }

    #[test]
    fn test_narrow_only_shrinks() {
        let (registry, oak_log, dark_log, oak_leaves) = oak_and_dark_oak();
        let all = registry.candidates_for_log(oak_log);

        let after_log = registry.narrow(&all, oak_log, TreeBlockType::Log);
        assert_eq!(after_log, all);

        let after_dark = registry.narrow(&all, dark_log, TreeBlockType::Log);
        assert_eq!(after_dark.iter().collect::<Vec<_>>(), vec![TreeDefinitionId(1)]);
        assert!(after_dark.is_subset_of(&all));

        let after_leaf = registry.narrow(&after_dark, oak_leaves, TreeBlockType::Leaf);
        assert!(after_leaf.is_empty());
        assert!(after_leaf.is_subset_of(&after_dark));
    }

    #[test]
    fn test_register_rejects_bad_definitions() {
        let mut registry = TreeDefinitionRegistry::new();

        match registry.register(tree_definition("bare", &[], &[], 6)) {
            Err(ConfigError::EmptyLogMaterials { tree }) => assert_eq!(tree, "bare"),
            other => panic!("unexpected {:?}", other),
        }
        match registry.register(tree_definition("flat", &[MaterialId(1)], &[], 0)) {
            Err(ConfigError::InvalidLogDistance { tree }) => assert_eq!(tree, "flat"),
            other => panic!("unexpected {:?}", other),
        }
        registry
            .register(tree_definition("oak", &[MaterialId(1)], &[], 6))
            .unwrap();
        match registry.register(tree_definition("oak", &[MaterialId(2)], &[], 6)) {
            Err(ConfigError::DuplicateTree { tree }) => assert_eq!(tree, "oak"),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_candidates_display() {
        let (registry, oak_log, _, _) = oak_and_dark_oak();

        assert_eq!(registry.candidates_for_log(oak_log).to_string(), "[0, 1]");
    }
}
