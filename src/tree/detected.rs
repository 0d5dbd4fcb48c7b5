use crate::{TreeBlockSet, TreeDefinition, TreeDefinitionId};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// A successful detection: the winning definition, every claimed voxel, and how the trunk lies.
#[derive(Clone, Debug, PartialEq)]
pub struct DetectedTree<'r> {
    pub definition_id: TreeDefinitionId,
    pub definition: &'r TreeDefinition,
    pub blocks: TreeBlockSet,
    pub orientation: Orientation,
}

impl<'r> DetectedTree<'r> {
    pub fn log_count(&self) -> usize {
        self.blocks.log_count()
    }

    pub fn leaf_count(&self) -> usize {
        self.blocks.leaf_count()
    }
}
