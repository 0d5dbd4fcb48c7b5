//! Tree detection over 3D integer lattices (voxels).
//!
//! Given a broken log, determine which connected logs (and optionally leaves) form the same tree
//! so they can be felled as a unit, and which configured tree definition they belong to.

mod config;
mod detect;
mod direction;
mod error;
mod extent;
mod lattice;
mod palette;
mod point;
mod tree;
mod world;

#[cfg(test)]
mod test_util;

pub use config::{
    DetectionConfig, HorizontalFeatures, TimberConfig, TreeDefinitionConfig, VerticalFeatures,
};
pub use detect::TreeDetector;
pub use direction::{Direction, FACE_ADJACENT};
pub use error::ConfigError;
pub use extent::{bounding_extent, Extent, ExtentIterator};
pub use lattice::Lattice;
pub use palette::{MaterialId, MaterialPalette};
pub use point::Point;
pub use tree::{
    Candidates, DetectedTree, Orientation, TreeBlock, TreeBlockSet, TreeBlockType,
    TreeDefinition, TreeDefinitionId, TreeDefinitionRegistry,
};
pub use world::{NeverPlaced, PlacedBlocks, PlacementTracker, VoxelAccessor};

pub mod prelude {
    pub use crate::config::{DetectionConfig, TimberConfig};
    pub use crate::detect::TreeDetector;
    pub use crate::palette::{MaterialId, MaterialPalette};
    pub use crate::point::Point;
    pub use crate::tree::{DetectedTree, Orientation, TreeBlockType, TreeDefinitionRegistry};
    pub use crate::world::{PlacementTracker, VoxelAccessor};
}
