mod block_set;
mod definition;
mod detected;
mod registry;

pub use block_set::{TreeBlock, TreeBlockSet, TreeBlockType};
pub use definition::{TreeDefinition, TreeDefinitionId};
pub use detected::{DetectedTree, Orientation};
pub use registry::{Candidates, TreeDefinitionRegistry};
