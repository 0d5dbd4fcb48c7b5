//! Tree detection from a single broken log.
//!
//! Both detectors grow a trunk from the seed, optionally search for branch logs around it, and
//! then optionally flood leaves from every detected log. Each accepted voxel narrows the set of
//! definitions the tree could still belong to; the earliest registered survivor wins.

mod horizontal;
mod search;
mod vertical;

use crate::{
    DetectedTree, DetectionConfig, PlacementTracker, Point, TreeDefinitionRegistry, VoxelAccessor,
};

use search::Search;

/// Runs detections against a borrowed world snapshot. Holds no state between calls, so running
/// the same detection twice gives the same result.
pub struct TreeDetector<'a, W, P> {
    world: &'a W,
    placed: &'a P,
    registry: &'a TreeDefinitionRegistry,
    config: &'a DetectionConfig,
}

impl<'a, W, P> TreeDetector<'a, W, P>
where
    W: VoxelAccessor,
    P: PlacementTracker,
{
    pub fn new(
        world: &'a W,
        placed: &'a P,
        registry: &'a TreeDefinitionRegistry,
        config: &'a DetectionConfig,
    ) -> Self {
        Self {
            world,
            placed,
            registry,
            config,
        }
    }

    /// Tries a standing tree first, then a felled one.
    pub fn detect(&self, seed: Point) -> Option<DetectedTree<'a>> {
        self.detect_vertical(seed).or_else(|| self.detect_horizontal(seed))
    }

    fn begin(&self, seed: Point) -> Option<Search<'a, W, P>> {
        Search::begin(
            self.world,
            self.placed,
            self.registry,
            seed,
            self.config.only_detect_logs_upwards,
        )
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
