use super::TreeDetector;
use crate::{DetectedTree, Direction, Orientation, PlacementTracker, Point, VoxelAccessor};

impl<'a, W, P> TreeDetector<'a, W, P>
where
    W: VoxelAccessor,
    P: PlacementTracker,
{
    /// Detects a standing tree: a trunk straight up from the seed, then branches around it.
    pub fn detect_vertical(&self, seed: Point) -> Option<DetectedTree<'a>> {
        let features = self.config.vertical;
        let mut search = self.begin(seed)?;

        search.grow_trunk(Direction::UP, false);
        log::trace!("Vertical trunk at {} has {} logs", seed, search.trunk().len());

        if features.branch_growth {
            search.grow_branches(features.distance_gate);
        }
        if self.config.detect_leaves {
            search.grow_leaves();
        }

        search.finish(Orientation::Vertical, self.config)
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
