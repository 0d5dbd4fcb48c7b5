use super::TreeDetector;
use crate::{DetectedTree, Direction, Orientation, PlacementTracker, Point, VoxelAccessor};

/// Probe order on each axis. North-south comes first.
const AXES: [[Direction; 2]; 2] = [
    [Direction::SOUTH, Direction::NORTH],
    [Direction::WEST, Direction::EAST],
];

impl<'a, W, P> TreeDetector<'a, W, P>
where
    W: VoxelAccessor,
    P: PlacementTracker,
{
    /// Detects a felled tree lying along a horizontal axis through the seed.
    ///
    /// Each axis is probed in its first direction and then the reverse. The first direction with a
    /// connected log becomes the trunk line. Unless detection is upward only, the trunk then also
    /// grows the opposite way from the seed.
    pub fn detect_horizontal(&self, seed: Point) -> Option<DetectedTree<'a>> {
        let features = self.config.horizontal;
        let gate = features.distance_gate;
        let mut search = self.begin(seed)?;

        let axes = if features.axis_fallback {
            &AXES[..]
        } else {
            &AXES[..1]
        };
        for probes in axes {
            let found = probes
                .iter()
                .copied()
                .find(|&direction| search.grow_trunk(direction, gate) > 0);
            if let Some(direction) = found {
                if !self.config.only_detect_logs_upwards {
                    search.grow_trunk(direction.negate(), gate);
                }
                log::trace!(
                    "Horizontal trunk at {} runs {:?} with {} logs",
                    seed,
                    direction,
                    search.trunk().len()
                );
                break;
            }
        }

        if features.branch_growth {
            search.grow_branches(gate);
        }
        if self.config.detect_leaves {
            search.grow_leaves();
        }

        search.finish(Orientation::Horizontal, self.config)
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
