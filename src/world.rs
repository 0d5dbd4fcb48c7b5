//! The narrow views of the host world that tree detection reads through.

use crate::{Lattice, MaterialId, Point};

use fnv::FnvHashSet;

/// Read-only access to voxel materials. Must answer consistently for the duration of one
/// detection call.
pub trait VoxelAccessor {
    fn material_at(&self, p: &Point) -> MaterialId;

    fn offset(&self, p: &Point, dx: i32, dy: i32, dz: i32) -> Point {
        p.offset(dx, dy, dz)
    }

    fn height_of(&self, p: &Point) -> i32 {
        p.y
    }
}

/// Answers whether a voxel was placed by a player rather than generated with the world.
pub trait PlacementTracker {
    fn is_placed(&self, p: &Point) -> bool;
}

impl<V: VoxelAccessor + ?Sized> VoxelAccessor for &V {
    fn material_at(&self, p: &Point) -> MaterialId {
        (**self).material_at(p)
    }

    fn offset(&self, p: &Point, dx: i32, dy: i32, dz: i32) -> Point {
        (**self).offset(p, dx, dy, dz)
    }

    fn height_of(&self, p: &Point) -> i32 {
        (**self).height_of(p)
    }
}

impl<P: PlacementTracker + ?Sized> PlacementTracker for &P {
    fn is_placed(&self, p: &Point) -> bool {
        (**self).is_placed(p)
    }
}

/// Everything outside of the lattice reads as empty.
impl VoxelAccessor for Lattice<MaterialId> {
    fn material_at(&self, p: &Point) -> MaterialId {
        self.maybe_get_world(p).copied().unwrap_or(MaterialId::EMPTY)
    }
}

/// A tracker for worlds without player building.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeverPlaced;

impl PlacementTracker for NeverPlaced {
    fn is_placed(&self, _p: &Point) -> bool {
        false
    }
}

/// The set of player-placed voxel coordinates.
#[derive(Clone, Debug, Default)]
pub struct PlacedBlocks {
    points: FnvHashSet<Point>,
}

impl PlacedBlocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if `p` was already marked.
    pub fn mark(&mut self, p: Point) -> bool {
        self.points.insert(p)
    }

    /// Call when a placed voxel is broken, so a naturally regrown voxel at `p` counts again.
    pub fn unmark(&mut self, p: &Point) -> bool {
        self.points.remove(p)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl PlacementTracker for PlacedBlocks {
    fn is_placed(&self, p: &Point) -> bool {
        self.points.contains(p)
    }
}

impl std::iter::FromIterator<Point> for PlacedBlocks {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
