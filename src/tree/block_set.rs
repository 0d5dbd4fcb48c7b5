use crate::{bounding_extent, Extent, Point};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum TreeBlockType {
    Log,
    Leaf,
}

/// A voxel claimed by a detected tree. Identity is the coordinate alone; `kind` is metadata.
#[derive(Clone, Copy, Debug)]
pub struct TreeBlock {
    pub point: Point,
    pub kind: TreeBlockType,
}

impl TreeBlock {
    pub fn log(point: Point) -> Self {
        Self {
            point,
            kind: TreeBlockType::Log,
        }
    }

    pub fn leaf(point: Point) -> Self {
        Self {
            point,
            kind: TreeBlockType::Leaf,
        }
    }
}

impl PartialEq for TreeBlock {
    fn eq(&self, other: &Self) -> bool {
        self.point == other.point
    }
}

impl Eq for TreeBlock {}

impl Hash for TreeBlock {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.point.hash(state)
    }
}

/// The voxels of one detection attempt, in discovery order, at most one entry per coordinate.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreeBlockSet {
    initial: Point,
    blocks: IndexMap<Point, TreeBlockType>,
}

impl TreeBlockSet {
    /// A set holding only the initial log.
    pub fn new(initial_log: Point) -> Self {
        let mut blocks = IndexMap::new();
        blocks.insert(initial_log, TreeBlockType::Log);

        Self {
            initial: initial_log,
            blocks,
        }
    }

    /// The voxel the detection started from.
    pub fn initial(&self) -> Point {
        self.initial
    }

    /// Returns `false` and leaves the existing entry untouched when the coordinate is already
    /// present, whatever its classification.
    pub fn insert(&mut self, block: TreeBlock) -> bool {
        if self.blocks.contains_key(&block.point) {
            return false;
        }
        self.blocks.insert(block.point, block.kind);

        true
    }

    pub fn contains(&self, p: &Point) -> bool {
        self.blocks.contains_key(p)
    }

    pub fn kind_of(&self, p: &Point) -> Option<TreeBlockType> {
        self.blocks.get(p).copied()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Never true; the initial log is always present.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = TreeBlock> + '_ {
        self.blocks
            .iter()
            .map(|(&point, &kind)| TreeBlock { point, kind })
    }

    fn points_of(&self, kind: TreeBlockType) -> impl Iterator<Item = Point> + '_ {
        self.blocks
            .iter()
            .filter(move |(_, k)| **k == kind)
            .map(|(p, _)| *p)
    }

    pub fn log_blocks(&self) -> impl Iterator<Item = Point> + '_ {
        self.points_of(TreeBlockType::Log)
    }

    pub fn leaf_blocks(&self) -> impl Iterator<Item = Point> + '_ {
        self.points_of(TreeBlockType::Leaf)
    }

    pub fn log_count(&self) -> usize {
        self.log_blocks().count()
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_blocks().count()
    }

    /// The smallest extent holding every block, e.g. to know which chunks a felling touches.
    pub fn bounds(&self) -> Extent {
        bounding_extent(self.blocks.keys().copied())
            .unwrap_or_else(|| Extent::from_min_and_world_max(self.initial, self.initial))
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

    #[test]
    fn test_seeded_with_initial_log() {
        let seed = Point::new(4, 64, -2);
        let set = TreeBlockSet::new(seed);

        assert_eq!(set.len(), 1);
        assert_eq!(set.initial(), seed);
        assert_eq!(set.kind_of(&seed), Some(TreeBlockType::Log));
        assert_eq!(set.log_count(), 1);
        assert_eq!(set.leaf_count(), 0);
    }

    #[test]
    fn test_duplicate_coordinate_is_rejected_regardless_of_kind() {
        let seed = Point::zero();
        let mut set = TreeBlockSet::new(seed);

        assert!(!set.insert(TreeBlock::log(seed)));
        assert!(!set.insert(TreeBlock::leaf(seed)));
        assert_eq!(set.kind_of(&seed), Some(TreeBlockType::Log));

        let leaf = Point::new(0, 1, 0);
        assert!(set.insert(TreeBlock::leaf(leaf)));
        assert!(!set.insert(TreeBlock::log(leaf)));
        assert_eq!(set.kind_of(&leaf), Some(TreeBlockType::Leaf));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_tree_block_identity_ignores_kind() {
        let p = Point::new(1, 2, 3);

        assert_eq!(TreeBlock::log(p), TreeBlock::leaf(p));
        assert_ne!(TreeBlock::log(p), TreeBlock::log(Point::zero()));
    }

    #[test]
    fn test_iteration_keeps_discovery_order() {
        let mut set = TreeBlockSet::new(Point::zero());
        set.insert(TreeBlock::log([0, 1, 0].into()));
        set.insert(TreeBlock::leaf([1, 1, 0].into()));
        set.insert(TreeBlock::log([0, 2, 0].into()));

        let logs: Vec<Point> = set.log_blocks().collect();
        assert_eq!(
            logs,
            vec![[0, 0, 0].into(), [0, 1, 0].into(), [0, 2, 0].into()]
        );
        let leaves: Vec<Point> = set.leaf_blocks().collect();
        assert_eq!(leaves, vec![[1, 1, 0].into()]);
        assert_eq!(
            set.bounds(),
            Extent::from_min_and_world_max([0, 0, 0].into(), [1, 2, 0].into())
        );
    }
}
