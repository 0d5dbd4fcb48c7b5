use crate::{MaterialId, Point, TreeDefinition, VoxelAccessor};

use fnv::FnvHashMap;
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use std::iter::FromIterator;

pub fn assert_elements_eq<T: Clone + Debug + Eq + Hash>(v1: &[T], v2: &[T]) {
    let set1: HashSet<T> = HashSet::from_iter(v1.iter().cloned());
    let set2: HashSet<T> = HashSet::from_iter(v2.iter().cloned());
    assert_eq!(set1, set2);
}

pub fn tree_definition(
    key: &str,
    logs: &[MaterialId],
    leaves: &[MaterialId],
    max_log_distance: u32,
) -> TreeDefinition {
    TreeDefinition {
        key: key.to_string(),
        log_materials: logs.iter().copied().collect(),
        leaf_materials: leaves.iter().copied().collect(),
        max_log_distance_from_trunk: max_log_distance,
        max_leaf_distance_from_log: 6,
        detect_leaves_diagonally: false,
        topple_cooldown_override: None,
    }
}

/// An unbounded world of air with a few voxels set.
#[derive(Default)]
pub struct SparseWorld {
    voxels: FnvHashMap<Point, MaterialId>,
}

impl SparseWorld {
    pub fn set(&mut self, p: impl Into<Point>, material: MaterialId) {
        self.voxels.insert(p.into(), material);
    }

    /// Sets `length` voxels starting at `start` and stepping by `step`.
    pub fn line(
        &mut self,
        start: impl Into<Point>,
        step: impl Into<Point>,
        length: i32,
        material: MaterialId,
    ) {
        let start = start.into();
        let step = step.into();
        for i in 0..length {
            self.set(start + step * i, material);
        }
    }
}

impl VoxelAccessor for SparseWorld {
    fn material_at(&self, p: &Point) -> MaterialId {
        self.voxels.get(p).copied().unwrap_or(MaterialId::EMPTY)
    }
}

pub fn sorted_points(points: impl IntoIterator<Item = Point>) -> Vec<Point> {
    let mut points: Vec<Point> = points.into_iter().collect();
    points.sort_by_key(|p| (p.x, p.y, p.z));

    points
}
