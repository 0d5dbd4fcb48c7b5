use crate::{
    Candidates, DetectedTree, DetectionConfig, Extent, MaterialId, Orientation, PlacementTracker,
    Point, TreeBlock, TreeBlockSet, TreeDefinitionRegistry, VoxelAccessor,
    FACE_ADJACENT,
};

use fnv::FnvHashSet;

/// Relaxes the squared trunk distance when the tree may have been cut mid-trunk.
const MID_TRUNK_DISTANCE_FACTOR: f64 = 1.5;

/// The 26 neighbors of a voxel, in `Extent` iteration order.
pub(crate) fn full_neighborhood() -> Vec<Point> {
    Extent::from_center_and_radius(Point::zero(), 1)
        .into_iter()
        .filter(|p| *p != Point::zero())
        .collect()
}

/// The 17 neighbors at or above a voxel (the 3x2x3 shell), in `Extent` iteration order.
pub(crate) fn upper_neighborhood() -> Vec<Point> {
    Extent::from_min_and_world_max([-1, 0, -1].into(), [1, 1, 1].into())
        .into_iter()
        .filter(|p| *p != Point::zero())
        .collect()
}

/// The mutable state of one detection attempt. Candidates are replaced by their narrowed subset
/// after every accepted voxel, so they only ever shrink.
pub(crate) struct Search<'a, W, P> {
    world: &'a W,
    placed: &'a P,
    registry: &'a TreeDefinitionRegistry,
    only_upwards: bool,
    seed_height: i32,
    blocks: TreeBlockSet,
    candidates: Candidates,
    trunk: Vec<Point>,
}

impl<'a, W, P> Search<'a, W, P>
where
    W: VoxelAccessor,
    P: PlacementTracker,
{
    /// `None` when the seed can't start a tree: it was placed by a player or no definition accepts
    /// its material as a log.
    pub fn begin(
        world: &'a W,
        placed: &'a P,
        registry: &'a TreeDefinitionRegistry,
        seed: Point,
        only_upwards: bool,
    ) -> Option<Self> {
        if placed.is_placed(&seed) {
            log::debug!("Not a tree at {}: the log was placed by a player", seed);
            return None;
        }
        let material = world.material_at(&seed);
        let candidates = registry.candidates_for_log(material);
        if candidates.is_empty() {
            log::debug!("Not a tree at {}: no definition has log {}", seed, material);
            return None;
        }

        Some(Self {
            world,
            placed,
            registry,
            only_upwards,
            seed_height: world.height_of(&seed),
            blocks: TreeBlockSet::new(seed),
            candidates,
            trunk: vec![seed],
        })
    }

    pub fn trunk(&self) -> &[Point] {
        &self.trunk
    }

    #[cfg(test)]
    pub fn candidates(&self) -> &Candidates {
        &self.candidates
    }

    fn accepts_log_material(&self, material: MaterialId) -> bool {
        self.registry
            .definitions_of(&self.candidates)
            .any(|d| d.matches_log(material))
    }

    fn is_near_trunk(&self, p: &Point) -> bool {
        self.registry.definitions_of(&self.candidates).any(|d| {
            let max = d.max_log_distance_from_trunk as f64;
            let mut max_squared = max * max;
            if !self.only_upwards {
                max_squared *= MID_TRUNK_DISTANCE_FACTOR;
            }

            self.trunk
                .iter()
                .any(|t| (p.distance_squared(t) as f64) < max_squared)
        })
    }

    fn is_valid_log(&self, p: &Point, distance_gate: bool) -> bool {
        if self.placed.is_placed(p) || self.blocks.contains(p) {
            return false;
        }
        if !self.accepts_log_material(self.world.material_at(p)) {
            return false;
        }

        !distance_gate || self.is_near_trunk(p)
    }

    fn accept(&mut self, block: TreeBlock) {
        let material = self.world.material_at(&block.point);
        let inserted = self.blocks.insert(block);
        debug_assert!(inserted);

        let narrowed = self.registry.narrow(&self.candidates, material, block.kind);
        debug_assert!(narrowed.is_subset_of(&self.candidates));
        debug_assert!(!narrowed.is_empty());
        if narrowed.len() != self.candidates.len() {
            log::trace!(
                "{:?} {} narrowed candidates {} -> {}",
                block.kind,
                block.point,
                self.candidates,
                narrowed
            );
        }
        self.candidates = narrowed;
    }

    /// Extends the trunk from the seed along `direction` until the first voxel that doesn't
    /// qualify. The distance gate is only consulted once the trunk has grown past the seed.
    /// Returns how many logs were added.
    pub fn grow_trunk(&mut self, direction: crate::Direction, distance_gate: bool) -> usize {
        let step = direction.unit();
        let mut cursor = self.blocks.initial();
        let mut grown = 0;
        loop {
            let next = self.world.offset(&cursor, step.x, step.y, step.z);
            let gated = distance_gate && self.trunk.len() > 1;
            if !self.is_valid_log(&next, gated) {
                break;
            }
            self.accept(TreeBlock::log(next));
            self.trunk.push(next);
            cursor = next;
            grown += 1;
        }

        grown
    }

    /// Depth-first search for branch logs around every trunk voxel, in trunk order.
    ///
    /// Frames on the stack hold the index of the next neighbor to try, which visits voxels in
    /// exactly the order a recursive search would.
    pub fn grow_branches(&mut self, distance_gate: bool) {
        let kernel = if self.only_upwards {
            upper_neighborhood()
        } else {
            full_neighborhood()
        };
        let trunk = self.trunk.clone();

        let mut stack: Vec<(Point, usize)> = Vec::new();
        for origin in trunk {
            stack.push((origin, 0));
            while let Some(frame) = stack.last_mut() {
                let (center, next) = *frame;
                if next == kernel.len() {
                    stack.pop();
                    continue;
                }
                frame.1 += 1;

                let offset = kernel[next];
                let target = self.world.offset(&center, offset.x, offset.y, offset.z);
                if !self.is_valid_log(&target, distance_gate) {
                    continue;
                }
                self.accept(TreeBlock::log(target));
                if !self.only_upwards || self.world.height_of(&target) > self.seed_height {
                    stack.push((target, 0));
                }
            }
        }
    }

    fn leaf_is_near_log(&self, p: &Point, material: MaterialId, logs: &[Point]) -> bool {
        self.registry
            .definitions_of(&self.candidates)
            .filter(|d| d.matches_leaf(material))
            .any(|d| {
                let max = d.max_leaf_distance_from_log as i64;

                logs.iter().any(|l| p.distance_squared(l) <= max * max)
            })
    }

    fn is_valid_leaf(&self, p: &Point, logs: &[Point]) -> bool {
        if self.placed.is_placed(p) || self.blocks.contains(p) {
            return false;
        }

        self.leaf_is_near_log(p, self.world.material_at(p), logs)
    }

    /// Floods leaves outward from every detected log. Face neighbors only, unless a remaining
    /// candidate detects leaves diagonally when the flood starts.
    pub fn grow_leaves(&mut self) {
        let diagonal = self
            .registry
            .definitions_of(&self.candidates)
            .any(|d| d.detect_leaves_diagonally);
        let kernel = if diagonal {
            full_neighborhood()
        } else {
            FACE_ADJACENT.to_vec()
        };
        let logs: Vec<Point> = self.blocks.log_blocks().collect();

        let mut visited = FnvHashSet::default();
        let mut stack: Vec<(Point, usize)> = Vec::new();
        for origin in logs.iter().copied() {
            stack.push((origin, 0));
            while let Some(frame) = stack.last_mut() {
                let (center, next) = *frame;
                if next == kernel.len() {
                    stack.pop();
                    continue;
                }
                frame.1 += 1;

                let offset = kernel[next];
                let target = self.world.offset(&center, offset.x, offset.y, offset.z);
                if !visited.insert(target) || !self.is_valid_leaf(&target, &logs) {
                    continue;
                }
                self.accept(TreeBlock::leaf(target));
                stack.push((target, 0));
            }
        }
    }

    /// Applies the acceptance gates and picks the earliest registered remaining definition.
    pub fn finish(
        self,
        orientation: Orientation,
        config: &DetectionConfig,
    ) -> Option<DetectedTree<'a>> {
        let seed = self.blocks.initial();
        let logs = self.blocks.log_count();
        if logs < config.logs_required_for_tree {
            log::debug!(
                "Not a tree at {}: {} logs, {} required",
                seed,
                logs,
                config.logs_required_for_tree
            );
            return None;
        }
        let leaves = self.blocks.leaf_count();
        if leaves < config.leaves_required_for_tree {
            log::debug!(
                "Not a tree at {}: {} leaves, {} required",
                seed,
                leaves,
                config.leaves_required_for_tree
            );
            return None;
        }

        let definition_id = self.candidates.first()?;
        let definition = self.registry.get(definition_id)?;
        log::debug!(
            "Detected {:?} {} tree at {}: {} logs, {} leaves",
            orientation,
            definition.key,
            seed,
            logs,
            leaves
        );

        Some(DetectedTree {
            definition_id,
            definition,
            blocks: self.blocks,
            orientation,
        })
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
