use crate::{Extent, Point};

/// Dense storage of one `T` per point of an `Extent`. XZ level sets are laid out in order of Y, so
/// a column of logs is strided by the XZ area.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Lattice<T> {
    extent: Extent,
    values: Vec<T>,
}

impl<T: Clone> Lattice<T> {
    pub fn fill(extent: Extent, init_val: T) -> Self {
        Lattice {
            extent,
            values: vec![init_val; extent.volume()],
        }
    }

    /// Sets every point of `extent` that is also inside the lattice.
    pub fn fill_extent(&mut self, extent: &Extent, val: T) {
        for p in &extent.intersection(&self.extent) {
            *self.get_mut_world(&p) = val.clone();
        }
    }
}

impl<T> Lattice<T> {
    fn index_from_world_point(&self, p: &Point) -> usize {
        let s = self.extent.get_local_supremum();
        let p = self.extent.local_point_from_world_point(p);

        (p.y * s.x * s.z + p.z * s.x + p.x) as usize
    }

    /// Panics if `p` is outside of the extent.
    pub fn get_world(&self, p: &Point) -> &T {
        assert!(self.extent.contains_world(p), "{} is outside of the lattice", p);

        &self.values[self.index_from_world_point(p)]
    }

    /// Panics if `p` is outside of the extent.
    pub fn get_mut_world(&mut self, p: &Point) -> &mut T {
        assert!(self.extent.contains_world(p), "{} is outside of the lattice", p);
        let i = self.index_from_world_point(p);

        &mut self.values[i]
    }

    pub fn maybe_get_world(&self, p: &Point) -> Option<&T> {
        if self.extent.contains_world(p) {
            Some(&self.values[self.index_from_world_point(p)])
        } else {
            None
        }
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
