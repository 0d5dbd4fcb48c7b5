use crate::Point;

/// A Cartesian product of 3 integer ranges: `[x_min..x_max] * [y_min..y_max] * [z_min..z_max]`.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct Extent {
    /// Point in the extent that's lesser than all other points in the extent.
    minimum: Point,

    /// A strict supremum is the least point that's strictly greater than all points in the extent.
    world_sup: Point,

    /// Relative to the minimum, so this is effectively the size of the extent.
    local_sup: Point,
}

impl Extent {
    /// The extent with `minimum` as the least element and `world_max` as the greatest element.
    pub fn from_min_and_world_max(minimum: Point, world_max: Point) -> Self {
        let world_sup = world_max + [1, 1, 1].into();

        Self {
            minimum,
            world_sup,
            local_sup: world_sup - minimum,
        }
    }

    /// The extent with `minimum` as the least element and `local_sup` as the least upper bound
    /// in local coordinates (i.e. the size).
    pub fn from_min_and_local_supremum(minimum: Point, local_sup: Point) -> Self {
        Self {
            minimum,
            world_sup: minimum + local_sup,
            local_sup,
        }
    }

    /// Returns a cube with all dimensions of length `2 * radius + 1`.
    pub fn from_center_and_radius(center: Point, radius: i32) -> Self {
        assert!(radius > 0);

        let minimum = center - [radius; 3].into();
        let local_sup: Point = [2 * radius + 1; 3].into();

        Self::from_min_and_local_supremum(minimum, local_sup)
    }

    /// The size of the extent.
    pub fn get_local_supremum(&self) -> &Point {
        &self.local_sup
    }

    /// Number of lattice points in the extent.
    pub fn volume(&self) -> usize {
        // A degenerate extent can have negative size components.
        (self.local_sup.x.max(0) * self.local_sup.y.max(0) * self.local_sup.z.max(0)) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.volume() == 0
    }

    pub fn local_point_from_world_point(&self, p: &Point) -> Point {
        *p - self.minimum
    }

    pub fn contains_world(&self, world_point: &Point) -> bool {
        self.minimum <= *world_point && *world_point < self.world_sup
    }

    /// Returns the overlapping points of `self` and `other`.
    pub fn intersection(&self, other: &Self) -> Self {
        let minimum = [
            self.minimum.x.max(other.minimum.x),
            self.minimum.y.max(other.minimum.y),
            self.minimum.z.max(other.minimum.z),
        ]
        .into();
        let world_sup: Point = [
            self.world_sup.x.min(other.world_sup.x),
            self.world_sup.y.min(other.world_sup.y),
            self.world_sup.z.min(other.world_sup.z),
        ]
        .into();

        Self {
            minimum,
            world_sup,
            local_sup: world_sup - minimum,
        }
    }
}

/// Returns the smallest extent containing all of the given points, or `None` if there are none.
pub fn bounding_extent<I>(points: I) -> Option<Extent>
where
    I: IntoIterator<Item = Point>,
{
    let mut points = points.into_iter();
    let first = points.next()?;
    let (min_point, max_point) = points.fold((first, first), |(lo, hi), p| {
        (
            [lo.x.min(p.x), lo.y.min(p.y), lo.z.min(p.z)].into(),
            [hi.x.max(p.x), hi.y.max(p.y), hi.z.max(p.z)].into(),
        )
    });

    Some(Extent::from_min_and_world_max(min_point, max_point))
}

#[derive(Debug)]
pub struct ExtentIterator {
    extent: Extent,
    cursor: Point,
    completed: bool,
}

impl ExtentIterator {
    pub fn new(extent: Extent) -> Self {
        ExtentIterator {
            extent,
            cursor: extent.minimum,
            completed: extent.is_empty(),
        }
    }
}

/// Yields every point in the extent; `z` varies fastest, then `y`, then `x`.
impl Iterator for ExtentIterator {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.completed {
            return None;
        }

        let old_cursor = self.cursor;

        self.cursor.z += 1;
        if self.cursor.z == self.extent.world_sup.z {
            self.cursor.z = self.extent.minimum.z;
            self.cursor.y += 1;
            if self.cursor.y == self.extent.world_sup.y {
                self.cursor.y = self.extent.minimum.y;
                self.cursor.x += 1;
                if self.cursor.x == self.extent.world_sup.x {
                    self.completed = true;
                }
            }
        }

        Some(old_cursor)
    }
}

impl IntoIterator for &Extent {
    type Item = Point;
    type IntoIter = ExtentIterator;

    fn into_iter(self) -> Self::IntoIter {
        ExtentIterator::new(*self)
    }
}

impl IntoIterator for Extent {
    type Item = Point;
    type IntoIter = ExtentIterator;

    fn into_iter(self) -> Self::IntoIter {
        ExtentIterator::new(self)
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
