use crate::Point;

use enum_primitive_derive::Primitive;
use num_traits::cast::FromPrimitive;

/// The integer order of directions is used for arithmetic direction transformations.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Primitive)]
pub enum Direction {
    NegX = 0,
    PosX = 1,
    NegY = 2,
    PosY = 3,
    NegZ = 4,
    PosZ = 5,
}

impl Direction {
    pub const NORTH: Self = Direction::NegZ;
    pub const SOUTH: Self = Direction::PosZ;
    pub const WEST: Self = Direction::NegX;
    pub const EAST: Self = Direction::PosX;
    pub const UP: Self = Direction::PosY;

    pub fn negate(self) -> Self {
        // Flipping the low bit swaps the sign and keeps the axis.
        Direction::from_u32(self as u32 ^ 1).unwrap_or(self)
    }

    pub fn unit(self) -> Point {
        FACE_ADJACENT[self as usize]
    }
}

/// Unit offsets to the six face-adjacent neighbors, indexed by `Direction`.
pub const FACE_ADJACENT: [Point; 6] = [
    Point { x: -1, y: 0, z: 0 },
    Point { x: 1, y: 0, z: 0 },
    Point { x: 0, y: -1, z: 0 },
    Point { x: 0, y: 1, z: 0 },
    Point { x: 0, y: 0, z: -1 },
    Point { x: 0, y: 0, z: 1 },
];
