use super::Direction;
use cgmath::Point3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer position of a single cell in the world grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoxelPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl VoxelPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Offset by a delta. Coordinates wrap at the `i32` range.
    pub fn offset(&self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(
            self.x.wrapping_add(dx),
            self.y.wrapping_add(dy),
            self.z.wrapping_add(dz),
        )
    }

    /// Neighbouring cell in the given direction
    pub fn relative(&self, direction: Direction) -> Self {
        let o = direction.offset();
        self.offset(o.x, o.y, o.z)
    }

    pub fn below(&self, n: i32) -> Self {
        self.offset(0, -n, 0)
    }

    pub fn above(&self, n: i32) -> Self {
        self.offset(0, n, 0)
    }

    /// World-space corner of the cell (minimum x/y/z)
    pub fn corner(&self) -> Point3<f32> {
        Point3::new(self.x as f32, self.y as f32, self.z as f32)
    }

    /// World-space center of the cell
    pub fn center(&self) -> Point3<f32> {
        Point3::new(
            self.x as f32 + 0.5,
            self.y as f32 + 0.5,
            self.z as f32 + 0.5,
        )
    }
}

impl fmt::Display for VoxelPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbours() {
        let pos = VoxelPos::new(1, 2, 3);
        assert_eq!(pos.relative(Direction::North), VoxelPos::new(1, 2, 2));
        assert_eq!(pos.relative(Direction::East), VoxelPos::new(2, 2, 3));
        assert_eq!(pos.below(2), VoxelPos::new(1, 0, 3));
        assert_eq!(pos.above(1).to_string(), "(1, 3, 3)");
    }

    #[test]
    fn test_offsets_wrap_at_coordinate_limits() {
        let floor = VoxelPos::new(0, i32::MIN, 0);
        assert_eq!(floor.below(1), VoxelPos::new(0, i32::MAX, 0));

        let edge = VoxelPos::new(i32::MAX, 0, 0);
        assert_eq!(edge.relative(Direction::East).x, i32::MIN);
    }
}
