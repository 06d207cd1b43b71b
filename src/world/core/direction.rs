use cgmath::Vector3;
use serde::{Deserialize, Serialize};

/// One of the six faces/neighbours of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Down,  // -Y
    Up,    // +Y
    North, // -Z
    South, // +Z
    West,  // -X
    East,  // +X
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::Down,
        Direction::Up,
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    pub fn offset(&self) -> Vector3<i32> {
        match self {
            Direction::Down => Vector3::new(0, -1, 0),
            Direction::Up => Vector3::new(0, 1, 0),
            Direction::North => Vector3::new(0, 0, -1),
            Direction::South => Vector3::new(0, 0, 1),
            Direction::West => Vector3::new(-1, 0, 0),
            Direction::East => Vector3::new(1, 0, 0),
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }
}

/// Horizontal axis a facing lies on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAxis {
    X,
    Z,
}

/// Horizontal orientation of a placed block
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalFacing {
    #[default]
    North,
    South,
    West,
    East,
}

impl HorizontalFacing {
    pub fn clockwise(&self) -> HorizontalFacing {
        match self {
            HorizontalFacing::North => HorizontalFacing::East,
            HorizontalFacing::East => HorizontalFacing::South,
            HorizontalFacing::South => HorizontalFacing::West,
            HorizontalFacing::West => HorizontalFacing::North,
        }
    }

    pub fn counter_clockwise(&self) -> HorizontalFacing {
        match self {
            HorizontalFacing::North => HorizontalFacing::West,
            HorizontalFacing::West => HorizontalFacing::South,
            HorizontalFacing::South => HorizontalFacing::East,
            HorizontalFacing::East => HorizontalFacing::North,
        }
    }

    pub fn opposite(&self) -> HorizontalFacing {
        self.clockwise().clockwise()
    }

    pub fn axis(&self) -> HorizontalAxis {
        match self {
            HorizontalFacing::North | HorizontalFacing::South => HorizontalAxis::Z,
            HorizontalFacing::West | HorizontalFacing::East => HorizontalAxis::X,
        }
    }
}

/// Rotation applied when a structure containing the block is rotated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rotation {
    #[default]
    None,
    Clockwise90,
    Clockwise180,
    Counterclockwise90,
}

impl Rotation {
    pub fn rotate(&self, facing: HorizontalFacing) -> HorizontalFacing {
        match self {
            Rotation::None => facing,
            Rotation::Clockwise90 => facing.clockwise(),
            Rotation::Clockwise180 => facing.opposite(),
            Rotation::Counterclockwise90 => facing.counter_clockwise(),
        }
    }
}

/// Mirror applied when a structure containing the block is mirrored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mirror {
    #[default]
    None,
    /// Flip along the Z axis (north <-> south)
    LeftRight,
    /// Flip along the X axis (east <-> west)
    FrontBack,
}

impl Mirror {
    /// Rotation equivalent to mirroring a block facing `facing`
    pub fn rotation_for(&self, facing: HorizontalFacing) -> Rotation {
        match (self, facing.axis()) {
            (Mirror::LeftRight, HorizontalAxis::Z) | (Mirror::FrontBack, HorizontalAxis::X) => {
                Rotation::Clockwise180
            }
            _ => Rotation::None,
        }
    }

    pub fn mirror(&self, facing: HorizontalFacing) -> HorizontalFacing {
        self.rotation_for(facing).rotate(facing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_cycles() {
        let f = HorizontalFacing::North;
        assert_eq!(Rotation::Clockwise90.rotate(f), HorizontalFacing::East);
        assert_eq!(Rotation::Clockwise180.rotate(f), HorizontalFacing::South);
        assert_eq!(Rotation::Counterclockwise90.rotate(f), HorizontalFacing::West);
        assert_eq!(Rotation::None.rotate(f), f);
    }

    #[test]
    fn test_mirror_only_flips_matching_axis() {
        assert_eq!(Mirror::LeftRight.mirror(HorizontalFacing::North), HorizontalFacing::South);
        assert_eq!(Mirror::LeftRight.mirror(HorizontalFacing::East), HorizontalFacing::East);
        assert_eq!(Mirror::FrontBack.mirror(HorizontalFacing::West), HorizontalFacing::East);
        assert_eq!(Mirror::FrontBack.mirror(HorizontalFacing::South), HorizontalFacing::South);
    }

    #[test]
    fn test_direction_offsets() {
        for direction in Direction::ALL {
            let a = direction.offset();
            let b = direction.opposite().offset();
            assert_eq!(a + b, Vector3::new(0, 0, 0));
        }
        assert_eq!(Direction::Down.offset(), Vector3::new(0, -1, 0));
    }
}
