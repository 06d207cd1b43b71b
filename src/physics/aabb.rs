/// Data-Oriented Axis-Aligned Bounding Box System
///
/// Pure functions for collision shape tests - no methods, just data transformations.
/// Block shapes are expressed in cell-local coordinates where one cell spans 0..1.
use cgmath::Point3;
use serde::{Deserialize, Serialize};

/// Pixels per cell edge when shapes are authored in texture pixels
pub const PIXELS_PER_BLOCK: f32 = 16.0;

/// Axis-Aligned Bounding Box - pure data structure
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AABB {
    pub min: Point3<f32>,
    pub max: Point3<f32>,
}

/// Create AABB from a box authored in pixels (0..16 per cell)
pub fn aabb_from_pixels(x0: f32, y0: f32, z0: f32, x1: f32, y1: f32, z1: f32) -> AABB {
    AABB {
        min: Point3::new(
            x0 / PIXELS_PER_BLOCK,
            y0 / PIXELS_PER_BLOCK,
            z0 / PIXELS_PER_BLOCK,
        ),
        max: Point3::new(
            x1 / PIXELS_PER_BLOCK,
            y1 / PIXELS_PER_BLOCK,
            z1 / PIXELS_PER_BLOCK,
        ),
    }
}

/// A full 1x1x1 cell
pub fn full_cube() -> AABB {
    AABB {
        min: Point3::new(0.0, 0.0, 0.0),
        max: Point3::new(1.0, 1.0, 1.0),
    }
}

/// Test if two AABBs share a region of positive volume (touching faces do not count)
pub fn aabb_overlaps(aabb1: &AABB, aabb2: &AABB) -> bool {
    aabb1.min.x < aabb2.max.x && aabb1.max.x > aabb2.min.x &&
    aabb1.min.y < aabb2.max.y && aabb1.max.y > aabb2.min.y &&
    aabb1.min.z < aabb2.max.z && aabb1.max.z > aabb2.min.z
}

/// Test whether any box of `shape` overlaps any box of `other` with positive volume
pub fn shapes_overlap(shape: &[AABB], other: &[AABB]) -> bool {
    shape
        .iter()
        .any(|a| other.iter().any(|b| aabb_overlaps(a, b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_boxes_scale_to_cell() {
        let slab = aabb_from_pixels(0.0, 0.0, 0.0, 16.0, 8.0, 16.0);
        assert_eq!(slab.min, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(slab.max, Point3::new(1.0, 0.5, 1.0));
    }

    #[test]
    fn test_touching_boxes_do_not_overlap() {
        let lower = aabb_from_pixels(0.0, 0.0, 0.0, 16.0, 8.0, 16.0);
        let upper = aabb_from_pixels(0.0, 8.0, 0.0, 16.0, 16.0, 16.0);
        assert!(!aabb_overlaps(&lower, &upper));
        assert!(aabb_overlaps(&lower, &full_cube()));
    }

    #[test]
    fn test_shapes_overlap() {
        let post = [aabb_from_pixels(6.0, 0.0, 6.0, 10.0, 16.0, 10.0)];
        let thin_edge = [aabb_from_pixels(0.0, 0.0, 0.0, 2.0, 16.0, 16.0)];
        assert!(shapes_overlap(&post, &[full_cube()]));
        assert!(!shapes_overlap(&post, &thin_edge));
        assert!(!shapes_overlap(&post, &[]));
    }
}
