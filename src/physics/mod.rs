//! Physics Module - collision shapes for block queries

pub mod aabb;

// Simple re-exports
pub use aabb::{aabb_from_pixels, full_cube, shapes_overlap, AABB};
