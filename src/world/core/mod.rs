//! Core world data types and fundamental structures
//!
//! This module contains the essential data types shared by every block
//! behavior: ids, states, positions, directions, items and the registry.

mod block;
mod direction;
mod item;
mod position;
mod registry;

pub use block::{BlockId, BlockState, BlockTag};
pub use direction::{Direction, HorizontalAxis, HorizontalFacing, Mirror, Rotation};
pub use item::{ItemId, ItemStack};
pub use position::VoxelPos;
pub use registry::BlockRegistry;
