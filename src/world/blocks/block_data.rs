//! Block Data - Pure DOP
//!
//! Block property data structures. No methods.

use crate::physics::AABB;
use crate::world::core::{BlockId, BlockState, BlockTag};

/// Static properties of a block kind, stored in the registry
#[derive(Clone, Debug)]
pub struct BlockProperties {
    pub id: BlockId,
    pub name: String,
    pub flammable: bool,
    /// Collision boxes in cell-local coordinates
    pub collision: Vec<AABB>,
    pub tags: Vec<BlockTag>,
    /// State used when the block appears without placement context
    pub default_state: BlockState,
}

impl Default for BlockProperties {
    fn default() -> Self {
        Self {
            id: BlockId::AIR,
            name: "air".to_string(),
            flammable: false,
            collision: Vec::new(),
            tags: Vec::new(),
            default_state: BlockState::AIR,
        }
    }
}
