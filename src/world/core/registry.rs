use super::{BlockId, BlockTag};
use crate::physics::AABB;
use crate::world::blocks::block_data::BlockProperties;
use std::collections::HashMap;

/// Registry that stores all block types as data
#[derive(Debug, Clone, Default)]
pub struct BlockRegistry {
    /// Map from BlockId to properties
    blocks: HashMap<BlockId, BlockProperties>,
    /// Map from name to BlockId
    name_to_id: HashMap<String, BlockId>,
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a block type under its properties' id.
    ///
    /// Registering the same id twice replaces the earlier properties.
    pub fn register_block(&mut self, name: &str, properties: BlockProperties) -> BlockId {
        let id = properties.id;
        if let Some(previous) = self.blocks.get(&id) {
            log::warn!(
                "Block id {} re-registered as '{}' (was '{}')",
                id.0,
                name,
                previous.name
            );
            self.name_to_id.retain(|_, v| *v != id);
        }

        self.blocks.insert(id, properties);
        self.name_to_id.insert(name.to_string(), id);

        log::info!("Registered block '{}' with ID {}", name, id.0);
        id
    }

    /// Get block properties by ID
    pub fn get_properties(&self, id: BlockId) -> Option<&BlockProperties> {
        self.blocks.get(&id)
    }

    /// Get a block ID by name
    pub fn get_id(&self, name: &str) -> Option<BlockId> {
        self.name_to_id.get(name).copied()
    }

    /// Check if a block ID is registered
    pub fn is_registered(&self, id: BlockId) -> bool {
        self.blocks.contains_key(&id)
    }

    /// Check whether a block is classified under `tag`. Unknown blocks carry no tags.
    pub fn has_tag(&self, id: BlockId, tag: BlockTag) -> bool {
        self.blocks
            .get(&id)
            .map_or(false, |p| p.tags.contains(&tag))
    }

    pub fn is_flammable(&self, id: BlockId) -> bool {
        self.blocks.get(&id).map_or(false, |p| p.flammable)
    }

    /// Collision boxes in cell-local coordinates; empty for air and unknown blocks
    pub fn collision_shape(&self, id: BlockId) -> &[AABB] {
        self.blocks
            .get(&id)
            .map_or(&[][..], |p| p.collision.as_slice())
    }
}
