//! Basic engine blocks
//!
//! The stock blocks a campfire interacts with: solid floors, flammable
//! fuel, the hay bale smoke source, fence posts, and the campfire variants.
//! Games can register additional blocks on top of these.

use crate::physics::{aabb_from_pixels, full_cube};
use crate::world::blocks::block_data::BlockProperties;
use crate::world::blocks::campfire::{campfire_shape, default_campfire_state};
use crate::world::core::{BlockId, BlockRegistry, BlockState, BlockTag};

/// Create stone block properties
pub fn create_stone_properties() -> BlockProperties {
    BlockProperties {
        id: BlockId::STONE,
        name: "stone".to_string(),
        collision: vec![full_cube()],
        default_state: BlockState::of(BlockId::STONE),
        ..Default::default()
    }
}

/// Create planks block properties
pub fn create_planks_properties() -> BlockProperties {
    BlockProperties {
        id: BlockId::PLANKS,
        name: "planks".to_string(),
        flammable: true,
        collision: vec![full_cube()],
        default_state: BlockState::of(BlockId::PLANKS),
        ..Default::default()
    }
}

/// Create hay bale properties. Hay under a campfire makes it a signal fire.
pub fn create_hay_block_properties() -> BlockProperties {
    BlockProperties {
        id: BlockId::HAY_BLOCK,
        name: "hay_block".to_string(),
        flammable: true,
        collision: vec![full_cube()],
        tags: vec![BlockTag::SmokeSource],
        default_state: BlockState::of(BlockId::HAY_BLOCK),
        ..Default::default()
    }
}

/// Create oak fence properties (post only; arms depend on neighbours)
pub fn create_oak_fence_properties() -> BlockProperties {
    BlockProperties {
        id: BlockId::OAK_FENCE,
        name: "oak_fence".to_string(),
        flammable: true,
        collision: vec![aabb_from_pixels(6.0, 0.0, 6.0, 10.0, 24.0, 10.0)],
        default_state: BlockState::of(BlockId::OAK_FENCE),
        ..Default::default()
    }
}

/// Create bottom stone slab properties
pub fn create_stone_slab_properties() -> BlockProperties {
    BlockProperties {
        id: BlockId::STONE_SLAB,
        name: "stone_slab".to_string(),
        collision: vec![aabb_from_pixels(0.0, 0.0, 0.0, 16.0, 8.0, 16.0)],
        default_state: BlockState::of(BlockId::STONE_SLAB),
        ..Default::default()
    }
}

/// Create properties for a campfire variant
pub fn create_campfire_properties(id: BlockId, name: &str) -> BlockProperties {
    BlockProperties {
        id,
        name: name.to_string(),
        collision: vec![campfire_shape()],
        tags: vec![BlockTag::Campfires],
        default_state: default_campfire_state(id),
        ..Default::default()
    }
}

/// Register all basic engine blocks
///
/// Air (BlockId 0) is registered too so that lookups on empty cells resolve.
pub fn register_basic_blocks(registry: &mut BlockRegistry) {
    registry.register_block("engine:air", BlockProperties::default());
    registry.register_block("engine:stone", create_stone_properties());
    registry.register_block("engine:planks", create_planks_properties());
    registry.register_block("engine:hay_block", create_hay_block_properties());
    registry.register_block("engine:oak_fence", create_oak_fence_properties());
    registry.register_block("engine:stone_slab", create_stone_slab_properties());
    registry.register_block(
        "engine:campfire",
        create_campfire_properties(BlockId::CAMPFIRE, "campfire"),
    );
    registry.register_block(
        "engine:soul_campfire",
        create_campfire_properties(BlockId::SOUL_CAMPFIRE, "soul_campfire"),
    );
}
