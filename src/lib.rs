// Hearth Campfire - Data-Oriented Programming (DOP) Architecture
//
// Campfire block behavior for voxel hosts.
// - Data lives in *_data modules, transformations in *_operations modules
// - Handlers are pure: (state, event, context) -> transition + effects
// - The host owns the grid, actors and inventories; it reads effects back
//
// For new code, prefer:
// - world::blocks::campfire for behavior
// - world_operations for committing transitions to a GridWorld
// - config for building variants from TOML

pub mod config;
pub mod error;
pub mod physics;
pub mod random;
pub mod world;

pub use config::{build_all, build_block_data, CampfireConfig, VariantConfig};
pub use error::{EngineError, EngineResult, OptionExt};
pub use physics::AABB;
pub use random::RandomSource;

// === Core World Types ===
pub use world::core::{
    BlockId, BlockRegistry, BlockState, BlockTag, Direction, HorizontalFacing, ItemId, ItemStack,
    VoxelPos,
};

pub use world::blocks::campfire::{
    CampfireBlockData, CampfireEffect, CampfireState, CampfireTransition, InteractionResult,
};

pub use world::{GridWorld, WorldError, WorldResult};
