//! World Module
//!
//! Block data, the block registry and block behaviors, plus a sparse grid
//! host used to drive them.
//!
//! # Architecture Overview
//!
//! - **Core**: Fundamental data types (BlockId, BlockState, VoxelPos, Direction)
//! - **Blocks**: Block properties and behaviors (campfire)
//! - **Interfaces**: Narrow collaborator traits behaviors read the host through
//! - **Grid**: `GridWorld` and world_operations, a minimal in-memory host
//!
//! # Design Principles
//!
//! 1. **DOP architecture**: data in `*_data` modules, free functions in `*_operations`
//! 2. **Pure behaviors**: handlers return transitions and effects, never mutate the grid

pub mod blocks;
pub mod core;
pub mod data_types;
pub mod error;
pub mod interfaces;
pub mod world_operations;

// Re-export core types for convenience
pub use core::{
    BlockId, BlockRegistry, BlockState, BlockTag, Direction, HorizontalFacing, ItemId, ItemStack,
    Mirror, Rotation, VoxelPos,
};

pub use data_types::{ActorProfile, GridWorld, WorldModification, WorldStats};
pub use error::{WorldError, WorldResult};

pub use interfaces::{
    ActorQuery, BlockView, CookingStation, EntityId, FluidKind, Interactor, LogicalSide,
    PlacementContext, Projectile, ProjectileOwner, WorldRules,
};

// Re-export DOP world operations as the primary API
pub use world_operations::{
    advance_tick, apply_transition, campfire_state_at, commit_campfire_state, create_grid_world,
    create_grid_world_with, get_block, get_fluid, insert_actor, log_world_stats, place_campfire,
    set_block, set_blocks_batch, set_fluid, validate_world_data, world_stats,
};

// Re-export block system
pub use blocks::register_basic_blocks;
