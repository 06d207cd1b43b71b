//! World Operations - Pure DOP Functions
//!
//! This is the PUBLIC API for grid manipulation.
//! Campfire handlers never write to the grid themselves; the host commits
//! their transitions through the functions here.

use super::blocks::campfire::{
    on_placement, CampfireEffect, CampfireState, CampfireTransition,
};
use super::blocks::register_basic_blocks;
use super::core::{BlockId, BlockRegistry, BlockState, BlockTag, VoxelPos};
use super::data_types::{ActorProfile, GridWorld, WorldModification, WorldStats};
use super::error::{WorldError, WorldResult};
use super::interfaces::{BlockView, EntityId, FluidKind, PlacementContext};

// ============================================================================
// CREATION
// ============================================================================

/// Create an empty grid over `registry`
pub fn create_grid_world_with(registry: BlockRegistry) -> GridWorld {
    GridWorld {
        registry,
        ..Default::default()
    }
}

/// Create an empty grid with the stock blocks registered
pub fn create_grid_world() -> GridWorld {
    let mut registry = BlockRegistry::new();
    register_basic_blocks(&mut registry);
    create_grid_world_with(registry)
}

// ============================================================================
// BLOCK OPERATIONS
// ============================================================================

/// Get block state at position, AIR if nothing is stored there
pub fn get_block(world: &GridWorld, pos: VoxelPos) -> BlockState {
    world.block_state(pos)
}

/// Set block state at position
///
/// Storing air removes the cell.
pub fn set_block(world: &mut GridWorld, pos: VoxelPos, state: BlockState) -> WorldModification {
    let old_state = if state.is_air() {
        world.blocks.remove(&pos)
    } else {
        world.blocks.insert(pos, state)
    }
    .unwrap_or(BlockState::AIR);

    WorldModification {
        position: pos,
        old_state,
        new_state: state,
        timestamp: world.tick,
    }
}

/// Set multiple blocks at once
pub fn set_blocks_batch(
    world: &mut GridWorld,
    blocks: &[(VoxelPos, BlockState)],
) -> Vec<WorldModification> {
    blocks
        .iter()
        .map(|(pos, state)| set_block(world, *pos, *state))
        .collect()
}

pub fn get_fluid(world: &GridWorld, pos: VoxelPos) -> FluidKind {
    world.fluid_at(pos)
}

/// Set the fluid in a cell. `FluidKind::Empty` drains it.
pub fn set_fluid(world: &mut GridWorld, pos: VoxelPos, fluid: FluidKind) {
    if fluid == FluidKind::Empty {
        world.fluids.remove(&pos);
    } else {
        world.fluids.insert(pos, fluid);
    }
}

pub fn insert_actor(world: &mut GridWorld, entity: EntityId, profile: ActorProfile) {
    world.actors.insert(entity, profile);
}

/// Advance the world tick counter
pub fn advance_tick(world: &mut GridWorld) -> u64 {
    world.tick += 1;
    world.tick
}

// ============================================================================
// CAMPFIRE CELLS
// ============================================================================

/// Read the campfire state stored at `pos`
pub fn campfire_state_at(world: &GridWorld, pos: VoxelPos) -> WorldResult<CampfireState> {
    let state = world.block_state(pos);
    if !world.registry.has_tag(state.block, BlockTag::Campfires) {
        return Err(WorldError::NotACampfire { pos });
    }
    CampfireState::from_block_state(&state).ok_or(WorldError::NotACampfire { pos })
}

/// Store a campfire state at `pos`, keeping the cell's water in step with
/// the waterlogged flag.
pub fn commit_campfire_state(
    world: &mut GridWorld,
    pos: VoxelPos,
    state: CampfireState,
) -> WorldResult<WorldModification> {
    if state.lit && state.waterlogged {
        return Err(WorldError::LitWhileWaterlogged { pos });
    }

    let block = world.block_state(pos).block;
    if !world.registry.has_tag(block, BlockTag::Campfires) {
        return Err(WorldError::NotACampfire { pos });
    }

    let fluid = if state.waterlogged {
        FluidKind::Water
    } else {
        FluidKind::Empty
    };
    set_fluid(world, pos, fluid);
    Ok(set_block(world, pos, state.to_block_state(block)))
}

/// Place a campfire block of kind `block` at `context.pos`
pub fn place_campfire(
    world: &mut GridWorld,
    block: BlockId,
    context: &PlacementContext,
) -> WorldResult<CampfireState> {
    if !world.registry.is_registered(block) {
        return Err(WorldError::UnknownBlock(block));
    }
    if !world.registry.has_tag(block, BlockTag::Campfires) {
        return Err(WorldError::NotACampfire { pos: context.pos });
    }

    let state = on_placement(world, context);
    set_block(world, context.pos, state.to_block_state(block));
    commit_campfire_state(world, context.pos, state)?;
    log::debug!("Placed campfire {} at {}", block, context.pos);
    Ok(state)
}

/// Commit a transition's state, then hand back its effects for the host to run
pub fn apply_transition(
    world: &mut GridWorld,
    pos: VoxelPos,
    transition: CampfireTransition,
) -> WorldResult<Vec<CampfireEffect>> {
    commit_campfire_state(world, pos, transition.state)?;
    Ok(transition.effects)
}

// ============================================================================
// DIAGNOSTICS
// ============================================================================

pub fn world_stats(world: &GridWorld) -> WorldStats {
    WorldStats {
        non_air_blocks: world.blocks.values().filter(|s| !s.is_air()).count(),
        fluid_cells: world.fluids.len(),
        actors: world.actors.len(),
    }
}

/// Log grid statistics
pub fn log_world_stats(world: &GridWorld) {
    let stats = world_stats(world);
    log::info!("[World] Statistics:");
    log::info!("  Tick: {}", world.tick);
    log::info!("  Non-air blocks: {}", stats.non_air_blocks);
    log::info!("  Fluid cells: {}", stats.fluid_cells);
    log::info!("  Actors: {}", stats.actors);
}

/// Check that no stored campfire is lit while waterlogged
pub fn validate_world_data(world: &GridWorld) -> WorldResult<()> {
    for (pos, state) in &world.blocks {
        if !world.registry.is_registered(state.block) {
            return Err(WorldError::UnknownBlock(state.block));
        }
        if state.lit == Some(true) && state.waterlogged == Some(true) {
            return Err(WorldError::LitWhileWaterlogged { pos: *pos });
        }
    }
    Ok(())
}
