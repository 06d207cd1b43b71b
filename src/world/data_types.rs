//! World Data Types - Pure DOP Structures
//!
//! These are the data structures that world_operations functions operate on.
//! NO METHODS - just pure data, plus the collaborator trait impls that let
//! campfire operations read it.

use super::core::{BlockRegistry, BlockState, VoxelPos};
use super::interfaces::{ActorQuery, BlockView, EntityId, FluidKind, WorldRules};
use std::collections::HashMap;

/// Sparse block grid - a minimal host for block behaviors.
///
/// Cells missing from `blocks` are air; cells missing from `fluids` are dry.
#[derive(Debug, Clone, Default)]
pub struct GridWorld {
    pub registry: BlockRegistry,

    pub blocks: HashMap<VoxelPos, BlockState>,

    pub fluids: HashMap<VoxelPos, FluidKind>,

    /// Actors known to the grid, keyed by entity id
    pub actors: HashMap<EntityId, ActorProfile>,

    /// World rule: non-player entities may grief blocks
    pub mob_griefing: bool,

    /// World rule: campfires may spread fire
    pub very_hard_fire_spread: bool,

    /// World tick counter
    pub tick: u64,
}

/// Classification of one actor, as seen by fire damage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActorProfile {
    pub living: bool,
    pub fire_immune: bool,
    pub frost_protected: bool,
}

/// Block change record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorldModification {
    pub position: VoxelPos,
    pub old_state: BlockState,
    pub new_state: BlockState,
    pub timestamp: u64,
}

/// Grid statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorldStats {
    pub non_air_blocks: usize,
    pub fluid_cells: usize,
    pub actors: usize,
}

impl BlockView for GridWorld {
    fn registry(&self) -> &BlockRegistry {
        &self.registry
    }

    fn block_state(&self, pos: VoxelPos) -> BlockState {
        self.blocks.get(&pos).copied().unwrap_or(BlockState::AIR)
    }

    fn fluid_at(&self, pos: VoxelPos) -> FluidKind {
        self.fluids.get(&pos).copied().unwrap_or_default()
    }
}

impl WorldRules for GridWorld {
    fn mob_griefing(&self) -> bool {
        self.mob_griefing
    }

    fn very_hard_fire_spread(&self) -> bool {
        self.very_hard_fire_spread
    }
}

// Unknown actors are treated as non-living, so they take no damage
impl ActorQuery for GridWorld {
    fn is_living(&self, entity: EntityId) -> bool {
        self.actors.get(&entity).map_or(false, |a| a.living)
    }

    fn has_fire_immunity(&self, entity: EntityId) -> bool {
        self.actors.get(&entity).map_or(false, |a| a.fire_immune)
    }

    fn has_frost_protection(&self, entity: EntityId) -> bool {
        self.actors.get(&entity).map_or(false, |a| a.frost_protected)
    }
}
