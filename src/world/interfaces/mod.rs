//! Collaborator interfaces for block behaviors
//!
//! Campfire operations never own world storage, inventories or actors. They
//! read the host through these narrow traits and snapshots, and hand every
//! fire-and-forget side effect back as data.

use crate::physics::AABB;
use crate::world::core::{BlockRegistry, BlockState, HorizontalFacing, ItemStack, VoxelPos};
use serde::{Deserialize, Serialize};

/// Host-side identifier for an actor (player, mob, item entity...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// Which half of the simulation is running the handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalSide {
    /// Presentation context: particles and local sounds are meaningful
    Client,
    /// Authoritative simulation: state changes, damage and inventories
    Server,
}

impl LogicalSide {
    pub fn is_client(&self) -> bool {
        matches!(self, LogicalSide::Client)
    }
}

/// Fluid occupying a cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FluidKind {
    #[default]
    Empty,
    Water,
    Lava,
}

/// Read-only view of the grid around a block
pub trait BlockView {
    fn registry(&self) -> &BlockRegistry;

    fn block_state(&self, pos: VoxelPos) -> BlockState;

    fn fluid_at(&self, pos: VoxelPos) -> FluidKind;

    /// Collision boxes of the block at `pos`, in cell-local coordinates
    fn collision_shape(&self, pos: VoxelPos) -> &[AABB] {
        let block = self.block_state(pos).block;
        self.registry().collision_shape(block)
    }
}

/// Cooking container attached to a campfire cell
pub trait CookingStation {
    /// Cooking duration in ticks if `stack` is a recognised cookable input
    fn lookup_recipe(&self, stack: &ItemStack) -> Option<u32>;

    /// Start cooking one unit. Returns false when no slot is free.
    fn begin_session(&mut self, actor: EntityId, stack: ItemStack, duration: u32) -> bool;
}

/// Actor classification queries used for fire damage
pub trait ActorQuery {
    fn is_living(&self, entity: EntityId) -> bool;

    fn has_fire_immunity(&self, entity: EntityId) -> bool;

    fn has_frost_protection(&self, entity: EntityId) -> bool;
}

/// Global world rules
pub trait WorldRules {
    /// Entities other than players may cause destructive block changes
    fn mob_griefing(&self) -> bool;

    /// Campfires may set nearby flammable blocks alight
    fn very_hard_fire_spread(&self) -> bool {
        false
    }
}

/// Actor using a campfire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interactor {
    pub id: EntityId,
    /// Creative-style infinite supply: held items are copied, not consumed
    pub infinite_supply: bool,
}

/// Who fired a projectile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileOwner {
    Player(EntityId),
    Entity(EntityId),
}

/// Projectile snapshot at the moment it hits a block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projectile {
    pub on_fire: bool,
    pub owner: Option<ProjectileOwner>,
}

/// Where and how a block is being placed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementContext {
    pub pos: VoxelPos,
    /// Horizontal direction the placer is looking towards
    pub horizontal_facing: HorizontalFacing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logical_side() {
        assert!(LogicalSide::Client.is_client());
        assert!(!LogicalSide::Server.is_client());
    }

    #[test]
    fn test_fluid_default_is_empty() {
        assert_eq!(FluidKind::default(), FluidKind::Empty);
    }
}
