//! Campfire Cooking Data - Pure DOP
//!
//! In-memory cooking container for hosts without their own tile storage.
//! NO METHODS - see cooking_operations.rs.

use crate::world::core::{ItemId, ItemStack};
use crate::world::interfaces::EntityId;
use std::collections::HashMap;

/// Items a campfire cooks at once
pub const COOKING_SLOT_COUNT: usize = 4;

/// Progress lost per tick by an item resting on an unlit campfire
pub const COOLDOWN_PER_TICK: u32 = 2;

/// Cooking recipe for one input item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CampfireRecipe {
    pub output: ItemId,
    pub cook_time: u32,
}

/// Recipes keyed by input item
#[derive(Debug, Clone, Default)]
pub struct RecipeBook {
    pub recipes: HashMap<ItemId, CampfireRecipe>,
}

/// One item cooking on the fire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CookingSlot {
    pub item: ItemStack,
    pub elapsed: u32,
    pub required: u32,
    pub cooked_by: EntityId,
}

/// Cooking container attached to one campfire cell
#[derive(Debug, Clone, Default)]
pub struct CookingSlots {
    pub slots: [Option<CookingSlot>; COOKING_SLOT_COUNT],
    pub recipes: RecipeBook,
}
