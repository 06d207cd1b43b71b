//! Campfire block behavior
//!
//! A campfire cell is described by `CampfireState`. Every handler is a pure
//! function from (state, event, read-only context) to a `CampfireTransition`
//! or a list of `CampfireEffect`s; committing state and running effects is
//! left to the host.

pub mod campfire_data;
pub mod cooking_data;
pub mod cooking_operations;
pub mod effects_data;
pub mod fire_spread;
pub mod interaction_operations;
pub mod signal_operations;
pub mod tick_operations;

pub use campfire_data::{
    campfire_shape, default_campfire_state, virtual_fence_post, CampfireBlockData, CampfireState,
    CampfireTransition, FluidContactOutcome, InteractionOutcome, InteractionResult,
    DEFAULT_WATER_TICK_DELAY, DOWSE_SMOKE_PUFFS, SIGNAL_SCAN_DEPTH,
};
pub use cooking_data::{CampfireRecipe, CookingSlot, CookingSlots, RecipeBook, COOKING_SLOT_COUNT};
pub use cooking_operations::{
    add_recipe, apply_cooking_effect, clear_sessions, create_cooking_slots, drain_contents,
    tick_cooking,
};
pub use effects_data::{CampfireEffect, DamageCause, GameEventKind, ParticleKind, SoundKind, Stat};
pub use fire_spread::{FireSpread, ManhattanFireSpread};
pub use interaction_operations::{
    dowse, fluid_state, is_pathfindable, mirror, on_entity_overlap, on_fluid_contact,
    on_interact, on_neighbor_update, on_placement, on_projectile_hit, on_removed, rotate,
};
pub use signal_operations::{
    can_ignite, is_lit_campfire, is_signaling_campfire, is_smoke_source, is_smokey_column,
};
pub use tick_operations::{
    animation_tick, make_smoke_particles, random_tick, AmbientParticles, LitAmbience,
};
