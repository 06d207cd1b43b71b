//! Campfire Data - Pure DOP
//!
//! State descriptor, variant data and transition results.
//! All transformations happen in the *_operations modules.

use super::effects_data::CampfireEffect;
use super::fire_spread::FireSpread;
use super::tick_operations::LitAmbience;
use crate::physics::{aabb_from_pixels, AABB};
use crate::world::core::{BlockId, BlockState, HorizontalFacing};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Puffs of smoke emitted when a campfire is dowsed on the client
pub const DOWSE_SMOKE_PUFFS: usize = 20;

/// Cells scanned below a position when looking for signal smoke
pub const SIGNAL_SCAN_DEPTH: i32 = 5;

/// Ticks between a water update request and the fluid tick
pub const DEFAULT_WATER_TICK_DELAY: u32 = 5;

/// Collision and outline shape of every campfire variant
pub fn campfire_shape() -> AABB {
    aabb_from_pixels(0.0, 0.0, 0.0, 16.0, 7.0, 16.0)
}

/// Narrow vertical prism used to decide whether a block lets smoke through
pub fn virtual_fence_post() -> AABB {
    aabb_from_pixels(6.0, 0.0, 6.0, 10.0, 16.0, 10.0)
}

/// Configuration of a single campfire cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CampfireState {
    pub lit: bool,
    pub signal_fire: bool,
    pub waterlogged: bool,
    pub facing: HorizontalFacing,
}

impl CampfireState {
    /// Read the campfire properties of a block state.
    ///
    /// Returns None if any campfire property is missing.
    pub fn from_block_state(state: &BlockState) -> Option<CampfireState> {
        Some(CampfireState {
            lit: state.lit?,
            signal_fire: state.signal_fire?,
            waterlogged: state.waterlogged?,
            facing: state.facing?,
        })
    }

    pub fn to_block_state(&self, block: BlockId) -> BlockState {
        BlockState {
            block,
            lit: Some(self.lit),
            signal_fire: Some(self.signal_fire),
            waterlogged: Some(self.waterlogged),
            facing: Some(self.facing),
        }
    }
}

/// State a campfire takes when it appears without placement context
pub fn default_campfire_state(block: BlockId) -> BlockState {
    CampfireState {
        lit: true,
        signal_fire: false,
        waterlogged: false,
        facing: HorizontalFacing::North,
    }
    .to_block_state(block)
}

/// Per-variant campfire behavior data, shared by every cell of that variant
#[derive(Debug, Clone)]
pub struct CampfireBlockData {
    pub id: BlockId,
    /// Emit embers while lit
    pub spawn_particles: bool,
    /// Damage dealt per tick to actors standing in a lit campfire
    pub fire_damage: f32,
    pub water_tick_delay: u32,
    /// Variant-specific effects invoked every animation tick while lit
    pub ambience: Vec<Arc<dyn LitAmbience>>,
    /// Optional neighbour ignition invoked from random ticks
    pub fire_spread: Option<Arc<dyn FireSpread>>,
}

impl CampfireBlockData {
    pub fn new(id: BlockId, spawn_particles: bool, fire_damage: f32) -> Self {
        Self {
            id,
            spawn_particles,
            fire_damage,
            water_tick_delay: DEFAULT_WATER_TICK_DELAY,
            ambience: Vec::new(),
            fire_spread: None,
        }
    }

    pub fn with_ambience(mut self, ambience: Arc<dyn LitAmbience>) -> Self {
        self.ambience.push(ambience);
        self
    }

    pub fn with_fire_spread(mut self, spread: Arc<dyn FireSpread>) -> Self {
        self.fire_spread = Some(spread);
        self
    }
}

/// Next state plus the side effects the host must run after committing it
#[derive(Debug, Clone, PartialEq)]
pub struct CampfireTransition {
    pub state: CampfireState,
    pub effects: Vec<CampfireEffect>,
}

impl CampfireTransition {
    /// Build a transition, resolving `lit && waterlogged` to an unlit, waterlogged state
    pub fn new(mut state: CampfireState, effects: Vec<CampfireEffect>) -> Self {
        if state.lit && state.waterlogged {
            log::debug!("Resolving lit waterlogged campfire state to unlit");
            state.lit = false;
        }
        Self { state, effects }
    }

    pub fn unchanged(state: CampfireState) -> Self {
        Self::new(state, Vec::new())
    }
}

/// Outcome of using a campfire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionResult {
    /// Not handled; the caller may fall through to default item use
    Pass,
    /// Handled without placing anything
    Consume,
    /// Food placed on the fire
    Success,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InteractionOutcome {
    pub result: InteractionResult,
    pub effects: Vec<CampfireEffect>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FluidContactOutcome {
    pub accepted: bool,
    pub transition: CampfireTransition,
}
