//! Campfire Effects - Pure DOP
//!
//! Side effects returned by campfire operations. The host commits the new
//! state first, then executes these in order. NO METHODS beyond naming helpers.

use crate::world::core::VoxelPos;
use crate::world::interfaces::{EntityId, FluidKind};
use cgmath::{Point3, Vector3};

/// Sounds a campfire can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundKind {
    CampfireCrackle,
    ExtinguishFire,
}

/// Particles a campfire can request
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParticleKind {
    /// Ember popping out of the fire
    Lava,
    CampfireCosySmoke,
    CampfireSignalSmoke,
    Smoke,
    /// Variant-specific particle registered by the host
    Named(String),
}

impl ParticleKind {
    /// Resolve a configured particle name
    pub fn from_name(name: &str) -> ParticleKind {
        match name {
            "lava" => ParticleKind::Lava,
            "campfire_cosy_smoke" => ParticleKind::CampfireCosySmoke,
            "campfire_signal_smoke" => ParticleKind::CampfireSignalSmoke,
            "smoke" => ParticleKind::Smoke,
            other => ParticleKind::Named(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DamageCause {
    InFire,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stat {
    InteractWithCampfire,
}

/// Notifications broadcast to listeners of world changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEventKind {
    BlockChange,
}

/// A side effect requested by a campfire operation
#[derive(Debug, Clone, PartialEq)]
pub enum CampfireEffect {
    PlaySound {
        sound: SoundKind,
        pos: Point3<f32>,
        volume: f32,
        pitch: f32,
        /// Heard only by the local client, not broadcast
        local: bool,
    },
    SpawnParticle {
        particle: ParticleKind,
        pos: Point3<f32>,
        velocity: Vector3<f32>,
        always_visible: bool,
    },
    Damage {
        entity: EntityId,
        amount: f32,
        cause: DamageCause,
    },
    AwardStat {
        entity: EntityId,
        stat: Stat,
    },
    ScheduleFluidTick {
        pos: VoxelPos,
        fluid: FluidKind,
        delay: u32,
    },
    /// Drop every stored cooking item at the cell
    DropContents { pos: VoxelPos },
    /// Cancel active cooking sessions at the cell
    ClearCookingSessions { pos: VoxelPos },
    GameEvent {
        event: GameEventKind,
        pos: VoxelPos,
        cause: Option<EntityId>,
    },
    /// Set a fire block at an empty cell
    PlaceFire { pos: VoxelPos },
}
