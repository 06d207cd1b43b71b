//! Campfire Tick Operations
//!
//! Per-frame animation ticks and sparse random ticks. Every roll goes
//! through the caller's `RandomSource`, so a fixed sequence reproduces
//! the same effects.

use super::campfire_data::{CampfireBlockData, CampfireState};
use super::effects_data::{CampfireEffect, ParticleKind, SoundKind};
use crate::random::{random_sign, RandomSource};
use crate::world::core::VoxelPos;
use crate::world::interfaces::{BlockView, WorldRules};
use cgmath::{Point3, Vector3};
use std::fmt;

/// Chance denominator for the crackle sound per animation tick
pub const CRACKLE_ONE_IN: u32 = 10;

/// Chance denominator for an ember per animation tick
pub const EMBER_ONE_IN: u32 = 5;

/// Capability of campfire variants that react visually while lit
pub trait LitAmbience: Send + Sync + fmt::Debug {
    fn ambient_effects(
        &self,
        pos: VoxelPos,
        state: &CampfireState,
        rng: &mut dyn RandomSource,
        effects: &mut Vec<CampfireEffect>,
    );
}

/// Emits a named particle at the fire's center with probability `1/one_in`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmbientParticles {
    pub particle: ParticleKind,
    pub one_in: u32,
}

impl LitAmbience for AmbientParticles {
    fn ambient_effects(
        &self,
        pos: VoxelPos,
        _state: &CampfireState,
        rng: &mut dyn RandomSource,
        effects: &mut Vec<CampfireEffect>,
    ) {
        if rng.next_int(self.one_in.max(1)) == 0 {
            effects.push(CampfireEffect::SpawnParticle {
                particle: self.particle.clone(),
                pos: pos.center(),
                velocity: Vector3::new(0.0, 0.02, 0.0),
                always_visible: false,
            });
        }
    }
}

/// Client animation tick. Does nothing for an unlit campfire.
pub fn animation_tick(
    block: &CampfireBlockData,
    state: &CampfireState,
    pos: VoxelPos,
    rng: &mut dyn RandomSource,
) -> Vec<CampfireEffect> {
    let mut effects = Vec::new();
    if !state.lit {
        return effects;
    }

    for ambience in &block.ambience {
        ambience.ambient_effects(pos, state, rng, &mut effects);
    }

    if rng.next_int(CRACKLE_ONE_IN) == 0 {
        let volume = 0.5 + rng.next_float();
        let pitch = rng.next_float() * 0.7 + 0.6;
        log::trace!("Campfire at {} crackles (volume {:.2}, pitch {:.2})", pos, volume, pitch);
        effects.push(CampfireEffect::PlaySound {
            sound: SoundKind::CampfireCrackle,
            pos: pos.center(),
            volume,
            pitch,
            local: true,
        });
    }

    if block.spawn_particles && rng.next_int(EMBER_ONE_IN) == 0 {
        let vx = rng.next_float() / 2.0;
        let vz = rng.next_float() / 2.0;
        effects.push(CampfireEffect::SpawnParticle {
            particle: ParticleKind::Lava,
            pos: pos.center(),
            velocity: Vector3::new(vx, 5.0e-5, vz),
            always_visible: false,
        });
    }

    effects
}

/// Server random tick. Runs the variant's fire spread plugin, if any,
/// whether or not the campfire is lit.
pub fn random_tick(
    block: &CampfireBlockData,
    _state: &CampfireState,
    pos: VoxelPos,
    view: &dyn BlockView,
    rules: &dyn WorldRules,
    rng: &mut dyn RandomSource,
) -> Vec<CampfireEffect> {
    let mut effects = Vec::new();
    if let Some(spread) = &block.fire_spread {
        spread.spread(pos, view, rules, rng, &mut effects);
    }
    effects
}

/// Push one puff of campfire smoke, plus a low smoke wisp if `extra_smoke`
pub fn make_smoke_particles(
    pos: VoxelPos,
    signal_fire: bool,
    extra_smoke: bool,
    rng: &mut dyn RandomSource,
    effects: &mut Vec<CampfireEffect>,
) {
    let particle = if signal_fire {
        ParticleKind::CampfireSignalSmoke
    } else {
        ParticleKind::CampfireCosySmoke
    };
    let corner = pos.corner();

    let x = corner.x + 0.5 + rng.next_double() as f32 / 3.0 * random_sign(rng);
    let y = corner.y + rng.next_double() as f32 + rng.next_double() as f32;
    let z = corner.z + 0.5 + rng.next_double() as f32 / 3.0 * random_sign(rng);
    effects.push(CampfireEffect::SpawnParticle {
        particle,
        pos: Point3::new(x, y, z),
        velocity: Vector3::new(0.0, 0.07, 0.0),
        always_visible: true,
    });

    if extra_smoke {
        let x = corner.x + 0.25 + rng.next_double() as f32 / 2.0 * random_sign(rng);
        let z = corner.z + 0.25 + rng.next_double() as f32 / 2.0 * random_sign(rng);
        effects.push(CampfireEffect::SpawnParticle {
            particle: ParticleKind::Smoke,
            pos: Point3::new(x, corner.y + 0.4, z),
            velocity: Vector3::new(0.0, 0.005, 0.0),
            always_visible: false,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::testing::ScriptedRandom;
    use crate::world::core::BlockId;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::Arc;

    fn lit() -> CampfireState {
        CampfireState {
            lit: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_unlit_campfire_is_silent() {
        let block = CampfireBlockData::new(BlockId::CAMPFIRE, true, 1.0);
        let effects = animation_tick(
            &block,
            &CampfireState::default(),
            VoxelPos::default(),
            &mut ScriptedRandom::always(),
        );
        assert!(effects.is_empty());
    }

    #[test]
    fn test_lucky_rolls_crackle_and_ember() {
        let block = CampfireBlockData::new(BlockId::CAMPFIRE, true, 1.0);
        let effects = animation_tick(
            &block,
            &lit(),
            VoxelPos::new(1, 2, 3),
            &mut ScriptedRandom::always(),
        );

        assert_eq!(effects.len(), 2);
        match &effects[0] {
            CampfireEffect::PlaySound { sound, volume, pitch, local, .. } => {
                assert_eq!(*sound, SoundKind::CampfireCrackle);
                assert!((*volume - 0.5).abs() < f32::EPSILON);
                assert!((*pitch - 0.6).abs() < f32::EPSILON);
                assert!(*local);
            }
            other => panic!("expected crackle, got {:?}", other),
        }
        assert!(matches!(
            &effects[1],
            CampfireEffect::SpawnParticle { particle: ParticleKind::Lava, .. }
        ));
    }

    #[test]
    fn test_no_embers_without_spawn_particles() {
        let block = CampfireBlockData::new(BlockId::SOUL_CAMPFIRE, false, 2.0);
        let effects = animation_tick(
            &block,
            &lit(),
            VoxelPos::default(),
            &mut ScriptedRandom::always(),
        );
        assert!(effects
            .iter()
            .all(|e| matches!(e, CampfireEffect::PlaySound { .. })));
    }

    #[test]
    fn test_unlucky_rolls_emit_nothing() {
        let block = CampfireBlockData::new(BlockId::CAMPFIRE, true, 1.0);
        let effects = animation_tick(
            &block,
            &lit(),
            VoxelPos::default(),
            &mut ScriptedRandom::never(),
        );
        assert!(effects.is_empty());
    }

    #[test]
    fn test_crackle_ranges_over_many_ticks() {
        let block = CampfireBlockData::new(BlockId::CAMPFIRE, true, 1.0);
        let mut rng = StdRng::seed_from_u64(1234);
        let mut crackles = 0;
        for _ in 0..2000 {
            for effect in animation_tick(&block, &lit(), VoxelPos::default(), &mut rng) {
                match effect {
                    CampfireEffect::PlaySound { volume, pitch, .. } => {
                        crackles += 1;
                        assert!((0.5..1.5).contains(&volume));
                        assert!((0.6..1.3).contains(&pitch));
                    }
                    CampfireEffect::SpawnParticle { velocity, .. } => {
                        assert!((0.0..0.5).contains(&velocity.x));
                        assert!((0.0..0.5).contains(&velocity.z));
                    }
                    other => panic!("unexpected effect {:?}", other),
                }
            }
        }
        assert!(crackles > 0);
    }

    #[test]
    fn test_ambience_runs_every_lit_tick() {
        let soul = AmbientParticles {
            particle: ParticleKind::Named("soul".to_string()),
            one_in: 1,
        };
        let block = CampfireBlockData::new(BlockId::SOUL_CAMPFIRE, false, 2.0)
            .with_ambience(Arc::new(soul));
        let effects = animation_tick(
            &block,
            &lit(),
            VoxelPos::default(),
            &mut ScriptedRandom::never(),
        );
        assert_eq!(
            effects,
            vec![CampfireEffect::SpawnParticle {
                particle: ParticleKind::Named("soul".to_string()),
                pos: VoxelPos::default().center(),
                velocity: Vector3::new(0.0, 0.02, 0.0),
                always_visible: false,
            }]
        );
    }

    #[test]
    fn test_smoke_particles_signal_variant() {
        let mut effects = Vec::new();
        make_smoke_particles(
            VoxelPos::default(),
            true,
            true,
            &mut ScriptedRandom::always(),
            &mut effects,
        );
        assert_eq!(effects.len(), 2);
        match &effects[0] {
            CampfireEffect::SpawnParticle { particle, pos, always_visible, .. } => {
                assert_eq!(*particle, ParticleKind::CampfireSignalSmoke);
                assert!(*always_visible);
                assert!((pos.x - 0.5).abs() < f32::EPSILON);
            }
            other => panic!("expected smoke, got {:?}", other),
        }
        assert!(matches!(
            &effects[1],
            CampfireEffect::SpawnParticle { particle: ParticleKind::Smoke, .. }
        ));
    }

    #[test]
    fn test_random_tick_without_plugin_is_inert() {
        let block = CampfireBlockData::new(BlockId::CAMPFIRE, true, 1.0);
        let mut world = crate::world::world_operations::create_grid_world();
        world.very_hard_fire_spread = true;
        let effects = random_tick(
            &block,
            &lit(),
            VoxelPos::default(),
            &world,
            &world,
            &mut ScriptedRandom::always(),
        );
        assert!(effects.is_empty());
    }
}
