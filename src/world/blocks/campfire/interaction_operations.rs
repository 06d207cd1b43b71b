//! Campfire Interaction Operations - Pure DOP Functions
//!
//! Event handlers the host dispatches to a campfire cell. Each takes the
//! current state and read-only context and returns the next state plus the
//! effects to run after committing it. The only inline mutations are the
//! cooking station's `begin_session` and the interactor's held stack.

use super::campfire_data::{
    CampfireBlockData, CampfireState, CampfireTransition, FluidContactOutcome,
    InteractionOutcome, InteractionResult, DOWSE_SMOKE_PUFFS,
};
use super::effects_data::{CampfireEffect, DamageCause, GameEventKind, SoundKind, Stat};
use super::signal_operations::is_smoke_source;
use super::tick_operations::make_smoke_particles;
use crate::random::RandomSource;
use crate::world::core::{
    BlockRegistry, BlockState, Direction, ItemStack, Mirror, Rotation, VoxelPos,
};
use crate::world::interfaces::{
    ActorQuery, BlockView, CookingStation, EntityId, FluidKind, Interactor, LogicalSide,
    PlacementContext, Projectile, ProjectileOwner, WorldRules,
};

// ============================================================================
// USE / OVERLAP / REMOVAL
// ============================================================================

/// Use a held item on the campfire.
///
/// Cookable items are placed on the fire by the server; the client only
/// reports that the use was consumed. Non-cookable items pass through.
pub fn on_interact(
    pos: VoxelPos,
    side: LogicalSide,
    actor: Interactor,
    held: &mut ItemStack,
    _hit_face: Direction,
    cooking: &mut dyn CookingStation,
) -> InteractionOutcome {
    let recipe = if held.is_empty() {
        None
    } else {
        cooking.lookup_recipe(held)
    };
    let Some(duration) = recipe else {
        return InteractionOutcome {
            result: InteractionResult::Pass,
            effects: Vec::new(),
        };
    };

    if !side.is_client() && cooking.begin_session(actor.id, held.single(), duration) {
        if !actor.infinite_supply {
            held.shrink(1);
        }
        log::debug!(
            "Entity {:?} placed food on campfire at {} ({} ticks)",
            actor.id,
            pos,
            duration
        );
        return InteractionOutcome {
            result: InteractionResult::Success,
            effects: vec![CampfireEffect::AwardStat {
                entity: actor.id,
                stat: Stat::InteractWithCampfire,
            }],
        };
    }

    InteractionOutcome {
        result: InteractionResult::Consume,
        effects: Vec::new(),
    }
}

/// An entity occupies the campfire's cell this tick
pub fn on_entity_overlap(
    block: &CampfireBlockData,
    state: &CampfireState,
    entity: EntityId,
    actors: &dyn ActorQuery,
) -> Vec<CampfireEffect> {
    if state.lit
        && !actors.has_fire_immunity(entity)
        && actors.is_living(entity)
        && !actors.has_frost_protection(entity)
    {
        return vec![CampfireEffect::Damage {
            entity,
            amount: block.fire_damage,
            cause: DamageCause::InFire,
        }];
    }
    Vec::new()
}

/// The cell's block is being replaced by `new_state`
pub fn on_removed(
    pos: VoxelPos,
    old_state: &BlockState,
    new_state: &BlockState,
) -> Vec<CampfireEffect> {
    if old_state.block == new_state.block {
        return Vec::new();
    }
    log::debug!(
        "Campfire at {} replaced by {}, dropping contents",
        pos,
        new_state.block
    );
    vec![CampfireEffect::DropContents { pos }]
}

// ============================================================================
// PLACEMENT / NEIGHBOURS
// ============================================================================

/// Initial state for a campfire placed at `context.pos`
pub fn on_placement(view: &dyn BlockView, context: &PlacementContext) -> CampfireState {
    let waterlogged = view.fluid_at(context.pos) == FluidKind::Water;
    let below = view.block_state(context.pos.below(1));
    CampfireState {
        lit: !waterlogged,
        signal_fire: is_smoke_source(view.registry(), &below),
        waterlogged,
        facing: context.horizontal_facing,
    }
}

/// A neighbouring block changed
pub fn on_neighbor_update(
    block: &CampfireBlockData,
    state: &CampfireState,
    pos: VoxelPos,
    direction: Direction,
    neighbor: &BlockState,
    registry: &BlockRegistry,
) -> CampfireTransition {
    let mut effects = Vec::new();
    if state.waterlogged {
        effects.push(CampfireEffect::ScheduleFluidTick {
            pos,
            fluid: FluidKind::Water,
            delay: block.water_tick_delay,
        });
    }

    let mut next = *state;
    if direction == Direction::Down {
        next.signal_fire = is_smoke_source(registry, neighbor);
    }
    CampfireTransition::new(next, effects)
}

// ============================================================================
// EXTINGUISHING / IGNITION
// ============================================================================

/// Extinguish the campfire.
///
/// Not guarded: dowsing an unlit campfire repeats every effect, including
/// clearing the cooking sessions.
pub fn dowse(
    state: &CampfireState,
    pos: VoxelPos,
    cause: Option<EntityId>,
    side: LogicalSide,
    rng: &mut dyn RandomSource,
) -> CampfireTransition {
    let mut effects = Vec::new();
    if side.is_client() {
        for _ in 0..DOWSE_SMOKE_PUFFS {
            make_smoke_particles(pos, state.signal_fire, true, rng, &mut effects);
        }
    }
    effects.push(CampfireEffect::ClearCookingSessions { pos });
    effects.push(CampfireEffect::GameEvent {
        event: GameEventKind::BlockChange,
        pos,
        cause,
    });

    log::debug!("Campfire at {} dowsed (was lit: {})", pos, state.lit);
    let next = CampfireState {
        lit: false,
        ..*state
    };
    CampfireTransition::new(next, effects)
}

/// A fluid tries to flow into the campfire's cell
pub fn on_fluid_contact(
    block: &CampfireBlockData,
    state: &CampfireState,
    pos: VoxelPos,
    fluid: FluidKind,
    side: LogicalSide,
    rng: &mut dyn RandomSource,
) -> FluidContactOutcome {
    if state.waterlogged || fluid != FluidKind::Water {
        return FluidContactOutcome {
            accepted: false,
            transition: CampfireTransition::unchanged(*state),
        };
    }

    let mut effects = Vec::new();
    if state.lit {
        if !side.is_client() {
            effects.push(CampfireEffect::PlaySound {
                sound: SoundKind::ExtinguishFire,
                pos: pos.center(),
                volume: 1.0,
                pitch: 1.0,
                local: false,
            });
        }
        effects.extend(dowse(state, pos, None, side, rng).effects);
    }

    let next = CampfireState {
        lit: false,
        waterlogged: true,
        ..*state
    };
    effects.push(CampfireEffect::ScheduleFluidTick {
        pos,
        fluid: FluidKind::Water,
        delay: block.water_tick_delay,
    });

    log::debug!("Campfire at {} waterlogged", pos);
    FluidContactOutcome {
        accepted: true,
        transition: CampfireTransition::new(next, effects),
    }
}

/// A projectile hit the campfire
pub fn on_projectile_hit(
    state: &CampfireState,
    pos: VoxelPos,
    side: LogicalSide,
    projectile: &Projectile,
    rules: &dyn WorldRules,
) -> CampfireTransition {
    if side.is_client() || !projectile.on_fire {
        return CampfireTransition::unchanged(*state);
    }

    let permitted = match projectile.owner {
        None | Some(ProjectileOwner::Player(_)) => true,
        Some(ProjectileOwner::Entity(_)) => rules.mob_griefing(),
    };

    if permitted && !state.lit && !state.waterlogged {
        log::debug!("Campfire at {} ignited by burning projectile", pos);
        return CampfireTransition::new(
            CampfireState {
                lit: true,
                ..*state
            },
            Vec::new(),
        );
    }
    CampfireTransition::unchanged(*state)
}

// ============================================================================
// STATE TRANSFORMS
// ============================================================================

/// Fluid reported for the campfire's cell
pub fn fluid_state(state: &CampfireState) -> FluidKind {
    if state.waterlogged {
        FluidKind::Water
    } else {
        FluidKind::Empty
    }
}

pub fn rotate(state: &CampfireState, rotation: Rotation) -> CampfireState {
    CampfireState {
        facing: rotation.rotate(state.facing),
        ..*state
    }
}

pub fn mirror(state: &CampfireState, mirror: Mirror) -> CampfireState {
    CampfireState {
        facing: mirror.mirror(state.facing),
        ..*state
    }
}

/// Mobs never path through campfires
pub fn is_pathfindable(_state: &CampfireState) -> bool {
    false
}
