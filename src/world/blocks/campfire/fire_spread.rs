//! Optional campfire fire spread
//!
//! A probabilistic sweep that sets fire next to flammable blocks around a
//! campfire. Installed per variant and additionally gated by the
//! `very_hard_fire_spread` world rule, so default worlds never run it.

use super::effects_data::CampfireEffect;
use crate::random::{shuffle, RandomSource};
use crate::world::core::{Direction, VoxelPos};
use crate::world::interfaces::{BlockView, WorldRules};
use std::fmt;

/// Neighbour ignition invoked from a campfire's random tick
pub trait FireSpread: Send + Sync + fmt::Debug {
    fn spread(
        &self,
        pos: VoxelPos,
        view: &dyn BlockView,
        rules: &dyn WorldRules,
        rng: &mut dyn RandomSource,
        effects: &mut Vec<CampfireEffect>,
    );
}

/// Faces of a burning candidate that may catch fire, in roll order
const IGNITION_FACES: [Direction; 5] = [
    Direction::Up,
    Direction::West,
    Direction::East,
    Direction::South,
    Direction::North,
];

/// Sweeps a box around the campfire; every flammable block found raises the
/// odds that each candidate sets its empty neighbours alight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManhattanFireSpread {
    pub radius_xz: i32,
    pub radius_y: i32,
    pub flammability_per_block: f32,
}

impl Default for ManhattanFireSpread {
    fn default() -> Self {
        Self {
            radius_xz: 3,
            radius_y: 5,
            flammability_per_block: 0.05,
        }
    }
}

impl ManhattanFireSpread {
    /// Flammable blocks in range, excluding the campfire's own cell
    fn flammable_candidates(&self, pos: VoxelPos, view: &dyn BlockView) -> Vec<VoxelPos> {
        let registry = view.registry();
        let mut candidates = Vec::new();
        for dy in -self.radius_y..=self.radius_y {
            for dx in -self.radius_xz..=self.radius_xz {
                for dz in -self.radius_xz..=self.radius_xz {
                    if dx == 0 && dy == 0 && dz == 0 {
                        continue;
                    }
                    let candidate = pos.offset(dx, dy, dz);
                    if registry.is_flammable(view.block_state(candidate).block) {
                        candidates.push(candidate);
                    }
                }
            }
        }
        candidates
    }
}

impl FireSpread for ManhattanFireSpread {
    fn spread(
        &self,
        pos: VoxelPos,
        view: &dyn BlockView,
        rules: &dyn WorldRules,
        rng: &mut dyn RandomSource,
        effects: &mut Vec<CampfireEffect>,
    ) {
        if !rules.very_hard_fire_spread() {
            return;
        }

        let mut candidates = self.flammable_candidates(pos, view);
        if candidates.is_empty() {
            return;
        }
        let flammability = candidates.len() as f32 * self.flammability_per_block;
        shuffle(&mut candidates, rng);

        let before = effects.len();
        for candidate in candidates {
            if rng.next_float() >= flammability {
                continue;
            }
            for face in IGNITION_FACES {
                let target = candidate.relative(face);
                if view.block_state(target).is_air() && rng.next_bool() {
                    effects.push(CampfireEffect::PlaceFire { pos: target });
                }
            }
        }

        log::debug!(
            "Campfire at {} spread fire to {} cells (flammability {:.2})",
            pos,
            effects.len() - before,
            flammability
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::testing::ScriptedRandom;
    use crate::world::core::{BlockId, BlockState};
    use crate::world::world_operations::{create_grid_world, set_block};

    #[test]
    fn test_rule_off_spreads_nothing() {
        let mut world = create_grid_world();
        let origin = VoxelPos::new(0, 0, 0);
        set_block(&mut world, origin.offset(1, 0, 0), BlockState::of(BlockId::PLANKS));

        let mut effects = Vec::new();
        ManhattanFireSpread::default().spread(
            origin,
            &world,
            &world,
            &mut ScriptedRandom::always(),
            &mut effects,
        );
        assert!(effects.is_empty());
    }

    #[test]
    fn test_lucky_rolls_ignite_empty_neighbours() {
        let mut world = create_grid_world();
        world.very_hard_fire_spread = true;
        let origin = VoxelPos::new(0, 0, 0);
        let planks = origin.offset(2, 0, 0);
        set_block(&mut world, planks, BlockState::of(BlockId::PLANKS));
        set_block(&mut world, planks.relative(Direction::Up), BlockState::of(BlockId::STONE));

        let mut effects = Vec::new();
        ManhattanFireSpread::default().spread(
            origin,
            &world,
            &world,
            &mut ScriptedRandom::always(),
            &mut effects,
        );

        let targets: Vec<VoxelPos> = effects
            .iter()
            .map(|e| match e {
                CampfireEffect::PlaceFire { pos } => *pos,
                other => panic!("unexpected effect {:?}", other),
            })
            .collect();
        assert_eq!(targets.len(), 4);
        assert!(!targets.contains(&planks.relative(Direction::Up)));
        assert!(targets.contains(&planks.relative(Direction::West)));
    }

    #[test]
    fn test_unlucky_rolls_ignite_nothing() {
        let mut world = create_grid_world();
        world.very_hard_fire_spread = true;
        set_block(&mut world, VoxelPos::new(1, 0, 0), BlockState::of(BlockId::PLANKS));

        let mut effects = Vec::new();
        ManhattanFireSpread::default().spread(
            VoxelPos::default(),
            &world,
            &world,
            &mut ScriptedRandom::never(),
            &mut effects,
        );
        assert!(effects.is_empty());
    }

    #[test]
    fn test_campfire_cell_is_not_a_candidate() {
        let mut world = create_grid_world();
        let origin = VoxelPos::new(0, 0, 0);
        set_block(&mut world, origin, BlockState::of(BlockId::PLANKS));
        let spread = ManhattanFireSpread::default();
        assert!(spread.flammable_candidates(origin, &world).is_empty());
    }
}
