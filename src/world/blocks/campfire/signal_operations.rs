//! Campfire Signal Operations - read-only queries
//!
//! Used by other systems (hives, watchtowers) to detect campfire smoke
//! rising through a column, and by igniting items to decide whether a
//! block can be lit. None of these touch state.

use super::campfire_data::{virtual_fence_post, SIGNAL_SCAN_DEPTH};
use crate::physics::shapes_overlap;
use crate::world::core::{BlockRegistry, BlockState, BlockTag, VoxelPos};
use crate::world::interfaces::BlockView;

/// A campfire-tagged block that exposes `lit` and is burning
pub fn is_lit_campfire(registry: &BlockRegistry, state: &BlockState) -> bool {
    state.lit == Some(true) && registry.has_tag(state.block, BlockTag::Campfires)
}

/// A lit campfire that is also a signal fire
pub fn is_signaling_campfire(registry: &BlockRegistry, state: &BlockState) -> bool {
    is_lit_campfire(registry, state) && state.signal_fire == Some(true)
}

/// Block that turns a campfire above it into a signal fire
pub fn is_smoke_source(registry: &BlockRegistry, state: &BlockState) -> bool {
    registry.has_tag(state.block, BlockTag::SmokeSource)
}

/// Whether signal smoke reaches `origin` from below.
///
/// Scans up to five cells down. Empty cells pass smoke through. The first
/// cell whose collision shape blocks a fence post ends the scan: smoke counts
/// only if the campfire sits directly beneath that cell.
pub fn is_smokey_column(view: &dyn BlockView, origin: VoxelPos) -> bool {
    let registry = view.registry();
    let post = [virtual_fence_post()];

    for depth in 1..=SIGNAL_SCAN_DEPTH {
        let pos = origin.below(depth);
        let state = view.block_state(pos);
        if is_signaling_campfire(registry, &state) {
            return true;
        }

        if shapes_overlap(&post, view.collision_shape(pos)) {
            let beneath = view.block_state(pos.below(1));
            return is_signaling_campfire(registry, &beneath);
        }
    }

    false
}

/// Whether an igniter (flint, fire charge...) can light this block
pub fn can_ignite(registry: &BlockRegistry, state: &BlockState) -> bool {
    registry.has_tag(state.block, BlockTag::Campfires)
        && state.waterlogged == Some(false)
        && state.lit == Some(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::blocks::campfire::CampfireState;
    use crate::world::core::{BlockId, HorizontalFacing};
    use crate::world::data_types::GridWorld;
    use crate::world::world_operations::{create_grid_world, set_block};

    fn campfire(lit: bool, signal_fire: bool, waterlogged: bool) -> BlockState {
        CampfireState {
            lit,
            signal_fire,
            waterlogged,
            facing: HorizontalFacing::North,
        }
        .to_block_state(BlockId::CAMPFIRE)
    }

    fn world_with_fire(fire: BlockState) -> (GridWorld, VoxelPos) {
        let mut world = create_grid_world();
        let c = VoxelPos::new(0, 10, 0);
        set_block(&mut world, c.below(1), BlockState::of(BlockId::HAY_BLOCK));
        set_block(&mut world, c, fire);
        (world, c)
    }

    #[test]
    fn test_signal_reaches_four_above_but_not_six() {
        let (world, c) = world_with_fire(campfire(true, true, false));
        assert!(is_smokey_column(&world, c.above(4)));
        assert!(is_smokey_column(&world, c.above(5)));
        assert!(!is_smokey_column(&world, c.above(6)));
    }

    #[test]
    fn test_unlit_or_plain_campfire_gives_no_signal() {
        let (world, c) = world_with_fire(campfire(false, true, false));
        assert!(!is_smokey_column(&world, c.above(2)));

        let (world, c) = world_with_fire(campfire(true, false, false));
        assert!(!is_smokey_column(&world, c.above(2)));
    }

    #[test]
    fn test_smoke_passes_one_blocking_cell_directly_above() {
        let (mut world, c) = world_with_fire(campfire(true, true, false));
        set_block(&mut world, c.above(1), BlockState::of(BlockId::OAK_FENCE));
        assert!(is_smokey_column(&world, c.above(2)));
    }

    #[test]
    fn test_blocking_cell_higher_up_stops_scan() {
        let (mut world, c) = world_with_fire(campfire(true, true, false));
        set_block(&mut world, c.above(2), BlockState::of(BlockId::STONE));
        assert!(!is_smokey_column(&world, c.above(3)));
        // Below the stone the column is still open
        assert!(is_smokey_column(&world, c.above(2)));
    }

    #[test]
    fn test_slab_overlaps_fence_post() {
        let (mut world, c) = world_with_fire(campfire(true, true, false));
        set_block(&mut world, c.above(1), BlockState::of(BlockId::STONE_SLAB));
        set_block(&mut world, c.above(2), BlockState::of(BlockId::STONE_SLAB));
        // Scan stops at the first slab (c+2), whose beneath is another slab
        assert!(!is_smokey_column(&world, c.above(3)));
    }

    #[test]
    fn test_can_ignite_gating() {
        let registry = create_grid_world().registry;
        assert!(!can_ignite(&registry, &campfire(true, false, false)));
        assert!(can_ignite(&registry, &campfire(false, false, false)));
        assert!(!can_ignite(&registry, &campfire(false, false, true)));
        assert!(!can_ignite(&registry, &BlockState::of(BlockId::STONE)));
    }

    #[test]
    fn test_can_ignite_requires_both_properties() {
        let registry = create_grid_world().registry;
        let missing_waterlogged = BlockState {
            waterlogged: None,
            ..campfire(false, false, false)
        };
        assert!(!can_ignite(&registry, &missing_waterlogged));
    }
}
