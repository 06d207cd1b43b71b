//! Campfire Cooking Operations - Pure DOP Functions
//!
//! Operations over `CookingSlots`, plus its `CookingStation` implementation
//! so campfire interactions can drive it directly.

use super::cooking_data::{CampfireRecipe, CookingSlot, CookingSlots, RecipeBook, COOLDOWN_PER_TICK};
use super::effects_data::CampfireEffect;
use crate::world::core::{ItemId, ItemStack};
use crate::world::interfaces::{CookingStation, EntityId};

/// Create an empty container using `recipes`
pub fn create_cooking_slots(recipes: RecipeBook) -> CookingSlots {
    CookingSlots {
        slots: Default::default(),
        recipes,
    }
}

/// Register a recipe, replacing any previous recipe for `input`
pub fn add_recipe(book: &mut RecipeBook, input: ItemId, output: ItemId, cook_time: u32) {
    book.recipes.insert(input, CampfireRecipe { output, cook_time });
}

pub fn free_slot_count(slots: &CookingSlots) -> usize {
    slots.slots.iter().filter(|s| s.is_none()).count()
}

/// Advance every session by one tick.
///
/// On a lit fire, finished items are removed and their outputs returned for
/// the host to drop. On an unlit fire progress cools back towards zero.
pub fn tick_cooking(slots: &mut CookingSlots, lit: bool) -> Vec<ItemStack> {
    let mut finished = Vec::new();
    for entry in slots.slots.iter_mut() {
        let Some(slot) = entry else {
            continue;
        };

        if !lit {
            slot.elapsed = slot.elapsed.saturating_sub(COOLDOWN_PER_TICK);
            continue;
        }

        slot.elapsed += 1;
        if slot.elapsed >= slot.required {
            let output = slots
                .recipes
                .recipes
                .get(&slot.item.item)
                .map_or(slot.item, |r| ItemStack::new(r.output, slot.item.count));
            log::debug!(
                "Cooked {:?} into {:?} for {:?}",
                slot.item.item,
                output.item,
                slot.cooked_by
            );
            finished.push(output);
            *entry = None;
        }
    }
    finished
}

/// Cancel every session, returning the uncooked items
pub fn clear_sessions(slots: &mut CookingSlots) -> Vec<ItemStack> {
    slots
        .slots
        .iter_mut()
        .filter_map(|entry| entry.take().map(|s| s.item))
        .collect()
}

/// Remove every stored item so the host can drop it in the world
pub fn drain_contents(slots: &mut CookingSlots) -> Vec<ItemStack> {
    clear_sessions(slots)
}

/// Run a campfire effect that targets the cooking container.
///
/// Returns items the host should drop; other effects are ignored.
pub fn apply_cooking_effect(slots: &mut CookingSlots, effect: &CampfireEffect) -> Vec<ItemStack> {
    match effect {
        CampfireEffect::ClearCookingSessions { .. } => clear_sessions(slots),
        CampfireEffect::DropContents { .. } => drain_contents(slots),
        _ => Vec::new(),
    }
}

impl CookingStation for CookingSlots {
    fn lookup_recipe(&self, stack: &ItemStack) -> Option<u32> {
        self.recipes.recipes.get(&stack.item).map(|r| r.cook_time)
    }

    fn begin_session(&mut self, actor: EntityId, stack: ItemStack, duration: u32) -> bool {
        match self.slots.iter_mut().find(|s| s.is_none()) {
            Some(entry) => {
                *entry = Some(CookingSlot {
                    item: stack,
                    elapsed: 0,
                    required: duration,
                    cooked_by: actor,
                });
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::blocks::campfire::cooking_data::COOKING_SLOT_COUNT;
    use crate::world::core::VoxelPos;

    const RAW: ItemId = ItemId(300);
    const COOKED: ItemId = ItemId(301);

    fn slots() -> CookingSlots {
        let mut book = RecipeBook::default();
        add_recipe(&mut book, RAW, COOKED, 3);
        create_cooking_slots(book)
    }

    #[test]
    fn test_fills_four_slots_then_refuses() {
        let mut slots = slots();
        for _ in 0..COOKING_SLOT_COUNT {
            assert!(slots.begin_session(EntityId(1), ItemStack::new(RAW, 1), 3));
        }
        assert_eq!(free_slot_count(&slots), 0);
        assert!(!slots.begin_session(EntityId(1), ItemStack::new(RAW, 1), 3));
    }

    #[test]
    fn test_cooks_after_required_ticks() {
        let mut slots = slots();
        slots.begin_session(EntityId(1), ItemStack::new(RAW, 1), 3);

        assert!(tick_cooking(&mut slots, true).is_empty());
        assert!(tick_cooking(&mut slots, true).is_empty());
        assert_eq!(tick_cooking(&mut slots, true), vec![ItemStack::new(COOKED, 1)]);
        assert_eq!(free_slot_count(&slots), COOKING_SLOT_COUNT);
    }

    #[test]
    fn test_unlit_fire_cools_progress() {
        let mut slots = slots();
        slots.begin_session(EntityId(1), ItemStack::new(RAW, 1), 3);
        tick_cooking(&mut slots, true);
        tick_cooking(&mut slots, true);
        tick_cooking(&mut slots, false);
        assert_eq!(slots.slots[0].map(|s| s.elapsed), Some(0));
    }

    #[test]
    fn test_effects_clear_and_drop() {
        let mut slots = slots();
        slots.begin_session(EntityId(1), ItemStack::new(RAW, 1), 3);
        slots.begin_session(EntityId(2), ItemStack::new(RAW, 1), 3);

        let pos = VoxelPos::default();
        let dropped = apply_cooking_effect(
            &mut slots,
            &CampfireEffect::ClearCookingSessions { pos },
        );
        assert_eq!(dropped.len(), 2);
        assert!(apply_cooking_effect(&mut slots, &CampfireEffect::DropContents { pos }).is_empty());
        assert!(apply_cooking_effect(&mut slots, &CampfireEffect::PlaceFire { pos }).is_empty());
    }

    #[test]
    fn test_unknown_item_has_no_recipe() {
        let slots = slots();
        assert_eq!(slots.lookup_recipe(&ItemStack::new(ItemId(999), 1)), None);
        assert_eq!(slots.lookup_recipe(&ItemStack::new(RAW, 5)), Some(3));
    }
}
