use serde::{Deserialize, Serialize};

/// Unique identifier for an item type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct ItemId(pub u16);

impl ItemId {
    pub const EMPTY: ItemId = ItemId(0);
}

/// A stack of identical items held by an actor or stored in a container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    pub item: ItemId,
    pub count: u32,
}

impl ItemStack {
    pub const EMPTY: ItemStack = ItemStack {
        item: ItemId::EMPTY,
        count: 0,
    };

    pub const fn new(item: ItemId, count: u32) -> Self {
        Self { item, count }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0 || self.item == ItemId::EMPTY
    }

    /// One unit of this stack, leaving the stack untouched
    pub fn single(&self) -> ItemStack {
        ItemStack::new(self.item, 1)
    }

    pub fn shrink(&mut self, amount: u32) {
        self.count = self.count.saturating_sub(amount);
    }
}
