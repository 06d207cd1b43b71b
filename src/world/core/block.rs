use serde::{Deserialize, Serialize};
use static_assertions::const_assert_eq;
use std::fmt;

use super::HorizontalFacing;

/// Unique identifier for a block type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct BlockId(pub u16);

const_assert_eq!(std::mem::size_of::<BlockId>(), 2);

impl Default for BlockId {
    fn default() -> Self {
        BlockId::AIR
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            BlockId::AIR => write!(f, "Air"),
            BlockId::STONE => write!(f, "Stone"),
            BlockId::PLANKS => write!(f, "Planks"),
            BlockId::HAY_BLOCK => write!(f, "Hay Bale"),
            BlockId::OAK_FENCE => write!(f, "Oak Fence"),
            BlockId::STONE_SLAB => write!(f, "Stone Slab"),
            BlockId::CAMPFIRE => write!(f, "Campfire"),
            BlockId::SOUL_CAMPFIRE => write!(f, "Soul Campfire"),
            _ => write!(f, "Block({})", self.0),
        }
    }
}

impl BlockId {
    pub const AIR: BlockId = BlockId(0);
    pub const STONE: BlockId = BlockId(3);
    pub const PLANKS: BlockId = BlockId(14);
    pub const HAY_BLOCK: BlockId = BlockId(40);
    pub const OAK_FENCE: BlockId = BlockId(41);
    pub const STONE_SLAB: BlockId = BlockId(42);
    pub const CAMPFIRE: BlockId = BlockId(50);
    pub const SOUL_CAMPFIRE: BlockId = BlockId(51);
}

/// Named categories used for predicate checks on blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockTag {
    /// Campfire-like blocks (lit/waterlogged fire pits)
    Campfires,
    /// Blocks that turn a campfire above them into a signal fire
    SmokeSource,
}

/// Block state as stored by the host grid.
///
/// Properties a block kind does not expose are `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockState {
    pub block: BlockId,
    pub lit: Option<bool>,
    pub signal_fire: Option<bool>,
    pub waterlogged: Option<bool>,
    pub facing: Option<HorizontalFacing>,
}

impl BlockState {
    pub const AIR: BlockState = BlockState::of(BlockId::AIR);

    /// State of a block kind that exposes no properties
    pub const fn of(block: BlockId) -> Self {
        BlockState {
            block,
            lit: None,
            signal_fire: None,
            waterlogged: None,
            facing: None,
        }
    }

    pub fn is_air(&self) -> bool {
        self.block == BlockId::AIR
    }
}
