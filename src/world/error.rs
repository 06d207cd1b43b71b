/// World Error Handling
///
/// Error types for grid-level operations on campfire cells.
use crate::world::core::{BlockId, VoxelPos};

/// World-specific result type
pub type WorldResult<T> = Result<T, WorldError>;

// WorldError for DOP operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    #[error("Block at {pos} is not a campfire")]
    NotACampfire { pos: VoxelPos },

    #[error("Campfire at {pos} cannot be lit while waterlogged")]
    LitWhileWaterlogged { pos: VoxelPos },

    #[error("Unknown block {0}")]
    UnknownBlock(BlockId),
}
