//! Block definitions and block behaviors

pub mod basic_blocks;
pub mod block_data;
pub mod campfire;

pub use basic_blocks::register_basic_blocks;
pub use block_data::BlockProperties;
