//! Error handling for the campfire crate
//!
//! Campfire behavior itself is total: interactions report a tri-state result
//! and fluid contact reports acceptance. Errors only appear at the edges, when
//! variant configuration is loaded or when a host commits state to a grid.

use crate::world::error::WorldError;

/// Main error type for the crate
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    // Configuration Errors
    #[error("Invalid config: {field} = {value} ({reason})")]
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required config: {field}")]
    MissingConfig { field: String },

    #[error("Parse error in {context}: {error}")]
    ParseError { context: String, error: String },

    // System Errors
    #[error("IO error for {path}: {error}")]
    IoError { path: String, error: String },

    #[error("Resource not found: {resource_type} '{id}'")]
    ResourceNotFound { resource_type: String, id: String },

    // World Errors
    #[error(transparent)]
    World(#[from] WorldError),
}

/// Type alias for Results in the crate
pub type EngineResult<T> = Result<T, EngineError>;

impl From<toml::de::Error> for EngineError {
    fn from(error: toml::de::Error) -> Self {
        EngineError::ParseError {
            context: "toml".to_string(),
            error: error.message().to_string(),
        }
    }
}

/// Convert Option to Result with context
pub trait OptionExt<T> {
    fn ok_or_engine<F>(self, f: F) -> EngineResult<T>
    where
        F: FnOnce() -> EngineError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_engine<F>(self, f: F) -> EngineResult<T>
    where
        F: FnOnce() -> EngineError,
    {
        self.ok_or_else(f)
    }
}
