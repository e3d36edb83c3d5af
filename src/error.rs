//! Errors raised while building a session
//!
//! Gameplay itself has no error states: running out of life or jumping in
//! mid-air are ordinary state transitions.

use thiserror::Error;

/// Construction and configuration failures
#[derive(Debug, Error)]
pub enum SimError {
    /// Coin/spike scatter needs at least one platform to choose from
    #[error("level {level} has an empty platform layout")]
    EmptyLayout { level: usize },

    /// Platform or lava sizes must not be negative
    #[error("level {level} has a negative extent {width}x{height}")]
    InvalidExtent {
        level: usize,
        width: i32,
        height: i32,
    },

    #[error("settings contain no levels")]
    NoLevels,

    #[error("invalid settings: {0}")]
    Config(#[from] serde_json::Error),

    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
}
