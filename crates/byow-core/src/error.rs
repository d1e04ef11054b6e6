//! Error type shared by every fallible world operation

use thiserror::Error;

/// World generation and query errors
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("Invalid world dimensions {width}x{height}: both must be at least {min}")]
    InvalidDimension {
        width: usize,
        height: usize,
        min: usize,
    },

    #[error("Could not allocate storage for {cells} tiles")]
    AllocationFailure { cells: usize },

    #[error("No path from room {start} to room {end}")]
    NoPath { start: usize, end: usize },

    #[error("Invalid room id {id}")]
    InvalidRoomId { id: usize },

    #[error("Encoded output needs {needed} bytes but capacity is {capacity}")]
    EncodingOverflow { capacity: usize, needed: usize },

    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("Invalid tile code {0}")]
    InvalidTileCode(u8),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl WorldError {
    pub(crate) fn config(reason: impl Into<String>) -> Self {
        WorldError::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Whether this error means "the queried path does not exist"
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            WorldError::NoPath { .. } | WorldError::InvalidRoomId { .. }
        )
    }
}
