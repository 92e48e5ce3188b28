//! Store gateway errors

use thiserror::Error;

/// Result type for gateway operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by an item gateway
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// No record matched the identifier (malformed identifiers included)
    #[error("Item not found")]
    NotFound,

    /// Any failure reported by the underlying store, text forwarded as-is
    #[error("{0}")]
    Backend(String),
}

impl From<mongodb::error::Error> for StoreError {
    fn from(e: mongodb::error::Error) -> Self {
        StoreError::Backend(e.to_string())
    }
}
