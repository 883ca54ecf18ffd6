//! Error types for shelf optimization.

use thiserror::Error;

/// Failure reported by a catalog, allocation, or history store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The backing store could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The store refused the operation.
    #[error("store rejected operation: {0}")]
    Rejected(String),
}

/// Main error type for optimization runs.
#[derive(Debug, Error)]
pub enum OptimizeError {
    /// Reading the catalog or persisting a result failed.
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),

    /// Engine configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for optimization runs.
pub type Result<T> = std::result::Result<T, OptimizeError>;
