//! Error types for the index crate.

/// Errors that can occur during staging operations.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// The index is locked by another writer.
    #[error("index is locked")]
    Locked,

    /// The index does not support staging.
    #[error("staging is disabled for this index")]
    Disabled,

    /// An invalid path was provided.
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// Internal lock was poisoned by a panicking writer.
    #[error("index state poisoned: {0}")]
    Poisoned(String),
}

/// Convenience alias for index results.
pub type IndexResult<T> = Result<T, IndexError>;
