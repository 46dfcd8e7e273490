//! Error types for the diff crate.

use difftree_types::TypeError;

/// Errors that can occur while reading change-set input.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// A porcelain line could not be parsed.
    #[error("line {line}: {reason}")]
    Parse {
        /// 1-based line number.
        line: usize,
        reason: String,
    },

    /// A status code or path was rejected.
    #[error("invalid entry: {0}")]
    InvalidEntry(#[from] TypeError),
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
