use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("empty path")]
    EmptyPath,

    #[error("empty segment in path: {0:?}")]
    EmptySegment(String),

    #[error("unknown status code: {0:?}")]
    UnknownStatus(char),
}
