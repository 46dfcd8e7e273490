//! Error types for the path tree.

use difftree_types::TypeError;

use crate::node::NodeId;

/// Errors that can occur while building or navigating a [`PathTree`].
///
/// [`PathTree`]: crate::PathTree
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// The path could not be split into segments.
    #[error("invalid path: {0}")]
    InvalidPath(#[from] TypeError),

    /// A node id does not belong to this tree.
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),
}

/// Convenience alias for tree results.
pub type TreeResult<T> = Result<T, TreeError>;
