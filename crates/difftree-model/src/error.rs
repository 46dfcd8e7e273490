//! Error types for the tree model.

use difftree_tree::{NodeId, TreeError};

/// Errors that can occur during model operations.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// No valid change-set is attached.
    #[error("no change-set attached")]
    NoChangeSet,

    /// The attached change-set cannot be staged (e.g. a commit diff).
    #[error("change-set does not support staging")]
    StagingUnsupported,

    /// The node id does not belong to the current tree.
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),

    /// Tree construction failed.
    #[error("tree error: {0}")]
    Tree(#[from] TreeError),

    /// The staging index rejected the mutation.
    #[error("staging error: {0}")]
    Staging(#[from] difftree_index::IndexError),

    /// Configuration could not be parsed.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience alias for model results.
pub type ModelResult<T> = Result<T, ModelError>;
