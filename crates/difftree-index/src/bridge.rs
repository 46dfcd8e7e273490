//! The [`StagingBridge`] trait defining the staging index interface.

use difftree_types::StagedState;

use crate::error::IndexResult;

/// Narrow interface to an external staging index.
///
/// Implementations own the durable record of what is staged. Both calls are
/// synchronous; cancellation and timeouts belong to the implementation.
pub trait StagingBridge: Send + Sync {
    /// Current staging status of a single file.
    ///
    /// Folders are not tracked by an index; callers aggregate them.
    fn status_of(&self, path: &str) -> StagedState;

    /// Stage (`true`) or unstage (`false`) every path in `paths`.
    ///
    /// On error no path may have changed.
    fn set_staged(&self, paths: &[String], staged: bool) -> IndexResult<()>;
}
