//! Tri-state aggregation of staging status.
//!
//! A folder cannot be staged itself, so its state is derived from every
//! change-set entry beneath it. Nothing is cached: the staging index may
//! change between any two queries.

use difftree_diff::ChangeSetView;
use difftree_index::StagingBridge;
use difftree_tree::{NodeId, PathTree};
use difftree_types::{CheckState, StagedState};

/// Fold per-file staging states into one inclusion state.
///
/// - no states → `None` (undetermined)
/// - any `PartiallyStaged` → `PartiallyChecked`, without looking further
/// - all `Staged` → `Checked`, none `Staged` → `Unchecked`, else partial
///
/// `Unstaged`, `Conflicted` and `Disabled` all count as not staged.
pub fn fold_states<I>(states: I) -> Option<CheckState>
where
    I: IntoIterator<Item = StagedState>,
{
    let mut total = 0usize;
    let mut staged = 0usize;
    for state in states {
        total += 1;
        match state {
            StagedState::PartiallyStaged => return Some(CheckState::PartiallyChecked),
            StagedState::Staged => staged += 1,
            StagedState::Unstaged | StagedState::Conflicted | StagedState::Disabled => {}
        }
    }

    if total == 0 {
        None
    } else if staged == 0 {
        Some(CheckState::Unchecked)
    } else if staged == total {
        Some(CheckState::Checked)
    } else {
        Some(CheckState::PartiallyChecked)
    }
}

/// Computes node states from a change-set and a staging index.
///
/// Holds only borrowed read interfaces; build one per query batch.
#[derive(Clone, Copy)]
pub struct StateAggregator<'a> {
    changes: &'a dyn ChangeSetView,
    index: &'a dyn StagingBridge,
}

impl<'a> StateAggregator<'a> {
    pub fn new(changes: &'a dyn ChangeSetView, index: &'a dyn StagingBridge) -> Self {
        Self { changes, index }
    }

    /// Aggregate inclusion state of `node`.
    ///
    /// `None` when the change-set is invalid or not stageable, when `node`
    /// is not in `tree`, or when no entry lies beneath it.
    pub fn query(&self, tree: &PathTree, node: NodeId) -> Option<CheckState> {
        if !self.changes.is_valid() || !self.changes.is_status_diff() {
            return None;
        }
        let prefix = tree.path(node, true)?;
        let paths = self.changes.paths_under(&prefix);
        fold_states(paths.iter().map(|path| self.index.status_of(path)))
    }

    /// Distinct status codes beneath `node`, in first-seen order.
    pub fn status_summary(&self, tree: &PathTree, node: NodeId) -> String {
        tree.path(node, true)
            .map(|prefix| self.changes.status_summary(&prefix))
            .unwrap_or_default()
    }
}
