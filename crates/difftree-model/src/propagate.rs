//! Toggle application and change notification.
//!
//! Toggling a node stages or unstages every change-set entry beneath it,
//! then tells the view which rows may now answer differently:
//!
//! 1. the node's children (only one level by default; deeper rows re-query
//!    when they are next drawn),
//! 2. every ancestor up to, but not including, the invisible root,
//! 3. the node itself,
//!
//! followed by one [`ModelEvent::CheckStateChanged`] carrying the request.
//! If staging fails, no event is produced.

use difftree_diff::ChangeSetView;
use difftree_index::StagingBridge;
use difftree_tree::{NodeId, PathTree};
use difftree_types::CheckState;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ModelError, ModelResult};
use crate::events::ModelEvent;
use crate::role::Role;

/// How far below a toggled node change notifications reach.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotifyDepth {
    /// Direct children only.
    #[default]
    DirectChildren,
    /// Every descendant, pre-order.
    Recursive,
}

/// Whether a toggle touches the staging index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Propagation {
    /// Stage or unstage, then notify.
    #[default]
    Apply,
    /// Notify only. For cascaded calls whose index change already happened.
    NotifyOnly,
}

/// Applies toggles and computes notification sets.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChangePropagator {
    depth: NotifyDepth,
}

impl ChangePropagator {
    pub fn new(depth: NotifyDepth) -> Self {
        Self { depth }
    }

    pub fn depth(&self) -> NotifyDepth {
        self.depth
    }

    /// Nodes whose state may change when `node` is toggled, in notification
    /// order: descendants, then ancestors walking upward (root excluded),
    /// then `node`.
    pub fn notification_set(&self, tree: &PathTree, node: NodeId) -> Vec<NodeId> {
        if !tree.contains(node) {
            return Vec::new();
        }
        let mut set = match self.depth {
            NotifyDepth::DirectChildren => tree.children(node).to_vec(),
            NotifyDepth::Recursive => tree.descendants(node),
        };
        set.extend(
            tree.ancestors(node)
                .into_iter()
                .filter(|ancestor| !ancestor.is_root()),
        );
        set.push(node);
        set
    }

    /// Stage or unstage everything beneath `node` and return the events the
    /// model should emit.
    ///
    /// Anything but `Unchecked` stages. The closing
    /// [`ModelEvent::CheckStateChanged`] carries `value` as requested.
    ///
    /// Fails without side effects if `node` is unknown, the change-set is not
    /// stageable, or the index rejects the batch.
    pub fn set_inclusion(
        &self,
        tree: &PathTree,
        node: NodeId,
        changes: &dyn ChangeSetView,
        index: &dyn StagingBridge,
        value: CheckState,
        mode: Propagation,
    ) -> ModelResult<Vec<ModelEvent>> {
        let checked = value.is_any_checked();
        let prefix = tree.path(node, true).ok_or(ModelError::NodeNotFound(node))?;
        if !changes.is_valid() || !changes.is_status_diff() {
            warn!(node = %node, "toggle refused: change-set does not support staging");
            return Err(ModelError::StagingUnsupported);
        }

        let paths = changes.paths_under(&prefix);
        if mode == Propagation::Apply {
            if let Err(err) = index.set_staged(&paths, checked) {
                warn!(node = %node, paths = paths.len(), error = %err, "staging failed");
                return Err(err.into());
            }
        }

        let mut events: Vec<ModelEvent> = self
            .notification_set(tree, node)
            .into_iter()
            .map(|id| ModelEvent::DataChanged {
                node: id,
                role: Role::CheckState,
            })
            .collect();
        events.push(ModelEvent::CheckStateChanged {
            node,
            value,
        });

        debug!(
            node = %node,
            prefix = %prefix,
            paths = paths.len(),
            staged = checked,
            notified = events.len() - 1,
            "propagated inclusion change"
        );
        Ok(events)
    }
}
