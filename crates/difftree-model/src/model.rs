//! The view-facing tree model.
//!
//! [`DiffTreeModel`] owns the [`PathTree`] for the attached change-set and
//! answers per-node [`Role`] queries. The tree is rebuilt only when a new
//! change-set is attached; inclusion state is recomputed on every query.
//!
//! Node ids follow view conventions: `None` as a parent means the root,
//! and [`parent`](DiffTreeModel::parent) of a top-level node is `None`.

use std::sync::Arc;

use difftree_diff::ChangeSetView;
use difftree_index::StagingBridge;
use difftree_tree::{NodeId, PathTree, TreeResult};
use difftree_types::CheckState;
use tracing::debug;

use crate::aggregate::StateAggregator;
use crate::config::ModelConfig;
use crate::decoration::{Decorations, NoDecorations};
use crate::error::{ModelError, ModelResult};
use crate::events::{ModelEvent, ModelObserver};
use crate::propagate::{ChangePropagator, Propagation};
use crate::role::{Role, RoleValue};

const SUBMODULE_KIND: &str = "Submodule";

/// A change-set presented as a checkable folder/file tree.
pub struct DiffTreeModel {
    workdir: String,
    tree: Option<PathTree>,
    changes: Option<Arc<dyn ChangeSetView>>,
    index: Option<Arc<dyn StagingBridge>>,
    decorations: Arc<dyn Decorations>,
    propagator: ChangePropagator,
    observers: Vec<Arc<dyn ModelObserver>>,
}

impl std::fmt::Debug for DiffTreeModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiffTreeModel")
            .field("workdir", &self.workdir)
            .field("nodes", &self.tree.as_ref().map(PathTree::len))
            .field("attached", &self.changes.is_some())
            .field("propagator", &self.propagator)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl DiffTreeModel {
    /// Create a detached model rooted at `workdir`.
    pub fn new(workdir: impl Into<String>) -> Self {
        Self {
            workdir: workdir.into(),
            tree: None,
            changes: None,
            index: None,
            decorations: Arc::new(NoDecorations),
            propagator: ChangePropagator::default(),
            observers: Vec::new(),
        }
    }

    /// Create a detached model configured by `config`.
    ///
    /// Uses the config's extension table for kind labels.
    pub fn with_config(workdir: impl Into<String>, config: &ModelConfig) -> Self {
        let mut model = Self::new(workdir);
        model.propagator = ChangePropagator::new(config.notify_depth);
        model.decorations = Arc::new(config.extension_kinds());
        model
    }

    /// Replace the decoration lookups.
    pub fn with_decorations(mut self, decorations: Arc<dyn Decorations>) -> Self {
        self.decorations = decorations;
        self
    }

    /// Register an observer for [`ModelEvent`]s.
    pub fn subscribe(&mut self, observer: Arc<dyn ModelObserver>) {
        self.observers.push(observer);
    }

    pub fn workdir(&self) -> &str {
        &self.workdir
    }

    pub fn propagator(&self) -> &ChangePropagator {
        &self.propagator
    }

    fn emit(&self, event: &ModelEvent) {
        for observer in &self.observers {
            observer.on_event(event);
        }
    }

    // ---------------------------------------------------------------
    // Attachment
    // ---------------------------------------------------------------

    /// Attach a change-set and the index it stages into.
    ///
    /// The new tree is built completely before anything is published. If a
    /// path is malformed the call fails and the previous tree stays in place
    /// with no events emitted. An invalid change-set detaches the model.
    pub fn set_change_set(
        &mut self,
        changes: Arc<dyn ChangeSetView>,
        index: Arc<dyn StagingBridge>,
    ) -> ModelResult<()> {
        let tree = if changes.is_valid() {
            Some(build_tree(&self.workdir, changes.as_ref())?)
        } else {
            None
        };

        self.emit(&ModelEvent::AboutToReset);
        match tree {
            Some(tree) => {
                debug!(entries = changes.count(), nodes = tree.len(), "attached change-set");
                self.tree = Some(tree);
                self.changes = Some(changes);
                self.index = Some(index);
            }
            None => {
                debug!("invalid change-set, detaching");
                self.detach();
            }
        }
        self.emit(&ModelEvent::Reset);
        Ok(())
    }

    /// Drop the current tree and change-set.
    pub fn clear(&mut self) {
        self.emit(&ModelEvent::AboutToReset);
        self.detach();
        self.emit(&ModelEvent::Reset);
    }

    fn detach(&mut self) {
        self.tree = None;
        self.changes = None;
        self.index = None;
    }

    /// Returns `true` if a valid change-set is attached.
    pub fn is_attached(&self) -> bool {
        self.tree.is_some()
    }

    pub fn tree(&self) -> Option<&PathTree> {
        self.tree.as_ref()
    }

    fn aggregator(&self) -> Option<StateAggregator<'_>> {
        let changes = self.changes.as_deref()?;
        let index = self.index.as_deref()?;
        Some(StateAggregator::new(changes, index))
    }

    // ---------------------------------------------------------------
    // Navigation
    // ---------------------------------------------------------------

    /// The (invisible) root node.
    pub fn root(&self) -> Option<NodeId> {
        self.tree.as_ref().map(PathTree::root)
    }

    fn resolve(&self, parent: Option<NodeId>) -> Option<(&PathTree, NodeId)> {
        let tree = self.tree.as_ref()?;
        let node = parent.unwrap_or_else(|| tree.root());
        tree.contains(node).then_some((tree, node))
    }

    /// Number of rows beneath `parent` (`None` for the root).
    pub fn row_count(&self, parent: Option<NodeId>) -> usize {
        self.resolve(parent)
            .map(|(tree, node)| tree.children(node).len())
            .unwrap_or(0)
    }

    /// The node at `row` beneath `parent` (`None` for the root).
    pub fn index(&self, row: usize, parent: Option<NodeId>) -> Option<NodeId> {
        let (tree, node) = self.resolve(parent)?;
        tree.child(node, row)
    }

    /// Visible parent of `node`; `None` for top-level nodes and the root.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        let tree = self.tree.as_ref()?;
        tree.parent(node).filter(|p| !p.is_root())
    }

    /// Row of `node` beneath its parent.
    pub fn row(&self, node: NodeId) -> Option<usize> {
        self.tree.as_ref()?.row(node)
    }

    pub fn has_children(&self, node: Option<NodeId>) -> bool {
        self.resolve(node)
            .map(|(tree, node)| tree.has_children(node))
            .unwrap_or(false)
    }

    /// Look up a node by relative path.
    pub fn find(&self, path: &str) -> Option<NodeId> {
        self.tree.as_ref()?.find(path)
    }

    // ---------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------

    pub fn name(&self, node: NodeId) -> Option<&str> {
        self.tree.as_ref()?.name(node)
    }

    /// Full path of `node`, absolute or relative to the working directory.
    pub fn path(&self, node: NodeId, relative: bool) -> Option<String> {
        self.tree.as_ref()?.path(node, relative)
    }

    /// Aggregate inclusion state; `None` when undetermined.
    pub fn check_state(&self, node: NodeId) -> Option<CheckState> {
        let tree = self.tree.as_ref()?;
        self.aggregator()?.query(tree, node)
    }

    /// Distinct status codes beneath `node`.
    pub fn status(&self, node: NodeId) -> String {
        match (self.tree.as_ref(), self.aggregator()) {
            (Some(tree), Some(agg)) => agg.status_summary(tree, node),
            _ => String::new(),
        }
    }

    /// Kind label; submodules are always "Submodule".
    pub fn kind(&self, node: NodeId) -> Option<String> {
        let path = self.path(node, true)?;
        if self.decorations.is_submodule(&path) {
            return Some(SUBMODULE_KIND.to_string());
        }
        self.decorations.kind(self.name(node)?)
    }

    fn commit_link(&self, node: NodeId, first: bool) -> Option<String> {
        let path = self.path(node, true)?;
        let commit = if first {
            self.decorations.first_commit(&path)
        } else {
            self.decorations.last_commit(&path)
        };
        commit.map(|c| c.link())
    }

    /// Answer a [`Role`] query for `node`.
    pub fn data(&self, node: NodeId, role: Role) -> Option<RoleValue> {
        match role {
            Role::Display => self.name(node).map(|n| RoleValue::Text(n.to_string())),
            Role::Edit => self.path(node, true).map(RoleValue::Text),
            Role::ToolTip => self.path(node, false).map(RoleValue::Text),
            Role::CheckState => self.check_state(node).map(RoleValue::Check),
            Role::Kind => self.kind(node).map(RoleValue::Text),
            Role::Added => self.commit_link(node, true).map(RoleValue::Text),
            Role::Modified => self.commit_link(node, false).map(RoleValue::Text),
            Role::Status => {
                self.tree.as_ref()?.get(node)?;
                Some(RoleValue::Text(self.status(node)))
            }
        }
    }

    // ---------------------------------------------------------------
    // Mutation
    // ---------------------------------------------------------------

    /// Stage (`true`) or unstage (`false`) everything beneath `node`.
    pub fn set_check_state(&mut self, node: NodeId, checked: bool) -> ModelResult<()> {
        self.set_check_state_with(node, checked, Propagation::Apply)
    }

    /// Like [`set_check_state`](Self::set_check_state), optionally skipping
    /// the index mutation.
    ///
    /// On error nothing is emitted.
    pub fn set_check_state_with(
        &mut self,
        node: NodeId,
        checked: bool,
        mode: Propagation,
    ) -> ModelResult<()> {
        self.request(node, CheckState::from_bool(checked), mode)
    }

    fn request(&mut self, node: NodeId, value: CheckState, mode: Propagation) -> ModelResult<()> {
        let events = {
            let tree = self.tree.as_ref().ok_or(ModelError::NoChangeSet)?;
            let changes = self.changes.as_deref().ok_or(ModelError::NoChangeSet)?;
            let index = self.index.as_deref().ok_or(ModelError::NoChangeSet)?;
            self.propagator
                .set_inclusion(tree, node, changes, index, value, mode)?
        };
        for event in &events {
            self.emit(event);
        }
        Ok(())
    }

    /// Role-based setter. Only [`Role::CheckState`] is writable.
    ///
    /// Returns `Ok(false)` for read-only roles or mismatched values. Any
    /// state other than `Unchecked` counts as a request to stage; the
    /// emitted [`ModelEvent::CheckStateChanged`] carries `value` unchanged.
    pub fn set_data(&mut self, node: NodeId, role: Role, value: &RoleValue) -> ModelResult<bool> {
        match (role, value.as_check()) {
            (Role::CheckState, Some(state)) => {
                self.request(node, state, Propagation::Apply)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

fn build_tree(workdir: &str, changes: &dyn ChangeSetView) -> TreeResult<PathTree> {
    PathTree::from_paths(workdir, (0..changes.count()).filter_map(|i| changes.name(i)))
}
