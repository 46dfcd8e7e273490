//! The path tree arena and its construction/navigation algorithms.
//!
//! [`PathTree`] stores every node in a `Vec`; node 0 is the root and is named
//! after the repository working directory. Paths are inserted one at a time
//! and share intermediate folders with earlier paths.
//!
//! # Invariants
//!
//! - Every node except the root has exactly one parent, which was created
//!   before it (the arena is append-only, so the tree is acyclic).
//! - No two children of the same node share a name.
//! - Children keep the order in which they were first created.
//!
//! Child lookup is a linear scan over the siblings. Directory fan-out in a
//! change-set is small, and a scan keeps insertion order for free.

use difftree_types::{join_path, segments};
use tracing::debug;

use crate::error::{TreeError, TreeResult};
use crate::node::{Node, NodeId};

/// Folder/file hierarchy built from slash-delimited paths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathTree {
    nodes: Vec<Node>,
}

impl PathTree {
    /// Create a tree holding only a root named `root_name`.
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            nodes: vec![Node::new(root_name, None)],
        }
    }

    /// Build a tree from a sequence of relative paths.
    ///
    /// Fails on the first malformed path; nothing built so far is returned.
    pub fn from_paths<I, S>(root_name: impl Into<String>, paths: I) -> TreeResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = Self::new(root_name);
        let mut inserted = 0usize;
        for path in paths {
            tree.insert(path.as_ref())?;
            inserted += 1;
        }
        debug!(paths = inserted, nodes = tree.len(), "built path tree");
        Ok(tree)
    }

    /// Total number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree holds nothing but its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Look up a node by id.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Like [`get`](Self::get), but as an error.
    pub fn node(&self, id: NodeId) -> TreeResult<&Node> {
        self.get(id).ok_or(TreeError::NodeNotFound(id))
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    // ---------------------------------------------------------------
    // Construction
    // ---------------------------------------------------------------

    /// Insert a relative path and return the id of its leaf node.
    ///
    /// Existing nodes along the path are reused, so inserting the same path
    /// twice is a no-op that returns the same id. The path is validated
    /// before any node is created.
    pub fn insert(&mut self, path: &str) -> TreeResult<NodeId> {
        let parts = segments(path)?;
        let mut current = NodeId::ROOT;
        for part in parts {
            current = match self.child_named(current, part) {
                Some(existing) => existing,
                None => self.push_child(current, part),
            };
        }
        Ok(current)
    }

    fn push_child(&mut self, parent: NodeId, name: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(name, Some(parent)));
        self.nodes[parent.0].children.push(id);
        id
    }

    // ---------------------------------------------------------------
    // Navigation
    // ---------------------------------------------------------------

    /// The child of `id` whose name is `name`.
    pub fn child_named(&self, id: NodeId, name: &str) -> Option<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .find(|child| self.nodes[child.0].name == name)
    }

    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.get(id).map(Node::name)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(Node::parent)
    }

    /// Children of `id` in insertion order; empty for unknown ids.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(Node::children).unwrap_or(&[])
    }

    pub fn has_children(&self, id: NodeId) -> bool {
        !self.children(id).is_empty()
    }

    /// The child of `id` at position `row`.
    pub fn child(&self, id: NodeId, row: usize) -> Option<NodeId> {
        self.children(id).get(row).copied()
    }

    /// Position of `id` among its siblings. `None` for the root.
    pub fn row(&self, id: NodeId) -> Option<usize> {
        let parent = self.parent(id)?;
        self.children(parent).iter().position(|c| *c == id)
    }

    /// Number of edges between `id` and the root.
    pub fn depth(&self, id: NodeId) -> Option<usize> {
        self.get(id)?;
        Some(self.ancestors(id).len())
    }

    /// Strict ancestors of `id`, nearest first, ending with the root.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut current = self.parent(id);
        while let Some(ancestor) = current {
            result.push(ancestor);
            current = self.parent(ancestor);
        }
        result
    }

    /// All descendants of `id` in pre-order, excluding `id` itself.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            result.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        result
    }

    /// Nodes without children, in pre-order. The root counts when empty.
    pub fn leaves(&self) -> Vec<NodeId> {
        if self.is_empty() {
            return vec![NodeId::ROOT];
        }
        self.descendants(NodeId::ROOT)
            .into_iter()
            .filter(|id| !self.has_children(*id))
            .collect()
    }

    /// Full path of `id`.
    ///
    /// The absolute form starts with the root's name (the working directory).
    /// The relative form omits it; the root's relative path is `""`.
    pub fn path(&self, id: NodeId, relative: bool) -> Option<String> {
        let node = self.get(id)?;
        let mut names: Vec<&str> = Vec::new();
        let mut current = Some(id);
        while let Some(step) = current {
            let step_node = &self.nodes[step.0];
            if step_node.parent.is_none() {
                break;
            }
            names.push(&step_node.name);
            current = step_node.parent;
        }
        names.reverse();
        let rel = names.join("/");
        if relative {
            return Some(rel);
        }
        if node.is_root() {
            return Some(node.name.clone());
        }
        Some(join_path(&self.nodes[0].name, &rel))
    }

    /// Find the node for a relative path. `""` finds the root.
    pub fn find(&self, path: &str) -> Option<NodeId> {
        if path.is_empty() {
            return Some(NodeId::ROOT);
        }
        let parts = segments(path).ok()?;
        let mut current = NodeId::ROOT;
        for part in parts {
            current = self.child_named(current, part)?;
        }
        Some(current)
    }
}
