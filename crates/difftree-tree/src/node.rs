//! Tree node types.
//!
//! A [`Node`] is one path segment. Children are listed in the order in which
//! a path through them was first inserted; the parent is a non-owning
//! [`NodeId`] back-reference into the same arena.

use std::fmt;

/// Index of a node inside its [`PathTree`](crate::PathTree) arena.
///
/// Ids are only meaningful for the tree that issued them. Rebuilding the tree
/// invalidates every id handed out before.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root node of every tree.
    pub const ROOT: NodeId = NodeId(0);

    /// Raw arena index.
    pub fn index(&self) -> usize {
        self.0
    }

    /// Returns `true` for the root id.
    pub fn is_root(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n#{}", self.0)
    }
}

/// A single folder or file in the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub(crate) name: String,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    pub(crate) fn new(name: impl Into<String>, parent: Option<NodeId>) -> Self {
        Self {
            name: name.into(),
            parent,
            children: Vec::new(),
        }
    }

    /// The node's own segment (the working directory for the root).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The owning node, `None` only for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in first-insertion order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Returns `true` if this node has no parent.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
