//! Path tree for difftree.
//!
//! Turns a flat list of changed paths into a folder/file hierarchy. Nodes
//! live in an arena owned by [`PathTree`]; parent links are plain
//! [`NodeId`] back-references, so the tree has a single ownership edge per
//! node and is dropped in one piece.

pub mod error;
pub mod node;
pub mod tree;

pub use error::{TreeError, TreeResult};
pub use node::{Node, NodeId};
pub use tree::PathTree;
