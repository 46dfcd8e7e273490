//! Staging bridge for difftree.
//!
//! The tree model never owns staging state. It asks a [`StagingBridge`] what
//! a path's status is and asks it to stage or unstage batches of paths.
//!
//! # Key Types
//!
//! - [`StagingBridge`] -- The narrow interface to a staging index
//! - [`InMemoryIndex`] -- BTreeMap-backed implementation for tests and the CLI
//! - [`IndexEntry`] / [`IndexFlags`] -- A tracked path and its flags

pub mod bridge;
pub mod entry;
pub mod error;
pub mod index;

pub use bridge::StagingBridge;
pub use entry::{IndexEntry, IndexFlags};
pub use error::{IndexError, IndexResult};
pub use index::InMemoryIndex;
