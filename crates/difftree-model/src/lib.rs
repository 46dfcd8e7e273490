//! Tree model for difftree.
//!
//! Presents a change-set as a checkable folder/file tree. Inclusion state is
//! never stored: every query re-reads the change-set and the staging index,
//! so the tree can stay immutable while staging changes underneath it.
//!
//! # Key Types
//!
//! - [`DiffTreeModel`] -- Owns the tree and exposes the view-facing queries
//! - [`StateAggregator`] -- Computes a node's [`CheckState`] from its files
//! - [`ChangePropagator`] -- Applies a toggle and works out who to notify
//! - [`ModelEvent`] / [`ModelObserver`] -- Notifications to the view layer
//! - [`Role`] / [`RoleValue`] -- The closed set of per-node queries
//! - [`Decorations`] -- Injected, read-only lookups for kinds and commits
//! - [`StagedFilter`] -- Hides rows from the staged or unstaged side
//!
//! [`CheckState`]: difftree_types::CheckState

pub mod aggregate;
pub mod config;
pub mod decoration;
pub mod error;
pub mod events;
pub mod filter;
pub mod model;
pub mod propagate;
pub mod role;

pub use aggregate::{fold_states, StateAggregator};
pub use config::ModelConfig;
pub use decoration::{CommitRef, Decorations, ExtensionKinds, NoDecorations};
pub use error::{ModelError, ModelResult};
pub use events::{EventLog, ModelEvent, ModelObserver};
pub use filter::{StagedFilter, StagedSide};
pub use model::DiffTreeModel;
pub use propagate::{ChangePropagator, NotifyDepth, Propagation};
pub use role::{Role, RoleValue};
