//! Change-set view for difftree.
//!
//! A change-set is the ordered list of paths a version-control diff reports,
//! each with a single-character status. The tree model only ever reads it
//! through the [`ChangeSetView`] trait.
//!
//! # Key Types
//!
//! - [`ChangeSetView`] -- Read-only enumeration plus prefix queries
//! - [`ChangeSet`] / [`ChangeEntry`] -- In-memory change-set
//! - [`ChangeSetKind`] -- Whether the change-set supports staging
//! - [`parse_porcelain`] / [`PorcelainEntry`] -- `git status --porcelain` input

pub mod change_set;
pub mod error;
pub mod porcelain;
pub mod view;

pub use change_set::{ChangeEntry, ChangeSet, ChangeSetKind};
pub use error::{DiffError, DiffResult};
pub use porcelain::{parse_porcelain, PorcelainEntry, PorcelainStatus};
pub use view::ChangeSetView;
