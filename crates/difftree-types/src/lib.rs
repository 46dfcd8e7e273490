//! Foundation types for difftree.
//!
//! This crate provides the shared vocabulary used throughout the difftree
//! workspace. Every other difftree crate depends on `difftree-types`.
//!
//! # Key Types
//!
//! - [`StagedState`] -- Staging status of a single file as reported by the index
//! - [`CheckState`] -- Tri-state inclusion of a tree node (file or folder)
//! - [`DeltaStatus`] -- Kind of change recorded for a path in a change-set
//! - [`path`] -- Segment-aware helpers for slash-delimited repository paths

pub mod error;
pub mod path;
pub mod state;
pub mod status;

pub use error::TypeError;
pub use path::{contains_path, join_path, segments, SEPARATOR};
pub use state::{CheckState, StagedState};
pub use status::DeltaStatus;
