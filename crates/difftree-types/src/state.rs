//! Staging and inclusion states.
//!
//! [`StagedState`] is what the staging index reports for a single file.
//! [`CheckState`] is the derived inclusion state of a tree node; folders
//! aggregate it from the files beneath them. Neither is ever stored on a
//! tree node.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Staging status of one file in the index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StagedState {
    /// The index cannot stage this path at all.
    Disabled,
    /// No changes staged.
    Unstaged,
    /// Some hunks staged, others not.
    PartiallyStaged,
    /// All changes staged.
    Staged,
    /// Unresolved merge conflict.
    Conflicted,
}

impl StagedState {
    /// Returns `true` only for a fully staged file.
    pub fn is_staged(&self) -> bool {
        matches!(self, Self::Staged)
    }
}

impl fmt::Display for StagedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Disabled => "disabled",
            Self::Unstaged => "unstaged",
            Self::PartiallyStaged => "partially staged",
            Self::Staged => "staged",
            Self::Conflicted => "conflicted",
        };
        write!(f, "{s}")
    }
}

/// Tri-state inclusion of a tree node.
///
/// The fourth, "undetermined" state is modelled as `Option::None` by the
/// query layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckState {
    Unchecked,
    PartiallyChecked,
    Checked,
}

impl CheckState {
    /// `true` maps to `Checked`, `false` to `Unchecked`.
    pub fn from_bool(checked: bool) -> Self {
        if checked {
            Self::Checked
        } else {
            Self::Unchecked
        }
    }

    /// Returns `true` if at least part of the node is included.
    pub fn is_any_checked(&self) -> bool {
        !matches!(self, Self::Unchecked)
    }

    /// Returns `true` if at least part of the node is excluded.
    pub fn is_any_unchecked(&self) -> bool {
        !matches!(self, Self::Checked)
    }
}

impl fmt::Display for CheckState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Unchecked => "unchecked",
            Self::PartiallyChecked => "partially checked",
            Self::Checked => "checked",
        };
        write!(f, "{s}")
    }
}
