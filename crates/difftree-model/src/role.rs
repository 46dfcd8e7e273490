//! The closed set of per-node queries.

use std::fmt;

use difftree_types::CheckState;

/// What a view asks of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// The node's own name.
    Display,
    /// Path relative to the working directory.
    Edit,
    /// Absolute path.
    ToolTip,
    /// Aggregate inclusion state.
    CheckState,
    /// File kind label, or "Submodule".
    Kind,
    /// Link to the commit that first added the path.
    Added,
    /// Link to the commit that last modified the path.
    Modified,
    /// Distinct status codes beneath the node.
    Status,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 8] = [
        Role::Display,
        Role::Edit,
        Role::ToolTip,
        Role::CheckState,
        Role::Kind,
        Role::Added,
        Role::Modified,
        Role::Status,
    ];
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Display => "display",
            Self::Edit => "edit",
            Self::ToolTip => "tooltip",
            Self::CheckState => "check-state",
            Self::Kind => "kind",
            Self::Added => "added",
            Self::Modified => "modified",
            Self::Status => "status",
        };
        write!(f, "{s}")
    }
}

/// The answer to a [`Role`] query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoleValue {
    Text(String),
    Check(CheckState),
}

impl RoleValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Check(_) => None,
        }
    }

    pub fn as_check(&self) -> Option<CheckState> {
        match self {
            Self::Check(state) => Some(*state),
            Self::Text(_) => None,
        }
    }
}

impl From<String> for RoleValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<CheckState> for RoleValue {
    fn from(state: CheckState) -> Self {
        Self::Check(state)
    }
}
