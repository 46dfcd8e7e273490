//! In-memory change-set.

use difftree_types::DeltaStatus;
use serde::{Deserialize, Serialize};

use crate::view::ChangeSetView;

/// What a change-set compares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeSetKind {
    /// Working tree against the index. Entries can be staged.
    Status,
    /// Two committed trees. Read-only.
    Tree,
}

/// A single changed path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEntry {
    /// Path relative to the working directory.
    pub path: String,
    pub status: DeltaStatus,
}

impl ChangeEntry {
    /// Create a new entry.
    pub fn new(path: impl Into<String>, status: DeltaStatus) -> Self {
        Self {
            path: path.into(),
            status,
        }
    }
}

/// An ordered, owned change-set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSet {
    kind: ChangeSetKind,
    entries: Vec<ChangeEntry>,
    valid: bool,
}

impl ChangeSet {
    /// A valid change-set of the given kind.
    pub fn new(kind: ChangeSetKind, entries: Vec<ChangeEntry>) -> Self {
        Self {
            kind,
            entries,
            valid: true,
        }
    }

    /// A stageable working-tree change-set.
    pub fn status(entries: Vec<ChangeEntry>) -> Self {
        Self::new(ChangeSetKind::Status, entries)
    }

    /// A read-only tree-to-tree change-set.
    pub fn tree(entries: Vec<ChangeEntry>) -> Self {
        Self::new(ChangeSetKind::Tree, entries)
    }

    /// A change-set that failed to load.
    pub fn invalid() -> Self {
        Self {
            kind: ChangeSetKind::Status,
            entries: Vec::new(),
            valid: false,
        }
    }

    pub fn kind(&self) -> ChangeSetKind {
        self.kind
    }

    pub fn entries(&self) -> &[ChangeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ChangeSetView for ChangeSet {
    fn is_valid(&self) -> bool {
        self.valid
    }

    fn is_status_diff(&self) -> bool {
        self.kind == ChangeSetKind::Status
    }

    fn count(&self) -> usize {
        self.entries.len()
    }

    fn name(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|e| e.path.as_str())
    }

    fn status(&self, index: usize) -> Option<DeltaStatus> {
        self.entries.get(index).map(|e| e.status)
    }
}
