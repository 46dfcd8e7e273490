//! Index entry types for tracked paths.

use difftree_types::StagedState;
use serde::{Deserialize, Serialize};

/// An entry in the staging index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// Relative path from the workdir root.
    pub path: String,
    /// Status flags for this entry.
    pub flags: IndexFlags,
}

impl IndexEntry {
    /// Create an unstaged entry.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            flags: IndexFlags::default(),
        }
    }

    /// Create an entry whose flags reproduce `state`.
    ///
    /// `Disabled` is a property of the whole index and maps to an unstaged
    /// entry.
    pub fn with_state(path: impl Into<String>, state: StagedState) -> Self {
        let mut entry = Self::new(path);
        entry.flags = IndexFlags::from_state(state);
        entry
    }

    /// The status this entry reports.
    pub fn state(&self) -> StagedState {
        self.flags.state()
    }
}

/// Status flags for an index entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexFlags {
    /// Whether changes to the file are staged.
    pub staged: bool,
    /// Whether the worktree has further unstaged changes on top of the
    /// staged ones.
    pub partial: bool,
    /// Whether the file is in a conflict state.
    pub conflict: bool,
}

impl IndexFlags {
    fn from_state(state: StagedState) -> Self {
        match state {
            StagedState::Disabled | StagedState::Unstaged => Self::default(),
            StagedState::Staged => Self {
                staged: true,
                ..Self::default()
            },
            StagedState::PartiallyStaged => Self {
                staged: true,
                partial: true,
                ..Self::default()
            },
            StagedState::Conflicted => Self {
                conflict: true,
                ..Self::default()
            },
        }
    }

    fn state(&self) -> StagedState {
        if self.conflict {
            StagedState::Conflicted
        } else if self.staged && self.partial {
            StagedState::PartiallyStaged
        } else if self.staged {
            StagedState::Staged
        } else {
            StagedState::Unstaged
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_entry_is_unstaged() {
        let entry = IndexEntry::new("a.txt");
        assert_eq!(entry.flags, IndexFlags::default());
        assert_eq!(entry.state(), StagedState::Unstaged);
    }

    #[test]
    fn with_state_reproduces_the_state() {
        for state in [
            StagedState::Unstaged,
            StagedState::Staged,
            StagedState::PartiallyStaged,
            StagedState::Conflicted,
        ] {
            assert_eq!(IndexEntry::with_state("f", state).state(), state);
        }
    }

    #[test]
    fn disabled_entry_falls_back_to_unstaged() {
        let entry = IndexEntry::with_state("f", StagedState::Disabled);
        assert_eq!(entry.state(), StagedState::Unstaged);
    }
}
