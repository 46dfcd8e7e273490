//! In-memory staging index.
//!
//! [`InMemoryIndex`] keeps a `BTreeMap` of path to [`IndexEntry`] behind a
//! `RwLock`. Paths it has never seen report [`StagedState::Unstaged`], so
//! a fresh index behaves like a working tree with nothing staged.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use difftree_types::StagedState;
use tracing::debug;

use crate::bridge::StagingBridge;
use crate::entry::IndexEntry;
use crate::error::{IndexError, IndexResult};

#[derive(Debug, Default)]
struct IndexState {
    entries: BTreeMap<String, IndexEntry>,
    locked: bool,
    disabled: bool,
}

/// An in-memory implementation of [`StagingBridge`].
#[derive(Debug, Default)]
pub struct InMemoryIndex {
    state: RwLock<IndexState>,
}

impl InMemoryIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an index seeded with `(path, state)` pairs.
    pub fn from_states<I, S>(states: I) -> Self
    where
        I: IntoIterator<Item = (S, StagedState)>,
        S: Into<String>,
    {
        let entries = states
            .into_iter()
            .map(|(path, state)| {
                let entry = IndexEntry::with_state(path, state);
                (entry.path.clone(), entry)
            })
            .collect();
        Self {
            state: RwLock::new(IndexState {
                entries,
                ..IndexState::default()
            }),
        }
    }

    /// Record `state` for `path`, replacing any previous entry.
    pub fn track(&self, path: impl Into<String>, state: StagedState) -> IndexResult<()> {
        let entry = IndexEntry::with_state(path, state);
        let mut guard = self.write()?;
        guard.entries.insert(entry.path.clone(), entry);
        Ok(())
    }

    /// Get a copy of the entry for `path`.
    pub fn get(&self, path: &str) -> Option<IndexEntry> {
        self.read().entries.get(path).cloned()
    }

    /// Number of tracked entries.
    pub fn len(&self) -> usize {
        self.read().entries.len()
    }

    /// Returns `true` if no entries are tracked.
    pub fn is_empty(&self) -> bool {
        self.read().entries.is_empty()
    }

    /// Paths currently fully or partially staged, sorted.
    pub fn staged_paths(&self) -> Vec<String> {
        self.read()
            .entries
            .values()
            .filter(|e| e.flags.staged)
            .map(|e| e.path.clone())
            .collect()
    }

    /// While locked, [`set_staged`](StagingBridge::set_staged) fails with
    /// [`IndexError::Locked`].
    pub fn set_locked(&self, locked: bool) -> IndexResult<()> {
        self.write()?.locked = locked;
        Ok(())
    }

    /// While disabled, every path reports [`StagedState::Disabled`] and
    /// staging fails.
    pub fn set_disabled(&self, disabled: bool) -> IndexResult<()> {
        self.write()?.disabled = disabled;
        Ok(())
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, IndexState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> IndexResult<std::sync::RwLockWriteGuard<'_, IndexState>> {
        self.state
            .write()
            .map_err(|e| IndexError::Poisoned(e.to_string()))
    }
}

impl StagingBridge for InMemoryIndex {
    fn status_of(&self, path: &str) -> StagedState {
        let state = self.read();
        if state.disabled {
            return StagedState::Disabled;
        }
        state
            .entries
            .get(path)
            .map(IndexEntry::state)
            .unwrap_or(StagedState::Unstaged)
    }

    fn set_staged(&self, paths: &[String], staged: bool) -> IndexResult<()> {
        let mut state = self.write()?;
        if state.locked {
            return Err(IndexError::Locked);
        }
        if state.disabled {
            return Err(IndexError::Disabled);
        }
        if let Some(bad) = paths.iter().find(|p| p.is_empty()) {
            return Err(IndexError::InvalidPath(bad.clone()));
        }

        for path in paths {
            let entry = state
                .entries
                .entry(path.clone())
                .or_insert_with(|| IndexEntry::new(path.clone()));
            entry.flags.staged = staged;
            entry.flags.partial = false;
            if staged {
                // Staging a conflicted file marks it resolved.
                entry.flags.conflict = false;
            }
        }

        debug!(paths = paths.len(), staged, "updated staging index");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(list: &[&str]) -> Vec<String> {
        list.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn unknown_paths_are_unstaged() {
        let idx = InMemoryIndex::new();
        assert!(idx.is_empty());
        assert_eq!(idx.status_of("never/seen.txt"), StagedState::Unstaged);
    }

    #[test]
    fn from_states_seeds_entries() {
        let idx = InMemoryIndex::from_states([
            ("a.txt", StagedState::Staged),
            ("b.txt", StagedState::PartiallyStaged),
            ("c.txt", StagedState::Conflicted),
        ]);
        assert_eq!(idx.len(), 3);
        assert_eq!(idx.status_of("a.txt"), StagedState::Staged);
        assert_eq!(idx.status_of("b.txt"), StagedState::PartiallyStaged);
        assert_eq!(idx.status_of("c.txt"), StagedState::Conflicted);
        assert_eq!(idx.staged_paths(), paths(&["a.txt", "b.txt"]));
    }

    #[test]
    fn set_staged_stages_and_unstages() {
        let idx = InMemoryIndex::new();
        idx.set_staged(&paths(&["a.txt", "dir/b.txt"]), true).unwrap();
        assert_eq!(idx.status_of("a.txt"), StagedState::Staged);
        assert_eq!(idx.status_of("dir/b.txt"), StagedState::Staged);

        idx.set_staged(&paths(&["a.txt"]), false).unwrap();
        assert_eq!(idx.status_of("a.txt"), StagedState::Unstaged);
        assert_eq!(idx.status_of("dir/b.txt"), StagedState::Staged);
    }

    #[test]
    fn staging_clears_partial_and_conflict() {
        let idx = InMemoryIndex::from_states([
            ("p.txt", StagedState::PartiallyStaged),
            ("c.txt", StagedState::Conflicted),
        ]);
        idx.set_staged(&paths(&["p.txt", "c.txt"]), true).unwrap();
        assert_eq!(idx.status_of("p.txt"), StagedState::Staged);
        assert_eq!(idx.status_of("c.txt"), StagedState::Staged);
    }

    #[test]
    fn unstaging_keeps_conflicts() {
        let idx = InMemoryIndex::from_states([("c.txt", StagedState::Conflicted)]);
        idx.set_staged(&paths(&["c.txt"]), false).unwrap();
        assert_eq!(idx.status_of("c.txt"), StagedState::Conflicted);
    }

    #[test]
    fn locked_index_rejects_mutation_and_changes_nothing() {
        let idx = InMemoryIndex::from_states([("a.txt", StagedState::Unstaged)]);
        idx.set_locked(true).unwrap();
        let result = idx.set_staged(&paths(&["a.txt", "b.txt"]), true);
        assert!(matches!(result, Err(IndexError::Locked)));
        assert_eq!(idx.status_of("a.txt"), StagedState::Unstaged);
        assert!(idx.get("b.txt").is_none());

        idx.set_locked(false).unwrap();
        idx.set_staged(&paths(&["a.txt"]), true).unwrap();
        assert_eq!(idx.status_of("a.txt"), StagedState::Staged);
    }

    #[test]
    fn invalid_path_rejects_the_whole_batch() {
        let idx = InMemoryIndex::new();
        let result = idx.set_staged(&paths(&["ok.txt", ""]), true);
        assert!(matches!(result, Err(IndexError::InvalidPath(_))));
        assert_eq!(idx.status_of("ok.txt"), StagedState::Unstaged);
        assert!(idx.is_empty());
    }

    #[test]
    fn disabled_index_reports_disabled_everywhere() {
        let idx = InMemoryIndex::from_states([("a.txt", StagedState::Staged)]);
        idx.set_disabled(true).unwrap();
        assert_eq!(idx.status_of("a.txt"), StagedState::Disabled);
        assert_eq!(idx.status_of("other"), StagedState::Disabled);
        assert!(matches!(
            idx.set_staged(&paths(&["a.txt"]), false),
            Err(IndexError::Disabled)
        ));
    }

    #[test]
    fn track_replaces_entries() {
        let idx = InMemoryIndex::new();
        idx.track("a.txt", StagedState::Staged).unwrap();
        idx.track("a.txt", StagedState::PartiallyStaged).unwrap();
        assert_eq!(idx.len(), 1);
        assert_eq!(idx.get("a.txt").unwrap().state(), StagedState::PartiallyStaged);
    }
}
