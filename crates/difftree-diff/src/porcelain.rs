//! `git status --porcelain` (v1) input.
//!
//! Each line is `XY path`, where `X` is the index column and `Y` the
//! worktree column. Renames and copies are written `XY old -> new`; only the
//! new path is kept. Paths git wrote C-style quoted (spaces, control
//! characters, non-ASCII bytes) are unquoted, and the trailing `/` git puts on
//! an untracked directory is dropped. Parsing yields a stageable [`ChangeSet`] together with
//! the staging state each path had, so callers can seed a staging index.

use difftree_types::{segments, DeltaStatus, StagedState};
use tracing::debug;

use crate::change_set::{ChangeEntry, ChangeSet};
use crate::error::{DiffError, DiffResult};

const RENAME_ARROW: &str = " -> ";

/// One parsed porcelain line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PorcelainEntry {
    pub path: String,
    /// Index column.
    pub index: char,
    /// Worktree column.
    pub worktree: char,
}

impl PorcelainEntry {
    fn is_untracked(&self) -> bool {
        self.index == '?' && self.worktree == '?'
    }

    fn is_ignored(&self) -> bool {
        self.index == '!' && self.worktree == '!'
    }

    fn is_conflicted(&self) -> bool {
        self.index == 'U'
            || self.worktree == 'U'
            || (self.index == 'A' && self.worktree == 'A')
            || (self.index == 'D' && self.worktree == 'D')
    }

    /// Status shown for this path: the worktree column when set, otherwise
    /// the index column.
    pub fn delta_status(&self) -> DiffResult<DeltaStatus> {
        if self.is_conflicted() {
            return Ok(DeltaStatus::Conflicted);
        }
        if self.is_untracked() {
            return Ok(DeltaStatus::Untracked);
        }
        if self.is_ignored() {
            return Ok(DeltaStatus::Ignored);
        }
        let column = if self.worktree != ' ' {
            self.worktree
        } else {
            self.index
        };
        column_status(column)
    }

    /// What the index would report for this path.
    pub fn staged_state(&self) -> StagedState {
        if self.is_conflicted() {
            StagedState::Conflicted
        } else if self.is_untracked() || self.is_ignored() || self.index == ' ' {
            StagedState::Unstaged
        } else if self.worktree == ' ' {
            StagedState::Staged
        } else {
            StagedState::PartiallyStaged
        }
    }
}

fn column_status(column: char) -> DiffResult<DeltaStatus> {
    let status = match column {
        'M' => DeltaStatus::Modified,
        'A' => DeltaStatus::Added,
        'D' => DeltaStatus::Deleted,
        'R' => DeltaStatus::Renamed,
        'C' => DeltaStatus::Copied,
        'T' => DeltaStatus::Typechange,
        other => DeltaStatus::from_char(other)?,
    };
    Ok(status)
}

/// A parsed porcelain listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PorcelainStatus {
    pub entries: Vec<PorcelainEntry>,
}

impl PorcelainStatus {
    /// The stageable change-set described by the listing.
    pub fn change_set(&self) -> DiffResult<ChangeSet> {
        let entries = self
            .entries
            .iter()
            .map(|e| Ok(ChangeEntry::new(e.path.clone(), e.delta_status()?)))
            .collect::<DiffResult<Vec<_>>>()?;
        Ok(ChangeSet::status(entries))
    }

    /// `(path, state)` pairs for seeding a staging index.
    pub fn staged_states(&self) -> Vec<(String, StagedState)> {
        self.entries
            .iter()
            .map(|e| (e.path.clone(), e.staged_state()))
            .collect()
    }
}

/// Parse porcelain v1 output. Blank lines are skipped.
pub fn parse_porcelain(input: &str) -> DiffResult<PorcelainStatus> {
    let mut entries = Vec::new();
    for (number, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        entries.push(parse_line(number + 1, line)?);
    }
    debug!(entries = entries.len(), "parsed porcelain status");
    Ok(PorcelainStatus { entries })
}

fn parse_line(line_no: usize, line: &str) -> DiffResult<PorcelainEntry> {
    let parse_err = |reason: &str| DiffError::Parse {
        line: line_no,
        reason: reason.to_string(),
    };

    let mut chars = line.chars();
    let (Some(index), Some(worktree), Some(' ')) = (chars.next(), chars.next(), chars.next())
    else {
        return Err(parse_err("expected two status columns followed by a space"));
    };
    let rest = chars.as_str();
    let raw = match rest.rsplit_once(RENAME_ARROW) {
        Some((_, new_path)) if matches!(index, 'R' | 'C') => new_path,
        _ => rest,
    };
    let mut path = unquote(raw).map_err(|reason| parse_err(&reason))?;
    if path.len() > 1 && path.ends_with('/') {
        path.pop();
    }
    segments(&path).map_err(|e| parse_err(&e.to_string()))?;

    let entry = PorcelainEntry {
        path,
        index,
        worktree,
    };
    // Unknown columns fail here, not later in change_set().
    entry.delta_status().map_err(|e| parse_err(&e.to_string()))?;
    Ok(entry)
}

/// Undo git's C-style path quoting. Unquoted input is returned as is.
fn unquote(raw: &str) -> Result<String, String> {
    let Some(inner) = raw
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    else {
        return Ok(raw.to_string());
    };

    let mut bytes = Vec::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            let mut buf = [0u8; 4];
            bytes.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
            continue;
        }
        let byte = match chars.next() {
            Some('\\') => b'\\',
            Some('"') => b'"',
            Some('a') => 0x07,
            Some('b') => 0x08,
            Some('t') => b'\t',
            Some('n') => b'\n',
            Some('v') => 0x0b,
            Some('f') => 0x0c,
            Some('r') => b'\r',
            Some(first @ '0'..='3') => {
                let digits: String = std::iter::once(first).chain(chars.by_ref().take(2)).collect();
                u8::from_str_radix(&digits, 8)
                    .map_err(|_| format!("bad octal escape in quoted path: \\{digits}"))?
            }
            other => return Err(format!("bad escape in quoted path: {other:?}")),
        };
        bytes.push(byte);
    }
    String::from_utf8(bytes).map_err(|_| "quoted path is not valid UTF-8".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::ChangeSetView;

    const SAMPLE: &str = "\
M  src/staged.rs
 M src/unstaged.rs
MM src/partial.rs
?? notes/todo.txt
UU merge/conflict.rs
R  old/name.rs -> new/name.rs

A  docs/new.md
";

    #[test]
    fn parses_every_non_blank_line() {
        let status = parse_porcelain(SAMPLE).unwrap();
        assert_eq!(status.entries.len(), 7);
        assert_eq!(status.entries[5].path, "new/name.rs");
        assert_eq!(status.entries[5].index, 'R');
    }

    #[test]
    fn staged_states_follow_the_columns() {
        let status = parse_porcelain(SAMPLE).unwrap();
        let states: Vec<StagedState> = status.staged_states().into_iter().map(|(_, s)| s).collect();
        assert_eq!(
            states,
            vec![
                StagedState::Staged,
                StagedState::Unstaged,
                StagedState::PartiallyStaged,
                StagedState::Unstaged,
                StagedState::Conflicted,
                StagedState::Staged,
                StagedState::Staged,
            ]
        );
    }

    #[test]
    fn change_set_uses_worktree_column_first() {
        let cs = parse_porcelain(SAMPLE).unwrap().change_set().unwrap();
        assert!(cs.is_status_diff());
        assert_eq!(cs.status(0), Some(DeltaStatus::Modified));
        assert_eq!(cs.status(3), Some(DeltaStatus::Untracked));
        assert_eq!(cs.status(4), Some(DeltaStatus::Conflicted));
        assert_eq!(cs.status(5), Some(DeltaStatus::Renamed));
        assert_eq!(cs.status(6), Some(DeltaStatus::Added));
        assert_eq!(cs.status_summary("src"), "M");
    }

    #[test]
    fn ignored_entries_are_unstaged() {
        let status = parse_porcelain("!! target/debug\n").unwrap();
        assert_eq!(status.entries[0].delta_status().unwrap(), DeltaStatus::Ignored);
        assert_eq!(status.entries[0].staged_state(), StagedState::Unstaged);
    }

    #[test]
    fn short_or_malformed_lines_are_rejected() {
        let err = parse_porcelain("M\n").unwrap_err();
        assert!(matches!(err, DiffError::Parse { line: 1, .. }));

        let err = parse_porcelain("M  ok.rs\nMMxbad.rs\n").unwrap_err();
        assert!(matches!(err, DiffError::Parse { line: 2, .. }));

        let err = parse_porcelain("M  a//b.rs\n").unwrap_err();
        assert!(matches!(err, DiffError::Parse { line: 1, .. }));
    }

    #[test]
    fn untracked_directories_drop_the_trailing_slash() {
        let status = parse_porcelain(" M src/a.rs\n?? newdir/\n?? src/gen/\n").unwrap();
        let paths: Vec<&str> = status.entries.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["src/a.rs", "newdir", "src/gen"]);
        assert_eq!(status.entries[1].delta_status().unwrap(), DeltaStatus::Untracked);

        let cs = status.change_set().unwrap();
        assert_eq!(cs.paths_under("src"), vec!["src/a.rs", "src/gen"]);
    }

    #[test]
    fn quoted_paths_are_unquoted() {
        let input = "?? \"a b.txt\"\nR  \"old name.rs\" -> \"new name.rs\"\n M \"caf\\303\\251.txt\"\n?? \"tab\\there\"\n";
        let status = parse_porcelain(input).unwrap();
        let paths: Vec<&str> = status.entries.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["a b.txt", "new name.rs", "café.txt", "tab\there"]);
    }

    #[test]
    fn bad_quoting_is_rejected() {
        let err = parse_porcelain("?? \"bad\\qescape\"\n").unwrap_err();
        assert!(matches!(err, DiffError::Parse { line: 1, .. }));

        let err = parse_porcelain("?? \"\\377\"\n").unwrap_err();
        assert!(matches!(err, DiffError::Parse { line: 1, .. }));
    }

    #[test]
    fn unknown_status_column_is_rejected() {
        let err = parse_porcelain("Z  file.rs\n").unwrap_err();
        assert!(matches!(err, DiffError::Parse { line: 1, .. }));
    }
}
