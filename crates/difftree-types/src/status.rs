//! Per-path delta status and its single-character code.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// The kind of change recorded for a path in a change-set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeltaStatus {
    Unmodified,
    Added,
    Deleted,
    Modified,
    Renamed,
    Copied,
    Ignored,
    Untracked,
    Typechange,
    Unreadable,
    Conflicted,
}

impl DeltaStatus {
    /// Single-character code shown in status summaries.
    pub fn status_char(&self) -> char {
        match self {
            Self::Unmodified => ' ',
            Self::Added => 'A',
            Self::Deleted => 'D',
            Self::Modified => 'M',
            Self::Renamed => 'R',
            Self::Copied => 'C',
            Self::Ignored => 'I',
            Self::Untracked => '?',
            Self::Typechange => 'T',
            Self::Unreadable => 'X',
            Self::Conflicted => '!',
        }
    }

    /// Inverse of [`status_char`](Self::status_char).
    pub fn from_char(ch: char) -> Result<Self, TypeError> {
        let status = match ch {
            ' ' => Self::Unmodified,
            'A' => Self::Added,
            'D' => Self::Deleted,
            'M' => Self::Modified,
            'R' => Self::Renamed,
            'C' => Self::Copied,
            'I' => Self::Ignored,
            '?' => Self::Untracked,
            'T' => Self::Typechange,
            'X' => Self::Unreadable,
            '!' => Self::Conflicted,
            other => return Err(TypeError::UnknownStatus(other)),
        };
        Ok(status)
    }
}

impl fmt::Display for DeltaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.status_char())
    }
}
