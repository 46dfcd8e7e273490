//! Slash-delimited repository paths.
//!
//! Change-set paths are always relative to the working directory and use `/`
//! regardless of platform. Prefix tests here work on whole segments, so
//! `"abc"` is never considered to live under `"ab"`.

use crate::error::TypeError;

/// Separator between path segments.
pub const SEPARATOR: char = '/';

/// Split a relative path into its segments.
///
/// Rejects the empty path and paths with empty segments (leading, trailing,
/// or doubled separators).
pub fn segments(path: &str) -> Result<Vec<&str>, TypeError> {
    if path.is_empty() {
        return Err(TypeError::EmptyPath);
    }
    let parts: Vec<&str> = path.split(SEPARATOR).collect();
    if parts.iter().any(|s| s.is_empty()) {
        return Err(TypeError::EmptySegment(path.to_string()));
    }
    Ok(parts)
}

/// Returns `true` if `path` equals `prefix` or lies beneath it.
///
/// The empty prefix contains every path.
pub fn contains_path(path: &str, prefix: &str) -> bool {
    if prefix.is_empty() {
        return true;
    }
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with(SEPARATOR),
        None => false,
    }
}

/// Join `relative` onto `base` with a single separator.
///
/// A base made only of separators is the filesystem root.
pub fn join_path(base: &str, relative: &str) -> String {
    let trimmed = base.trim_end_matches(SEPARATOR);
    if trimmed.is_empty() && !base.is_empty() {
        return format!("{SEPARATOR}{relative}");
    }
    let base = trimmed;
    match (base.is_empty(), relative.is_empty()) {
        (_, true) => base.to_string(),
        (true, false) => relative.to_string(),
        (false, false) => format!("{base}{SEPARATOR}{relative}"),
    }
}
