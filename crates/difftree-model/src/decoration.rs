//! Read-only decoration lookups injected into the model.
//!
//! Kinds, submodule detection, and commit history are cosmetic. The model
//! asks a [`Decorations`] implementation for them instead of reaching for
//! process-wide settings or a repository handle.

use std::collections::BTreeMap;

/// A commit reference rendered as a link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommitRef {
    /// Full commit id.
    pub id: String,
    /// Abbreviated id shown as link text.
    pub short_id: String,
}

impl CommitRef {
    pub fn new(id: impl Into<String>, short_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            short_id: short_id.into(),
        }
    }

    /// `<a href='id:<id>'><short id></a>`
    pub fn link(&self) -> String {
        format!("<a href='id:{}'>{}</a>", self.id, self.short_id)
    }
}

/// Cosmetic per-node lookups.
///
/// Every method has a neutral default so implementations only provide what
/// they know.
pub trait Decorations {
    /// Kind label for a node name (e.g. "Rust").
    fn kind(&self, _name: &str) -> Option<String> {
        None
    }

    /// Whether the relative path is a submodule.
    fn is_submodule(&self, _path: &str) -> bool {
        false
    }

    /// Oldest commit touching the relative path.
    fn first_commit(&self, _path: &str) -> Option<CommitRef> {
        None
    }

    /// Newest commit touching the relative path.
    fn last_commit(&self, _path: &str) -> Option<CommitRef> {
        None
    }
}

/// Decorations that know nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDecorations;

impl Decorations for NoDecorations {}

/// Kind labels keyed by lowercase file extension.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtensionKinds {
    kinds: BTreeMap<String, String>,
}

impl ExtensionKinds {
    /// An empty table.
    pub fn empty() -> Self {
        Self {
            kinds: BTreeMap::new(),
        }
    }

    /// Add or replace labels. Extensions are matched case-insensitively.
    pub fn extend<I, K, V>(&mut self, kinds: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (ext, label) in kinds {
            self.kinds
                .insert(ext.as_ref().trim_start_matches('.').to_lowercase(), label.into());
        }
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl Default for ExtensionKinds {
    fn default() -> Self {
        let mut kinds = Self::empty();
        kinds.extend([
            ("rs", "Rust"),
            ("toml", "TOML"),
            ("md", "Markdown"),
            ("txt", "Text"),
            ("json", "JSON"),
            ("yaml", "YAML"),
            ("yml", "YAML"),
            ("c", "C"),
            ("h", "C"),
            ("cpp", "C++"),
            ("hpp", "C++"),
            ("py", "Python"),
            ("sh", "Shell"),
        ]);
        kinds
    }
}

impl Decorations for ExtensionKinds {
    fn kind(&self, name: &str) -> Option<String> {
        let (_, ext) = name.rsplit_once('.')?;
        self.kinds.get(&ext.to_lowercase()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_link_format() {
        let commit = CommitRef::new("0123456789abcdef", "0123456");
        assert_eq!(commit.link(), "<a href='id:0123456789abcdef'>0123456</a>");
    }

    #[test]
    fn no_decorations_is_neutral() {
        let d = NoDecorations;
        assert_eq!(d.kind("main.rs"), None);
        assert!(!d.is_submodule("vendor/lib"));
        assert_eq!(d.first_commit("main.rs"), None);
        assert_eq!(d.last_commit("main.rs"), None);
    }

    #[test]
    fn extension_kinds_match_case_insensitively() {
        let kinds = ExtensionKinds::default();
        assert_eq!(kinds.kind("main.rs").as_deref(), Some("Rust"));
        assert_eq!(kinds.kind("README.MD").as_deref(), Some("Markdown"));
        assert_eq!(kinds.kind("Makefile"), None);
        assert_eq!(kinds.kind("archive.xyz"), None);
    }

    #[test]
    fn extend_overrides_and_strips_dots() {
        let mut kinds = ExtensionKinds::empty();
        assert!(kinds.is_empty());
        kinds.extend([(".RS", "Rust source")]);
        kinds.extend([("rs", "Rust")]);
        assert_eq!(kinds.len(), 1);
        assert_eq!(kinds.kind("lib.rs").as_deref(), Some("Rust"));
    }
}
