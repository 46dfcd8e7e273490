use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::decoration::ExtensionKinds;
use crate::error::{ModelError, ModelResult};
use crate::propagate::NotifyDepth;

/// Configuration for [`DiffTreeModel`](crate::DiffTreeModel).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// How far below a toggled node change notifications reach.
    pub notify_depth: NotifyDepth,
    /// Extra kind labels by file extension, layered over the built-ins.
    pub kinds: BTreeMap<String, String>,
}

impl ModelConfig {
    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(input: &str) -> ModelResult<Self> {
        toml::from_str(input).map_err(|e| ModelError::Config(e.to_string()))
    }

    /// Built-in kind labels with [`kinds`](Self::kinds) applied on top.
    pub fn extension_kinds(&self) -> ExtensionKinds {
        let mut kinds = ExtensionKinds::default();
        kinds.extend(self.kinds.iter().map(|(k, v)| (k.as_str(), v.clone())));
        kinds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoration::Decorations;

    #[test]
    fn default_config() {
        let c = ModelConfig::default();
        assert_eq!(c.notify_depth, NotifyDepth::DirectChildren);
        assert!(c.kinds.is_empty());
    }

    #[test]
    fn parses_toml() {
        let c = ModelConfig::from_toml_str(
            r#"
            notify_depth = "recursive"

            [kinds]
            qml = "QML"
            rs = "Rust source"
            "#,
        )
        .unwrap();
        assert_eq!(c.notify_depth, NotifyDepth::Recursive);
        let kinds = c.extension_kinds();
        assert_eq!(kinds.kind("main.qml").as_deref(), Some("QML"));
        assert_eq!(kinds.kind("lib.rs").as_deref(), Some("Rust source"));
        assert_eq!(kinds.kind("notes.md").as_deref(), Some("Markdown"));
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(ModelConfig::from_toml_str("").unwrap(), ModelConfig::default());
    }

    #[test]
    fn rejects_unknown_depth() {
        let err = ModelConfig::from_toml_str("notify_depth = \"sideways\"").unwrap_err();
        assert!(matches!(err, ModelError::Config(_)));
    }
}
