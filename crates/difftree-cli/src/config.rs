use std::path::Path;

use anyhow::Context;
use difftree_model::ModelConfig;
use serde::{Deserialize, Serialize};

/// Settings read from the `--config` file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Name given to the root node and prefix of absolute paths.
    pub workdir: String,
    pub model: ModelConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            workdir: ".".into(),
            model: ModelConfig::default(),
        }
    }
}

impl CliConfig {
    /// Load from `path`, or the defaults when no file is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use difftree_model::NotifyDepth;
    use std::io::Write;

    #[test]
    fn default_config() {
        let c = CliConfig::load(None).unwrap();
        assert_eq!(c.workdir, ".");
        assert_eq!(c.model.notify_depth, NotifyDepth::DirectChildren);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "workdir = \"/home/me/project\"\n\n[model]\nnotify_depth = \"recursive\"\n\n[model.kinds]\nqml = \"QML\""
        )
        .unwrap();

        let c = CliConfig::load(Some(file.path())).unwrap();
        assert_eq!(c.workdir, "/home/me/project");
        assert_eq!(c.model.notify_depth, NotifyDepth::Recursive);
        assert_eq!(c.model.kinds.get("qml").map(String::as_str), Some("QML"));
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "workdir = \"repo\"").unwrap();
        let c = CliConfig::load(Some(file.path())).unwrap();
        assert_eq!(c.workdir, "repo");
        assert_eq!(c.model, ModelConfig::default());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CliConfig::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("reading config"));
    }
}
