use std::io::IsTerminal;
use std::sync::Arc;

use anyhow::Context;
use colored::Colorize;
use difftree_diff::parse_porcelain;
use difftree_index::InMemoryIndex;
use difftree_model::{DiffTreeModel, StagedFilter};
use difftree_tree::NodeId;
use tracing::debug;

use crate::cli::*;
use crate::config::CliConfig;
use crate::render;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::load(cli.config.as_deref())?;
    let color = cli.format == OutputFormat::Text && std::io::stdout().is_terminal();
    let output = match &cli.command {
        Command::Tree(args) => cmd_tree(&cli.input, &config, args, cli.format, color)?,
        Command::State(args) => cmd_state(&cli.input, &config, args, cli.format, color)?,
        Command::Config(_) => cmd_config(&config, cli.format)?,
    };
    print!("{output}");
    Ok(())
}

fn read_input(source: &str) -> anyhow::Result<String> {
    if source == "-" {
        return std::io::read_to_string(std::io::stdin()).context("reading stdin");
    }
    std::fs::read_to_string(source).with_context(|| format!("reading {source}"))
}

fn load_model(source: &str, config: &CliConfig) -> anyhow::Result<DiffTreeModel> {
    let text = read_input(source)?;
    let status = parse_porcelain(&text).context("parsing porcelain status")?;
    let index = Arc::new(InMemoryIndex::from_states(status.staged_states()));
    let mut model = DiffTreeModel::with_config(&config.workdir, &config.model);
    model.set_change_set(Arc::new(status.change_set()?), index)?;
    debug!(entries = status.entries.len(), workdir = %config.workdir, "loaded change-set");
    Ok(model)
}

fn lookup(model: &DiffTreeModel, path: &str) -> anyhow::Result<NodeId> {
    let path = match path.trim_matches('/') {
        "." => "",
        trimmed => trimmed,
    };
    model
        .find(path)
        .with_context(|| format!("path not in change-set: {path}"))
}

fn cmd_tree(
    source: &str,
    config: &CliConfig,
    args: &TreeArgs,
    format: OutputFormat,
    color: bool,
) -> anyhow::Result<String> {
    let mut model = load_model(source, config)?;
    for path in &args.stage {
        let node = lookup(&model, path)?;
        model
            .set_check_state(node, true)
            .with_context(|| format!("staging {path}"))?;
    }
    for path in &args.unstage {
        let node = lookup(&model, path)?;
        model
            .set_check_state(node, false)
            .with_context(|| format!("unstaging {path}"))?;
    }

    let filter = args.only.map(|side| match side {
        Side::Staged => StagedFilter::staged(),
        Side::Unstaged => StagedFilter::unstaged(),
    });

    match format {
        OutputFormat::Text => {
            let rows = render::rows(&model, filter);
            if rows.is_empty() {
                return Ok("No changes.\n".into());
            }
            let mut out = String::new();
            for row in rows {
                out.push_str(&row.format(color));
                out.push('\n');
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let root = model.root().context("no change-set attached")?;
            let view = render::node_view(&model, root, filter);
            Ok(serde_json::to_string_pretty(&view)? + "\n")
        }
    }
}

fn cmd_state(
    source: &str,
    config: &CliConfig,
    args: &StateArgs,
    format: OutputFormat,
    color: bool,
) -> anyhow::Result<String> {
    let model = load_model(source, config)?;
    let node = lookup(&model, &args.path)?;
    let path = model.path(node, true).unwrap_or_default();
    let state = model.check_state(node);
    let status = model.status(node);

    match format {
        OutputFormat::Text => {
            let label = if path.is_empty() { "(root)".to_string() } else { path };
            let state_text = state.map_or_else(|| "undetermined".to_string(), |s| s.to_string());
            let label = if color { label.bold().to_string() } else { label };
            Ok(format!(
                "{} {}  {}  {}\n",
                render::glyph(state),
                label,
                state_text,
                status
            ))
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "path": path,
                "state": state,
                "status": status,
            });
            Ok(serde_json::to_string_pretty(&json)? + "\n")
        }
    }
}

fn cmd_config(config: &CliConfig, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(toml::to_string_pretty(config)?),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(config)? + "\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use difftree_model::NotifyDepth;
    use std::io::Write;

    const STATUS: &str = "M  src/a.rs\n M src/b.rs\n?? notes.txt\nR  old.rs -> lib/new.rs\n";

    fn input() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(STATUS.as_bytes()).unwrap();
        file
    }

    fn tree_args(stage: &[&str], unstage: &[&str], only: Option<Side>) -> TreeArgs {
        TreeArgs {
            stage: stage.iter().map(|s| s.to_string()).collect(),
            unstage: unstage.iter().map(|s| s.to_string()).collect(),
            only,
        }
    }

    fn source(file: &tempfile::NamedTempFile) -> String {
        file.path().to_string_lossy().into_owned()
    }

    #[test]
    fn tree_renders_the_change_set() {
        let file = input();
        let out = cmd_tree(
            &source(&file),
            &CliConfig::default(),
            &tree_args(&[], &[], None),
            OutputFormat::Text,
            false,
        )
        .unwrap();
        assert_eq!(
            out,
            "[~] src  M\n  [x] a.rs  M\n  [ ] b.rs  M\n[ ] notes.txt  ?\n[x] lib  R\n  [x] new.rs  R\n"
        );
    }

    #[test]
    fn stage_then_unstage_in_order() {
        let file = input();
        let out = cmd_tree(
            &source(&file),
            &CliConfig::default(),
            &tree_args(&["src", "notes.txt"], &["src/a.rs"], None),
            OutputFormat::Text,
            false,
        )
        .unwrap();
        assert!(out.starts_with("[~] src  M\n  [ ] a.rs  M\n  [x] b.rs  M\n[x] notes.txt  ?\n"));
    }

    #[test]
    fn only_filter_hides_rows() {
        let file = input();
        let out = cmd_tree(
            &source(&file),
            &CliConfig::default(),
            &tree_args(&[], &[], Some(Side::Staged)),
            OutputFormat::Text,
            false,
        )
        .unwrap();
        assert!(!out.contains("notes.txt"));
        assert!(!out.contains("b.rs"));
        assert!(out.contains("a.rs"));
    }

    #[test]
    fn unknown_toggle_path_is_an_error() {
        let file = input();
        let err = cmd_tree(
            &source(&file),
            &CliConfig::default(),
            &tree_args(&["missing"], &[], None),
            OutputFormat::Text,
            false,
        )
        .unwrap_err();
        assert!(err.to_string().contains("path not in change-set"));
    }

    #[test]
    fn json_tree_uses_the_configured_workdir() {
        let file = input();
        let config = CliConfig {
            workdir: "/home/me/repo".into(),
            ..CliConfig::default()
        };
        let out = cmd_tree(
            &source(&file),
            &config,
            &tree_args(&[], &[], None),
            OutputFormat::Json,
            false,
        )
        .unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["name"], "/home/me/repo");
        assert_eq!(json["children"][0]["children"][0]["kind"], "Rust");
    }

    #[test]
    fn state_reports_one_node() {
        let file = input();
        let args = StateArgs { path: "src/".into() };
        let out = cmd_state(&source(&file), &CliConfig::default(), &args, OutputFormat::Text, false)
            .unwrap();
        assert_eq!(out, "[~] src  partially checked  M\n");

        let root = StateArgs { path: ".".into() };
        let out = cmd_state(&source(&file), &CliConfig::default(), &root, OutputFormat::Json, false)
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["path"], "");
        assert_eq!(json["state"], "partially_checked");
        assert_eq!(json["status"], "M?R");
    }

    #[test]
    fn untracked_directories_and_quoted_paths_render() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b" M src/a.rs\n?? newdir/\n?? \"my notes.txt\"\n").unwrap();
        let out = cmd_tree(
            &source(&file),
            &CliConfig::default(),
            &tree_args(&["newdir/"], &[], None),
            OutputFormat::Text,
            false,
        )
        .unwrap();
        assert_eq!(
            out,
            "[ ] src  M\n  [ ] a.rs  M\n[x] newdir  ?\n[ ] my notes.txt  ?\n"
        );
    }

    #[test]
    fn malformed_input_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"M\n").unwrap();
        let err = cmd_tree(
            &source(&file),
            &CliConfig::default(),
            &tree_args(&[], &[], None),
            OutputFormat::Text,
            false,
        )
        .unwrap_err();
        assert!(err.to_string().contains("parsing porcelain status"));
    }

    #[test]
    fn config_prints_effective_settings() {
        let mut config = CliConfig::default();
        config.model.notify_depth = NotifyDepth::Recursive;
        let text = cmd_config(&config, OutputFormat::Text).unwrap();
        assert!(text.contains("workdir = \".\""));
        assert!(text.contains("notify_depth = \"recursive\""));

        let json: serde_json::Value =
            serde_json::from_str(&cmd_config(&config, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["model"]["notify_depth"], "recursive");
    }
}
