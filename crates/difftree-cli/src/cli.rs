use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "difftree",
    about = "Show a change-set as a checkable folder/file tree",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// `git status --porcelain` output to read, or `-` for stdin
    #[arg(short, long, global = true, default_value = "-")]
    pub input: String,

    /// TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Side {
    Staged,
    Unstaged,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render the change-set tree with inclusion states
    Tree(TreeArgs),
    /// Show the aggregate state of one path
    State(StateArgs),
    /// Print the effective configuration
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct TreeArgs {
    /// Stage everything beneath a path (repeatable)
    #[arg(long)]
    pub stage: Vec<String>,
    /// Unstage everything beneath a path (repeatable)
    #[arg(long)]
    pub unstage: Vec<String>,
    /// Only show rows belonging to one side
    #[arg(long)]
    pub only: Option<Side>,
}

#[derive(Args)]
pub struct StateArgs {
    /// Path relative to the working directory; empty for the root
    pub path: String,
}

#[derive(Args)]
pub struct ConfigArgs {}
