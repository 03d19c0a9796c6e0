//! CLI definition and command handling

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use tracing::debug;

use gantry_core::config::{load_config_or_default, Config};
use gantry_github::GitHubClient;

use commands::{
    CardsCommand, ChangelogCommand, CodecCommand, ColumnsCommand, CommitsCommand,
    CompletionsCommand, InitCommand,
};

use crate::codec::Direction;

/// Gantry - clipboard URL codec and GitHub changelog helper
#[derive(Debug, Parser)]
#[command(name = "gantry")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except results and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<std::path::PathBuf>,

    /// GitHub token (defaults to the variable named by github.token_env)
    #[arg(long, global = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// URL-encode a string (or the clipboard) into the clipboard
    Enc(CodecCommand),

    /// URL-decode a string (or the clipboard) into the clipboard
    Dec(CodecCommand),

    /// List the columns of the project board
    Columns(ColumnsCommand),

    /// List the cards of a board column
    Cards(CardsCommand),

    /// Build a changelog from the pull request cards of a column
    Changelog(ChangelogCommand),

    /// Build a changelog from repository commit history
    Commits(CommitsCommand),

    /// Write a default gantry.toml
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> anyhow::Result<()> {
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        match self.command {
            Commands::Enc(ref cmd) => cmd.execute(&self, Direction::Encode),
            Commands::Dec(ref cmd) => cmd.execute(&self, Direction::Decode),
            Commands::Columns(ref cmd) => cmd.execute(&self),
            Commands::Cards(ref cmd) => cmd.execute(&self),
            Commands::Changelog(ref cmd) => cmd.execute(&self),
            Commands::Commits(ref cmd) => cmd.execute(&self),
            Commands::Init(ref cmd) => cmd.execute(&self),
            Commands::Completions(ref cmd) => cmd.execute(&self),
        }
    }

    /// Load the project (or user) config, falling back to defaults
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let cwd = std::env::current_dir()?;
        let (config, path) = load_config_or_default(&cwd)?;
        debug!(config_path = ?path, "configuration resolved");
        Ok(config)
    }

    /// Authenticated GitHub client for `config`
    pub fn github_client(&self, config: &Config) -> anyhow::Result<GitHubClient> {
        let token = config.github.resolve_token(self.token.as_deref())?;
        Ok(GitHubClient::new(&config.github.api_url, &token)?)
    }
}
