//! Commit history changelog command

use clap::Args;
use tracing::info;

use gantry_changelog::{ChangelogGenerator, CommitFormatter, EntryFormatter, FilterPolicy};
use gantry_core::ChangelogConfig;
use gantry_github::CommitRange;

use crate::cli::{output, Cli, OutputFormat};

/// Build a changelog from repository commit history
#[derive(Debug, Args)]
pub struct CommitsCommand {
    /// Repository as owner/name
    pub repo: String,

    /// Start of the window (RFC 3339 or YYYY-MM-DD)
    pub since: String,

    /// End of the window; omit to page through everything since `since`
    pub until: Option<String>,

    /// Only keep commits that reference a pull request
    #[arg(long)]
    pub require_pr: bool,

    /// Keep commits authored by configured bots
    #[arg(long)]
    pub include_bots: bool,
}

impl CommitsCommand {
    /// Execute the commits command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        let runtime = tokio::runtime::Runtime::new()?;
        runtime.block_on(self.execute_async(cli))
    }

    /// Configured policy with CLI overrides applied
    fn policy(&self, config: &ChangelogConfig) -> FilterPolicy {
        let mut policy = FilterPolicy::from_config(config);
        if self.require_pr {
            policy = policy.with_require_pr_reference(true);
        }
        if self.include_bots {
            policy = policy.with_exclude_bots(false);
        }
        policy
    }

    async fn execute_async(&self, cli: &Cli) -> anyhow::Result<()> {
        let range = CommitRange::parse(&self.since, self.until.as_deref())?;
        let config = cli.load_config()?;
        info!(repo = %self.repo, since = %range.since, until = ?range.until, "executing commits command");

        let client = cli.github_client(&config)?;
        let generator = ChangelogGenerator::new(&client, &config.changelog)
            .with_policy(self.policy(&config.changelog));
        let entries = generator.commit_entries(&self.repo, &range).await?;

        match cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
            OutputFormat::Text => {
                if entries.is_empty() {
                    if !cli.quiet {
                        output::warning("No commits found in this window.");
                    }
                    return Ok(());
                }
                println!("{}", CommitFormatter::new(&self.repo).format_all(&entries));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(require_pr: bool, include_bots: bool) -> CommitsCommand {
        CommitsCommand {
            repo: "org/repo".to_string(),
            since: "2019-01-01".to_string(),
            until: None,
            require_pr,
            include_bots,
        }
    }

    #[test]
    fn test_policy_defaults_from_config() {
        let policy = command(false, false).policy(&ChangelogConfig::default());
        assert!(policy.exclude_bots);
        assert!(!policy.require_pr_reference);
    }

    #[test]
    fn test_policy_flags_override_config() {
        let policy = command(true, true).policy(&ChangelogConfig::default());
        assert!(!policy.exclude_bots);
        assert!(policy.require_pr_reference);
    }

    #[test]
    fn test_flags_never_loosen_required_pr() {
        let config = ChangelogConfig {
            require_pr_reference: true,
            ..ChangelogConfig::default()
        };
        assert!(command(false, false).policy(&config).require_pr_reference);
    }
}
