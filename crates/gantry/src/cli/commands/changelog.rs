//! Board changelog command

use clap::Args;
use tracing::info;

use gantry_changelog::{CardFormatter, ChangelogGenerator, EntryFormatter, FilterPolicy};

use super::board::resolve_column;
use crate::cli::{output, Cli, OutputFormat};

/// Build a changelog from the pull request cards of a column
#[derive(Debug, Args)]
pub struct ChangelogCommand {
    /// Column id (defaults to github.default_column)
    pub column: Option<u64>,

    /// Keep pull requests opened by bots
    #[arg(long)]
    pub include_bots: bool,
}

impl ChangelogCommand {
    /// Execute the changelog command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        let runtime = tokio::runtime::Runtime::new()?;
        runtime.block_on(self.execute_async(cli))
    }

    async fn execute_async(&self, cli: &Cli) -> anyhow::Result<()> {
        let config = cli.load_config()?;
        let column_id = resolve_column(self.column, config.github.default_column)?;
        info!(column_id, org = ?config.github.org, "executing changelog command");

        let client = cli.github_client(&config)?;
        let mut generator = ChangelogGenerator::new(&client, &config.changelog)
            .with_org(config.github.org.clone());
        if self.include_bots {
            generator = generator
                .with_policy(FilterPolicy::from_config(&config.changelog).with_exclude_bots(false));
        }

        let entries = generator.column_entries(column_id).await?;

        match cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
            OutputFormat::Text => {
                if entries.is_empty() {
                    if !cli.quiet {
                        output::warning("No pull requests found in this column.");
                    }
                    return Ok(());
                }
                println!("{}", CardFormatter.format_all(&entries));
            }
        }

        Ok(())
    }
}
