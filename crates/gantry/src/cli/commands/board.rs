//! Project board listing commands

use clap::Args;
use tracing::info;

use gantry_core::ConfigError;
use gantry_github::GitHubApi;

use crate::cli::{output, Cli, OutputFormat};

/// List the columns of a project board
#[derive(Debug, Args)]
pub struct ColumnsCommand {
    /// Project id (defaults to github.project_id)
    #[arg(long)]
    pub project: Option<u64>,
}

impl ColumnsCommand {
    /// Execute the columns command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        let runtime = tokio::runtime::Runtime::new()?;
        runtime.block_on(self.execute_async(cli))
    }

    async fn execute_async(&self, cli: &Cli) -> anyhow::Result<()> {
        let config = cli.load_config()?;
        let project_id = self
            .project
            .or(config.github.project_id)
            .ok_or_else(|| ConfigError::MissingField("--project or github.project_id".to_string()))?;
        info!(project_id, "executing columns command");

        let client = cli.github_client(&config)?;
        let columns = client.project_columns(project_id).await?;

        match cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&columns)?),
            OutputFormat::Text => {
                if columns.is_empty() && !cli.quiet {
                    output::warning("Project has no columns.");
                }
                for column in &columns {
                    println!("{}  {}", column.id, column.name);
                }
            }
        }

        Ok(())
    }
}

/// List the cards of a column as browser URLs
#[derive(Debug, Args)]
pub struct CardsCommand {
    /// Column id (defaults to github.default_column)
    pub column: Option<u64>,
}

impl CardsCommand {
    /// Execute the cards command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        let runtime = tokio::runtime::Runtime::new()?;
        runtime.block_on(self.execute_async(cli))
    }

    async fn execute_async(&self, cli: &Cli) -> anyhow::Result<()> {
        let config = cli.load_config()?;
        let column_id = resolve_column(self.column, config.github.default_column)?;
        info!(column_id, "executing cards command");

        let client = cli.github_client(&config)?;
        let urls: Vec<String> = client
            .column_cards(column_id)
            .await?
            .iter()
            .filter_map(|card| card.web_url())
            .collect();

        match cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&urls)?),
            OutputFormat::Text => {
                if urls.is_empty() && !cli.quiet {
                    output::warning("Column has no issue or pull request cards.");
                }
                for url in &urls {
                    println!("{}", url);
                }
            }
        }

        Ok(())
    }
}

/// Column from the CLI argument or config
pub(super) fn resolve_column(arg: Option<u64>, configured: Option<u64>) -> Result<u64, ConfigError> {
    arg.or(configured)
        .ok_or_else(|| ConfigError::MissingField("column id or github.default_column".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_column_prefers_argument() {
        assert_eq!(resolve_column(Some(1), Some(2)).unwrap(), 1);
        assert_eq!(resolve_column(None, Some(2)).unwrap(), 2);
        assert!(matches!(
            resolve_column(None, None),
            Err(ConfigError::MissingField(_))
        ));
    }
}
