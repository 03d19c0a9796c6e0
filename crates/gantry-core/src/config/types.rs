//! Configuration types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::ConfigError;

/// Default GitHub REST endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Default environment variable holding the GitHub token
pub const DEFAULT_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Main configuration for Gantry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// GitHub API configuration
    pub github: GitHubConfig,

    /// Changelog configuration
    pub changelog: ChangelogConfig,
}

/// GitHub API configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// REST API base URL
    pub api_url: String,

    /// Name of the environment variable that holds the token
    pub token_env: String,

    /// Organization used for collaborator checks
    pub org: Option<String>,

    /// Project board used by `columns`
    pub project_id: Option<u64>,

    /// Column used by `cards` and `changelog` when none is given
    pub default_column: Option<u64>,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token_env: DEFAULT_TOKEN_ENV.to_string(),
            org: None,
            project_id: None,
            default_column: None,
        }
    }
}

impl GitHubConfig {
    /// Resolve the API token.
    ///
    /// An explicit value (from `--token`) wins; otherwise the variable named by
    /// `token_env` is read. Empty values count as missing.
    pub fn resolve_token(&self, explicit: Option<&str>) -> Result<String, ConfigError> {
        if let Some(token) = explicit.filter(|t| !t.trim().is_empty()) {
            return Ok(token.to_string());
        }

        match std::env::var(&self.token_env) {
            Ok(token) if !token.trim().is_empty() => Ok(token),
            _ => Err(ConfigError::MissingToken(self.token_env.clone())),
        }
    }
}

/// Changelog configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Full author name to GitHub handle (without the leading `@`)
    pub authors: BTreeMap<String, String>,

    /// Author identities treated as bots
    pub bots: Vec<String>,

    /// Drop entries whose normalized author is a bot
    pub exclude_bots: bool,

    /// Drop commits that don't reference a pull request
    pub require_pr_reference: bool,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        let mut authors = BTreeMap::new();
        authors.insert("Fernando".to_string(), "fermarichal".to_string());

        Self {
            authors,
            bots: vec![
                "dependabot[bot]".to_string(),
                "github-actions[bot]".to_string(),
            ],
            exclude_bots: true,
            require_pr_reference: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.github.api_url, DEFAULT_API_URL);
        assert_eq!(config.github.token_env, "GITHUB_TOKEN");
        assert!(config.github.org.is_none());
        assert!(config.changelog.exclude_bots);
        assert!(!config.changelog.require_pr_reference);
        assert_eq!(
            config.changelog.authors.get("Fernando").map(String::as_str),
            Some("fermarichal")
        );
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str("[github]\norg = \"acme\"\n").unwrap();
        assert_eq!(config.github.org.as_deref(), Some("acme"));
        assert_eq!(config.github.api_url, DEFAULT_API_URL);
        assert_eq!(config.changelog, ChangelogConfig::default());
    }

    #[test]
    fn test_resolve_token_prefers_explicit() {
        let config = GitHubConfig {
            token_env: "GANTRY_TEST_TOKEN_UNSET_A".to_string(),
            ..GitHubConfig::default()
        };
        assert_eq!(config.resolve_token(Some("abc")).unwrap(), "abc");
    }

    #[test]
    fn test_resolve_token_missing() {
        let config = GitHubConfig {
            token_env: "GANTRY_TEST_TOKEN_UNSET_B".to_string(),
            ..GitHubConfig::default()
        };
        let err = config.resolve_token(Some("  ")).unwrap_err();
        assert!(matches!(err, ConfigError::MissingToken(name) if name == "GANTRY_TEST_TOKEN_UNSET_B"));
    }

    #[test]
    fn test_resolve_token_from_env() {
        std::env::set_var("GANTRY_TEST_TOKEN_SET", "from-env");
        let config = GitHubConfig {
            token_env: "GANTRY_TEST_TOKEN_SET".to_string(),
            ..GitHubConfig::default()
        };
        assert_eq!(config.resolve_token(None).unwrap(), "from-env");
    }
}
