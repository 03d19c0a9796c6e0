//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_github(config)?;
    validate_changelog(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_github(config: &Config) -> Result<()> {
    let api_url = url::Url::parse(&config.github.api_url).map_err(|e| {
        ConfigError::InvalidValue {
            field: "github.api_url".to_string(),
            message: e.to_string(),
        }
    })?;

    if !matches!(api_url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidValue {
            field: "github.api_url".to_string(),
            message: "must be an http or https URL".to_string(),
        }
        .into());
    }

    if config.github.token_env.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "github.token_env".to_string(),
            message: "environment variable name cannot be empty".to_string(),
        }
        .into());
    }

    Ok(())
}

fn validate_changelog(config: &Config) -> Result<()> {
    for (name, handle) in &config.changelog.authors {
        if handle.is_empty() || handle.starts_with('@') {
            return Err(ConfigError::InvalidValue {
                field: format!("changelog.authors.{}", name),
                message: "handle must be non-empty and written without '@'".to_string(),
            }
            .into());
        }
    }

    if config.changelog.bots.iter().any(|b| b.trim().is_empty()) {
        return Err(ConfigError::InvalidValue {
            field: "changelog.bots".to_string(),
            message: "bot names cannot be empty".to_string(),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GantryError;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_rejects_non_http_api_url() {
        let mut config = Config::default();
        config.github.api_url = "ftp://example.com".to_string();
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(
            err,
            GantryError::Config(ConfigError::InvalidValue { ref field, .. }) if field == "github.api_url"
        ));
    }

    #[test]
    fn test_rejects_unparseable_api_url() {
        let mut config = Config::default();
        config.github.api_url = "not a url".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_rejects_handle_with_at_sign() {
        let mut config = Config::default();
        config
            .changelog
            .authors
            .insert("Jane Doe".to_string(), "@jane".to_string());
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_rejects_blank_bot() {
        let mut config = Config::default();
        config.changelog.bots.push(" ".to_string());
        assert!(validate_config(&config).is_err());
    }
}
