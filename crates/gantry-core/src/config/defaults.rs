//! Default configuration values

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "gantry.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "gantry.yaml";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ".gantry.toml",
        ".gantry.yaml",
    ]
}

/// Default configuration template written by `gantry init`
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Gantry Configuration

[github]
api_url = "https://api.github.com"
# Environment variable holding the API token. Tokens never live in this file.
token_env = "GITHUB_TOKEN"
# Organization used to decide whether a PR author is a collaborator
# org = "my-org"
# Project board listed by `gantry columns`
# project_id = 1492664
# Column used by `gantry cards` and `gantry changelog` when none is given
# default_column = 4242

[changelog]
exclude_bots = true
require_pr_reference = false
bots = ["dependabot[bot]", "github-actions[bot]"]

[changelog.authors]
Fernando = "fermarichal"
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_template_parses_to_defaults() {
        let config: Config = toml::from_str(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_toml_searched_first() {
        assert_eq!(config_file_names()[0], DEFAULT_CONFIG_TOML);
    }
}
