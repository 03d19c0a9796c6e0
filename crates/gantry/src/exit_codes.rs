//! Exit codes for the CLI

use gantry_changelog::ChangelogError;
use gantry_core::{ConfigError, GantryError};
use gantry_github::GitHubError;

/// General error
pub const ERROR: u8 = 1;

/// Configuration error (bad file, missing token or setting)
pub const CONFIG_ERROR: u8 = 2;

/// GitHub API or network error
pub const API_ERROR: u8 = 3;

/// Map a command failure to its exit code
pub fn for_error(err: &anyhow::Error) -> u8 {
    for cause in err.chain() {
        if cause.is::<ConfigError>() {
            return CONFIG_ERROR;
        }
        if let Some(gantry) = cause.downcast_ref::<GantryError>() {
            if gantry.is_config() {
                return CONFIG_ERROR;
            }
        }
        if cause.is::<GitHubError>() || cause.is::<ChangelogError>() {
            return API_ERROR;
        }
    }
    ERROR
}
