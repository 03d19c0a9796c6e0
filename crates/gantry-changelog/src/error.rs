//! Changelog error types

use gantry_github::GitHubError;
use thiserror::Error;

/// Changelog-related errors
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// Fetching source records failed
    #[error(transparent)]
    GitHub(#[from] GitHubError),
}

/// Result type for changelog operations
pub type Result<T> = std::result::Result<T, ChangelogError>;
