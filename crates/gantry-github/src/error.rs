//! GitHub client error types

use thiserror::Error;

/// GitHub API errors
#[derive(Debug, Error)]
pub enum GitHubError {
    /// Transport-level failure (DNS, TLS, connection reset, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status returned by the API
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Response body did not have the expected shape
    #[error("Malformed response from {url}: {source}")]
    Malformed {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Token cannot be sent as a header value
    #[error("Invalid credentials: token contains characters not allowed in a header")]
    InvalidToken,
}

/// A `since`/`until` bound that is neither RFC 3339 nor `YYYY-MM-DD`
///
/// Kept apart from [`GitHubError`]: it is bad user input, raised before any
/// request is made.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("Invalid date '{0}': expected RFC 3339 or YYYY-MM-DD")]
pub struct InvalidDate(pub String);

/// Result type for GitHub operations
pub type Result<T> = std::result::Result<T, GitHubError>;
