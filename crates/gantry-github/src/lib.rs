//! Gantry GitHub - REST client for project boards, issues and commit history
//!
//! [`GitHubApi`] is the seam the changelog pipeline talks to;
//! [`GitHubClient`] is the reqwest-backed implementation.

mod client;
pub mod error;
pub mod types;

pub use client::{GitHubApi, GitHubClient};
pub use error::{GitHubError, InvalidDate, Result};
pub use types::{Card, Column, CommitRange, CommitRecord, Label, Membership, PullRequestDetail};
