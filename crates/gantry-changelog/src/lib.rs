//! Gantry Changelog - Changelog extraction for commit history and project boards
//!
//! Raw records are normalized into [`ChangelogEntry`] values, filtered by a
//! single [`FilterPolicy`], and rendered one line per entry by a formatter.

pub mod authors;
pub mod classify;
pub mod error;
pub mod filter;
pub mod formatter;
pub mod generator;
pub mod matcher;
pub mod types;

pub use authors::AuthorMap;
pub use error::{ChangelogError, Result};
pub use filter::FilterPolicy;
pub use formatter::{CardFormatter, CommitFormatter, EntryFormatter};
pub use generator::ChangelogGenerator;
pub use matcher::{match_pr_reference, PrReference};
pub use types::{ChangelogEntry, EntryKind};
