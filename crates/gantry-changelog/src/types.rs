//! Changelog types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gantry_github::{CommitRecord, PullRequestDetail};

use crate::authors::AuthorMap;
use crate::classify::{display_labels, type_tag};
use crate::matcher::match_pr_reference;

/// Where an entry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// A commit from repository history
    Commit,
    /// A pull request card on a project board
    PullRequest,
}

/// A normalized changelog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogEntry {
    /// Source of the entry
    pub kind: EntryKind,
    /// Pull request number, if one was referenced
    pub pr_number: Option<u64>,
    /// Commit timestamp (board cards carry none)
    pub date: Option<DateTime<Utc>>,
    /// Text shown for the change: the pre-token commit text, the full
    /// message when there is no PR reference, or the PR title
    pub message: String,
    /// Author as recorded by GitHub
    pub author_name: String,
    /// Author after handle normalization
    pub author_display: String,
    /// Change type (`Dev` unless a `[Type]` label says otherwise)
    pub type_tag: String,
    /// Comma-joined displayable labels, possibly empty
    pub label_tag: String,
    /// Author is not a confirmed organization member
    pub is_external_contributor: bool,
}

impl ChangelogEntry {
    /// Normalize a commit record
    pub fn from_commit(record: &CommitRecord, authors: &AuthorMap) -> Self {
        let (pr_number, message) = match match_pr_reference(&record.message) {
            Some(found) => (Some(found.number), found.before.to_string()),
            None => (None, record.message.clone()),
        };

        Self {
            kind: EntryKind::Commit,
            pr_number,
            date: Some(record.author_date),
            message,
            author_name: record.author_name.clone(),
            author_display: authors.normalize(&record.author_name),
            type_tag: crate::classify::DEFAULT_TYPE.to_string(),
            label_tag: String::new(),
            is_external_contributor: false,
        }
    }

    /// Normalize a pull request referenced from a board card
    pub fn from_pull_request(detail: &PullRequestDetail, is_collaborator: bool) -> Self {
        Self {
            kind: EntryKind::PullRequest,
            pr_number: Some(detail.number),
            date: None,
            message: detail.title.clone(),
            author_name: detail.user_login.clone(),
            author_display: format!("@{}", detail.user_login),
            type_tag: type_tag(&detail.labels),
            label_tag: display_labels(&detail.labels),
            is_external_contributor: !is_collaborator,
        }
    }

    /// Whether a `(#N)` reference or PR number is attached
    pub fn has_pr(&self) -> bool {
        self.pr_number.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use gantry_github::Label;

    fn authors() -> AuthorMap {
        AuthorMap::new([("Fernando", "fermarichal")])
    }

    #[test]
    fn test_commit_with_reference() {
        let date = Utc.with_ymd_and_hms(2019, 5, 2, 9, 0, 0).unwrap();
        let record = CommitRecord::new("Fix bug (#42)", "Fernando", date);

        let entry = ChangelogEntry::from_commit(&record, &authors());
        assert_eq!(entry.kind, EntryKind::Commit);
        assert_eq!(entry.pr_number, Some(42));
        assert_eq!(entry.message, "Fix bug ");
        assert_eq!(entry.author_name, "Fernando");
        assert_eq!(entry.author_display, "@fermarichal");
        assert_eq!(entry.date, Some(date));
    }

    #[test]
    fn test_commit_without_reference_keeps_full_message() {
        let record = CommitRecord::new("Update docs\n\nmore", "Unknown Person", Utc::now());

        let entry = ChangelogEntry::from_commit(&record, &authors());
        assert!(!entry.has_pr());
        assert_eq!(entry.message, "Update docs\n\nmore");
        assert_eq!(entry.author_display, "Unknown Person");
    }

    #[test]
    fn test_pull_request_entry() {
        let detail = PullRequestDetail {
            title: "Add dark mode".to_string(),
            number: 12,
            labels: vec![Label::new("[Type] Enhancement"), Label::new("UI")],
            user_login: "octocat".to_string(),
            is_pull_request: true,
        };

        let entry = ChangelogEntry::from_pull_request(&detail, false);
        assert_eq!(entry.kind, EntryKind::PullRequest);
        assert_eq!(entry.type_tag, "Enhancement");
        assert_eq!(entry.label_tag, "UI");
        assert_eq!(entry.author_display, "@octocat");
        assert!(entry.is_external_contributor);
        assert!(entry.date.is_none());
    }
}
