//! GitHub data types
//!
//! Wire shapes are deserialized into private structs and flattened into the
//! public types, so callers never deal with the API's nesting.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::InvalidDate;

const API_REPOS_PREFIX: &str = "https://api.github.com/repos/";
const WEB_PREFIX: &str = "https://github.com/";

/// A commit from the repository history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "CommitWire")]
pub struct CommitRecord {
    /// Full commit message
    pub message: String,
    /// Author display name
    pub author_name: String,
    /// Author timestamp
    pub author_date: DateTime<Utc>,
}

impl CommitRecord {
    /// Create a new commit record
    pub fn new(
        message: impl Into<String>,
        author_name: impl Into<String>,
        author_date: DateTime<Utc>,
    ) -> Self {
        Self {
            message: message.into(),
            author_name: author_name.into(),
            author_date,
        }
    }
}

#[derive(Deserialize)]
struct CommitWire {
    commit: CommitBody,
}

#[derive(Deserialize)]
struct CommitBody {
    message: String,
    author: CommitAuthor,
}

#[derive(Deserialize)]
struct CommitAuthor {
    name: String,
    date: DateTime<Utc>,
}

impl From<CommitWire> for CommitRecord {
    fn from(wire: CommitWire) -> Self {
        Self {
            message: wire.commit.message,
            author_name: wire.commit.author.name,
            author_date: wire.commit.author.date,
        }
    }
}

/// A project board column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: u64,
    pub name: String,
}

/// A project board card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// API URL of the referenced issue or pull request; note cards have none
    #[serde(default)]
    pub content_url: Option<String>,
}

impl Card {
    /// Card pointing at `content_url`
    pub fn new(content_url: impl Into<String>) -> Self {
        Self {
            content_url: Some(content_url.into()),
        }
    }

    /// Browser URL for the card's content
    pub fn web_url(&self) -> Option<String> {
        self.content_url
            .as_deref()
            .map(|url| url.replacen(API_REPOS_PREFIX, WEB_PREFIX, 1))
    }
}

/// An issue label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
}

impl Label {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Issue or pull request referenced by a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "IssueWire")]
pub struct PullRequestDetail {
    pub title: String,
    pub number: u64,
    pub labels: Vec<Label>,
    pub user_login: String,
    /// False when the card points at a plain issue
    pub is_pull_request: bool,
}

#[derive(Deserialize)]
struct IssueWire {
    title: String,
    number: u64,
    #[serde(default)]
    labels: Vec<Label>,
    user: IssueUser,
    #[serde(default)]
    pull_request: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct IssueUser {
    login: String,
}

impl From<IssueWire> for PullRequestDetail {
    fn from(wire: IssueWire) -> Self {
        Self {
            title: wire.title,
            number: wire.number,
            labels: wire.labels,
            user_login: wire.user.login,
            is_pull_request: wire.pull_request.is_some(),
        }
    }
}

/// Organization membership of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Membership {
    /// Confirmed member (204 No Content)
    Member,
    /// Confirmed non-member (404 Not Found)
    NotMember,
    /// Could not be determined
    Unknown,
}

impl Membership {
    pub fn is_member(self) -> bool {
        self == Self::Member
    }
}

/// Time window for a commit history query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitRange {
    pub since: DateTime<Utc>,
    /// Open-ended when `None`; the client then pages through the whole history
    pub until: Option<DateTime<Utc>>,
}

impl CommitRange {
    /// Parse CLI-style bounds. Accepts RFC 3339 timestamps or plain dates.
    pub fn parse(since: &str, until: Option<&str>) -> Result<Self, InvalidDate> {
        Ok(Self {
            since: parse_timestamp(since)?,
            until: until.map(parse_timestamp).transpose()?,
        })
    }
}

fn parse_timestamp(input: &str) -> Result<DateTime<Utc>, InvalidDate> {
    let input = input.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(input) {
        return Ok(ts.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| InvalidDate(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_commit_record_from_api_shape() {
        let json = r#"{
            "sha": "abc123",
            "commit": {
                "message": "Fix bug (#42)\n\nlonger body",
                "author": { "name": "Fernando", "email": "f@example.com", "date": "2019-03-01T12:30:00Z" }
            }
        }"#;

        let record: CommitRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.message, "Fix bug (#42)\n\nlonger body");
        assert_eq!(record.author_name, "Fernando");
        assert_eq!(
            record.author_date,
            Utc.with_ymd_and_hms(2019, 3, 1, 12, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_commit_missing_author_is_an_error() {
        let json = r#"{ "commit": { "message": "x" } }"#;
        assert!(serde_json::from_str::<CommitRecord>(json).is_err());
    }

    #[test]
    fn test_pull_request_detail() {
        let json = r#"{
            "title": "Add dark mode",
            "number": 12,
            "labels": [{ "id": 1, "name": "[Type] Enhancement" }, { "id": 2, "name": "UI" }],
            "user": { "login": "octocat" },
            "pull_request": { "url": "https://api.github.com/repos/o/r/pulls/12" }
        }"#;

        let detail: PullRequestDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.number, 12);
        assert_eq!(detail.user_login, "octocat");
        assert_eq!(detail.labels.len(), 2);
        assert!(detail.is_pull_request);
    }

    #[test]
    fn test_plain_issue_is_not_a_pull_request() {
        let json = r#"{ "title": "Bug", "number": 3, "user": { "login": "someone" } }"#;

        let detail: PullRequestDetail = serde_json::from_str(json).unwrap();
        assert!(!detail.is_pull_request);
        assert!(detail.labels.is_empty());
    }

    #[test]
    fn test_card_web_url() {
        let card = Card::new("https://api.github.com/repos/org/repo/issues/7");
        assert_eq!(
            card.web_url().as_deref(),
            Some("https://github.com/org/repo/issues/7")
        );

        let note: Card = serde_json::from_str(r#"{ "note": "todo" }"#).unwrap();
        assert!(note.web_url().is_none());
    }

    #[test]
    fn test_commit_range_parse() {
        let range = CommitRange::parse("2019-01-01", Some("2019-02-01T10:00:00+02:00")).unwrap();
        assert_eq!(range.since, Utc.with_ymd_and_hms(2019, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(
            range.until,
            Some(Utc.with_ymd_and_hms(2019, 2, 1, 8, 0, 0).unwrap())
        );

        let open = CommitRange::parse("2019-01-01T00:00:00Z", None).unwrap();
        assert!(open.until.is_none());
    }

    #[test]
    fn test_commit_range_rejects_garbage() {
        let err = CommitRange::parse("yesterday", None).unwrap_err();
        assert_eq!(err, InvalidDate("yesterday".to_string()));

        let err = CommitRange::parse("2019-01-01", Some("2019-13-01")).unwrap_err();
        assert_eq!(err.0, "2019-13-01");
    }
}
