//! Changelog line formatters

use chrono::SecondsFormat;

use crate::types::ChangelogEntry;

/// Clause appended for authors outside the organization
const EXTERNAL_MARKER: &str = "👏";

/// Trait for changelog line formatters
pub trait EntryFormatter: Send + Sync {
    /// Render a single entry as one changelog line
    fn format_entry(&self, entry: &ChangelogEntry) -> String;

    /// Render all entries, one per line, in order
    fn format_all(&self, entries: &[ChangelogEntry]) -> String {
        entries
            .iter()
            .map(|e| self.format_entry(e))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Commit history lines linking to pull requests in `repo`
pub struct CommitFormatter {
    /// Repository as `owner/name`
    pub repo: String,
}

impl CommitFormatter {
    pub fn new(repo: impl Into<String>) -> Self {
        Self { repo: repo.into() }
    }
}

impl EntryFormatter for CommitFormatter {
    fn format_entry(&self, entry: &ChangelogEntry) -> String {
        match entry.pr_number {
            Some(number) => {
                let date = entry
                    .date
                    .map(|d| d.to_rfc3339_opts(SecondsFormat::Secs, true))
                    .unwrap_or_default();
                format!(
                    "[#{n}](https://github.com/{repo}/pull/{n}) {msg}- {author} {date}",
                    n = number,
                    repo = self.repo,
                    msg = entry.message,
                    author = entry.author_display,
                    date = date,
                )
            }
            None => format!("{} : {}", entry.message, entry.author_name),
        }
    }
}

/// Project board lines: `- <type>: <title> #<n> (<labels>) 👏 @<login>`
#[derive(Default)]
pub struct CardFormatter;

impl EntryFormatter for CardFormatter {
    fn format_entry(&self, entry: &ChangelogEntry) -> String {
        let mut line = format!("- {}: {}", entry.type_tag, entry.message);

        if let Some(number) = entry.pr_number {
            line.push_str(&format!(" #{}", number));
        }
        if !entry.label_tag.is_empty() {
            line.push_str(&format!(" ({})", entry.label_tag));
        }
        if entry.is_external_contributor {
            line.push_str(&format!(" {} {}", EXTERNAL_MARKER, entry.author_display));
        }

        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::authors::AuthorMap;
    use chrono::{TimeZone, Utc};
    use gantry_github::{CommitRecord, Label, PullRequestDetail};

    fn commit_entry(message: &str, author: &str) -> ChangelogEntry {
        let date = Utc.with_ymd_and_hms(2019, 5, 2, 9, 30, 0).unwrap();
        ChangelogEntry::from_commit(
            &CommitRecord::new(message, author, date),
            &AuthorMap::new([("Fernando", "fermarichal")]),
        )
    }

    fn pr_entry(labels: &[&str], collaborator: bool) -> ChangelogEntry {
        let detail = PullRequestDetail {
            title: "Add dark mode".to_string(),
            number: 12,
            labels: labels.iter().map(|l| Label::new(*l)).collect(),
            user_login: "octocat".to_string(),
            is_pull_request: true,
        };
        ChangelogEntry::from_pull_request(&detail, collaborator)
    }

    #[test]
    fn test_commit_line_with_pr() {
        let formatter = CommitFormatter::new("org/repo");
        assert_eq!(
            formatter.format_entry(&commit_entry("Fix bug (#42)", "Fernando")),
            "[#42](https://github.com/org/repo/pull/42) Fix bug - @fermarichal 2019-05-02T09:30:00Z"
        );
    }

    #[test]
    fn test_commit_line_without_pr_is_verbatim() {
        let formatter = CommitFormatter::new("org/repo");
        assert_eq!(
            formatter.format_entry(&commit_entry("Update docs", "Unknown Person")),
            "Update docs : Unknown Person"
        );
    }

    #[test]
    fn test_unreferenced_line_uses_raw_author_name() {
        let formatter = CommitFormatter::new("org/repo");
        assert_eq!(
            formatter.format_entry(&commit_entry("Tidy", "Fernando")),
            "Tidy : Fernando"
        );
    }

    #[test]
    fn test_card_line_external_with_labels() {
        let line = CardFormatter.format_entry(&pr_entry(&["[Type] Bug", "Priority: high"], false));
        assert_eq!(line, "- Bug: Add dark mode #12 (Priority: high) 👏 @octocat");
    }

    #[test]
    fn test_card_line_collaborator_without_labels() {
        let line = CardFormatter.format_entry(&pr_entry(&["[Type] Bug"], true));
        assert_eq!(line, "- Bug: Add dark mode #12");
    }

    #[test]
    fn test_format_all_joins_lines() {
        let formatter = CommitFormatter::new("org/repo");
        let out = formatter.format_all(&[commit_entry("A", "x"), commit_entry("B", "y")]);
        assert_eq!(out, "A : x\nB : y");
    }
}
