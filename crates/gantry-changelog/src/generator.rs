//! Changelog generation

use std::collections::HashMap;

use gantry_core::ChangelogConfig;
use gantry_github::{CommitRange, CommitRecord, GitHubApi, Membership};
use tracing::{debug, info, instrument, warn};

use crate::authors::AuthorMap;
use crate::error::Result;
use crate::filter::FilterPolicy;
use crate::types::ChangelogEntry;

/// Changelog generator
///
/// Fetches source records through a [`GitHubApi`], normalizes them and
/// applies the filter policy. Card details are awaited one at a time, so the
/// result always follows board order.
pub struct ChangelogGenerator<'a> {
    api: &'a dyn GitHubApi,
    authors: AuthorMap,
    policy: FilterPolicy,
    org: Option<String>,
}

impl<'a> ChangelogGenerator<'a> {
    /// Create a generator with settings from the `[changelog]` section
    pub fn new(api: &'a dyn GitHubApi, config: &ChangelogConfig) -> Self {
        Self {
            api,
            authors: AuthorMap::from_config(config),
            policy: FilterPolicy::from_config(config),
            org: None,
        }
    }

    /// Organization used for collaborator checks
    pub fn with_org(mut self, org: Option<String>) -> Self {
        self.org = org;
        self
    }

    /// Use a custom filter policy
    pub fn with_policy(mut self, policy: FilterPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Normalize and filter already-fetched commits, preserving their order
    pub fn normalize_commits(&self, records: &[CommitRecord]) -> Vec<ChangelogEntry> {
        let entries = records
            .iter()
            .map(|r| ChangelogEntry::from_commit(r, &self.authors))
            .collect();
        self.policy.apply(entries)
    }

    /// Changelog entries for the commit history of `repo`
    #[instrument(skip(self, range))]
    pub async fn commit_entries(&self, repo: &str, range: &CommitRange) -> Result<Vec<ChangelogEntry>> {
        let records = self.api.commits(repo, range).await?;
        let entries = self.normalize_commits(&records);
        info!(
            commit_count = records.len(),
            entry_count = entries.len(),
            "commit changelog built"
        );
        Ok(entries)
    }

    /// Changelog entries for the pull request cards in a board column
    #[instrument(skip(self))]
    pub async fn column_entries(&self, column_id: u64) -> Result<Vec<ChangelogEntry>> {
        let cards = self.api.column_cards(column_id).await?;
        let mut memberships: HashMap<String, Membership> = HashMap::new();
        let mut entries = Vec::with_capacity(cards.len());

        for card in &cards {
            let Some(content_url) = card.content_url.as_deref() else {
                debug!("skipping note card");
                continue;
            };

            let detail = self.api.issue_detail(content_url).await?;
            if !detail.is_pull_request {
                debug!(number = detail.number, "skipping issue card");
                continue;
            }

            let membership = match memberships.get(&detail.user_login) {
                Some(known) => *known,
                None => {
                    let resolved = self.membership(&detail.user_login).await;
                    memberships.insert(detail.user_login.clone(), resolved);
                    resolved
                }
            };

            entries.push(ChangelogEntry::from_pull_request(
                &detail,
                membership.is_member(),
            ));
        }

        let entries = self.policy.apply(entries);
        info!(
            card_count = cards.len(),
            entry_count = entries.len(),
            authors_checked = memberships.len(),
            "card changelog built"
        );
        Ok(entries)
    }

    /// Membership lookup; failures other than 404 degrade to `Unknown`
    async fn membership(&self, username: &str) -> Membership {
        let Some(org) = self.org.as_deref() else {
            return Membership::Unknown;
        };

        match self.api.org_membership(org, username).await {
            Ok(membership) => membership,
            Err(e) => {
                warn!(org, username, error = %e, "membership check failed");
                Membership::Unknown
            }
        }
    }
}
