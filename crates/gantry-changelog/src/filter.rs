//! Entry filtering
//!
//! One policy covers every source. Commits without a PR reference are kept
//! unless `require_pr_reference` is set.

use std::collections::BTreeSet;

use gantry_core::ChangelogConfig;
use tracing::debug;

use crate::types::ChangelogEntry;

/// Which entries make it into the output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPolicy {
    /// Drop entries whose normalized author is a known bot
    pub exclude_bots: bool,
    /// Drop entries without a pull request number
    pub require_pr_reference: bool,
    /// Bot identities, compared against the normalized author
    pub bots: BTreeSet<String>,
}

impl FilterPolicy {
    /// Policy from the `[changelog]` section
    pub fn from_config(config: &ChangelogConfig) -> Self {
        Self {
            exclude_bots: config.exclude_bots,
            require_pr_reference: config.require_pr_reference,
            bots: config.bots.iter().cloned().collect(),
        }
    }

    pub fn with_require_pr_reference(mut self, require: bool) -> Self {
        self.require_pr_reference = require;
        self
    }

    pub fn with_exclude_bots(mut self, exclude: bool) -> Self {
        self.exclude_bots = exclude;
        self
    }

    fn is_bot(&self, entry: &ChangelogEntry) -> bool {
        self.bots.contains(&entry.author_display) || self.bots.contains(&entry.author_name)
    }

    /// Whether `entry` survives the policy
    pub fn allows(&self, entry: &ChangelogEntry) -> bool {
        if self.require_pr_reference && !entry.has_pr() {
            return false;
        }
        !(self.exclude_bots && self.is_bot(entry))
    }

    /// Filter in place, preserving order
    pub fn apply(&self, entries: Vec<ChangelogEntry>) -> Vec<ChangelogEntry> {
        let before = entries.len();
        let kept: Vec<_> = entries.into_iter().filter(|e| self.allows(e)).collect();
        debug!(before, after = kept.len(), "entries filtered");
        kept
    }
}

impl Default for FilterPolicy {
    fn default() -> Self {
        Self::from_config(&ChangelogConfig::default())
    }
}
