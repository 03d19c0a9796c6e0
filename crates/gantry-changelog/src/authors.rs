//! Author name to handle mapping

use std::collections::BTreeMap;

use gantry_core::ChangelogConfig;

/// Immutable lookup from full author name to GitHub handle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorMap {
    handles: BTreeMap<String, String>,
}

impl AuthorMap {
    /// Build from `(full name, handle)` pairs; handles are stored without `@`
    pub fn new<I, N, H>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, H)>,
        N: Into<String>,
        H: Into<String>,
    {
        Self {
            handles: pairs
                .into_iter()
                .map(|(name, handle)| {
                    let handle: String = handle.into();
                    (name.into(), handle.trim_start_matches('@').to_string())
                })
                .collect(),
        }
    }

    /// Build from the `[changelog.authors]` table
    pub fn from_config(config: &ChangelogConfig) -> Self {
        Self::new(config.authors.clone())
    }

    /// `@handle` for known names, the name unchanged otherwise
    pub fn normalize(&self, name: &str) -> String {
        match self.handles.get(name) {
            Some(handle) => format!("@{}", handle),
            None => name.to_string(),
        }
    }
}
