//! Label-based classification for pull requests

use regex::Regex;
use std::sync::LazyLock;

use gantry_github::Label;

/// Marker on labels that carry the change type, e.g. `[Type] Bug`
const TYPE_MARKER: &str = "[Type]";

/// Type used when no label carries one
pub const DEFAULT_TYPE: &str = "Dev";

/// Labels with a bracketed part anywhere are internal and never displayed
static BRACKETED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*\]").expect("Invalid regex"));

/// Type tag taken from the first `[Type]` label, or `Dev`
pub fn type_tag(labels: &[Label]) -> String {
    labels
        .iter()
        .find(|l| l.name.contains(TYPE_MARKER))
        .map(|l| l.name.replacen(TYPE_MARKER, "", 1).trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| DEFAULT_TYPE.to_string())
}

/// Non-bracketed label names joined with `", "`; empty when none remain
pub fn display_labels(labels: &[Label]) -> String {
    labels
        .iter()
        .filter(|l| !BRACKETED_REGEX.is_match(&l.name))
        .map(|l| l.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<Label> {
        names.iter().map(|n| Label::new(*n)).collect()
    }

    #[test]
    fn test_type_and_labels() {
        let labels = labels(&["[Type] Bug", "Priority: high"]);
        assert_eq!(type_tag(&labels), "Bug");
        assert_eq!(display_labels(&labels), "Priority: high");
    }

    #[test]
    fn test_default_type() {
        let labels = labels(&["Priority: low", "[Status] Needs Review"]);
        assert_eq!(type_tag(&labels), "Dev");
        assert_eq!(type_tag(&[]), "Dev");
    }

    #[test]
    fn test_first_type_label_wins() {
        let labels = labels(&["[Type] Enhancement", "[Type] Bug"]);
        assert_eq!(type_tag(&labels), "Enhancement");
    }

    #[test]
    fn test_bare_type_marker_falls_back() {
        assert_eq!(type_tag(&labels(&["[Type]"])), "Dev");
    }

    #[test]
    fn test_bracket_anywhere_is_hidden() {
        let labels = labels(&["UI", "needs [design]", "Accessibility", "[Pri] High"]);
        assert_eq!(display_labels(&labels), "UI, Accessibility");
    }

    #[test]
    fn test_no_displayable_labels() {
        assert_eq!(display_labels(&labels(&["[Type] Bug"])), "");
        assert_eq!(display_labels(&[]), "");
    }
}
