//! Pull request reference matching
//!
//! Squash-merged commits carry their PR number as a trailing `(#123)` token.

use regex::Regex;
use std::sync::LazyLock;

static PR_REFERENCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(#(?P<number>\d+)\)").expect("Invalid regex"));

/// A `(#N)` token found in a commit message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrReference<'a> {
    /// Pull request number
    pub number: u64,
    /// Message text preceding the token, verbatim
    pub before: &'a str,
}

/// Find the first `(#<digits>)` token in `message`.
///
/// Later tokens are ignored. Returns `None` when there is no token (or the
/// number does not fit in a `u64`).
pub fn match_pr_reference(message: &str) -> Option<PrReference<'_>> {
    let caps = PR_REFERENCE_REGEX.captures(message)?;
    let token = caps.get(0)?;
    let number = caps.name("number")?.as_str().parse().ok()?;

    Some(PrReference {
        number,
        before: &message[..token.start()],
    })
}
