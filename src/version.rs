//! Version syntax validation for bump candidates.
//!
//! Only plain `major.minor` and `major.minor.patch` versions qualify as a
//! bump. Anything else (pre-release suffixes, build metadata, a leading `v`,
//! date-stamp identifiers, extra segments) needs human review and is rejected
//! by the classifier with a warning.

use regex::Regex;
use std::sync::LazyLock;

static BUMP_VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+(\.\d+)?$").expect("Invalid bump version regex"));

/// Returns true if the string is a plain `major.minor[.patch]` version.
pub fn is_bump_version(version: &str) -> bool {
    BUMP_VERSION_REGEX.is_match(version)
}
