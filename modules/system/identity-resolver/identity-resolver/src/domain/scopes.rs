//! Scope string parsing.

use std::collections::BTreeSet;

/// Split a stored scope string into a scope set.
///
/// Missing, empty and whitespace-only strings give the empty set; repeated
/// scopes collapse.
#[must_use]
pub fn parse_scopes(raw: Option<&str>) -> BTreeSet<String> {
    raw.unwrap_or_default()
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}
