//! Shared post-filter and ordered dedup, applied to whichever strategy
//! fired.

use std::collections::HashSet;

use crate::patterns::SYNTHETIC_CLASS;

/// Drop blank candidates, the literal "logo" token, and synthetic
/// stylesheet class names.
pub(super) fn post_filter(candidates: Vec<String>) -> Vec<String> {
    candidates
        .into_iter()
        .map(|candidate| candidate.trim().to_string())
        .filter(|candidate| {
            !candidate.is_empty()
                && !candidate.eq_ignore_ascii_case("logo")
                && !SYNTHETIC_CLASS.is_match(candidate)
        })
        .collect()
}

/// Ordered dedup: the first occurrence wins, later equal elements are
/// dropped.
pub(super) fn dedup_first_seen(candidates: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|candidate| seen.insert(candidate.clone()))
        .collect()
}
