//! Last-resort text-node walk (chain position 5).
//!
//! The least reliable strategy: it sees every text node in the fragment
//! and keeps the ones shaped like a label. The shape test lives in
//! [`looks_like_label`] as a plain predicate so it stays independently
//! testable.

use std::collections::HashSet;

use crate::dom::{self, Document};
use crate::options::Options;

/// Strategy 5: walk all text nodes under the fragment body and keep
/// label-shaped text. Candidates are deduplicated here by exact string
/// equality, preserving first-occurrence walk order.
pub(super) fn walk_text_nodes(doc: &Document, options: &Options) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for raw in dom::text_leaves(&doc.select("body")) {
        let text = raw.trim();
        if text.chars().count() <= options.min_text_node_len {
            continue;
        }
        if !looks_like_label(text) {
            continue;
        }
        let lowered = text.to_lowercase();
        if lowered.contains("logo") || lowered.contains("css") {
            continue;
        }
        let owned = text.to_string();
        if seen.insert(owned.clone()) {
            out.push(owned);
        }
    }

    out
}

/// Label-shape heuristic: an ASCII uppercase first character followed by at
/// least one further ASCII letter or digit anywhere after it.
///
/// Punctuation-only or decorative text ("***", "- - -") fails the second
/// condition; ordinary prose fails the first unless it is capitalized.
#[must_use]
pub fn looks_like_label(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => chars.any(|c| c.is_ascii_alphanumeric()),
        _ => false,
    }
}
