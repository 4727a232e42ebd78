//! Selector-driven strategies: marker-class labels, image alt text, and
//! list items (chain positions 1-4).

use crate::dom::{self, Document};
use crate::options::Options;
use crate::patterns::{CLASS_TOKEN, WHITESPACE_RUNS};

/// Build a `tag.class` selector, refusing marker classes that are not
/// plain identifier tokens. A refused selector disables the strategy
/// instead of producing a broken query.
fn marker_selector(tag: &str, class: &str) -> Option<String> {
    CLASS_TOKEN
        .is_match(class)
        .then(|| format!("{tag}.{class}"))
}

/// Strategy 1: primary-label nodes nested inside flex-container nodes,
/// in document order. Nodes carrying the secondary marker are excluded.
pub(super) fn structured_labels(doc: &Document, options: &Options) -> Vec<String> {
    let Some(container) = marker_selector("div", &options.container_class) else {
        return Vec::new();
    };
    let Some(label) = marker_selector("div", &options.label_class) else {
        return Vec::new();
    };
    let selector = format!("{container} {label}");

    let mut out = Vec::new();
    for node in doc.select(&selector).iter() {
        if dom::has_class_token(&node, &options.secondary_class) {
            continue;
        }
        let text = dom::text_content(&node).trim().to_string();
        if !text.is_empty() {
            out.push(text);
        }
    }
    out
}

/// Strategy 2: primary-label spans, independent of any container.
pub(super) fn flat_labels(doc: &Document, options: &Options) -> Vec<String> {
    let Some(selector) = marker_selector("span", &options.label_class) else {
        return Vec::new();
    };

    let mut out = Vec::new();
    for node in doc.select(&selector).iter() {
        let text = dom::text_content(&node).trim().to_string();
        if !text.is_empty() {
            out.push(text);
        }
    }
    out
}

/// Strategy 3: image alt attributes, skipping the literal "logo".
pub(super) fn image_alts(doc: &Document, _options: &Options) -> Vec<String> {
    let mut out = Vec::new();
    for img in doc.select("img[alt]").iter() {
        let Some(alt) = dom::attr(&img, "alt") else {
            continue;
        };
        let alt = alt.trim();
        if alt.is_empty() || alt.eq_ignore_ascii_case("logo") {
            continue;
        }
        out.push(alt.to_string());
    }
    out
}

/// Strategy 4: list-item text with whitespace runs collapsed, skipping
/// items that contain a configured stop phrase.
pub(super) fn list_items(doc: &Document, options: &Options) -> Vec<String> {
    let mut out = Vec::new();
    for li in doc.select("li").iter() {
        let text = dom::text_content(&li);
        let text = WHITESPACE_RUNS.replace_all(text.trim(), " ").to_string();
        if text.is_empty() {
            continue;
        }
        let lowered = text.to_lowercase();
        if options
            .stop_phrases
            .iter()
            .any(|phrase| lowered.contains(&phrase.to_lowercase()))
        {
            continue;
        }
        out.push(text);
    }
    out
}
