//! DOM Operations Adapter
//!
//! Wraps the `dom_query` crate behind the handful of capability-style
//! queries the strategy chain needs: parse a fragment, read text and
//! attributes, test class tokens, and walk text-bearing leaves. Strategies
//! never touch `dom_query` directly.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Re-export StrTendril for zero-copy text passing
pub use tendril::StrTendril;

/// Parse an HTML fragment into a document.
///
/// The underlying html5ever parser is error-tolerant: malformed markup is
/// repaired rather than rejected, so parsing never fails.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Get all text content of the selection and its descendants.
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get an attribute value as an owned string.
#[inline]
#[must_use]
pub fn attr(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|v| v.to_string())
}

/// Get tag name (lowercase).
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

/// Test whether the selection's class attribute contains `token` as a
/// whole whitespace-separated token.
///
/// Substring matching would confuse `ant-typography` with
/// `ant-typography-secondary`; token matching does not.
#[must_use]
pub fn has_class_token(sel: &Selection, token: &str) -> bool {
    sel.attr("class")
        .is_some_and(|classes| classes.split_ascii_whitespace().any(|t| t == token))
}

/// Collect the text content of every text node under `root`, in document
/// order.
///
/// Text inside script, style, and noscript subtrees is skipped; it is
/// never label material.
#[must_use]
pub fn text_leaves(root: &Selection) -> Vec<String> {
    let mut out = Vec::new();
    let Some(root_node) = root.nodes().first().copied() else {
        return out;
    };

    for node in root_node.descendants() {
        if !node.is_text() {
            continue;
        }
        let raw_text_parent = node.parent().is_some_and(|parent| {
            parent.is_element()
                && parent.node_name().is_some_and(|tag| {
                    tag.eq_ignore_ascii_case("script")
                        || tag.eq_ignore_ascii_case("style")
                        || tag.eq_ignore_ascii_case("noscript")
                })
        });
        if raw_text_parent {
            continue;
        }
        out.push(node.text().to_string());
    }

    out
}
