//! # event-harvest
//!
//! Extracts human-readable event-name strings from arbitrary, loosely
//! structured HTML fragments.
//!
//! A pasted fragment is parsed once and run through an ordered chain of
//! five heuristic strategies, from the most structural signal (designated
//! marker classes inside flex containers) down to a last-resort walk over
//! raw text nodes. The first strategy that finds anything wins; its
//! candidates are filtered and deduplicated while preserving document
//! order.
//!
//! ## Quick Start
//!
//! ```rust
//! use event_harvest::extract;
//!
//! let html = r#"<div class="flex-1">
//!     <div class="ant-typography">Launch Call</div>
//!     <div class="ant-typography">Demo Day</div>
//! </div>"#;
//!
//! assert_eq!(extract(html), vec!["Launch Call", "Demo Day"]);
//! ```
//!
//! ## Features
//!
//! - **Fallback chain**: marker-class labels, image alt text, list items,
//!   and a heuristic text-node walk, tried strictly in that order
//! - **Noise filtering**: logo entries, synthetic stylesheet class names,
//!   and blank text never reach the output
//! - **Configurable markers**: the class names treated as label signals are
//!   plain [`Options`] fields
//! - **Clipboard export**: `" | "`-joined single-line output can be copied
//!   to the system clipboard (feature `clipboard`, default on)

mod error;
mod options;
mod patterns;
mod result;

/// DOM operations adapter providing capability-style queries over the
/// parsed fragment.
pub mod dom;

/// Candidate extraction: the ordered fallback strategy chain.
pub mod extractor;

/// Single-line reformatting of extracted candidates.
pub mod reformat;

/// Character encoding detection and transcoding for byte input.
pub mod encoding;

/// Interactive-surface state machine (placeholder, premature-action
/// guards, no-matches messaging).
pub mod session;

/// Single-slot cancellable status notification timer.
pub mod notify;

/// Clipboard export with a platform-utility fallback.
#[cfg(feature = "clipboard")]
pub mod clipboard;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::Options;
pub use result::{ExtractResult, Strategy};

/// Extracts event-name candidates from an HTML fragment using default
/// options.
///
/// Never fails: malformed markup is absorbed by the parser and a fragment
/// no strategy can read yields an empty list. Blank input short-circuits
/// to the empty list without parsing.
///
/// # Example
///
/// ```rust
/// use event_harvest::extract;
///
/// let events = extract(r#"<img alt="Logo"><img alt="Demo Day">"#);
/// assert_eq!(events, vec!["Demo Day"]);
/// ```
#[must_use]
pub fn extract(html: &str) -> Vec<String> {
    extract_with_options(html, &Options::default()).events
}

/// Extracts event-name candidates with custom options, reporting which
/// strategy fired.
///
/// # Example
///
/// ```rust
/// use event_harvest::{extract_with_options, Options, Strategy};
///
/// let options = Options {
///     label_class: "card-title".to_string(),
///     ..Options::default()
/// };
/// let result = extract_with_options(
///     r#"<span class="card-title">Town Hall</span>"#,
///     &options,
/// );
/// assert_eq!(result.events, vec!["Town Hall"]);
/// assert_eq!(result.strategy, Some(Strategy::FlatLabel));
/// ```
#[must_use]
pub fn extract_with_options(html: &str, options: &Options) -> ExtractResult {
    if html.trim().is_empty() {
        return ExtractResult::default();
    }
    let document = dom::parse(html);
    extractor::run(&document, options)
}

/// Extracts event-name candidates from HTML bytes with automatic encoding
/// detection.
///
/// The charset is sniffed from meta tags and the bytes are converted to
/// UTF-8 before extraction; invalid characters are replaced rather than
/// causing errors.
#[must_use]
pub fn extract_bytes(html: &[u8]) -> Vec<String> {
    let html = encoding::decode(html);
    extract(&html)
}

/// Extracts event-name candidates from HTML bytes with custom options and
/// automatic encoding detection.
#[must_use]
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> ExtractResult {
    let html = encoding::decode(html);
    extract_with_options(&html, options)
}
