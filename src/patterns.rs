//! Compiled regex patterns used across the extraction pipeline.
//!
//! All patterns are compiled once at first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Matches synthetic stylesheet class names (`css-1abc2d` and friends)
/// that CSS-in-JS frameworks leak into text content. Case-sensitive,
/// anchored to the whole candidate.
pub static SYNTHETIC_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^css-\w+$").expect("SYNTHETIC_CLASS regex"));

/// Matches runs of whitespace for collapsing to single spaces.
pub static WHITESPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUNS regex"));

/// Guards marker class names before they are interpolated into a CSS
/// selector. Anything that is not a plain identifier token refuses to form
/// a selector, which disables the strategy instead of producing a broken
/// query.
pub static CLASS_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_-]*$").expect("CLASS_TOKEN regex"));
