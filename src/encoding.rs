//! Character encoding detection and transcoding for byte input.
//!
//! Pasted fragments arrive as strings, but fragments read from disk may
//! carry a legacy encoding. The charset is sniffed from a meta tag in the
//! first kilobyte and the bytes are decoded lossily, replacing invalid
//! sequences with the replacement character rather than failing.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Matches the charset declaration in either meta form:
/// `<meta charset="...">` or
/// `<meta http-equiv="Content-Type" content="...; charset=...">`.
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("META_CHARSET regex")
});

/// Detect the character encoding of an HTML fragment.
///
/// Only the first 1024 bytes are examined. Unknown or missing declarations
/// fall back to UTF-8, the web default.
#[must_use]
pub fn detect(html: &[u8]) -> &'static Encoding {
    let head = &html[..html.len().min(1024)];
    let head = String::from_utf8_lossy(head);

    META_CHARSET
        .captures(&head)
        .and_then(|caps| caps.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode an HTML fragment to a UTF-8 string using the detected encoding.
///
/// Invalid sequences become the replacement character; this never fails.
#[must_use]
pub fn decode(html: &[u8]) -> String {
    let (text, _, _) = detect(html).decode(html);
    text.into_owned()
}
