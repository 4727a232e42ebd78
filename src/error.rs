//! Error types for event-harvest.
//!
//! Extraction itself never fails: an unusable fragment simply yields an
//! empty candidate list. The variants here cover the session boundary
//! (blank input, acting before a usable extraction exists) and the
//! clipboard export.

/// Error type for session and export operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Extraction was triggered with blank input.
    #[error("no HTML input provided")]
    EmptyInput,

    /// Reformat or copy was requested before a usable extraction exists.
    #[error("no extraction result available yet")]
    NothingExtracted,

    /// Both the primary clipboard capability and the fallback failed.
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
}

/// Result type alias for session and export operations.
pub type Result<T> = std::result::Result<T, Error>;
