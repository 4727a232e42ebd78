//! Result types for extraction output.

use serde::Serialize;

/// The fallback strategy that produced a result.
///
/// Strategies are mutually exclusive: the chain stops at the first one that
/// yields any raw candidate, so a result carries at most one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Primary-label nodes inside flex-container nodes.
    StructuredLabel,
    /// Primary-label spans regardless of nesting.
    FlatLabel,
    /// `img` alt attributes.
    ImageAlt,
    /// List-item text.
    ListItem,
    /// Last-resort walk over all text nodes.
    TextWalk,
}

impl Strategy {
    /// Stable snake_case name, as used in the CLI JSON envelope.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StructuredLabel => "structured_label",
            Self::FlatLabel => "flat_label",
            Self::ImageAlt => "image_alt",
            Self::ListItem => "list_item",
            Self::TextWalk => "text_walk",
        }
    }
}

/// Result of candidate extraction from an HTML fragment.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExtractResult {
    /// Deduplicated candidate event names, first-seen order.
    pub events: Vec<String>,

    /// Which strategy fired, or `None` when every strategy came up empty.
    ///
    /// A strategy can fire and still leave `events` empty when the shared
    /// post-filter drops everything it collected.
    pub strategy: Option<Strategy>,
}
