//! Configuration options for candidate extraction.
//!
//! The marker classes are heuristic signals, not semantic guarantees: the
//! defaults match the Ant Design markup the tool was originally pointed at,
//! and can be swapped for whatever class names the pasted fragments carry.

/// Configuration options for candidate extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use event_harvest::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     label_class: "card-title".to_string(),
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Marker class of the flexible layout containers searched by the
    /// structured-label strategy.
    ///
    /// Default: `"flex-1"`
    pub container_class: String,

    /// Marker class of primary text labels (structured and flat label
    /// strategies).
    ///
    /// Default: `"ant-typography"`
    pub label_class: String,

    /// Marker class of secondary/muted text, excluded by the
    /// structured-label strategy.
    ///
    /// Default: `"ant-typography-secondary"`
    pub secondary_class: String,

    /// Text nodes whose trimmed length (in characters) does not exceed this
    /// are ignored by the last-resort text-node walk.
    ///
    /// Default: `2`
    pub min_text_node_len: usize,

    /// Phrases that disqualify a list item. An item whose lowercased text
    /// contains any of these (compared case-insensitively) is skipped by
    /// the list-item strategy.
    ///
    /// Default: `["have a integration request", "logo"]`
    pub stop_phrases: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            container_class: "flex-1".to_string(),
            label_class: "ant-typography".to_string(),
            secondary_class: "ant-typography-secondary".to_string(),
            min_text_node_len: 2,
            stop_phrases: vec![
                "have a integration request".to_string(),
                "logo".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = Options::default();

        assert_eq!(opts.container_class, "flex-1");
        assert_eq!(opts.label_class, "ant-typography");
        assert_eq!(opts.secondary_class, "ant-typography-secondary");
        assert_eq!(opts.min_text_node_len, 2);
        assert_eq!(opts.stop_phrases.len(), 2);
        assert!(opts.stop_phrases.iter().any(|p| p == "logo"));
    }

    #[test]
    fn test_custom_marker_classes() {
        let opts = Options {
            container_class: "row".to_string(),
            label_class: "card-title".to_string(),
            ..Options::default()
        };

        assert_eq!(opts.container_class, "row");
        assert_eq!(opts.label_class, "card-title");
        // Untouched fields keep their defaults
        assert_eq!(opts.secondary_class, "ant-typography-secondary");
    }
}
