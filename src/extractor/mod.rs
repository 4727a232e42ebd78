//! Candidate extraction: the ordered fallback chain.
//!
//! Five strategies run in priority order; the chain stops at the first one
//! that collects any raw candidate. Results are never merged across
//! strategies. Whichever strategy fires, its candidates go through the same
//! post-filter and first-seen dedup before being returned.

mod filters;
mod markup;
mod textwalk;

pub use textwalk::looks_like_label;

use crate::dom::Document;
use crate::options::Options;
use crate::result::{ExtractResult, Strategy};

type StrategyFn = fn(&Document, &Options) -> Vec<String>;

/// Run the fallback chain over a parsed fragment.
pub(crate) fn run(doc: &Document, options: &Options) -> ExtractResult {
    let chain: [(Strategy, StrategyFn); 5] = [
        (Strategy::StructuredLabel, markup::structured_labels),
        (Strategy::FlatLabel, markup::flat_labels),
        (Strategy::ImageAlt, markup::image_alts),
        (Strategy::ListItem, markup::list_items),
        (Strategy::TextWalk, textwalk::walk_text_nodes),
    ];

    for (strategy, collect) in chain {
        let raw = collect(doc, options);
        if raw.is_empty() {
            continue;
        }

        if cfg!(debug_assertions) {
            eprintln!(
                "DEBUG: strategy {} produced {} raw candidate(s)",
                strategy.as_str(),
                raw.len()
            );
        }

        // The chain advances on raw candidates; the post-filter may still
        // empty the result without reopening later strategies.
        let events = filters::dedup_first_seen(filters::post_filter(raw));
        return ExtractResult {
            events,
            strategy: Some(strategy),
        };
    }

    ExtractResult::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    fn extract(html: &str) -> ExtractResult {
        run(&dom::parse(html), &Options::default())
    }

    #[test]
    fn chain_stops_at_first_producing_strategy() {
        // Typography labels present: the image alt must never be reached.
        let html = r#"
            <div class="flex-1"><div class="ant-typography">Launch Call</div></div>
            <img alt="Demo Day">
        "#;
        let result = extract(html);

        assert_eq!(result.strategy, Some(Strategy::StructuredLabel));
        assert_eq!(result.events, vec!["Launch Call"]);
    }

    #[test]
    fn empty_fragment_reports_no_strategy() {
        let result = extract("<div></div>");
        assert!(result.events.is_empty());
        assert!(result.strategy.is_none());
    }

    #[test]
    fn fired_strategy_is_reported_even_when_post_filter_empties_it() {
        // The alt strategy collects "css-1abc2d", the post-filter drops it.
        let result = extract(r#"<img alt="css-1abc2d">"#);

        assert_eq!(result.strategy, Some(Strategy::ImageAlt));
        assert!(result.events.is_empty());
    }
}
