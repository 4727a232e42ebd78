//! Strategy-chain behavior over whole fragments.

use event_harvest::{extract, extract_with_options, Options, Strategy};

#[test]
fn structured_labels_win_in_document_order() {
    let html = r#"
        <div class="flex-1">
            <div class="ant-typography">Launch Call</div>
            <div class="ant-typography ant-typography-secondary">Tomorrow, 9am</div>
        </div>
        <div class="flex-1"><div class="ant-typography">Demo Day</div></div>
    "#;

    assert_eq!(extract(html), vec!["Launch Call", "Demo Day"]);
}

#[test]
fn spec_example_single_structured_label() {
    let html = r#"<div class="flex-1"><div class="ant-typography">Launch Call</div></div>"#;
    assert_eq!(extract(html), vec!["Launch Call"]);
}

#[test]
fn structured_labels_suppress_every_later_strategy() {
    let html = r#"
        <div class="flex-1"><div class="ant-typography">Launch Call</div></div>
        <span class="ant-typography">Flat Label</span>
        <img alt="Demo Day">
        <li>List Entry</li>
    "#;

    let result = extract_with_options(html, &Options::default());
    assert_eq!(result.strategy, Some(Strategy::StructuredLabel));
    assert_eq!(result.events, vec!["Launch Call"]);
}

#[test]
fn flat_spans_fire_when_no_structured_label_matches() {
    let html = r#"
        <span class="ant-typography">Town Hall</span>
        <img alt="Demo Day">
    "#;

    let result = extract_with_options(html, &Options::default());
    assert_eq!(result.strategy, Some(Strategy::FlatLabel));
    assert_eq!(result.events, vec!["Town Hall"]);
}

#[test]
fn spec_example_image_alts_skip_logo() {
    let html = r#"<img alt="Logo"/><img alt="Demo Day">"#;

    let result = extract_with_options(html, &Options::default());
    assert_eq!(result.strategy, Some(Strategy::ImageAlt));
    assert_eq!(result.events, vec!["Demo Day"]);
}

#[test]
fn spec_example_list_items_collapse_whitespace() {
    let html = "<li>  Weekly   Sync  </li><li>logo</li>";

    let result = extract_with_options(html, &Options::default());
    assert_eq!(result.strategy, Some(Strategy::ListItem));
    assert_eq!(result.events, vec!["Weekly Sync"]);
}

#[test]
fn list_items_skip_the_integration_request_row() {
    let html = "<li>Demo Day</li><li>Have a Integration Request? Contact us</li>";
    assert_eq!(extract(html), vec!["Demo Day"]);
}

#[test]
fn text_walk_is_the_last_resort() {
    let html = "<div>Launch Call</div><p>plain prose stays out</p>";

    let result = extract_with_options(html, &Options::default());
    assert_eq!(result.strategy, Some(Strategy::TextWalk));
    assert_eq!(result.events, vec!["Launch Call"]);
}

#[test]
fn output_is_deduplicated_preserving_first_occurrence() {
    let html = r#"
        <div class="flex-1"><div class="ant-typography">Demo Day</div></div>
        <div class="flex-1"><div class="ant-typography">Launch Call</div></div>
        <div class="flex-1"><div class="ant-typography">Demo Day</div></div>
    "#;

    assert_eq!(extract(html), vec!["Demo Day", "Launch Call"]);
}

#[test]
fn post_filter_applies_to_every_strategy() {
    // Even a structured label is dropped when it is only a synthetic
    // stylesheet class name or the logo token.
    let html = r#"
        <div class="flex-1">
            <div class="ant-typography">css-1abc2d</div>
            <div class="ant-typography">Logo</div>
            <div class="ant-typography">Launch Call</div>
        </div>
    "#;

    assert_eq!(extract(html), vec!["Launch Call"]);
}

#[test]
fn no_returned_element_is_logo_or_a_synthetic_class() {
    let html = r#"
        <li>logo</li>
        <li>css-abc</li>
        <li>Demo Day</li>
    "#;

    let events = extract(html);
    for event in &events {
        assert!(!event.eq_ignore_ascii_case("logo"));
        assert!(!regex_like_synthetic(event));
    }
    assert_eq!(events, vec!["Demo Day"]);
}

fn regex_like_synthetic(s: &str) -> bool {
    s.strip_prefix("css-")
        .is_some_and(|rest| !rest.is_empty() && rest.chars().all(|c| c.is_alphanumeric() || c == '_'))
}

#[test]
fn empty_and_blank_fragments_yield_empty_results() {
    assert!(extract("").is_empty());
    assert!(extract("   \n\t  ").is_empty());
}

#[test]
fn unreadable_fragment_yields_empty_result_not_error() {
    let result = extract_with_options("<div><span>ok</span></div>", &Options::default());
    // "ok" is lowercase and short: no strategy can use it
    assert!(result.events.is_empty());
    assert!(result.strategy.is_none());
}

#[test]
fn extract_bytes_transcodes_before_extraction() {
    let html: &[u8] =
        b"<meta charset=\"ISO-8859-1\"><div class=\"flex-1\"><div class=\"ant-typography\">Caf\xe9 Mixer</div></div>";

    assert_eq!(event_harvest::extract_bytes(html), vec!["Caf\u{e9} Mixer"]);
}
