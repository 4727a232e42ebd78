//! Marker configuration and its effect on the chain.

use event_harvest::{extract_with_options, Options, Strategy};

#[test]
fn custom_marker_classes_drive_the_structured_strategy() {
    let options = Options {
        container_class: "row".to_string(),
        label_class: "card-title".to_string(),
        secondary_class: "card-subtitle".to_string(),
        ..Options::default()
    };
    let html = r#"
        <div class="row">
            <div class="card-title">Launch Call</div>
            <div class="card-title card-subtitle">muted</div>
        </div>
    "#;

    let result = extract_with_options(html, &options);
    assert_eq!(result.strategy, Some(Strategy::StructuredLabel));
    assert_eq!(result.events, vec!["Launch Call"]);
}

#[test]
fn default_markers_do_not_match_custom_markup() {
    let html = r#"<div class="row"><div class="card-title">Launch Call</div></div>"#;

    // With default options this falls through to the text walk instead.
    let result = extract_with_options(html, &Options::default());
    assert_eq!(result.strategy, Some(Strategy::TextWalk));
    assert_eq!(result.events, vec!["Launch Call"]);
}

#[test]
fn invalid_marker_class_disables_only_the_label_strategies() {
    let options = Options {
        label_class: "not a css token".to_string(),
        ..Options::default()
    };
    let html = r#"
        <div class="flex-1"><div class="ant-typography">Launch Call</div></div>
        <img alt="Demo Day">
    "#;

    // Strategies 1 and 2 refuse to run; the chain proceeds to image alts.
    let result = extract_with_options(html, &options);
    assert_eq!(result.strategy, Some(Strategy::ImageAlt));
    assert_eq!(result.events, vec!["Demo Day"]);
}

#[test]
fn custom_stop_phrases_filter_list_items() {
    let options = Options {
        stop_phrases: vec!["cancelled".to_string()],
        ..Options::default()
    };
    let html = "<li>Demo Day</li><li>Launch Call (CANCELLED)</li>";

    let result = extract_with_options(html, &options);
    assert_eq!(result.events, vec!["Demo Day"]);
}

#[test]
fn raising_min_text_node_len_tightens_the_walk() {
    let options = Options {
        min_text_node_len: 6,
        ..Options::default()
    };
    let html = "<div>Short</div><div>Long Enough</div>";

    let result = extract_with_options(html, &options);
    assert_eq!(result.strategy, Some(Strategy::TextWalk));
    assert_eq!(result.events, vec!["Long Enough"]);
}
