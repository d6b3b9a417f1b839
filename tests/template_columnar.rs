//! Tabular/columnar family: rows and columns as targets.

use serde_json::json;

use blockdeck::registry::TemplateKind;
use blockdeck::templates::Template;

mod common;
use common::{Recorder, mount, render_text};

#[test]
fn table_rows_are_targets_headers_are_not() {
    let recorder = Recorder::default();
    let mut table = mount(
        TemplateKind::DataTable,
        json!({"title": "Plans", "headers": ["Plan", "Seats"], "rows": [
            {"cells": ["Solo", "1"], "actionPhrase": "compare solo"},
            {"cells": ["Teams", "10"], "actionPhrase": "compare teams"},
        ]}),
    );
    assert_eq!(table.target_count(), 2);

    let text = render_text(&mut table);
    assert!(text.contains("Plan"));
    assert!(text.contains("Teams"));

    // First data row sits below the header strip.
    let target = table.target_at(3, 2).expect("first row");
    table.activate(target, &recorder.dispatcher());
    assert_eq!(recorder.notified(), vec!["compare solo"]);
}

#[test]
fn ragged_rows_render_without_padding_cells() {
    let mut table = mount(
        TemplateKind::DataTable,
        json!({"rows": [
            {"cells": ["a", "b", "c"], "actionPhrase": "abc"},
            {"cells": ["only"], "actionPhrase": "short row"},
        ]}),
    );
    assert_eq!(table.target_count(), 2);
    assert!(render_text(&mut table).contains("only"));
}

#[test]
fn two_column_handles_a_missing_side() {
    let recorder = Recorder::default();
    let mut cols = mount(
        TemplateKind::TwoColumnContent,
        json!({"left": {"title": "Before", "body": "Old way.", "actionPhrase": "what was before"}}),
    );
    assert_eq!(cols.target_count(), 1);
    let text = render_text(&mut cols);
    assert!(text.contains("Before"));

    cols.activate(0, &recorder.dispatcher());
    assert_eq!(recorder.notified(), vec!["what was before"]);
}

#[test]
fn two_column_right_only_still_indexes_from_zero() {
    let recorder = Recorder::default();
    let mut cols = mount(
        TemplateKind::TwoColumnContent,
        json!({"right": {"title": "After", "body": "New way.", "actionPhrase": "what changes after"}}),
    );
    assert_eq!(cols.target_count(), 1);
    cols.activate(0, &recorder.dispatcher());
    assert_eq!(recorder.notified(), vec!["what changes after"]);
}

#[test]
fn three_column_ignores_everything_past_the_third() {
    let recorder = Recorder::default();
    let mut cols = mount(
        TemplateKind::ThreeColumnLayout,
        json!({"columns": [
            {"title": "A", "body": "", "actionPhrase": "a"},
            {"title": "B", "body": "", "actionPhrase": "b"},
            {"title": "C", "body": "", "actionPhrase": "c"},
            {"title": "D", "body": "", "actionPhrase": "d"},
            {"title": "E", "body": "", "actionPhrase": "e"},
        ]}),
    );
    assert_eq!(cols.target_count(), 3);
    let text = render_text(&mut cols);
    assert!(text.contains('C'));
    assert!(!text.contains('D'));

    cols.activate(2, &recorder.dispatcher());
    assert_eq!(recorder.notified(), vec!["c"]);
    cols.activate(3, &recorder.dispatcher());
    assert_eq!(recorder.notified().len(), 1);
}

#[test]
fn empty_columnar_payloads_keep_their_shells() {
    let mut table = mount(TemplateKind::DataTable, json!({"title": "Empty"}));
    let text = render_text(&mut table);
    assert!(text.contains("Empty"));
    assert!(text.contains('┌'));

    let mut cols = mount(TemplateKind::ThreeColumnLayout, json!({}));
    assert!(render_text(&mut cols).contains('┌'));
}
