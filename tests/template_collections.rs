//! Collection family rendering: lenient decoding, empty shells, icon
//! fallback and per-variant row markers.

use serde_json::json;

use blockdeck::registry::TemplateKind;
use blockdeck::templates::Template;

mod common;
use common::{mount, render_text};

#[test]
fn empty_collection_still_renders_its_shell() {
    let mut grid = mount(TemplateKind::CardGrid, json!({"title": "Features", "cards": []}));
    assert_eq!(grid.target_count(), 0);
    let text = render_text(&mut grid);
    assert!(text.contains("Features"));
    assert!(text.contains('┌'), "container border expected:\n{text}");
}

#[test]
fn items_without_action_phrases_are_dropped() {
    let mut grid = mount(
        TemplateKind::CardGrid,
        json!({"cards": [
            {"title": "Kept", "actionPhrase": "keep me"},
            {"title": "Dropped"},
            {"title": "Also dropped", "actionPhrase": "   "},
        ]}),
    );
    assert_eq!(grid.target_count(), 1);
    let text = render_text(&mut grid);
    assert!(text.contains("Kept"));
    assert!(!text.contains("Dropped"));
}

#[test]
fn malformed_entries_are_skipped_not_fatal() {
    let mut grid = mount(
        TemplateKind::CardGrid,
        json!({"cards": [
            42,
            {"title": "Real", "actionPhrase": "real"},
            "nonsense",
        ]}),
    );
    assert_eq!(grid.target_count(), 1);
}

#[test]
fn unknown_icon_names_fall_back_to_the_neutral_glyph() {
    let mut grid = mount(
        TemplateKind::IconGrid,
        json!({"items": [{"title": "Thing", "icon": "definitely-not-an-icon", "actionPhrase": "thing"}]}),
    );
    let text = render_text(&mut grid);
    assert!(text.contains('•'), "fallback glyph expected:\n{text}");
}

#[test]
fn card_badge_only_renders_when_present() {
    let mut with_badge = mount(
        TemplateKind::CardGrid,
        json!({"cards": [{"title": "New thing", "badge": "Beta", "actionPhrase": "a"}]}),
    );
    assert!(render_text(&mut with_badge).contains("[Beta]"));

    let mut without = mount(
        TemplateKind::CardGrid,
        json!({"cards": [{"title": "Plain thing", "actionPhrase": "a"}]}),
    );
    assert!(!render_text(&mut without).contains('['));
}

#[test]
fn numbered_list_counts_from_one() {
    let mut list = mount(
        TemplateKind::NumberedList,
        json!({"items": [
            {"title": "First", "actionPhrase": "one"},
            {"title": "Second", "actionPhrase": "two"},
        ]}),
    );
    let text = render_text(&mut list);
    assert!(text.contains("1. First"));
    assert!(text.contains("2. Second"));
}

#[test]
fn resource_links_show_marker_and_url() {
    let mut links = mount(
        TemplateKind::ResourceLinks,
        json!({"links": [{"title": "Guide", "url": "https://example.com/guide", "actionPhrase": "open"}]}),
    );
    let text = render_text(&mut links);
    assert!(text.contains("↗ Guide"));
    assert!(text.contains("https://example.com/guide"));
}

#[test]
fn unsupported_column_counts_clamp_to_default() {
    // 5 is not a supported layout; falls back to 3 columns, so 4 items
    // span two rows.
    let mut grid = mount(
        TemplateKind::CardGrid,
        json!({"columns": 5, "cards": [
            {"title": "A", "actionPhrase": "a"},
            {"title": "B", "actionPhrase": "b"},
            {"title": "C", "actionPhrase": "c"},
            {"title": "D", "actionPhrase": "d"},
        ]}),
    );
    render_text(&mut grid);
    let first = grid.target_at(2, 2).expect("first cell");
    let fourth = grid.target_at(2, 6).expect("second row cell");
    assert_eq!(first, 0);
    assert_eq!(fourth, 3);
}
