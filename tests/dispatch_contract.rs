//! The activation contract: click cue first, then one notification carrying
//! the untouched action phrase, for every template family.

use serde_json::json;

use blockdeck::registry::TemplateKind;
use blockdeck::templates::Template;

mod common;
use common::{Recorder, mount, render_text};

#[test]
fn collection_item_activation_cues_then_notifies_once() {
    let recorder = Recorder::default();
    let mut grid = mount(
        TemplateKind::CardGrid,
        json!({"cards": [
            {"title": "Pricing", "actionPhrase": "Take me to pricing"},
            {"title": "Docs", "actionPhrase": "Open the docs"},
        ]}),
    );
    grid.activate(1, &recorder.dispatcher());
    assert_eq!(recorder.events(), vec!["click", "notify:Open the docs"]);
}

#[test]
fn phrases_are_forwarded_verbatim() {
    let recorder = Recorder::default();
    let mut banner = mount(
        TemplateKind::CtaBanner,
        json!({"headline": "Go", "actionPhrase": "  Start my trial!  "}),
    );
    banner.activate(0, &recorder.dispatcher());
    assert_eq!(recorder.notified(), vec!["  Start my trial!  "]);
}

#[test]
fn out_of_range_activation_is_silent() {
    let recorder = Recorder::default();
    let mut grid = mount(
        TemplateKind::CardGrid,
        json!({"cards": [{"title": "Only", "actionPhrase": "only"}]}),
    );
    grid.activate(7, &recorder.dispatcher());
    assert!(recorder.events().is_empty());
}

#[test]
fn mouse_hit_maps_to_the_rendered_item() {
    let recorder = Recorder::default();
    let mut grid = mount(
        TemplateKind::NavigationGrid,
        json!({"columns": 2, "cards": [
            {"title": "Left", "actionPhrase": "go left"},
            {"title": "Right", "actionPhrase": "go right"},
        ]}),
    );
    render_text(&mut grid);

    // Two columns over a 60-wide shell: the second cell starts past x=30.
    let target = grid.target_at(40, 2).expect("right cell is clickable");
    grid.activate(target, &recorder.dispatcher());
    assert_eq!(recorder.notified(), vec!["go right"]);
}

#[test]
fn repeated_activation_notifies_every_time() {
    let recorder = Recorder::default();
    let mut stat = mount(
        TemplateKind::StatHighlight,
        json!({"value": "42", "label": "answers", "actionPhrase": "explain the stat"}),
    );
    let host = recorder.dispatcher();
    stat.activate(0, &host);
    stat.activate(0, &host);
    assert_eq!(recorder.notified().len(), 2);
}
