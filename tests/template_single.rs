//! Single-focus family: one optional target, optional decorations.

use serde_json::json;

use blockdeck::registry::TemplateKind;
use blockdeck::templates::Template;

mod common;
use common::{Recorder, mount, render_text};

#[test]
fn concept_card_shows_title_body_and_media_line() {
    let mut card = mount(
        TemplateKind::ConceptCard,
        json!({
            "title": "Action phrases",
            "body": "Clicks become sentences.",
            "media": {"kind": "video", "reference": "intro.mp4"},
            "actionPhrase": "tell me more",
        }),
    );
    assert_eq!(card.target_count(), 1);
    let text = render_text(&mut card);
    assert!(text.contains("Action phrases"));
    assert!(text.contains("Clicks become sentences."));
    assert!(text.contains("▣ video · intro.mp4"));
}

#[test]
fn missing_action_phrase_means_zero_targets() {
    let mut card = mount(
        TemplateKind::ConceptCard,
        json!({"title": "Static", "body": "Nothing to click."}),
    );
    assert_eq!(card.target_count(), 0);
    let recorder = Recorder::default();
    card.activate(0, &recorder.dispatcher());
    assert!(recorder.events().is_empty());
    // Still renders; absence of a phrase never suppresses the card.
    assert!(render_text(&mut card).contains("Static"));
}

#[test]
fn quote_attribution_is_optional() {
    let mut with = mount(
        TemplateKind::QuoteCard,
        json!({"quote": "It works.", "attribution": "Sam", "actionPhrase": "who said that"}),
    );
    let text = render_text(&mut with);
    assert!(text.contains("“It works.”"));
    assert!(text.contains("— Sam"));

    let mut without = mount(TemplateKind::QuoteCard, json!({"quote": "Anonymous praise."}));
    assert!(!render_text(&mut without).contains('—'));
}

#[test]
fn stat_trend_glyph_tracks_direction() {
    let up = json!({"value": "9", "label": "x", "trend": {"direction": "up", "delta": "+2"}});
    let down = json!({"value": "9", "label": "x", "trend": {"direction": "down", "delta": "-2"}});
    let flat = json!({"value": "9", "label": "x", "trend": {"direction": "flat"}});

    let mut stat = mount(TemplateKind::StatHighlight, up);
    assert!(render_text(&mut stat).contains("▲ +2"));
    let mut stat = mount(TemplateKind::StatHighlight, down);
    assert!(render_text(&mut stat).contains("▼ -2"));
    let mut stat = mount(TemplateKind::StatHighlight, flat);
    assert!(render_text(&mut stat).contains('◆'));
}

#[test]
fn proof_point_labels_its_source() {
    let mut proof = mount(
        TemplateKind::ProofPointCard,
        json!({"title": "Benchmarked", "body": "Fast.", "source": "2026 report"}),
    );
    assert!(render_text(&mut proof).contains("Source: 2026 report"));
}

#[test]
fn cta_banner_button_notifies() {
    let recorder = Recorder::default();
    let mut banner = mount(
        TemplateKind::CtaBanner,
        json!({"headline": "Go", "buttonLabel": "Start now", "actionPhrase": "Start my trial"}),
    );
    let text = render_text(&mut banner);
    assert!(text.contains("[ Start now ]"));

    banner.activate(0, &recorder.dispatcher());
    assert_eq!(recorder.events(), vec!["click", "notify:Start my trial"]);
}
