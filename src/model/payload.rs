//! Lenient payload decoding and normalization.
//!
//! Decoding never fails: unknown fields are ignored, a malformed element
//! inside an array is skipped without affecting its siblings, and a payload
//! that is not even an object decodes to the template's empty default.
//! Normalization then enforces the contract the templates rely on:
//! clickable sub-elements without a non-empty action phrase are dropped
//! (templates never synthesize phrases), column counts are clamped to the
//! supported set, and `ThreeColumnLayout` is truncated to its first three
//! entries.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::model::content::{
    CardItem, ColumnDef, Cta, FlowDirection, FlowStep, MediaRef, RowDef, Section, TabDef, Trend,
};
use crate::registry::TemplateKind;

/// Column counts supported by grid layouts.
pub const SUPPORTED_COLUMNS: [u16; 4] = [2, 3, 4, 6];
pub const DEFAULT_COLUMNS: u16 = 3;

/// Clamp a generator-supplied column count to the supported set.
pub fn clamp_columns(raw: Option<u64>) -> u16 {
    match raw {
        Some(n) if SUPPORTED_COLUMNS.contains(&(n as u16)) => n as u16,
        _ => DEFAULT_COLUMNS,
    }
}

/// Deserialize a whole payload, falling back to the empty default on any
/// structural mismatch.
pub(crate) fn lenient<T: DeserializeOwned + Default>(value: &Value) -> T {
    serde_json::from_value(value.clone()).unwrap_or_default()
}

/// Read a string field, treating anything non-string as absent.
pub(crate) fn text(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Decode an array field element by element, skipping malformed entries.
pub(crate) fn seq<T: DeserializeOwned>(value: &Value, key: &str) -> Vec<T> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| serde_json::from_value(item.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}

/// Like [`seq`], trying keys in order and taking the first present one.
fn seq_first<T: DeserializeOwned>(value: &Value, keys: &[&str]) -> Vec<T> {
    keys.iter()
        .find(|key| value.get(**key).is_some())
        .map(|key| seq(value, key))
        .unwrap_or_default()
}

fn has_phrase(phrase: &str) -> bool {
    !phrase.trim().is_empty()
}

// ---------------------------------------------------------------------------
// Collection family
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct CollectionPayload {
    pub title: String,
    pub columns: u16,
    pub items: Vec<CardItem>,
}

impl CollectionPayload {
    pub fn decode(kind: TemplateKind, value: &Value) -> Self {
        let mut items: Vec<CardItem> = seq_first(value, &[collection_key(kind), "items"]);
        items.retain(|item| has_phrase(&item.action_phrase));
        Self {
            title: text(value, "title"),
            columns: clamp_columns(value.get("columns").and_then(Value::as_u64)),
            items,
        }
    }
}

/// Primary payload key per collection template; `items` is accepted as a
/// fallback everywhere.
fn collection_key(kind: TemplateKind) -> &'static str {
    match kind {
        TemplateKind::CardGrid | TemplateKind::NavigationGrid => "cards",
        TemplateKind::ClientLogoGrid => "logos",
        TemplateKind::FeatureList => "features",
        TemplateKind::ResourceLinks => "links",
        TemplateKind::ResultsGrid => "results",
        _ => "items",
    }
}

// ---------------------------------------------------------------------------
// Flow family
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct FlowPayload {
    pub title: String,
    pub direction: FlowDirection,
    pub steps: Vec<FlowStep>,
}

impl FlowPayload {
    pub fn decode(kind: TemplateKind, value: &Value) -> Self {
        let key = if kind == TemplateKind::LayerDiagram {
            "layers"
        } else {
            "steps"
        };
        let mut steps: Vec<FlowStep> = seq_first(value, &[key, "steps"]);
        steps.retain(|step| has_phrase(&step.action_phrase));
        let direction = value
            .get("direction")
            .and_then(|v| serde_json::from_value(v.clone()).ok())
            .unwrap_or_default();
        Self {
            title: text(value, "title"),
            direction,
            steps,
        }
    }
}

// ---------------------------------------------------------------------------
// Single-focus family
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConceptPayload {
    pub title: String,
    pub body: String,
    pub icon: Option<String>,
    pub media: Option<MediaRef>,
    pub action_phrase: String,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuotePayload {
    pub quote: String,
    pub attribution: Option<String>,
    pub action_phrase: String,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatPayload {
    pub value: String,
    pub label: String,
    pub trend: Option<Trend>,
    pub action_phrase: String,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProofPayload {
    pub title: String,
    pub body: String,
    pub source: Option<String>,
    pub action_phrase: String,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BannerPayload {
    pub headline: String,
    pub subline: Option<String>,
    pub button_label: Option<String>,
    pub action_phrase: String,
}

// ---------------------------------------------------------------------------
// Disclosure family
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct AccordionPayload {
    pub title: String,
    pub sections: Vec<Section>,
}

impl AccordionPayload {
    pub fn decode(value: &Value) -> Self {
        let mut sections: Vec<Section> = seq(value, "sections");
        sections.retain(|section| has_phrase(&section.action_phrase));
        Self {
            title: text(value, "title"),
            sections,
        }
    }
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExpandablePayload {
    pub title: String,
    pub body: String,
    pub default_expanded: bool,
}

#[derive(Debug, Clone, Default)]
pub struct TabsPayload {
    pub tabs: Vec<TabDef>,
    pub default_tab_id: Option<String>,
}

impl TabsPayload {
    pub fn decode(value: &Value) -> Self {
        let mut tabs: Vec<TabDef> = seq(value, "tabs");
        for tab in &mut tabs {
            // A CTA without a phrase is not clickable; drop it rather than
            // synthesize one.
            if let Some(cta) = &tab.cta
                && !has_phrase(&cta.action_phrase)
            {
                tab.cta = None;
            }
        }
        let default_tab_id = value
            .get("defaultTabId")
            .and_then(Value::as_str)
            .map(str::to_string);
        Self {
            tabs,
            default_tab_id,
        }
    }
}

// ---------------------------------------------------------------------------
// Tabular/columnar family
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct TablePayload {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<RowDef>,
}

impl TablePayload {
    pub fn decode(value: &Value) -> Self {
        let mut rows: Vec<RowDef> = seq(value, "rows");
        rows.retain(|row| has_phrase(&row.action_phrase));
        Self {
            title: text(value, "title"),
            headers: seq(value, "headers"),
            rows,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TwoColumnPayload {
    pub left: Option<ColumnDef>,
    pub right: Option<ColumnDef>,
}

impl TwoColumnPayload {
    pub fn decode(value: &Value) -> Self {
        let side = |key: &str| -> Option<ColumnDef> {
            let column: Option<ColumnDef> = value
                .get(key)
                .and_then(|v| serde_json::from_value(v.clone()).ok());
            column.filter(|c| has_phrase(&c.action_phrase))
        };
        Self {
            left: side("left"),
            right: side("right"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ThreeColumnPayload {
    pub columns: Vec<ColumnDef>,
}

impl ThreeColumnPayload {
    pub fn decode(value: &Value) -> Self {
        let mut columns: Vec<ColumnDef> = seq(value, "columns");
        // Truncation happens on the raw payload, before phrase validation;
        // long payloads lose everything past the third entry.
        columns.truncate(3);
        columns.retain(|c| has_phrase(&c.action_phrase));
        Self { columns }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn columns_clamp_to_supported_set() {
        assert_eq!(clamp_columns(None), 3);
        assert_eq!(clamp_columns(Some(2)), 2);
        assert_eq!(clamp_columns(Some(5)), 3);
        assert_eq!(clamp_columns(Some(6)), 6);
        assert_eq!(clamp_columns(Some(99)), 3);
    }

    #[test]
    fn malformed_array_elements_are_skipped() {
        let value = json!({
            "cards": [
                {"title": "ok", "actionPhrase": "tell me about ok"},
                42,
                {"title": "no phrase"},
                {"title": "also ok", "actionPhrase": "tell me more"},
            ]
        });
        let payload = CollectionPayload::decode(TemplateKind::CardGrid, &value);
        assert_eq!(payload.items.len(), 2);
        assert_eq!(payload.items[0].title, "ok");
        assert_eq!(payload.items[1].title, "also ok");
    }

    #[test]
    fn non_object_payload_decodes_to_empty_default() {
        let payload = CollectionPayload::decode(TemplateKind::CardGrid, &json!("nope"));
        assert!(payload.items.is_empty());
        assert_eq!(payload.columns, 3);
    }

    #[test]
    fn three_columns_truncate_before_validation() {
        let value = json!({
            "columns": [
                {"title": "A", "actionPhrase": "a"},
                {"title": "B", "actionPhrase": "b"},
                {"title": "C"},
                {"title": "D", "actionPhrase": "d"},
            ]
        });
        let payload = ThreeColumnPayload::decode(&value);
        // C is inside the first three but has no phrase; D never makes it in.
        assert_eq!(payload.columns.len(), 2);
        assert_eq!(payload.columns[1].title, "B");
    }

    #[test]
    fn tab_cta_without_phrase_is_dropped() {
        let value = json!({
            "tabs": [
                {"id": "a", "label": "A", "body": "body", "cta": {"label": "Go"}},
                {"id": "b", "label": "B", "body": "body", "cta": {"label": "Go", "actionPhrase": "go b"}},
            ]
        });
        let payload = TabsPayload::decode(&value);
        assert!(payload.tabs[0].cta.is_none());
        assert!(payload.tabs[1].cta.is_some());
    }

    #[test]
    fn whitespace_only_phrases_do_not_count() {
        let value = json!({
            "rows": [
                {"cells": ["x"], "actionPhrase": "   "},
                {"cells": ["y"], "actionPhrase": "row y"},
            ]
        });
        let payload = TablePayload::decode(&value);
        assert_eq!(payload.rows.len(), 1);
        assert_eq!(payload.rows[0].cells, vec!["y".to_string()]);
    }
}
