//! Shared sub-element types carried inside template payloads.
//!
//! Generators omit fields freely, so every field defaults. A missing
//! decorative field (badge, description, icon) renders nothing; a clickable
//! sub-element arriving without an action phrase is dropped during payload
//! normalization rather than patched up here.

use serde::Deserialize;

/// An item in a collection template (card, link, feature, logo, result).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardItem {
    pub title: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub badge: Option<String>,
    pub url: Option<String>,
    pub action_phrase: String,
}

/// A node in a flow/layer diagram.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlowStep {
    pub title: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub action_phrase: String,
}

/// Layout direction for flow templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowDirection {
    #[default]
    Horizontal,
    Vertical,
}

/// A disclosure section (accordion item, expandable body).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Section {
    pub title: String,
    pub body: String,
    pub default_open: bool,
    pub action_phrase: String,
}

/// A call-to-action embedded in tab content or banners.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Cta {
    pub label: String,
    pub action_phrase: String,
}

/// One tab of a [`TabContent`](crate::registry::TemplateKind::TabContent) block.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TabDef {
    pub id: String,
    pub label: String,
    pub body: String,
    pub cta: Option<Cta>,
}

/// A data-table row; cells are plain display strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RowDef {
    pub cells: Vec<String>,
    pub action_phrase: String,
}

/// A column unit in the two/three-column templates.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnDef {
    pub title: String,
    pub body: String,
    pub icon: Option<String>,
    pub action_phrase: String,
}

/// Reference to externally generated media; rendered as an annotation only.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MediaRef {
    pub kind: String,
    pub reference: String,
}

/// Direction of a stat trend indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    #[default]
    Flat,
}

/// Optional trend annotation on a stat highlight.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Trend {
    pub direction: TrendDirection,
    pub delta: String,
}
