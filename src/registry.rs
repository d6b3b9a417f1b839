//! The fixed name→template lookup table.
//!
//! Lookup is by exact string key over a table fixed at build time; there is
//! no aliasing and no fuzzy matching in resolution itself. The nearest-key
//! suggestion on [`ResolveError`] exists purely so the host can print a
//! useful diagnostic.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde_json::Value;
use thiserror::Error;

use crate::templates::{self, Template};

/// Every registered template, one variant per key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TemplateKind {
    CardGrid,
    IconGrid,
    NavigationGrid,
    ClientLogoGrid,
    FeatureList,
    NumberedList,
    ResourceLinks,
    ResultsGrid,
    FlowDiagram,
    DataFlowDiagram,
    LayerDiagram,
    ConceptCard,
    QuoteCard,
    StatHighlight,
    ProofPointCard,
    CtaBanner,
    AccordionList,
    ExpandableSection,
    TabContent,
    DataTable,
    TwoColumnContent,
    ThreeColumnLayout,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 22] = [
        TemplateKind::CardGrid,
        TemplateKind::IconGrid,
        TemplateKind::NavigationGrid,
        TemplateKind::ClientLogoGrid,
        TemplateKind::FeatureList,
        TemplateKind::NumberedList,
        TemplateKind::ResourceLinks,
        TemplateKind::ResultsGrid,
        TemplateKind::FlowDiagram,
        TemplateKind::DataFlowDiagram,
        TemplateKind::LayerDiagram,
        TemplateKind::ConceptCard,
        TemplateKind::QuoteCard,
        TemplateKind::StatHighlight,
        TemplateKind::ProofPointCard,
        TemplateKind::CtaBanner,
        TemplateKind::AccordionList,
        TemplateKind::ExpandableSection,
        TemplateKind::TabContent,
        TemplateKind::DataTable,
        TemplateKind::TwoColumnContent,
        TemplateKind::ThreeColumnLayout,
    ];

    /// The registered key, exactly as the generator names it.
    pub fn name(self) -> &'static str {
        match self {
            TemplateKind::CardGrid => "CardGrid",
            TemplateKind::IconGrid => "IconGrid",
            TemplateKind::NavigationGrid => "NavigationGrid",
            TemplateKind::ClientLogoGrid => "ClientLogoGrid",
            TemplateKind::FeatureList => "FeatureList",
            TemplateKind::NumberedList => "NumberedList",
            TemplateKind::ResourceLinks => "ResourceLinks",
            TemplateKind::ResultsGrid => "ResultsGrid",
            TemplateKind::FlowDiagram => "FlowDiagram",
            TemplateKind::DataFlowDiagram => "DataFlowDiagram",
            TemplateKind::LayerDiagram => "LayerDiagram",
            TemplateKind::ConceptCard => "ConceptCard",
            TemplateKind::QuoteCard => "QuoteCard",
            TemplateKind::StatHighlight => "StatHighlight",
            TemplateKind::ProofPointCard => "ProofPointCard",
            TemplateKind::CtaBanner => "CTABanner",
            TemplateKind::AccordionList => "AccordionList",
            TemplateKind::ExpandableSection => "ExpandableSection",
            TemplateKind::TabContent => "TabContent",
            TemplateKind::DataTable => "DataTable",
            TemplateKind::TwoColumnContent => "TwoColumnContent",
            TemplateKind::ThreeColumnLayout => "ThreeColumnLayout",
        }
    }
}

static TABLE: Lazy<BTreeMap<&'static str, TemplateKind>> =
    Lazy::new(|| TemplateKind::ALL.iter().map(|k| (k.name(), *k)).collect());

/// Resolution failure; surfaced by the host, never handled inside a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("unknown template {0:?}")]
    Unknown(String),
    #[error("unknown template {name:?}; closest registered name is {suggestion:?}")]
    UnknownWithSuggestion {
        name: String,
        suggestion: &'static str,
    },
}

impl ResolveError {
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            ResolveError::Unknown(_) => None,
            ResolveError::UnknownWithSuggestion { suggestion, .. } => Some(suggestion),
        }
    }
}

/// Resolve a template name to its registered kind. Exact match only.
pub fn resolve(name: &str) -> Result<TemplateKind, ResolveError> {
    TABLE
        .get(name)
        .copied()
        .ok_or_else(|| match closest(name) {
            Some(suggestion) => ResolveError::UnknownWithSuggestion {
                name: name.to_string(),
                suggestion,
            },
            None => ResolveError::Unknown(name.to_string()),
        })
}

/// Decode the payload and construct the template instance for a kind.
pub fn build(kind: TemplateKind, payload: &Value) -> Box<dyn Template> {
    templates::build(kind, payload)
}

/// All registered keys, in registration order.
pub fn template_names() -> impl Iterator<Item = &'static str> {
    TemplateKind::ALL.iter().map(|k| k.name())
}

fn closest(name: &str) -> Option<&'static str> {
    let needle = name.to_lowercase();
    TemplateKind::ALL
        .iter()
        .map(|k| k.name())
        .map(|candidate| {
            (
                candidate,
                strsim::jaro_winkler(&needle, &candidate.to_lowercase()),
            )
        })
        .filter(|(_, score)| *score >= 0.8)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(candidate, _)| candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_resolves_by_its_own_name() {
        for kind in TemplateKind::ALL {
            assert_eq!(resolve(kind.name()), Ok(kind));
        }
    }

    #[test]
    fn registered_names_are_unique() {
        assert_eq!(TABLE.len(), TemplateKind::ALL.len());
    }

    #[test]
    fn lookup_is_exact_not_fuzzy() {
        let err = resolve("cardgrid").unwrap_err();
        assert_eq!(err.suggestion(), Some("CardGrid"));
    }

    #[test]
    fn garbage_names_get_no_suggestion() {
        let err = resolve("zzzzqqqq").unwrap_err();
        assert_eq!(err.suggestion(), None);
    }
}
