//! Deck loading and remote generation jobs.
//!
//! The rendering core never performs I/O; everything network- or
//! file-shaped lives here and feeds decks into it. Remote generation
//! exposes a job-status endpoint that is polled until it yields a deck,
//! reports failure, or the deadline passes.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tokio::time::Instant;
use tracing::{debug, info};

use crate::model::ContentBlock;

/// An ordered run of generated content blocks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Deck {
    #[serde(default)]
    pub blocks: Vec<ContentBlock>,
}

/// Parse a deck from JSON: either a bare array of blocks or an object with
/// a `blocks` field.
pub fn parse_deck(raw: &str) -> Result<Deck> {
    let value: Value = serde_json::from_str(raw).context("deck is not valid JSON")?;
    let deck = if value.is_array() {
        Deck {
            blocks: serde_json::from_value(value).context("deck array is malformed")?,
        }
    } else {
        serde_json::from_value(value).context("deck object is malformed")?
    };
    Ok(deck)
}

pub fn load_deck(path: &Path) -> Result<Deck> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading deck {}", path.display()))?;
    parse_deck(&raw)
}

/// Remote generation job status payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum RemoteStatus {
    Pending,
    Running,
    Complete,
    Failed,
}

#[derive(Debug, Deserialize)]
struct JobEnvelope {
    status: RemoteStatus,
    #[serde(default)]
    deck: Option<Deck>,
    #[serde(default)]
    error: Option<String>,
}

/// Polls a generation job-status endpoint until it produces a deck.
pub struct JobClient {
    http: reqwest::Client,
    interval: Duration,
    timeout: Duration,
}

impl JobClient {
    pub fn new(interval: Duration, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent("blockdeck (deck-fetch)")
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            http,
            interval,
            timeout,
        })
    }

    pub async fn fetch_deck(&self, url: &str) -> Result<Deck> {
        let deadline = Instant::now() + self.timeout;
        loop {
            let envelope: JobEnvelope = self
                .http
                .get(url)
                .send()
                .await
                .with_context(|| format!("polling {url}"))?
                .error_for_status()?
                .json()
                .await
                .context("job status payload is malformed")?;

            match envelope.status {
                RemoteStatus::Complete => {
                    let deck = envelope
                        .deck
                        .context("job reported complete without a deck")?;
                    info!(target: "fetch", "deck ready: {} blocks", deck.blocks.len());
                    return Ok(deck);
                }
                RemoteStatus::Failed => {
                    bail!(
                        "generation job failed: {}",
                        envelope.error.unwrap_or_else(|| "no detail given".into())
                    );
                }
                RemoteStatus::Pending | RemoteStatus::Running => {
                    if Instant::now() >= deadline {
                        bail!("generation job still not complete after {:?}", self.timeout);
                    }
                    debug!(target: "fetch", "job not ready, sleeping {:?}", self.interval);
                    tokio::time::sleep(self.interval).await;
                }
            }
        }
    }
}

/// Built-in showcase deck: one block per registered template, in
/// registration order. Doubles as living documentation of payload shapes.
pub fn sample_deck() -> Deck {
    let blocks = json!([
        {"templateName": "CardGrid", "payload": {
            "title": "What blockdeck can do",
            "columns": 3,
            "cards": [
                {"title": "Guided onboarding", "description": "Step-by-step setup", "icon": "flag", "badge": "New", "actionPhrase": "Tell me about guided onboarding"},
                {"title": "Live previews", "description": "See blocks as users do", "icon": "spark", "actionPhrase": "Show me live previews"},
                {"title": "Intent capture", "description": "Every click becomes a phrase", "icon": "chat", "actionPhrase": "How does intent capture work?"}
            ]
        }},
        {"templateName": "IconGrid", "payload": {
            "title": "Integrations",
            "columns": 4,
            "items": [
                {"title": "Webhooks", "icon": "bolt", "actionPhrase": "Connect webhooks"},
                {"title": "Docs", "icon": "book", "actionPhrase": "Open the docs"},
                {"title": "Security", "icon": "shield", "actionPhrase": "Explain the security model"},
                {"title": "Metrics", "icon": "chart", "actionPhrase": "Show adoption metrics"}
            ]
        }},
        {"templateName": "NavigationGrid", "payload": {
            "title": "Where next?",
            "columns": 2,
            "cards": [
                {"title": "Pricing", "actionPhrase": "Take me to pricing"},
                {"title": "Case studies", "actionPhrase": "Show me case studies"},
                {"title": "Talk to sales", "actionPhrase": "I want to talk to sales"},
                {"title": "Start trial", "actionPhrase": "Start my free trial"}
            ]
        }},
        {"templateName": "ClientLogoGrid", "payload": {
            "title": "Teams already on board",
            "columns": 4,
            "logos": [
                {"title": "Northwind", "actionPhrase": "How does Northwind use this?"},
                {"title": "Acme Labs", "actionPhrase": "How does Acme Labs use this?"},
                {"title": "Globex", "actionPhrase": "How does Globex use this?"},
                {"title": "Initech", "actionPhrase": "How does Initech use this?"}
            ]
        }},
        {"templateName": "FeatureList", "payload": {
            "title": "Why teams switch",
            "features": [
                {"title": "No-code setup", "description": "Launch in an afternoon", "icon": "check", "actionPhrase": "Explain no-code setup"},
                {"title": "Conversational routing", "description": "Clicks become questions", "icon": "chat", "actionPhrase": "Explain conversational routing"},
                {"title": "Own your data", "description": "Nothing leaves your account", "icon": "shield", "actionPhrase": "Explain data ownership"}
            ]
        }},
        {"templateName": "NumberedList", "payload": {
            "title": "Getting started",
            "items": [
                {"title": "Create a workspace", "actionPhrase": "Help me create a workspace"},
                {"title": "Import your content", "actionPhrase": "Help me import content"},
                {"title": "Invite your team", "actionPhrase": "Help me invite my team"}
            ]
        }},
        {"templateName": "ResourceLinks", "payload": {
            "title": "Keep reading",
            "links": [
                {"title": "Quickstart guide", "url": "https://example.com/quickstart", "actionPhrase": "Open the quickstart guide"},
                {"title": "API reference", "url": "https://example.com/api", "actionPhrase": "Open the API reference"}
            ]
        }},
        {"templateName": "ResultsGrid", "payload": {
            "title": "Outcomes",
            "columns": 3,
            "results": [
                {"title": "3.2x", "description": "faster onboarding", "actionPhrase": "How was 3.2x measured?"},
                {"title": "41%", "description": "more activation", "actionPhrase": "How was activation measured?"},
                {"title": "9/10", "description": "CSAT score", "actionPhrase": "Show CSAT details"}
            ]
        }},
        {"templateName": "FlowDiagram", "payload": {
            "title": "Your first week",
            "direction": "horizontal",
            "steps": [
                {"title": "Connect", "description": "Link your stack", "actionPhrase": "What does connecting involve?"},
                {"title": "Generate", "description": "Draft your deck", "actionPhrase": "What gets generated?"},
                {"title": "Launch", "description": "Go live", "actionPhrase": "What happens at launch?"}
            ]
        }},
        {"templateName": "DataFlowDiagram", "payload": {
            "title": "Where your data goes",
            "steps": [
                {"title": "Your CRM", "actionPhrase": "Which CRMs are supported?"},
                {"title": "Generator", "actionPhrase": "What does the generator see?"},
                {"title": "Rendered deck", "actionPhrase": "What ends up in the deck?"}
            ]
        }},
        {"templateName": "LayerDiagram", "payload": {
            "title": "How it is put together",
            "layers": [
                {"title": "Templates", "actionPhrase": "Explain the template layer"},
                {"title": "Registry", "actionPhrase": "Explain the registry layer"},
                {"title": "Host agent", "actionPhrase": "Explain the host layer"}
            ]
        }},
        {"templateName": "ConceptCard", "payload": {
            "title": "Action phrases",
            "body": "Every click is translated into a plain sentence your agent can answer. No event schemas, no tracking plans.",
            "icon": "spark",
            "actionPhrase": "Tell me more about action phrases"
        }},
        {"templateName": "QuoteCard", "payload": {
            "quote": "Our onboarding deck now answers questions before support hears them.",
            "attribution": "Maya, Head of Growth at Northwind",
            "actionPhrase": "Read the Northwind story"
        }},
        {"templateName": "StatHighlight", "payload": {
            "value": "12,400",
            "label": "decks rendered last month",
            "trend": {"direction": "up", "delta": "+18% MoM"},
            "actionPhrase": "Break down rendering volume"
        }},
        {"templateName": "ProofPointCard", "payload": {
            "title": "Independently benchmarked",
            "body": "Median time-to-first-deck is under four minutes across 200 trial accounts.",
            "source": "2026 onboarding benchmark",
            "actionPhrase": "Show the benchmark methodology"
        }},
        {"templateName": "CTABanner", "payload": {
            "headline": "Ready when you are",
            "subline": "Free for your first three decks",
            "buttonLabel": "Start now",
            "actionPhrase": "Start my free trial"
        }},
        {"templateName": "AccordionList", "payload": {
            "title": "Common questions",
            "sections": [
                {"title": "Do I need to write code?", "body": "No. Decks are generated from your content.", "actionPhrase": "Expand on the no-code claim"},
                {"title": "Can I self-host?", "body": "Yes, the renderer is a single binary.", "actionPhrase": "Explain self-hosting"},
                {"title": "What about my brand?", "body": "Themes cover colors and typography.", "defaultOpen": true, "actionPhrase": "Explain theming"}
            ]
        }},
        {"templateName": "ExpandableSection", "payload": {
            "title": "The fine print",
            "body": "Trials include every template. No card required. Decks stay yours.",
            "defaultExpanded": false
        }},
        {"templateName": "TabContent", "payload": {
            "defaultTabId": "teams",
            "tabs": [
                {"id": "solo", "label": "Solo", "body": "One workspace, unlimited decks.", "cta": {"label": "Pick Solo", "actionPhrase": "Choose the Solo plan"}},
                {"id": "teams", "label": "Teams", "body": "Shared registry, roles, review flow.", "cta": {"label": "Pick Teams", "actionPhrase": "Choose the Teams plan"}},
                {"id": "scale", "label": "Scale", "body": "SSO, audit log, dedicated support.", "cta": {"label": "Talk to us", "actionPhrase": "Contact sales about Scale"}}
            ]
        }},
        {"templateName": "DataTable", "payload": {
            "title": "Plans at a glance",
            "headers": ["Plan", "Decks", "Seats"],
            "rows": [
                {"cells": ["Solo", "Unlimited", "1"], "actionPhrase": "Compare Solo in detail"},
                {"cells": ["Teams", "Unlimited", "10"], "actionPhrase": "Compare Teams in detail"},
                {"cells": ["Scale", "Unlimited", "Custom"], "actionPhrase": "Compare Scale in detail"}
            ]
        }},
        {"templateName": "TwoColumnContent", "payload": {
            "left": {"title": "Before", "body": "Static slides nobody finishes.", "actionPhrase": "What was wrong before?"},
            "right": {"title": "After", "body": "A deck that answers back.", "icon": "spark", "actionPhrase": "What changes after switching?"}
        }},
        {"templateName": "ThreeColumnLayout", "payload": {
            "columns": [
                {"title": "Design", "body": "Pick templates", "icon": "star", "actionPhrase": "How does design work?"},
                {"title": "Generate", "body": "Let the agent fill them", "icon": "bolt", "actionPhrase": "How does generation work?"},
                {"title": "Ship", "body": "Embed anywhere", "icon": "flag", "actionPhrase": "How does shipping work?"}
            ]
        }}
    ]);
    Deck {
        blocks: serde_json::from_value(blocks).expect("sample deck is valid"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry;

    #[test]
    fn sample_deck_covers_every_registered_template() {
        let deck = sample_deck();
        assert_eq!(deck.blocks.len(), registry::TemplateKind::ALL.len());
        for block in &deck.blocks {
            assert!(
                registry::resolve(&block.template_name).is_ok(),
                "unregistered template in sample deck: {}",
                block.template_name
            );
        }
    }

    #[test]
    fn parse_accepts_bare_arrays_and_objects() {
        let from_array = parse_deck(r#"[{"templateName": "CardGrid"}]"#).unwrap();
        assert_eq!(from_array.blocks.len(), 1);
        let from_object =
            parse_deck(r#"{"blocks": [{"templateName": "CardGrid", "payload": {}}]}"#).unwrap();
        assert_eq!(from_object.blocks.len(), 1);
    }

    #[test]
    fn parse_rejects_non_json() {
        assert!(parse_deck("not json").is_err());
    }
}
