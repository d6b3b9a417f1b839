//! A Content Block names a template and carries its payload.
//!
//! Blocks are produced by an external conversational generator, handed to a
//! template once for that instance's lifetime, and replaced wholesale when
//! the host advances the conversation. Nothing here is persisted or mutated
//! in place.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One generated unit of display content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBlock {
    /// Must match a registered template key exactly; resolution failures are
    /// the host's problem, never a template's.
    pub template_name: String,
    /// Template-specific shape, decoded leniently at mount time.
    #[serde(default)]
    pub payload: Value,
}

impl ContentBlock {
    pub fn new(template_name: impl Into<String>, payload: Value) -> Self {
        Self {
            template_name: template_name.into(),
            payload,
        }
    }
}
