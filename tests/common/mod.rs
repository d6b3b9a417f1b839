//! Shared fixtures: a recording dispatcher and buffer-render helpers.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use anyhow::Result;
use blockdeck::dispatch::{ConversationSink, Dispatcher, FeedbackCue};
use blockdeck::registry::{self, TemplateKind};
use blockdeck::templates::Template;
use blockdeck::ui::{buffer_text, theme::ThemePalette};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use serde_json::Value;

/// Records every collaborator call in order: "click" for the cue,
/// "notify:<phrase>" for the sink.
#[derive(Clone, Default)]
pub struct Recorder {
    events: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher::new(
            Arc::new(RecordingSink(self.events.clone())),
            Arc::new(RecordingCue(self.events.clone())),
        )
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    pub fn notified(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| e.strip_prefix("notify:").map(str::to_string))
            .collect()
    }
}

struct RecordingSink(Arc<Mutex<Vec<String>>>);

impl ConversationSink for RecordingSink {
    fn notify(&self, action_phrase: &str) -> Result<()> {
        self.0.lock().unwrap().push(format!("notify:{action_phrase}"));
        Ok(())
    }
}

struct RecordingCue(Arc<Mutex<Vec<String>>>);

impl FeedbackCue for RecordingCue {
    fn play_click(&self) -> Result<()> {
        self.0.lock().unwrap().push("click".to_string());
        Ok(())
    }
}

pub fn mount(kind: TemplateKind, payload: Value) -> Box<dyn Template> {
    registry::build(kind, &payload)
}

/// Render into a detached 60x20 buffer and flatten to text.
pub fn render_text(template: &mut Box<dyn Template>) -> String {
    render_text_sized(template, 60, 20)
}

pub fn render_text_sized(template: &mut Box<dyn Template>, width: u16, height: u16) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    template.render(area, &mut buf, &ThemePalette::dark(), None);
    buffer_text(&buf)
}
