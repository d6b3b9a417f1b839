//! Disclosure templates: local open/closed and selected-tab state.
//!
//! State is owned by the template instance and dies with it; a fresh block
//! mount always starts from the payload defaults. Toggling is local and
//! gives click feedback only, with one exception: AccordionList notifies
//! the moment an item transitions collapsed→expanded. Never on collapse,
//! never on re-activating an open item. TabContent notifies only through
//! the active tab's CTA.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};
use serde_json::Value;

use crate::dispatch::Dispatcher;
use crate::model::payload::{self, AccordionPayload, ExpandablePayload, TabsPayload};
use crate::registry::TemplateKind;
use crate::templates::{HitMap, Template, container, wrap_height};
use crate::ui::theme::ThemePalette;

/// Per-section disclosure state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Disclosure {
    Collapsed,
    Expanded,
}

impl Disclosure {
    fn from_default(open: bool) -> Self {
        if open {
            Disclosure::Expanded
        } else {
            Disclosure::Collapsed
        }
    }

    fn is_open(self) -> bool {
        self == Disclosure::Expanded
    }
}

pub struct AccordionList {
    payload: AccordionPayload,
    state: Vec<Disclosure>,
    hits: HitMap,
}

impl AccordionList {
    pub fn new(value: &Value) -> Self {
        let payload = AccordionPayload::decode(value);
        let state = payload
            .sections
            .iter()
            .map(|s| Disclosure::from_default(s.default_open))
            .collect();
        Self {
            payload,
            state,
            hits: HitMap::default(),
        }
    }

    #[cfg(test)]
    pub fn is_open(&self, index: usize) -> bool {
        self.state.get(index).is_some_and(|s| s.is_open())
    }
}

impl Template for AccordionList {
    fn kind(&self) -> TemplateKind {
        TemplateKind::AccordionList
    }

    fn target_count(&self) -> usize {
        self.payload.sections.len()
    }

    fn hits(&self) -> &HitMap {
        &self.hits
    }

    fn activate(&mut self, index: usize, host: &Dispatcher) {
        let Some(state) = self.state.get_mut(index) else {
            return;
        };
        match *state {
            Disclosure::Collapsed => {
                *state = Disclosure::Expanded;
                // The one disclosure transition that reports upward.
                host.dispatch(&self.payload.sections[index].action_phrase);
            }
            Disclosure::Expanded => {
                *state = Disclosure::Collapsed;
                host.click();
            }
        }
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &ThemePalette, focus: Option<usize>) {
        self.hits.clear();
        let shell = container(&self.payload.title, theme);
        let inner = shell.inner(area);
        shell.render(area, buf);

        let bottom = inner.y + inner.height;
        let mut y = inner.y;
        for index in 0..self.payload.sections.len() {
            if y >= bottom {
                break;
            }
            let focused = focus == Some(index);
            let open = self.state[index].is_open();
            let marker = if open { "▾ " } else { "▸ " };
            let header_style = if focused { theme.focus() } else { theme.text() };
            let header = Rect::new(inner.x, y, inner.width, 1);
            Paragraph::new(Line::from(vec![
                Span::styled(marker, theme.hint()),
                Span::styled(self.payload.sections[index].title.clone(), header_style),
            ]))
            .render(header, buf);
            self.hits.record(index, header);
            y += 1;

            if open && y < bottom {
                let body = &self.payload.sections[index].body;
                let height = wrap_height(body, inner.width).min(bottom - y);
                let body_area = Rect::new(inner.x, y, inner.width, height);
                Paragraph::new(body.clone())
                    .style(theme.hint())
                    .wrap(Wrap { trim: false })
                    .render(body_area, buf);
                y += height;
            }
        }
    }
}

pub struct ExpandableSection {
    payload: ExpandablePayload,
    state: Disclosure,
    hits: HitMap,
}

impl ExpandableSection {
    pub fn new(value: &Value) -> Self {
        let payload: ExpandablePayload = payload::lenient(value);
        let state = Disclosure::from_default(payload.default_expanded);
        Self {
            payload,
            state,
            hits: HitMap::default(),
        }
    }

    #[cfg(test)]
    pub fn is_expanded(&self) -> bool {
        self.state.is_open()
    }
}

impl Template for ExpandableSection {
    fn kind(&self) -> TemplateKind {
        TemplateKind::ExpandableSection
    }

    fn target_count(&self) -> usize {
        1
    }

    fn hits(&self) -> &HitMap {
        &self.hits
    }

    fn activate(&mut self, index: usize, host: &Dispatcher) {
        if index != 0 {
            return;
        }
        self.state = if self.state.is_open() {
            Disclosure::Collapsed
        } else {
            Disclosure::Expanded
        };
        // Purely local; never notifies.
        host.click();
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &ThemePalette, focus: Option<usize>) {
        self.hits.clear();
        let shell = container("", theme);
        let inner = shell.inner(area);
        shell.render(area, buf);
        if inner.height == 0 {
            return;
        }

        let focused = focus == Some(0);
        let marker = if self.state.is_open() { "▾ " } else { "▸ " };
        let header = Rect::new(inner.x, inner.y, inner.width, 1);
        Paragraph::new(Line::from(vec![
            Span::styled(marker, theme.hint()),
            Span::styled(
                self.payload.title.clone(),
                if focused { theme.focus() } else { theme.title() },
            ),
        ]))
        .render(header, buf);
        self.hits.record(0, header);

        if self.state.is_open() && inner.height > 1 {
            let body_area = Rect::new(inner.x, inner.y + 1, inner.width, inner.height - 1);
            Paragraph::new(self.payload.body.clone())
                .style(theme.text())
                .wrap(Wrap { trim: false })
                .render(body_area, buf);
        }
    }
}

pub struct TabContent {
    payload: TabsPayload,
    active: usize,
    hits: HitMap,
}

impl TabContent {
    pub fn new(value: &Value) -> Self {
        let payload = TabsPayload::decode(value);
        // Unset or unknown defaultTabId selects the first tab.
        let active = payload
            .default_tab_id
            .as_ref()
            .and_then(|id| payload.tabs.iter().position(|tab| &tab.id == id))
            .unwrap_or(0);
        Self {
            payload,
            active,
            hits: HitMap::default(),
        }
    }

    #[cfg(test)]
    pub fn active_tab(&self) -> usize {
        self.active
    }

    fn cta_target(&self) -> Option<usize> {
        self.payload
            .tabs
            .get(self.active)
            .and_then(|tab| tab.cta.as_ref())
            .map(|_| self.payload.tabs.len())
    }
}

impl Template for TabContent {
    fn kind(&self) -> TemplateKind {
        TemplateKind::TabContent
    }

    fn target_count(&self) -> usize {
        self.payload.tabs.len() + usize::from(self.cta_target().is_some())
    }

    fn hits(&self) -> &HitMap {
        &self.hits
    }

    fn activate(&mut self, index: usize, host: &Dispatcher) {
        if index < self.payload.tabs.len() {
            // Tab selection stays local; feedback only.
            self.active = index;
            host.click();
        } else if Some(index) == self.cta_target()
            && let Some(cta) = self
                .payload
                .tabs
                .get(self.active)
                .and_then(|tab| tab.cta.as_ref())
        {
            host.dispatch(&cta.action_phrase);
        }
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &ThemePalette, focus: Option<usize>) {
        self.hits.clear();
        let shell = container("", theme);
        let inner = shell.inner(area);
        shell.render(area, buf);
        if self.payload.tabs.is_empty() || inner.height == 0 {
            return;
        }

        // Tab bar, one labelled cell per tab.
        let mut x = inner.x;
        let right = inner.x + inner.width;
        for (index, tab) in self.payload.tabs.iter().enumerate() {
            if x >= right {
                break;
            }
            let label = format!(" {} ", tab.label);
            let width = (label.chars().count() as u16).min(right - x);
            if width == 0 {
                break;
            }
            let cell = Rect::new(x, inner.y, width, 1);
            let style = if index == self.active {
                theme.title().add_modifier(Modifier::UNDERLINED)
            } else if focus == Some(index) {
                theme.focus()
            } else {
                theme.hint()
            };
            let style = if focus == Some(index) {
                style.add_modifier(Modifier::REVERSED)
            } else {
                style
            };
            Paragraph::new(Line::from(Span::styled(label, style))).render(cell, buf);
            self.hits.record(index, cell);
            x += width + 1;
        }

        if inner.height <= 1 {
            return;
        }
        let tab = &self.payload.tabs[self.active.min(self.payload.tabs.len() - 1)];
        let body_height = inner.height - 1 - u16::from(tab.cta.is_some());
        if body_height > 0 {
            let body_area = Rect::new(inner.x, inner.y + 1, inner.width, body_height);
            Paragraph::new(tab.body.clone())
                .style(theme.text())
                .wrap(Wrap { trim: false })
                .render(body_area, buf);
        }

        if let Some(cta) = &tab.cta {
            let row = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
            let cta_index = self.payload.tabs.len();
            let style = if focus == Some(cta_index) {
                theme.focus().add_modifier(Modifier::REVERSED)
            } else {
                theme.value()
            };
            Paragraph::new(Line::from(Span::styled(format!("[ {} ]", cta.label), style)))
                .render(row, buf);
            self.hits.record(cta_index, row);
        }
    }
}
