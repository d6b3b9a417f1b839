//! Single-focus templates: one primary entity, zero or one clickable target.
//!
//! Optional sub-elements (media reference, trend indicator, attribution)
//! simply disappear when absent. A payload without an action phrase renders
//! non-interactive rather than being suppressed.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};
use serde_json::Value;

use crate::dispatch::Dispatcher;
use crate::model::content::TrendDirection;
use crate::model::payload::{
    self, BannerPayload, ConceptPayload, ProofPayload, QuotePayload, StatPayload,
};
use crate::registry::TemplateKind;
use crate::templates::{HitMap, Template, container};
use crate::ui::icon::glyph_for;
use crate::ui::theme::ThemePalette;

/// Shared plumbing for the one-target family.
macro_rules! single_target {
    ($ty:ty, $kind:expr) => {
        impl Template for $ty {
            fn kind(&self) -> TemplateKind {
                $kind
            }

            fn target_count(&self) -> usize {
                if self.payload.action_phrase.trim().is_empty() {
                    0
                } else {
                    1
                }
            }

            fn hits(&self) -> &HitMap {
                &self.hits
            }

            fn activate(&mut self, index: usize, host: &Dispatcher) {
                if index == 0 && self.target_count() == 1 {
                    host.dispatch(&self.payload.action_phrase);
                }
            }

            fn render(
                &mut self,
                area: Rect,
                buf: &mut Buffer,
                theme: &ThemePalette,
                focus: Option<usize>,
            ) {
                self.hits.clear();
                let focused = focus == Some(0) && self.target_count() == 1;
                self.paint(area, buf, theme, focused);
                if self.target_count() == 1 {
                    self.hits.record(0, area);
                }
            }
        }
    };
}

pub struct ConceptCard {
    payload: ConceptPayload,
    hits: HitMap,
}

impl ConceptCard {
    pub fn new(value: &Value) -> Self {
        Self {
            payload: payload::lenient(value),
            hits: HitMap::default(),
        }
    }

    fn paint(&self, area: Rect, buf: &mut Buffer, theme: &ThemePalette, focused: bool) {
        let shell = container(&self.payload.title, theme).border_style(if focused {
            theme.focus()
        } else {
            theme.frame()
        });
        let inner = shell.inner(area);
        shell.render(area, buf);

        let mut lines: Vec<Line> = Vec::new();
        if let Some(glyph) = glyph_for(self.payload.icon.as_deref()) {
            lines.push(Line::from(Span::styled(glyph, theme.value())));
        }
        for body_line in self.payload.body.lines() {
            lines.push(Line::from(Span::styled(body_line.to_string(), theme.text())));
        }
        if let Some(media) = &self.payload.media {
            lines.push(Line::from(Span::styled(
                format!("▣ {} · {}", media.kind, media.reference),
                theme.hint(),
            )));
        }
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

single_target!(ConceptCard, TemplateKind::ConceptCard);

pub struct QuoteCard {
    payload: QuotePayload,
    hits: HitMap,
}

impl QuoteCard {
    pub fn new(value: &Value) -> Self {
        Self {
            payload: payload::lenient(value),
            hits: HitMap::default(),
        }
    }

    fn paint(&self, area: Rect, buf: &mut Buffer, theme: &ThemePalette, focused: bool) {
        let shell = container("", theme).border_style(if focused {
            theme.focus()
        } else {
            theme.frame()
        });
        let inner = shell.inner(area);
        shell.render(area, buf);

        let mut lines = vec![Line::from(Span::styled(
            format!("“{}”", self.payload.quote),
            theme.text().add_modifier(Modifier::ITALIC),
        ))];
        if let Some(attribution) = &self.payload.attribution {
            lines.push(Line::from(Span::styled(
                format!("— {attribution}"),
                theme.hint(),
            )));
        }
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

single_target!(QuoteCard, TemplateKind::QuoteCard);

pub struct StatHighlight {
    payload: StatPayload,
    hits: HitMap,
}

impl StatHighlight {
    pub fn new(value: &Value) -> Self {
        Self {
            payload: payload::lenient(value),
            hits: HitMap::default(),
        }
    }

    fn paint(&self, area: Rect, buf: &mut Buffer, theme: &ThemePalette, focused: bool) {
        let shell = container("", theme).border_style(if focused {
            theme.focus()
        } else {
            theme.frame()
        });
        let inner = shell.inner(area);
        shell.render(area, buf);

        let mut lines = vec![
            Line::from(Span::styled(self.payload.value.clone(), theme.value())),
            Line::from(Span::styled(self.payload.label.clone(), theme.hint())),
        ];
        if let Some(trend) = &self.payload.trend {
            let (glyph, style) = match trend.direction {
                TrendDirection::Up => ("▲", theme.text().fg(theme.ok)),
                TrendDirection::Down => ("▼", theme.text().fg(theme.warn)),
                TrendDirection::Flat => ("◆", theme.hint()),
            };
            let mut spans = vec![Span::styled(glyph, style)];
            if !trend.delta.is_empty() {
                spans.push(Span::styled(format!(" {}", trend.delta), style));
            }
            lines.push(Line::from(spans));
        }
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

single_target!(StatHighlight, TemplateKind::StatHighlight);

pub struct ProofPointCard {
    payload: ProofPayload,
    hits: HitMap,
}

impl ProofPointCard {
    pub fn new(value: &Value) -> Self {
        Self {
            payload: payload::lenient(value),
            hits: HitMap::default(),
        }
    }

    fn paint(&self, area: Rect, buf: &mut Buffer, theme: &ThemePalette, focused: bool) {
        let shell = container(&self.payload.title, theme).border_style(if focused {
            theme.focus()
        } else {
            theme.frame()
        });
        let inner = shell.inner(area);
        shell.render(area, buf);

        let mut lines: Vec<Line> = self
            .payload
            .body
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), theme.text())))
            .collect();
        if let Some(source) = &self.payload.source {
            lines.push(Line::from(Span::styled(
                format!("Source: {source}"),
                theme.hint(),
            )));
        }
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

single_target!(ProofPointCard, TemplateKind::ProofPointCard);

pub struct CtaBanner {
    payload: BannerPayload,
    hits: HitMap,
}

impl CtaBanner {
    pub fn new(value: &Value) -> Self {
        Self {
            payload: payload::lenient(value),
            hits: HitMap::default(),
        }
    }

    fn paint(&self, area: Rect, buf: &mut Buffer, theme: &ThemePalette, focused: bool) {
        let shell = container("", theme).border_style(if focused {
            theme.focus()
        } else {
            theme.frame()
        });
        let inner = shell.inner(area);
        shell.render(area, buf);

        let mut lines = vec![Line::from(Span::styled(
            self.payload.headline.clone(),
            theme.title(),
        ))];
        if let Some(subline) = &self.payload.subline {
            lines.push(Line::from(Span::styled(subline.clone(), theme.hint())));
        }
        if let Some(label) = &self.payload.button_label {
            let style = if focused {
                theme.focus().add_modifier(Modifier::REVERSED)
            } else {
                theme.value()
            };
            lines.push(Line::from(Span::styled(format!("[ {label} ]"), style)));
        }
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

single_target!(CtaBanner, TemplateKind::CtaBanner);
