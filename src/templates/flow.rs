//! Sequential/flow templates: ordered steps with positional connectors.
//!
//! Connectors are drawn between adjacent steps only, never after the last.
//! FlowDiagram given zero steps renders nothing at all; DataFlowDiagram and
//! LayerDiagram keep their container shells. The asymmetry is deliberate
//! and per-template, not a shared rule.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};
use serde_json::Value;

use crate::dispatch::Dispatcher;
use crate::model::content::{FlowDirection, FlowStep};
use crate::model::payload::FlowPayload;
use crate::registry::TemplateKind;
use crate::templates::{HitMap, Template, container, grid_cells, stacked_rows};
use crate::ui::icon::glyph_for;
use crate::ui::theme::ThemePalette;

const STEP_HEIGHT: u16 = 4;

pub struct FlowTemplate {
    kind: TemplateKind,
    payload: FlowPayload,
    hits: HitMap,
}

impl FlowTemplate {
    pub fn new(kind: TemplateKind, value: &Value) -> Self {
        let mut payload = FlowPayload::decode(kind, value);
        // Layers stack by default; the generator can still ask for a
        // horizontal arrangement explicitly.
        if kind == TemplateKind::LayerDiagram && value.get("direction").is_none() {
            payload.direction = FlowDirection::Vertical;
        }
        Self {
            kind,
            payload,
            hits: HitMap::default(),
        }
    }

    fn connector(&self) -> Option<(&'static str, &'static str)> {
        match self.kind {
            TemplateKind::FlowDiagram => Some(("→", "↓")),
            TemplateKind::DataFlowDiagram => Some(("⇒", "⇓")),
            _ => None,
        }
    }

    fn render_step(
        &self,
        step: &FlowStep,
        cell: Rect,
        buf: &mut Buffer,
        theme: &ThemePalette,
        focused: bool,
    ) {
        let border_style = if focused { theme.focus() } else { theme.frame() };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(cell);
        block.render(cell, buf);

        let mut spans = Vec::new();
        if let Some(glyph) = glyph_for(step.icon.as_deref()) {
            spans.push(Span::styled(format!("{glyph} "), theme.value()));
        }
        spans.push(Span::styled(
            step.title.clone(),
            if focused { theme.focus() } else { theme.title() },
        ));
        let mut lines = vec![Line::from(spans)];
        if let Some(desc) = &step.description {
            lines.push(Line::from(Span::styled(desc.clone(), theme.hint())));
        }
        let centered = self.kind == TemplateKind::LayerDiagram;
        Paragraph::new(lines)
            .alignment(if centered {
                Alignment::Center
            } else {
                Alignment::Left
            })
            .render(inner, buf);
    }

    fn render_sequence(
        &mut self,
        body: Rect,
        buf: &mut Buffer,
        theme: &ThemePalette,
        focus: Option<usize>,
    ) {
        let count = self.payload.steps.len();
        let Some((right, down)) = self.connector() else {
            return self.render_layers(body, buf, theme, focus);
        };

        let vertical = self.payload.direction == FlowDirection::Vertical;
        let mut constraints = Vec::with_capacity(count * 2);
        for i in 0..count {
            constraints.push(if vertical {
                Constraint::Length(STEP_HEIGHT)
            } else {
                Constraint::Ratio(1, count as u32)
            });
            if i + 1 < count {
                constraints.push(Constraint::Length(if vertical { 1 } else { 3 }));
            }
        }
        let chunks = Layout::default()
            .direction(if vertical {
                Direction::Vertical
            } else {
                Direction::Horizontal
            })
            .constraints(constraints)
            .split(body);

        for index in 0..count {
            let Some(cell) = chunks.get(index * 2).copied() else {
                break;
            };
            let cell = if vertical {
                cell
            } else {
                Rect {
                    height: cell.height.min(STEP_HEIGHT),
                    ..cell
                }
            };
            self.render_step(
                &self.payload.steps[index],
                cell,
                buf,
                theme,
                focus == Some(index),
            );
            self.hits.record(index, cell);

            if let Some(gap) = chunks.get(index * 2 + 1).copied() {
                let glyph = if vertical { down } else { right };
                let offset = if vertical {
                    0
                } else {
                    STEP_HEIGHT.min(gap.height) / 2
                };
                let line = Rect {
                    y: gap.y + offset,
                    height: 1.min(gap.height),
                    ..gap
                };
                Paragraph::new(Line::from(Span::styled(glyph, theme.hint())))
                    .alignment(Alignment::Center)
                    .render(line, buf);
            }
        }
    }

    fn render_layers(
        &mut self,
        body: Rect,
        buf: &mut Buffer,
        theme: &ThemePalette,
        focus: Option<usize>,
    ) {
        let count = self.payload.steps.len();
        let cells = if self.payload.direction == FlowDirection::Vertical {
            stacked_rows(body, count, 3)
        } else {
            grid_cells(body, count.max(1) as u16, count, body.height.max(3))
        };
        for (index, cell) in cells.into_iter().enumerate() {
            self.render_step(
                &self.payload.steps[index],
                cell,
                buf,
                theme,
                focus == Some(index),
            );
            self.hits.record(index, cell);
        }
    }
}

impl Template for FlowTemplate {
    fn kind(&self) -> TemplateKind {
        self.kind
    }

    fn target_count(&self) -> usize {
        self.payload.steps.len()
    }

    fn hits(&self) -> &HitMap {
        &self.hits
    }

    fn activate(&mut self, index: usize, host: &Dispatcher) {
        if let Some(step) = self.payload.steps.get(index) {
            host.dispatch(&step.action_phrase);
        }
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &ThemePalette, focus: Option<usize>) {
        self.hits.clear();

        if self.kind == TemplateKind::FlowDiagram {
            // Zero steps: no output at all, not even an empty shell.
            if self.payload.steps.is_empty() {
                return;
            }
            let mut body = area;
            if !self.payload.title.is_empty() && area.height > 1 {
                Paragraph::new(Line::from(Span::styled(
                    self.payload.title.clone(),
                    theme.title(),
                )))
                .render(Rect { height: 1, ..area }, buf);
                body = Rect {
                    y: area.y + 1,
                    height: area.height - 1,
                    ..area
                };
            }
            self.render_sequence(body, buf, theme, focus);
            return;
        }

        let shell = container(&self.payload.title, theme);
        let inner = shell.inner(area);
        shell.render(area, buf);
        if self.payload.steps.is_empty() {
            return;
        }
        self.render_sequence(inner, buf, theme, focus);
    }
}
