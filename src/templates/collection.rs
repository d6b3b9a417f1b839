//! Collection templates: ordered items laid out as grids or lists.
//!
//! All eight variants share one payload shape; the column count option
//! affects layout only. Every item is a clickable target and activation
//! notifies the item's phrase untouched.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};
use serde_json::Value;

use crate::dispatch::Dispatcher;
use crate::model::content::CardItem;
use crate::model::payload::CollectionPayload;
use crate::registry::TemplateKind;
use crate::templates::{HitMap, Template, container, grid_cells, stacked_rows};
use crate::ui::icon::glyph_for;
use crate::ui::theme::ThemePalette;

pub struct CollectionTemplate {
    kind: TemplateKind,
    payload: CollectionPayload,
    hits: HitMap,
}

impl CollectionTemplate {
    pub fn new(kind: TemplateKind, payload: &Value) -> Self {
        Self {
            kind,
            payload: CollectionPayload::decode(kind, payload),
            hits: HitMap::default(),
        }
    }

    fn is_list(&self) -> bool {
        matches!(
            self.kind,
            TemplateKind::FeatureList | TemplateKind::NumberedList | TemplateKind::ResourceLinks
        )
    }

    fn cell_height(&self) -> u16 {
        match self.kind {
            TemplateKind::NavigationGrid | TemplateKind::ClientLogoGrid => 3,
            TemplateKind::NumberedList => 1,
            TemplateKind::FeatureList | TemplateKind::ResourceLinks => 2,
            _ => 4,
        }
    }

    fn render_grid_cell(
        &self,
        item: &CardItem,
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

        let mut lines: Vec<Line> = Vec::new();
        match self.kind {
            TemplateKind::IconGrid => {
                if let Some(glyph) = glyph_for(item.icon.as_deref()) {
                    lines.push(Line::from(Span::styled(glyph, theme.value())));
                }
                lines.push(Line::from(Span::styled(item.title.clone(), theme.text())));
            }
            TemplateKind::ClientLogoGrid => {
                let mut spans = Vec::new();
                if let Some(glyph) = glyph_for(item.icon.as_deref()) {
                    spans.push(Span::styled(format!("{glyph} "), theme.hint()));
                }
                spans.push(Span::styled(item.title.clone(), theme.hint()));
                lines.push(Line::from(spans));
            }
            TemplateKind::NavigationGrid => {
                lines.push(Line::from(vec![
                    Span::styled(item.title.clone(), theme.text()),
                    Span::styled(" →", theme.hint()),
                ]));
            }
            TemplateKind::ResultsGrid => {
                lines.push(Line::from(Span::styled(item.title.clone(), theme.value())));
                if let Some(desc) = &item.description {
                    lines.push(Line::from(Span::styled(desc.clone(), theme.hint())));
                }
            }
            _ => {
                // CardGrid and anything card-shaped.
                let mut spans = Vec::new();
                if let Some(glyph) = glyph_for(item.icon.as_deref()) {
                    spans.push(Span::styled(format!("{glyph} "), theme.value()));
                }
                spans.push(Span::styled(
                    item.title.clone(),
                    if focused { theme.focus() } else { theme.title() },
                ));
                if let Some(badge) = &item.badge {
                    spans.push(Span::styled(format!(" [{badge}]"), theme.badge()));
                }
                lines.push(Line::from(spans));
                if let Some(desc) = &item.description {
                    lines.push(Line::from(Span::styled(desc.clone(), theme.hint())));
                }
            }
        }

        let centered = matches!(
            self.kind,
            TemplateKind::IconGrid | TemplateKind::ClientLogoGrid | TemplateKind::NavigationGrid
        );
        let paragraph = Paragraph::new(lines).alignment(if centered {
            Alignment::Center
        } else {
            Alignment::Left
        });
        paragraph.render(inner, buf);
    }

    fn render_list_row(
        &self,
        number: usize,
        item: &CardItem,
        row: Rect,
        buf: &mut Buffer,
        theme: &ThemePalette,
        focused: bool,
    ) {
        let marker_style = if focused { theme.focus() } else { theme.hint() };
        let title_style = if focused { theme.focus() } else { theme.text() };
        let mut lines: Vec<Line> = Vec::new();
        match self.kind {
            TemplateKind::NumberedList => {
                let mut spans = vec![
                    Span::styled(format!("{:>2}. ", number + 1), marker_style),
                    Span::styled(item.title.clone(), title_style),
                ];
                if let Some(desc) = &item.description {
                    spans.push(Span::styled(format!(" — {desc}"), theme.hint()));
                }
                lines.push(Line::from(spans));
            }
            TemplateKind::ResourceLinks => {
                lines.push(Line::from(vec![
                    Span::styled("↗ ", marker_style),
                    Span::styled(item.title.clone(), theme.link()),
                ]));
                if let Some(url) = &item.url {
                    lines.push(Line::from(Span::styled(format!("  {url}"), theme.hint())));
                } else if let Some(desc) = &item.description {
                    lines.push(Line::from(Span::styled(format!("  {desc}"), theme.hint())));
                }
            }
            _ => {
                // FeatureList.
                let mut spans = vec![Span::styled(
                    if focused { "❯ " } else { "  " }.to_string(),
                    marker_style,
                )];
                if let Some(glyph) = glyph_for(item.icon.as_deref()) {
                    spans.push(Span::styled(format!("{glyph} "), theme.value()));
                }
                spans.push(Span::styled(item.title.clone(), title_style));
                lines.push(Line::from(spans));
                if let Some(desc) = &item.description {
                    lines.push(Line::from(Span::styled(format!("    {desc}"), theme.hint())));
                }
            }
        }
        Paragraph::new(lines).render(row, buf);
    }
}

impl Template for CollectionTemplate {
    fn kind(&self) -> TemplateKind {
        self.kind
    }

    fn target_count(&self) -> usize {
        self.payload.items.len()
    }

    fn hits(&self) -> &HitMap {
        &self.hits
    }

    fn activate(&mut self, index: usize, host: &Dispatcher) {
        if let Some(item) = self.payload.items.get(index) {
            host.dispatch(&item.action_phrase);
        }
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &ThemePalette, focus: Option<usize>) {
        self.hits.clear();
        let shell = container(&self.payload.title, theme);
        let inner = shell.inner(area);
        shell.render(area, buf);
        if self.payload.items.is_empty() {
            return;
        }

        let cells = if self.is_list() {
            stacked_rows(inner, self.payload.items.len(), self.cell_height())
        } else {
            grid_cells(
                inner,
                self.payload.columns,
                self.payload.items.len(),
                self.cell_height(),
            )
        };

        let count = cells.len().min(self.payload.items.len());
        for index in 0..count {
            let cell = cells[index];
            let focused = focus == Some(index);
            if self.is_list() {
                self.render_list_row(index, &self.payload.items[index], cell, buf, theme, focused);
            } else {
                self.render_grid_cell(&self.payload.items[index], cell, buf, theme, focused);
            }
            self.hits.record(index, cell);
        }
    }
}
