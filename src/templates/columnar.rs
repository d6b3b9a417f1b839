//! Tabular/columnar templates: row and column units, one target each.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};
use serde_json::Value;

use crate::dispatch::Dispatcher;
use crate::model::content::ColumnDef;
use crate::model::payload::{TablePayload, ThreeColumnPayload, TwoColumnPayload};
use crate::registry::TemplateKind;
use crate::templates::{HitMap, Template, container};
use crate::ui::icon::glyph_for;
use crate::ui::theme::ThemePalette;

pub struct DataTable {
    payload: TablePayload,
    hits: HitMap,
}

impl DataTable {
    pub fn new(value: &Value) -> Self {
        Self {
            payload: TablePayload::decode(value),
            hits: HitMap::default(),
        }
    }

    fn column_count(&self) -> usize {
        self.payload
            .rows
            .iter()
            .map(|row| row.cells.len())
            .chain(std::iter::once(self.payload.headers.len()))
            .max()
            .unwrap_or(1)
            .max(1)
    }

    fn cell_rects(&self, strip: Rect, columns: usize) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(strip)
            .to_vec()
    }
}

impl Template for DataTable {
    fn kind(&self) -> TemplateKind {
        TemplateKind::DataTable
    }

    fn target_count(&self) -> usize {
        self.payload.rows.len()
    }

    fn hits(&self) -> &HitMap {
        &self.hits
    }

    fn activate(&mut self, index: usize, host: &Dispatcher) {
        if let Some(row) = self.payload.rows.get(index) {
            host.dispatch(&row.action_phrase);
        }
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &ThemePalette, focus: Option<usize>) {
        self.hits.clear();
        let shell = container(&self.payload.title, theme);
        let inner = shell.inner(area);
        shell.render(area, buf);
        if inner.height == 0 {
            return;
        }

        let columns = self.column_count();
        let bottom = inner.y + inner.height;
        let mut y = inner.y;

        if !self.payload.headers.is_empty() {
            let strip = Rect::new(inner.x, y, inner.width, 1);
            for (cell_area, header) in self
                .cell_rects(strip, columns)
                .into_iter()
                .zip(&self.payload.headers)
            {
                Paragraph::new(Line::from(Span::styled(
                    header.clone(),
                    theme.hint().add_modifier(Modifier::BOLD),
                )))
                .render(cell_area, buf);
            }
            y += 1;
        }

        for index in 0..self.payload.rows.len() {
            if y >= bottom {
                break;
            }
            let strip = Rect::new(inner.x, y, inner.width, 1);
            let focused = focus == Some(index);
            let style = if focused { theme.focus() } else { theme.text() };
            let rects = self.cell_rects(strip, columns);
            for (cell_area, cell) in rects.into_iter().zip(&self.payload.rows[index].cells) {
                Paragraph::new(Line::from(Span::styled(cell.clone(), style)))
                    .render(cell_area, buf);
            }
            self.hits.record(index, strip);
            y += 1;
        }
    }
}

fn render_column_card(
    column: &ColumnDef,
    cell: Rect,
    buf: &mut Buffer,
    theme: &ThemePalette,
    focused: bool,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused { theme.focus() } else { theme.frame() });
    let inner = block.inner(cell);
    block.render(cell, buf);

    let mut spans = Vec::new();
    if let Some(glyph) = glyph_for(column.icon.as_deref()) {
        spans.push(Span::styled(format!("{glyph} "), theme.value()));
    }
    spans.push(Span::styled(
        column.title.clone(),
        if focused { theme.focus() } else { theme.title() },
    ));
    let mut lines = vec![Line::from(spans)];
    for body_line in column.body.lines() {
        lines.push(Line::from(Span::styled(body_line.to_string(), theme.text())));
    }
    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .render(inner, buf);
}

pub struct TwoColumnContent {
    payload: TwoColumnPayload,
    hits: HitMap,
}

impl TwoColumnContent {
    pub fn new(value: &Value) -> Self {
        Self {
            payload: TwoColumnPayload::decode(value),
            hits: HitMap::default(),
        }
    }

    fn sides(&self) -> Vec<&ColumnDef> {
        self.payload
            .left
            .iter()
            .chain(self.payload.right.iter())
            .collect()
    }
}

impl Template for TwoColumnContent {
    fn kind(&self) -> TemplateKind {
        TemplateKind::TwoColumnContent
    }

    fn target_count(&self) -> usize {
        self.sides().len()
    }

    fn hits(&self) -> &HitMap {
        &self.hits
    }

    fn activate(&mut self, index: usize, host: &Dispatcher) {
        if let Some(column) = self.sides().get(index) {
            host.dispatch(&column.action_phrase);
        }
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &ThemePalette, focus: Option<usize>) {
        self.hits.clear();
        let shell = container("", theme);
        let inner = shell.inner(area);
        shell.render(area, buf);

        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(inner);

        let mut target = 0usize;
        let columns = [self.payload.left.clone(), self.payload.right.clone()];
        for (half, column) in halves.iter().zip(columns.iter()) {
            if let Some(column) = column {
                render_column_card(column, *half, buf, theme, focus == Some(target));
                self.hits.record(target, *half);
                target += 1;
            }
        }
    }
}

pub struct ThreeColumnLayout {
    payload: ThreeColumnPayload,
    hits: HitMap,
}

impl ThreeColumnLayout {
    pub fn new(value: &Value) -> Self {
        Self {
            payload: ThreeColumnPayload::decode(value),
            hits: HitMap::default(),
        }
    }
}

impl Template for ThreeColumnLayout {
    fn kind(&self) -> TemplateKind {
        TemplateKind::ThreeColumnLayout
    }

    fn target_count(&self) -> usize {
        self.payload.columns.len()
    }

    fn hits(&self) -> &HitMap {
        &self.hits
    }

    fn activate(&mut self, index: usize, host: &Dispatcher) {
        if let Some(column) = self.payload.columns.get(index) {
            host.dispatch(&column.action_phrase);
        }
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &ThemePalette, focus: Option<usize>) {
        self.hits.clear();
        let shell = container("", theme);
        let inner = shell.inner(area);
        shell.render(area, buf);
        if self.payload.columns.is_empty() {
            return;
        }

        let count = self.payload.columns.len().min(3);
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, count as u32); count])
            .split(inner);

        for index in 0..count {
            let cell = cells[index];
            render_column_card(
                &self.payload.columns[index],
                cell,
                buf,
                theme,
                focus == Some(index),
            );
            self.hits.record(index, cell);
        }
    }
}
