//! The template component set.
//!
//! Every template is a pure function of its normalized payload, its local
//! disclosure state and the focus cursor. The shared capability is uniform:
//! render into a buffer, expose zero or more ordered clickable targets, and
//! on activation of target *t* play the click cue then notify the host with
//! *t*'s exact action phrase. Families differ only in payload shape and
//! visual arrangement.

pub mod collection;
pub mod columnar;
pub mod disclosure;
pub mod flow;
pub mod single;

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders};
use serde_json::Value;

use crate::dispatch::Dispatcher;
use crate::registry::TemplateKind;
use crate::ui::theme::ThemePalette;

/// Rendering-and-interaction contract shared by all 22 templates.
pub trait Template {
    fn kind(&self) -> TemplateKind;

    /// Number of ordered clickable targets, derived from the normalized
    /// payload and current local state.
    fn target_count(&self) -> usize;

    /// Hit regions recorded by the last render.
    fn hits(&self) -> &HitMap;

    /// Render into the buffer. Takes `&mut self` only to refresh the hit
    /// regions; payload and local state are not mutated.
    fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &ThemePalette, focus: Option<usize>);

    /// Activate target `index`: cue first, then notify, per family rules.
    /// Out-of-range indices are ignored.
    fn activate(&mut self, index: usize, host: &Dispatcher);

    /// Target under a terminal cell, per the last render.
    fn target_at(&self, x: u16, y: u16) -> Option<usize> {
        self.hits().locate(x, y)
    }
}

/// Construct the template instance for a resolved kind.
pub fn build(kind: TemplateKind, payload: &Value) -> Box<dyn Template> {
    use TemplateKind::*;
    match kind {
        CardGrid | IconGrid | NavigationGrid | ClientLogoGrid | FeatureList | NumberedList
        | ResourceLinks | ResultsGrid => Box::new(collection::CollectionTemplate::new(kind, payload)),
        FlowDiagram | DataFlowDiagram | LayerDiagram => {
            Box::new(flow::FlowTemplate::new(kind, payload))
        }
        ConceptCard => Box::new(single::ConceptCard::new(payload)),
        QuoteCard => Box::new(single::QuoteCard::new(payload)),
        StatHighlight => Box::new(single::StatHighlight::new(payload)),
        ProofPointCard => Box::new(single::ProofPointCard::new(payload)),
        CtaBanner => Box::new(single::CtaBanner::new(payload)),
        AccordionList => Box::new(disclosure::AccordionList::new(payload)),
        ExpandableSection => Box::new(disclosure::ExpandableSection::new(payload)),
        TabContent => Box::new(disclosure::TabContent::new(payload)),
        DataTable => Box::new(columnar::DataTable::new(payload)),
        TwoColumnContent => Box::new(columnar::TwoColumnContent::new(payload)),
        ThreeColumnLayout => Box::new(columnar::ThreeColumnLayout::new(payload)),
    }
}

/// Target hit regions recorded during render, for mouse lookup.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(usize, Rect)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn record(&mut self, target: usize, area: Rect) {
        self.regions.push((target, area));
    }

    /// Later regions win, so nested targets shadow their containers.
    pub fn locate(&self, x: u16, y: u16) -> Option<usize> {
        self.regions
            .iter()
            .rev()
            .find(|(_, region)| region.contains(Position::new(x, y)))
            .map(|(target, _)| *target)
    }
}

/// Standard bordered container shell. Rendered even for empty payloads;
/// only FlowDiagram suppresses itself entirely.
pub(crate) fn container<'a>(title: &'a str, theme: &ThemePalette) -> Block<'a> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.frame());
    if title.is_empty() {
        block
    } else {
        block.title(Span::styled(title, theme.title()))
    }
}

/// Row-major grid cells: `columns` per row, `cell_height` lines each,
/// clipped to the available area.
pub(crate) fn grid_cells(area: Rect, columns: u16, count: usize, cell_height: u16) -> Vec<Rect> {
    if count == 0 || area.width == 0 || area.height == 0 || cell_height == 0 {
        return Vec::new();
    }
    let columns = columns.max(1);
    let mut cells = Vec::with_capacity(count);
    let mut y = area.y;
    let bottom = area.y + area.height;
    'rows: while cells.len() < count {
        if y >= bottom {
            break;
        }
        let height = cell_height.min(bottom - y);
        let strip = Rect::new(area.x, y, area.width, height);
        let row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns as usize])
            .split(strip);
        for cell in row.iter() {
            cells.push(*cell);
            if cells.len() == count {
                break 'rows;
            }
        }
        y += cell_height;
    }
    cells
}

/// Vertically stacked strips of `row_height` lines, clipped to the area.
pub(crate) fn stacked_rows(area: Rect, count: usize, row_height: u16) -> Vec<Rect> {
    if count == 0 || area.width == 0 || area.height == 0 || row_height == 0 {
        return Vec::new();
    }
    let mut rows = Vec::with_capacity(count);
    let bottom = area.y + area.height;
    let mut y = area.y;
    for _ in 0..count {
        if y >= bottom {
            break;
        }
        let height = row_height.min(bottom - y);
        rows.push(Rect::new(area.x, y, area.width, height));
        y += row_height;
    }
    rows
}

/// Rough wrapped-line count for sizing disclosure bodies.
pub(crate) fn wrap_height(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    text.lines()
        .map(|line| (line.chars().count() as u16).div_ceil(width).max(1))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_fills_row_major() {
        let cells = grid_cells(Rect::new(0, 0, 60, 20), 3, 5, 4);
        assert_eq!(cells.len(), 5);
        assert_eq!(cells[0].y, 0);
        assert_eq!(cells[3].y, 4);
        assert!(cells[1].x > cells[0].x);
    }

    #[test]
    fn grid_clips_to_area() {
        let cells = grid_cells(Rect::new(0, 0, 60, 4), 2, 8, 4);
        assert_eq!(cells.len(), 2);
    }

    #[test]
    fn hit_map_prefers_latest_region() {
        let mut hits = HitMap::default();
        hits.record(0, Rect::new(0, 0, 10, 10));
        hits.record(1, Rect::new(2, 2, 4, 4));
        assert_eq!(hits.locate(3, 3), Some(1));
        assert_eq!(hits.locate(0, 0), Some(0));
        assert_eq!(hits.locate(50, 50), None);
    }

    #[test]
    fn wrap_height_counts_wrapped_lines() {
        assert_eq!(wrap_height("short", 20), 1);
        assert_eq!(wrap_height("a".repeat(45).as_str(), 20), 3);
        assert_eq!(wrap_height("two\nlines", 20), 2);
    }
}
