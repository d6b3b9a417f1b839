//! Preview TUI - browse a deck block by block and exercise its targets.
//!
//! Each block is mounted fresh when navigated to, so disclosure state
//! always restarts from payload defaults. Activations run through the
//! real dispatcher; notified phrases land in the transcript pane.

use std::io;

use anyhow::Result;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers, MouseButton,
    MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};
use std::sync::Arc;

use crate::dispatch::{Dispatcher, TerminalBell, Transcript, TranscriptSink};
use crate::generator::Deck;
use crate::registry::{self, ResolveError};
use crate::templates::Template;
use crate::ui::theme::ThemePalette;

/// A deck slot: either a mounted template or the reason it would not mount.
enum Mounted {
    Template(Box<dyn Template>),
    Unresolved(ResolveError),
}

struct PreviewState {
    deck: Deck,
    index: usize,
    mounted: Mounted,
    focus: Option<usize>,
    transcript: Transcript,
    dispatcher: Dispatcher,
    bell: Arc<TerminalBell>,
    show_help: bool,
}

impl PreviewState {
    fn new(deck: Deck, muted: bool) -> Self {
        let transcript = Transcript::default();
        let bell = Arc::new(TerminalBell::new(muted));
        let dispatcher = Dispatcher::new(
            Arc::new(TranscriptSink::new(transcript.clone())),
            bell.clone(),
        );
        let mounted = Self::mount(&deck, 0);
        Self {
            deck,
            index: 0,
            mounted,
            focus: None,
            transcript,
            dispatcher,
            bell,
            show_help: false,
        }
    }

    /// Build the template for slot `index`. Mounting is where local state
    /// is born; there is nothing to carry over from the previous slot.
    fn mount(deck: &Deck, index: usize) -> Mounted {
        let Some(block) = deck.blocks.get(index) else {
            return Mounted::Unresolved(ResolveError::Unknown(String::new()));
        };
        match registry::resolve(&block.template_name) {
            Ok(kind) => Mounted::Template(registry::build(kind, &block.payload)),
            Err(err) => Mounted::Unresolved(err),
        }
    }

    fn goto(&mut self, index: usize) {
        if self.deck.blocks.is_empty() {
            return;
        }
        self.index = index % self.deck.blocks.len();
        self.mounted = Self::mount(&self.deck, self.index);
        self.focus = None;
    }

    fn next_block(&mut self) {
        self.goto(self.index + 1);
    }

    fn prev_block(&mut self) {
        if self.deck.blocks.is_empty() {
            return;
        }
        self.goto(self.index.checked_sub(1).unwrap_or(self.deck.blocks.len() - 1));
    }

    fn target_count(&self) -> usize {
        match &self.mounted {
            Mounted::Template(template) => template.target_count(),
            Mounted::Unresolved(_) => 0,
        }
    }

    fn focus_next(&mut self) {
        let count = self.target_count();
        if count == 0 {
            return;
        }
        self.focus = Some(match self.focus {
            Some(i) => (i + 1) % count,
            None => 0,
        });
    }

    fn focus_prev(&mut self) {
        let count = self.target_count();
        if count == 0 {
            return;
        }
        self.focus = Some(match self.focus {
            Some(0) | None => count - 1,
            Some(i) => i - 1,
        });
    }

    fn activate_focused(&mut self) {
        if let (Mounted::Template(template), Some(index)) = (&mut self.mounted, self.focus) {
            template.activate(index, &self.dispatcher);
        }
    }

    fn click_at(&mut self, x: u16, y: u16) {
        if let Mounted::Template(template) = &mut self.mounted
            && let Some(index) = template.target_at(x, y)
        {
            self.focus = Some(index);
            template.activate(index, &self.dispatcher);
        }
    }
}

/// Footer key legend, varying with the mute state.
pub fn footer_legend(muted: bool) -> String {
    let cue = if muted { "m: Unmute" } else { "m: Mute" };
    format!("←→/pn: Block | ↑↓/jk: Target | Enter/Click: Activate | {cue} | ?: Help | q: Quit")
}

/// Run the interactive preview. With `once` set, draw a single frame and
/// return without entering the event loop (useful for smoke runs).
pub fn run_preview(deck: Deck, theme: &ThemePalette, muted: bool, once: bool) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, deck, theme, muted, once);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;

    result
}

fn event_loop(
    terminal: &mut Terminal<ratatui::backend::CrosstermBackend<io::Stdout>>,
    deck: Deck,
    theme: &ThemePalette,
    muted: bool,
    once: bool,
) -> Result<()> {
    let mut state = PreviewState::new(deck, muted);

    loop {
        terminal.draw(|f| render_ui(f, &mut state, theme))?;
        if once {
            return Ok(());
        }

        match event::read()? {
            Event::Key(key) => match (key.code, key.modifiers) {
                (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,
                (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => {
                    if state.show_help {
                        state.show_help = false;
                    } else {
                        break;
                    }
                }
                (KeyCode::Char('?'), _) | (KeyCode::F(1), _) => {
                    state.show_help = !state.show_help;
                }
                (KeyCode::Right, _) | (KeyCode::Char('n'), _) => state.next_block(),
                (KeyCode::Left, _) | (KeyCode::Char('p'), _) => state.prev_block(),
                (KeyCode::Down, _) | (KeyCode::Char('j'), _) | (KeyCode::Tab, _) => {
                    state.focus_next();
                }
                (KeyCode::Up, _) | (KeyCode::Char('k'), _) | (KeyCode::BackTab, _) => {
                    state.focus_prev();
                }
                (KeyCode::Enter, _) | (KeyCode::Char(' '), _) => state.activate_focused(),
                (KeyCode::Char('m'), _) => {
                    state.bell.toggle();
                }
                _ => {}
            },
            Event::Mouse(mouse) => {
                if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                    state.click_at(mouse.column, mouse.row);
                }
            }
            _ => {}
        }
    }

    Ok(())
}

fn render_ui(f: &mut Frame, state: &mut PreviewState, theme: &ThemePalette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, state, theme, chunks[0]);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(chunks[1]);

    match &mut state.mounted {
        Mounted::Template(template) => {
            template.render(content[0], f.buffer_mut(), theme, state.focus);
        }
        Mounted::Unresolved(err) => render_unresolved(f, err, theme, content[0]),
    }
    render_transcript(f, state, theme, content[1]);

    let footer = Paragraph::new(footer_legend(state.bell.muted()))
        .block(Block::default().borders(Borders::ALL).title("Keys"))
        .style(theme.hint());
    f.render_widget(footer, chunks[2]);

    if state.show_help {
        render_help_overlay(f, theme);
    }
}

fn render_header(f: &mut Frame, state: &PreviewState, theme: &ThemePalette, area: Rect) {
    let name = state
        .deck
        .blocks
        .get(state.index)
        .map(|b| b.template_name.as_str())
        .unwrap_or("(empty deck)");
    let targets = state.target_count();
    let text = format!(
        "{} | block {}/{} | {} target{}",
        name,
        state.index + 1,
        state.deck.blocks.len().max(1),
        targets,
        if targets == 1 { "" } else { "s" },
    );
    let header = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Preview"))
        .style(theme.title());
    f.render_widget(header, area);
}

fn render_transcript(f: &mut Frame, state: &PreviewState, theme: &ThemePalette, area: Rect) {
    let entries = state.transcript.entries();
    let items: Vec<ListItem> = entries
        .iter()
        .rev()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(entry.at.format("%H:%M:%S ").to_string(), theme.hint()),
                Span::styled(entry.phrase.clone(), theme.text()),
            ]))
        })
        .collect();
    let title = format!("Transcript ({})", entries.len());
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(theme.frame()),
    );
    f.render_widget(list, area);
}

fn render_unresolved(f: &mut Frame, err: &ResolveError, theme: &ThemePalette, area: Rect) {
    let mut lines = vec![Line::from(Span::styled(
        err.to_string(),
        theme.text().fg(theme.warn),
    ))];
    if let Some(suggestion) = err.suggestion() {
        lines.push(Line::from(Span::styled(
            format!("closest registered name: {suggestion}"),
            theme.hint(),
        )));
    }
    let para = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Unknown template")
                .border_style(theme.frame()),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(para, area);
}

fn render_help_overlay(f: &mut Frame, theme: &ThemePalette) {
    let area = f.area();
    let width = 52.min(area.width);
    let height = 12.min(area.height);
    let popup = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );
    let lines = [
        "←/→ or p/n   previous / next block",
        "↑/↓ or j/k   move target focus",
        "Tab/S-Tab    move target focus",
        "Enter/Space  activate focused target",
        "mouse click  activate target under cursor",
        "m            toggle click cue mute",
        "?            toggle this help",
        "q / Esc      quit",
    ];
    let text: Vec<Line> = lines
        .iter()
        .map(|l| Line::from(Span::styled(*l, theme.text())))
        .collect();
    f.render_widget(Clear, popup);
    let para = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Help")
            .border_style(theme.focus()),
    );
    f.render_widget(para, popup);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::sample_deck;

    #[test]
    fn legend_tracks_mute_state() {
        assert!(footer_legend(false).contains("m: Mute"));
        assert!(footer_legend(true).contains("m: Unmute"));
    }

    #[test]
    fn navigation_wraps_and_remounts() {
        let mut state = PreviewState::new(sample_deck(), true);
        let total = state.deck.blocks.len();
        state.prev_block();
        assert_eq!(state.index, total - 1);
        state.next_block();
        assert_eq!(state.index, 0);
        state.focus_next();
        assert_eq!(state.focus, Some(0));
        state.next_block();
        assert_eq!(state.focus, None);
    }
}
