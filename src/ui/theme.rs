//! Theme palette shared by every template and the preview chrome.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub fg: Color,
    pub bg: Color,
    pub surface: Color,
    pub hint: Color,
    pub accent: Color,
    pub accent_alt: Color,
    pub badge: Color,
    pub ok: Color,
    pub warn: Color,
}

impl ThemePalette {
    pub fn dark() -> Self {
        Self {
            fg: Color::Rgb(220, 220, 225),
            bg: Color::Rgb(16, 18, 24),
            surface: Color::Rgb(34, 38, 48),
            hint: Color::Rgb(120, 126, 140),
            accent: Color::Rgb(255, 200, 90),
            accent_alt: Color::Rgb(120, 200, 255),
            badge: Color::Rgb(255, 140, 160),
            ok: Color::Rgb(120, 220, 150),
            warn: Color::Rgb(240, 110, 110),
        }
    }

    pub fn light() -> Self {
        Self {
            fg: Color::Rgb(35, 38, 46),
            bg: Color::Rgb(248, 248, 246),
            surface: Color::Rgb(228, 230, 236),
            hint: Color::Rgb(130, 134, 146),
            accent: Color::Rgb(176, 108, 0),
            accent_alt: Color::Rgb(0, 110, 180),
            badge: Color::Rgb(180, 60, 90),
            ok: Color::Rgb(30, 140, 70),
            warn: Color::Rgb(190, 50, 50),
        }
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.fg)
    }

    pub fn hint(&self) -> Style {
        Style::default().fg(self.hint)
    }

    pub fn frame(&self) -> Style {
        Style::default().fg(self.hint)
    }

    /// Border/label style for the focused clickable target.
    pub fn focus(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn badge(&self) -> Style {
        Style::default()
            .fg(self.badge)
            .add_modifier(Modifier::BOLD)
    }

    /// Emphasized metric/value style.
    pub fn value(&self) -> Style {
        Style::default()
            .fg(self.accent_alt)
            .add_modifier(Modifier::BOLD)
    }

    pub fn link(&self) -> Style {
        Style::default()
            .fg(self.accent_alt)
            .add_modifier(Modifier::UNDERLINED)
    }
}
