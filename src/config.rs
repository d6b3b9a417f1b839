//! Settings file handling.
//!
//! `blockdeck.toml` in the data dir is optional; a missing or unreadable
//! file falls back to defaults so the preview always starts.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::ui::theme::ThemePalette;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Palette for templates and chrome.
    pub theme: ThemeChoice,
    /// Start with the click cue muted.
    pub muted: bool,
    /// Default poll cadence for `fetch`.
    pub poll_interval_ms: u64,
    /// Default overall deadline for `fetch`.
    pub poll_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::Dark,
            muted: false,
            poll_interval_ms: 1500,
            poll_timeout_secs: 120,
        }
    }
}

impl Settings {
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join("blockdeck.toml")
    }

    pub fn load_or_default(data_dir: &Path) -> Settings {
        let path = Self::path(data_dir);
        match fs::read_to_string(&path) {
            Ok(raw) => toml::from_str(&raw).unwrap_or_else(|err| {
                warn!("ignoring malformed {}: {err}", path.display());
                Settings::default()
            }),
            Err(_) => Settings::default(),
        }
    }

    pub fn palette(&self) -> ThemePalette {
        match self.theme {
            ThemeChoice::Dark => ThemePalette::dark(),
            ThemeChoice::Light => ThemePalette::light(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_or_default(dir.path());
        assert_eq!(settings.theme, ThemeChoice::Dark);
        assert!(!settings.muted);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(Settings::path(dir.path()), "theme = \"light\"\n").unwrap();
        let settings = Settings::load_or_default(dir.path());
        assert_eq!(settings.theme, ThemeChoice::Light);
        assert_eq!(settings.poll_interval_ms, 1500);
    }

    #[test]
    fn malformed_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(Settings::path(dir.path()), "theme = 12\n").unwrap();
        let settings = Settings::load_or_default(dir.path());
        assert_eq!(settings.theme, ThemeChoice::Dark);
    }
}
