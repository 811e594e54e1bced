//! User settings for the trade journal
//!
//! Display preferences read from `config.json`. The file is optional and the
//! application never writes it.

use std::path::Path;

use ratatui::style::Color;
use serde::Deserialize;

use super::paths::JournalPaths;
use crate::display::ReturnCategory;
use crate::error::JournalError;

/// Background colors of the Return (%) cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ReturnColors {
    #[serde(default = "default_negative_color")]
    pub negative: Color,
    #[serde(default = "default_neutral_color")]
    pub neutral: Color,
    #[serde(default = "default_positive_color")]
    pub positive: Color,
}

fn default_negative_color() -> Color {
    Color::Red
}

fn default_neutral_color() -> Color {
    Color::Reset
}

fn default_positive_color() -> Color {
    Color::Green
}

impl Default for ReturnColors {
    fn default() -> Self {
        Self {
            negative: default_negative_color(),
            neutral: default_neutral_color(),
            positive: default_positive_color(),
        }
    }
}

impl ReturnColors {
    /// Background color for a return category
    pub fn color_for(&self, category: ReturnCategory) -> Color {
        match category {
            ReturnCategory::Negative => self.negative,
            ReturnCategory::Neutral => self.neutral,
            ReturnCategory::Positive => self.positive,
        }
    }
}

/// User settings for the trade journal
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// strftime format of the date pre-filled in the add form
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Event loop tick in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Return cell colors
    #[serde(default)]
    pub return_colors: ReturnColors,
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            tick_rate_ms: default_tick_rate_ms(),
            return_colors: ReturnColors::default(),
        }
    }
}

impl Settings {
    /// Load settings from the default location, or use defaults if the file
    /// doesn't exist
    pub fn load_or_default(paths: &JournalPaths) -> Result<Self, JournalError> {
        let settings_path = paths.settings_file();
        if settings_path.exists() {
            Self::load_from(&settings_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load settings from an explicit file, which must exist
    pub fn load_from(path: &Path) -> Result<Self, JournalError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            JournalError::Io(format!(
                "Failed to read settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            JournalError::Config(format!(
                "Failed to parse settings file {}: {}",
                path.display(),
                e
            ))
        })
    }
}
