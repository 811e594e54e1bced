//! Path management for the trade journal
//!
//! Only the optional settings file lives on disk; journal records never do.
//!
//! ## Path Resolution Order
//!
//! 1. `TRADE_JOURNAL_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/trade-journal` or `~/.config/trade-journal`
//! 3. Windows: `%APPDATA%\trade-journal`

use std::path::PathBuf;

use crate::error::JournalError;

/// Environment variable overriding the base directory
pub const DIR_ENV_VAR: &str = "TRADE_JOURNAL_DIR";

/// Manages the paths used by the trade journal
#[derive(Debug, Clone)]
pub struct JournalPaths {
    base_dir: PathBuf,
}

impl JournalPaths {
    /// Resolve the base directory
    ///
    /// # Errors
    ///
    /// Returns an error if neither the override nor a home directory can be
    /// determined.
    pub fn new() -> Result<Self, JournalError> {
        let base_dir = match std::env::var(DIR_ENV_VAR) {
            Ok(custom) => PathBuf::from(custom),
            Err(_) => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create JournalPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, JournalError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                JournalError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("trade-journal"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, JournalError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| JournalError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("trade-journal"))
}
