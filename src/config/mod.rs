//! Configuration module for the trade journal
//!
//! This module provides:
//! - Path resolution for the settings file
//! - User display settings

pub mod paths;
pub mod settings;

pub use paths::JournalPaths;
pub use settings::{ReturnColors, Settings};
