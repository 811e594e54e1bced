use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, Level};

use journal::config::{JournalPaths, Settings};

#[derive(Parser)]
#[command(
    name = "journal",
    version,
    about = "Terminal trade journal",
    long_about = "A terminal trade journal. Record trades with their entry, \
                  stop loss, notes and return, and review them in a table \
                  colored by the sign of the return. Nothing is saved to disk."
)]
struct Cli {
    /// Settings file to use instead of the default location
    #[arg(long, value_name = "PATH", env = "TRADE_JOURNAL_CONFIG")]
    config: Option<PathBuf>,

    /// Write logs to this file (logging is off otherwise)
    #[arg(long, value_name = "PATH", env = "TRADE_JOURNAL_LOG")]
    log_file: Option<PathBuf>,

    /// Maximum log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    log_level: Level,
}

fn init_logging(path: &Path, level: Level) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_max_level(level)
        .with_ansi(false)
        .init();

    Ok(())
}

fn load_settings(config: Option<&Path>) -> Result<Settings> {
    let settings = match config {
        Some(path) => Settings::load_from(path)?,
        None => {
            let paths = JournalPaths::new()?;
            Settings::load_or_default(&paths)?
        }
    };
    Ok(settings)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(ref path) = cli.log_file {
        init_logging(path, cli.log_level)?;
    }

    info!(version = env!("CARGO_PKG_VERSION"), "starting trade journal");

    let settings = match load_settings(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(err) => {
            error!(error = %err, "failed to load settings");
            return Err(err);
        }
    };

    journal::tui::run_tui(settings)?;

    info!("trade journal exited");
    Ok(())
}
