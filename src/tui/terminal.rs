//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::Settings;
use crate::storage::RecordStore;

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

fn restore_terminal_impl() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application with a fresh, empty journal
pub fn run_tui(settings: Settings) -> Result<()> {
    let mut terminal = init_terminal()?;
    let tick_rate = Duration::from_millis(settings.tick_rate_ms.max(1));
    let mut app = App::new(RecordStore::new(), settings);
    info!("journal view opened");

    let result = event_loop(&mut terminal, &mut app, EventHandler::new(tick_rate));

    restore_terminal()?;
    info!(records = app.store.len(), "journal view closed");
    result
}

fn event_loop(terminal: &mut Tui, app: &mut App, mut events: EventHandler) -> Result<()> {
    let mut dirty = true;
    let mut drawn_revision = None;

    loop {
        let revision = app.store.revision();
        if dirty || drawn_revision != Some(revision) {
            terminal.draw(|frame| super::views::render(frame, app))?;
            drawn_revision = Some(revision);
            dirty = false;
        }

        let event = events.next()?;
        match event {
            Event::Tick => {
                dirty = app.expire_notifications();
            }
            Event::Resize(width, height) => {
                debug!(width, height, "terminal resized");
                dirty = true;
            }
            Event::Key(_) => {
                handle_event(app, event)?;
                dirty = true;
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
