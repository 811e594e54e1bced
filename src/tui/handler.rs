//! Event handler for the TUI
//!
//! Routes keyboard events to the journal view or the active dialog.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::event::Event;

/// Handle an incoming event
///
/// Once the app has quit, events are ignored so nothing can reach the store.
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    if app.should_quit {
        return Ok(());
    }

    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.expire_notifications();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    match app.active_dialog {
        ActiveDialog::AddRecord => dialogs::add_record::handle_key(app, key),
        ActiveDialog::Help => handle_help_key(app, key),
        ActiveDialog::None => handle_journal_key(app, key),
    }

    Ok(())
}

/// Handle keys while the help dialog is open
fn handle_help_key(app: &mut App, key: KeyEvent) {
    if matches!(
        key.code,
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') | KeyCode::Char('q')
    ) {
        app.close_dialog();
    }
}

/// Handle keys in the journal table view
fn handle_journal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),

        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        KeyCode::Char('a') | KeyCode::Char('n') => app.open_dialog(ActiveDialog::AddRecord),

        KeyCode::Char('s') => app.request_sort(),

        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.select_last(),

        _ => {}
    }
}
