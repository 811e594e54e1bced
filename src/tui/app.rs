//! Application state for the TUI
//!
//! The App struct is the application context: it owns the record store and
//! all UI state, and is passed explicitly to views, dialogs and handlers.

use tracing::{debug, info};

use crate::config::Settings;
use crate::storage::{RecordStore, StoreChange};

use super::dialogs::add_record::{AddRecordFormState, RecordField};
use super::widgets::notification::{Notification, NotificationQueue};

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddRecord,
    Help,
}

/// Main application state
pub struct App {
    /// The journal records
    pub store: RecordStore,

    /// Application settings
    pub settings: Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selected row in the journal table
    pub selected_index: usize,

    /// Status message to display
    pub status_message: Option<String>,

    /// Add trade form state
    pub add_form: AddRecordFormState,

    /// Pending toast notifications
    pub notifications: NotificationQueue,
}

impl App {
    /// Create a new App instance around an existing store
    pub fn new(store: RecordStore, settings: Settings) -> Self {
        let add_form = AddRecordFormState::new(&settings.date_format);
        Self {
            store,
            settings,
            should_quit: false,
            active_dialog: ActiveDialog::default(),
            selected_index: 0,
            status_message: None,
            add_form,
            notifications: NotificationQueue::new(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        info!(records = self.store.len(), "quit requested");
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        debug!(?dialog, "opening dialog");
        self.active_dialog = dialog;
        if dialog == ActiveDialog::AddRecord {
            self.add_form = AddRecordFormState::new(&self.settings.date_format);
            self.add_form.set_focus(RecordField::Date);
        }
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// React to a store mutation
    pub fn on_store_change(&mut self, change: StoreChange) {
        match change {
            StoreChange::Appended { index, id } => {
                self.selected_index = index;
                let ticker = self
                    .store
                    .find(id)
                    .map(|r| r.ticker.clone())
                    .unwrap_or_default();
                let message = if ticker.is_empty() {
                    "Added trade".to_string()
                } else {
                    format!("Added {}", ticker)
                };
                self.set_status(message.clone());
                self.notifications.push(Notification::success(message));
            }
        }
    }

    /// Sorting has no defined order yet; tell the user and change nothing
    pub fn request_sort(&mut self) {
        debug!("sort requested but not implemented");
        self.notifications
            .push(Notification::info("Sorting is not available"));
    }

    /// Move selection up
    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move selection down
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.store.len() {
            self.selected_index += 1;
        }
    }

    /// Select the first row
    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    /// Select the last row
    pub fn select_last(&mut self) {
        self.selected_index = self.store.len().saturating_sub(1);
    }

    /// Drop expired notifications, returning whether the screen changed
    pub fn expire_notifications(&mut self) -> bool {
        self.notifications.remove_expired()
    }
}
