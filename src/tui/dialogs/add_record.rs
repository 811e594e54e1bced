//! Add trade dialog
//!
//! Modal form with six text fields. Enter validates and saves, Esc cancels.
//! A validation failure keeps the dialog open and moves focus to the field
//! that needs fixing.

use std::fmt::Write as _;

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tracing::debug;

use crate::error::JournalError;
use crate::models::{NumericField, RecordDraft};
use crate::services::JournalService;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;

/// Width the field labels are right-aligned to
const LABEL_WIDTH: usize = 23;

/// Which field is currently focused in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordField {
    #[default]
    Date,
    Ticker,
    Entry,
    StopLoss,
    Notes,
    Return,
}

impl RecordField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Date => Self::Ticker,
            Self::Ticker => Self::Entry,
            Self::Entry => Self::StopLoss,
            Self::StopLoss => Self::Notes,
            Self::Notes => Self::Return,
            Self::Return => Self::Date,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Date => Self::Return,
            Self::Ticker => Self::Date,
            Self::Entry => Self::Ticker,
            Self::StopLoss => Self::Entry,
            Self::Notes => Self::StopLoss,
            Self::Return => Self::Notes,
        }
    }
}

impl From<NumericField> for RecordField {
    fn from(field: NumericField) -> Self {
        match field {
            NumericField::Entry => Self::Entry,
            NumericField::StopLoss => Self::StopLoss,
            NumericField::ReturnPercentage => Self::Return,
        }
    }
}

/// State for the add trade dialog
#[derive(Debug, Clone)]
pub struct AddRecordFormState {
    /// Currently focused field
    pub focused_field: RecordField,

    pub date_input: TextInput,
    pub ticker_input: TextInput,
    pub entry_input: TextInput,
    pub stop_loss_input: TextInput,
    pub notes_input: TextInput,
    pub return_input: TextInput,

    /// Error message to display
    pub error_message: Option<String>,
}

impl Default for AddRecordFormState {
    fn default() -> Self {
        Self::new("%Y-%m-%d")
    }
}

impl AddRecordFormState {
    /// Create a fresh form with today's date pre-filled
    pub fn new(date_format: &str) -> Self {
        let mut state = Self {
            focused_field: RecordField::Date,
            date_input: TextInput::new()
                .label("Date")
                .placeholder("YYYY-MM-DD")
                .content(today(date_format)),
            ticker_input: TextInput::new().label("Ticker").placeholder("e.g. AAPL"),
            entry_input: TextInput::new().label("Entry").placeholder("0.00"),
            stop_loss_input: TextInput::new()
                .label("Stop Loss/Trailing Loss")
                .placeholder("0.00"),
            notes_input: TextInput::new().label("Notes").placeholder("Optional note"),
            return_input: TextInput::new().label("Return").placeholder("0.00"),
            error_message: None,
        };
        state.update_focus();
        state
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
        self.update_focus();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
        self.update_focus();
    }

    /// Set focus to a specific field
    pub fn set_focus(&mut self, field: RecordField) {
        self.focused_field = field;
        self.update_focus();
    }

    fn update_focus(&mut self) {
        let focused = self.focused_field;
        self.date_input.focused = focused == RecordField::Date;
        self.ticker_input.focused = focused == RecordField::Ticker;
        self.entry_input.focused = focused == RecordField::Entry;
        self.stop_loss_input.focused = focused == RecordField::StopLoss;
        self.notes_input.focused = focused == RecordField::Notes;
        self.return_input.focused = focused == RecordField::Return;
    }

    /// Get the currently focused input
    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            RecordField::Date => &mut self.date_input,
            RecordField::Ticker => &mut self.ticker_input,
            RecordField::Entry => &mut self.entry_input,
            RecordField::StopLoss => &mut self.stop_loss_input,
            RecordField::Notes => &mut self.notes_input,
            RecordField::Return => &mut self.return_input,
        }
    }

    /// All inputs in display order
    pub fn inputs(&self) -> [&TextInput; 6] {
        [
            &self.date_input,
            &self.ticker_input,
            &self.entry_input,
            &self.stop_loss_input,
            &self.notes_input,
            &self.return_input,
        ]
    }

    /// Snapshot the raw field text
    pub fn to_draft(&self) -> RecordDraft {
        RecordDraft {
            date: self.date_input.value().to_string(),
            ticker: self.ticker_input.value().to_string(),
            entry: self.entry_input.value().to_string(),
            stop_loss: self.stop_loss_input.value().to_string(),
            notes: self.notes_input.value().to_string(),
            return_percentage: self.return_input.value().to_string(),
        }
    }

    /// Clear any error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Set an error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Today's date in the configured format, falling back to ISO if the
/// format string is invalid
fn today(format: &str) -> String {
    let today = Local::now().date_naive();
    let mut out = String::new();
    if write!(out, "{}", today.format(format)).is_err() {
        out = today.format("%Y-%m-%d").to_string();
    }
    out
}

/// Render the add trade dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(64, 13, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Trade ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Date
            Constraint::Length(1), // Ticker
            Constraint::Length(1), // Entry
            Constraint::Length(1), // Stop loss
            Constraint::Length(1), // Notes
            Constraint::Length(1), // Return
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Buttons
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.add_form;
    for (input, chunk) in form.inputs().into_iter().zip(chunks.iter()) {
        frame.render_widget(Paragraph::new(input.to_line(LABEL_WIDTH)), *chunk);
    }

    if let Some(ref error) = form.error_message {
        let error_line = Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(error_line), chunks[7]);
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[Shift+Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Prev  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[8]);
}

/// Handle key input for the add trade dialog
pub fn handle_key(app: &mut App, key: KeyEvent) {
    let form = &mut app.add_form;

    match key.code {
        KeyCode::Esc => {
            debug!("add trade dialog cancelled");
            app.close_dialog();
        }

        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => form.prev_field(),
        KeyCode::Tab => form.next_field(),
        KeyCode::BackTab => form.prev_field(),

        KeyCode::Enter => save_record(app),

        KeyCode::Backspace => {
            form.clear_error();
            form.focused_input().backspace();
        }
        KeyCode::Delete => {
            form.clear_error();
            form.focused_input().delete();
        }
        KeyCode::Left => form.focused_input().move_left(),
        KeyCode::Right => form.focused_input().move_right(),
        KeyCode::Home => form.focused_input().move_start(),
        KeyCode::End => form.focused_input().move_end(),

        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            form.clear_error();
            form.focused_input().insert(c);
        }

        _ => {}
    }
}

/// Validate the form and append the record
///
/// On success the dialog closes and the app reacts to the store change. On
/// a validation error the dialog stays open with the offending field focused.
fn save_record(app: &mut App) {
    let draft = app.add_form.to_draft();

    match JournalService::new(&mut app.store).add(&draft) {
        Ok(change) => {
            app.close_dialog();
            app.on_store_change(change);
        }
        Err(JournalError::Validation(err)) => {
            app.add_form.set_focus(err.field.into());
            app.add_form.set_error(err.to_string());
        }
        Err(err) => app.add_form.set_error(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_cycle() {
        let mut field = RecordField::Date;
        for _ in 0..6 {
            field = field.next();
        }
        assert_eq!(field, RecordField::Date);
        assert_eq!(RecordField::Date.prev(), RecordField::Return);
        assert_eq!(RecordField::Return.next(), RecordField::Date);
    }

    #[test]
    fn test_focus_tracks_field() {
        let mut form = AddRecordFormState::default();
        assert!(form.date_input.focused);

        form.next_field();
        form.next_field();
        assert_eq!(form.focused_field, RecordField::Entry);
        assert!(form.entry_input.focused);
        assert!(!form.date_input.focused);

        form.focused_input().insert('7');
        assert_eq!(form.entry_input.value(), "7");
    }

    #[test]
    fn test_date_prefilled() {
        let form = AddRecordFormState::new("%Y-%m-%d");
        let expected = Local::now().date_naive().format("%Y-%m-%d").to_string();
        assert_eq!(form.date_input.value(), expected);
    }

    #[test]
    fn test_bad_date_format_falls_back() {
        let form = AddRecordFormState::new("%Q");
        assert_eq!(form.date_input.value().len(), 10);
    }

    #[test]
    fn test_to_draft_copies_raw_text() {
        let mut form = AddRecordFormState::default();
        form.ticker_input = TextInput::new().content("AAPL");
        form.entry_input = TextInput::new().content(" 12.5 ");
        form.notes_input = TextInput::new().content("breakout");

        let draft = form.to_draft();
        assert_eq!(draft.ticker, "AAPL");
        assert_eq!(draft.entry, " 12.5 ");
        assert_eq!(draft.notes, "breakout");
        assert_eq!(draft.return_percentage, "");
    }

    #[test]
    fn test_numeric_field_maps_to_form_field() {
        assert_eq!(RecordField::from(NumericField::Entry), RecordField::Entry);
        assert_eq!(
            RecordField::from(NumericField::StopLoss),
            RecordField::StopLoss
        );
        assert_eq!(
            RecordField::from(NumericField::ReturnPercentage),
            RecordField::Return
        );
    }
}
