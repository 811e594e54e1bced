//! TUI Views module
//!
//! Contains the journal view (header, table, buttons, status bar) and draws
//! any active dialog and notification on top.

pub mod button_bar;
pub mod journal_table;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;
use super::widgets::notification::{notification_area, NotificationWidget};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    journal_table::render_header(frame, app, layout.header);
    journal_table::render(frame, app, layout.table);
    button_bar::render(frame, layout.buttons);
    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::AddRecord => dialogs::add_record::render(frame, app),
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::None => {}
    }

    if let Some(notification) = app.notifications.current() {
        frame.render_widget(
            NotificationWidget::new(notification),
            notification_area(frame.area()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::{Record, RecordDraft};
    use crate::services::JournalService;
    use crate::storage::RecordStore;
    use ratatui::{backend::TestBackend, style::Color, Terminal};

    fn draw(app: &App) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect()
    }

    /// Background color of the first cell of `needle` on screen
    fn bg_of(terminal: &Terminal<TestBackend>, needle: &str) -> Option<Color> {
        let cells = &terminal.backend().buffer().content;
        let wanted: Vec<String> = needle.chars().map(|c| c.to_string()).collect();
        cells
            .windows(wanted.len())
            .find(|window| {
                window
                    .iter()
                    .zip(&wanted)
                    .all(|(cell, ch)| cell.symbol() == ch)
            })
            .map(|window| window[0].bg)
    }

    fn sample_app() -> App {
        let mut store = RecordStore::new();
        store.append(Record::new("2024-01-01", "AAPL", 12.5, 10.0, "test", -0.05));
        store.append(Record::new("2024-01-02", "MSFT", 300.0, 290.0, "", 4.0));
        store.append(Record::new("2024-01-03", "TSLA", 200.0, 180.0, "", 0.0));
        App::new(store, Settings::default())
    }

    #[test]
    fn test_empty_journal_hint() {
        let app = App::new(RecordStore::new(), Settings::default());
        let text = screen_text(&draw(&app));
        assert!(text.contains("Investment Journal"));
        assert!(text.contains("No trades recorded"));
        assert!(text.contains("[a] Add"));
    }

    #[test]
    fn test_table_shows_formatted_rows() {
        let app = sample_app();
        let text = screen_text(&draw(&app));
        for column in ["Date", "Ticker", "Entry", "Stop Loss", "Notes", "Return (%)"] {
            assert!(text.contains(column), "missing column {}", column);
        }
        assert!(text.contains("12.50"));
        assert!(text.contains("290.00"));
        assert!(text.contains("-0.05"));
        assert!(text.contains("3 trades"));
    }

    #[test]
    fn test_return_cells_colored_by_sign() {
        let mut app = sample_app();
        app.settings.return_colors.neutral = Color::Blue;
        let terminal = draw(&app);
        assert_eq!(bg_of(&terminal, "-0.05"), Some(Color::Red));
        assert_eq!(bg_of(&terminal, "4.00"), Some(Color::Green));
        assert_eq!(bg_of(&terminal, " 0.00"), Some(Color::Blue));
    }

    #[test]
    fn test_selected_row_keeps_return_color() {
        let mut app = App::new(RecordStore::new(), Settings::default());
        let draft = RecordDraft {
            date: "2024-01-01".into(),
            ticker: "AAPL".into(),
            entry: "12.50".into(),
            stop_loss: "10.00".into(),
            notes: "test".into(),
            return_percentage: "-0.05".into(),
        };
        let change = JournalService::new(&mut app.store).add(&draft).unwrap();
        app.on_store_change(change);
        assert_eq!(app.selected_index, 0);

        let terminal = draw(&app);
        assert_eq!(bg_of(&terminal, "-0.05"), Some(Color::Red));
        // The rest of the selected row is still highlighted
        assert_eq!(bg_of(&terminal, "2024-01-01"), Some(Color::DarkGray));
    }

    #[test]
    fn test_add_dialog_drawn_over_table() {
        let mut app = sample_app();
        app.open_dialog(ActiveDialog::AddRecord);
        let text = screen_text(&draw(&app));
        assert!(text.contains("Add Trade"));
        assert!(text.contains("Stop Loss/Trailing Loss"));
        assert!(text.contains("[Enter] Save"));
    }

    #[test]
    fn test_notification_drawn() {
        let mut app = sample_app();
        app.request_sort();
        let text = screen_text(&draw(&app));
        assert!(text.contains("Sorting is not available"));
    }
}
