//! Journal table view
//!
//! Shows every trade in insertion order, with the Return (%) cell colored by
//! sign. Rows are re-projected from the store on every draw.

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::{project, ReturnCategory, TableRow, COLUMNS, RETURN_COLUMN};
use crate::tui::app::App;

/// Columns holding numbers, right-aligned
const NUMERIC_COLUMNS: [usize; 3] = [2, 3, RETURN_COLUMN];

/// Render the header block
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Investment Journal ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let summary = match app.store.len() {
        1 => "1 trade".to_string(),
        n => format!("{} trades", n),
    };

    let paragraph = Paragraph::new(summary)
        .block(block)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(paragraph, area);
}

/// Render the journal table
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let rows = project(app.store.records());

    if rows.is_empty() {
        let text = Paragraph::new("No trades recorded. Press 'a' to add one.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(12), // Date
        Constraint::Length(8),  // Ticker
        Constraint::Length(10), // Entry
        Constraint::Length(10), // Stop Loss
        Constraint::Min(12),    // Notes
        Constraint::Length(11), // Return (%)
    ];

    let header = Row::new(
        COLUMNS
            .into_iter()
            .enumerate()
            .map(|(i, name)| Cell::from(aligned(name, i))),
    )
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
    .height(1);

    let selected = app.selected_index.min(rows.len() - 1);

    let body: Vec<Row> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| table_row(row, app, i == selected))
        .collect();

    // The highlight is patched over the whole row after the cells are drawn,
    // so it must not carry a background or the Return color is lost
    let table = Table::new(body, widths)
        .header(header)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(selected));

    frame.render_stateful_widget(table, area, &mut state);
}

fn table_row<'a>(row: &'a TableRow, app: &App, selected: bool) -> Row<'a> {
    let return_style = return_cell_style(row.return_category, app);

    let cells = Row::new(row.cells().into_iter().enumerate().map(|(i, text)| {
        let cell = Cell::from(aligned(text, i));
        if i == RETURN_COLUMN {
            cell.style(return_style)
        } else {
            cell
        }
    }));

    // Row style is drawn first; the Return cell's own style wins over it
    if selected {
        cells.style(Style::default().bg(Color::DarkGray))
    } else {
        cells
    }
}

fn return_cell_style(category: ReturnCategory, app: &App) -> Style {
    let bg = app.settings.return_colors.color_for(category);
    match category {
        ReturnCategory::Neutral => Style::default().bg(bg),
        _ => Style::default().bg(bg).fg(Color::Black),
    }
}

fn aligned(text: &str, column: usize) -> Line<'_> {
    let line = Line::from(text);
    if NUMERIC_COLUMNS.contains(&column) {
        line.alignment(Alignment::Right)
    } else {
        line
    }
}
