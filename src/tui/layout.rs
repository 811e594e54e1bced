//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: header, journal table, button bar,
//! status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Title and hints
    pub header: Rect,
    /// Journal table
    pub table: Rect,
    /// Sort / Add / Quit buttons
    pub buttons: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(3),    // Table
                Constraint::Length(3), // Buttons
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            header: chunks[0],
            table: chunks[1],
            buttons: chunks[2],
            status_bar: chunks[3],
        }
    }
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_regions() {
        let layout = AppLayout::new(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.buttons.height, 3);
        assert_eq!(layout.status_bar, Rect::new(0, 23, 80, 1));
        assert_eq!(layout.table.height, 17);
    }

    #[test]
    fn test_centered_rect_fixed() {
        let r = centered_rect_fixed(20, 10, Rect::new(0, 0, 100, 50));
        assert_eq!(r, Rect::new(40, 20, 20, 10));

        let clipped = centered_rect_fixed(200, 10, Rect::new(0, 0, 100, 50));
        assert_eq!(clipped.width, 100);
        assert_eq!(clipped.x, 0);
    }
}
