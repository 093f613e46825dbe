//! Layout definitions for the TUI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions shared by both screens
pub struct AppLayout {
    /// Title bar
    pub header: Rect,
    /// Screen content
    pub main: Rect,
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
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            header: chunks[0],
            main: chunks[1],
            status_bar: chunks[2],
        }
    }
}

/// Layout of the summary screen
pub struct SummaryLayout {
    /// Credit, debit and balance
    pub totals: Rect,
    /// Transaction list
    pub transactions: Rect,
}

impl SummaryLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Totals
                Constraint::Min(3),    // Transactions
            ])
            .split(area);

        Self {
            totals: chunks[0],
            transactions: chunks[1],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Area for a toast in the top-right corner
pub fn toast_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(r.x + r.width - width, r.y, width, height)
}
