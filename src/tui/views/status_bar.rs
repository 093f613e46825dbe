//! Status bar view
//!
//! Shows the fetch state and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::controller::FetchState;
use crate::tui::app::{App, Screen};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let (status, color) = match app.summary.state() {
        FetchState::Idle => ("Idle".to_string(), Color::DarkGray),
        FetchState::Loading => ("Loading...".to_string(), Color::Yellow),
        FetchState::Loaded => (
            format!("{} transaction(s)", app.summary.expenses().len()),
            Color::Green,
        ),
        FetchState::Errored(reason) => (format!("Error: {}", reason), Color::Red),
    };

    let status = if app.form.is_submitting() {
        format!("{} │ Saving...", status)
    } else {
        status
    };

    let hints = match app.screen {
        Screen::Summary => " a:Add  r:Refresh  c:Chart  ?:Help  q:Quit ",
        Screen::AddExpense => " Tab:Next  Enter:Save  Esc:Back ",
    };

    let left = format!(" {}", status);
    let padding = (area.width as usize)
        .saturating_sub(left.chars().count() + hints.len())
        .max(1);

    let line = Line::from(vec![
        Span::styled(left, Style::default().fg(color)),
        Span::raw(" ".repeat(padding)),
        Span::styled(hints, Style::default().fg(Color::White)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
