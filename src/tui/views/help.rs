//! Help overlay
//!
//! Shows keyboard shortcuts for the current screen

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{App, Screen};
use crate::tui::layout::centered_rect;

/// Render the help overlay
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Keyboard Shortcuts ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(app.screen))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines(screen: Screen) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("Global"),
        Line::from(""),
        key_line("?", "Show/hide help"),
        key_line("Ctrl+c", "Quit from anywhere"),
        Line::from(""),
    ];

    match screen {
        Screen::Summary => {
            lines.push(heading("Summary"));
            lines.push(Line::from(""));
            lines.push(key_line("a", "Add an expense"));
            lines.push(key_line("r", "Refresh from the server"));
            lines.push(key_line("c", "Show/hide the chart"));
            lines.push(key_line("j/k", "Move selection down/up"));
            lines.push(key_line("g/G", "Go to top/bottom"));
            lines.push(key_line("q", "Quit"));
        }
        Screen::AddExpense => {
            lines.push(heading("Add Expense"));
            lines.push(Line::from(""));
            lines.push(key_line("Tab/S-Tab", "Next/previous field"));
            lines.push(key_line("←/→", "Switch credit/debit"));
            lines.push(key_line("↑/↓", "Change the date by a day"));
            lines.push(key_line("t", "Reset the date to today"));
            lines.push(key_line("Enter", "Save the expense"));
            lines.push(key_line("Esc", "Back to the summary"));
        }
    }

    lines
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default().add_modifier(Modifier::BOLD).fg(Color::Yellow),
    ))
}

fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}  ", key), Style::default().fg(Color::Cyan)),
        Span::raw(description),
    ])
}
