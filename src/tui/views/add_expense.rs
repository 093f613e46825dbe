//! Add-expense screen
//!
//! Amount and description are free text; type and date are picked with
//! the arrow keys.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::display::format_date;
use crate::models::AmountType;
use crate::tui::app::{AddField, App};

/// Render the add-expense form
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Add Expense ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Type
            Constraint::Length(1), // Description
            Constraint::Length(1), // Date
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(&app.amount_input, chunks[0]);
    render_type(frame, app, chunks[1]);
    frame.render_widget(&app.description_input, chunks[2]);
    render_date(frame, app, chunks[3]);

    let hint = match app.focused_field {
        AddField::Amount | AddField::Description => "Type to edit, Tab for the next field",
        AddField::Type => "←/→ or Space to switch, c: credit, d: debit",
        AddField::Date => "↑/↓ to change the day, t: today",
    };
    let hint = if app.form.is_submitting() {
        "Saving..."
    } else {
        hint
    };
    frame.render_widget(
        Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
        chunks[5],
    );
}

fn label(text: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    Span::styled(format!("{:>12}: ", text), style)
}

fn render_type(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focused_field == AddField::Type;
    let selected = app.form.amount_type();

    let option = |amount_type: AmountType, color: Color| {
        let text = format!(" {} ", amount_type);
        if amount_type == selected {
            Span::styled(
                text,
                Style::default().fg(Color::Black).bg(color).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(text, Style::default().fg(Color::DarkGray))
        }
    };

    let line = Line::from(vec![
        label("Type", focused),
        option(AmountType::Credit, Color::Green),
        Span::raw(" "),
        option(AmountType::Debit, Color::Red),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_date(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focused_field == AddField::Date;
    let date = app.form.date();
    let value_style = if focused {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let mut spans = vec![
        label("Date", focused),
        Span::styled(format_date(date, &app.settings.date_format), value_style),
    ];
    if date == app.form.today() {
        spans.push(Span::styled(" (today)", Style::default().fg(Color::DarkGray)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
