//! Summary screen
//!
//! Totals at the top, every fetched record below in server order.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::controller::FetchState;
use crate::display::{format_date, format_signed_amount};
use crate::models::Standing;
use crate::tui::app::App;
use crate::tui::layout::SummaryLayout;

/// Render the summary screen
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = SummaryLayout::new(area);
    render_totals(frame, app, layout.totals);
    render_transactions(frame, app, layout.transactions);
}

fn render_totals(frame: &mut Frame, app: &App, area: Rect) {
    let totals = app.summary.totals();
    let standing = totals.standing();
    let balance_color = match standing {
        Standing::Surplus => Color::Green,
        Standing::Deficit => Color::Red,
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Total Credit: ", Style::default().fg(Color::White)),
            Span::styled(app.money(totals.total_credit), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::styled("Total Debit:  ", Style::default().fg(Color::White)),
            Span::styled(app.money(totals.total_debit), Style::default().fg(Color::Red)),
        ]),
        Line::from(vec![
            Span::styled("Balance:      ", Style::default().fg(Color::White)),
            Span::styled(
                app.money(totals.balance()),
                Style::default().fg(balance_color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" ({})", standing), Style::default().fg(balance_color)),
        ]),
    ];

    let block = Block::default()
        .title(" Totals ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_transactions(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Transactions ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let expenses = app.summary.expenses();
    if expenses.is_empty() {
        let text = match app.summary.state() {
            FetchState::Idle | FetchState::Loading => "Loading transactions...",
            _ => "No transactions. Press 'a' to add one.",
        };
        let paragraph = Paragraph::new(text)
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(paragraph, area);
        return;
    }

    let symbol = &app.settings.currency_symbol;
    let date_format = &app.settings.date_format;

    let header = Row::new(vec![
        Cell::from("Date"),
        Cell::from("Description"),
        Cell::from("Type"),
        Cell::from("Amount"),
    ])
    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    .height(1);

    let rows: Vec<Row> = expenses
        .iter()
        .map(|record| {
            let color = if record.is_credit() {
                Color::Green
            } else {
                Color::Red
            };
            let date = record
                .date
                .map(|d| format_date(d, date_format))
                .unwrap_or_else(|| "-".to_string());
            let description = record
                .description_text()
                .unwrap_or("No description")
                .to_string();

            Row::new(vec![
                Cell::from(date),
                Cell::from(description),
                Cell::from(record.amount_type.to_string()),
                Cell::from(format_signed_amount(record, symbol)).style(Style::default().fg(color)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Min(20),
        Constraint::Length(8),
        Constraint::Length(16),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut state = TableState::default().with_selected(Some(app.selected_index));
    frame.render_stateful_widget(table, area, &mut state);
}
