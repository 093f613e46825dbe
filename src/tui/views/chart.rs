//! Credit-vs-debit chart overlay

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Clear, Gauge, Paragraph},
    Frame,
};

use crate::display::format::format_percentage;
use crate::models::Money;
use crate::tui::app::App;
use crate::tui::layout::centered_rect;

/// Render the chart as a modal over the summary screen
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 60, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Credit vs Debit ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .title_bottom(Line::from(" c/Esc: close ").right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let totals = app.summary.totals();
    let Some(credit_share) = totals.credit_share() else {
        frame.render_widget(
            Paragraph::new("Nothing to chart yet.").style(Style::default().fg(Color::DarkGray)),
            inner,
        );
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(1)])
        .split(inner);

    let bars = [
        bar("Credit", totals.total_credit, credit_share, Color::Green),
        bar("Debit", totals.total_debit, 1.0 - credit_share, Color::Red),
    ];
    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(12)
        .bar_gap(4);
    frame.render_widget(chart, chunks[0]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Green).bg(Color::Red))
        .ratio(credit_share.clamp(0.0, 1.0))
        .label(format!(
            "{} credit / {} debit",
            app.money(totals.total_credit),
            app.money(totals.total_debit)
        ));
    frame.render_widget(gauge, chunks[1]);
}

fn bar(label: &'static str, amount: Money, share: f64, color: Color) -> Bar<'static> {
    Bar::default()
        .label(Line::from(label))
        .value(amount.cents().max(0) as u64)
        .text_value(format_percentage(share * 100.0))
        .style(Style::default().fg(color))
        .value_style(Style::default().fg(Color::Black).bg(color))
}
