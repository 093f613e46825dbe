//! TUI Views module
//!
//! The summary and add-expense screens plus the chart and help overlays.

pub mod add_expense;
pub mod chart;
pub mod help;
pub mod status_bar;
pub mod summary;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::{App, Screen};
use super::layout::{toast_rect, AppLayout};
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    render_header(frame, app, layout.header);

    match app.screen {
        Screen::Summary => summary::render(frame, app, layout.main),
        Screen::AddExpense => add_expense::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    if app.screen == Screen::Summary && app.summary.chart_visible() {
        chart::render(frame, app);
    }

    if app.show_help {
        help::render(frame, app);
    }

    if let Some(notification) = app.notifications.current() {
        let area = toast_rect(40, 4, frame.area());
        frame.render_widget(NotificationWidget::new(notification), area);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let screen = match app.screen {
        Screen::Summary => "Summary",
        Screen::AddExpense => "Add Expense",
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let title = Line::from(vec![
        Span::styled(
            " Expense Manager ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("│ "),
        Span::styled(screen, Style::default().fg(Color::White)),
    ]);

    frame.render_widget(Paragraph::new(title).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MemoryExpenseStore;
    use crate::config::Settings;
    use crate::models::{AmountType, ExpenseRecord, Money};
    use crate::tui::widgets::Notification;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::{mpsc, Arc};
    use std::time::Duration;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn loaded_app<'a>(
        settings: &'a Settings,
        runtime: &tokio::runtime::Runtime,
        records: Vec<ExpenseRecord>,
    ) -> App<'a> {
        let (sender, receiver) = mpsc::channel();
        let mut app = App::new(
            settings,
            Arc::new(MemoryExpenseStore::with_records(records)),
            runtime.handle().clone(),
            sender,
        );
        app.request_refresh();
        match receiver.recv_timeout(Duration::from_secs(5)).unwrap() {
            crate::tui::event::Event::ExpensesLoaded(ticket, result) => {
                app.on_expenses_loaded(ticket, result)
            }
            other => panic!("unexpected event {:?}", other),
        }
        app
    }

    fn draw(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        screen_text(&terminal)
    }

    #[test]
    fn test_summary_screen_renders_totals_and_rows() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let settings = Settings::default();
        let mut app = loaded_app(
            &settings,
            &runtime,
            vec![
                ExpenseRecord::new(1, Money::from_units(100), AmountType::Credit)
                    .with_description("Salary"),
                ExpenseRecord::new(2, Money::from_units(150), AmountType::Debit),
            ],
        );

        let text = draw(&mut app);

        assert!(text.contains("Expense Manager"));
        assert!(text.contains("₹100.00"));
        assert!(text.contains("₹150.00"));
        assert!(text.contains("-₹50.00"));
        assert!(text.contains("Deficit"));
        assert!(text.contains("Salary"));
        assert!(text.contains("No description"));
    }

    #[test]
    fn test_chart_overlay_and_help() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let settings = Settings::default();
        let mut app = loaded_app(
            &settings,
            &runtime,
            vec![
                ExpenseRecord::new(1, Money::from_units(200), AmountType::Credit),
                ExpenseRecord::new(2, Money::from_units(50), AmountType::Debit),
            ],
        );

        app.summary.show_chart();
        let text = draw(&mut app);
        assert!(text.contains("Credit vs Debit"));
        assert!(text.contains("₹200.00 credit / ₹50.00 debit"));

        app.show_help = true;
        let text = draw(&mut app);
        assert!(text.contains("Keyboard Shortcuts"));
    }

    #[test]
    fn test_add_screen_and_toast() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let settings = Settings::default();
        let mut app = loaded_app(&settings, &runtime, Vec::new());

        app.screen = crate::tui::app::Screen::AddExpense;
        app.notify(Notification::error("Please enter an amount"));
        let text = draw(&mut app);

        assert!(text.contains("Amount"));
        assert!(text.contains("Credit"));
        assert!(text.contains("Please enter an amount"));
    }
}
