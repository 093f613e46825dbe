//! Terminal setup and teardown
//!
//! Initializes and restores the terminal state, including a panic hook that
//! restores the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::sync::Arc;
use tokio::runtime::Handle;

use crate::api::ExpenseStore;
use crate::config::Settings;
use crate::error::ExpenseError;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI until the user quits
///
/// Store requests are spawned on `runtime`; this thread only draws and
/// handles events.
pub fn run_tui(settings: &Settings, store: Arc<dyn ExpenseStore>, runtime: Handle) -> Result<()> {
    let mut terminal = init_terminal()?;
    let events = EventHandler::default();
    let mut app = App::new(settings, store, runtime, events.sender());

    log::info!("Starting TUI");
    app.request_refresh();

    let result = event_loop(&mut terminal, &mut app, &events);

    restore_terminal()?;
    result
}

fn event_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    loop {
        terminal.draw(|frame| super::views::render(frame, app))?;

        let event = events
            .next()
            .map_err(|_| ExpenseError::Tui("Event channel closed".into()))?;
        handle_event(app, event)?;

        if app.should_quit {
            return Ok(());
        }
    }
}
