//! Event handling for the TUI
//!
//! Terminal input is polled on a dedicated thread. Store requests run on the
//! tokio runtime and report back through the same channel, so the UI thread
//! applies every change in arrival order.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crate::controller::FetchTicket;
use crate::error::ExpenseResult;
use crate::models::ExpenseRecord;

/// Events consumed by the UI loop
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
    /// A list request finished
    ExpensesLoaded(FetchTicket, ExpenseResult<Vec<ExpenseRecord>>),
    /// A create request finished
    ExpenseCreated(ExpenseResult<ExpenseRecord>),
}

/// Event handler for terminal events
pub struct EventHandler {
    sender: mpsc::Sender<Event>,
    receiver: mpsc::Receiver<Event>,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();
        let input_sender = sender.clone();
        thread::spawn(move || poll_terminal(input_sender, tick_rate));

        Self { sender, receiver }
    }

    /// A sender for background tasks to report through
    pub fn sender(&self) -> mpsc::Sender<Event> {
        self.sender.clone()
    }

    /// Get the next event (blocking)
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.receiver.recv()
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}

fn poll_terminal(sender: mpsc::Sender<Event>, tick_rate: Duration) {
    let mut last_tick = Instant::now();
    loop {
        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        match event::poll(timeout) {
            Ok(true) => {
                let forwarded = match event::read() {
                    Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                        Some(Event::Key(key))
                    }
                    Ok(CrosstermEvent::Resize(width, height)) => Some(Event::Resize(width, height)),
                    Ok(_) => None,
                    Err(e) => {
                        log::error!("Failed to read terminal event: {}", e);
                        return;
                    }
                };
                if let Some(event) = forwarded {
                    if sender.send(event).is_err() {
                        return;
                    }
                }
            }
            Ok(false) => {}
            Err(e) => {
                log::error!("Failed to poll terminal events: {}", e);
                return;
            }
        }

        if last_tick.elapsed() >= tick_rate {
            if sender.send(Event::Tick).is_err() {
                return;
            }
            last_tick = Instant::now();
        }
    }
}
