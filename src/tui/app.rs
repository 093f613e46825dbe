//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Store requests are spawned on the tokio runtime and their results come
//! back as [`Event`]s through `sender`.

use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;

use crate::api::ExpenseStore;
use crate::config::Settings;
use crate::controller::{AddExpenseForm, FetchState, FetchTicket, SummaryController};
use crate::error::ExpenseResult;
use crate::models::{ExpenseRecord, Money};

use super::event::Event;
use super::widgets::{Notification, NotificationQueue, TextInput};

/// Which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Summary,
    AddExpense,
}

/// Which field of the add-expense form has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddField {
    #[default]
    Amount,
    Type,
    Description,
    Date,
}

impl AddField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Amount => Self::Type,
            Self::Type => Self::Description,
            Self::Description => Self::Date,
            Self::Date => Self::Amount,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Amount => Self::Date,
            Self::Type => Self::Amount,
            Self::Description => Self::Type,
            Self::Date => Self::Description,
        }
    }
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    store: Arc<dyn ExpenseStore>,
    runtime: Handle,
    sender: mpsc::Sender<Event>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active screen
    pub screen: Screen,

    /// Whether the help overlay is shown
    pub show_help: bool,

    /// Summary screen view-model
    pub summary: SummaryController,

    /// Selected row in the transaction list
    pub selected_index: usize,

    /// Add-expense form state
    pub form: AddExpenseForm,
    pub amount_input: TextInput,
    pub description_input: TextInput,
    pub focused_field: AddField,

    /// Pending toast notifications
    pub notifications: NotificationQueue,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(
        settings: &'a Settings,
        store: Arc<dyn ExpenseStore>,
        runtime: Handle,
        sender: mpsc::Sender<Event>,
    ) -> Self {
        let mut app = Self {
            settings,
            store,
            runtime,
            sender,
            should_quit: false,
            screen: Screen::Summary,
            show_help: false,
            summary: SummaryController::new(),
            selected_index: 0,
            form: AddExpenseForm::new(),
            amount_input: TextInput::new().label("Amount").placeholder("0.00"),
            description_input: TextInput::new()
                .label("Description")
                .placeholder("Optional note"),
            focused_field: AddField::Amount,
            notifications: NotificationQueue::new(),
        };
        app.sync_focus();
        app
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Show a toast for the configured duration
    pub fn notify(&mut self, notification: Notification) {
        let duration = Duration::from_secs(self.settings.notification_secs);
        self.notifications.push(notification.with_duration(duration));
    }

    /// Switch screens; entering the summary re-fetches
    pub fn switch_screen(&mut self, screen: Screen) {
        self.screen = screen;
        self.show_help = false;
        match screen {
            Screen::Summary => {
                self.request_refresh();
            }
            Screen::AddExpense => {
                self.focused_field = AddField::Amount;
                self.sync_focus();
            }
        }
    }

    /// Start a list request in the background
    pub fn request_refresh(&mut self) -> FetchTicket {
        let ticket = self.summary.begin_refresh();
        let store = Arc::clone(&self.store);
        let sender = self.sender.clone();
        self.runtime.spawn(async move {
            let result = store.list_expenses().await;
            if sender.send(Event::ExpensesLoaded(ticket, result)).is_err() {
                log::debug!("UI closed before expense fetch finished");
            }
        });
        ticket
    }

    /// Apply a finished list request
    pub fn on_expenses_loaded(
        &mut self,
        ticket: FetchTicket,
        result: ExpenseResult<Vec<ExpenseRecord>>,
    ) {
        if !self.summary.apply_fetch(ticket, result) {
            return;
        }
        let count = self.summary.expenses().len();
        self.selected_index = self.selected_index.min(count.saturating_sub(1));

        if let FetchState::Errored(reason) = self.summary.state().clone() {
            let message = format!("Failed to load expenses: {}", reason);
            self.notify(Notification::error(message));
        }
    }

    /// Validate the form and start a create request in the background
    pub fn submit_expense(&mut self) {
        self.form.set_amount(self.amount_input.value());
        self.form.set_description(self.description_input.value());

        match self.form.begin_submit() {
            Ok(draft) => {
                let store = Arc::clone(&self.store);
                let sender = self.sender.clone();
                self.runtime.spawn(async move {
                    let result = store.create_expense(&draft).await;
                    if sender.send(Event::ExpenseCreated(result)).is_err() {
                        log::debug!("UI closed before expense was created");
                    }
                });
            }
            Err(_) => self.flush_form_notice(),
        }
    }

    /// Apply a finished create request
    pub fn on_expense_created(&mut self, result: ExpenseResult<ExpenseRecord>) {
        if self.form.finish_submit(result).is_ok() {
            self.amount_input.clear();
            self.description_input.clear();
            self.focused_field = AddField::Amount;
            self.sync_focus();
        }
        self.flush_form_notice();
    }

    fn flush_form_notice(&mut self) {
        if let Some(notice) = self.form.take_notice() {
            self.notify(notice.into());
        }
    }

    /// Move focus within the add-expense form
    pub fn focus_field(&mut self, field: AddField) {
        self.focused_field = field;
        self.sync_focus();
    }

    fn sync_focus(&mut self) {
        self.amount_input.focused = self.focused_field == AddField::Amount;
        self.description_input.focused = self.focused_field == AddField::Description;
    }

    /// The focused text input, if the focused field is free text
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            AddField::Amount => Some(&mut self.amount_input),
            AddField::Description => Some(&mut self.description_input),
            AddField::Type | AddField::Date => None,
        }
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let count = self.summary.expenses().len();
        if self.selected_index + 1 < count {
            self.selected_index += 1;
        }
    }

    /// Format an amount with the configured currency symbol
    pub fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.settings.currency_symbol)
    }
}
