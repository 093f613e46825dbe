//! Event handler for the TUI
//!
//! Routes keyboard events to the active screen and applies the results of
//! background store requests.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{AddField, App, Screen};
use super::event::Event;
use super::widgets::TextInput;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => app.notifications.remove_expired(),
        Event::Resize(_, _) => {}
        Event::ExpensesLoaded(ticket, result) => app.on_expenses_loaded(ticket, result),
        Event::ExpenseCreated(result) => app.on_expense_created(result),
    }
    Ok(())
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    if app.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    match app.screen {
        Screen::Summary => handle_summary_key(app, key),
        Screen::AddExpense => handle_add_key(app, key),
    }
}

/// Keys on the summary screen
fn handle_summary_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('a') | KeyCode::Char('n') => app.switch_screen(Screen::AddExpense),
        KeyCode::Char('r') => {
            app.request_refresh();
        }
        KeyCode::Char('c') => app.summary.toggle_chart(),
        KeyCode::Esc => app.summary.hide_chart(),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.selected_index = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.selected_index = app.summary.expenses().len().saturating_sub(1);
        }
        _ => {}
    }
}

/// Keys on the add-expense screen
fn handle_add_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.switch_screen(Screen::Summary);
            return;
        }
        KeyCode::Enter => {
            app.submit_expense();
            return;
        }
        KeyCode::Tab => {
            app.focus_field(app.focused_field.next());
            return;
        }
        KeyCode::BackTab => {
            app.focus_field(app.focused_field.prev());
            return;
        }
        // Up/Down step the date while it has focus
        KeyCode::Down if app.focused_field != AddField::Date => {
            app.focus_field(app.focused_field.next());
            return;
        }
        KeyCode::Up if app.focused_field != AddField::Date => {
            app.focus_field(app.focused_field.prev());
            return;
        }
        _ => {}
    }

    match app.focused_field {
        AddField::Amount | AddField::Description => {
            if let Some(input) = app.focused_input() {
                edit_text(input, key);
            }
        }
        AddField::Type => match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => app.form.toggle_type(),
            KeyCode::Char('c') | KeyCode::Char('C') => app.form.select_credit(),
            KeyCode::Char('d') | KeyCode::Char('D') => app.form.select_debit(),
            _ => {}
        },
        AddField::Date => match key.code {
            KeyCode::Up | KeyCode::Right | KeyCode::Char('+') => app.form.next_day(),
            KeyCode::Down | KeyCode::Left | KeyCode::Char('-') => app.form.prev_day(),
            KeyCode::Char('t') | KeyCode::Char('T') => app.form.reset_date(),
            _ => {}
        },
    }
}

fn edit_text(input: &mut TextInput, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}
