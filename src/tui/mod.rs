//! Terminal User Interface module
//!
//! Two screens, summary and add-expense, drawn with ratatui. The chart and
//! help are overlays on top of them.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
