//! CLI command handlers
//!
//! Bridges the clap argument parsing with the store and the screen
//! controllers.

pub mod expense;

pub use expense::{handle_add, handle_list, handle_summary, AddArgs};
