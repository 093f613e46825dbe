//! Expense Manager - track credits and debits against a remote expense API
//!
//! The library holds everything except process startup: the wire models,
//! the store client, the aggregation and screen controllers, and the CLI and
//! TUI shells that drive them.
//!
//! # Architecture
//!
//! - `models`: expense records, money and derived totals
//! - `api`: the `ExpenseStore` trait with HTTP and in-memory implementations
//! - `services`: pure aggregation over fetched records
//! - `controller`: summary and add-entry view-models
//! - `display`: plain-text renderers for the CLI
//! - `cli`, `tui`: hosting shells
//! - `config`, `logging`, `error`: ambient concerns
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_manager::api::HttpExpenseStore;
//! use expense_manager::config::{ExpensePaths, Settings};
//! use expense_manager::controller::SummaryController;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let store = HttpExpenseStore::from_settings(&settings)?;
//!
//! let mut summary = SummaryController::new();
//! summary.refresh(&store).await;
//! println!("Balance: {}", summary.balance());
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod tui;

pub use error::{ExpenseError, ExpenseResult};
