//! Core data models for the expense manager
//!
//! This module contains the data structures of the expense domain: the
//! records fetched from the remote store, the drafts sent to it, and the
//! derived totals.

pub mod expense;
pub mod ids;
pub mod money;
pub mod totals;

pub use expense::{AmountType, ExpenseDraft, ExpenseRecord};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
pub use totals::{Standing, Totals};
