//! Display formatting for terminal output
//!
//! Plain-text renderers used by the CLI: the transaction table, the totals
//! summary and the credit-vs-debit chart.

pub mod expense;
pub mod format;
pub mod summary;

pub use expense::{format_expense_list, format_signed_amount};
pub use format::format_date;
pub use summary::{format_chart, format_summary};
