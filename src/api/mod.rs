//! Remote store client
//!
//! The expense collection lives behind two HTTP endpoints. `ExpenseStore`
//! is the seam the controllers talk to; `HttpExpenseStore` is the real
//! client and `MemoryExpenseStore` an in-process stand-in.

use async_trait::async_trait;

use crate::error::ExpenseResult;
use crate::models::{ExpenseDraft, ExpenseRecord};

pub mod http;
pub mod memory;

pub use http::HttpExpenseStore;
pub use memory::MemoryExpenseStore;

/// Read and create access to the remote expense collection
///
/// Implementations hold no expense state of their own. Both operations fail
/// with `ExpenseError::Transport` on network, status or body errors.
#[async_trait]
pub trait ExpenseStore: Send + Sync {
    /// Fetch the full current collection, in server order
    async fn list_expenses(&self) -> ExpenseResult<Vec<ExpenseRecord>>;

    /// Persist a new record and return it with its assigned id
    async fn create_expense(&self, draft: &ExpenseDraft) -> ExpenseResult<ExpenseRecord>;
}
