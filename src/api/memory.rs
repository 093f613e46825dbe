//! In-memory expense store
//!
//! Behaves like the remote store (sequential ids, server order preserved)
//! without any I/O. Used by `--offline` runs and by tests, which can also
//! flip it into a failing mode and count the calls it received.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

use super::ExpenseStore;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseDraft, ExpenseRecord};

#[derive(Debug, Default)]
struct Inner {
    records: Vec<ExpenseRecord>,
    next_id: i64,
}

/// Expense store kept in process memory
#[derive(Debug, Default)]
pub struct MemoryExpenseStore {
    inner: Mutex<Inner>,
    failing: AtomicBool,
    list_calls: AtomicUsize,
    create_calls: AtomicUsize,
}

impl MemoryExpenseStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `records`; new ids continue after the largest one
    pub fn with_records(records: Vec<ExpenseRecord>) -> Self {
        let next_id = records.iter().map(|r| r.id.get()).max().unwrap_or(0);
        Self {
            inner: Mutex::new(Inner { records, next_id }),
            ..Self::default()
        }
    }

    /// Make every subsequent call fail (or succeed again) with a transport error
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of list requests received
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    /// Number of create requests received
    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    /// Copy of the stored records
    pub fn records(&self) -> Vec<ExpenseRecord> {
        self.lock().records.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn check_available(&self) -> ExpenseResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            Err(ExpenseError::Transport("Expense store unavailable".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ExpenseStore for MemoryExpenseStore {
    async fn list_expenses(&self) -> ExpenseResult<Vec<ExpenseRecord>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;
        Ok(self.records())
    }

    async fn create_expense(&self, draft: &ExpenseDraft) -> ExpenseResult<ExpenseRecord> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;

        let mut inner = self.lock();
        inner.next_id += 1;
        let record = draft.clone().into_record(inner.next_id);
        inner.records.push(record.clone());
        Ok(record)
    }
}
