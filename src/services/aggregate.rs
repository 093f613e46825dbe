//! Expense aggregation
//!
//! Folds a snapshot of records into credit and debit totals. Amounts are
//! already numeric by the time they reach here (see `Money`'s decoder), so
//! the sums are exact and independent of record order.

use crate::models::{AmountType, ExpenseRecord, Money, Totals};

/// Sum amounts by type
pub fn aggregate<'a, I>(records: I) -> Totals
where
    I: IntoIterator<Item = &'a ExpenseRecord>,
{
    let mut total_credit = Money::zero();
    let mut total_debit = Money::zero();

    for record in records {
        match record.amount_type {
            AmountType::Credit => total_credit += record.amount,
            AmountType::Debit => total_debit += record.amount,
        }
    }

    Totals::new(total_credit, total_debit)
}
