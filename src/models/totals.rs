//! Derived credit/debit totals
//!
//! Totals are recomputed from a fetched snapshot and never stored remotely.

use std::fmt;

use super::money::Money;

/// Whether the balance is in the black or the red
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standing {
    /// Balance is zero or positive
    Surplus,
    /// Balance is negative
    Deficit,
}

impl fmt::Display for Standing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Surplus => write!(f, "Surplus"),
            Self::Deficit => write!(f, "Deficit"),
        }
    }
}

/// Sum of credits and debits over a set of records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub total_credit: Money,
    pub total_debit: Money,
}

impl Totals {
    /// Create totals from explicit sums
    pub const fn new(total_credit: Money, total_debit: Money) -> Self {
        Self {
            total_credit,
            total_debit,
        }
    }

    /// Credit minus debit; may be negative
    pub fn balance(&self) -> Money {
        self.total_credit - self.total_debit
    }

    /// Surplus for a non-negative balance, deficit otherwise
    pub fn standing(&self) -> Standing {
        if self.balance().is_negative() {
            Standing::Deficit
        } else {
            Standing::Surplus
        }
    }

    /// Check if the balance is negative
    pub fn is_deficit(&self) -> bool {
        self.standing() == Standing::Deficit
    }

    /// Fraction of the combined total that is credit, for the chart
    ///
    /// `None` when there is nothing to chart.
    pub fn credit_share(&self) -> Option<f64> {
        let credit = self.total_credit.to_f64().max(0.0);
        let debit = self.total_debit.to_f64().max(0.0);
        let combined = credit + debit;
        if combined <= 0.0 {
            None
        } else {
            Some(credit / combined)
        }
    }
}
