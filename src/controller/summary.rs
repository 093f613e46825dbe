//! Summary screen view-model
//!
//! Holds the last fetched snapshot, its totals and the chart toggle. The
//! hosting shell calls [`SummaryController::refresh`] (or the split
//! `begin_refresh`/`apply_fetch` pair when the request runs elsewhere)
//! every time the summary view becomes active again.
//!
//! Fetch cycle: `Idle -> Loading -> Loaded | Errored`. A failed fetch keeps
//! the previous snapshot and totals on display.

use crate::api::ExpenseStore;
use crate::error::ExpenseResult;
use crate::models::{ExpenseRecord, Money, Totals};
use crate::services::aggregate;

/// Where the controller is in its fetch cycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Loaded,
    /// Last fetch failed; holds the user-facing reason
    Errored(String),
}

/// Identifies one refresh so late results can be recognised
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(u64);

/// View-model behind the summary screen
#[derive(Debug, Default)]
pub struct SummaryController {
    state: FetchState,
    expenses: Vec<ExpenseRecord>,
    totals: Totals,
    chart_visible: bool,
    /// Newest ticket handed out
    issued: u64,
    /// Newest ticket whose result was applied
    applied: u64,
}

impl SummaryController {
    /// Create a controller with no snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Current fetch state
    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// Check if a refresh is in flight
    pub fn is_loading(&self) -> bool {
        self.state == FetchState::Loading
    }

    /// Last successfully fetched records, in server order
    pub fn expenses(&self) -> &[ExpenseRecord] {
        &self.expenses
    }

    /// Totals of the last successful fetch
    pub fn totals(&self) -> Totals {
        self.totals
    }

    /// Balance of the last successful fetch
    pub fn balance(&self) -> Money {
        self.totals.balance()
    }

    /// Enter `Loading` and hand out a ticket for the result
    pub fn begin_refresh(&mut self) -> FetchTicket {
        self.issued += 1;
        self.state = FetchState::Loading;
        FetchTicket(self.issued)
    }

    /// Apply the outcome of the refresh identified by `ticket`
    ///
    /// Returns `false` when the result was dropped because a newer refresh
    /// already landed.
    pub fn apply_fetch(
        &mut self,
        ticket: FetchTicket,
        result: ExpenseResult<Vec<ExpenseRecord>>,
    ) -> bool {
        if ticket.0 < self.applied {
            log::debug!(
                "Dropping stale expense fetch #{} (newest applied #{})",
                ticket.0,
                self.applied
            );
            return false;
        }
        self.applied = ticket.0;
        let latest = ticket.0 == self.issued;

        match result {
            Ok(records) => {
                self.totals = aggregate(&records);
                self.expenses = records;
                log::debug!(
                    "Loaded {} expenses (credit {}, debit {})",
                    self.expenses.len(),
                    self.totals.total_credit,
                    self.totals.total_debit
                );
                if latest {
                    self.state = FetchState::Loaded;
                }
            }
            Err(err) => {
                log::error!("Error fetching expenses: {}", err);
                if latest {
                    self.state = FetchState::Errored(err.message().to_string());
                }
            }
        }
        true
    }

    /// Fetch from `store` and apply the result
    pub async fn refresh<S>(&mut self, store: &S) -> &FetchState
    where
        S: ExpenseStore + ?Sized,
    {
        let ticket = self.begin_refresh();
        let result = store.list_expenses().await;
        self.apply_fetch(ticket, result);
        &self.state
    }

    /// Whether the chart overlay is shown
    pub fn chart_visible(&self) -> bool {
        self.chart_visible
    }

    pub fn show_chart(&mut self) {
        self.chart_visible = true;
    }

    pub fn hide_chart(&mut self) {
        self.chart_visible = false;
    }

    pub fn toggle_chart(&mut self) {
        self.chart_visible = !self.chart_visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MemoryExpenseStore;
    use crate::error::ExpenseError;
    use crate::models::AmountType;

    fn record(id: i64, units: i64, amount_type: AmountType) -> ExpenseRecord {
        ExpenseRecord::new(id, Money::from_units(units), amount_type)
    }

    #[tokio::test]
    async fn test_refresh_loads_and_totals() {
        let store = MemoryExpenseStore::with_records(vec![
            record(1, 200, AmountType::Credit),
            record(2, 50, AmountType::Debit),
        ]);
        let mut controller = SummaryController::new();
        assert_eq!(controller.state(), &FetchState::Idle);

        let state = controller.refresh(&store).await.clone();

        assert_eq!(state, FetchState::Loaded);
        assert_eq!(controller.expenses().len(), 2);
        assert_eq!(
            controller.totals(),
            Totals::new(Money::from_units(200), Money::from_units(50))
        );
        assert_eq!(controller.balance(), Money::from_units(150));
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_snapshot() {
        let store = MemoryExpenseStore::with_records(vec![record(1, 100, AmountType::Credit)]);
        let mut controller = SummaryController::new();
        controller.refresh(&store).await;
        let before = controller.totals();

        store.set_failing(true);
        let state = controller.refresh(&store).await.clone();

        assert!(matches!(state, FetchState::Errored(_)));
        assert_eq!(controller.totals(), before);
        assert_eq!(
            controller.totals(),
            Totals::new(Money::from_units(100), Money::zero())
        );
        assert_eq!(controller.expenses().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_first_refresh_leaves_empty() {
        let store = MemoryExpenseStore::new();
        store.set_failing(true);
        let mut controller = SummaryController::new();

        controller.refresh(&store).await;

        assert!(matches!(controller.state(), FetchState::Errored(_)));
        assert!(controller.expenses().is_empty());
        assert_eq!(controller.totals(), Totals::default());
    }

    #[tokio::test]
    async fn test_refetching_unchanged_collection_is_stable() {
        let store = MemoryExpenseStore::with_records(vec![
            record(1, 30, AmountType::Credit),
            record(2, 12, AmountType::Debit),
        ]);
        let mut controller = SummaryController::new();

        controller.refresh(&store).await;
        let first = controller.totals();
        controller.refresh(&store).await;

        assert_eq!(controller.totals(), first);
        assert_eq!(store.list_calls(), 2);
    }

    #[test]
    fn test_begin_refresh_enters_loading_from_any_state() {
        let mut controller = SummaryController::new();
        let t1 = controller.begin_refresh();
        assert!(controller.is_loading());
        controller.apply_fetch(t1, Err(ExpenseError::Transport("down".into())));
        assert_eq!(controller.state(), &FetchState::Errored("down".into()));

        controller.begin_refresh();
        assert!(controller.is_loading());
    }

    #[test]
    fn test_stale_result_is_dropped() {
        let mut controller = SummaryController::new();
        let old = controller.begin_refresh();
        let new = controller.begin_refresh();

        assert!(controller.apply_fetch(new, Ok(vec![record(1, 10, AmountType::Credit)])));
        assert_eq!(controller.state(), &FetchState::Loaded);

        assert!(!controller.apply_fetch(old, Ok(vec![])));
        assert_eq!(controller.expenses().len(), 1);
        assert_eq!(controller.state(), &FetchState::Loaded);
    }

    #[test]
    fn test_older_result_arriving_first_is_applied_but_keeps_loading() {
        let mut controller = SummaryController::new();
        let old = controller.begin_refresh();
        let new = controller.begin_refresh();

        assert!(controller.apply_fetch(old, Ok(vec![record(1, 10, AmountType::Credit)])));
        assert!(controller.is_loading());
        assert_eq!(controller.expenses().len(), 1);

        assert!(controller.apply_fetch(new, Ok(vec![])));
        assert_eq!(controller.state(), &FetchState::Loaded);
        assert!(controller.expenses().is_empty());
    }

    #[test]
    fn test_chart_toggle_is_independent_of_fetch() {
        let mut controller = SummaryController::new();
        assert!(!controller.chart_visible());
        controller.toggle_chart();
        assert!(controller.chart_visible());

        let ticket = controller.begin_refresh();
        controller.apply_fetch(ticket, Err(ExpenseError::Transport("x".into())));
        assert!(controller.chart_visible());

        controller.hide_chart();
        assert!(!controller.chart_visible());
        controller.show_chart();
        assert!(controller.chart_visible());
    }
}
