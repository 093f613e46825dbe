//! Add-entry form controller
//!
//! Holds the raw field values of the "add expense" form, validates them into
//! a draft and drives the create request. Successful submits reset the form
//! to its defaults; failed ones leave every field as the user typed it.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

use super::Notice;
use crate::api::ExpenseStore;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{AmountType, ExpenseDraft, ExpenseRecord, Money, MoneyParseError};

const AMOUNT_REQUIRED: &str = "Please enter an amount";
const ADDED: &str = "Expense added successfully!";
const ADD_FAILED: &str = "Failed to add expense";

/// State of the add-expense form
#[derive(Debug, Clone)]
pub struct AddExpenseForm {
    amount: String,
    amount_type: AmountType,
    description: String,
    date: NaiveDate,
    today: NaiveDate,
    submitting: bool,
    notice: Option<Notice>,
}

impl Default for AddExpenseForm {
    fn default() -> Self {
        Self::new()
    }
}

impl AddExpenseForm {
    /// Create an empty form dated today (local time)
    pub fn new() -> Self {
        Self::with_today(Local::now().date_naive())
    }

    /// Create an empty form with an explicit notion of "today"
    pub fn with_today(today: NaiveDate) -> Self {
        Self {
            amount: String::new(),
            amount_type: AmountType::Credit,
            description: String::new(),
            date: today,
            today,
            submitting: false,
            notice: None,
        }
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn amount_type(&self) -> AmountType {
        self.amount_type
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Check if a create request is in flight
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_amount(&mut self, amount: impl Into<String>) {
        self.amount = amount.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_amount_type(&mut self, amount_type: AmountType) {
        self.amount_type = amount_type;
    }

    pub fn select_credit(&mut self) {
        self.amount_type = AmountType::Credit;
    }

    pub fn select_debit(&mut self) {
        self.amount_type = AmountType::Debit;
    }

    pub fn toggle_type(&mut self) {
        self.amount_type = self.amount_type.toggled();
    }

    /// Set the date from a picked date-time, keeping only the date part
    pub fn set_date_time(&mut self, picked: NaiveDateTime) {
        self.date = picked.date();
    }

    /// Set the date from text: `YYYY-MM-DD` or an RFC 3339 timestamp
    pub fn set_date_str(&mut self, text: &str) -> ExpenseResult<()> {
        let text = text.trim();
        let date = NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(text).ok().map(|ts| ts.date_naive()))
            .ok_or_else(|| {
                ExpenseError::Validation(format!(
                    "Invalid date format: '{}'. Use YYYY-MM-DD",
                    text
                ))
            })?;
        self.date = date;
        Ok(())
    }

    pub fn next_day(&mut self) {
        self.date = self.date.succ_opt().unwrap_or(self.date);
    }

    pub fn prev_day(&mut self) {
        self.date = self.date.pred_opt().unwrap_or(self.date);
    }

    /// Put the date back to today
    pub fn reset_date(&mut self) {
        self.date = self.today;
    }

    /// Clear every field back to its default
    pub fn reset(&mut self) {
        self.amount.clear();
        self.description.clear();
        self.amount_type = AmountType::Credit;
        self.date = self.today;
    }

    /// Last notice produced by a submit
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Take the last notice, leaving none
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// Check the fields and build the draft that would be sent
    pub fn validate(&self) -> ExpenseResult<ExpenseDraft> {
        let amount = Money::parse(&self.amount).map_err(|e| match e {
            MoneyParseError::Empty => ExpenseError::Validation(AMOUNT_REQUIRED.into()),
            MoneyParseError::InvalidFormat(raw) => ExpenseError::Validation(format!(
                "Invalid amount '{}'. Enter a number",
                raw
            )),
        })?;

        Ok(ExpenseDraft {
            amount,
            amount_type: self.amount_type,
            description: self.description.clone(),
            date: self.date,
        })
    }

    /// Validate and mark the form as submitting
    ///
    /// On failure nothing is sent; the reason is kept as a failure notice.
    pub fn begin_submit(&mut self) -> ExpenseResult<ExpenseDraft> {
        if self.submitting {
            return Err(ExpenseError::Validation(
                "An expense is already being added".into(),
            ));
        }
        match self.validate() {
            Ok(draft) => {
                self.submitting = true;
                self.notice = None;
                Ok(draft)
            }
            Err(err) => {
                self.notice = Some(Notice::failure(err.message()));
                Err(err)
            }
        }
    }

    /// Record the outcome of the create request started by `begin_submit`
    pub fn finish_submit(
        &mut self,
        result: ExpenseResult<ExpenseRecord>,
    ) -> ExpenseResult<ExpenseRecord> {
        self.submitting = false;
        match result {
            Ok(record) => {
                self.reset();
                self.notice = Some(Notice::success(ADDED));
                Ok(record)
            }
            Err(err) => {
                log::error!("Error adding expense: {}", err);
                self.notice = Some(Notice::failure(ADD_FAILED));
                Err(err)
            }
        }
    }

    /// Validate, create through `store`, and update the form
    pub async fn submit<S>(&mut self, store: &S) -> ExpenseResult<ExpenseRecord>
    where
        S: ExpenseStore + ?Sized,
    {
        let draft = self.begin_submit()?;
        let result = store.create_expense(&draft).await;
        self.finish_submit(result)
    }
}
