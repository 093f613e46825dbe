//! Expense list formatting
//!
//! Renders the fetched collection as a table in server order.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use super::format::{format_date, truncate};
use crate::models::ExpenseRecord;

const NO_DESCRIPTION: &str = "No description";
const DESCRIPTION_WIDTH: usize = 40;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Type")]
    amount_type: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl ExpenseRow {
    fn from_record(record: &ExpenseRecord, symbol: &str, date_format: &str) -> Self {
        Self {
            id: record.id.to_string(),
            date: record
                .date
                .map(|d| format_date(d, date_format))
                .unwrap_or_else(|| "-".to_string()),
            description: truncate(
                record.description_text().unwrap_or(NO_DESCRIPTION),
                DESCRIPTION_WIDTH,
            ),
            amount_type: record.amount_type.to_string(),
            amount: format_signed_amount(record, symbol),
        }
    }
}

/// Amount as shown in lists: debits carry a leading minus
pub fn format_signed_amount(record: &ExpenseRecord, symbol: &str) -> String {
    let signed = if record.is_debit() {
        -record.amount
    } else {
        record.amount
    };
    if signed.is_negative() {
        signed.format_with_symbol(symbol)
    } else {
        format!("+{}", signed.format_with_symbol(symbol))
    }
}

/// Format all records as a table
pub fn format_expense_list(records: &[ExpenseRecord], symbol: &str, date_format: &str) -> String {
    if records.is_empty() {
        return "No transactions found.".to_string();
    }

    let rows = records
        .iter()
        .map(|r| ExpenseRow::from_record(r, symbol, date_format));

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::last(), Alignment::right());
    format!("{}\n{} transaction(s)", table, records.len())
}
