//! Expense CLI commands
//!
//! One-shot versions of the two screens: fetch-and-print for the list and
//! summary, validate-and-create for `add`.

use clap::Args;
use std::io::IsTerminal;

use crate::api::ExpenseStore;
use crate::config::Settings;
use crate::controller::{AddExpenseForm, FetchState, SummaryController};
use crate::display::{
    format_chart, format_date, format_expense_list, format_signed_amount, format_summary,
};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::AmountType;

const CHART_WIDTH: usize = 30;

/// Arguments of `expenses add`
#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    /// Amount (e.g. "75" or "12.50")
    #[arg(allow_hyphen_values = true)]
    pub amount: String,
    /// Record the entry as a debit
    #[arg(long, conflicts_with = "amount_type")]
    pub debit: bool,
    /// Entry type: credit or debit
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub amount_type: Option<String>,
    /// Description
    #[arg(short, long)]
    pub desc: Option<String>,
    /// Entry date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<String>,
}

/// Fetch once, failing the command if the store could not be reached
async fn fetch(store: &dyn ExpenseStore) -> ExpenseResult<SummaryController> {
    let mut controller = SummaryController::new();
    if let FetchState::Errored(reason) = controller.refresh(store).await {
        return Err(ExpenseError::Transport(reason.clone()));
    }
    Ok(controller)
}

/// Print every record in server order
pub async fn handle_list(store: &dyn ExpenseStore, settings: &Settings) -> ExpenseResult<()> {
    let controller = fetch(store).await?;
    println!(
        "{}",
        format_expense_list(
            controller.expenses(),
            &settings.currency_symbol,
            &settings.date_format
        )
    );
    Ok(())
}

/// Print the totals and, with `chart`, the credit-vs-debit chart
pub async fn handle_summary(
    store: &dyn ExpenseStore,
    settings: &Settings,
    chart: bool,
) -> ExpenseResult<()> {
    let mut controller = fetch(store).await?;
    if chart {
        controller.show_chart();
    }

    let colored = std::io::stdout().is_terminal();
    print!(
        "{}",
        format_summary(&controller.totals(), &settings.currency_symbol, colored)
    );

    if controller.chart_visible() {
        println!();
        print!(
            "{}",
            format_chart(&controller.totals(), &settings.currency_symbol, CHART_WIDTH)
        );
    }
    Ok(())
}

/// Validate the entry locally, then create it
pub async fn handle_add(
    store: &dyn ExpenseStore,
    settings: &Settings,
    args: AddArgs,
) -> ExpenseResult<()> {
    let mut form = AddExpenseForm::new();
    form.set_amount(args.amount);

    let amount_type = match args.amount_type {
        Some(text) => text.parse::<AmountType>()?,
        None if args.debit => AmountType::Debit,
        None => AmountType::Credit,
    };
    form.set_amount_type(amount_type);

    if let Some(desc) = args.desc {
        form.set_description(desc);
    }
    if let Some(date) = args.date {
        form.set_date_str(&date)?;
    }

    let result = form.submit(store).await;
    if let Some(notice) = form.take_notice() {
        if notice.is_success() {
            println!("{}", notice.message);
        } else {
            eprintln!("{}", notice.message);
        }
    }
    let record = result?;

    println!("  ID:          {}", record.id);
    if let Some(date) = record.date {
        println!("  Date:        {}", format_date(date, &settings.date_format));
    }
    println!(
        "  Amount:      {}",
        format_signed_amount(&record, &settings.currency_symbol)
    );
    println!("  Type:        {}", record.amount_type);
    if let Some(desc) = record.description_text() {
        println!("  Description: {}", desc);
    }
    Ok(())
}
