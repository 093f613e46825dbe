//! Summary and chart formatting

use super::format::{format_bar, format_money_colored, format_percentage, separator};
use crate::models::{Standing, Totals};

const LABEL_WIDTH: usize = 14;

/// Format total credit, total debit and the balance
///
/// The balance is colored by standing when `colored` is set.
pub fn format_summary(totals: &Totals, symbol: &str, colored: bool) -> String {
    let mut output = String::new();
    output.push_str("Summary\n");
    output.push_str(&separator(32));
    output.push('\n');

    output.push_str(&format!(
        "{:<width$}{}\n",
        "Total Credit:",
        totals.total_credit.format_with_symbol(symbol),
        width = LABEL_WIDTH
    ));
    output.push_str(&format!(
        "{:<width$}{}\n",
        "Total Debit:",
        totals.total_debit.format_with_symbol(symbol),
        width = LABEL_WIDTH
    ));

    let standing = totals.standing();
    output.push_str(&format!(
        "{:<width$}{} ({})\n",
        "Balance:",
        format_money_colored(totals.balance(), symbol, standing, colored),
        standing,
        width = LABEL_WIDTH
    ));

    output
}

/// Format the credit-vs-debit chart as two proportional bars
pub fn format_chart(totals: &Totals, symbol: &str, width: usize) -> String {
    let Some(credit_share) = totals.credit_share() else {
        return "Nothing to chart yet.\n".to_string();
    };

    let credit = totals.total_credit.to_f64().max(0.0);
    let debit = totals.total_debit.to_f64().max(0.0);
    let combined = credit + debit;

    let mut output = String::new();
    output.push_str("Credit vs Debit\n");
    output.push_str(&separator(width + 24));
    output.push('\n');

    for (label, value, share, standing, amount) in [
        ("Credit", credit, credit_share, Standing::Surplus, totals.total_credit),
        ("Debit", debit, 1.0 - credit_share, Standing::Deficit, totals.total_debit),
    ] {
        output.push_str(&format!(
            "{:<7} {} {:>4}  {}\n",
            label,
            format_bar(value, combined, width),
            format_percentage(share * 100.0),
            format_money_colored(amount, symbol, standing, false)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_summary_deficit() {
        let totals = Totals::new(Money::from_units(100), Money::from_units(150));
        let output = format_summary(&totals, "₹", false);

        assert!(output.contains("Total Credit: ₹100.00"));
        assert!(output.contains("Total Debit:  ₹150.00"));
        assert!(output.contains("-₹50.00 (Deficit)"));
    }

    #[test]
    fn test_summary_zero_balance_is_surplus() {
        let output = format_summary(&Totals::default(), "$", false);
        assert!(output.contains("$0.00 (Surplus)"));
    }

    #[test]
    fn test_summary_colors_balance() {
        let totals = Totals::new(Money::from_units(200), Money::from_units(50));
        let output = format_summary(&totals, "₹", true);
        assert!(output.contains("\x1b[32m₹150.00\x1b[0m"));
    }

    #[test]
    fn test_chart_shares() {
        let totals = Totals::new(Money::from_units(200), Money::from_units(50));
        let output = format_chart(&totals, "₹", 10);

        assert!(output.contains("80%"));
        assert!(output.contains("20%"));
        assert!(output.contains("████████░░"));
        assert!(output.contains("██░░░░░░░░"));
    }

    #[test]
    fn test_chart_with_nothing_to_show() {
        let output = format_chart(&Totals::default(), "₹", 10);
        assert!(output.contains("Nothing to chart"));
    }
}
