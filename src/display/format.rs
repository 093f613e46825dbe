//! Formatting helpers shared by the plain-text renderers

use chrono::NaiveDate;
use std::fmt::Write;

use crate::models::{Money, Standing};

/// Format a date with a user-chosen strftime pattern
///
/// Patterns chrono cannot render for a plain date fall back to `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_ok() {
        return out;
    }
    log::debug!("Cannot format date with '{}', falling back to ISO", pattern);
    date.format("%Y-%m-%d").to_string()
}

/// Format an amount with its currency symbol, colored by standing
///
/// Surplus renders green and deficit red when `colored` is set.
pub fn format_money_colored(amount: Money, symbol: &str, standing: Standing, colored: bool) -> String {
    let text = amount.format_with_symbol(symbol);
    if !colored {
        return text;
    }
    match standing {
        Standing::Surplus => format!("\x1b[32m{}\x1b[0m", text),
        Standing::Deficit => format!("\x1b[31m{}\x1b[0m", text),
    }
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar of `width` cells filled in proportion to `value`
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Truncate a string to at most `max_len` characters with an ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(format_date(date, "%Y-%m-%d"), "2024-03-09");
        assert_eq!(format_date(date, "%d/%m/%Y"), "09/03/2024");
        assert_eq!(format_date(date, "%Q"), "2024-03-09");
        assert_eq!(format_date(date, "%H:%M"), "2024-03-09");
    }

    #[test]
    fn test_format_money_colored() {
        let plain = format_money_colored(Money::from_units(-50), "₹", Standing::Deficit, false);
        assert_eq!(plain, "-₹50.00");

        let red = format_money_colored(Money::from_units(-50), "₹", Standing::Deficit, true);
        assert!(red.starts_with("\x1b[31m"));

        let green = format_money_colored(Money::zero(), "$", Standing::Surplus, true);
        assert_eq!(green, "\x1b[32m$0.00\x1b[0m");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(80.0), "80%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(0.0, 100.0, 4), "░░░░");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("चाय और नाश्ता", 6), "चाय...");
    }
}
