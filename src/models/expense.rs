//! Expense record model
//!
//! An expense record is a single credit or debit entry held by the remote
//! store. The wire format uses camelCase keys and abbreviates the description
//! as `desc`; both the description and the date are optional.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::ExpenseId;
use super::money::Money;
use crate::error::ExpenseError;

/// Whether an entry adds to or takes from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AmountType {
    /// Increases the balance
    #[default]
    Credit,
    /// Decreases the balance
    Debit,
}

impl AmountType {
    /// The other type
    pub fn toggled(self) -> Self {
        match self {
            Self::Credit => Self::Debit,
            Self::Debit => Self::Credit,
        }
    }

    /// Wire/CLI spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Credit => "credit",
            Self::Debit => "debit",
        }
    }
}

impl fmt::Display for AmountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Credit => write!(f, "Credit"),
            Self::Debit => write!(f, "Debit"),
        }
    }
}

impl FromStr for AmountType {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "credit" | "c" | "in" => Ok(Self::Credit),
            "debit" | "d" | "out" => Ok(Self::Debit),
            other => Err(ExpenseError::Validation(format!(
                "Unknown amount type '{}'. Use 'credit' or 'debit'",
                other
            ))),
        }
    }
}

/// A persisted expense record as returned by the remote store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    /// Identifier assigned by the store
    pub id: ExpenseId,

    /// Magnitude of the entry; its sign comes from `amount_type`
    pub amount: Money,

    /// Credit or debit
    pub amount_type: AmountType,

    /// Free-text label
    #[serde(
        rename = "desc",
        alias = "description",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,

    /// Calendar date of the entry
    #[serde(default, with = "wire_date", skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl ExpenseRecord {
    /// Create a record without description or date
    pub fn new(id: impl Into<ExpenseId>, amount: Money, amount_type: AmountType) -> Self {
        Self {
            id: id.into(),
            amount,
            amount_type,
            description: None,
            date: None,
        }
    }

    /// Builder-style description setter
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder-style date setter
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Check if this is a credit
    pub fn is_credit(&self) -> bool {
        self.amount_type == AmountType::Credit
    }

    /// Check if this is a debit
    pub fn is_debit(&self) -> bool {
        self.amount_type == AmountType::Debit
    }

    /// The description, treating blank text as absent
    pub fn description_text(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}

/// A record payload submitted for creation, lacking a server-assigned id
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDraft {
    pub amount: Money,
    pub amount_type: AmountType,
    #[serde(rename = "desc")]
    pub description: String,
    /// Serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
}

impl ExpenseDraft {
    /// Turn the draft into the record a store would persist under `id`
    pub fn into_record(self, id: impl Into<ExpenseId>) -> ExpenseRecord {
        let description = Some(self.description).filter(|d| !d.trim().is_empty());
        ExpenseRecord {
            id: id.into(),
            amount: self.amount,
            amount_type: self.amount_type,
            description,
            date: Some(self.date),
        }
    }
}

/// Lenient date codec for the optional `date` field
///
/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp (its date part is kept).
/// Missing, null, blank or unparseable values become `None`.
mod wire_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => s.serialize_str(&d.format("%Y-%m-%d").to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw = Option::<String>::deserialize(d)?;
        Ok(raw.as_deref().and_then(super::parse_wire_date))
    }
}

/// Parse a wire date, logging values that cannot be understood
pub(crate) fn parse_wire_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.date_naive());
    }
    log::warn!("Ignoring unparseable expense date '{}'", raw);
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_decode_full_record() {
        let json = r#"{"id":1,"amount":200,"amountType":"credit","desc":"Salary","date":"2024-01-05"}"#;
        let record: ExpenseRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.id, ExpenseId::new(1));
        assert_eq!(record.amount, Money::from_units(200));
        assert!(record.is_credit());
        assert_eq!(record.description.as_deref(), Some("Salary"));
        assert_eq!(record.date, Some(ymd(2024, 1, 5)));
    }

    #[test]
    fn test_decode_minimal_record() {
        let json = r#"{"id":2,"amount":"50","amountType":"debit"}"#;
        let record: ExpenseRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.amount, Money::from_units(50));
        assert!(record.is_debit());
        assert_eq!(record.description, None);
        assert_eq!(record.date, None);
    }

    #[test]
    fn test_decode_lenient_dates() {
        let ts = r#"{"id":3,"amount":1,"amountType":"debit","date":"2024-03-09T18:30:00.000Z"}"#;
        let record: ExpenseRecord = serde_json::from_str(ts).unwrap();
        assert_eq!(record.date, Some(ymd(2024, 3, 9)));

        let null = r#"{"id":3,"amount":1,"amountType":"debit","date":null}"#;
        let record: ExpenseRecord = serde_json::from_str(null).unwrap();
        assert_eq!(record.date, None);

        let junk = r#"{"id":3,"amount":1,"amountType":"debit","date":"someday"}"#;
        let record: ExpenseRecord = serde_json::from_str(junk).unwrap();
        assert_eq!(record.date, None);
    }

    #[test]
    fn test_decode_rejects_unknown_type() {
        let json = r#"{"id":1,"amount":5,"amountType":"refund"}"#;
        assert!(serde_json::from_str::<ExpenseRecord>(json).is_err());
    }

    #[test]
    fn test_draft_wire_body() {
        let draft = ExpenseDraft {
            amount: Money::from_units(75),
            amount_type: AmountType::Debit,
            description: String::new(),
            date: ymd(2024, 1, 1),
        };

        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "amount": 75,
                "amountType": "debit",
                "desc": "",
                "date": "2024-01-01"
            })
        );
    }

    #[test]
    fn test_draft_into_record() {
        let draft = ExpenseDraft {
            amount: Money::from_units(10),
            amount_type: AmountType::Credit,
            description: "  ".into(),
            date: ymd(2024, 2, 2),
        };
        let record = draft.into_record(9);
        assert_eq!(record.id.get(), 9);
        assert_eq!(record.description, None);
        assert_eq!(record.date, Some(ymd(2024, 2, 2)));
    }

    #[test]
    fn test_amount_type_parse() {
        assert_eq!("credit".parse::<AmountType>().unwrap(), AmountType::Credit);
        assert_eq!("DEBIT".parse::<AmountType>().unwrap(), AmountType::Debit);
        assert!("sideways".parse::<AmountType>().unwrap_err().is_validation());
        assert_eq!(AmountType::Credit.toggled(), AmountType::Debit);
    }

    #[test]
    fn test_description_text() {
        let record = ExpenseRecord::new(1, Money::zero(), AmountType::Credit);
        assert_eq!(record.description_text(), None);
        assert_eq!(record.with_description(" Rent ").description_text(), Some("Rent"));
    }
}
