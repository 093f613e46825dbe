//! Strongly-typed identifier for expense records
//!
//! Identifiers are assigned by the remote store; the client only carries them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Server-assigned identifier of an expense record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(i64);

impl ExpenseId {
    /// Wrap a raw identifier
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Get the raw identifier
    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ExpenseId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl FromStr for ExpenseId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        Ok(Self(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_parse() {
        let id = ExpenseId::new(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!("42".parse::<ExpenseId>().unwrap(), id);
        assert_eq!("#42".parse::<ExpenseId>().unwrap(), id);
        assert!("abc".parse::<ExpenseId>().is_err());
    }

    #[test]
    fn test_serde_transparent() {
        let id: ExpenseId = serde_json::from_str("7").unwrap();
        assert_eq!(id.get(), 7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
    }
}
