//! Canonical transaction record and the derived year+month key.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::category::Category;

/// Year+month key, derived from a transaction date by truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StatementMonth {
    year: i32,
    month: u32,
}

impl StatementMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }
}

impl From<NaiveDate> for StatementMonth {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for StatementMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Error from parsing a `YYYY-MM` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseMonthError;

impl fmt::Display for ParseMonthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid year-month, expected YYYY-MM")
    }
}

impl std::error::Error for ParseMonthError {}

impl FromStr for StatementMonth {
    type Err = ParseMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s.trim().split_once('-').ok_or(ParseMonthError)?;
        let year: i32 = year.parse().map_err(|_| ParseMonthError)?;
        let month: u32 = month.parse().map_err(|_| ParseMonthError)?;
        Self::new(year, month).ok_or(ParseMonthError)
    }
}

impl Serialize for StatementMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StatementMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A single dated, described, signed monetary movement from a statement.
///
/// Positive `amount` is a debit/spend; negative is a credit/refund.
/// `month` is always the truncation of `date` and is set at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
    pub month: StatementMonth,
    pub category: Category,
}

impl Transaction {
    /// Build a transaction with `month` derived from `date` and the
    /// category seeded with the fallback until categorization runs.
    pub fn new(date: NaiveDate, description: impl Into<String>, amount: f64) -> Self {
        Self {
            date,
            description: description.into(),
            amount,
            month: StatementMonth::from(date),
            category: Category::Others,
        }
    }

    /// Returns true for a credit/refund (negative amount).
    pub fn is_credit(&self) -> bool {
        self.amount < 0.0
    }

    /// Returns true for a debit/spend (positive amount).
    pub fn is_debit(&self) -> bool {
        self.amount > 0.0
    }
}
