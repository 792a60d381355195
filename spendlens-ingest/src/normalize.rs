//! Candidate validation: per-row coercion into canonical transactions.
//!
//! Rows that fail are dropped with an explicit reason, never retained
//! with placeholder values.

use chrono::NaiveDate;
use log::debug;
use spendlens_core::Transaction;

use crate::error::RowError;
use crate::types::CandidateTransaction;

/// Date formats tried in order. Day-first comes first: statement rows are
/// dd/mm/yyyy, and our own exports re-import as ISO.
const DATE_FORMATS: &[&str] = &["%d/%m/%Y", "%Y-%m-%d", "%d-%m-%Y", "%d/%m/%y"];

/// Validate one candidate row.
pub fn normalize_candidate(candidate: &CandidateTransaction) -> Result<Transaction, RowError> {
    let date = parse_date(&candidate.date).ok_or_else(|| RowError::Date {
        value: candidate.date.clone(),
    })?;
    let amount = parse_amount(&candidate.amount).ok_or_else(|| RowError::Amount {
        value: candidate.amount.clone(),
    })?;
    Ok(Transaction::new(date, candidate.description.trim(), amount))
}

/// Validate a batch, collecting successes and logging each dropped row.
pub fn normalize_all(candidates: &[CandidateTransaction]) -> Vec<Transaction> {
    let mut out = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        match normalize_candidate(candidate) {
            Ok(txn) => out.push(txn),
            Err(err) => debug!("dropping row {candidate:?}: {err}"),
        }
    }
    out
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}

fn parse_amount(value: &str) -> Option<f64> {
    let cleaned = value.trim().replace(',', "");
    let parsed: f64 = cleaned.parse().ok()?;
    parsed.is_finite().then_some(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use spendlens_core::{Category, StatementMonth};

    fn candidate(date: &str, description: &str, amount: &str) -> CandidateTransaction {
        CandidateTransaction {
            date: date.to_string(),
            description: description.to_string(),
            amount: amount.to_string(),
        }
    }

    #[test]
    fn test_day_first_date() {
        let txn = normalize_candidate(&candidate("01/02/2024", "SWIGGY BANGALORE", "450.00"))
            .unwrap();
        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(txn.month, StatementMonth::new(2024, 2).unwrap());
        assert_eq!(txn.amount, 450.00);
        // Category is the fallback until categorization runs.
        assert_eq!(txn.category, Category::Others);
    }

    #[test]
    fn test_iso_date_accepted() {
        let txn = normalize_candidate(&candidate("2024-03-10", "NETFLIX", "649")).unwrap();
        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
    }

    #[test]
    fn test_invalid_month_dropped() {
        let err = normalize_candidate(&candidate("31/13/2024", "MYSTERY", "10.00")).unwrap_err();
        assert_eq!(
            err,
            RowError::Date {
                value: "31/13/2024".to_string()
            }
        );
    }

    #[test]
    fn test_non_numeric_amount_dropped() {
        let err = normalize_candidate(&candidate("01/02/2024", "SWIGGY", "N/A")).unwrap_err();
        assert_eq!(
            err,
            RowError::Amount {
                value: "N/A".to_string()
            }
        );
    }

    #[test]
    fn test_grouped_amount_and_sign() {
        let txn = normalize_candidate(&candidate("05/02/2024", "REFUND AMAZON", "-1,200.00"))
            .unwrap();
        assert_eq!(txn.amount, -1200.00);
        assert!(txn.is_credit());
    }

    #[test]
    fn test_non_finite_amount_rejected() {
        assert!(normalize_candidate(&candidate("01/02/2024", "X", "NaN")).is_err());
        assert!(normalize_candidate(&candidate("01/02/2024", "X", "inf")).is_err());
    }

    #[test]
    fn test_normalize_all_keeps_valid_rows_only() {
        let rows = vec![
            candidate("01/02/2024", "SWIGGY BANGALORE", "450.00"),
            candidate("31/13/2024", "BAD DATE", "10.00"),
            candidate("02/02/2024", "AIRTEL", "bad"),
            candidate("03/02/2024", "AMAZON", "999.00"),
        ];
        let txns = normalize_all(&rows);
        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].description, "SWIGGY BANGALORE");
        assert_eq!(txns[1].description, "AMAZON");
    }
}
