//! HDFC credit-card statement parser (extracted text).
//!
//! Expected text rows after PDF-to-text:
//!   01/02/2024 SWIGGY BANGALORE 450.00
//!   05/02/2024 REFUND AMAZON 1,200.00 CR
//!
//! Only lines anchored by a dd/mm/yyyy date are transaction-shaped;
//! headers, page footers, and wrapped continuation text never match and
//! are skipped silently.

use anyhow::Result;
use regex::Regex;

use crate::types::CandidateTransaction;

/// Credit marker on HDFC rows; its presence flips the amount sign.
const CREDIT_MARKER: &str = "CR";

/// Parse extracted statement text into candidate transactions.
///
/// Tokenization is whitespace-based: the first token is the date, the
/// last is the amount field, everything between joins into the
/// description. Amounts with internal spaces or currency symbols would
/// misparse; that limitation comes with the line heuristic and such rows
/// fall out at normalization.
pub fn parse_hdfc_credit_text(text: &str) -> Result<Vec<CandidateTransaction>> {
    let anchor_re = Regex::new(r"^\d{2}/\d{2}/\d{4}\b")?;

    let mut out = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if !anchor_re.is_match(line) {
            continue;
        }

        let is_credit = line.contains(CREDIT_MARKER);

        let mut tokens: Vec<&str> = line.split_whitespace().collect();
        // A standalone trailing "CR" is the marker, not the amount field.
        if tokens.last() == Some(&CREDIT_MARKER) {
            tokens.pop();
        }
        if tokens.len() < 2 {
            continue;
        }

        let date = tokens[0].to_string();
        let description = tokens[1..tokens.len() - 1].join(" ");
        let amount = clean_amount(tokens[tokens.len() - 1], is_credit);

        out.push(CandidateTransaction {
            date,
            description,
            amount,
        });
    }

    Ok(out)
}

/// Strip grouping commas and a trailing credit marker, then apply the
/// credit sign. Numeric validation happens at normalization.
fn clean_amount(field: &str, is_credit: bool) -> String {
    let cleaned = field.trim_end_matches(CREDIT_MARKER).replace(',', "");
    let cleaned = cleaned.trim().to_string();
    if is_credit && !cleaned.starts_with('-') {
        format!("-{cleaned}")
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_basic_rows() {
        let text = r#"
HDFC Bank Credit Card Statement
Date        Description                 Amount
01/02/2024 SWIGGY BANGALORE 450.00
03/02/2024 AMAZON PAY INDIA 2,499.00
Page 1 of 3
"#;

        let rows = parse_hdfc_credit_text(text).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, "01/02/2024");
        assert_eq!(rows[0].description, "SWIGGY BANGALORE");
        assert_eq!(rows[0].amount, "450.00");
        // Grouping commas are stripped from the amount field.
        assert_eq!(rows[1].amount, "2499.00");
    }

    #[test]
    fn test_credit_marker_negates_amount() {
        let text = "05/02/2024 REFUND AMAZON 1,200.00 CR";
        let rows = parse_hdfc_credit_text(text).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].description, "REFUND AMAZON");
        assert_eq!(rows[0].amount, "-1200.00");
    }

    #[test]
    fn test_credit_marker_attached_to_amount() {
        let text = "05/02/2024 REFUND AMAZON 1,200.00CR";
        let rows = parse_hdfc_credit_text(text).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].amount, "-1200.00");
    }

    #[test]
    fn test_non_anchored_lines_skipped() {
        let text = r#"
Statement period: 01/02/2024 to 29/02/2024
Total due 12,345.00
1/2/2024 SHORT DATE 100.00
2024-02-01 ISO DATE 100.00
"#;
        let rows = parse_hdfc_credit_text(text).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_garbage_amount_kept_for_normalizer_to_drop() {
        // The parser only cleans the field; the normalizer rejects it.
        let text = "01/02/2024 SWIGGY BANGALORE PENDING";
        let rows = parse_hdfc_credit_text(text).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].amount, "PENDING");
    }

    #[test]
    fn test_leading_whitespace_trimmed_before_anchor() {
        let text = "   01/02/2024 ZOMATO ORDER 320.50";
        let rows = parse_hdfc_credit_text(text).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].description, "ZOMATO ORDER");
    }
}
