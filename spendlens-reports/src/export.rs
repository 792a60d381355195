//! Flat CSV export of the categorized transaction set.

use anyhow::Result;
use spendlens_core::Transaction;

/// Column order of the export header.
const HEADER: [&str; 5] = ["date", "description", "amount", "category", "month"];

/// Serialize transactions to CSV bytes, one row per transaction in
/// sequence order. Dates render as `YYYY-MM-DD`, amounts with two
/// decimals, months as `YYYY-MM`.
pub fn to_csv(transactions: &[Transaction]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADER)?;
    for txn in transactions {
        writer.write_record([
            txn.date.format("%Y-%m-%d").to_string(),
            txn.description.clone(),
            format!("{:.2}", txn.amount),
            txn.category.to_string(),
            txn.month.to_string(),
        ])?;
    }
    Ok(writer.into_inner()?)
}
