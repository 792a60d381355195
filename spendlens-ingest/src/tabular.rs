//! Tabular statement exports: CSV text and XLSX/XLS workbooks.
//!
//! Both loaders map header names case-insensitively (surrounding
//! whitespace stripped) onto the logical `date` / `description` /
//! `amount` fields. Extra columns are ignored; a missing required column
//! fails the whole input.

use std::path::Path;

use calamine::{Data, Reader};
use chrono::{Duration, NaiveDate};
use csv::ReaderBuilder;

use crate::error::IngestError;
use crate::types::CandidateTransaction;

const REQUIRED_COLUMNS: [&str; 3] = ["date", "description", "amount"];

#[derive(Debug)]
struct ColumnMap {
    date: usize,
    description: usize,
    amount: usize,
}

fn resolve_columns(headers: &[String]) -> Result<ColumnMap, IngestError> {
    let find = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
    };

    let indices = [find("date"), find("description"), find("amount")];
    if let [Some(date), Some(description), Some(amount)] = indices {
        return Ok(ColumnMap {
            date,
            description,
            amount,
        });
    }

    let missing = REQUIRED_COLUMNS
        .iter()
        .zip(indices)
        .filter_map(|(name, index)| index.is_none().then(|| name.to_string()))
        .collect();
    Err(IngestError::MissingColumns { missing })
}

/// Load a CSV export into candidate rows.
pub fn load_csv(content: &str) -> Result<Vec<CandidateTransaction>, IngestError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    let columns = resolve_columns(&headers)?;

    let mut out = Vec::new();
    for record in reader.records() {
        let record = record?;
        let field = |index: usize| record.get(index).unwrap_or("").trim().to_string();
        out.push(CandidateTransaction {
            date: field(columns.date),
            description: field(columns.description),
            amount: field(columns.amount),
        });
    }
    Ok(out)
}

/// Load the first worksheet of an XLSX/XLS workbook into candidate rows.
/// Row 0 is the header; numeric cells in the date column are treated as
/// Excel serial dates.
pub fn load_workbook(path: &Path) -> Result<Vec<CandidateTransaction>, IngestError> {
    let mut workbook = calamine::open_workbook_auto(path)?;
    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range?,
        None => return Err(IngestError::EmptyWorkbook),
    };

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .map(|row| row.iter().map(cell_text).collect())
        .unwrap_or_default();
    let columns = resolve_columns(&headers)?;

    let mut out = Vec::new();
    for row in rows {
        let field = |index: usize| row.get(index).map(cell_text).unwrap_or_default();
        out.push(CandidateTransaction {
            date: date_cell_text(row.get(columns.date)),
            description: field(columns.description),
            amount: field(columns.amount),
        });
    }
    Ok(out)
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) => s.trim().to_string(),
        Data::DurationIso(s) => s.trim().to_string(),
        Data::Error(_) | Data::Empty => String::new(),
    }
}

fn date_cell_text(cell: Option<&Data>) -> String {
    match cell {
        Some(Data::Float(f)) => excel_serial_to_date(*f),
        Some(Data::Int(i)) => excel_serial_to_date(*i as f64),
        Some(Data::DateTime(dt)) => excel_serial_to_date(dt.as_f64()),
        // Datetime text keeps the date part only.
        Some(Data::DateTimeIso(s)) => s.split('T').next().unwrap_or("").trim().to_string(),
        Some(other) => cell_text(other),
        None => String::new(),
    }
}

/// Excel serial day 0 is 1899-12-30 (the offset absorbs the phantom
/// 1900-02-29). Out-of-range serials produce an empty string and fall
/// out at normalization.
fn excel_serial_to_date(serial: f64) -> String {
    let Some(base) = NaiveDate::from_ymd_opt(1899, 12, 30) else {
        return String::new();
    };
    Duration::try_days(serial.floor() as i64)
        .and_then(|days| base.checked_add_signed(days))
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
