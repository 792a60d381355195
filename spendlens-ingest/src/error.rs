//! Typed ingestion failures.
//!
//! Structural errors abort the whole input and propagate to the caller;
//! row errors drop a single candidate while the pipeline continues.

use thiserror::Error;

/// Structural input failure. No partial result is produced.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("unsupported input format: .{extension}")]
    UnsupportedFormat { extension: String },

    #[error("tabular input is missing required column(s): {}", missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    #[error("workbook has no worksheets")]
    EmptyWorkbook,

    #[error("tabular input is unreadable: {0}")]
    Csv(#[from] csv::Error),

    #[error("workbook is unreadable: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("document text could not be parsed: {0}")]
    Document(String),
}

/// Per-row validation failure. The row is excluded from the final set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("unparseable date: {value:?}")]
    Date { value: String },

    #[error("unparseable amount: {value:?}")]
    Amount { value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_message_lists_names() {
        let err = IngestError::MissingColumns {
            missing: vec!["date".to_string(), "amount".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "tabular input is missing required column(s): date, amount"
        );
    }

    #[test]
    fn test_row_error_messages() {
        let err = RowError::Date {
            value: "31/13/2024".to_string(),
        };
        assert!(err.to_string().contains("31/13/2024"));

        let err = RowError::Amount {
            value: "N/A".to_string(),
        };
        assert!(err.to_string().contains("N/A"));
    }
}
