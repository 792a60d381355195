use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::IngestError;

/// Input shape, resolved once at the boundary from the file extension.
/// Everything downstream dispatches on the variant, never on the filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputKind {
    Document,
    TabularCsv,
    TabularSpreadsheet,
}

impl InputKind {
    /// Resolve from a file extension (without the dot), case-insensitively.
    /// Anything unrecognized is fatal; no processing is attempted.
    pub fn from_extension(extension: &str) -> Result<Self, IngestError> {
        match extension.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(Self::Document),
            "csv" => Ok(Self::TabularCsv),
            "xlsx" | "xls" => Ok(Self::TabularSpreadsheet),
            other => Err(IngestError::UnsupportedFormat {
                extension: other.to_string(),
            }),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, IngestError> {
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        Self::from_extension(extension)
    }
}

/// Raw transaction tuple from either ingestion path, before validation.
///
/// Field text is untrusted: the date may be malformed and the amount may
/// not parse as a number. The normalizer decides what survives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateTransaction {
    pub date: String,
    pub description: String,
    pub amount: String,
}
