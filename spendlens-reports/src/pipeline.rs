//! End-to-end statement processing: one linear pass from raw input to a
//! frozen, categorized transaction snapshot.
//!
//! Re-running over identical input bytes produces an identical snapshot
//! and identical aggregates, so retries are safe.

use std::path::Path;

use log::info;
use spendlens_core::{CategoryRules, Transaction};
use spendlens_ingest::{
    CandidateTransaction, IngestError, PageSource, extract_text, load_csv, load_workbook,
    normalize_all, parse_hdfc_credit_text,
};

/// One statement input, resolved to its kind at the boundary.
///
/// Callers holding a filename resolve `spendlens_ingest::InputKind` from
/// the extension first, then hand over the matching variant here.
pub enum StatementSource<'a> {
    /// Text-bearing document; pages readable via the external collaborator.
    Document(&'a dyn PageSource),
    /// CSV export text.
    CsvText(&'a str),
    /// XLSX/XLS workbook on disk.
    Workbook(&'a Path),
}

/// Frozen result of one pipeline invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    transactions: Vec<Transaction>,
    candidate_rows: usize,
}

impl Statement {
    /// The categorized transaction sequence, read-only.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Candidate rows seen before validation.
    pub fn candidate_rows(&self) -> usize {
        self.candidate_rows
    }

    /// Rows excluded by validation.
    pub fn dropped_rows(&self) -> usize {
        self.candidate_rows - self.transactions.len()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

/// Run the pipeline: ingest, normalize, categorize, freeze.
///
/// Row-level failures are absorbed (logged and excluded); structural
/// failures abort with a typed error and no partial result. An input
/// with no transaction-shaped content yields a valid empty statement.
pub fn process(
    source: StatementSource<'_>,
    rules: &CategoryRules,
) -> Result<Statement, IngestError> {
    let candidates = ingest(source)?;
    let candidate_rows = candidates.len();

    let mut transactions = normalize_all(&candidates);
    for txn in &mut transactions {
        txn.category = rules.categorize(&txn.description);
    }

    info!(
        "parsed {} transactions ({} candidate rows dropped)",
        transactions.len(),
        candidate_rows - transactions.len()
    );

    Ok(Statement {
        transactions,
        candidate_rows,
    })
}

fn ingest(source: StatementSource<'_>) -> Result<Vec<CandidateTransaction>, IngestError> {
    match source {
        StatementSource::Document(pages) => {
            let text = extract_text(pages);
            parse_hdfc_credit_text(&text).map_err(|err| IngestError::Document(err.to_string()))
        }
        StatementSource::CsvText(content) => load_csv(content),
        StatementSource::Workbook(path) => load_workbook(path),
    }
}
