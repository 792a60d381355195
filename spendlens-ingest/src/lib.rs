//! spendlens-ingest: statement ingestion (extracted document text and tabular
//! exports) and normalization into canonical transactions.

pub mod error;
pub mod extract;
pub mod normalize;
pub mod parsers;
pub mod tabular;
pub mod types;

pub use error::{IngestError, RowError};
pub use extract::{PageSource, TextPages, extract_text};
pub use normalize::{normalize_all, normalize_candidate};
pub use parsers::parse_hdfc_credit_text;
pub use tabular::{load_csv, load_workbook};
pub use types::{CandidateTransaction, InputKind};
