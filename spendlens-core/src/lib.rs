//! spendlens-core: canonical transaction types and category rules for statement analysis.

pub mod category;
pub mod transaction;

pub use category::{Category, CategoryRule, CategoryRules};
pub use transaction::{StatementMonth, Transaction};
