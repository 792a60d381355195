//! spendlens-reports: aggregate views, CSV export, and the end-to-end
//! statement pipeline.

pub mod aggregate;
pub mod export;
pub mod pipeline;

pub use aggregate::{
    CategorySpend, MonthlySpend, VendorSpend, category_spend, monthly_spend, top_vendors,
};
pub use export::to_csv;
pub use pipeline::{Statement, StatementSource, process};
