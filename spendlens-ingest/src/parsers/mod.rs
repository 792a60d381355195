//! Bank-specific parsers over extracted statement text.

pub mod hdfc_credit;

pub use hdfc_credit::parse_hdfc_credit_text;
