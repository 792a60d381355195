//! Page-text extraction boundary.
//!
//! Turning a page into text is the document reader's job; the pipeline
//! only needs ordered page texts. Partial extraction is expected for
//! scanned or garbled statements.

use anyhow::Result;
use log::warn;

/// Ordered pages of a text-bearing document.
pub trait PageSource {
    fn page_count(&self) -> usize;

    /// Extracted text of one page. Errors are tolerated per page.
    fn page_text(&self, index: usize) -> Result<String>;
}

/// Concatenate page texts in page order.
///
/// A page whose extraction fails contributes an empty string; a garbled
/// page never aborts the document.
pub fn extract_text(source: &dyn PageSource) -> String {
    let mut text = String::new();
    for index in 0..source.page_count() {
        match source.page_text(index) {
            Ok(page) => text.push_str(&page),
            Err(err) => warn!("page {index}: text extraction failed: {err}"),
        }
    }
    text
}

/// Pages whose text was already extracted upstream.
pub struct TextPages(pub Vec<String>);

impl PageSource for TextPages {
    fn page_count(&self) -> usize {
        self.0.len()
    }

    fn page_text(&self, index: usize) -> Result<String> {
        self.0
            .get(index)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("page {index} out of range"))
    }
}
