//! Markup parser port

use crate::features::parsing::domain::MarkupNode;
use crate::shared::models::Result;

/// Markup text → owned element tree
pub trait MarkupParser: Send + Sync {
    /// Parse a whole document and return its root element
    ///
    /// Fails with `NotWellFormedMarkup` when the text is not markup.
    fn parse(&self, source: &str) -> Result<MarkupNode>;

    /// Whether a file extension is one this parser reads
    fn supports_extension(&self, ext: &str) -> bool;
}
