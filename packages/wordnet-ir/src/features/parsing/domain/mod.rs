//! Parsing domain models

mod markup_node;
mod parsed_document;

pub use markup_node::MarkupNode;
pub use parsed_document::ParsedDocument;
