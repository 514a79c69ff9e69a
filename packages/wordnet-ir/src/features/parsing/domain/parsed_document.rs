//! Parsed document representation

use super::markup_node::MarkupNode;
use crate::shared::models::{Result, WordNetError};

/// Whole document tree, loaded before traversal begins
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    /// Root element (`LexicalResource` in LMF files)
    pub root: MarkupNode,

    /// File path (for error messages)
    pub file_path: String,
}

impl ParsedDocument {
    pub fn new(root: MarkupNode, file_path: impl Into<String>) -> Self {
        Self {
            root,
            file_path: file_path.into(),
        }
    }

    /// The single top-level group element (`Lexicon`)
    pub fn lexicon(&self) -> Result<&MarkupNode> {
        match self.root.children.as_slice() {
            [lexicon] => Ok(lexicon),
            [] => Err(WordNetError::document_structure(format!(
                "<{}> has no top-level group element",
                self.root.tag
            ))),
            many => Err(WordNetError::document_structure(format!(
                "<{}> has {} top-level group elements, expected exactly one",
                self.root.tag,
                many.len()
            ))),
        }
    }
}
