//! Owned markup element
//!
//! The parser materializes the whole document as a tree of these before
//! any extractor runs; extractors never see the underlying reader.

use std::collections::BTreeMap;

use crate::shared::models::{Result, WordNetError};

/// One markup element: tag, attributes, text, child elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupNode {
    pub tag: String,
    pub attributes: BTreeMap<String, String>,
    /// Concatenated character data directly inside this element
    pub text: Option<String>,
    pub children: Vec<MarkupNode>,
}

impl MarkupNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_child(mut self, child: MarkupNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: Vec<MarkupNode>) -> Self {
        self.children = children;
        self
    }

    pub fn push_text(&mut self, chunk: &str) {
        match self.text {
            Some(ref mut text) => text.push_str(chunk),
            None => self.text = Some(chunk.to_string()),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Attribute that the element cannot do without
    pub fn require_attr(&self, name: &str) -> Result<&str> {
        self.attr(name)
            .ok_or_else(|| WordNetError::missing_attribute(&self.tag, name))
    }

    /// Text content, empty when the element has none
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Find first child with the given tag
    pub fn find_child(&self, tag: &str) -> Option<&MarkupNode> {
        self.children.iter().find(|c| c.tag == tag)
    }

    /// `Tag id` label used as parent context in errors
    pub fn context_label(&self) -> String {
        match self.attr("id") {
            Some(id) => format!("{} {}", self.tag, id),
            None => self.tag.clone(),
        }
    }
}
