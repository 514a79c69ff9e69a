//! quick-xml backed markup parser
//!
//! Reads the whole document event by event and folds it into an owned
//! [`MarkupNode`] tree. Comments, processing instructions, the XML
//! declaration and the DOCTYPE are skipped.
//!
//! Character data is kept as written. Whitespace-only text is dropped
//! from elements that hold child elements and from outside the root.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::features::parsing::domain::MarkupNode;
use crate::features::parsing::ports::MarkupParser;
use crate::shared::models::{Result, WordNetError};

/// Markup parser over quick-xml's pull reader
#[derive(Debug, Clone, Default)]
pub struct XmlMarkupParser;

impl XmlMarkupParser {
    pub fn new() -> Self {
        Self
    }

    fn element(start: &BytesStart) -> Result<MarkupNode> {
        let tag = std::str::from_utf8(start.name().into_inner())?;
        let mut node = MarkupNode::new(tag);

        for attr in start.attributes() {
            let attr = attr?;
            let key = std::str::from_utf8(attr.key.as_ref())?.to_string();
            let value = attr.unescape_value()?.into_owned();
            node.attributes.insert(key, value);
        }
        Ok(node)
    }

    /// Append character data to the open element
    fn push_text(stack: &mut [MarkupNode], text: &str) -> Result<()> {
        match stack.last_mut() {
            Some(current) => current.push_text(text),
            None if is_blank(text) => {}
            None => {
                return Err(WordNetError::not_well_formed(
                    "Character data outside the root element",
                ))
            }
        }
        Ok(())
    }

    /// Hang a finished element under its parent, or make it the root
    fn attach(
        stack: &mut [MarkupNode],
        root: &mut Option<MarkupNode>,
        mut node: MarkupNode,
    ) -> Result<()> {
        if !node.children.is_empty() && node.text.as_deref().is_some_and(is_blank) {
            node.text = None;
        }
        if let Some(parent) = stack.last_mut() {
            parent.children.push(node);
            return Ok(());
        }
        if root.is_some() {
            return Err(WordNetError::not_well_formed(format!(
                "Second root element <{}>",
                node.tag
            )));
        }
        *root = Some(node);
        Ok(())
    }
}

impl MarkupParser for XmlMarkupParser {
    fn parse(&self, source: &str) -> Result<MarkupNode> {
        let mut reader = Reader::from_str(source);

        let mut stack: Vec<MarkupNode> = Vec::new();
        let mut root: Option<MarkupNode> = None;

        loop {
            match reader.read_event()? {
                Event::Start(start) => stack.push(Self::element(&start)?),
                Event::Empty(start) => {
                    let node = Self::element(&start)?;
                    Self::attach(&mut stack, &mut root, node)?;
                }
                Event::End(_) => {
                    let node = stack
                        .pop()
                        .ok_or_else(|| WordNetError::not_well_formed("Unmatched end tag"))?;
                    Self::attach(&mut stack, &mut root, node)?;
                }
                Event::Text(text) => Self::push_text(&mut stack, &text.unescape()?)?,
                Event::CData(data) => Self::push_text(&mut stack, std::str::from_utf8(&data)?)?,
                Event::Eof => break,
                // Decl, PI, Comment, DocType
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(WordNetError::not_well_formed(format!(
                "Unclosed element <{}> at end of input",
                open.tag
            )));
        }

        root.ok_or_else(|| WordNetError::not_well_formed("Document has no root element"))
    }

    fn supports_extension(&self, ext: &str) -> bool {
        ext.eq_ignore_ascii_case("xml")
    }
}

fn is_blank(text: &str) -> bool {
    text.chars().all(char::is_whitespace)
}
