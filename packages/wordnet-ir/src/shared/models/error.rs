//! Error types for the wordnet-ir crate
//!
//! One error struct for the whole transform. The walk is fail-fast: any
//! of these aborts the parse and no partial graph is returned.
//!
//! Features:
//! - Categorized error kinds (input, structure, configuration)
//! - Optional element and parent context for structural errors
//! - Source error chaining

use std::fmt;

use crate::config::ConfigError;

/// Error kind categorization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input path does not look like a markup file
    NotXmlFile,
    /// Content cannot be parsed as markup
    NotWellFormedMarkup,
    /// A child tag does not match any recognized extractor
    UnexpectedElementKind,
    /// A required attribute is absent
    MissingAttribute,
    /// Sibling elements appear in an order the extractors cannot use
    OrderingViolation,
    /// A markup attribute collides with a key the extractor reserves
    ReservedAttribute,
    /// Root does not hold exactly one top-level group element
    DocumentStructure,
    /// Configuration errors
    Config,
    /// IO errors
    IO,
    /// Internal errors (bugs)
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NotXmlFile => "not_xml_file",
            ErrorKind::NotWellFormedMarkup => "not_well_formed_markup",
            ErrorKind::UnexpectedElementKind => "unexpected_element_kind",
            ErrorKind::MissingAttribute => "missing_attribute",
            ErrorKind::OrderingViolation => "ordering_violation",
            ErrorKind::ReservedAttribute => "reserved_attribute",
            ErrorKind::DocumentStructure => "document_structure",
            ErrorKind::Config => "config",
            ErrorKind::IO => "io",
            ErrorKind::Internal => "internal",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unified error type
#[derive(Debug)]
pub struct WordNetError {
    pub kind: ErrorKind,
    pub message: String,
    /// Offending element tag, when the error concerns one
    pub element: Option<String>,
    /// Enclosing element context, e.g. `LexicalEntry E1`
    pub parent: Option<String>,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl WordNetError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            element: None,
            parent: None,
            source: None,
        }
    }

    pub fn with_element(mut self, element: impl Into<String>) -> Self {
        self.element = Some(element.into());
        self
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    // Convenience constructors
    pub fn not_xml_file(path: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::NotXmlFile,
            format!("The file is not a XML file: {}", path.into()),
        )
    }

    pub fn not_well_formed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotWellFormedMarkup, message)
    }

    pub fn unexpected_element(tag: impl Into<String>, parent: impl Into<String>) -> Self {
        let tag = tag.into();
        Self::new(
            ErrorKind::UnexpectedElementKind,
            format!("Unexpected element <{}>", tag),
        )
        .with_element(tag)
        .with_parent(parent)
    }

    pub fn missing_attribute(element: impl Into<String>, attribute: &str) -> Self {
        let element = element.into();
        Self::new(
            ErrorKind::MissingAttribute,
            format!("<{}> is missing required attribute '{}'", element, attribute),
        )
        .with_element(element)
    }

    pub fn ordering(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::OrderingViolation, message)
    }

    pub fn reserved_attribute(element: impl Into<String>, key: &str) -> Self {
        let element = element.into();
        Self::new(
            ErrorKind::ReservedAttribute,
            format!("<{}> attribute '{}' collides with a reserved key", element, key),
        )
        .with_element(element)
    }

    pub fn document_structure(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DocumentStructure, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl fmt::Display for WordNetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind.as_str(), self.message)?;
        if let Some(ref parent) = self.parent {
            write!(f, " in {}", parent)?;
        }
        Ok(())
    }
}

impl std::error::Error for WordNetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, WordNetError>;

impl From<std::io::Error> for WordNetError {
    fn from(err: std::io::Error) -> Self {
        WordNetError::new(ErrorKind::IO, format!("IO error: {}", err)).with_source(err)
    }
}

impl From<quick_xml::Error> for WordNetError {
    fn from(err: quick_xml::Error) -> Self {
        WordNetError::not_well_formed(format!("Markup error: {}", err)).with_source(err)
    }
}

impl From<quick_xml::events::attributes::AttrError> for WordNetError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        WordNetError::not_well_formed(format!("Malformed attribute: {}", err)).with_source(err)
    }
}

impl From<std::str::Utf8Error> for WordNetError {
    fn from(err: std::str::Utf8Error) -> Self {
        WordNetError::not_well_formed(format!("Invalid UTF-8 in markup: {}", err)).with_source(err)
    }
}

impl From<serde_json::Error> for WordNetError {
    fn from(err: serde_json::Error) -> Self {
        WordNetError::internal(format!("JSON serialization error: {}", err)).with_source(err)
    }
}

impl From<ConfigError> for WordNetError {
    fn from(err: ConfigError) -> Self {
        WordNetError::config(err.to_string()).with_source(err)
    }
}
