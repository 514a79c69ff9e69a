//! Parsing Feature
//!
//! Turns a WordNet LMF document into a [`WordNetGraph`](crate::WordNetGraph).
//!
//! ## Structure
//! - `domain/` - MarkupNode, ParsedDocument models
//! - `ports/` - MarkupParser trait
//! - `infrastructure/` - XmlMarkupParser, entity extractors
//! - `application/` - DocumentWalker, ParseFileUseCase

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports
pub use application::{DocumentWalker, ParseFileUseCase};
pub use domain::{MarkupNode, ParsedDocument};
pub use infrastructure::XmlMarkupParser;
pub use ports::MarkupParser;
