//! Parsing infrastructure - external dependencies

pub mod extractors;
pub mod xml_parser;

pub use extractors::{
    ElementExtractor, ExtractionContext, LexicalEntryExtractor, SenseExtractor, SynsetExtractor,
    SyntacticBehaviourExtractor,
};
pub use xml_parser::XmlMarkupParser;
