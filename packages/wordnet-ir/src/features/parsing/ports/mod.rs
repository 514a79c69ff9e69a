//! Parsing ports

mod parser;

pub use parser::MarkupParser;
