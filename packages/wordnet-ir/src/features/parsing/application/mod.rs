//! Parsing application layer

pub mod document_walker;
pub mod parse_file;

pub use document_walker::DocumentWalker;
pub use parse_file::ParseFileUseCase;
