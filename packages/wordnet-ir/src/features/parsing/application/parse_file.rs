//! Parse file use case
//!
//! Path → graph. The file is read whole and closed before the walk
//! starts; the extractors never touch I/O.

use std::path::Path;
use tracing::{debug, info};

use super::document_walker::DocumentWalker;
use crate::config::{ParserConfig, Validatable};
use crate::features::parsing::domain::ParsedDocument;
use crate::features::parsing::ports::MarkupParser;
use crate::shared::models::{Result, WordNetError, WordNetGraph};

/// Parse file use case
pub struct ParseFileUseCase<P: MarkupParser> {
    parser: P,
    walker: DocumentWalker,
}

impl<P: MarkupParser> ParseFileUseCase<P> {
    /// Fails with a `Config` error when the configuration is invalid
    pub fn new(parser: P, config: ParserConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            parser,
            walker: DocumentWalker::new(config),
        })
    }

    pub fn config(&self) -> &ParserConfig {
        self.walker.config()
    }

    /// Execute the parse operation for a file on disk
    pub fn execute(&self, path: impl AsRef<Path>) -> Result<WordNetGraph> {
        let path = path.as_ref();
        let shown = path.display().to_string();

        if self.config().require_xml_extension {
            let supported = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| self.parser.supports_extension(ext))
                .unwrap_or(false);
            if !supported {
                return Err(WordNetError::not_xml_file(shown));
            }
        }

        info!(file = %shown, "reading lexicon");
        let bytes = std::fs::read(path)?;
        debug!(file = %shown, bytes = bytes.len(), "file loaded");

        let source = std::str::from_utf8(&bytes)?;
        self.execute_source(source, &shown)
    }

    /// Execute the parse operation for an already loaded document
    pub fn execute_source(&self, source: &str, file_path: &str) -> Result<WordNetGraph> {
        let root = self.parser.parse(source)?;
        let document = ParsedDocument::new(root, file_path);
        self.walker.walk(&document)
    }

    /// Execute for multiple in-memory documents, one graph each
    pub fn execute_batch(&self, sources: &[(String, String)]) -> Vec<Result<WordNetGraph>> {
        sources
            .iter()
            .map(|(path, source)| self.execute_source(source, path))
            .collect()
    }
}
