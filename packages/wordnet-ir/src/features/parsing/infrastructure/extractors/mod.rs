//! Entity extractors - one per LMF element kind
//!
//! Each extractor consumes one element plus its children and inserts a
//! node record (and any edges) into the shared graph.

pub mod lexical_entry;
pub mod sense;
pub mod synset;
pub mod syntactic_behaviour;

pub use lexical_entry::{LemmaInfo, LexicalEntryExtractor};
pub use sense::SenseExtractor;
pub use synset::SynsetExtractor;
pub use syntactic_behaviour::SyntacticBehaviourExtractor;

use crate::config::ParserConfig;
use crate::features::parsing::domain::MarkupNode;
use crate::shared::models::{Result, WordNetGraph};
use crate::shared::utils::sanitize::IdSanitizer;

/// Read-only state shared by every extractor call of one walk
pub struct ExtractionContext<'a> {
    pub config: &'a ParserConfig,
    pub sanitizer: &'a IdSanitizer,
}

impl<'a> ExtractionContext<'a> {
    pub fn new(config: &'a ParserConfig, sanitizer: &'a IdSanitizer) -> Self {
        Self { config, sanitizer }
    }

    pub fn sanitize(&self, raw: &str) -> String {
        self.sanitizer.sanitize(raw)
    }
}

/// Extractor for an element that appears directly under the top-level group
pub trait ElementExtractor {
    /// Tag this extractor handles
    const TAG: &'static str;

    fn extract(
        &self,
        ctx: &ExtractionContext,
        element: &MarkupNode,
        graph: &mut WordNetGraph,
    ) -> Result<()>;
}
