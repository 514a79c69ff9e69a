/*
 * WordNet IR - Lexicon Markup to Typed Graph
 *
 * Feature-First Architecture:
 * - shared/      : Common models (WordNetGraph, Edge, attribute bags), sanitizer, relation registry
 * - features/    : Vertical slices (parsing: markup tree → extractors → graph model)
 * - config/      : Parser configuration (flags, sanitizer table, YAML)
 *
 * The transform is a pure, single-pass, in-memory walk. Persisting the
 * resulting graph is the job of a sink (see the `wordnet-storage` package).
 */

#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::should_implement_trait)] // RelationCategory::from_str returns Option

use std::path::Path;

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and utilities
pub mod shared;

/// Feature modules
pub mod features;

/// Configuration system
pub mod config;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{ConfigError, ConfigResult, ParserConfig};
pub use features::parsing::{
    DocumentWalker, MarkupNode, MarkupParser, ParseFileUseCase, ParsedDocument, XmlMarkupParser,
};
pub use shared::models::{
    AttrValue, Attributes, Edge, ErrorKind, GraphStats, NodeCollection, NodeMap,
    RelationCategory, Result, WordNetError, WordNetGraph,
};
pub use shared::registry::{CollectionPair, RelationRegistry};
pub use shared::utils::sanitize::{sanitize_id, IdSanitizer, SanitizeRule, DEFAULT_SANITIZE_RULES};

/// Parse a WordNet LMF file into a graph using the given configuration.
///
/// Convenience wrapper around [`ParseFileUseCase`] with the quick-xml parser.
pub fn parse_wordnet_file(path: impl AsRef<Path>, config: ParserConfig) -> Result<WordNetGraph> {
    ParseFileUseCase::new(XmlMarkupParser::new(), config)?.execute(path)
}

/// Parse an in-memory WordNet LMF document into a graph.
pub fn parse_wordnet_str(source: &str, config: ParserConfig) -> Result<WordNetGraph> {
    ParseFileUseCase::new(XmlMarkupParser::new(), config)?.execute_source(source, "<memory>")
}
