//! Document walker
//!
//! One in-order pass over the children of the top-level group element,
//! dispatching each to the extractor for its tag. The first unknown tag
//! aborts the walk.

use tracing::{debug, info};

use crate::config::ParserConfig;
use crate::features::parsing::domain::{MarkupNode, ParsedDocument};
use crate::features::parsing::infrastructure::extractors::{
    ElementExtractor, ExtractionContext, LexicalEntryExtractor, SynsetExtractor,
    SyntacticBehaviourExtractor,
};
use crate::shared::models::{Result, WordNetError, WordNetGraph};
use crate::shared::utils::sanitize::IdSanitizer;

pub struct DocumentWalker {
    config: ParserConfig,
    sanitizer: IdSanitizer,
}

impl DocumentWalker {
    pub fn new(config: ParserConfig) -> Self {
        let sanitizer = config.sanitizer();
        Self { config, sanitizer }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Walk a document into a fresh graph
    pub fn walk(&self, document: &ParsedDocument) -> Result<WordNetGraph> {
        let lexicon = document.lexicon()?;
        let mut graph = WordNetGraph::with_set_info(lexicon.attributes.clone());

        info!(
            file = %document.file_path,
            elements = lexicon.children.len(),
            "walking lexicon"
        );

        self.walk_into(lexicon, &mut graph)?;

        info!(
            file = %document.file_path,
            entries = graph.lexical_entries.len(),
            senses = graph.senses.len(),
            synsets = graph.synsets.len(),
            frames = graph.syntactic_behaviours.len(),
            edges = graph.edges.len(),
            "lexicon walked"
        );

        Ok(graph)
    }

    /// Dispatch every child of `group` into an existing graph
    pub fn walk_into(&self, group: &MarkupNode, graph: &mut WordNetGraph) -> Result<()> {
        let ctx = ExtractionContext::new(&self.config, &self.sanitizer);
        let parent = group.tag.as_str();

        for element in &group.children {
            debug!(tag = %element.tag, id = element.attr("id").unwrap_or(""), "dispatch");

            match element.tag.as_str() {
                tag if tag == LexicalEntryExtractor::TAG => {
                    LexicalEntryExtractor.extract(&ctx, element, graph)?
                }
                tag if tag == SynsetExtractor::TAG => SynsetExtractor.extract(&ctx, element, graph)?,
                tag if tag == SyntacticBehaviourExtractor::TAG => {
                    SyntacticBehaviourExtractor.extract(&ctx, element, graph)?
                }
                other => return Err(WordNetError::unexpected_element(other, parent)),
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::{ErrorKind, RelationCategory};

    fn document(children: Vec<MarkupNode>) -> ParsedDocument {
        let lexicon = MarkupNode::new("Lexicon")
            .with_attr("id", "oewn")
            .with_attr("language", "en")
            .with_children(children);
        ParsedDocument::new(MarkupNode::new("LexicalResource").with_child(lexicon), "wn.xml")
    }

    fn entry() -> MarkupNode {
        MarkupNode::new("LexicalEntry")
            .with_attr("id", "E1")
            .with_child(
                MarkupNode::new("Lemma")
                    .with_attr("writtenForm", "run")
                    .with_attr("partOfSpeech", "v"),
            )
            .with_child(
                MarkupNode::new("Sense")
                    .with_attr("id", "E1-1")
                    .with_attr("synset", "S1")
                    .with_attr("subcat", "vii"),
            )
    }

    #[test]
    fn test_walk_dispatches_all_kinds() {
        let doc = document(vec![
            entry(),
            MarkupNode::new("Synset").with_attr("id", "S1"),
            MarkupNode::new("SyntacticBehaviour")
                .with_attr("id", "vii")
                .with_attr("subcategorizationFrame", "Something ----s"),
        ]);

        let graph = DocumentWalker::new(ParserConfig::default()).walk(&doc).unwrap();

        assert_eq!(graph.set_info["language"], "en");
        assert_eq!(graph.lexical_entries.len(), 1);
        assert_eq!(graph.senses.len(), 1);
        assert_eq!(graph.synsets.len(), 1);
        assert_eq!(graph.syntactic_behaviours.len(), 1);
        assert_eq!(graph.edges_of(RelationCategory::SenseToVerbSubcat).count(), 1);
    }

    #[test]
    fn test_unknown_top_level_tag_aborts() {
        let doc = document(vec![entry(), MarkupNode::new("Foo"), entry()]);
        let err = DocumentWalker::new(ParserConfig::default())
            .walk(&doc)
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::UnexpectedElementKind);
        assert_eq!(err.element.as_deref(), Some("Foo"));
        assert_eq!(err.parent.as_deref(), Some("Lexicon"));
    }

    #[test]
    fn test_walk_into_accumulates() {
        let walker = DocumentWalker::new(ParserConfig::default());
        let lexicon = MarkupNode::new("Lexicon").with_child(entry());

        let mut graph = WordNetGraph::new();
        walker.walk_into(&lexicon, &mut graph).unwrap();
        walker.walk_into(&lexicon, &mut graph).unwrap();

        // nodes overwrite, edges append
        assert_eq!(graph.senses.len(), 1);
        assert_eq!(graph.edges.len(), 6);
    }

    #[test]
    fn test_empty_lexicon() {
        let graph = DocumentWalker::new(ParserConfig::default())
            .walk(&document(vec![]))
            .unwrap();
        assert_eq!(graph.node_count(), 0);
        assert!(graph.edges.is_empty());
    }
}
