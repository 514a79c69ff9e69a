//! SyntacticBehaviour extraction

use tracing::trace;

use super::{ElementExtractor, ExtractionContext};
use crate::features::parsing::domain::MarkupNode;
use crate::shared::models::{keys, AttrValue, Attributes, Result, WordNetGraph};

/// `SyntacticBehaviour` → frame node keyed by its raw id
///
/// Frame ids are not sanitized. Inbound `verb_subcat_of` edges use the
/// sanitized token, so the two only differ for ids with disallowed
/// characters, which the LMF format does not produce.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntacticBehaviourExtractor;

impl ElementExtractor for SyntacticBehaviourExtractor {
    const TAG: &'static str = "SyntacticBehaviour";

    fn extract(
        &self,
        _ctx: &ExtractionContext,
        element: &MarkupNode,
        graph: &mut WordNetGraph,
    ) -> Result<()> {
        let id = element.require_attr(keys::ID)?;
        let frame = element.require_attr(keys::SUBCATEGORIZATION_FRAME)?;

        let mut record = Attributes::new();
        record.insert(keys::SUBCATEGORIZATION_FRAME.into(), AttrValue::from(frame));
        graph.syntactic_behaviours.insert(id.to_string(), record);

        trace!(frame_id = id, "extracted SyntacticBehaviour");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParserConfig;
    use crate::shared::models::ErrorKind;

    fn run(element: &MarkupNode) -> Result<WordNetGraph> {
        let config = ParserConfig::default();
        let sanitizer = config.sanitizer();
        let ctx = ExtractionContext::new(&config, &sanitizer);
        let mut graph = WordNetGraph::new();
        SyntacticBehaviourExtractor.extract(&ctx, element, &mut graph)?;
        Ok(graph)
    }

    #[test]
    fn test_frame_node() {
        let element = MarkupNode::new("SyntacticBehaviour")
            .with_attr("id", "vii")
            .with_attr("subcategorizationFrame", "Something ----s");

        let graph = run(&element).unwrap();
        let record = &graph.syntactic_behaviours["vii"];
        assert_eq!(record.len(), 1);
        assert_eq!(
            record["subcategorizationFrame"],
            AttrValue::from("Something ----s")
        );
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn test_id_is_kept_raw() {
        let element = MarkupNode::new("SyntacticBehaviour")
            .with_attr("id", "frame 1")
            .with_attr("subcategorizationFrame", "x");

        let graph = run(&element).unwrap();
        assert!(graph.syntactic_behaviours.contains_key("frame 1"));
    }

    #[test]
    fn test_missing_frame() {
        let element = MarkupNode::new("SyntacticBehaviour").with_attr("id", "vii");
        let err = run(&element).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MissingAttribute);
        assert_eq!(err.element.as_deref(), Some("SyntacticBehaviour"));
    }
}
