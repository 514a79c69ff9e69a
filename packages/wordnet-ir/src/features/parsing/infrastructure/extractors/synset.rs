//! Synset extraction

use tracing::{trace, warn};

use super::{ElementExtractor, ExtractionContext};
use crate::features::parsing::domain::MarkupNode;
use crate::shared::models::{
    keys, AttrValue, Attributes, Edge, RelationCategory, Result, WordNetError, WordNetGraph,
    RESERVED_SYNSET_KEYS,
};

/// `Synset` → synset node plus one edge per `SynsetRelation`
///
/// The record starts as the element's attribute set with an empty
/// `Examples` list; `Definition`, `ILIDefinition` and `Example` children
/// fill in the reserved keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct SynsetExtractor;

impl ElementExtractor for SynsetExtractor {
    const TAG: &'static str = "Synset";

    fn extract(
        &self,
        ctx: &ExtractionContext,
        element: &MarkupNode,
        graph: &mut WordNetGraph,
    ) -> Result<()> {
        let synset_id = ctx.sanitize(element.require_attr(keys::ID)?);
        let context = element.context_label();

        if let Some(key) = RESERVED_SYNSET_KEYS
            .iter()
            .find(|k| element.attributes.contains_key(**k))
        {
            return Err(WordNetError::reserved_attribute(&context, key));
        }

        let mut record: Attributes = element
            .attributes
            .iter()
            .map(|(k, v)| (k.clone(), AttrValue::from(v.as_str())))
            .collect();
        let mut examples = Vec::new();

        for child in &element.children {
            match child.tag.as_str() {
                "Definition" => {
                    if child.text().is_empty() {
                        warn!(synset = %synset_id, "empty Definition");
                    }
                    record.insert(keys::DEFINITION.into(), child.text().into());
                }
                "ILIDefinition" => {
                    record.insert(keys::ILI_DEFINITION.into(), child.text().into());
                }
                "SynsetRelation" => {
                    let target = child
                        .require_attr(keys::TARGET)
                        .map_err(|e| e.with_parent(&context))?;
                    let rel_type = child
                        .require_attr(keys::REL_TYPE)
                        .map_err(|e| e.with_parent(&context))?;
                    graph.add_edge(Edge::new(
                        RelationCategory::SynsetToSynset,
                        &synset_id,
                        ctx.sanitize(target),
                        rel_type,
                    ));
                }
                "Example" => examples.push(child.text().to_string()),
                other => return Err(WordNetError::unexpected_element(other, context)),
            }
        }

        record.insert(keys::EXAMPLES.into(), AttrValue::List(examples));
        trace!(synset = %synset_id, "extracted Synset");
        graph.synsets.insert(synset_id, record);
        Ok(())
    }
}
