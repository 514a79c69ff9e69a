//! Sense extraction
//!
//! A Sense always yields two edges (synset membership and lexical entry
//! membership). Subcat tokens and `SenseRelation` children add more.
//! Children other than `SenseRelation` are skipped.

use tracing::{trace, warn};

use super::lexical_entry::LemmaInfo;
use super::ExtractionContext;
use crate::features::parsing::domain::MarkupNode;
use crate::shared::models::{
    keys, relation_types, AttrValue, Attributes, Edge, RelationCategory, Result, WordNetError,
    WordNetGraph, RESERVED_SENSE_KEYS,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct SenseExtractor;

impl SenseExtractor {
    pub const TAG: &'static str = "Sense";

    /// Extract one Sense owned by `entry_id` (already sanitized)
    pub fn extract(
        &self,
        ctx: &ExtractionContext,
        element: &MarkupNode,
        entry_id: &str,
        lemma: &LemmaInfo,
        graph: &mut WordNetGraph,
    ) -> Result<()> {
        let sense_id = ctx.sanitize(element.require_attr(keys::ID)?);
        let synset_id = ctx.sanitize(element.require_attr(keys::SYNSET)?);

        let record = self.build_record(ctx, element, lemma)?;
        if graph.senses.insert(sense_id.clone(), record).is_some() {
            warn!(sense = %sense_id, "duplicate Sense id, previous record overwritten");
        }

        graph.add_edge(Edge::new(
            RelationCategory::SenseToSynset,
            &sense_id,
            synset_id,
            relation_types::SYNSET_MEMBER_OF,
        ));
        graph.add_edge(Edge::new(
            RelationCategory::SenseToLexEntry,
            &sense_id,
            entry_id,
            relation_types::LEX_MEMBER_OF,
        ));

        if let Some(subcat) = element.attr(keys::SUBCAT) {
            for frame in subcat.split_whitespace() {
                graph.add_edge(Edge::new(
                    RelationCategory::SenseToVerbSubcat,
                    &sense_id,
                    ctx.sanitize(frame),
                    relation_types::VERB_SUBCAT_OF,
                ));
            }
        }

        for relation in element.children.iter().filter(|c| c.tag == "SenseRelation") {
            let context = element.context_label();
            let target = relation
                .require_attr(keys::TARGET)
                .map_err(|e| e.with_parent(&context))?;
            let rel_type = relation
                .require_attr(keys::REL_TYPE)
                .map_err(|e| e.with_parent(&context))?;

            graph.add_edge(Edge::new(
                RelationCategory::SenseToSense,
                &sense_id,
                ctx.sanitize(target),
                rel_type,
            ));
        }

        trace!(sense = %sense_id, entry = %entry_id, "extracted Sense");
        Ok(())
    }

    /// Full attribute set plus the enabled copy-down keys
    fn build_record(
        &self,
        ctx: &ExtractionContext,
        element: &MarkupNode,
        lemma: &LemmaInfo,
    ) -> Result<Attributes> {
        let copy_down: Vec<(&str, &str)> = RESERVED_SENSE_KEYS
            .iter()
            .filter_map(|&key| copied_value(ctx, lemma, key).map(|value| (key, value)))
            .collect();

        if let Some((key, _)) = copy_down
            .iter()
            .find(|(key, _)| element.attributes.contains_key(*key))
        {
            return Err(WordNetError::reserved_attribute(element.context_label(), key));
        }

        let mut record: Attributes = element
            .attributes
            .iter()
            .map(|(k, v)| (k.clone(), AttrValue::from(v.as_str())))
            .collect();

        for (key, value) in copy_down {
            record.insert(key.to_string(), AttrValue::from(value));
        }

        Ok(record)
    }
}

/// Lemma value copied into a Sense under `key`, if that copy is enabled
fn copied_value<'a>(ctx: &ExtractionContext, lemma: &'a LemmaInfo, key: &str) -> Option<&'a str> {
    match key {
        keys::WRITTEN_FORM if ctx.config.include_written_form_in_sense => {
            Some(lemma.written_form.as_str())
        }
        keys::PART_OF_SPEECH if ctx.config.include_part_of_speech_in_sense => {
            Some(lemma.part_of_speech.as_str())
        }
        _ => None,
    }
}
