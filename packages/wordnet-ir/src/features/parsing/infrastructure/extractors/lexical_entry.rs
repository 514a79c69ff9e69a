/*
 * Lexical Entry Extraction
 *
 * <LexicalEntry id=..>
 *   <Lemma writtenForm=.. partOfSpeech=..> [<Pronunciation>..</Pronunciation>] </Lemma>
 *   <Form .../>*          merged into the entry record
 *   <Sense .../>*         delegated to SenseExtractor
 * </LexicalEntry>
 *
 * Lemma must come before any Form or Sense sibling.
 */

use tracing::trace;

use super::sense::SenseExtractor;
use super::{ElementExtractor, ExtractionContext};
use crate::features::parsing::domain::MarkupNode;
use crate::shared::models::{keys, AttrValue, Attributes, Result, WordNetError, WordNetGraph};

/// Values read from a `Lemma` child, later copied into its senses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LemmaInfo {
    pub written_form: String,
    pub part_of_speech: String,
    pub pronunciation: Option<String>,
}

impl LemmaInfo {
    pub fn from_element(lemma: &MarkupNode) -> Result<Self> {
        let written_form = lemma.require_attr(keys::WRITTEN_FORM)?.to_string();
        let part_of_speech = lemma.require_attr(keys::PART_OF_SPEECH)?.to_string();

        // Last one wins when a lemma lists several variants
        let pronunciation = lemma
            .children
            .iter()
            .filter(|c| c.tag == "Pronunciation")
            .last()
            .map(|p| p.text().to_string());

        Ok(Self {
            written_form,
            part_of_speech,
            pronunciation,
        })
    }

    pub fn to_attributes(&self) -> Attributes {
        let mut record = Attributes::new();
        record.insert(keys::WRITTEN_FORM.into(), self.written_form.as_str().into());
        record.insert(keys::PART_OF_SPEECH.into(), self.part_of_speech.as_str().into());
        if let Some(ref pronunciation) = self.pronunciation {
            record.insert(keys::PRONUNCIATION.into(), pronunciation.as_str().into());
        }
        record
    }
}

/// `LexicalEntry` → entry node, its senses, and their edges
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalEntryExtractor;

impl ElementExtractor for LexicalEntryExtractor {
    const TAG: &'static str = "LexicalEntry";

    fn extract(
        &self,
        ctx: &ExtractionContext,
        element: &MarkupNode,
        graph: &mut WordNetGraph,
    ) -> Result<()> {
        let raw_id = element.require_attr(keys::ID)?;
        let entry_id = ctx.sanitize(raw_id);
        let context = element.context_label();

        let mut lemma: Option<LemmaInfo> = None;

        for child in &element.children {
            match child.tag.as_str() {
                "Lemma" => {
                    let info =
                        LemmaInfo::from_element(child).map_err(|e| e.with_parent(&context))?;
                    graph
                        .lexical_entries
                        .insert(entry_id.clone(), info.to_attributes());
                    lemma = Some(info);
                }

                "Form" => {
                    if lemma.is_none() {
                        return Err(WordNetError::ordering("<Form> appears before <Lemma>")
                            .with_element("Form")
                            .with_parent(&context));
                    }
                    let record = graph.lexical_entries.get_mut(&entry_id).ok_or_else(|| {
                        WordNetError::internal(format!("Entry record {} vanished", entry_id))
                    })?;
                    for (key, value) in &child.attributes {
                        record.insert(key.clone(), AttrValue::from(value.as_str()));
                    }
                    trace!(entry = %entry_id, "merged Form attributes");
                }

                tag if tag == SenseExtractor::TAG => {
                    let owner = lemma.as_ref().ok_or_else(|| {
                        WordNetError::ordering("<Sense> appears before <Lemma>")
                            .with_element(SenseExtractor::TAG)
                            .with_parent(&context)
                    })?;
                    SenseExtractor
                        .extract(ctx, child, &entry_id, owner, graph)
                        .map_err(|e| match e.parent {
                            Some(_) => e,
                            None => e.with_parent(&context),
                        })?;
                }

                other => return Err(WordNetError::unexpected_element(other, context)),
            }
        }

        Ok(())
    }
}
