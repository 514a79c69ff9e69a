//! Typed edges
//!
//! An edge carries a [`RelationCategory`] naming the pair of node
//! collections it spans, so a sink can route it without inspecting the
//! endpoints. Edges are append-only and never deduplicated.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Relation labels emitted by the extractors themselves. Every other
/// label comes verbatim from a `relType` attribute.
pub mod relation_types {
    pub const SYNSET_MEMBER_OF: &str = "synset_member_of";
    pub const LEX_MEMBER_OF: &str = "lex_member_of";
    pub const VERB_SUBCAT_OF: &str = "verb_subcat_of";
}

/// Pair of node collections an edge connects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationCategory {
    SenseToSynset,
    SynsetToSynset,
    SenseToSense,
    SenseToLexEntry,
    SenseToVerbSubcat,
}

impl RelationCategory {
    pub const ALL: [RelationCategory; 5] = [
        RelationCategory::SenseToSynset,
        RelationCategory::SynsetToSynset,
        RelationCategory::SenseToSense,
        RelationCategory::SenseToLexEntry,
        RelationCategory::SenseToVerbSubcat,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RelationCategory::SenseToSynset => "sense_to_synset",
            RelationCategory::SynsetToSynset => "synset_to_synset",
            RelationCategory::SenseToSense => "sense_to_sense",
            RelationCategory::SenseToLexEntry => "sense_to_lex_entry",
            RelationCategory::SenseToVerbSubcat => "sense_to_verb_subcat",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

impl fmt::Display for RelationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `{category, from, to, relationType}` record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub category: RelationCategory,
    /// Sanitized source identifier
    pub from: String,
    /// Sanitized target identifier
    pub to: String,
    #[serde(rename = "relationType")]
    pub relation_type: String,
}

impl Edge {
    pub fn new(
        category: RelationCategory,
        from: impl Into<String>,
        to: impl Into<String>,
        relation_type: impl Into<String>,
    ) -> Self {
        Self {
            category,
            from: from.into(),
            to: to.into(),
            relation_type: relation_type.into(),
        }
    }
}
