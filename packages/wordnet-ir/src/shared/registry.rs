//! Relation Registry
//!
//! Fixed mapping from edge category to the `(source, target)` pair of
//! node-collection names the edge spans. The parser never consults it;
//! sinks do, when they turn bare endpoint keys into collection-qualified
//! handles. Every category the extractors emit is present in
//! [`RelationRegistry::default`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::models::{NodeCollection, RelationCategory};

/// Collection names on both ends of an edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionPair {
    pub source: String,
    pub target: String,
}

impl CollectionPair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Category tag → collection pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelationRegistry {
    entries: BTreeMap<String, CollectionPair>,
}

impl RelationRegistry {
    /// Registry with no entries
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, category: impl Into<String>, pair: CollectionPair) -> &mut Self {
        self.entries.insert(category.into(), pair);
        self
    }

    pub fn lookup(&self, category: &str) -> Option<&CollectionPair> {
        self.entries.get(category)
    }

    pub fn contains(&self, category: &str) -> bool {
        self.entries.contains_key(category)
    }

    /// Categories the extractors can emit that this registry cannot route
    pub fn missing_categories(&self) -> Vec<RelationCategory> {
        RelationCategory::ALL
            .into_iter()
            .filter(|c| !self.contains(c.as_str()))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CollectionPair)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RelationRegistry {
    fn default() -> Self {
        use NodeCollection::*;

        let table = [
            (RelationCategory::SenseToSynset, Senses, Synsets),
            (RelationCategory::SynsetToSynset, Synsets, Synsets),
            (RelationCategory::SenseToSense, Senses, Senses),
            (RelationCategory::SenseToLexEntry, Senses, LexicalEntries),
            (RelationCategory::SenseToVerbSubcat, Senses, SyntacticBehaviours),
        ];

        let mut registry = Self::empty();
        for (category, source, target) in table {
            registry.insert(
                category.as_str(),
                CollectionPair::new(source.name(), target.name()),
            );
        }
        registry
    }
}
