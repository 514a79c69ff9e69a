//! Domain layer for graph storage
//!
//! # Domain Models
//!
//! - `NodeDocument`: one node record, addressed by `_key` inside a collection
//! - `EdgeDocument`: one edge with collection-qualified `_from`/`_to` handles
//! - `CollectionKind`: document collection or edge collection
//!
//! # Port Trait
//!
//! - `GraphStore`: get-or-create collections, upsert nodes, append edges

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use wordnet_ir::Attributes;

use crate::Result;

// ═══════════════════════════════════════════════════════════════════════════
// Domain Models
// ═══════════════════════════════════════════════════════════════════════════

/// What a collection holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionKind {
    Document,
    Edge,
}

impl CollectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionKind::Document => "document",
            CollectionKind::Edge => "edge",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "document" => Some(CollectionKind::Document),
            "edge" => Some(CollectionKind::Edge),
            _ => None,
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Node document
///
/// Serializes flat: `{"_key": "E1-1", "writtenForm": "run", ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeDocument {
    #[serde(rename = "_key")]
    pub key: String,
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl NodeDocument {
    pub fn new(key: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            key: key.into(),
            attributes,
        }
    }
}

/// Edge document with `<collection>/<key>` endpoint handles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeDocument {
    #[serde(rename = "_from")]
    pub from: String,
    #[serde(rename = "_to")]
    pub to: String,
    #[serde(rename = "_type")]
    pub relation_type: String,
    pub category: String,
}

impl EdgeDocument {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        relation_type: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            relation_type: relation_type.into(),
            category: category.into(),
        }
    }
}

/// `<collection>/<key>` handle
pub fn document_handle(collection: &str, key: &str) -> String {
    format!("{}/{}", collection, key)
}

/// Per-collection document counts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    pub collections: BTreeMap<String, usize>,
}

impl StoreStats {
    pub fn count(&self, collection: &str) -> usize {
        self.collections.get(collection).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.collections.values().sum()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Port Trait
// ═══════════════════════════════════════════════════════════════════════════

/// Graph Store Port
///
/// All storage backends must implement this trait. Writes to a collection
/// that does not exist fail with `CollectionNotFound`; writing nodes into
/// an edge collection (or the reverse) is a `Config` error.
#[async_trait]
pub trait GraphStore: Send + Sync {
    /// Create the collection if absent. Returns `true` when it was created.
    async fn ensure_collection(&self, name: &str, kind: CollectionKind) -> Result<bool>;

    async fn has_collection(&self, name: &str) -> Result<bool>;

    /// Insert or replace node documents by `_key`
    async fn upsert_nodes(&self, collection: &str, nodes: &[NodeDocument]) -> Result<usize>;

    /// Append edge documents (no deduplication)
    async fn insert_edges(&self, collection: &str, edges: &[EdgeDocument]) -> Result<usize>;

    async fn get_node(&self, collection: &str, key: &str) -> Result<Option<NodeDocument>>;

    /// Edges whose `_from` equals `from`, in insertion order
    async fn edges_from(&self, collection: &str, from: &str) -> Result<Vec<EdgeDocument>>;

    async fn stats(&self) -> Result<StoreStats>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordnet_ir::AttrValue;

    #[test]
    fn test_node_document_is_flat() {
        let mut attributes = Attributes::new();
        attributes.insert("writtenForm".into(), AttrValue::from("run"));
        attributes.insert("Examples".into(), AttrValue::List(vec!["x".into()]));
        let doc = NodeDocument::new("E1", attributes);

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["_key"], "E1");
        assert_eq!(json["writtenForm"], "run");
        assert_eq!(json["Examples"][0], "x");

        let back: NodeDocument = serde_json::from_value(json).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_edge_document_field_names() {
        let edge = EdgeDocument::new("senses/E1-1", "synsets/S1", "synset_member_of", "sense_to_synset");
        let json = serde_json::to_value(&edge).unwrap();

        assert_eq!(json["_from"], "senses/E1-1");
        assert_eq!(json["_to"], "synsets/S1");
        assert_eq!(json["_type"], "synset_member_of");
        assert_eq!(json["category"], "sense_to_synset");
    }

    #[test]
    fn test_collection_kind_parse() {
        for kind in [CollectionKind::Document, CollectionKind::Edge] {
            assert_eq!(CollectionKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(CollectionKind::parse("graph"), None);
    }

    #[test]
    fn test_stats_helpers() {
        let mut stats = StoreStats::default();
        stats.collections.insert("senses".into(), 3);
        stats.collections.insert("edges".into(), 6);

        assert_eq!(stats.count("senses"), 3);
        assert_eq!(stats.count("synsets"), 0);
        assert_eq!(stats.total(), 9);
        assert_eq!(document_handle("senses", "E1-1"), "senses/E1-1");
    }
}
