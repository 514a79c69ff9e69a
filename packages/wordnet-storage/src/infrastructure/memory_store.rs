//! In-memory graph store
//!
//! BTreeMap-backed adapter for tests and `wn-graph load` without `--db`.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::domain::{CollectionKind, EdgeDocument, GraphStore, NodeDocument, StoreStats};
use crate::{Result, StorageError};

#[derive(Debug, Default)]
struct Collections {
    kinds: BTreeMap<String, CollectionKind>,
    nodes: BTreeMap<String, BTreeMap<String, NodeDocument>>,
    edges: BTreeMap<String, Vec<EdgeDocument>>,
}

impl Collections {
    fn check(&self, name: &str, expected: CollectionKind) -> Result<()> {
        match self.kinds.get(name) {
            None => Err(StorageError::collection_not_found(name)),
            Some(kind) if *kind != expected => Err(StorageError::config(format!(
                "Collection {} is a {} collection, not {}",
                name, kind, expected
            ))),
            Some(_) => Ok(()),
        }
    }
}

#[derive(Clone, Default)]
pub struct InMemoryGraphStore {
    inner: Arc<RwLock<Collections>>,
}

impl InMemoryGraphStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GraphStore for InMemoryGraphStore {
    async fn ensure_collection(&self, name: &str, kind: CollectionKind) -> Result<bool> {
        let mut inner = self.inner.write()?;
        if inner.kinds.contains_key(name) {
            inner.check(name, kind)?;
            return Ok(false);
        }
        inner.kinds.insert(name.to_string(), kind);
        Ok(true)
    }

    async fn has_collection(&self, name: &str) -> Result<bool> {
        Ok(self.inner.read()?.kinds.contains_key(name))
    }

    async fn upsert_nodes(&self, collection: &str, nodes: &[NodeDocument]) -> Result<usize> {
        let mut inner = self.inner.write()?;
        inner.check(collection, CollectionKind::Document)?;

        let docs = inner.nodes.entry(collection.to_string()).or_default();
        for node in nodes {
            docs.insert(node.key.clone(), node.clone());
        }
        Ok(nodes.len())
    }

    async fn insert_edges(&self, collection: &str, edges: &[EdgeDocument]) -> Result<usize> {
        let mut inner = self.inner.write()?;
        inner.check(collection, CollectionKind::Edge)?;

        inner
            .edges
            .entry(collection.to_string())
            .or_default()
            .extend_from_slice(edges);
        Ok(edges.len())
    }

    async fn get_node(&self, collection: &str, key: &str) -> Result<Option<NodeDocument>> {
        let inner = self.inner.read()?;
        inner.check(collection, CollectionKind::Document)?;
        Ok(inner
            .nodes
            .get(collection)
            .and_then(|docs| docs.get(key))
            .cloned())
    }

    async fn edges_from(&self, collection: &str, from: &str) -> Result<Vec<EdgeDocument>> {
        let inner = self.inner.read()?;
        inner.check(collection, CollectionKind::Edge)?;
        Ok(inner
            .edges
            .get(collection)
            .map(|edges| edges.iter().filter(|e| e.from == from).cloned().collect())
            .unwrap_or_default())
    }

    async fn stats(&self) -> Result<StoreStats> {
        let inner = self.inner.read()?;
        let collections = inner
            .kinds
            .iter()
            .map(|(name, kind)| {
                let count = match kind {
                    CollectionKind::Document => inner.nodes.get(name).map_or(0, |d| d.len()),
                    CollectionKind::Edge => inner.edges.get(name).map_or(0, |e| e.len()),
                };
                (name.clone(), count)
            })
            .collect();
        Ok(StoreStats { collections })
    }
}
