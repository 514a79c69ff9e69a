//! Graph loader
//!
//! Persists a parsed graph: get-or-create the four node collections and
//! the edge collection, upsert nodes keyed by `_key`, then append edges
//! whose endpoints are qualified through the relation registry.
//!
//! Every edge is materialized before the first write, so an unknown
//! category leaves the store untouched.

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info};

use wordnet_ir::{NodeCollection, RelationRegistry, WordNetGraph};

use crate::domain::{document_handle, CollectionKind, EdgeDocument, GraphStore, NodeDocument};
use crate::{Result, StorageError};

/// Default edge collection name
pub const DEFAULT_EDGE_COLLECTION: &str = "edges";

const DEFAULT_BATCH_SIZE: usize = 1000;

/// What one `load` call wrote
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Node documents written per collection
    pub nodes: BTreeMap<String, usize>,
    pub edges: usize,
    /// Collections this call had to create
    pub created_collections: Vec<String>,
}

impl LoadReport {
    pub fn node_total(&self) -> usize {
        self.nodes.values().sum()
    }
}

pub struct GraphLoader<S: GraphStore> {
    store: S,
    registry: RelationRegistry,
    edge_collection: String,
    batch_size: usize,
}

impl<S: GraphStore> GraphLoader<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            registry: RelationRegistry::default(),
            edge_collection: DEFAULT_EDGE_COLLECTION.to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    pub fn with_registry(mut self, registry: RelationRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_edge_collection(mut self, name: impl Into<String>) -> Self {
        self.edge_collection = name.into();
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn registry(&self) -> &RelationRegistry {
        &self.registry
    }

    /// Qualify every edge endpoint with its collection name
    ///
    /// Fails on the first edge whose category the registry cannot route.
    pub fn materialize_edges(&self, graph: &WordNetGraph) -> Result<Vec<EdgeDocument>> {
        graph
            .edges
            .iter()
            .map(|edge| {
                let category = edge.category.as_str();
                let pair = self.registry.lookup(category).ok_or_else(|| {
                    StorageError::unexpected_relation_category(category, &edge.from, &edge.to)
                })?;
                Ok(EdgeDocument::new(
                    document_handle(&pair.source, &edge.from),
                    document_handle(&pair.target, &edge.to),
                    &edge.relation_type,
                    category,
                ))
            })
            .collect()
    }

    /// Write the whole graph into the store
    pub async fn load(&self, graph: &WordNetGraph) -> Result<LoadReport> {
        let edges = self.materialize_edges(graph)?;
        let mut report = LoadReport::default();

        info!(
            nodes = graph.node_count(),
            edges = edges.len(),
            "loading graph"
        );

        for collection in NodeCollection::ALL {
            let name = collection.name();
            if self.store.ensure_collection(name, CollectionKind::Document).await? {
                report.created_collections.push(name.to_string());
            }

            let docs: Vec<NodeDocument> = graph
                .nodes(collection)
                .iter()
                .map(|(key, attributes)| NodeDocument::new(key.as_str(), attributes.clone()))
                .collect();

            let mut written = 0;
            for batch in docs.chunks(self.batch_size) {
                written += self.store.upsert_nodes(name, batch).await?;
            }
            debug!(collection = name, written, "nodes flushed");
            report.nodes.insert(name.to_string(), written);
        }

        if self
            .store
            .ensure_collection(&self.edge_collection, CollectionKind::Edge)
            .await?
        {
            report.created_collections.push(self.edge_collection.clone());
        }
        for batch in edges.chunks(self.batch_size) {
            report.edges += self.store.insert_edges(&self.edge_collection, batch).await?;
        }
        debug!(collection = %self.edge_collection, written = report.edges, "edges flushed");

        info!(
            nodes = report.node_total(),
            edges = report.edges,
            created = report.created_collections.len(),
            "graph loaded"
        );
        Ok(report)
    }
}
