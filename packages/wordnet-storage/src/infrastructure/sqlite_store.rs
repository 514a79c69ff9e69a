//! SQLite graph store
//!
//! File-based persistent storage using SQLite. Node attribute bags are
//! stored as JSON text; edges keep their insertion order through the
//! rowid.

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::debug;

use crate::domain::{CollectionKind, EdgeDocument, GraphStore, NodeDocument, StoreStats};
use crate::{Result, StorageError};

/// SQLite-based GraphStore implementation
#[derive(Clone)]
pub struct SqliteGraphStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteGraphStore {
    /// Open (or create) a store at the given path
    pub fn new(db_path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(db_path)?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Create an in-memory SQLite store (for testing)
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        let conn = self.conn.lock()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS collections (
                name TEXT PRIMARY KEY,
                kind TEXT NOT NULL
            )",
            [],
        )?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS nodes (
                collection TEXT NOT NULL,
                key TEXT NOT NULL,
                attrs TEXT NOT NULL,
                PRIMARY KEY (collection, key),
                FOREIGN KEY (collection) REFERENCES collections(name)
            )",
            [],
        )?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS edges (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                collection TEXT NOT NULL,
                from_handle TEXT NOT NULL,
                to_handle TEXT NOT NULL,
                relation_type TEXT NOT NULL,
                category TEXT NOT NULL,
                FOREIGN KEY (collection) REFERENCES collections(name)
            )",
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_edges_from
             ON edges(collection, from_handle)",
            [],
        )?;

        Ok(())
    }

    fn collection_kind(conn: &Connection, name: &str) -> Result<Option<CollectionKind>> {
        let kind: Option<String> = conn
            .query_row(
                "SELECT kind FROM collections WHERE name = ?1",
                params![name],
                |row| row.get(0),
            )
            .optional()?;

        kind.map(|k| {
            CollectionKind::parse(&k).ok_or_else(|| {
                StorageError::database(format!("Collection {} has unknown kind '{}'", name, k))
            })
        })
        .transpose()
    }

    fn check(conn: &Connection, name: &str, expected: CollectionKind) -> Result<()> {
        match Self::collection_kind(conn, name)? {
            None => Err(StorageError::collection_not_found(name)),
            Some(kind) if kind != expected => Err(StorageError::config(format!(
                "Collection {} is a {} collection, not {}",
                name, kind, expected
            ))),
            Some(_) => Ok(()),
        }
    }
}

#[async_trait]
impl GraphStore for SqliteGraphStore {
    async fn ensure_collection(&self, name: &str, kind: CollectionKind) -> Result<bool> {
        let conn = self.conn.lock()?;
        if Self::collection_kind(&conn, name)?.is_some() {
            Self::check(&conn, name, kind)?;
            return Ok(false);
        }
        conn.execute(
            "INSERT INTO collections (name, kind) VALUES (?1, ?2)",
            params![name, kind.as_str()],
        )?;
        Ok(true)
    }

    async fn has_collection(&self, name: &str) -> Result<bool> {
        let conn = self.conn.lock()?;
        Ok(Self::collection_kind(&conn, name)?.is_some())
    }

    async fn upsert_nodes(&self, collection: &str, nodes: &[NodeDocument]) -> Result<usize> {
        let conn = self.conn.lock()?;
        Self::check(&conn, collection, CollectionKind::Document)?;

        let tx = conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT OR REPLACE INTO nodes (collection, key, attrs) VALUES (?1, ?2, ?3)",
            )?;
            for node in nodes {
                let attrs = serde_json::to_string(&node.attributes)?;
                stmt.execute(params![collection, &node.key, attrs])?;
            }
        }
        tx.commit()?;

        debug!(collection, count = nodes.len(), "upserted nodes");
        Ok(nodes.len())
    }

    async fn insert_edges(&self, collection: &str, edges: &[EdgeDocument]) -> Result<usize> {
        let conn = self.conn.lock()?;
        Self::check(&conn, collection, CollectionKind::Edge)?;

        let tx = conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO edges (collection, from_handle, to_handle, relation_type, category)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for edge in edges {
                stmt.execute(params![
                    collection,
                    &edge.from,
                    &edge.to,
                    &edge.relation_type,
                    &edge.category
                ])?;
            }
        }
        tx.commit()?;

        debug!(collection, count = edges.len(), "inserted edges");
        Ok(edges.len())
    }

    async fn get_node(&self, collection: &str, key: &str) -> Result<Option<NodeDocument>> {
        let conn = self.conn.lock()?;
        Self::check(&conn, collection, CollectionKind::Document)?;

        let attrs: Option<String> = conn
            .query_row(
                "SELECT attrs FROM nodes WHERE collection = ?1 AND key = ?2",
                params![collection, key],
                |row| row.get(0),
            )
            .optional()?;

        match attrs {
            Some(json) => Ok(Some(NodeDocument::new(key, serde_json::from_str(&json)?))),
            None => Ok(None),
        }
    }

    async fn edges_from(&self, collection: &str, from: &str) -> Result<Vec<EdgeDocument>> {
        let conn = self.conn.lock()?;
        Self::check(&conn, collection, CollectionKind::Edge)?;

        let mut stmt = conn.prepare(
            "SELECT from_handle, to_handle, relation_type, category FROM edges
             WHERE collection = ?1 AND from_handle = ?2
             ORDER BY id",
        )?;
        let rows = stmt.query_map(params![collection, from], |row| {
            Ok(EdgeDocument {
                from: row.get(0)?,
                to: row.get(1)?,
                relation_type: row.get(2)?,
                category: row.get(3)?,
            })
        })?;

        let mut edges = Vec::new();
        for row in rows {
            edges.push(row?);
        }
        Ok(edges)
    }

    async fn stats(&self) -> Result<StoreStats> {
        let conn = self.conn.lock()?;

        let mut stmt = conn.prepare(
            "SELECT c.name,
                    CASE c.kind
                        WHEN 'edge' THEN (SELECT COUNT(*) FROM edges e WHERE e.collection = c.name)
                        ELSE (SELECT COUNT(*) FROM nodes n WHERE n.collection = c.name)
                    END
             FROM collections c",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
        })?;

        let mut stats = StoreStats::default();
        for row in rows {
            let (name, count) = row?;
            stats.collections.insert(name, count as usize);
        }
        Ok(stats)
    }
}
