//! WordNet graph storage
//!
//! Sink side of the transform: takes a [`WordNetGraph`](wordnet_ir::WordNetGraph)
//! and persists its node mappings and edge list into a document/edge
//! graph store.
//!
//! ## Layers
//!
//! - `domain`: `GraphStore` port, node and edge documents
//! - `infrastructure`: in-memory and SQLite adapters
//! - `application`: `GraphLoader` (registry-driven edge materialization)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wordnet_storage::{GraphLoader, InMemoryGraphStore};
//!
//! let graph = wordnet_ir::parse_wordnet_file("english-wordnet.xml", Default::default())?;
//! let loader = GraphLoader::new(InMemoryGraphStore::new());
//! let report = loader.load(&graph).await?;
//! println!("{} edges written", report.edges);
//! ```

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::{ErrorKind, Result, StorageError};

pub use application::{GraphLoader, LoadReport};
pub use domain::{CollectionKind, EdgeDocument, GraphStore, NodeDocument, StoreStats};
pub use infrastructure::InMemoryGraphStore;

#[cfg(feature = "sqlite")]
pub use infrastructure::SqliteGraphStore;
