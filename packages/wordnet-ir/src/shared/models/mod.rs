//! Shared models

mod attributes;
mod edge;
mod error;
mod graph;

pub use attributes::{keys, AttrValue, Attributes, RESERVED_SENSE_KEYS, RESERVED_SYNSET_KEYS};
pub use edge::{relation_types, Edge, RelationCategory};
pub use error::{ErrorKind, Result, WordNetError};
pub use graph::{GraphStats, NodeCollection, NodeMap, WordNetGraph};
