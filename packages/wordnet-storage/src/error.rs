//! Error types for wordnet-storage

use std::fmt;
use std::sync::PoisonError;
use thiserror::Error;

/// Storage error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Database errors (SQLite)
    Database,
    /// Serialization/deserialization errors
    Serialization,
    /// Edge category absent from the relation registry
    UnexpectedRelationCategory,
    /// Write or read against a collection that was never created
    CollectionNotFound,
    /// The markup transform failed before anything was stored
    Parse,
    /// Configuration errors
    Config,
    /// I/O errors
    IO,
    /// Internal errors (poisoned locks)
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Database => "database",
            ErrorKind::Serialization => "serialization",
            ErrorKind::UnexpectedRelationCategory => "unexpected_relation_category",
            ErrorKind::CollectionNotFound => "collection_not_found",
            ErrorKind::Parse => "parse",
            ErrorKind::Config => "config",
            ErrorKind::IO => "io",
            ErrorKind::Internal => "internal",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Storage error type
#[derive(Debug, Error)]
#[error("[{kind}] {message}")]
pub struct StorageError {
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
    pub kind: ErrorKind,
    pub message: String,
}

impl StorageError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    // Convenience constructors
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization, message)
    }

    /// Reports the category together with both endpoints
    pub fn unexpected_relation_category(category: &str, from: &str, to: &str) -> Self {
        Self::new(
            ErrorKind::UnexpectedRelationCategory,
            format!(
                "Unexpected relation category '{}' for edge {} -> {}",
                category, from, to
            ),
        )
    }

    pub fn collection_not_found(name: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::CollectionNotFound,
            format!("Collection not found: {}", name.into()),
        )
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

// SQLite error conversions
#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        StorageError::database(format!("SQLite error: {}", err)).with_source(err)
    }
}

// JSON error conversions
impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::serialization(format!("JSON error: {}", err)).with_source(err)
    }
}

impl From<wordnet_ir::WordNetError> for StorageError {
    fn from(err: wordnet_ir::WordNetError) -> Self {
        StorageError::new(ErrorKind::Parse, err.to_string()).with_source(err)
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::new(ErrorKind::IO, format!("IO error: {}", err)).with_source(err)
    }
}

impl<T> From<PoisonError<T>> for StorageError {
    fn from(err: PoisonError<T>) -> Self {
        StorageError::internal(format!("Store lock poisoned: {}", err))
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, StorageError>;
