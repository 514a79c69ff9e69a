//! Utility modules shared across features
//!
//! - `sanitize`: Identifier rewriting for graph-store keys

pub mod sanitize;

pub use sanitize::{sanitize_id, IdSanitizer, SanitizeRule};
