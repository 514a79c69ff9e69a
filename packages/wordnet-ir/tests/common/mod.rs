//! Common test utilities for wordnet-ir
//!
//! Fixture builders for small LMF documents plus graph assertions.

#![allow(dead_code)]

mod assertions;
mod fixtures;

pub use assertions::*;
pub use fixtures::*;
