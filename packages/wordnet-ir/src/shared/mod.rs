//! Shared kernel: graph models, identifier utilities, relation registry

pub mod models;
pub mod registry;
pub mod utils;
