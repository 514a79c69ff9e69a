//! Application layer - graph loading

pub mod graph_loader;

pub use graph_loader::{GraphLoader, LoadReport};
