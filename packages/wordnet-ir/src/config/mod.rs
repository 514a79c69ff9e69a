//! Parser configuration
//!
//! Two levels of control:
//! - Level 1: `ParserConfig::default()` plus builder setters
//! - Level 2: YAML file (`version: 1` envelope) for the CLI and batch jobs
//!
//! # Examples
//!
//! ```rust
//! use wordnet_ir::config::ParserConfig;
//!
//! let config = ParserConfig::default().written_form_in_sense(false);
//! assert!(!config.include_written_form_in_sense);
//! assert!(config.include_part_of_speech_in_sense);
//! ```

pub mod error;
pub mod io;
pub mod parser_config;
pub mod validation;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use io::ConfigFileV1;
pub use parser_config::ParserConfig;
pub use validation::Validatable;
