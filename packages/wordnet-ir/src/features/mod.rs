//! Feature modules

pub mod parsing;
