//! Configuration model for gpic.
//!
//! This module defines the Config struct that an optional `--config` YAML file
//! deserializes into. It supports forward-compatible YAML parsing (unknown
//! fields are ignored), defaults for every field, and validation of values.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::Config;
