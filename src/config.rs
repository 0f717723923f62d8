//! Configuration loader and schema types.
//!
//! This module exposes the configuration schema used to drive the sync
//! daemon and helpers to load configuration from disk.

mod load;
mod schema;

pub use load::resolve_config_path;
pub use schema::*;

#[cfg(test)]
mod tests;
