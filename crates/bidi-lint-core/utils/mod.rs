//! Utility functions and shared types for bidi-lint core
//!
//! Contains the crate-wide error type and hashing helpers used by the
//! property taxonomy.

pub mod errors;
pub mod hashers;

pub use errors::CoreError;
pub use hashers::{create_hash_map, create_hash_map_with_capacity};
