//! Hash function utilities for lookup tables
//!
//! Provides ahash-based maps with `DoS` resistance and consistent performance
//! across platforms. Used for the static property taxonomy.

use ahash::RandomState;
use std::collections::HashMap;

/// Create a new `HashMap` with the crate's hasher
///
/// # Example
///
/// ```rust
/// use bidi_lint_core::utils::hashers::create_hash_map;
///
/// let mut map = create_hash_map::<&str, i32>();
/// map.insert("margin", 4);
/// assert_eq!(map.get("margin"), Some(&4));
/// ```
#[must_use]
pub fn create_hash_map<K, V>() -> HashMap<K, V, RandomState> {
    HashMap::with_hasher(RandomState::new())
}

/// Create a new `HashMap` with specific capacity and the crate's hasher
///
/// Pre-allocates the specified capacity to avoid rehashing during construction.
#[must_use]
pub fn create_hash_map_with_capacity<K, V>(capacity: usize) -> HashMap<K, V, RandomState> {
    HashMap::with_capacity_and_hasher(capacity, RandomState::new())
}
