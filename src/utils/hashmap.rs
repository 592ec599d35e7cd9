//! Hash-map and hash-set aliases used throughout this crate.
//!
//! Iteration order of these containers is not deterministic: code whose
//! result depends on visiting order sorts the relevant keys first.

/// Hashmap using [`hashbrown::HashMap`].
pub type HashMap<K, V> = hashbrown::HashMap<K, V>;

/// Hashset using [`hashbrown::HashSet`].
pub type HashSet<K> = hashbrown::HashSet<K>;
