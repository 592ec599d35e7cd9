//! Various unsorted logical operators and helpers.

pub use self::seed::{mix_seed, splitmix64};
pub use self::sorted_pair::SortedPair;

pub(crate) use self::fork::{fork_join, map_min_by_key, map_ordered};

mod fork;
pub mod hashmap;
mod seed;
mod sorted_pair;
