use std::hash::BuildHasherDefault;

use indexmap::IndexMap;
use rustc_hash::FxHasher;

/// Insertion-ordered map used everywhere ordering is part of the output
/// contract. Equality ignores order, so two maps with the same pairs
/// compare equal even when built along different paths.
pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;
