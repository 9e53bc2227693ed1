//! Order-sensitive and order-insensitive combining hashes.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Multiplier of the order-sensitive fold.
const SEQUENCED_FOLD: u64 = 397;

fn element_hash<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Order-sensitive combining hash: each step folds
/// `hash = hash * 397 XOR element_hash` (wrapping), so reordering the
/// sequence changes the result.
pub fn sequenced_hash<T: Hash>(items: &[T]) -> u64 {
    items.iter().fold(0u64, |acc, item| {
        acc.wrapping_mul(SEQUENCED_FOLD) ^ element_hash(item)
    })
}

/// Order-sensitive hash over extracted keys. Absent (`None`) keys contribute
/// a zero hash but still advance the fold.
pub fn sequenced_hash_by_key<T, K: Hash>(items: &[T], key_of: impl Fn(&T) -> Option<K>) -> u64 {
    items.iter().fold(0u64, |acc, item| {
        let h = key_of(item).map(|key| element_hash(&key)).unwrap_or(0);
        acc.wrapping_mul(SEQUENCED_FOLD) ^ h
    })
}

/// Order-insensitive hash: pure XOR accumulation of element hashes, so
/// reordering never changes the result. The multiset comparison in
/// `compare` uses this as a cheap pre-filter.
pub fn unsequenced_hash<T: Hash>(items: &[T]) -> u64 {
    items.iter().fold(0u64, |acc, item| acc ^ element_hash(item))
}

/// Order-insensitive hash over extracted keys; absent (`None`) keys
/// contribute a zero hash.
pub fn unsequenced_hash_by_key<T, K: Hash>(items: &[T], key_of: impl Fn(&T) -> Option<K>) -> u64 {
    items.iter().fold(0u64, |acc, item| {
        acc ^ key_of(item).map(|key| element_hash(&key)).unwrap_or(0)
    })
}
