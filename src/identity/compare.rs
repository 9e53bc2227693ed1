//! Order-sensitive and order-insensitive collection equality.

use std::collections::HashMap;
use std::hash::Hash;

use super::hashing::{unsequenced_hash, unsequenced_hash_by_key};

/// True iff `a` and `b` have equal length and are elementwise equal in order.
pub fn sequenced_equals<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x == y)
}

/// Elementwise-in-order equality over extracted keys. An absent (`None`)
/// key pairs only with another absent key.
pub fn sequenced_equals_by_key<T, K: PartialEq>(
    a: &[T],
    b: &[T],
    key_of: impl Fn(&T) -> Option<K>,
) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| key_of(x) == key_of(y))
}

/// True iff `a` and `b` have equal length and are equal as multisets: every
/// element of `a` matches an element of `b` with equal multiplicity, order
/// irrelevant.
pub fn unsequenced_equals<T: Eq + Hash>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    // the XOR hash is order-insensitive: a cheap reject before counting
    if unsequenced_hash(a) != unsequenced_hash(b) {
        return false;
    }
    multiset_counts(a) == multiset_counts(b)
}

/// Multiset equality over extracted keys; absent (`None`) keys are dropped
/// from both sides before counting. Raw lengths must still match.
pub fn unsequenced_equals_by_key<T, K: Eq + Hash>(
    a: &[T],
    b: &[T],
    key_of: impl Fn(&T) -> Option<K>,
) -> bool {
    if a.len() != b.len() {
        return false;
    }
    if unsequenced_hash_by_key(a, &key_of) != unsequenced_hash_by_key(b, &key_of) {
        return false;
    }
    key_counts(a, &key_of) == key_counts(b, &key_of)
}

fn multiset_counts<T: Eq + Hash>(items: &[T]) -> HashMap<&T, usize> {
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }
    counts
}

fn key_counts<T, K: Eq + Hash>(items: &[T], key_of: &impl Fn(&T) -> Option<K>) -> HashMap<K, usize> {
    let mut counts = HashMap::new();
    for key in items.iter().filter_map(key_of) {
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}
