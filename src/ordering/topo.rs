//! Dependency-respecting ordering over plain sequences.
//!
//! The sort visits elements in input order, so independent elements keep
//! their original relative order and the output is deterministic for a given
//! input.

use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

use crate::core::errors::{Result, SeqflowError};

/// Visitation state of one element, scoped to a single sort call.
#[derive(Clone, Copy, PartialEq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// Returns a permutation of `items` in which every element follows all of
/// its transitive dependencies.
///
/// `key_of` names an element; `deps_of` yields the keys of the elements it
/// depends on. Dependencies whose key is not present in the input are
/// treated as already satisfied and skipped. Elements with no dependency
/// relation between them keep their original relative order.
///
/// A cycle fails the whole call with [`SeqflowError::CycleDetected`] naming
/// the keys along the cycle; no partial output is produced.
pub fn sort_by_dependencies<T, K, D>(
    items: Vec<T>,
    key_of: impl Fn(&T) -> K,
    deps_of: impl Fn(&T) -> D,
) -> Result<Vec<T>>
where
    K: Eq + Hash + Clone + Display,
    D: IntoIterator<Item = K>,
{
    let mut index_of: HashMap<K, usize> = HashMap::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        // first occurrence wins when keys collide
        index_of.entry(key_of(item)).or_insert(idx);
    }

    // resolve the dependency relation to indices up front; absent keys drop out here
    let deps: Vec<Vec<usize>> = items
        .iter()
        .map(|item| {
            deps_of(item)
                .into_iter()
                .filter_map(|key| index_of.get(&key).copied())
                .collect()
        })
        .collect();

    let mut marks = vec![Mark::Unvisited; items.len()];
    let mut order: Vec<usize> = Vec::with_capacity(items.len());

    for start in 0..items.len() {
        if marks[start] != Mark::Unvisited {
            continue;
        }

        // depth-first traversal over an explicit work stack of
        // (element, next dependency position) frames, so long dependency
        // chains cannot exhaust the call stack
        let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
        marks[start] = Mark::InProgress;

        while let Some((idx, dep_pos)) = stack.pop() {
            match deps[idx].get(dep_pos) {
                Some(&dep) => {
                    stack.push((idx, dep_pos + 1));
                    match marks[dep] {
                        Mark::Unvisited => {
                            marks[dep] = Mark::InProgress;
                            stack.push((dep, 0));
                        }
                        Mark::InProgress => {
                            // the frame for `dep` is still on the stack: the
                            // slice from there down is the cycle
                            let chain = cycle_chain(&items, &key_of, &stack, dep);
                            return Err(SeqflowError::cycle(chain));
                        }
                        Mark::Done => {}
                    }
                }
                None => {
                    marks[idx] = Mark::Done;
                    order.push(idx);
                }
            }
        }
    }

    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    Ok(order
        .into_iter()
        .map(|idx| slots[idx].take().expect("every index emitted exactly once"))
        .collect())
}

fn cycle_chain<T, K>(
    items: &[T],
    key_of: &impl Fn(&T) -> K,
    stack: &[(usize, usize)],
    entry: usize,
) -> Vec<String>
where
    K: Display,
{
    let from = stack
        .iter()
        .position(|&(idx, _)| idx == entry)
        .unwrap_or(0);
    let mut chain: Vec<String> = stack[from..]
        .iter()
        .map(|&(idx, _)| key_of(&items[idx]).to_string())
        .collect();
    chain.push(key_of(&items[entry]).to_string());
    chain
}
