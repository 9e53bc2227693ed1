//! Scenario tests for dependency-respecting ordering.

use std::collections::HashMap;

use seqflow::{sort_by_dependencies, SeqflowError};

#[derive(Clone, Debug)]
struct Pkg {
    name: &'static str,
    needs: Vec<&'static str>,
}

fn pkg(name: &'static str, needs: &[&'static str]) -> Pkg {
    Pkg {
        name,
        needs: needs.to_vec(),
    }
}

fn sort(pkgs: Vec<Pkg>) -> Result<Vec<&'static str>, SeqflowError> {
    sort_by_dependencies(pkgs, |p| p.name, |p| p.needs.clone())
        .map(|sorted| sorted.into_iter().map(|p| p.name).collect())
}

/// Every dependency present in the input must land before its dependent.
fn assert_respects_dependencies(pkgs: &[Pkg], order: &[&'static str]) {
    let position: HashMap<_, _> = order.iter().enumerate().map(|(i, n)| (*n, i)).collect();
    assert_eq!(order.len(), pkgs.len(), "output must be a permutation");
    for p in pkgs {
        for need in &p.needs {
            if let Some(&dep_pos) = position.get(need) {
                assert!(
                    dep_pos < position[p.name],
                    "{} must come before {}",
                    need,
                    p.name
                );
            }
        }
    }
}

#[test]
fn test_diamond_graph_is_a_valid_permutation() {
    let pkgs = vec![
        pkg("app", &["lib_a", "lib_b"]),
        pkg("lib_a", &["base"]),
        pkg("lib_b", &["base"]),
        pkg("base", &[]),
    ];
    let order = sort(pkgs.clone()).unwrap();
    assert_respects_dependencies(&pkgs, &order);
    // input order is preserved between the unrelated siblings
    let a = order.iter().position(|n| *n == "lib_a").unwrap();
    let b = order.iter().position(|n| *n == "lib_b").unwrap();
    assert!(a < b);
}

#[test]
fn test_independent_elements_are_stable() {
    let pkgs = vec![
        pkg("one", &[]),
        pkg("two", &[]),
        pkg("three", &[]),
        pkg("four", &[]),
    ];
    let order = sort(pkgs).unwrap();
    assert_eq!(order, vec!["one", "two", "three", "four"]);
}

#[test]
fn test_dependencies_outside_the_input_are_satisfied() {
    let pkgs = vec![
        pkg("tool", &["preinstalled", "lib"]),
        pkg("lib", &["system-runtime"]),
    ];
    let order = sort(pkgs).unwrap();
    assert_eq!(order, vec!["lib", "tool"]);
}

#[test]
fn test_cycle_fails_with_the_offending_chain() {
    let pkgs = vec![
        pkg("a", &["b"]),
        pkg("b", &["c"]),
        pkg("c", &["a"]),
        pkg("standalone", &[]),
    ];
    let err = sort(pkgs).unwrap_err();
    match err {
        SeqflowError::CycleDetected { chain } => {
            assert_eq!(chain, vec!["a", "b", "c", "a"]);
        }
        other => panic!("expected cycle error, got {other:?}"),
    }
}

#[test]
fn test_cycle_yields_no_partial_output() {
    // the cycle sits behind a healthy prefix; the whole call still fails
    let pkgs = vec![
        pkg("healthy", &[]),
        pkg("x", &["y"]),
        pkg("y", &["x"]),
    ];
    assert!(sort(pkgs).is_err());
}

#[test]
fn test_transitive_chain_orders_fully() {
    let pkgs = vec![
        pkg("e", &["d"]),
        pkg("d", &["c"]),
        pkg("c", &["b"]),
        pkg("b", &["a"]),
        pkg("a", &[]),
    ];
    assert_eq!(sort(pkgs).unwrap(), vec!["a", "b", "c", "d", "e"]);
}
