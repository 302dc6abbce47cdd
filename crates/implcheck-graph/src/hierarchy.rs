//! Inheritance cycle detection.
//!
//! The contract validator tolerates cyclic graphs through its depth bound,
//! but a cycle is always a malformed declaration. Loaders call
//! [`find_inheritance_cycle`] for every type before checking contracts so the
//! cycle can be reported once, on the type that closes it.

use crate::def::DefId;
use crate::graph::TypeGraph;
use rustc_hash::FxHashSet;

/// Direct base types of `def`: superclass first, then super-interfaces in
/// declaration order.
pub fn direct_bases<G: TypeGraph + ?Sized>(graph: &G, def: DefId) -> Vec<DefId> {
    let mut bases = Vec::new();
    if let Some(parent) = graph.superclass_of(def) {
        bases.push(parent);
    }
    bases.extend(graph.super_interfaces_of(def));
    bases
}

/// Return the path `start -> ... -> start` if following base edges from
/// `start` leads back to it, `None` otherwise.
///
/// Cycles that do not pass through `start` are not reported here; they are
/// found when the walk starts from one of their members.
pub fn find_inheritance_cycle<G: TypeGraph + ?Sized>(graph: &G, start: DefId) -> Option<Vec<DefId>> {
    let mut visited = FxHashSet::default();
    let mut path = vec![start];
    for base in direct_bases(graph, start) {
        if reaches(graph, base, start, &mut visited, &mut path) {
            return Some(path);
        }
    }
    None
}

fn reaches<G: TypeGraph + ?Sized>(
    graph: &G,
    current: DefId,
    target: DefId,
    visited: &mut FxHashSet<DefId>,
    path: &mut Vec<DefId>,
) -> bool {
    path.push(current);
    if current == target {
        return true;
    }
    // Nodes already explored from this start cannot lead back to it.
    if !visited.insert(current) {
        path.pop();
        return false;
    }

    for base in direct_bases(graph, current) {
        if reaches(graph, base, target, visited, path) {
            return true;
        }
    }

    path.pop();
    false
}
