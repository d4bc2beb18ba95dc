//! Path reconstruction from predecessor chains and next-hop tables

use crate::graph::adjacency::{Adjacency, NodeIndex};
use crate::graph::algos::Routes;

/// Turn the routes of a search into the ordered node ids from `source` to
/// `target`, both inclusive. Returns an empty path when no route exists or
/// when either endpoint is not part of the graph.
pub fn reconstruct(
    adjacency: &Adjacency,
    routes: &Routes,
    source: &str,
    target: &str,
) -> Vec<String> {
    let (Some(src), Some(dst)) = (adjacency.index_of(source), adjacency.index_of(target))
    else {
        return Vec::new();
    };

    let indices = match routes {
        Routes::Predecessors(prev) => walk_predecessors(prev, src, dst),
        Routes::NextHop(next) => walk_next_hops(next, src, dst),
    };

    indices
        .into_iter()
        .map(|i| adjacency.id(i).to_string())
        .collect()
}

/// Follow `prev` back from `target`. The chain must end at `source`.
fn walk_predecessors(
    prev: &[Option<NodeIndex>],
    source: NodeIndex,
    target: NodeIndex,
) -> Vec<NodeIndex> {
    let mut path = vec![target];
    let mut current = target;

    while let Some(parent) = prev[current] {
        // A chain longer than the node count can only be a cycle
        if path.len() > prev.len() {
            return Vec::new();
        }
        path.push(parent);
        current = parent;
    }

    path.reverse();
    if path.first() == Some(&source) {
        path
    } else {
        Vec::new()
    }
}

/// Follow `next[u][target]` forward from `source`
fn walk_next_hops(
    next: &[Vec<Option<NodeIndex>>],
    source: NodeIndex,
    target: NodeIndex,
) -> Vec<NodeIndex> {
    if source == target {
        return vec![source];
    }
    if next[source][target].is_none() {
        return Vec::new();
    }

    let mut path = vec![source];
    let mut current = source;
    while current != target {
        let Some(hop) = next[current][target] else {
            return Vec::new();
        };
        if path.len() > next.len() {
            return Vec::new();
        }
        path.push(hop);
        current = hop;
    }
    path
}
