use std::cmp::Ordering;

use crate::graph::adjacency::{Adjacency, NodeIndex};
use crate::graph::types::TraceEvent;

/// How a search encodes the routes it found
#[derive(Debug, Clone, PartialEq)]
pub enum Routes {
    /// Single-source predecessor per node (`None` for the source and unreached nodes)
    Predecessors(Vec<Option<NodeIndex>>),
    /// All-pairs next-hop table: `next[i][j]` is the first hop from `i` toward `j`
    NextHop(Vec<Vec<Option<NodeIndex>>>),
}

/// Raw output of one search, indexed by [`Adjacency`] node index
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub routes: Routes,
    /// Best known distance from the source, `f64::INFINITY` if unreached
    pub distances: Vec<f64>,
    pub trace: Vec<TraceEvent>,
}

impl SearchResult {
    /// Result for a search that could not start (source not in the graph)
    pub fn unreached(node_count: usize) -> Self {
        SearchResult {
            routes: Routes::Predecessors(vec![None; node_count]),
            distances: vec![f64::INFINITY; node_count],
            trace: Vec::new(),
        }
    }

    /// Distance recorded for `node`, if it was reached
    pub fn distance_to(&self, node: NodeIndex) -> Option<f64> {
        self.distances
            .get(node)
            .copied()
            .filter(|d| d.is_finite())
    }
}

/// Cap on relaxations for the heap-based searches. Non-negative weights
/// stay far below it; a negative cycle reachable from the source would
/// otherwise keep relaxing forever.
pub fn relaxation_budget(adjacency: &Adjacency) -> usize {
    adjacency
        .len()
        .saturating_mul(adjacency.arcs().len())
        .saturating_add(adjacency.len())
}

/// Priority queue entry ordered by priority, then by node id ascending.
///
/// `rank` is the node's position in id order (see [`Adjacency::rank`]),
/// which makes the pop order independent of node insertion order.
/// Wrap in `Reverse` for min-heap behavior.
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry {
    pub priority: f64,
    pub rank: usize,
    pub node: NodeIndex,
}

impl HeapEntry {
    pub fn new(adjacency: &Adjacency, node: NodeIndex, priority: f64) -> Self {
        HeapEntry {
            priority,
            rank: adjacency.rank(node),
            node,
        }
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.rank.cmp(&other.rank))
    }
}
