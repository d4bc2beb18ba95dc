use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::graph::adjacency::Adjacency;
use crate::graph::algos::shared::{relaxation_budget, HeapEntry, Routes, SearchResult};
use crate::graph::types::TraceEvent;

/// Weighted shortest path from `source` using Dijkstra's algorithm.
///
/// Precondition: all edge weights are non-negative. This is not checked,
/// but the search gives up after [`relaxation_budget`] relaxations so a
/// negative cycle cannot hang it.
///
/// The frontier is a min-heap on `(distance, node id)`, so equal distances
/// pop in ascending id order regardless of graph insertion order. Stale
/// entries (popped distance greater than the best known one) are dropped
/// without a trace event. Every other pop records a `pop` event, and the
/// search ends right after the target's pop.
#[tracing::instrument(skip(adjacency), fields(nodes = adjacency.len()))]
pub fn dijkstra_search(adjacency: &Adjacency, source: &str, target: &str) -> SearchResult {
    let n = adjacency.len();
    let Some(start) = adjacency.index_of(source) else {
        return SearchResult::unreached(n);
    };
    let goal = adjacency.index_of(target);

    let mut dist = vec![f64::INFINITY; n];
    let mut prev = vec![None; n];
    let mut heap = BinaryHeap::new();
    let mut trace = Vec::new();
    let mut stale = 0usize;
    let mut budget = relaxation_budget(adjacency);

    dist[start] = 0.0;
    heap.push(Reverse(HeapEntry::new(adjacency, start, 0.0)));

    while let Some(Reverse(HeapEntry {
        priority: popped,
        node: current,
        ..
    })) = heap.pop()
    {
        if popped > dist[current] {
            stale += 1;
            continue;
        }

        trace.push(TraceEvent::Pop {
            pop: adjacency.id(current).to_string(),
            dist: popped,
        });

        if Some(current) == goal {
            break;
        }

        if budget == 0 {
            tracing::debug!("relaxation budget exhausted, stopping");
            break;
        }

        for &(next, weight) in adjacency.neighbors(current) {
            let candidate = popped + weight;
            if candidate < dist[next] {
                budget = budget.saturating_sub(1);
                dist[next] = candidate;
                prev[next] = Some(current);
                heap.push(Reverse(HeapEntry::new(adjacency, next, candidate)));
            }
        }
    }

    tracing::debug!(popped = trace.len(), stale, "dijkstra complete");

    SearchResult {
        routes: Routes::Predecessors(prev),
        distances: dist,
        trace,
    }
}
