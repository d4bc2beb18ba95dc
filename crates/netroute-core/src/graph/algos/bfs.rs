use std::collections::VecDeque;

use crate::graph::adjacency::Adjacency;
use crate::graph::algos::shared::{Routes, SearchResult};
use crate::graph::types::TraceEvent;

/// Unweighted shortest path by breadth-first search.
///
/// Nodes are marked visited when enqueued, so each node is dequeued at most
/// once, at its minimum hop distance. A `visit` event is recorded per
/// dequeue and the search stops as soon as `target` is dequeued. Edge weights
/// are ignored; `distances` holds hop counts.
#[tracing::instrument(skip(adjacency), fields(nodes = adjacency.len()))]
pub fn bfs_search(adjacency: &Adjacency, source: &str, target: &str) -> SearchResult {
    let n = adjacency.len();
    let Some(start) = adjacency.index_of(source) else {
        return SearchResult::unreached(n);
    };
    let goal = adjacency.index_of(target);

    let mut visited = vec![false; n];
    let mut prev = vec![None; n];
    let mut hops = vec![f64::INFINITY; n];
    let mut queue = VecDeque::new();
    let mut trace = Vec::new();

    visited[start] = true;
    hops[start] = 0.0;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        trace.push(TraceEvent::Visit {
            visit: adjacency.id(current).to_string(),
        });

        if Some(current) == goal {
            break;
        }

        for &(next, _) in adjacency.neighbors(current) {
            if !visited[next] {
                visited[next] = true;
                prev[next] = Some(current);
                hops[next] = hops[current] + 1.0;
                queue.push_back(next);
            }
        }
    }

    tracing::debug!(visited = trace.len(), "bfs complete");

    SearchResult {
        routes: Routes::Predecessors(prev),
        distances: hops,
        trace,
    }
}
