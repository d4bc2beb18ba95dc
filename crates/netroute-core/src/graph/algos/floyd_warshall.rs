use crate::graph::adjacency::{Adjacency, NodeIndex};
use crate::graph::algos::shared::{Routes, SearchResult};
use crate::graph::types::Graph;

/// Dense all-pairs distance and next-hop matrices
#[derive(Debug, Clone)]
pub struct AllPairs {
    /// `dist[i][j]`: shortest known distance from `i` to `j`, `+∞` if unconnected
    pub dist: Vec<Vec<f64>>,
    /// `next[i][j]`: first hop from `i` toward `j`, `None` if unconnected
    pub next: Vec<Vec<Option<NodeIndex>>>,
}

/// Floyd-Warshall all-pairs shortest paths.
///
/// Initialization applies edges in graph order, so among parallel edges the
/// last one wins. Undirected edges fill both cells. The diagonal is `0` with
/// `next[i][i] = i`. `O(V^3)` time and `O(V^2)` memory; bounding the graph
/// size is the caller's job.
pub fn all_pairs(graph: &Graph, adjacency: &Adjacency) -> AllPairs {
    let n = adjacency.len();
    let mut dist = vec![vec![f64::INFINITY; n]; n];
    let mut next = vec![vec![None; n]; n];

    for i in 0..n {
        dist[i][i] = 0.0;
        next[i][i] = Some(i);
    }

    for edge in graph.edges() {
        let (Some(s), Some(t)) = (
            adjacency.index_of(&edge.source),
            adjacency.index_of(&edge.target),
        ) else {
            continue;
        };
        // Self-loops never beat the zero diagonal
        if s == t {
            continue;
        }
        dist[s][t] = edge.weight;
        next[s][t] = Some(t);
        if !adjacency.is_directed() {
            dist[t][s] = edge.weight;
            next[t][s] = Some(s);
        }
    }

    for k in 0..n {
        for i in 0..n {
            if !dist[i][k].is_finite() {
                continue;
            }
            for j in 0..n {
                let through = dist[i][k] + dist[k][j];
                if through < dist[i][j] {
                    dist[i][j] = through;
                    next[i][j] = next[i][k];
                }
            }
        }
    }

    AllPairs { dist, next }
}

/// Single-pair view over [`all_pairs`]. Produces no trace; the routes are
/// the full next-hop table and the distances are the source's row.
#[tracing::instrument(skip(graph, adjacency), fields(nodes = adjacency.len()))]
pub fn floyd_warshall_search(
    graph: &Graph,
    adjacency: &Adjacency,
    source: &str,
    target: &str,
) -> SearchResult {
    let n = adjacency.len();
    let Some(start) = adjacency.index_of(source) else {
        return SearchResult::unreached(n);
    };

    let AllPairs { mut dist, next } = all_pairs(graph, adjacency);
    let distances = std::mem::take(&mut dist[start]);

    tracing::debug!(
        reachable = distances.iter().filter(|d| d.is_finite()).count(),
        "floyd-warshall complete"
    );

    SearchResult {
        routes: Routes::NextHop(next),
        distances,
        trace: Vec::new(),
    }
}
