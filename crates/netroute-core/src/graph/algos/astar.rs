use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::graph::adjacency::Adjacency;
use crate::graph::algos::shared::{relaxation_budget, HeapEntry, Routes, SearchResult};
use crate::graph::types::{Graph, Node, TraceEvent};

/// Straight-line distance between two nodes' coordinates.
///
/// Returns `0.0` when either node lacks `x` or `y`, which turns A* into a
/// uniform-cost search for that pair.
pub fn euclidean(graph: &Graph, a: &str, b: &str) -> f64 {
    let coords = |id: &str| graph.node(id).and_then(Node::coords);
    straight_line(coords(a), coords(b))
}

fn straight_line(a: Option<(f64, f64)>, b: Option<(f64, f64)>) -> f64 {
    match (a, b) {
        (Some((ax, ay)), Some((bx, by))) => (ax - bx).hypot(ay - by),
        _ => 0.0,
    }
}

/// `h(node, target)` for every node, in adjacency index order (graph order)
fn heuristic_table(graph: &Graph, target: &str) -> Vec<f64> {
    let goal = graph.node(target).and_then(Node::coords);
    graph
        .nodes()
        .iter()
        .map(|node| straight_line(node.coords(), goal))
        .collect()
}

/// Shortest path guided by the Euclidean heuristic.
///
/// The frontier is a min-heap on `(f, node id)` with `f = g + h`. Every
/// dequeue records a `pop` event carrying `f`, including repeated dequeues of
/// a node that was relaxed more than once. Admissibility of the heuristic is
/// the caller's concern: it holds for non-negative weights on a genuinely
/// Euclidean layout. Like Dijkstra, the search stops after
/// [`relaxation_budget`] relaxations. With an inadmissible heuristic a node
/// can be reopened many times, and a search that exhausts the budget returns
/// whatever route it has so far, which may be longer than optimal or empty.
#[tracing::instrument(skip(graph, adjacency), fields(nodes = adjacency.len()))]
pub fn astar_search(
    graph: &Graph,
    adjacency: &Adjacency,
    source: &str,
    target: &str,
) -> SearchResult {
    let n = adjacency.len();
    let Some(start) = adjacency.index_of(source) else {
        return SearchResult::unreached(n);
    };
    let goal = adjacency.index_of(target);
    let h = heuristic_table(graph, target);

    let mut g = vec![f64::INFINITY; n];
    let mut prev = vec![None; n];
    let mut heap = BinaryHeap::new();
    let mut trace = Vec::new();
    let mut budget = relaxation_budget(adjacency);

    g[start] = 0.0;
    heap.push(Reverse(HeapEntry::new(adjacency, start, h[start])));

    while let Some(Reverse(HeapEntry {
        priority: f,
        node: current,
        ..
    })) = heap.pop()
    {
        trace.push(TraceEvent::Expand {
            pop: adjacency.id(current).to_string(),
            f,
        });

        if Some(current) == goal {
            break;
        }
        if budget == 0 {
            tracing::debug!("relaxation budget exhausted, stopping");
            break;
        }

        for &(next, weight) in adjacency.neighbors(current) {
            let tentative = g[current] + weight;
            if tentative < g[next] {
                budget = budget.saturating_sub(1);
                g[next] = tentative;
                prev[next] = Some(current);
                heap.push(Reverse(HeapEntry::new(adjacency, next, tentative + h[next])));
            }
        }
    }

    tracing::debug!(expanded = trace.len(), "astar complete");

    SearchResult {
        routes: Routes::Predecessors(prev),
        distances: g,
        trace,
    }
}
