use crate::error::{Result, RouteError};
use crate::graph::adjacency::Adjacency;
use crate::graph::algos::shared::{Routes, SearchResult};
use crate::graph::types::TraceEvent;

/// Single-source shortest paths by Bellman-Ford, negative weights allowed.
///
/// Runs at most `|V| - 1` passes over the relaxation arcs in edge order (an
/// undirected edge is two independent arcs). Each successful relaxation
/// records an `update` event. A pass with no change ends the loop early.
///
/// A final pass over all arcs detects negative cycles. Arcs leaving an
/// unreached node never relax, so only cycles reachable from `source` are
/// reported.
#[tracing::instrument(
    skip(adjacency),
    fields(nodes = adjacency.len(), arcs = adjacency.arcs().len())
)]
pub fn bellman_ford_search(
    adjacency: &Adjacency,
    source: &str,
    target: &str,
) -> Result<SearchResult> {
    let n = adjacency.len();
    let Some(start) = adjacency.index_of(source) else {
        return Ok(SearchResult::unreached(n));
    };

    let mut dist = vec![f64::INFINITY; n];
    let mut prev = vec![None; n];
    let mut trace = Vec::new();
    dist[start] = 0.0;

    let mut passes = 0usize;
    for _ in 0..n.saturating_sub(1) {
        passes += 1;
        let mut changed = false;

        for arc in adjacency.arcs() {
            if !dist[arc.from].is_finite() {
                continue;
            }
            let candidate = dist[arc.from] + arc.weight;
            if candidate < dist[arc.to] {
                dist[arc.to] = candidate;
                prev[arc.to] = Some(arc.from);
                changed = true;
                trace.push(TraceEvent::Update {
                    update: adjacency.id(arc.to).to_string(),
                    dist: candidate,
                });
            }
        }

        if !changed {
            break;
        }
    }

    let cycle = adjacency
        .arcs()
        .iter()
        .find(|arc| dist[arc.from].is_finite() && dist[arc.from] + arc.weight < dist[arc.to]);
    if let Some(arc) = cycle {
        tracing::debug!(
            from = adjacency.id(arc.from),
            to = adjacency.id(arc.to),
            passes,
            "negative cycle detected"
        );
        return Err(RouteError::NegativeCycleDetected);
    }

    let reached = adjacency
        .index_of(target)
        .is_some_and(|goal| dist[goal].is_finite());
    tracing::debug!(passes, updates = trace.len(), reached, "bellman-ford complete");

    Ok(SearchResult {
        routes: Routes::Predecessors(prev),
        distances: dist,
        trace,
    })
}
