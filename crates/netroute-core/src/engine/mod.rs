//! Engine façade: one entry point for every search
//!
//! [`run`] resolves the algorithm name, builds the adjacency, runs the search,
//! reconstructs the path and computes metrics. Each call owns all of its
//! working state, so a `Graph` can be shared read-only across threads.

pub mod metrics;

use std::fmt;
use std::time::Instant;

use serde::Serialize;

use crate::error::Result;
use crate::graph::algos::{
    astar_search, bellman_ford_search, bfs_search, dijkstra_search, floyd_warshall_search,
    SearchResult,
};
use crate::graph::{reconstruct, Adjacency, Graph, Options, TraceEvent};
use crate::trace_time;

pub use metrics::Metrics;

/// The five supported search algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Algorithm {
    #[serde(rename = "bfs")]
    Bfs,
    #[serde(rename = "dijkstra")]
    Dijkstra,
    #[serde(rename = "bellman-ford")]
    BellmanFord,
    #[serde(rename = "astar")]
    AStar,
    #[serde(rename = "floyd-warshall")]
    FloydWarshall,
}

impl Algorithm {
    /// Every algorithm, in comparison order
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bfs,
        Algorithm::Dijkstra,
        Algorithm::BellmanFord,
        Algorithm::AStar,
        Algorithm::FloydWarshall,
    ];

    /// Canonical name
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::BellmanFord => "bellman-ford",
            Algorithm::AStar => "astar",
            Algorithm::FloydWarshall => "floyd-warshall",
        }
    }

    /// Accepted spellings, matched after trimming and lowercasing
    pub fn synonyms(&self) -> &'static [&'static str] {
        match self {
            Algorithm::Bfs => &["bfs", "breadth-first", "breadthfirst"],
            Algorithm::Dijkstra => &["dijkstra"],
            Algorithm::BellmanFord => &["bellman-ford", "bellmanford", "bellman"],
            Algorithm::AStar => &["a*", "astar", "a-star"],
            Algorithm::FloydWarshall => &["floyd", "floyd-warshall", "floydwarshall"],
        }
    }

    /// Look up an algorithm by any of its synonyms, case-insensitively
    pub fn lookup(name: &str) -> Option<Algorithm> {
        let wanted = name.trim().to_lowercase();
        Algorithm::ALL
            .into_iter()
            .find(|alg| alg.synonyms().contains(&wanted.as_str()))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of resolving a requested algorithm name.
///
/// Unrecognized names select Dijkstra. This is the documented default, and
/// `substituted` lets callers detect it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub algorithm: Algorithm,
    pub substituted: bool,
}

impl Selection {
    pub fn resolve(name: &str) -> Self {
        match Algorithm::lookup(name) {
            Some(algorithm) => Selection {
                algorithm,
                substituted: false,
            },
            None => Selection {
                algorithm: Algorithm::Dijkstra,
                substituted: true,
            },
        }
    }

    fn exact(algorithm: Algorithm) -> Self {
        Selection {
            algorithm,
            substituted: false,
        }
    }
}

/// Result envelope returned to callers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    /// Node ids from source to target inclusive, empty when unreachable
    pub path: Vec<String>,
    /// Search trace, verbatim, for animation
    pub steps: Vec<TraceEvent>,
    pub metrics: Metrics,
    /// Algorithm that actually ran
    pub algorithm: Algorithm,
    /// True when the requested name was unknown and Dijkstra ran instead
    pub substituted: bool,
}

impl PathResult {
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Run `algorithm_name` from `source` to `target`.
///
/// Missing endpoints are not an error here: the result simply has an empty
/// path. Only graph validation failures and Bellman-Ford's negative cycle
/// detection produce errors.
#[tracing::instrument(
    skip(graph, options),
    fields(nodes = graph.node_count(), edges = graph.edge_count(), directed = options.directed)
)]
pub fn run(
    graph: &Graph,
    algorithm_name: &str,
    source: &str,
    target: &str,
    options: &Options,
) -> Result<PathResult> {
    let selection = Selection::resolve(algorithm_name);
    if selection.substituted {
        tracing::debug!(
            requested = algorithm_name,
            "unrecognized algorithm, falling back to dijkstra"
        );
    }
    execute(graph, selection, source, target, options)
}

/// Run a specific algorithm, bypassing name resolution
pub fn run_algorithm(
    graph: &Graph,
    algorithm: Algorithm,
    source: &str,
    target: &str,
    options: &Options,
) -> Result<PathResult> {
    execute(graph, Selection::exact(algorithm), source, target, options)
}

fn execute(
    graph: &Graph,
    selection: Selection,
    source: &str,
    target: &str,
    options: &Options,
) -> Result<PathResult> {
    let start = Instant::now();

    let adjacency = Adjacency::build(graph, options)?;
    trace_time!(start, "build_adjacency");

    let search = dispatch(graph, &adjacency, selection.algorithm, source, target)?;
    trace_time!(start, "search", events = search.trace.len());

    let path = reconstruct(&adjacency, &search.routes, source, target);
    let distance = path_distance(graph, &adjacency, &search, selection.algorithm, &path, target);
    let metrics = metrics::compute(&path, distance, start.elapsed());

    tracing::debug!(
        algorithm = %selection.algorithm,
        hops = metrics.hops,
        distance = ?metrics.distance,
        time_ms = metrics.time_ms,
        "run complete"
    );

    Ok(PathResult {
        path,
        steps: search.trace,
        metrics,
        algorithm: selection.algorithm,
        substituted: selection.substituted,
    })
}

fn dispatch(
    graph: &Graph,
    adjacency: &Adjacency,
    algorithm: Algorithm,
    source: &str,
    target: &str,
) -> Result<SearchResult> {
    Ok(match algorithm {
        Algorithm::Bfs => bfs_search(adjacency, source, target),
        Algorithm::Dijkstra => dijkstra_search(adjacency, source, target),
        Algorithm::BellmanFord => bellman_ford_search(adjacency, source, target)?,
        Algorithm::AStar => astar_search(graph, adjacency, source, target),
        Algorithm::FloydWarshall => floyd_warshall_search(graph, adjacency, source, target),
    })
}

/// Weighted searches report the cost they tracked for the target. BFS only
/// knows hop counts, so its distance comes from the edge re-scan.
fn path_distance(
    graph: &Graph,
    adjacency: &Adjacency,
    search: &SearchResult,
    algorithm: Algorithm,
    path: &[String],
    target: &str,
) -> Option<f64> {
    if path.is_empty() {
        return None;
    }
    let tracked = match algorithm {
        Algorithm::Bfs => None,
        _ => adjacency
            .index_of(target)
            .and_then(|goal| search.distance_to(goal)),
    };
    Some(tracked.unwrap_or_else(|| metrics::edge_scan_distance(graph, path)))
}

/// Per-algorithm outcome of [`compare`]
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Result(PathResult),
    Error(String),
}

/// One row of an algorithm comparison
#[derive(Debug, Serialize)]
pub struct Comparison {
    pub algorithm: Algorithm,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl Comparison {
    pub fn result(&self) -> Option<&PathResult> {
        match &self.outcome {
            Outcome::Result(result) => Some(result),
            Outcome::Error(_) => None,
        }
    }
}

/// Run every algorithm on the same query, one after another.
///
/// A failing algorithm (Bellman-Ford on a negative cycle) is reported in its
/// row and does not stop the others. Graph validation errors are returned
/// up front since they would fail every row.
pub fn compare(
    graph: &Graph,
    source: &str,
    target: &str,
    options: &Options,
) -> Result<Vec<Comparison>> {
    Adjacency::build(graph, options)?;

    Ok(Algorithm::ALL
        .into_iter()
        .map(|algorithm| {
            let outcome = match run_algorithm(graph, algorithm, source, target, options) {
                Ok(result) => Outcome::Result(result),
                Err(e) => Outcome::Error(e.to_string()),
            };
            Comparison { algorithm, outcome }
        })
        .collect())
}
