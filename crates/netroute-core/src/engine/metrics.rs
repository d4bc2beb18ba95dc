use std::time::Duration;

use serde::Serialize;

use crate::graph::types::{Graph, DEFAULT_WEIGHT};

/// Quantitative summary of one engine run
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metrics {
    /// Wall time of the whole run, milliseconds rounded to 3 decimals
    pub time_ms: f64,
    /// `path.len() - 1`, or 0 when there is no path
    pub hops: usize,
    /// Total weight along the path, `None` when there is no path
    pub distance: Option<f64>,
}

/// Derive metrics for a reconstructed path
pub fn compute(path: &[String], distance: Option<f64>, elapsed: Duration) -> Metrics {
    Metrics {
        time_ms: round_millis(elapsed),
        hops: path.len().saturating_sub(1),
        distance: if path.is_empty() { None } else { distance },
    }
}

fn round_millis(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 1000.0 * 1000.0).round() / 1000.0
}

/// Path weight by re-scanning the edge list.
///
/// For each consecutive pair, takes the weight of the first edge joining
/// them in either direction, or [`DEFAULT_WEIGHT`] if none does. Only used
/// for searches that do not track weighted cost themselves (BFS). The
/// fallback hides a topology/weight mismatch, so it is logged.
pub fn edge_scan_distance(graph: &Graph, path: &[String]) -> f64 {
    path.windows(2)
        .map(|pair| {
            let (a, b) = (pair[0].as_str(), pair[1].as_str());
            match graph.edges().iter().find(|e| e.connects(a, b)) {
                Some(edge) => edge.weight,
                None => {
                    tracing::debug!(
                        from = a,
                        to = b,
                        "no edge between path neighbors, using default weight"
                    );
                    DEFAULT_WEIGHT
                }
            }
        })
        .sum()
}
