//! Route request payloads
//!
//! The boundary between callers and the engine: a request carries the graph
//! inline, and both the graph and its endpoints are checked here before
//! [`engine::run`] sees them.
//!
//! [`engine::run`]: crate::engine::run

use serde::{Deserialize, Serialize};

use crate::engine::{self, PathResult};
use crate::error::{Result, RouteError};
use crate::graph::{Graph, GraphData, Options};

/// `{nodes, edges, algorithm, source, target, options}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRequest {
    #[serde(flatten)]
    pub graph: GraphData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Options>,
}

impl RouteRequest {
    /// Validate the graph and endpoints, then run the engine.
    /// `default_algorithm` applies when the payload names none.
    pub fn execute(self, default_algorithm: &str) -> Result<PathResult> {
        let graph = Graph::try_from(self.graph)?;
        validate_endpoints(&graph, &self.source, &self.target)?;
        let algorithm = self.algorithm.as_deref().unwrap_or(default_algorithm);
        let options = self.options.unwrap_or_default();
        engine::run(&graph, algorithm, &self.source, &self.target, &options)
    }
}

/// Reject a source or target that is not a node of `graph`
pub fn validate_endpoints(graph: &Graph, source: &str, target: &str) -> Result<()> {
    for id in [source, target] {
        if !graph.contains(id) {
            return Err(RouteError::NodeNotFound { id: id.to_string() });
        }
    }
    Ok(())
}
