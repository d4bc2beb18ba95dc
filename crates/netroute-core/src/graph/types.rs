use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::bail_graph;
use crate::error::{Result, RouteError};

/// Default edge weight when a payload omits it
pub const DEFAULT_WEIGHT: f64 = 1.0;

fn default_weight() -> f64 {
    DEFAULT_WEIGHT
}

/// A vertex of the routing graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    /// Planar coordinates, only consulted by the A* heuristic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Node {
    pub fn new(id: impl Into<String>) -> Self {
        Node {
            id: id.into(),
            x: None,
            y: None,
            label: None,
        }
    }

    pub fn at(id: impl Into<String>, x: f64, y: f64) -> Self {
        Node {
            x: Some(x),
            y: Some(y),
            ..Node::new(id)
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Both coordinates, if the node carries them
    pub fn coords(&self) -> Option<(f64, f64)> {
        Some((self.x?, self.y?))
    }
}

/// A weighted link between two nodes.
///
/// Negative weights are accepted; only Bellman-Ford and Floyd-Warshall give
/// meaningful answers on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
    #[serde(default = "default_weight")]
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>, weight: f64) -> Self {
        Edge {
            source: source.into(),
            target: target.into(),
            weight,
            id: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// True if this edge joins `a` and `b` in either direction
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }
}

/// Unvalidated wire shape of a graph
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphData {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

/// Immutable, validated graph.
///
/// Every edge endpoint names an existing node, node ids are unique and
/// non-empty, and every weight is finite. Deserialization goes through the
/// same checks as [`Graph::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GraphData", into = "GraphData")]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(nodes.len());
        for node in &nodes {
            if node.id.is_empty() {
                bail_graph!("node id must not be empty");
            }
            if !seen.insert(node.id.as_str()) {
                bail_graph!("duplicate node id '{}'", node.id);
            }
        }

        for edge in &edges {
            for endpoint in [&edge.source, &edge.target] {
                if !seen.contains(endpoint.as_str()) {
                    bail_graph!(
                        "edge {} -> {} references unknown node '{}'",
                        edge.source,
                        edge.target,
                        endpoint
                    );
                }
            }
            if !edge.weight.is_finite() {
                bail_graph!(
                    "edge {} -> {} has non-finite weight {}",
                    edge.source,
                    edge.target,
                    edge.weight
                );
            }
        }

        Ok(Graph { nodes, edges })
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl TryFrom<GraphData> for Graph {
    type Error = RouteError;

    fn try_from(data: GraphData) -> Result<Self> {
        Graph::new(data.nodes, data.edges)
    }
}

impl From<Graph> for GraphData {
    fn from(graph: Graph) -> Self {
        GraphData {
            nodes: graph.nodes,
            edges: graph.edges,
        }
    }
}

/// Per-call engine options. Unrecognized keys are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Insert only the forward arc of each edge
    pub directed: bool,
}

impl Options {
    pub fn directed() -> Self {
        Options { directed: true }
    }
}

/// One recorded step of a search, serialized in the shape the animation
/// front end consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TraceEvent {
    /// BFS dequeued a node
    Visit { visit: String },
    /// Dijkstra popped a node at its settled distance
    Pop { pop: String, dist: f64 },
    /// Bellman-Ford lowered a node's distance
    Update { update: String, dist: f64 },
    /// A* dequeued a node with the given `f = g + h`
    Expand { pop: String, f: f64 },
}

impl TraceEvent {
    /// Node the event refers to
    pub fn node(&self) -> &str {
        match self {
            TraceEvent::Visit { visit } => visit,
            TraceEvent::Pop { pop, .. } | TraceEvent::Expand { pop, .. } => pop,
            TraceEvent::Update { update, .. } => update,
        }
    }
}
