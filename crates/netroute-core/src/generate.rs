//! Random topology generator

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::bail_invalid;
use crate::error::Result;
use crate::graph::{Edge, Graph, Node};

const X_RANGE: std::ops::Range<f64> = 50.0..900.0;
const Y_RANGE: std::ops::Range<f64> = 50.0..600.0;
const MIN_WEIGHT: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateOptions {
    pub nodes: usize,
    /// Probability of an edge for each ordered pair of distinct nodes
    pub density: f64,
    pub max_weight: f64,
    /// Fixed seed for reproducible output, fresh entropy otherwise
    pub seed: Option<u64>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            nodes: 20,
            density: 0.1,
            max_weight: 10.0,
            seed: None,
        }
    }
}

impl GenerateOptions {
    fn validate(&self) -> Result<()> {
        if !self.density.is_finite() || !(0.0..=1.0).contains(&self.density) {
            bail_invalid!("density", self.density);
        }
        if !self.max_weight.is_finite() || self.max_weight < MIN_WEIGHT {
            bail_invalid!("max weight", self.max_weight);
        }
        Ok(())
    }
}

/// Build a random directed topology.
///
/// Nodes are `n0..n{N-1}` laid out at random inside an 850x550 canvas
/// offset by 50. Each ordered pair `(i, j)` with `i != j` gets an edge
/// `e{i}_{j}` with probability `density` and a weight drawn from
/// `[1, max_weight]`, rounded to two decimals.
#[tracing::instrument]
pub fn random_topology(options: &GenerateOptions) -> Result<Graph> {
    options.validate()?;

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let nodes: Vec<Node> = (0..options.nodes)
        .map(|i| {
            let id = format!("n{i}");
            let x = rng.random_range(X_RANGE);
            let y = rng.random_range(Y_RANGE);
            Node::at(id.clone(), x, y).with_label(id)
        })
        .collect();

    let mut edges = Vec::new();
    for i in 0..options.nodes {
        for j in 0..options.nodes {
            if i == j || rng.random::<f64>() >= options.density {
                continue;
            }
            let weight = round_cents(rng.random_range(MIN_WEIGHT..=options.max_weight));
            let edge = Edge::new(format!("n{i}"), format!("n{j}"), weight);
            edges.push(edge.with_id(format!("e{i}_{j}")));
        }
    }

    tracing::debug!(nodes = nodes.len(), edges = edges.len(), "generated topology");
    Graph::new(nodes, edges)
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
