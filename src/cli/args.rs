use std::path::PathBuf;

use clap::Args;

/// Where a command reads its graph from
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct GraphSource {
    /// Graph JSON file with `nodes` and `edges` (`-` for stdin)
    #[arg(long, short = 'g')]
    pub graph: Option<PathBuf>,

    /// Id of a saved topology
    #[arg(long, short = 't')]
    pub topology: Option<String>,
}

/// Source and target node ids
#[derive(Args, Debug, Clone)]
pub struct Endpoints {
    /// Source node id
    #[arg(long)]
    pub from: String,

    /// Target node id
    #[arg(long)]
    pub to: String,
}

/// Edge direction override; without either flag the config decides
#[derive(Args, Debug, Clone, Default)]
pub struct Direction {
    /// Treat edges as one-way
    #[arg(long, conflicts_with = "undirected")]
    pub directed: bool,

    /// Treat edges as two-way, even if the config says directed
    #[arg(long)]
    pub undirected: bool,
}

impl Direction {
    pub fn resolve(&self, config_directed: bool) -> bool {
        if self.directed {
            true
        } else if self.undirected {
            false
        } else {
            config_directed
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct RouteArgs {
    #[command(flatten)]
    pub source: GraphSource,

    #[command(flatten)]
    pub endpoints: Endpoints,

    /// Algorithm name (bfs, dijkstra, bellman-ford, astar, floyd-warshall);
    /// unknown names fall back to dijkstra
    #[arg(long, short = 'a')]
    pub algorithm: Option<String>,

    #[command(flatten)]
    pub direction: Direction,

    /// Print the search trace in human output
    #[arg(long)]
    pub steps: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    #[command(flatten)]
    pub source: GraphSource,

    #[command(flatten)]
    pub endpoints: Endpoints,

    #[command(flatten)]
    pub direction: Direction,
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Number of nodes
    #[arg(long, short = 'n')]
    pub nodes: Option<usize>,

    /// Edge probability for each ordered node pair, in [0, 1]
    #[arg(long, short = 'd')]
    pub density: Option<f64>,

    /// Upper bound for edge weights (at least 1)
    #[arg(long)]
    pub max_weight: Option<f64>,

    /// Seed for a reproducible topology
    #[arg(long)]
    pub seed: Option<u64>,

    /// Save to the topology store and print the id instead of the graph
    #[arg(long)]
    pub save: bool,

    /// Name for the saved topology (requires --save)
    #[arg(long, requires = "save")]
    pub name: Option<String>,
}
