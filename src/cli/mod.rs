//! CLI argument parsing for netroute
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --store

pub mod args;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use args::{CompareArgs, Endpoints, GenerateArgs, GraphSource, RouteArgs};
pub use output::OutputFormat;

/// netroute - shortest paths over weighted network topologies
#[derive(Parser, Debug)]
#[command(name = "netroute")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json)
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter: a level (error, warn, info, debug, trace) or a full directive
    #[arg(long, global = true, env = "NETROUTE_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Topology store directory
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find a path between two nodes
    Route(RouteArgs),

    /// Run a full request payload {nodes, edges, algorithm, source, target, options}
    Request {
        /// Request JSON file (`-` for stdin)
        file: PathBuf,
    },

    /// Run every algorithm on the same query and compare the results
    Compare(CompareArgs),

    /// Manage saved topologies
    #[command(subcommand)]
    Topology(TopologyCommands),

    /// Generate a random topology
    Generate(GenerateArgs),

    /// Replay the path of a saved result, one JSON event per line
    Simulate {
        /// Route result JSON file with a `path` field (`-` for stdin)
        file: PathBuf,

        /// Pause between steps in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },
}

#[derive(Subcommand, Debug)]
pub enum TopologyCommands {
    /// Save a graph file to the store and print its id
    Save {
        /// Graph JSON file (`-` for stdin)
        file: PathBuf,

        /// Display name (defaults to topo-<id prefix>)
        #[arg(long)]
        name: Option<String>,

        /// Explicit id, letters, digits, `-` and `_` only
        #[arg(long)]
        id: Option<String>,
    },

    /// Print a saved topology
    Load {
        /// Topology id
        id: String,
    },

    /// List saved topologies
    List,
}
