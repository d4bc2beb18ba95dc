//! Input helpers: files, stdin and graph sources

use std::fs;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::cli::{Cli, GraphSource};
use crate::commands::dispatch::open_store;
use netroute_core::bail_usage;
use netroute_core::config::Config;
use netroute_core::error::{Result, RouteError};
use netroute_core::graph::{Graph, GraphData};

/// Read a whole file, or stdin when `path` is `-`
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        return Ok(content);
    }
    fs::read_to_string(path).map_err(|e| RouteError::io_operation("read", path.display(), e))
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    Ok(serde_json::from_str(&read_input(path)?)?)
}

/// Parse a graph file. Structural problems (dangling edges, duplicate ids)
/// surface as `InvalidGraph` rather than a JSON error.
pub fn read_graph(path: &Path) -> Result<Graph> {
    let data: GraphData = read_json(path)?;
    Graph::try_from(data)
}

/// Resolve `--graph FILE` or `--topology ID`
pub fn load_graph(cli: &Cli, config: &Config, source: &GraphSource) -> Result<Graph> {
    match (&source.graph, &source.topology) {
        (Some(path), _) => read_graph(path),
        (None, Some(id)) => Ok(open_store(cli, config)?.load(id)?.topology),
        (None, None) => bail_usage!("one of --graph or --topology is required"),
    }
}
