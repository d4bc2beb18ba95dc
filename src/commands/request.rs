//! `netroute request` command - run a complete request payload

use std::path::Path;

use crate::cli::Cli;
use crate::commands::io::read_json;
use crate::commands::route::print_result;
use netroute_core::config::Config;
use netroute_core::error::Result;
use netroute_core::request::RouteRequest;

pub fn execute(cli: &Cli, config: &Config, file: &Path) -> Result<()> {
    let request: RouteRequest = read_json(file)?;
    tracing::debug!(
        nodes = request.graph.nodes.len(),
        edges = request.graph.edges.len(),
        "request parsed"
    );
    let result = request.execute(&config.engine.default_algorithm)?;
    print_result(cli, &result, false)
}
