use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::{cargo::cargo_bin_cmd, Command};

/// Get a Command for netroute
pub fn netroute() -> Command {
    cargo_bin_cmd!("netroute")
}

/// A Command isolated from the user's config and store: config is read from
/// `<dir>/config` and topologies live in `<dir>/store`
pub fn netroute_in(dir: &Path) -> Command {
    let mut cmd = netroute();
    cmd.env("NETROUTE_CONFIG_DIR", dir.join("config"))
        .env_remove("RUST_LOG")
        .env_remove("NETROUTE_LOG")
        .arg("--store")
        .arg(dir.join("store"));
    cmd
}

pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// A - B - C line, unit weights
pub const LINE_GRAPH: &str = r#"{
    "nodes": [{"id": "A"}, {"id": "B"}, {"id": "C"}],
    "edges": [
        {"source": "A", "target": "B", "weight": 1},
        {"source": "B", "target": "C", "weight": 1}
    ]
}"#;

/// A and Z with no edges
pub const DISCONNECTED_GRAPH: &str = r#"{
    "nodes": [{"id": "A"}, {"id": "Z"}],
    "edges": []
}"#;

/// Directed two-node negative cycle
pub const NEGATIVE_CYCLE_GRAPH: &str = r#"{
    "nodes": [{"id": "A"}, {"id": "B"}],
    "edges": [
        {"source": "A", "target": "B", "weight": 5},
        {"source": "B", "target": "A", "weight": -10}
    ]
}"#;

pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
