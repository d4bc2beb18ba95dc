use crate::support::{netroute, netroute_in, write_file, LINE_GRAPH, NEGATIVE_CYCLE_GRAPH};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_help_flag() {
    netroute()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: netroute"))
        .stdout(predicate::str::contains("route"))
        .stdout(predicate::str::contains("compare"))
        .stdout(predicate::str::contains("topology"));
}

#[test]
fn test_unknown_node_is_usage_error() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "line.json", LINE_GRAPH);

    netroute_in(dir.path())
        .args(["route", "--from", "A", "--to", "Q", "--graph"])
        .arg(&graph)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("node not found in graph: Q"));
}

#[test]
fn test_negative_cycle_is_data_error() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "cycle.json", NEGATIVE_CYCLE_GRAPH);

    netroute_in(dir.path())
        .args(["--format", "json", "route", "--from", "A", "--to", "B"])
        .args(["--algorithm", "bellman-ford", "--directed", "--graph"])
        .arg(&graph)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("negative_cycle_detected"));
}

#[test]
fn test_dangling_edge_is_data_error() {
    let dir = tempdir().unwrap();
    let graph = write_file(
        dir.path(),
        "bad.json",
        r#"{"nodes": [{"id": "A"}], "edges": [{"source": "A", "target": "B"}]}"#,
    );

    netroute_in(dir.path())
        .args(["route", "--from", "A", "--to", "A", "--graph"])
        .arg(&graph)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid graph"));
}

#[test]
fn test_missing_graph_file_fails() {
    let dir = tempdir().unwrap();

    netroute_in(dir.path())
        .args(["route", "--from", "A", "--to", "B", "--graph"])
        .arg(dir.path().join("missing.json"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_clap_error_json_envelope() {
    netroute()
        .args(["--format", "json", "route", "--from", "A"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"usage_error\""));
}

#[test]
fn test_quiet_suppresses_error_text() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "line.json", LINE_GRAPH);

    netroute_in(dir.path())
        .args(["--quiet", "route", "--from", "A", "--to", "Q", "--graph"])
        .arg(&graph)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("error:").not());
}

#[test]
fn test_verbose_logs_to_stderr() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "line.json", LINE_GRAPH);

    netroute_in(dir.path())
        .args(["--log-level", "debug", "route", "--from", "A", "--to", "C", "--graph"])
        .arg(&graph)
        .assert()
        .success()
        .stderr(predicate::str::contains("run complete"))
        .stdout(predicate::str::contains("run complete").not());
}
