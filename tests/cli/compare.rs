use crate::support::{netroute_in, stdout_json, write_file, LINE_GRAPH, NEGATIVE_CYCLE_GRAPH};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_compare_table() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "line.json", LINE_GRAPH);

    netroute_in(dir.path())
        .args(["compare", "--from", "A", "--to", "C", "--graph"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("ALGORITHM"))
        .stdout(predicate::str::contains("bfs"))
        .stdout(predicate::str::contains("bellman-ford"))
        .stdout(predicate::str::contains("floyd-warshall"));
}

#[test]
fn test_compare_json_rows() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "line.json", LINE_GRAPH);

    let output = netroute_in(dir.path())
        .args(["--format", "json", "compare", "--from", "A", "--to", "C", "--graph"])
        .arg(&graph)
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows = stdout_json(&output);
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 5);
    for row in rows {
        assert_eq!(row["result"]["path"], serde_json::json!(["A", "B", "C"]));
        assert_eq!(row["result"]["metrics"]["distance"], 2.0);
    }
}

#[test]
fn test_compare_keeps_going_after_negative_cycle() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "cycle.json", NEGATIVE_CYCLE_GRAPH);

    let output = netroute_in(dir.path())
        .args(["--format", "json", "compare", "--from", "A", "--to", "B", "--directed"])
        .arg("--graph")
        .arg(&graph)
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows = stdout_json(&output);
    let bellman = rows
        .as_array()
        .unwrap()
        .iter()
        .find(|row| row["algorithm"] == "bellman-ford")
        .unwrap();
    assert_eq!(bellman["error"], "negative weight cycle detected");
}
