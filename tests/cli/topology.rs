use crate::support::{netroute_in, stdout_json, write_file, LINE_GRAPH};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_save_load_list() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "line.json", LINE_GRAPH);

    netroute_in(dir.path())
        .args(["topology", "save", "--id", "lab-1", "--name", "lab"])
        .arg(&graph)
        .assert()
        .success()
        .stdout("lab-1\n");

    let output = netroute_in(dir.path())
        .args(["--format", "json", "topology", "load", "lab-1"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let entry = stdout_json(&output);
    assert_eq!(entry["id"], "lab-1");
    assert_eq!(entry["name"], "lab");
    assert_eq!(entry["topology"]["nodes"].as_array().unwrap().len(), 3);
    assert!(entry["created_at"].is_string());

    netroute_in(dir.path())
        .args(["topology", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lab-1  lab"))
        .stdout(predicate::str::contains("3 nodes, 2 edges"));
}

#[test]
fn test_route_against_saved_topology() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "line.json", LINE_GRAPH);

    let output = netroute_in(dir.path())
        .args(["topology", "save"])
        .arg(&graph)
        .output()
        .unwrap();
    let id = String::from_utf8_lossy(&output.stdout).trim().to_string();
    assert_eq!(id.len(), 26);

    netroute_in(dir.path())
        .args(["--quiet", "route", "--from", "A", "--to", "C", "--topology", &id])
        .assert()
        .success()
        .stdout("A -> B -> C\n");
}

#[test]
fn test_load_unknown_topology() {
    let dir = tempdir().unwrap();

    netroute_in(dir.path())
        .args(["topology", "load", "ghost"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("topology not found: ghost"));
}

#[test]
fn test_empty_list() {
    let dir = tempdir().unwrap();

    netroute_in(dir.path())
        .args(["topology", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved topologies"));
}
