use crate::support::{netroute_in, stdout_json, write_file, DISCONNECTED_GRAPH, LINE_GRAPH};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_route_human_output() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "line.json", LINE_GRAPH);

    netroute_in(dir.path())
        .args(["route", "--from", "A", "--to", "C", "--graph"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> B -> C"))
        .stdout(predicate::str::contains("Algorithm: dijkstra"))
        .stdout(predicate::str::contains("Hops: 2"))
        .stdout(predicate::str::contains("Distance: 2"));
}

#[test]
fn test_route_json_envelope() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "line.json", LINE_GRAPH);

    let output = netroute_in(dir.path())
        .args(["--format", "json", "route", "--from", "A", "--to", "C", "-a", "BFS", "--graph"])
        .arg(&graph)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["path"], serde_json::json!(["A", "B", "C"]));
    assert_eq!(json["algorithm"], "bfs");
    assert_eq!(json["substituted"], false);
    assert_eq!(json["metrics"]["hops"], 2);
    assert_eq!(json["metrics"]["distance"], 2.0);
    assert_eq!(json["steps"][0]["visit"], "A");
    assert!(json["metrics"]["time_ms"].is_number());
}

#[test]
fn test_route_unknown_algorithm_falls_back() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "line.json", LINE_GRAPH);

    let output = netroute_in(dir.path())
        .args(["--format", "json", "route", "--from", "A", "--to", "C", "-a", "warp"])
        .arg("--graph")
        .arg(&graph)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["algorithm"], "dijkstra");
    assert_eq!(json["substituted"], true);
}

#[test]
fn test_route_no_path_is_success() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "split.json", DISCONNECTED_GRAPH);

    for algorithm in ["bfs", "dijkstra", "bellman-ford", "a*", "floyd"] {
        let output = netroute_in(dir.path())
            .args(["--format", "json", "route", "--from", "A", "--to", "Z"])
            .args(["--algorithm", algorithm, "--graph"])
            .arg(&graph)
            .output()
            .unwrap();
        assert!(output.status.success(), "{algorithm}");
        let json = stdout_json(&output);
        assert_eq!(json["path"], serde_json::json!([]), "{algorithm}");
        assert_eq!(json["metrics"]["distance"], serde_json::Value::Null);
    }
}

#[test]
fn test_route_directed_flag() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "line.json", LINE_GRAPH);

    netroute_in(dir.path())
        .args(["route", "--from", "C", "--to", "A", "--directed", "--graph"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("(none)"));
}

#[test]
fn test_route_steps() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "line.json", LINE_GRAPH);

    netroute_in(dir.path())
        .args(["route", "--from", "A", "--to", "C", "--steps", "--graph"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("Steps:"))
        .stdout(predicate::str::contains("pop A dist=0"));
}

#[test]
fn test_route_graph_from_stdin() {
    let dir = tempdir().unwrap();

    netroute_in(dir.path())
        .args(["--quiet", "route", "--from", "A", "--to", "C", "--graph", "-"])
        .write_stdin(LINE_GRAPH)
        .assert()
        .success()
        .stdout("A -> B -> C\n");
}

#[test]
fn test_route_config_default_algorithm() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "line.json", LINE_GRAPH);
    std::fs::create_dir_all(dir.path().join("config")).unwrap();
    write_file(
        &dir.path().join("config"),
        "config.toml",
        "[engine]\ndefault_algorithm = \"astar\"\n",
    );

    let output = netroute_in(dir.path())
        .args(["--format", "json", "route", "--from", "A", "--to", "C", "--graph"])
        .arg(&graph)
        .output()
        .unwrap();
    assert_eq!(stdout_json(&output)["algorithm"], "astar");
}

#[test]
fn test_route_undirected_overrides_config() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "line.json", LINE_GRAPH);
    std::fs::create_dir_all(dir.path().join("config")).unwrap();
    write_file(
        &dir.path().join("config"),
        "config.toml",
        "[engine]\ndirected = true\n",
    );

    netroute_in(dir.path())
        .args(["--quiet", "route", "--from", "C", "--to", "A", "--graph"])
        .arg(&graph)
        .assert()
        .success()
        .stdout("(none)\n");

    netroute_in(dir.path())
        .args(["--quiet", "route", "--from", "C", "--to", "A", "--undirected", "--graph"])
        .arg(&graph)
        .assert()
        .success()
        .stdout("C -> B -> A\n");
}
