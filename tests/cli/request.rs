use crate::support::{netroute_in, stdout_json, write_file};
use tempfile::tempdir;

#[test]
fn test_request_payload() {
    let dir = tempdir().unwrap();
    let request = write_file(
        dir.path(),
        "request.json",
        r#"{
            "nodes": [{"id": "S", "x": 0, "y": 0}, {"id": "M", "x": 1, "y": 0}, {"id": "T", "x": 2, "y": 0}],
            "edges": [{"source": "S", "target": "M", "weight": 1}, {"source": "M", "target": "T", "weight": 1}],
            "algorithm": "a-star",
            "source": "S",
            "target": "T",
            "options": {"directed": true}
        }"#,
    );

    let output = netroute_in(dir.path())
        .args(["--format", "json", "request"])
        .arg(&request)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["algorithm"], "astar");
    assert_eq!(json["path"], serde_json::json!(["S", "M", "T"]));
    assert_eq!(json["steps"][0], serde_json::json!({"pop": "S", "f": 2.0}));
}

#[test]
fn test_request_unknown_target() {
    let dir = tempdir().unwrap();

    netroute_in(dir.path())
        .args(["request", "-"])
        .write_stdin(r#"{"nodes": [{"id": "A"}], "edges": [], "source": "A", "target": "B"}"#)
        .assert()
        .code(2);
}
