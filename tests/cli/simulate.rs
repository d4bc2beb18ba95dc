use crate::support::{netroute_in, write_file};
use tempfile::tempdir;

#[test]
fn test_simulate_emits_events() {
    let dir = tempdir().unwrap();
    let result = write_file(
        dir.path(),
        "result.json",
        r#"{"path": ["A", "B", "C"], "steps": [], "metrics": {"hops": 2}}"#,
    );

    netroute_in(dir.path())
        .args(["simulate", "--delay-ms", "0"])
        .arg(&result)
        .assert()
        .success()
        .stdout(concat!(
            "{\"step\":0,\"node\":\"A\",\"total\":3}\n",
            "{\"step\":1,\"node\":\"B\",\"total\":3}\n",
            "{\"step\":2,\"node\":\"C\",\"total\":3}\n",
            "{\"done\":true}\n",
        ));
}

#[test]
fn test_simulate_empty_path() {
    let dir = tempdir().unwrap();

    netroute_in(dir.path())
        .args(["simulate", "--delay-ms", "0", "-"])
        .write_stdin(r#"{"path": []}"#)
        .assert()
        .success()
        .stdout("{\"done\":true}\n");
}

#[test]
fn test_simulate_pipes_from_route() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "line.json", crate::support::LINE_GRAPH);

    let route = netroute_in(dir.path())
        .args(["--format", "json", "route", "--from", "A", "--to", "C", "--graph"])
        .arg(&graph)
        .output()
        .unwrap();

    let output = netroute_in(dir.path())
        .args(["simulate", "--delay-ms", "1", "-"])
        .write_stdin(route.stdout)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).lines().count(), 4);
}
