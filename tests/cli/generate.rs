use crate::support::{netroute_in, stdout_json};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_generate_seeded_is_reproducible() {
    let dir = tempdir().unwrap();
    let args = ["generate", "--nodes", "6", "--density", "0.5", "--seed", "42"];

    let first = netroute_in(dir.path()).args(args).output().unwrap();
    let second = netroute_in(dir.path()).args(args).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    let graph = stdout_json(&first);
    assert_eq!(graph["nodes"].as_array().unwrap().len(), 6);
    assert_eq!(graph["nodes"][0]["id"], "n0");
    assert_eq!(graph["nodes"][0]["label"], "n0");
}

#[test]
fn test_generate_zero_density() {
    let dir = tempdir().unwrap();

    let output = netroute_in(dir.path())
        .args(["generate", "--nodes", "4", "--density", "0"])
        .output()
        .unwrap();
    assert_eq!(stdout_json(&output)["edges"], serde_json::json!([]));
}

#[test]
fn test_generate_rejects_density() {
    let dir = tempdir().unwrap();

    netroute_in(dir.path())
        .args(["generate", "--density", "1.5"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid density: 1.5"));
}

#[test]
fn test_generate_save() {
    let dir = tempdir().unwrap();

    let output = netroute_in(dir.path())
        .args(["--format", "json", "generate", "--nodes", "5", "--seed", "1"])
        .args(["--save", "--name", "random-5"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let saved = stdout_json(&output);
    assert_eq!(saved["nodes"], 5);

    netroute_in(dir.path())
        .args(["topology", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("random-5"));
}
