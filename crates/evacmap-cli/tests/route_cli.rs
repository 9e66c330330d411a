use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("evacmap-cli");
    cmd.env("RUST_LOG", "error");
    cmd
}

#[test]
fn default_route_uses_the_main_entrance() {
    cli()
        .arg("route")
        .assert()
        .success()
        .stdout(predicate::str::contains("Route (2 hops)"))
        .stdout(predicate::str::contains("Main Entrance"));
}

#[test]
fn blocking_the_lobby_reroutes_to_the_rear_exit() {
    cli()
        .arg("route")
        .arg("--block")
        .arg("g-lobby")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rear Exit"));
}

#[test]
fn presets_stage_their_scenario() {
    cli()
        .arg("route")
        .arg("--preset")
        .arg("lobby-fire")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rear Exit"));
}

#[test]
fn blocked_edges_divert_the_route() {
    cli()
        .arg("route")
        .arg("--block-edge")
        .arg("g-lobby:g-main-exit")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rear Exit"));
}

#[test]
fn failed_evacuation_is_a_normal_outcome() {
    cli()
        .arg("route")
        .arg("--block")
        .arg("g-lobby")
        .arg("--block")
        .arg("g-corridor-west")
        .assert()
        .success()
        .stdout(predicate::str::contains("Evacuation failed"));
}

#[test]
fn blocking_the_start_node_warns_and_continues() {
    cli()
        .arg("route")
        .arg("--block")
        .arg("g-security")
        .assert()
        .success()
        .stderr(predicate::str::contains("warning"))
        .stdout(predicate::str::contains("Main Entrance"));
}

#[test]
fn alternatives_are_listed_after_the_primary_route() {
    cli()
        .arg("route")
        .arg("--alternatives")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Route (2 hops)"))
        .stdout(predicate::str::contains("Alternative 1"));
}

#[test]
fn json_output_carries_the_plan() {
    let output = cli()
        .arg("route")
        .arg("--json")
        .output()
        .expect("command runs");
    assert!(output.status.success());

    let plan: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is valid JSON");
    assert_eq!(plan["primary"]["steps"][0], "g-security");
    assert_eq!(plan["primary"]["steps"][2], "g-main-exit");
}

#[test]
fn unknown_preset_fails_with_a_friendly_message() {
    cli()
        .arg("route")
        .arg("--preset")
        .arg("volcano")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown preset 'volcano'"));
}

#[test]
fn malformed_edge_argument_is_rejected() {
    cli()
        .arg("route")
        .arg("--block-edge")
        .arg("g-lobby")
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected the form"));
}

#[test]
fn nodes_lists_the_building_by_floor() {
    cli()
        .arg("nodes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Harrowgate House"))
        .stdout(predicate::str::contains("g-security - Security Desk"))
        .stdout(predicate::str::contains("(start)"))
        .stdout(predicate::str::contains("(exit)"));
}

#[test]
fn presets_lists_names_and_descriptions() {
    cli()
        .arg("presets")
        .assert()
        .success()
        .stdout(predicate::str::contains("lobby-fire"))
        .stdout(predicate::str::contains("basement-flood"));
}

#[test]
fn custom_dataset_overrides_the_bundled_building() {
    let dir = tempdir().expect("create temp dir");
    let path: PathBuf = dir.path().join("hut.json");
    fs::write(
        &path,
        r#"{
            "name": "Hut",
            "start": "inside",
            "exits": ["door"],
            "nodes": [
                { "id": "inside", "label": "Inside", "floor": "ground", "kind": "room" },
                { "id": "door", "label": "Front Door", "floor": "ground", "kind": "exit" }
            ],
            "edges": [["inside", "door"]]
        }"#,
    )
    .expect("write dataset");

    cli()
        .arg("--dataset")
        .arg(&path)
        .arg("route")
        .assert()
        .success()
        .stdout(predicate::str::contains("Front Door"));
}

#[test]
fn missing_dataset_file_fails_with_context() {
    cli()
        .arg("--dataset")
        .arg("/nonexistent/building.json")
        .arg("route")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load dataset"));
}
