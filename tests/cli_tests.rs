//! Integration tests for the courier CLI
//!
//! These tests run the courier binary against small road maps.

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const FIVE_CITIES: &str = "5\n50\n30 5\n100 20 50\n10 x x 10\n";

/// Complete graph where one greedy sweep leaves node 4 at 42 instead of 5
const LATE_IMPROVEMENT: &str = "5\n1\n100 40\n2 45 2\n1000 45 1 50\n";

/// Nodes 2 and 3 are cut off from the origin
const DISCONNECTED: &str = "4\n7\nx x\nx x 1\n";

/// Get a Command for courier with a clean environment
fn courier() -> Command {
    let mut cmd = cargo_bin_cmd!("courier");
    cmd.env_remove("COURIER_CONFIG")
        .env_remove("COURIER_LOG")
        .env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    courier()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: courier"))
        .stdout(predicate::str::contains("solve"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("verify"));
}

#[test]
fn test_version_flag() {
    courier()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("courier"));
}

// ============================================================================
// solve
// ============================================================================

#[test]
fn test_no_command_reads_stdin() {
    courier()
        .write_stdin(FIVE_CITIES)
        .assert()
        .success()
        .stdout("35\n");
}

#[test]
fn test_solve_from_dash() {
    courier()
        .args(["solve", "-"])
        .write_stdin(FIVE_CITIES)
        .assert()
        .success()
        .stdout("35\n");
}

#[test]
fn test_solve_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("map.txt");
    fs::write(&path, "4\n5\n2 1\nx 3 x\n").unwrap();

    courier()
        .arg("solve")
        .arg(&path)
        .assert()
        .success()
        .stdout("6\n");
}

#[test]
fn test_single_node() {
    courier()
        .arg("solve")
        .write_stdin("1\n")
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn test_solve_json() {
    let output = courier()
        .args(["--format", "json", "solve"])
        .write_stdin(FIVE_CITIES)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["farthest"], 35);
    assert_eq!(json["distances"], serde_json::json!([0, 35, 30, 20, 10]));
    assert_eq!(json["mode"], "settle");
    assert_eq!(json["trace"]["visit_order"], serde_json::json!([0, 4, 3, 1, 2]));
}

// ============================================================================
// Relaxation mode and unreachable policy
// ============================================================================

#[test]
fn test_single_pass_mode_flag() {
    courier()
        .args(["--mode", "single-pass", "solve"])
        .write_stdin(LATE_IMPROVEMENT)
        .assert()
        .success()
        .stdout("42\n");

    courier()
        .arg("solve")
        .write_stdin(LATE_IMPROVEMENT)
        .assert()
        .success()
        .stdout("5\n");
}

#[test]
fn test_invalid_mode_exit_code_2() {
    courier()
        .args(["--mode", "greedy", "solve"])
        .write_stdin(FIVE_CITIES)
        .assert()
        .code(2);
}

#[test]
fn test_unreachable_rejected_by_default() {
    courier()
        .write_stdin(DISCONNECTED)
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "error: node 2 is unreachable from the origin",
        ));
}

#[test]
fn test_unreachable_exclude() {
    courier()
        .args(["--unreachable", "exclude"])
        .write_stdin(DISCONNECTED)
        .assert()
        .success()
        .stdout("7\n");
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_file_sets_mode() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("courier.toml");
    fs::write(&config, "[relaxation]\nmode = \"single-pass\"\n").unwrap();

    courier()
        .arg("--config")
        .arg(&config)
        .write_stdin(LATE_IMPROVEMENT)
        .assert()
        .success()
        .stdout("42\n");
}

#[test]
fn test_config_from_env_and_flag_override() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("courier.toml");
    fs::write(&config, "[relaxation]\nmode = \"single-pass\"\n").unwrap();

    courier()
        .env("COURIER_CONFIG", &config)
        .args(["--mode", "settle"])
        .write_stdin(LATE_IMPROVEMENT)
        .assert()
        .success()
        .stdout("5\n");
}

#[test]
fn test_config_node_limit() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("courier.toml");
    fs::write(&config, "[graph]\nmax_nodes = 3\n").unwrap();

    courier()
        .arg("--config")
        .arg(&config)
        .write_stdin(FIVE_CITIES)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid node count 5 (expected 0..=3)"));
}

#[test]
fn test_malformed_config_exit_code_1() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("courier.toml");
    fs::write(&config, "[relaxation]\nmode = \"greedy\"\n").unwrap();

    courier()
        .arg("--config")
        .arg(&config)
        .write_stdin(FIVE_CITIES)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}

// ============================================================================
// show and verify
// ============================================================================

#[test]
fn test_show_lists_adjacency() {
    courier()
        .arg("show")
        .write_stdin(FIVE_CITIES)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "min dist: 0 (0 -10-> 4) (0 -30-> 2) (0 -50-> 1) (0 -100-> 3)\n",
        ))
        .stdout(predicate::str::contains("min dist: 35 (1 -5-> 2)"))
        .stdout(predicate::str::contains("visit order: 0 4 3 1 2"));
}

#[test]
fn test_show_quiet_omits_trace() {
    courier()
        .args(["--quiet", "show"])
        .write_stdin(FIVE_CITIES)
        .assert()
        .success()
        .stdout(predicate::str::contains("visit order").not());
}

#[test]
fn test_verify_settle() {
    courier()
        .arg("verify")
        .write_stdin(LATE_IMPROVEMENT)
        .assert()
        .success()
        .stdout(predicate::str::contains("ok: 5 nodes match the reference"));
}

#[test]
fn test_verify_single_pass_fails() {
    courier()
        .args(["--mode", "single-pass", "verify"])
        .write_stdin(LATE_IMPROVEMENT)
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "engine disagrees with reference on node 4: engine 42, reference 5",
        ));
}

// ============================================================================
// Input errors and exit codes
// ============================================================================

#[test]
fn test_parse_error_exit_code_3() {
    courier()
        .write_stdin("3\n1\n")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("error: line 3: missing row for node 2"));
}

#[test]
fn test_negative_weight_exit_code_3() {
    courier()
        .write_stdin("2\n-3\n")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("negative weight -3 on edge 1-0"));
}

#[test]
fn test_json_error_envelope() {
    courier()
        .args(["--format", "json"])
        .write_stdin("3\n1\n2 y\n")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"parse_error\""))
        .stderr(predicate::str::contains("invalid weight 'y'"));
}

#[test]
fn test_unknown_format_exit_code_2() {
    courier()
        .args(["--format", "invalid", "solve"])
        .write_stdin(FIVE_CITIES)
        .assert()
        .code(2);
}

#[test]
fn test_quiet_suppresses_error_message() {
    courier()
        .arg("--quiet")
        .write_stdin("five\n")
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_missing_input_file() {
    let dir = tempdir().unwrap();
    courier()
        .arg("solve")
        .arg(dir.path().join("absent.txt"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_directory_input_is_usage_error() {
    let dir = tempdir().unwrap();
    courier()
        .arg("solve")
        .arg(dir.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("input is a directory"));
}

#[test]
fn test_overweight_edge_exit_code_3() {
    courier()
        .write_stdin("2\n4294967296\n")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("exceeds the limit of 4294967295"));
}

#[test]
fn test_heaviest_weights_stay_reachable() {
    courier()
        .args(["--format", "json", "verify"])
        .write_stdin("4\n4294967295\nx 4294967295\nx x 4294967295\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("12884901885"));
}

#[test]
fn test_json_flag_error_envelope() {
    courier()
        .args(["--format", "json", "--mode", "greedy"])
        .write_stdin(FIVE_CITIES)
        .assert()
        .code(2)
        .stderr(predicate::str::starts_with("{\"error\""))
        .stderr(predicate::str::contains("greedy"));
}

#[test]
fn test_quiet_silences_exclusion_warnings() {
    courier()
        .args(["--quiet", "--unreachable", "exclude"])
        .write_stdin(DISCONNECTED)
        .assert()
        .success()
        .stdout("7\n")
        .stderr(predicate::str::is_empty());
}
