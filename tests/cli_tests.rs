//! Integration tests for the hypergraphs CLI
//!
//! These tests run the hypergraphs binary and check output formats, setting
//! precedence and exit codes.

mod support;

use predicates::prelude::*;
use std::fs;
use support::{hypergraphs, stderr_json, stdout_json};
use tempfile::tempdir;

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    let dir = tempdir().unwrap();
    hypergraphs(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: hypergraphs"))
        .stdout(predicate::str::contains("clusters"))
        .stdout(predicate::str::contains("largest"))
        .stdout(predicate::str::contains("paths"))
        .stdout(predicate::str::contains("hamiltonian"))
        .stdout(predicate::str::contains("sites"));
}

#[test]
fn test_version_flag() {
    let dir = tempdir().unwrap();
    hypergraphs(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("hypergraphs"));
}

#[test]
fn test_no_subcommand_prints_banner() {
    let dir = tempdir().unwrap();
    hypergraphs(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("hypergraphs --help"));
}

// ============================================================================
// clusters
// ============================================================================

#[test]
fn test_clusters_records_full_concentration() {
    let dir = tempdir().unwrap();
    hypergraphs(dir.path())
        .args(["--format", "records", "--seed", "1"])
        .args(["clusters", "-n", "4", "-p", "1", "-r", "3"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H hypergraphs=1 records=1 mode=clusters model=hypercube n=4 p=1 seed=1 nodes=16",
        ))
        .stdout(predicate::str::contains("C 16\nC 16\nC 16\n"));
}

#[test]
fn test_clusters_json_echoes_run() {
    let dir = tempdir().unwrap();
    let output = hypergraphs(dir.path())
        .args(["--format", "json", "--seed", "7"])
        .args(["clusters", "-n", "5", "-p", "0.3", "-r", "25", "--start", "4"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["mode"], "clusters");
    assert_eq!(json["seed"], 7);
    assert_eq!(json["start"], 4);
    assert_eq!(json["node_count"], 32);
    let sizes = json["sizes"].as_array().unwrap();
    assert_eq!(sizes.len(), 25);
    assert!(sizes.iter().all(|s| (1..=32).contains(&s.as_u64().unwrap())));
}

#[test]
fn test_clusters_human_quiet() {
    let dir = tempdir().unwrap();
    hypergraphs(dir.path())
        .args(["--quiet", "clusters", "-n", "3", "-p", "1", "-r", "2"])
        .assert()
        .success()
        .stdout("8 8\n");
}

#[test]
fn test_clusters_stats_json() {
    let dir = tempdir().unwrap();
    let output = hypergraphs(dir.path())
        .args(["--format", "json", "--seed", "3"])
        .args(["clusters", "-n", "1", "-p", "0.5", "-r", "400", "--stats"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let stats = &json["statistics"];
    assert_eq!(stats["realisations"], 400);
    let bins = stats["bins"].as_array().unwrap();
    assert!(bins.iter().all(|b| b["size"] == 1 || b["size"] == 2));
    let total: f64 = bins.iter().map(|b| b["weight"].as_f64().unwrap()).sum();
    assert!((total - 1.0).abs() < 1e-9);
}

#[test]
fn test_same_seed_reproduces_output() {
    let dir = tempdir().unwrap();
    let run = || {
        hypergraphs(dir.path())
            .args(["--format", "records", "--seed", "99"])
            .args(["clusters", "-n", "8", "-p", "0.2", "-r", "50"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

// ============================================================================
// largest and paths
// ============================================================================

#[test]
fn test_largest_isolated_nodes_with_and_without_early_exit() {
    let dir = tempdir().unwrap();
    let output = hypergraphs(dir.path())
        .args(["--format", "json", "largest", "-n", "3", "-p", "0", "--no-early-exit"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["largest_size"], 1);
    assert_eq!(json["component_sizes"].as_array().unwrap().len(), 8);
    assert_eq!(json["stopped_early"], false);
    assert_eq!(json["nodes"], serde_json::json!([0]));

    // Early exit stops once one unvisited node is left
    let output = hypergraphs(dir.path())
        .args(["--format", "json", "largest", "-n", "3", "-p", "0"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["component_sizes"].as_array().unwrap().len(), 7);
    assert_eq!(json["stopped_early"], true);
    assert_eq!(json["total_visited"], 7);
}

#[test]
fn test_paths_full_concentration() {
    let dir = tempdir().unwrap();
    let output = hypergraphs(dir.path())
        .args(["--format", "json", "paths", "-n", "3", "-p", "1"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["distances"], serde_json::json!([0, 1, 1, 2, 1, 2, 2, 3]));
    assert_eq!(json["max_distance"], 3);
    assert_eq!(json["size"], 8);
}

#[test]
fn test_paths_largest_records() {
    let dir = tempdir().unwrap();
    hypergraphs(dir.path())
        .args(["--format", "records", "paths", "-n", "2", "-p", "1", "--largest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("scope=largest size=4 max_distance=2"))
        .stdout(predicate::str::contains("D 0\nD 1\nD 1\nD 2\n"));
}

#[test]
fn test_paths_start_conflicts_with_largest() {
    let dir = tempdir().unwrap();
    hypergraphs(dir.path())
        .args(["paths", "-n", "3", "--start", "2", "--largest"])
        .assert()
        .code(2);
}

// ============================================================================
// hamiltonian and sites
// ============================================================================

#[test]
fn test_hamiltonian_square_single_cluster() {
    let dir = tempdir().unwrap();
    hypergraphs(dir.path())
        .args(["--format", "records", "hamiltonian", "-n", "2", "-p", "1"])
        .args(["--scope", "single"])
        .assert()
        .success()
        .stdout(predicate::str::contains("scope=single side=4 edges=4 size=4"))
        .stdout(predicate::str::contains("E 0 1\nE 0 2\nE 1 3\nE 2 3\n"));
}

#[test]
fn test_hamiltonian_json_matrix() {
    let dir = tempdir().unwrap();
    let output = hypergraphs(dir.path())
        .args(["--format", "json", "hamiltonian", "-n", "1", "-p", "1"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["scope"], "full");
    assert_eq!(json["matrix"], serde_json::json!([[0, 1], [1, 0]]));
}

#[test]
fn test_hamiltonian_largest_zero_concentration() {
    let dir = tempdir().unwrap();
    let output = hypergraphs(dir.path())
        .args(["--format", "json", "hamiltonian", "-n", "3", "-p", "0"])
        .args(["--scope", "largest"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["size"], 1);
    assert_eq!(json["edges"], 0);
    assert_eq!(json["enumeration"]["largest_label"], 0);
}

#[test]
fn test_hamiltonian_start_requires_single_scope() {
    let dir = tempdir().unwrap();
    hypergraphs(dir.path())
        .args(["hamiltonian", "-n", "2", "--start", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--start only applies to --scope single"));
}

#[test]
fn test_sites_records() {
    let dir = tempdir().unwrap();
    hypergraphs(dir.path())
        .args(["--format", "records", "sites", "-n", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=sites model=pxp n=3 nodes=5"))
        .stdout(predicate::str::contains(
            "S 0 0\nS 1 1\nS 2 2\nS 3 4\nS 4 5\n",
        ));
}

#[test]
fn test_sites_human_binary() {
    let dir = tempdir().unwrap();
    hypergraphs(dir.path())
        .args(["sites", "-n", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("8 PXP sites for N=4"))
        .stdout(predicate::str::contains("1010"));
}

// ============================================================================
// Errors and exit codes
// ============================================================================

#[test]
fn test_invalid_concentration_json_envelope() {
    let dir = tempdir().unwrap();
    let output = hypergraphs(dir.path())
        .args(["--format", "json", "clusters", "-n", "3", "-p", "1.5"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let json = stderr_json(&output);
    assert_eq!(json["error"]["type"], "invalid_concentration");
    assert_eq!(json["error"]["code"], 2);
}

#[test]
fn test_invalid_dimension_is_usage_error() {
    let dir = tempdir().unwrap();
    hypergraphs(dir.path())
        .args(["clusters", "-n", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid dimension 0"));
}

#[test]
fn test_invalid_start_is_usage_error() {
    let dir = tempdir().unwrap();
    hypergraphs(dir.path())
        .args(["clusters", "-n", "3", "--start", "8"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid start node 8"));
}

#[test]
fn test_unknown_model_rejected() {
    let dir = tempdir().unwrap();
    hypergraphs(dir.path())
        .args(["clusters", "-n", "3", "--model", "torus"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown model"));
}

#[test]
fn test_duplicate_format_json_envelope() {
    let dir = tempdir().unwrap();
    let output = hypergraphs(dir.path())
        .args(["--format", "json", "--format", "human", "sites", "-n", "2"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stderr_json(&output)["error"]["type"], "duplicate_format");
}

#[test]
fn test_missing_explicit_config_is_data_error() {
    let dir = tempdir().unwrap();
    let output = hypergraphs(dir.path())
        .arg("--format")
        .arg("json")
        .arg("--config")
        .arg(dir.path().join("missing.toml"))
        .args(["sites", "-n", "2"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    assert_eq!(stderr_json(&output)["error"]["type"], "config_not_found");
}

#[test]
fn test_malformed_config_is_data_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "model = [").unwrap();
    hypergraphs(dir.path())
        .args(["sites", "-n", "2"])
        .assert()
        .code(3);
}

// ============================================================================
// Configuration precedence
// ============================================================================

#[test]
fn test_config_file_supplies_defaults() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("run.toml");
    fs::write(&config, "model = \"pxp\"\nconcentration = 1.0\nrealisations = 2\n").unwrap();

    hypergraphs(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["--format", "records", "clusters", "-n", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("model=pxp n=5 p=1"))
        .stdout(predicate::str::contains("realisations=2"))
        .stdout(predicate::str::contains("C 13\nC 13\n"));
}

#[test]
fn test_flags_override_config() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "model = \"pxp\"\nconcentration = 1.0\nrealisations = 2\nseed = 5\n",
    )
    .unwrap();

    hypergraphs(dir.path())
        .args(["--format", "records", "--seed", "6"])
        .args(["clusters", "-n", "5", "-p", "0", "--model", "hypercube", "-r", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("model=hypercube n=5 p=0 seed=6"))
        .stdout(predicate::str::contains("C 1\n"));
}

#[test]
fn test_config_dir_format_applies() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "format = \"json\"\nseed = 11\n").unwrap();

    let output = hypergraphs(dir.path())
        .args(["sites", "-n", "3"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["sites"], serde_json::json!([0, 1, 2, 4, 5]));
}

#[test]
fn test_config_disables_early_exit() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "early_exit = false\n").unwrap();

    let output = hypergraphs(dir.path())
        .args(["--format", "json", "largest", "-n", "3", "-p", "0"])
        .output()
        .unwrap();
    assert_eq!(
        stdout_json(&output)["component_sizes"].as_array().unwrap().len(),
        8
    );
}

// ============================================================================
// Logging
// ============================================================================

#[test]
fn test_log_level_debug_shows_debug_messages() {
    let dir = tempdir().unwrap();
    hypergraphs(dir.path())
        .args(["--log-level", "debug", "sites", "-n", "2"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_default_log_level_hides_debug_messages() {
    let dir = tempdir().unwrap();
    hypergraphs(dir.path())
        .args(["sites", "-n", "2"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_verbose_logs_resolved_run() {
    let dir = tempdir().unwrap();
    hypergraphs(dir.path())
        .args(["--verbose", "clusters", "-n", "3", "-r", "1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("resolved_run"));
}

#[test]
fn test_log_json_emits_json_lines() {
    let dir = tempdir().unwrap();
    let output = hypergraphs(dir.path())
        .args(["--log-json", "--log-level", "debug", "sites", "-n", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    let first = stderr.lines().next().unwrap();
    assert!(serde_json::from_str::<serde_json::Value>(first).is_ok());
}
