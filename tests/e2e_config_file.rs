/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the full flow from config file on disk through CLI invocation
/// to correct output, using `assert_cmd` and `tempfile` for isolated test environments.
mod test_utilities;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;
use test_utilities::sample_reports::REPORT_JSON;
use test_utilities::stub_server::{StubRoute, StubServer};

// ============================================================================
// Helper Functions
// ============================================================================

const CONFIG_FILENAME: &str = "sentinel-scan.config.yml";

fn sentinel_scan(workdir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("sentinel-scan");
    cmd.current_dir(workdir.path())
        .env_remove("SENTINEL_SCAN_SERVER")
        .env_remove("RUST_LOG");
    cmd
}

fn report_server() -> StubServer {
    StubServer::start(vec![
        StubRoute::json("GET", "/api/reports/a1b2c3d4e5f6", 200, REPORT_JSON),
        StubRoute::json("GET", "/api/reports", 200, "[]"),
    ])
}

/// Write a config file at the specified path.
fn write_config(path: &std::path::Path, content: &str) {
    fs::write(path, content).unwrap();
}

// ============================================================================
// Auto-discovery
// ============================================================================

#[test]
fn test_discovered_config_sets_server_and_format() {
    let server = report_server();
    let workdir = TempDir::new().unwrap();
    write_config(
        &workdir.path().join(CONFIG_FILENAME),
        &format!("server_url: {}\nformat: markdown\n", server.url()),
    );

    sentinel_scan(&workdir)
        .args(["show", "a1b2c3d4e5f6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Scan Report"));
    assert_eq!(server.requests().len(), 1);
}

#[test]
fn test_cli_flags_override_config() {
    let server = report_server();
    let workdir = TempDir::new().unwrap();
    write_config(
        &workdir.path().join(CONFIG_FILENAME),
        "server_url: http://127.0.0.1:9\nformat: markdown\nseverity: low\n",
    );

    let output = sentinel_scan(&workdir)
        .args(["show", "a1b2c3d4e5f6", "--server", server.url(), "-f", "json", "-S", "all"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["findings"]["filter"], "All");
    assert_eq!(value["findings"]["rows"].as_array().unwrap().len(), 4);
}

#[test]
fn test_config_severity_and_fail_on() {
    let server = report_server();
    let workdir = TempDir::new().unwrap();
    write_config(
        &workdir.path().join(CONFIG_FILENAME),
        &format!(
            "server_url: {}\nseverity: medium\nfail_on: medium\n",
            server.url()
        ),
    );

    sentinel_scan(&workdir)
        .args(["show", "a1b2c3d4e5f6"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("XSS-002"))
        .stdout(predicate::str::contains("SQLI-001").not());
}

// ============================================================================
// Explicit --config
// ============================================================================

#[test]
fn test_explicit_config_path() {
    let server = report_server();
    let workdir = TempDir::new().unwrap();
    let config_path = workdir.path().join("ci.yml");
    write_config(&config_path, &format!("server_url: {}\n", server.url()));

    sentinel_scan(&workdir)
        .args(["history", "--config"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No previous scans."));
}

#[test]
fn test_explicit_config_missing_is_error() {
    let workdir = TempDir::new().unwrap();

    sentinel_scan(&workdir)
        .args(["history", "--config", "missing.yml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to read config file"));
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_invalid_config_value_is_error() {
    let workdir = TempDir::new().unwrap();
    write_config(&workdir.path().join(CONFIG_FILENAME), "fail_on: critical\n");

    sentinel_scan(&workdir)
        .arg("history")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid configuration: fail_on"));
}

#[test]
fn test_unknown_config_field_warns() {
    let server = report_server();
    let workdir = TempDir::new().unwrap();
    write_config(
        &workdir.path().join(CONFIG_FILENAME),
        &format!("server_url: {}\nretries: 3\n", server.url()),
    );

    sentinel_scan(&workdir)
        .arg("history")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Unknown config field 'retries' will be ignored",
        ));
}
