#![allow(clippy::unwrap_used, clippy::expect_used)]

//! CLI smoke tests for the abacus-server binary.
//!
//! These verify configuration validation, help output, and the basic
//! terminating commands without starting a server.

use std::io::Write;
use std::process::{Command, Stdio};

use tempfile::NamedTempFile;

/// Helper to run the abacus-server binary with given arguments
fn run_abacus_server(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_abacus-server"))
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute abacus-server")
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn help_lists_subcommands_and_options() {
    let output = run_abacus_server(&["--help"]);

    assert!(output.status.success(), "Help command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("abacus-server") || stdout.contains("Abacus"));
    assert!(stdout.contains("Usage:") || stdout.contains("USAGE:"));
    assert!(stdout.contains("run"), "Should contain 'run' subcommand");
    assert!(stdout.contains("check"), "Should contain 'check' subcommand");
    assert!(stdout.contains("--config"), "Should mention config option");
}

#[test]
fn version_prints_binary_name_and_number() {
    let output = run_abacus_server(&["--version"]);

    assert!(output.status.success(), "Version command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("abacus-server"));
    assert!(stdout.chars().any(|c| c.is_ascii_digit()));
}

#[test]
fn invalid_subcommand_fails() {
    let output = run_abacus_server(&["frobnicate"]);

    assert!(!output.status.success(), "Invalid command should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("error") || stderr.contains("invalid") || stderr.contains("unexpected"),
        "Should report the unrecognized subcommand"
    );
}

#[test]
fn missing_config_file_fails() {
    let output = run_abacus_server(&["--config", "/nonexistent/abacus.yaml", "check"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not exist"));
}

#[test]
fn check_accepts_valid_config() {
    let config = write_config(
        "server:\n  bind_addr: \"127.0.0.1:9321\"\nlogging:\n  level: debug\ncalculator:\n  reject_non_finite: true\n",
    );

    let output = run_abacus_server(&["--config", config.path().to_str().unwrap(), "check"]);

    assert!(
        output.status.success(),
        "check should accept a valid config: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Configuration is valid"));
    assert!(stdout.contains("127.0.0.1:9321"));
}

#[test]
fn check_rejects_unknown_fields() {
    let config = write_config("server:\n  bind_adr: \"127.0.0.1:9321\"\n");

    let output = run_abacus_server(&["--config", config.path().to_str().unwrap(), "check"]);

    assert!(!output.status.success(), "typo'd field should be rejected");
}

#[test]
fn check_rejects_unparseable_bind_addr() {
    let config = write_config("server:\n  bind_addr: \"not-an-address\"\n");

    let output = run_abacus_server(&["--config", config.path().to_str().unwrap(), "check"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid bind address"));
}

#[test]
fn print_config_shows_effective_port_override() {
    let output = run_abacus_server(&["--print-config", "--port", "9999"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Effective configuration"));
    assert!(stdout.contains("9999"));
}
