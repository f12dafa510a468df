//! CLI Integration Tests
//!
//! These tests verify the command surface and error wiring without a
//! running inventory server.

use assert_cmd::Command;
use predicates::prelude::*;

fn cli_cmd() -> Command {
    Command::cargo_bin("stockwatch").expect("Failed to find stockwatch binary")
}

#[test]
fn test_help_lists_subcommands() {
    cli_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("set"))
        .stdout(predicate::str::contains("low-stock"))
        .stdout(predicate::str::contains("export"));
}

#[test]
fn test_show_requires_part_id() {
    cli_cmd().arg("show").assert().failure();
}

#[test]
fn test_invalid_variant_is_rejected() {
    cli_cmd()
        .args(["show", "1", "--variant", "bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid variant"));
}

#[test]
fn test_show_fails_cleanly_when_server_unreachable() {
    // Nothing listens on port 1; the load error is the panel's terminal
    // message, not a panic or a retry loop.
    cli_cmd()
        .args(["show", "42", "--server", "http://127.0.0.1:1/"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load part data"));
}

#[test]
fn test_set_fails_cleanly_when_server_unreachable() {
    cli_cmd()
        .args(["set", "42", "10", "--server", "http://127.0.0.1:1/"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to update stock threshold"));
}

#[test]
fn test_low_stock_fails_cleanly_when_server_unreachable() {
    cli_cmd()
        .args(["low-stock", "--server", "http://127.0.0.1:1/"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error fetching low stock items"));
}
