//! Integration tests for the CLI surface

use assert_cmd::Command;
use predicates::prelude::*;

fn scaffold_picker() -> Command {
    Command::cargo_bin("scaffold-picker").unwrap()
}

#[test]
fn test_help_lists_subcommands() {
    scaffold_picker()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("types"))
        .stdout(predicate::str::contains("tui"));
}

#[test]
fn test_version_flag() {
    scaffold_picker()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_types_lists_catalog() {
    scaffold_picker()
        .arg("types")
        .assert()
        .success()
        .stdout(predicate::str::contains("python"))
        .stdout(predicate::str::contains("flask-large"))
        .stdout(predicate::str::contains("SQLAlchemy project"));
}

#[test]
fn test_completions_bash() {
    scaffold_picker()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("scaffold-picker"));
}

#[test]
fn test_man_page() {
    scaffold_picker()
        .arg("man")
        .assert()
        .success()
        .stdout(predicate::str::contains(".TH"));
}

#[test]
fn test_unknown_subcommand_fails() {
    scaffold_picker().arg("frobnicate").assert().failure();
}

#[test]
fn test_show_with_explicit_config() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[picker]\nindent_width = 4\n").unwrap();

    scaffold_picker()
        .args(["--config"])
        .arg(&path)
        .args(["show", "python", "--name", "proj"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[x]     __init__.py"));
}

#[test]
fn test_missing_config_file_fails() {
    scaffold_picker()
        .args(["--config", "/nonexistent/config.toml", "types"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}
