//! Integration tests for the yardstick CLI
//!
//! These tests run the compiled binary against temporary repositories and
//! check the output formats, exit codes, and config handling end to end.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper function to create a yardstick command isolated from the user's config
fn yardstick(config_home: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("yardstick"));
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

/// Helper to write a file, creating parent directories
fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Helper to populate a repository that passes every presence check
fn healthy_repo(root: &Path) {
    write(
        root,
        "README.md",
        "# Demo\n\n## Overview\n\n## Installation\n\n## Usage\n\n## CI\n\n## License\n",
    );
    write(root, "LICENSE", "MIT License\n");
    write(root, ".gitignore", "target/\n");
    write(root, "CHANGELOG.md", "# Changelog\n");
    write(root, ".github/CODEOWNERS", "* @team\n");
    write(root, "CONTRIBUTING.md", "# Contributing\n");
    write(root, "SECURITY.md", "# Security\n");
    write(root, ".github/workflows/ci.yml", "on: push\n");
    write(root, "go.mod", "module demo\n");
}

// =============================================================================
// INFORMATIONAL FLAGS
// =============================================================================

#[test]
fn test_version_flag() {
    let home = TempDir::new().unwrap();
    yardstick(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("yardstick"));
}

#[test]
fn test_list_prints_checks_in_order() {
    let home = TempDir::new().unwrap();
    let output = yardstick(home.path()).arg("--list").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let keys: Vec<&str> = stdout
        .lines()
        .map(|l| l.split(" - ").next().unwrap())
        .collect();
    assert_eq!(keys.len(), 13);
    assert_eq!(keys[0], "manifest");
    assert_eq!(keys[12], "static_site");
    assert!(stdout.contains("license - Ensures LICENSE file is present"));
}

// =============================================================================
// REPORTS AND EXIT CODES
// =============================================================================

#[test]
fn test_empty_repo_table_succeeds_without_strict() {
    let home = TempDir::new().unwrap();
    let repo = TempDir::new().unwrap();
    yardstick(home.path())
        .args(["--path", repo.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("CHECK"))
        .stdout(predicate::str::contains("LICENSE missing"))
        .stdout(predicate::str::contains("9 of 13 checks failed."));
}

#[test]
fn test_strict_turns_warnings_into_exit_2() {
    let home = TempDir::new().unwrap();
    let repo = TempDir::new().unwrap();
    yardstick(home.path())
        .args(["--path", repo.path().to_str().unwrap(), "--strict"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("checks failed."))
        .stderr(predicate::str::contains("yardstick: policy violations found"));
}

#[test]
fn test_healthy_repo_passes_strict() {
    let home = TempDir::new().unwrap();
    let repo = TempDir::new().unwrap();
    healthy_repo(repo.path());
    yardstick(home.path())
        .args(["--path", repo.path().to_str().unwrap(), "--strict"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Go project detected via go.mod"));
}

#[test]
fn test_json_output() {
    let home = TempDir::new().unwrap();
    let repo = TempDir::new().unwrap();
    let output = yardstick(home.path())
        .args(["--path", repo.path().to_str().unwrap()])
        .args(["--format", "json", "--only", "license,changelog"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["summary"], "2 of 2 checks failed.");
    assert_eq!(v["checks"][0]["check"], "license");
    assert_eq!(v["checks"][1]["check"], "changelog");
    assert_eq!(v["counts"]["warn"], 2);
}

#[test]
fn test_readme_link_problems_are_reported() {
    let home = TempDir::new().unwrap();
    let repo = TempDir::new().unwrap();
    write(repo.path(), "README.md", "# Demo\n\n[x](#missing)\n[y](docs/gone.md)\n");
    yardstick(home.path())
        .args(["--path", repo.path().to_str().unwrap(), "--only", "readme_links"])
        .assert()
        .success()
        .stdout(predicate::str::contains("README link target not found: #missing"))
        .stdout(predicate::str::contains("README link file not found: docs/gone.md"));
}

// =============================================================================
// ABORTING ERRORS
// =============================================================================

#[test]
fn test_invalid_format_aborts() {
    let home = TempDir::new().unwrap();
    let repo = TempDir::new().unwrap();
    yardstick(home.path())
        .args(["--path", repo.path().to_str().unwrap(), "--format", "xml"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("yardstick error:"))
        .stderr(predicate::str::contains("xml"));
}

#[test]
fn test_unknown_check_key_aborts_and_names_every_key() {
    let home = TempDir::new().unwrap();
    let repo = TempDir::new().unwrap();
    yardstick(home.path())
        .args(["--path", repo.path().to_str().unwrap()])
        .args(["--only", "license,bogus,also_bogus", "--fix"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unknown check key(s): also_bogus, bogus"));
    assert!(!repo.path().join("LICENSE").exists());
}

#[test]
fn test_missing_path_aborts() {
    let home = TempDir::new().unwrap();
    let repo = TempDir::new().unwrap();
    yardstick(home.path())
        .args(["--path", repo.path().join("nope").to_str().unwrap()])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot access"));
}

// =============================================================================
// FIX MODE
// =============================================================================

#[test]
fn test_fix_writes_license() {
    let home = TempDir::new().unwrap();
    let repo = TempDir::new().unwrap();
    yardstick(home.path())
        .args(["--path", repo.path().to_str().unwrap(), "--only", "license", "--fix"])
        .assert()
        .success()
        .stdout(predicate::str::contains("LICENSE missing, created MIT license"))
        .stdout(predicate::str::contains("true"));

    let license = fs::read_to_string(repo.path().join("LICENSE")).unwrap();
    assert!(license.starts_with("MIT License"));
}

#[test]
fn test_default_run_writes_nothing() {
    let home = TempDir::new().unwrap();
    let repo = TempDir::new().unwrap();
    yardstick(home.path())
        .args(["--path", repo.path().to_str().unwrap()])
        .assert()
        .success();
    assert_eq!(fs::read_dir(repo.path()).unwrap().count(), 0);
}

// =============================================================================
// CONFIGURATION
// =============================================================================

#[test]
fn test_project_config_sets_format_and_strict() {
    let home = TempDir::new().unwrap();
    let repo = TempDir::new().unwrap();
    write(
        repo.path(),
        ".yardstick.toml",
        "format = \"json\"\nstrict = true\nonly = [\"license\"]\n",
    );
    yardstick(home.path())
        .args(["--path", repo.path().to_str().unwrap()])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("\"summary\": \"1 of 1 checks failed.\""));
}

#[test]
fn test_cli_flag_beats_config() {
    let home = TempDir::new().unwrap();
    let repo = TempDir::new().unwrap();
    write(repo.path(), ".yardstick.toml", "format = \"json\"\nonly = [\"license\"]\n");
    yardstick(home.path())
        .args(["--path", repo.path().to_str().unwrap(), "--format", "table"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("CHECK"));
}

#[test]
fn test_user_config_is_read() {
    let home = TempDir::new().unwrap();
    let repo = TempDir::new().unwrap();
    write(home.path(), "yardstick/config.toml", "only = [\"changelog\"]\n");
    yardstick(home.path())
        .args(["--path", repo.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 of 1 checks failed."));
}

#[test]
fn test_no_config_ignores_files() {
    let home = TempDir::new().unwrap();
    let repo = TempDir::new().unwrap();
    write(repo.path(), ".yardstick.toml", "format = \"json\"\n");
    yardstick(home.path())
        .args(["--path", repo.path().to_str().unwrap(), "--no-config"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("CHECK"));
}

#[test]
fn test_malformed_config_aborts() {
    let home = TempDir::new().unwrap();
    let repo = TempDir::new().unwrap();
    write(repo.path(), ".yardstick.toml", "strict = maybe\n");
    yardstick(home.path())
        .args(["--path", repo.path().to_str().unwrap()])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to parse config"));
}
