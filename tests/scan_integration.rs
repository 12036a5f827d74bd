//! Integration tests for discovery and auto-selection.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn devjump() -> Command {
    Command::cargo_bin("devjump").unwrap()
}

fn write_config(dir: &Path, roots: &[&Path], vcs: &str) -> PathBuf {
    let config = dir.join("config.toml");
    let roots = roots
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(":");
    fs::write(
        &config,
        format!("[search]\nroots = \"{roots}\"\nvcs = \"{vcs}\"\n"),
    )
    .unwrap();
    config
}

/// Roots with three projects: alpha (git), beta (git), engine (hg).
fn create_test_workspace() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    fs::create_dir_all(root.join("roots/alpha/.git")).unwrap();
    fs::write(root.join("roots/alpha/README"), "alpha").unwrap();

    fs::create_dir_all(root.join("roots/nested/beta/.git")).unwrap();

    fs::create_dir_all(root.join("roots/engine/.hg")).unwrap();

    // Not a project: no marker.
    fs::create_dir_all(root.join("roots/scratch")).unwrap();

    tmp
}

#[test]
fn single_match_auto_commits() {
    let tmp = create_test_workspace();
    let config = write_config(tmp.path(), &[&tmp.path().join("roots")], "git:hg");
    let state = tmp.path().join("state");

    devjump()
        .env("DEVJUMP_STATE", &state)
        .arg("--config")
        .arg(&config)
        .arg("alpha")
        .assert()
        .success();

    let committed = fs::read_to_string(&state).unwrap();
    let expected = tmp
        .path()
        .join("roots/alpha")
        .canonicalize()
        .unwrap();
    assert_eq!(committed, format!("{}\n", expected.display()));
}

#[test]
fn single_match_prints_no_listing() {
    let tmp = create_test_workspace();
    let config = write_config(tmp.path(), &[&tmp.path().join("roots")], "git:hg");

    devjump()
        .env("DEVJUMP_STATE", tmp.path().join("state"))
        .arg("--config")
        .arg(&config)
        .arg("alpha")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn no_match_fails_without_writing() {
    let tmp = create_test_workspace();
    let config = write_config(tmp.path(), &[&tmp.path().join("roots")], "git:hg");
    let state = tmp.path().join("state");

    devjump()
        .env("DEVJUMP_STATE", &state)
        .arg("--config")
        .arg(&config)
        .arg("zeppelin")
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("zeppelin"));

    assert!(!state.exists());
}

#[test]
fn pattern_can_match_vcs_kind() {
    let tmp = create_test_workspace();
    let config = write_config(tmp.path(), &[&tmp.path().join("roots")], "git:hg");
    let state = tmp.path().join("state");

    // Only one hg project exists, so matching on the kind auto-commits.
    // Anchored so the pattern cannot accidentally match a path segment.
    devjump()
        .env("DEVJUMP_STATE", &state)
        .arg("--config")
        .arg(&config)
        .arg("^hg$")
        .assert()
        .success();

    let committed = fs::read_to_string(&state).unwrap();
    assert!(committed.contains("engine"));
}

#[test]
fn disallowed_kinds_are_invisible() {
    let tmp = create_test_workspace();
    // git only: the hg engine project must not be discovered.
    let config = write_config(tmp.path(), &[&tmp.path().join("roots")], "git");

    devjump()
        .env("DEVJUMP_STATE", tmp.path().join("state"))
        .arg("--config")
        .arg(&config)
        .arg("engine")
        .assert()
        .failure()
        .code(5);
}

#[test]
fn nested_working_copy_is_not_discovered() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("roots/outer/.git")).unwrap();
    fs::create_dir_all(tmp.path().join("roots/outer/vendor/dep/.git")).unwrap();
    let config = write_config(tmp.path(), &[&tmp.path().join("roots")], "git");
    let state = tmp.path().join("state");

    // "dep" only exists nested inside the claimed project.
    devjump()
        .env("DEVJUMP_STATE", &state)
        .arg("--config")
        .arg(&config)
        .arg("dep")
        .assert()
        .failure()
        .code(5);
}

#[test]
fn duplicate_roots_collapse_to_one_project() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("roots/solo/.git")).unwrap();
    let root = tmp.path().join("roots");
    let config = write_config(tmp.path(), &[&root, &root], "git");
    let state = tmp.path().join("state");

    // Were the duplicate root counted twice, two matches would prompt
    // instead of auto-committing.
    devjump()
        .env("DEVJUMP_STATE", &state)
        .arg("--config")
        .arg(&config)
        .arg("solo")
        .assert()
        .success();

    assert!(state.exists());
}

#[test]
fn ambiguous_markers_abort() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("roots/confused/.git")).unwrap();
    fs::create_dir_all(tmp.path().join("roots/confused/.svn")).unwrap();
    let config = write_config(tmp.path(), &[&tmp.path().join("roots")], "git:svn");
    let state = tmp.path().join("state");

    devjump()
        .env("DEVJUMP_STATE", &state)
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("more than one VCS"));

    assert!(!state.exists());
}

#[test]
fn invalid_pattern_is_fatal() {
    let tmp = create_test_workspace();
    let config = write_config(tmp.path(), &[&tmp.path().join("roots")], "git:hg");

    devjump()
        .env("DEVJUMP_STATE", tmp.path().join("state"))
        .arg("--config")
        .arg(&config)
        .arg("*oops")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("regular expression"));
}

#[test]
fn previous_reuses_committed_selection() {
    let tmp = create_test_workspace();
    let config = write_config(tmp.path(), &[&tmp.path().join("roots")], "git:hg");
    let state = tmp.path().join("state");

    devjump()
        .env("DEVJUMP_STATE", &state)
        .arg("--config")
        .arg(&config)
        .arg("alpha")
        .assert()
        .success();

    let before = fs::read_to_string(&state).unwrap();

    // --previous succeeds without a config file at all: no scan happens.
    devjump()
        .env("DEVJUMP_STATE", &state)
        .arg("--previous")
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&state).unwrap(), before);
}
