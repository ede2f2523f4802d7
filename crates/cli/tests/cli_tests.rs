//! Integration tests for commands that need no remote system.

mod common;

use common::cmk_sync_cmd;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    cmk_sync_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("handle"))
        .stdout(predicate::str::contains("sync"))
        .stdout(predicate::str::contains("delete"))
        .stdout(predicate::str::contains("path"));
}

#[test]
fn test_path_full_hierarchy() {
    cmk_sync_cmd()
        .args(["path", "--site", "berlin", "--region", "de", "--parent-region", "europe"])
        .assert()
        .success()
        .stdout("/network/europe/de/berlin\n");
}

#[test]
fn test_path_ignores_parent_without_region() {
    cmk_sync_cmd()
        .args(["path", "--site", "berlin", "--parent-region", "europe", "--root", "/sites/"])
        .assert()
        .success()
        .stdout("/sites/berlin\n");
}

#[test]
fn test_missing_subcommand_is_usage_error() {
    cmk_sync_cmd().assert().failure().code(2);
}

#[test]
fn test_delete_requires_name() {
    cmk_sync_cmd()
        .arg("delete")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--name"));
}
