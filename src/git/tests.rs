// parashell-rs: `ParaShell` Interactive Shell Wrapper - Rust Port
//
// SPDX-FileCopyrightText: 2026 Oliver Nguyen
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{GitCli, VcsClient, git_exists};
use std::process::Command;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn run_git(args: &[&str], cwd: &std::path::Path) {
    let ok = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false);
    assert!(ok, "git {args:?} failed in {}", cwd.display());
}

fn init_repo_with_commit(dir: &std::path::Path) {
    run_git(&["init", "-q", "-b", "main"], dir);
    run_git(&["config", "user.email", "test@test.com"], dir);
    run_git(&["config", "user.name", "Test"], dir);
    std::fs::write(dir.join("README.md"), "# Test").unwrap();
    run_git(&["add", "README.md"], dir);
    run_git(&["commit", "-q", "-m", "initial commit"], dir);
}

#[test]
fn test_git_exists() {
    // the whole test suite shells out to git, so it had better be there
    assert!(git_exists());
}

#[test]
fn test_current_branch_and_repo_name() {
    let temp = temp_dir();
    init_repo_with_commit(temp.path());

    let git = GitCli::new(temp.path());
    assert!(git.is_repository());
    assert_eq!(git.current_branch().unwrap(), "main");

    let expected = temp
        .path()
        .file_name()
        .unwrap()
        .to_string_lossy()
        .into_owned();
    assert_eq!(git.current_repo_name().unwrap(), expected);
}

#[test]
fn test_detached_head_branch_label() {
    let temp = temp_dir();
    init_repo_with_commit(temp.path());
    run_git(&["checkout", "-q", "--detach", "HEAD"], temp.path());

    let git = GitCli::new(temp.path());
    let branch = git.current_branch().unwrap();
    assert!(
        branch.starts_with("detached at "),
        "branch label was: {branch}"
    );
    assert_eq!(branch.len(), "detached at ".len() + 7);
}

#[test]
fn test_log_format() {
    let temp = temp_dir();
    init_repo_with_commit(temp.path());

    let git = GitCli::new(temp.path());
    let log = git.log(6).unwrap();
    let first = log.lines().next().unwrap();
    // "<hash> | <age> | <subject>"
    assert_eq!(first.split(" | ").count(), 3, "log line was: {first}");
    assert!(first.ends_with("initial commit"));
}

#[test]
fn test_add_and_status_roundtrip() {
    let temp = temp_dir();
    init_repo_with_commit(temp.path());
    std::fs::write(temp.path().join("new.txt"), "data").unwrap();

    let git = GitCli::new(temp.path());
    git.add("new.txt").unwrap();
    let status = git.status().unwrap();
    assert!(status.contains("new.txt"), "status was: {status}");
    assert!(status.contains("new file"), "status was: {status}");
}

#[test]
fn test_mutation_failure_is_reported() {
    let temp = temp_dir();
    init_repo_with_commit(temp.path());

    let git = GitCli::new(temp.path());
    assert!(git.add("no-such-file-xyzzy").is_err());
    assert!(git.remove("no-such-file-xyzzy").is_err());
}
