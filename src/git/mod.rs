// parashell-rs: `ParaShell` Interactive Shell Wrapper - Rust Port
//
// SPDX-FileCopyrightText: 2026 Oliver Nguyen
// SPDX-License-Identifier: GPL-3.0-or-later

//! Version-control client consumed by the git menus.
//!
//! ```text
//! VcsClient (trait)
//!     |
//!     v
//!   GitCli { cwd }
//!     reads  -> GixBackend   (branch, repo name, detached HEAD)
//!     text   -> ShellBackend (status, log - CLI output verbatim)
//!     writes -> ShellBackend (add/mv/restore/rm/commit/push)
//! ```
//!
//! The menu dispatcher treats every mutating call as an opaque pass/fail
//! outcome; failures carry the native exit code.

pub mod backend;

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

use crate::error::ShellResult;

use backend::{GixBackend, ShellBackend};

/// Check that the git binary is available at all. Startup probe for the
/// git menus; without it they refuse to open.
#[must_use]
pub fn git_exists() -> bool {
    which::which("git").is_ok()
}

/// Capability set the menu hierarchy needs from version control.
pub trait VcsClient {
    /// Human-readable `git status` output.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the status command fails.
    fn status(&self) -> ShellResult<String>;

    /// Last `n` commits, one `<hash> | <age> | <subject>` line each.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the log command fails.
    fn log(&self, n: usize) -> ShellResult<String>;

    /// Stage a pathspec.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` carrying the native exit code on failure.
    fn add(&self, path: &str) -> ShellResult<()>;

    /// Move or rename a tracked file.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` carrying the native exit code on failure.
    fn mv(&self, source: &str, destination: &str) -> ShellResult<()>;

    /// Unstage changes to a pathspec.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` carrying the native exit code on failure.
    fn restore_staged(&self, path: &str) -> ShellResult<()>;

    /// Restore a pathspec in the working tree to its last committed state.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` carrying the native exit code on failure.
    fn restore_working(&self, path: &str) -> ShellResult<()>;

    /// Restore a pathspec from a specific commit.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` carrying the native exit code on failure.
    fn restore_from_commit(&self, path: &str, commit: &str) -> ShellResult<()>;

    /// Remove a pathspec from the index and working tree.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` carrying the native exit code on failure.
    fn remove(&self, path: &str) -> ShellResult<()>;

    /// Commit all staged changes.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` carrying the native exit code on failure.
    fn commit(&self, message: &str) -> ShellResult<()>;

    /// Push to the default remote.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` carrying the native exit code on failure.
    fn push(&self) -> ShellResult<()>;

    /// Current branch name, or `detached at <abbrev>` on a detached HEAD.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if head resolution fails.
    fn current_branch(&self) -> ShellResult<String>;

    /// Repository name (last component of the work tree path).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if discovery fails or the repository is bare.
    fn current_repo_name(&self) -> ShellResult<String>;
}

/// [`VcsClient`] over a repository work tree on disk.
#[derive(Debug, Clone)]
pub struct GitCli {
    cwd: PathBuf,
}

impl GitCli {
    #[must_use]
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: cwd.into() }
    }

    #[must_use]
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Whether `cwd` is inside a git work tree.
    #[must_use]
    pub fn is_repository(&self) -> bool {
        GixBackend::is_git_repo(&self.cwd)
    }
}

impl VcsClient for GitCli {
    fn status(&self) -> ShellResult<String> {
        ShellBackend::git_command(&["status"], &self.cwd)
    }

    fn log(&self, n: usize) -> ShellResult<String> {
        let n_flag = format!("-n{n}");
        ShellBackend::git_command(
            &["log", "--pretty=format:%h | %ar | %s", &n_flag],
            &self.cwd,
        )
    }

    fn add(&self, path: &str) -> ShellResult<()> {
        ShellBackend::git_passthrough(&["add", path], &self.cwd)
    }

    fn mv(&self, source: &str, destination: &str) -> ShellResult<()> {
        ShellBackend::git_passthrough(&["mv", source, destination], &self.cwd)
    }

    fn restore_staged(&self, path: &str) -> ShellResult<()> {
        ShellBackend::git_passthrough(&["restore", "--staged", path], &self.cwd)
    }

    fn restore_working(&self, path: &str) -> ShellResult<()> {
        ShellBackend::git_passthrough(&["restore", path], &self.cwd)
    }

    fn restore_from_commit(&self, path: &str, commit: &str) -> ShellResult<()> {
        let source_flag = format!("--source={commit}");
        ShellBackend::git_passthrough(&["restore", &source_flag, path], &self.cwd)
    }

    fn remove(&self, path: &str) -> ShellResult<()> {
        ShellBackend::git_passthrough(&["rm", path], &self.cwd)
    }

    fn commit(&self, message: &str) -> ShellResult<()> {
        ShellBackend::git_passthrough(&["commit", "-m", message], &self.cwd)
    }

    fn push(&self) -> ShellResult<()> {
        ShellBackend::git_passthrough(&["push"], &self.cwd)
    }

    fn current_branch(&self) -> ShellResult<String> {
        match GixBackend::current_branch(&self.cwd)? {
            Some(branch) => Ok(branch),
            None => {
                let abbrev = GixBackend::head_abbrev(&self.cwd)?;
                Ok(format!("detached at {abbrev}"))
            }
        }
    }

    fn current_repo_name(&self) -> ShellResult<String> {
        GixBackend::repo_name(&self.cwd)
    }
}
