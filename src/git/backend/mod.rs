// parashell-rs: `ParaShell` Interactive Shell Wrapper - Rust Port
//
// SPDX-FileCopyrightText: 2026 Oliver Nguyen
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git backend abstraction layer.
//!
//! ```text
//! reads  --> GixBackend   (pure Rust gix: discovery, HEAD, repo name)
//! writes --> ShellBackend (git CLI: status/log text, mutations)
//! ```
//!
//! Status and log text must be the git CLI's own output, verbatim; gix only
//! answers the questions that never reach the user's eyes directly.

use std::path::Path;
use std::process::Command;

use crate::error::{GitError, GixError, ShellResult};

// --- GixBackend Implementation (Pure Rust) ---

/// Pure Rust git backend using gix.
///
/// Provides read-only queries without spawning subprocesses.
pub struct GixBackend;

impl GixBackend {
    /// Check if path is inside a git work tree.
    #[must_use]
    pub fn is_git_repo(path: &Path) -> bool {
        gix::discover(path).is_ok()
    }

    /// Get current branch name (None if HEAD is detached).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery or head resolution fails.
    pub fn current_branch(path: &Path) -> ShellResult<Option<String>> {
        let repo =
            gix::discover(path).map_err(|e| GitError::Gix(GixError::Discover(Box::new(e))))?;
        let head = repo
            .head_name()
            .map_err(|e| GitError::Gix(GixError::Head(Box::new(e))))?;
        Ok(head.map(|name| name.shorten().to_string()))
    }

    /// Abbreviated hex id of the current HEAD commit.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if discovery fails or HEAD is unborn.
    pub fn head_abbrev(path: &Path) -> ShellResult<String> {
        let repo =
            gix::discover(path).map_err(|e| GitError::Gix(GixError::Discover(Box::new(e))))?;
        let id = repo
            .head_id()
            .map_err(|e| GitError::Gix(GixError::HeadCommit(Box::new(e))))?;
        let mut hex = id.to_string();
        hex.truncate(7);
        Ok(hex)
    }

    /// Name of the repository, i.e. the last component of the work tree.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if discovery fails or the repository is bare.
    pub fn repo_name(path: &Path) -> ShellResult<String> {
        let repo =
            gix::discover(path).map_err(|e| GitError::Gix(GixError::Discover(Box::new(e))))?;
        let workdir = repo
            .workdir()
            .ok_or(GitError::Gix(GixError::BareRepository))?;
        let name = workdir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or(GitError::Gix(GixError::BareRepository))?;
        Ok(name)
    }
}

// --- ShellBackend Implementation (Git CLI) ---

/// Shell-based git backend driving the git CLI.
///
/// Mutations inherit the caller's stdio so the user sees git's own
/// progress and hints, exactly as if they had typed the command.
pub struct ShellBackend;

impl ShellBackend {
    /// Execute a git command with captured output.
    /// Sets `GCM_INTERACTIVE=never` and `GIT_TERMINAL_PROMPT=0` so a
    /// captured query can never hang on a credential prompt.
    ///
    /// # Errors
    ///
    /// Returns `GitError::CommandFailed` on a non-zero exit, with stderr as
    /// the message.
    pub(crate) fn git_command(args: &[&str], cwd: &Path) -> ShellResult<String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(cwd)
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()
            .map_err(|e| std::io::Error::new(e.kind(), format!("failed to execute git: {e}")))?;

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command: format!("git {}", args.join(" ")),
                code: output.status.code().unwrap_or(-1),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Execute a mutating git command with inherited stdio.
    ///
    /// # Errors
    ///
    /// Returns `GitError::CommandFailed` carrying the native exit code on a
    /// non-zero exit.
    pub(crate) fn git_passthrough(args: &[&str], cwd: &Path) -> ShellResult<()> {
        let status = Command::new("git")
            .args(args)
            .current_dir(cwd)
            .status()
            .map_err(|e| std::io::Error::new(e.kind(), format!("failed to execute git: {e}")))?;

        if !status.success() {
            return Err(GitError::CommandFailed {
                command: format!("git {}", args.join(" ")),
                code: status.code().unwrap_or(-1),
                message: String::new(),
            }
            .into());
        }
        Ok(())
    }

    /// Check if path is inside a git work tree, via the CLI.
    #[must_use]
    pub fn is_git_repo(path: &Path) -> bool {
        Self::git_command(&["rev-parse", "--is-inside-work-tree"], path).is_ok()
    }
}
