// parashell-rs: `ParaShell` Interactive Shell Wrapper - Rust Port
//
// SPDX-FileCopyrightText: 2026 Oliver Nguyen
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command-interpreter discovery.
//!
//! Used as the fallback when the config file carries no `[shell] path` key:
//! zsh, then bash, then sh on posix; cmd.exe on Windows.

use std::path::PathBuf;
use tracing::debug;

use crate::error::ProcessError;

/// Check whether a shell binary exists on PATH.
#[must_use]
pub fn shell_exists(name: &str) -> bool {
    which::which(name).is_ok()
}

/// Find the best shell for the current machine.
///
/// # Errors
///
/// Returns [`ProcessError::NoShellFound`] when none of the candidate shells
/// is on PATH. This is an unrecoverable startup condition.
pub fn best_shell() -> Result<PathBuf, ProcessError> {
    if cfg!(windows) {
        return Ok(PathBuf::from("C:\\Windows\\System32\\cmd.exe"));
    }
    for candidate in ["zsh", "bash", "sh"] {
        if let Ok(path) = which::which(candidate) {
            debug!(shell = candidate, path = %path.display(), "shell found");
            return Ok(path);
        }
    }
    Err(ProcessError::NoShellFound)
}
