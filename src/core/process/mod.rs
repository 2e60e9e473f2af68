// parashell-rs: `ParaShell` Interactive Shell Wrapper - Rust Port
//
// SPDX-FileCopyrightText: 2026 Oliver Nguyen
// SPDX-License-Identifier: GPL-3.0-or-later

//! Synchronous process execution through the configured shell.
//!
//! ```text
//! CommandRunner { shell }
//!   run()      inherit stdio, blocks, returns exit code
//!   capture()  captured stdout, used for directory listings
//!   clear_screen()
//! ```
//!
//! Every invocation blocks the whole session until the child returns; there
//! is no cancellation beyond the terminal's own interrupt.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

use crate::core::platform::PlatformKind;
use crate::error::ProcessError;

/// Runs free-form command lines through the user's shell, inheriting the
/// caller's standard streams.
#[derive(Debug, Clone)]
pub struct CommandRunner {
    shell: PathBuf,
    platform: PlatformKind,
}

impl CommandRunner {
    #[must_use]
    pub const fn new(shell: PathBuf, platform: PlatformKind) -> Self {
        Self { shell, platform }
    }

    /// Path of the interpreter this runner shells out to.
    #[must_use]
    pub fn shell(&self) -> &Path {
        &self.shell
    }

    const fn command_flag(&self) -> &'static str {
        match self.platform {
            PlatformKind::Posix => "-c",
            PlatformKind::Windows => "/C",
        }
    }

    /// Run `command` with inherited stdio and wait for it.
    ///
    /// Returns the child's exit code; a non-zero code is an outcome, not an
    /// error. Exit by signal maps to -1.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::SpawnFailed`] if the shell cannot be spawned.
    pub fn run(&self, command: &str) -> Result<i32, ProcessError> {
        debug!(cmd = %command, shell = %self.shell.display(), "exec");
        let status = Command::new(&self.shell)
            .arg(self.command_flag())
            .arg(command)
            .status()
            .map_err(|source| ProcessError::SpawnFailed {
                command: command.to_string(),
                source,
            })?;
        Ok(status.code().unwrap_or(-1))
    }

    /// Run `command` in `cwd` with captured stdout.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::SpawnFailed`] if the shell cannot be spawned
    /// and [`ProcessError::NonZeroExit`] if the command fails.
    pub fn capture(&self, command: &str, cwd: &Path) -> Result<Vec<u8>, ProcessError> {
        debug!(cmd = %command, cwd = %cwd.display(), "capture");
        let output = Command::new(&self.shell)
            .arg(self.command_flag())
            .arg(command)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ProcessError::SpawnFailed {
                command: command.to_string(),
                source,
            })?;
        if !output.status.success() {
            return Err(ProcessError::NonZeroExit {
                command: command.to_string(),
                code: output.status.code().unwrap_or(-1),
            });
        }
        Ok(output.stdout)
    }

    /// Clear the terminal. Failure is logged and otherwise ignored; a
    /// cluttered screen is not worth interrupting the session for.
    pub fn clear_screen(&self) {
        match self.run(self.platform.clear_command()) {
            Ok(0) => {}
            Ok(code) => debug!(code, "clear command exited non-zero"),
            Err(e) => debug!(error = %e, "clear command failed"),
        }
    }
}

/// Current terminal width in columns, falling back to 80 when the size
/// cannot be queried (pipes, dumb terminals).
#[must_use]
pub fn terminal_width() -> usize {
    crossterm::terminal::size().map_or(80, |(cols, _rows)| usize::from(cols))
}
