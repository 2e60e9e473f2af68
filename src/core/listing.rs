// parashell-rs: `ParaShell` Interactive Shell Wrapper - Rust Port
//
// SPDX-FileCopyrightText: 2026 Oliver Nguyen
// SPDX-License-Identifier: GPL-3.0-or-later

//! Directory-listing capture.
//!
//! Tool selection (`ls -l` vs `dir`) lives here, not in the paginator; the
//! paginator only ever sees raw text plus the platform kind.

use std::path::Path;

use crate::core::encoding::decode_console;
use crate::core::platform::PlatformKind;
use crate::core::process::CommandRunner;
use crate::error::ProcessError;

/// Captures the native directory listing for the current directory.
#[derive(Debug, Clone, Copy)]
pub struct DirectoryLister {
    platform: PlatformKind,
}

impl DirectoryLister {
    #[must_use]
    pub const fn new(platform: PlatformKind) -> Self {
        Self { platform }
    }

    #[must_use]
    pub const fn platform(&self) -> PlatformKind {
        self.platform
    }

    /// Run the platform listing tool in `cwd` and decode its output.
    ///
    /// # Errors
    ///
    /// Returns a [`ProcessError`] when the tool cannot be spawned or exits
    /// non-zero; callers surface this as an unavailable listing rather than
    /// aborting the session.
    pub fn list(&self, runner: &CommandRunner, cwd: &Path) -> Result<String, ProcessError> {
        let bytes = runner.capture(self.platform.listing_command(), cwd)?;
        Ok(decode_console(self.platform, &bytes))
    }
}
