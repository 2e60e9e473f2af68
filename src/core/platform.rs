// parashell-rs: `ParaShell` Interactive Shell Wrapper - Rust Port
//
// SPDX-FileCopyrightText: 2026 Oliver Nguyen
// SPDX-License-Identifier: GPL-3.0-or-later

//! Platform detection for listing and command-interpreter selection.

use serde::{Deserialize, Serialize};

/// The two families of listing/interpreter behavior this tool knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformKind {
    Posix,
    Windows,
}

impl PlatformKind {
    /// The platform this binary was built for.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// Number of (header, footer) summary lines the native listing tool
    /// wraps around the actual file lines.
    #[must_use]
    pub const fn listing_frame(self) -> (usize, usize) {
        match self {
            // `ls -l` prepends a "total N" line
            Self::Posix => (1, 0),
            // `dir` prepends volume/directory banner lines and appends
            // file/dir count summary lines
            Self::Windows => (5, 2),
        }
    }

    /// Command that clears the terminal.
    #[must_use]
    pub const fn clear_command(self) -> &'static str {
        match self {
            Self::Posix => "clear",
            Self::Windows => "cls",
        }
    }

    /// Command whose captured output is the directory listing.
    #[must_use]
    pub const fn listing_command(self) -> &'static str {
        match self {
            Self::Posix => "ls -l",
            Self::Windows => "dir",
        }
    }
}

impl std::fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Posix => write!(f, "posix"),
            Self::Windows => write!(f, "windows"),
        }
    }
}
