// parashell-rs: `ParaShell` Interactive Shell Wrapper - Rust Port
//
// SPDX-FileCopyrightText: 2026 Oliver Nguyen
// SPDX-License-Identifier: GPL-3.0-or-later

//! Prompt string construction.
//!
//! The prompt format is a template with `{username}`, `{hostname}` and
//! `{cwd}` placeholders, substituted fresh on every loop iteration so a
//! directory change shows up immediately.

use std::path::Path;

/// Format used when the config carries no `[prompt]` section.
pub const DEFAULT_PROMPT_FORMAT: &str = "{username}@{hostname}:{cwd}";

/// Substitute the placeholders of `format` for the current iteration.
#[must_use]
pub fn format_prompt(format: &str, cwd: &Path) -> String {
    format
        .replace("{username}", &username())
        .replace("{hostname}", &hostname())
        .replace("{cwd}", &cwd.display().to_string())
}

/// Login name from the environment; `user` when nothing is set.
#[must_use]
pub fn username() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "user".to_string())
}

/// Machine name from the environment; `localhost` when nothing is set.
#[must_use]
pub fn hostname() -> String {
    std::env::var("HOSTNAME")
        .or_else(|_| std::env::var("COMPUTERNAME"))
        .unwrap_or_else(|_| "localhost".to_string())
}
