// parashell-rs: `ParaShell` Interactive Shell Wrapper - Rust Port
//
// SPDX-FileCopyrightText: 2026 Oliver Nguyen
// SPDX-License-Identifier: GPL-3.0-or-later

//! First-run setup: write a default `parashell.toml` when none exists.

use std::path::Path;

use tracing::info;

use crate::core::shell::best_shell;
use crate::error::ConfigError;
use crate::session::prompt::DEFAULT_PROMPT_FORMAT;

/// Default name of the config file, looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "parashell.toml";

/// Write a default config file at `path` if none exists.
///
/// Returns `true` when the file was created, `false` when one was already
/// present.
///
/// # Errors
///
/// Returns [`ConfigError::WriteError`] if the file cannot be written.
pub fn ensure_config(path: &Path) -> Result<bool, ConfigError> {
    if path.exists() {
        info!(path = %path.display(), "config file found");
        return Ok(false);
    }

    info!(path = %path.display(), "config file not found, setting up");
    std::fs::write(path, default_config_toml()).map_err(|source| ConfigError::WriteError {
        path: path.display().to_string(),
        source,
    })?;
    Ok(true)
}

/// Contents of a freshly written config file.
#[must_use]
pub fn default_config_toml() -> String {
    let mut out = format!(
        "[meta]\n\
         version = \"{}\"\n\
         \n\
         [prompt]\n\
         format = \"{DEFAULT_PROMPT_FORMAT}\"\n",
        env!("CARGO_PKG_VERSION"),
    );
    // the shell section is only pre-filled where a shell can be probed
    if let Ok(shell) = best_shell() {
        out.push_str(&format!("\n[shell]\npath = \"{}\"\n", shell.display()));
    }
    out
}
