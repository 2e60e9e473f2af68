// parashell-rs: `ParaShell` Interactive Shell Wrapper - Rust Port
//
// SPDX-FileCopyrightText: 2026 Oliver Nguyen
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for parashell.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. parashell.toml (cwd)
//! 3. --ini files, in order
//! 4. PARASHELL_* env vars
//! 5. --set CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! PARASHELL_GLOBAL_OUTPUT_LOG_LEVEL=4 → global.output_log_level = 4
//! PARASHELL_PROMPT_FORMAT="{cwd}$ "   → prompt.format = "{cwd}$ "
//! PARASHELL_SHELL_PATH=/bin/zsh       → shell.path = "/bin/zsh"
//! ```
//!
//! A stale config file (missing `[prompt]` or `[shell]` keys) degrades to
//! computed defaults with a warning rather than failing to load.

pub mod loader;
pub mod setup;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::core::shell::best_shell;
use crate::error::{ConfigError, Result};
use crate::session::prompt::DEFAULT_PROMPT_FORMAT;

use loader::ConfigLoader;
use types::{GlobalConfig, MetaConfig, PromptConfig, ShellConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Config-file bookkeeping.
    pub meta: MetaConfig,
    /// Logging options.
    pub global: GlobalConfig,
    /// Prompt template.
    pub prompt: PromptConfig,
    /// Shell selection.
    pub shell: ShellConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use parashell_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_default_ini("parashell.toml")
    ///     .with_env_prefix("PARASHELL")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML,
    /// or does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_ini_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match
    /// the `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validate what deserialization alone cannot catch.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt format carries an unknown or
    /// unterminated placeholder.
    pub fn resolve_and_validate(&mut self) -> Result<()> {
        if let Some(format) = &self.prompt.format {
            validate_placeholders(format)?;
        }
        Ok(())
    }

    /// The prompt template, falling back to the default when the config file
    /// predates the `[prompt]` section.
    #[must_use]
    pub fn prompt_format(&self) -> String {
        self.prompt.format.clone().unwrap_or_else(|| {
            warn!("prompt format not set; your parashell.toml may be out of date");
            DEFAULT_PROMPT_FORMAT.to_string()
        })
    }

    /// The configured shell, probing for the best available one when the
    /// config file predates the `[shell]` section.
    ///
    /// # Errors
    ///
    /// Returns an error when no shell is configured and none can be found.
    pub fn shell_path(&self) -> Result<PathBuf> {
        match &self.shell.path {
            Some(path) => Ok(path.clone()),
            None => {
                warn!("shell not set; your parashell.toml may be out of date");
                Ok(best_shell()?)
            }
        }
    }

    /// Format configuration options for display, deterministically ordered.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        options.insert("meta.version".to_string(), self.meta.version.clone());
        options.insert(
            "global.output_log_level".to_string(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".to_string(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".to_string(),
            self.global.log_file.display().to_string(),
        );
        options.insert("prompt.format".to_string(), self.prompt_format());
        options.insert(
            "shell.path".to_string(),
            self.shell
                .path
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);
        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}

/// Check that every `{...}` placeholder in a prompt format is one the
/// session knows how to substitute.
fn validate_placeholders(format: &str) -> std::result::Result<(), ConfigError> {
    let invalid = |message: String| ConfigError::InvalidValue {
        section: "prompt".to_string(),
        key: "format".to_string(),
        message,
    };

    let mut rest = format;
    while let Some(start) = rest.find('{') {
        let after = &rest[start + 1..];
        let Some(end) = after.find('}') else {
            return Err(invalid("unterminated '{' in prompt format".to_string()));
        };
        let name = &after[..end];
        if !matches!(name, "username" | "hostname" | "cwd") {
            return Err(invalid(format!("unknown placeholder '{{{name}}}'")));
        }
        rest = &after[end + 1..];
    }
    Ok(())
}
