// parashell-rs: `ParaShell` Interactive Shell Wrapper - Rust Port
//
// SPDX-FileCopyrightText: 2026 Oliver Nguyen
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_default_ini(parashell.toml)   optional
//!   .add_ini_file(--ini)               required, in order
//!   .with_env_prefix(PARASHELL)
//!   .set(--set KEY=VALUE)
//!        |
//!        v
//!    build() --> Config
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use super::Config;
use crate::error::Result;

/// One ini file the loader will read, tagged with how it was supplied.
/// `parashell inis` prints these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IniSource {
    /// `parashell.toml` in the working directory; may be absent.
    Default(PathBuf),
    /// A file named with `--ini`; must exist.
    Ini(PathBuf),
}

impl IniSource {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Default(path) | Self::Ini(path) => path,
        }
    }
}

impl fmt::Display for IniSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default(path) => write!(f, "[default] {}", path.display()),
            Self::Ini(path) => write!(f, "[ini] {}", path.display()),
        }
    }
}

/// Builder merging the default ini, `--ini` files, environment variables
/// and `--set` overrides into a [`Config`].
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    inis: Vec<IniSource>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            inis: Vec::new(),
        }
    }

    /// Adds the default `parashell.toml`. A missing file is skipped and
    /// left out of the `inis` listing.
    #[must_use]
    pub fn add_default_ini<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(false));
        if p.exists() {
            self.inis.push(IniSource::Default(p.to_path_buf()));
        }
        self
    }

    /// Adds an ini file named on the command line.
    ///
    /// The file is read when `build()` is called; a missing file or invalid
    /// TOML makes `build()` fail.
    #[must_use]
    pub fn add_ini_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(true));
        self.inis.push(IniSource::Ini(p.to_path_buf()));
        self
    }

    /// Adds inline TOML. Not an ini file, so it never shows up in the
    /// `inis` listing.
    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self
    }

    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Sets a configuration override (`--set key=value` on the CLI).
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or the value cannot be
    /// converted to a configuration value.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
        Ok(self)
    }

    /// Builds the configuration from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An `--ini` file is missing.
    /// - Configuration files have invalid TOML syntax.
    /// - Environment variables cannot be parsed.
    /// - The merged configuration cannot be deserialized into `Config`.
    pub fn build(self) -> Result<Config> {
        let builder = match &self.env_prefix {
            Some(prefix) => self.builder.add_source(
                config::Environment::with_prefix(prefix)
                    .separator("_")
                    .try_parsing(true),
            ),
            None => self.builder,
        };
        let cfg = builder.build()?;
        let mut config: Config = cfg.try_deserialize()?;
        config.resolve_and_validate()?;
        Ok(config)
    }

    /// The ini listing for `parashell inis`, numbered in merge order.
    #[must_use]
    pub fn format_inis(&self) -> Vec<String> {
        self.inis
            .iter()
            .enumerate()
            .map(|(i, source)| format!("{}. {source}", i + 1))
            .collect()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
