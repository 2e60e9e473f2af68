// parashell-rs: `ParaShell` Interactive Shell Wrapper - Rust Port
//
// SPDX-FileCopyrightText: 2026 Oliver Nguyen
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for parashell using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! parashell [global options] [command]
//! (none)   interactive shell session
//! gitui    git menus for the current repository
//! version
//! options  dump resolved configuration
//! inis     list loaded config files
//! ```

pub mod global;

#[cfg(test)]
mod tests;

use clap::{Parser, Subcommand};

use crate::cli::global::GlobalOptions;

/// `ParaShell` Interactive Shell Wrapper
#[derive(Debug, Parser)]
#[command(
    name = "parashell",
    author,
    version,
    about = "ParaShell Interactive Shell Wrapper",
    long_about = "parashell-rs Copyright (C) 2026 Oliver Nguyen\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  An interactive shell wrapper with a paginated directory\n\
                  listing and menus for common git operations. Run with no\n\
                  command to start the interactive session, or `parashell\n\
                  gitui` to jump straight to the git menus.",
    after_help = "INI FILES:\n\n\
                  By default, parashell loads `parashell.toml` from the current\n\
                  directory, writing a default one on first run. Additional\n\
                  files can be specified with --ini and are loaded after it,\n\
                  each overriding the previous. Use --no-default-inis to skip\n\
                  auto detection and only use --ini."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the INIs.
    Options,

    /// Lists the INIs used by parashell.
    Inis,

    /// Opens the git menus for the repository in the current directory.
    Gitui,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version
/// information was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
