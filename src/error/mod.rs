// parashell-rs: `ParaShell` Interactive Shell Wrapper - Rust Port
//
// SPDX-FileCopyrightText: 2026 Oliver Nguyen
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!             ShellError (~24 bytes)
//!                    |
//!   +------+------+--+---+------+------+
//!   |      |      |      |      |      |
//!   v      v      v      v      v      v
//! Bail   Pager  Menu   Input  Git   Proc/Cfg/Io
//!        Box    Box    Box    Box   Box
//!
//! Sub-errors (unboxed internally):
//!   Pager   EmptyInput, AtFirstPage, AtLastPage,
//!           PageOutOfRange, IndexOutOfRange
//!   Menu    InvalidChoice
//!   Input   MissingArgument, InvalidNumber
//!   Git     NotInstalled, CommandFailed, Gix
//!   Process SpawnFailed, NonZeroExit, NoShellFound
//!   Config  ReadError, MissingKey, InvalidValue
//!
//! All variants boxed => ShellError fits in 24 bytes.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`ShellError`].
pub type ShellResult<T> = std::result::Result<T, ShellError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Pagination or page-navigation failure.
    #[error("pager error: {0}")]
    Pager(#[from] Box<PagerError>),

    /// Menu input could not be mapped to an action.
    #[error("menu error: {0}")]
    Menu(#[from] Box<MenuError>),

    /// Malformed or missing command arguments.
    #[error("input error: {0}")]
    Input(#[from] Box<InputError>),

    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

/// Create a fatal [`ShellError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> ShellError {
    ShellError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for ShellError {
                fn from(err: $error) -> Self {
                    ShellError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    PagerError => Pager,
    MenuError => Menu,
    InputError => Input,
    GitError => Git,
    ProcessError => Process,
    ConfigError => Config,
    std::io::Error => Io,
}

// --- Pager Errors ---

/// Pagination and page-navigation errors.
///
/// Navigation failures (`AtFirstPage`, `AtLastPage`, `PageOutOfRange`) are
/// no-ops on the pager state; the caller reports them and re-prompts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PagerError {
    /// Raw listing text was empty, nothing to paginate.
    #[error("directory listing was empty")]
    EmptyInput,

    /// Already on the last page.
    #[error("no more pages to display")]
    AtLastPage,

    /// Already on the first page.
    #[error("already on the first page")]
    AtFirstPage,

    /// Requested page number (1-based) outside `1..=count`.
    #[error("page {requested} out of range [1-{count}]")]
    PageOutOfRange { requested: i64, count: usize },

    /// Render called with an index outside `0..count`; callers must clamp.
    #[error("page index {index} out of range (page count {count})")]
    IndexOutOfRange { index: usize, count: usize },
}

// --- Menu Errors ---

/// Menu dispatch errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MenuError {
    /// Input does not map to any entry of the current menu.
    #[error("invalid choice: '{input}'")]
    InvalidChoice { input: String },
}

// --- Input Errors ---

/// Malformed or missing arguments on the interactive prompt.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// A keyword was given without its required argument.
    #[error("{count} argument(s) required for {command}")]
    MissingArgument { command: String, count: usize },

    /// An argument could not be parsed as a number.
    #[error("invalid page number: '{0}'")]
    InvalidNumber(String),
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// The git binary is not on PATH.
    #[error("git not installed (not found in PATH)")]
    NotInstalled,

    /// Path is not inside a git work tree.
    #[error("not a git repository: {path}")]
    NotARepository { path: String },

    /// Git command execution failed.
    #[error("git command failed: {command} (exit code {code}): {message}")]
    CommandFailed {
        command: String,
        code: i32,
        message: String,
    },

    /// Error from gix library.
    #[error("gix error: {0}")]
    Gix(#[from] GixError),
}

/// Wrapper for gix-specific errors.
///
/// gix has multiple error types that are converted through this enum.
/// Large error types are boxed to keep enum size manageable.
#[derive(Debug, Error)]
pub enum GixError {
    /// Failed to discover repository from path.
    #[error("failed to discover repository: {0}")]
    Discover(#[from] Box<gix::discover::Error>),

    /// Failed to get HEAD reference.
    #[error("failed to resolve HEAD: {0}")]
    Head(#[from] Box<gix::reference::find::existing::Error>),

    /// Failed to peel HEAD to a commit.
    #[error("failed to resolve HEAD commit: {0}")]
    HeadCommit(#[from] Box<gix::reference::head_id::Error>),

    /// Repository has no worktree (bare repository).
    #[error("repository has no worktree (bare repository)")]
    BareRepository,
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// No usable shell could be found on this machine.
    #[error("no usable shell found (tried zsh, bash, sh)")]
    NoShellFound,

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit { command: String, code: i32 },

    /// Failed to read process output.
    #[error("failed to read output from process '{command}': {message}")]
    OutputError { command: String, message: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the default configuration file.
    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Missing required configuration key.
    #[error("missing config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}
