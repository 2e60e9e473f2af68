// parashell-rs: `ParaShell` Interactive Shell Wrapper - Rust Port
//
// SPDX-FileCopyrightText: 2026 Oliver Nguyen
// SPDX-License-Identifier: GPL-3.0-or-later

//! Narrow external collaborators.
//!
//! ```text
//! platform  PlatformKind, listing frame sizes
//! shell     zsh/bash/sh discovery via `which`
//! process   CommandRunner (inherit stdio), clear_screen, terminal width
//! listing   `ls -l` / `dir` capture
//! encoding  console bytes --> UTF-8 (CP1252/CP437 fallback)
//! input     Prompter seam over stdin
//! ```

pub mod encoding;
pub mod input;
pub mod listing;
pub mod platform;
pub mod process;
pub mod shell;
