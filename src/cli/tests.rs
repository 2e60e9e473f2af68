// parashell-rs: `ParaShell` Interactive Shell Wrapper - Rust Port
//
// SPDX-FileCopyrightText: 2026 Oliver Nguyen
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Cli, Command, parse_from};
use clap::{CommandFactory, Parser};

#[test]
fn test_cli_assert() {
    Cli::command().debug_assert();
}

#[test]
fn test_no_command_starts_interactive_session() {
    let cli = parse_from(["parashell"]);
    assert!(cli.command.is_none());
}

#[test]
fn test_gitui_command() {
    let cli = parse_from(["parashell", "gitui"]);
    assert!(matches!(cli.command, Some(Command::Gitui)));
}

#[test]
fn test_version_alias() {
    let cli = parse_from(["parashell", "-v"]);
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_inis_can_repeat() {
    let cli = parse_from(["parashell", "-i", "a.toml", "--ini", "b.toml"]);
    assert_eq!(cli.global.inis.len(), 2);
}

#[test]
fn test_log_level_range_is_enforced() {
    assert!(Cli::try_parse_from(["parashell", "--log-level", "6"]).is_err());
    let cli = parse_from(["parashell", "--log-level", "5"]);
    assert_eq!(cli.global.log_level, Some(5));
}

#[test]
fn test_config_overrides_from_flags() {
    let cli = parse_from([
        "parashell",
        "--log-level",
        "4",
        "--log-file",
        "out.log",
        "--set",
        "shell.path=/bin/zsh",
    ]);
    let overrides = cli.global.to_config_overrides();
    assert!(overrides.contains(&"shell.path=/bin/zsh".to_string()));
    assert!(overrides.contains(&"global.output_log_level=4".to_string()));
    // file level falls back to the console level
    assert!(overrides.contains(&"global.file_log_level=4".to_string()));
    assert!(overrides.contains(&"global.log_file=out.log".to_string()));
}

#[test]
fn test_file_log_level_overrides_console_fallback() {
    let cli = parse_from(["parashell", "--log-level", "2", "--file-log-level", "5"]);
    let overrides = cli.global.to_config_overrides();
    assert!(overrides.contains(&"global.file_log_level=5".to_string()));
    assert!(!overrides.contains(&"global.file_log_level=2".to_string()));
}

#[test]
fn test_no_default_inis_flag() {
    let cli = parse_from(["parashell", "--no-default-inis", "-i", "only.toml"]);
    assert!(cli.global.no_default_inis);
}
