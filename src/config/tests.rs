// parashell-rs: `ParaShell` Interactive Shell Wrapper - Rust Port
//
// SPDX-FileCopyrightText: 2026 Oliver Nguyen
// SPDX-License-Identifier: GPL-3.0-or-later

use super::Config;
use super::setup::{DEFAULT_CONFIG_FILE, default_config_toml, ensure_config};
use crate::logging::LogLevel;
use crate::session::prompt::DEFAULT_PROMPT_FORMAT;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert_eq!(config.global.file_log_level, LogLevel::TRACE);
    assert!(config.prompt.format.is_none());
    assert!(config.shell.path.is_none());
}

#[test]
fn test_parse_empty_string_gives_defaults() {
    let config = Config::parse("").unwrap();
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
}

#[test]
fn test_parse_full_config() {
    let config = Config::parse(
        r#"
        [meta]
        version = "0.3.0"

        [global]
        output_log_level = 4
        file_log_level = 5
        log_file = "parashell.log"

        [prompt]
        format = "{username}:{cwd}"

        [shell]
        path = "/bin/zsh"
        "#,
    )
    .unwrap();

    assert_eq!(config.meta.version, "0.3.0");
    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(config.prompt_format(), "{username}:{cwd}");
    assert_eq!(config.shell_path().unwrap(), std::path::Path::new("/bin/zsh"));
}

#[test]
fn test_missing_prompt_key_falls_back_to_default() {
    // config file from an older release, [prompt] absent
    let config = Config::parse("[shell]\npath = \"/bin/sh\"\n").unwrap();
    assert_eq!(config.prompt_format(), DEFAULT_PROMPT_FORMAT);
}

#[test]
fn test_log_level_out_of_range_is_rejected() {
    let result = Config::parse("[global]\noutput_log_level = 6\n");
    assert!(result.is_err());
}

#[test]
fn test_unknown_section_is_rejected() {
    let result = Config::parse("[nonsense]\nkey = 1\n");
    assert!(result.is_err());
}

#[test]
fn test_unknown_placeholder_is_rejected() {
    let result = Config::parse("[prompt]\nformat = \"{user}> \"\n");
    let err = result.unwrap_err().to_string();
    assert!(err.contains("{user}"), "error was: {err}");
}

#[test]
fn test_unterminated_placeholder_is_rejected() {
    assert!(Config::parse("[prompt]\nformat = \"{username\"\n").is_err());
}

#[test]
fn test_set_override_wins_over_file_content() {
    let config = Config::builder()
        .add_toml_str("[global]\noutput_log_level = 2\n")
        .set("global.output_log_level", 4)
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
}

#[test]
fn test_later_file_overrides_earlier() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("base.toml");
    let extra = dir.path().join("extra.toml");
    std::fs::write(&base, "[prompt]\nformat = \"{cwd}\"\n").unwrap();
    std::fs::write(&extra, "[prompt]\nformat = \"{username}\"\n").unwrap();

    let config = Config::builder()
        .add_ini_file(&base)
        .add_ini_file(&extra)
        .build()
        .unwrap();
    assert_eq!(config.prompt_format(), "{username}");
}

#[test]
fn test_missing_required_file_fails() {
    assert!(Config::from_file("/nonexistent/parashell.toml").is_err());
}

#[test]
fn test_missing_default_ini_is_skipped() {
    let config = Config::builder()
        .add_default_ini("/nonexistent/parashell.toml")
        .build()
        .unwrap();
    assert!(config.prompt.format.is_none());
}

#[test]
fn test_format_inis_tags_default_and_ini_files() {
    let dir = tempfile::tempdir().unwrap();
    let default = dir.path().join("parashell.toml");
    let site = dir.path().join("site.toml");
    std::fs::write(&default, "").unwrap();
    std::fs::write(&site, "").unwrap();

    let loader = Config::builder()
        .add_default_ini(&default)
        .add_ini_file(&site)
        .add_toml_str("");
    let lines = loader.format_inis();
    assert_eq!(lines.len(), 2, "inline TOML is not an ini file");
    assert!(lines[0].starts_with("1. [default] "));
    assert!(lines[1].starts_with("2. [ini] "));
}

#[test]
fn test_format_inis_omits_absent_default() {
    let loader = Config::builder().add_default_ini("/nonexistent/parashell.toml");
    assert!(loader.format_inis().is_empty());
}

#[test]
fn test_format_options_is_aligned() {
    let config = Config::default();
    let options = config.format_options();
    assert!(!options.is_empty());
    let eq_column: Vec<usize> = options.iter().map(|l| l.find(" = ").unwrap()).collect();
    assert!(eq_column.windows(2).all(|w| w[0] == w[1]));
    assert!(options.iter().any(|l| l.starts_with("prompt.format")));
}

#[test]
fn test_default_config_toml_round_trips() {
    let config = Config::parse(&default_config_toml()).unwrap();
    assert_eq!(config.meta.version, env!("CARGO_PKG_VERSION"));
    assert_eq!(config.prompt_format(), DEFAULT_PROMPT_FORMAT);
}

#[test]
fn test_ensure_config_writes_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_CONFIG_FILE);

    assert!(ensure_config(&path).unwrap());
    assert!(path.exists());
    // second run leaves the existing file alone
    assert!(!ensure_config(&path).unwrap());

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.prompt_format(), DEFAULT_PROMPT_FORMAT);
}
