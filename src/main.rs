// parashell-rs: `ParaShell` Interactive Shell Wrapper - Rust Port
//
// SPDX-FileCopyrightText: 2026 Oliver Nguyen
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Command Dispatch
//!   (interactive session) | Gitui | Version | Options | Inis
//! ```

use std::process::ExitCode;

use parashell_rs::cli::global::GlobalOptions;
use parashell_rs::cli::{self, Command};
use parashell_rs::config::Config;
use parashell_rs::config::loader::ConfigLoader;
use parashell_rs::config::setup::{DEFAULT_CONFIG_FILE, ensure_config};
use parashell_rs::core::input::StdinPrompter;
use parashell_rs::core::platform::PlatformKind;
use parashell_rs::core::process::CommandRunner;
use parashell_rs::error::Result;
use parashell_rs::git::{GitCli, git_exists};
use parashell_rs::logging::{LogConfig, LogLevel, init_logging};
use parashell_rs::menu::dispatch::MenuDispatcher;
use parashell_rs::session::Session;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli)
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::INFO);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(Command::Options) => load_config(&cli.global).map(|config| {
            for line in config.format_options() {
                println!("{line}");
            }
        }),
        Some(Command::Inis) => build_config_loader(&cli.global).map(|loader| {
            for line in loader.format_inis() {
                println!("{line}");
            }
        }),
        Some(Command::Gitui) => load_config(&cli.global).and_then(|config| run_gitui(&config)),
        None => load_config(&cli.global).and_then(|config| run_session(&config)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// The default command: the interactive shell session.
fn run_session(config: &Config) -> Result<()> {
    println!("Starting Parashell...");
    let shell = config.shell_path()?;
    let platform = PlatformKind::current();
    let runner = CommandRunner::new(shell, platform);
    let cwd = std::env::current_dir()?;

    let mut prompter = StdinPrompter;
    let mut session = Session::new(runner, platform, config.prompt_format(), &mut prompter, cwd);
    session.run()?;
    println!("Goodbye");
    Ok(())
}

/// `parashell gitui`: the git menus for the current repository.
fn run_gitui(config: &Config) -> Result<()> {
    if !git_exists() {
        anyhow::bail!("git not installed (not found in PATH)");
    }
    let cwd = std::env::current_dir()?;
    let git = GitCli::new(&cwd);
    if !git.is_repository() {
        anyhow::bail!("not a git repository: {}", cwd.display());
    }

    let platform = PlatformKind::current();
    let runner = config
        .shell_path()
        .map(|shell| CommandRunner::new(shell, platform))
        .ok();

    let mut prompter = StdinPrompter;
    let mut dispatcher = MenuDispatcher::new(&git, &mut prompter, runner.as_ref());
    dispatcher.run()
}

fn build_config_loader(global: &GlobalOptions) -> Result<ConfigLoader> {
    let mut loader = ConfigLoader::new().with_env_prefix("PARASHELL");
    if !global.no_default_inis {
        ensure_config(std::path::Path::new(DEFAULT_CONFIG_FILE))?;
        loader = loader.add_default_ini(DEFAULT_CONFIG_FILE);
    }
    for ini_path in &global.inis {
        loader = loader.add_ini_file(ini_path);
    }
    for option in global.to_config_overrides() {
        let Some((key, value)) = option.split_once('=') else {
            anyhow::bail!("invalid --set option '{option}', expected KEY=VALUE");
        };
        loader = loader.set(key, value)?;
    }
    Ok(loader)
}

fn load_config(global: &GlobalOptions) -> Result<Config> {
    let loader = build_config_loader(global)?;
    loader.build().map_err(|e| {
        eprintln!("Failed to load config: {e}");
        e
    })
}
