// parashell-rs: `ParaShell` Interactive Shell Wrapper - Rust Port
//
// SPDX-FileCopyrightText: 2026 Oliver Nguyen
// SPDX-License-Identifier: GPL-3.0-or-later

//! Interactive shell session.
//!
//! ```text
//! loop:
//!   prompt <- format_prompt(config format)
//!   line   <- Prompter
//!   parse_command(line)
//!     keyword  -> pager navigation / cd / info / refresh
//!     anything -> CommandRunner (exit code reported, never propagated)
//! ```
//!
//! Every failure is reported in one line and the loop continues; only
//! `exit` (or end of input) leaves the session.

pub mod prompt;


use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::core::input::Prompter;
use crate::core::listing::DirectoryLister;
use crate::core::platform::PlatformKind;
use crate::core::process::{CommandRunner, terminal_width};
use crate::error::{InputError, PagerError, Result};
use crate::pager::{Listing, ListingSnapshot, PagedListing, PagerState, render, render_unavailable};

use prompt::format_prompt;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const DEV_STATE: &str = "development";

const NOTICE: &str = "\
Parashell Copyright (C) 2026 Oliver Nguyen
This program comes with ABSOLUTELY NO WARRANTY; for details type `show w'.
This is free software, and you are welcome to redistribute it
under certain conditions; type `show c' for details.";

const HELP: &str = "\
Type any command you would normally type in your console/shell.
exit - exit Parashell
goto - go to specific page of dir listing
info - show Parashell info
help - show this help
next - next page of dir listing
prev - previous page of dir listing
refr - refresh dir listing
shll - show current shell path";

/// One parsed line of session input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Help,
    Info,
    Exit,
    Next,
    Prev,
    /// `goto` with an optional 1-based page number; absent means prompt.
    Goto(Option<i64>),
    /// `cd` with its argument; absent is an input error at handling time.
    Cd(Option<String>),
    Refresh,
    Shell,
    ShowWarranty,
    ShowConditions,
    /// Not a keyword: hand the line to the shell verbatim.
    Forward(String),
}

/// Map one line of input to a [`SessionCommand`].
///
/// Keywords are matched on the first whitespace-separated token; anything
/// unrecognized is forwarded to the shell untouched.
///
/// # Errors
///
/// Returns [`InputError::InvalidNumber`] when a `goto` argument is not an
/// integer.
pub fn parse_command(line: &str) -> std::result::Result<SessionCommand, InputError> {
    let trimmed = line.trim();
    let (keyword, arg) = match trimmed.split_once(char::is_whitespace) {
        Some((k, rest)) => (k, Some(rest.trim())),
        None => (trimmed, None),
    };

    let command = match (keyword, arg) {
        ("help", None) => SessionCommand::Help,
        ("info", None) => SessionCommand::Info,
        ("exit", None) => SessionCommand::Exit,
        ("next", None) => SessionCommand::Next,
        ("prev", None) => SessionCommand::Prev,
        ("refr", None) => SessionCommand::Refresh,
        ("shll", None) => SessionCommand::Shell,
        ("show", Some("w")) => SessionCommand::ShowWarranty,
        ("show", Some("c")) => SessionCommand::ShowConditions,
        ("goto", None) => SessionCommand::Goto(None),
        ("goto", Some(n)) => {
            let page = n
                .parse::<i64>()
                .map_err(|_| InputError::InvalidNumber(n.to_string()))?;
            SessionCommand::Goto(Some(page))
        }
        ("cd", arg) => SessionCommand::Cd(arg.map(str::to_string)),
        _ => SessionCommand::Forward(line.to_string()),
    };
    Ok(command)
}

/// Whether to keep looping after a command was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopOutcome {
    Continue,
    Quit,
}

/// The interactive shell session: pager, prompt and command forwarding.
pub struct Session<'a> {
    runner: CommandRunner,
    lister: DirectoryLister,
    prompter: &'a mut dyn Prompter,
    prompt_format: String,
    platform: PlatformKind,
    cwd: PathBuf,
    listing: Listing,
    pager: PagerState,
}

impl<'a> Session<'a> {
    /// Build a session rooted at `cwd` with an initial listing captured
    /// immediately.
    pub fn new(
        runner: CommandRunner,
        platform: PlatformKind,
        prompt_format: impl Into<String>,
        prompter: &'a mut dyn Prompter,
        cwd: impl Into<PathBuf>,
    ) -> Self {
        let mut session = Self {
            lister: DirectoryLister::new(platform),
            runner,
            prompter,
            prompt_format: prompt_format.into(),
            platform,
            cwd: cwd.into(),
            listing: Listing::Unavailable(String::new()),
            pager: PagerState::new(),
        };
        session.refresh();
        session
    }

    #[must_use]
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    #[must_use]
    pub const fn page_index(&self) -> usize {
        self.pager.current()
    }

    #[must_use]
    pub const fn listing(&self) -> &Listing {
        &self.listing
    }

    /// Run the session until `exit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error only for I/O failures on the prompt itself.
    pub fn run(&mut self) -> Result<()> {
        self.banner()?;
        self.display();
        loop {
            let prompt = format!("{} ", format_prompt(&self.prompt_format, &self.cwd));
            let Some(line) = self.prompter.read_line(&prompt)? else {
                debug!("end of input, leaving session");
                return Ok(());
            };
            if self.handle_command(&line)? == LoopOutcome::Quit {
                return Ok(());
            }
        }
    }

    /// Startup notice, warning and program info.
    fn banner(&mut self) -> Result<()> {
        self.runner.clear_screen();
        println!("{NOTICE}\n");
        println!(
            "Warning! This is a {DEV_STATE} release. Bugs may be present.\n\
             Please report bugs to the GitHub repository:\n\
             <github.com/estella144/parashell/issues>\n"
        );
        self.print_info();
        println!("\nType 'help' for help.\n");
        self.pause()?;
        Ok(())
    }

    fn print_info(&self) {
        println!("Parashell {VERSION} on {}", std::env::consts::OS);
        println!(
            "Platform: {} {} ({})",
            std::env::consts::OS,
            std::env::consts::ARCH,
            self.platform
        );
    }

    fn pause(&mut self) -> Result<()> {
        self.prompter.read_line("[Enter] - Continue")?;
        Ok(())
    }

    /// Recapture the directory listing and clamp the page cursor into the
    /// new page range.
    pub fn refresh(&mut self) {
        let snapshot = match self.lister.list(&self.runner, &self.cwd) {
            Ok(raw) => ListingSnapshot::new(raw, self.platform),
            Err(e) => {
                warn!(error = %e, "directory listing failed");
                self.listing = Listing::Unavailable(e.to_string());
                return;
            }
        };
        self.listing = Listing::resolve(&snapshot);
        if let Some(paged) = self.listing.paged() {
            self.pager.clamp(paged);
        }
    }

    /// Clear the screen and print the current page.
    fn display(&self) {
        self.runner.clear_screen();
        let width = terminal_width();
        let context = self.cwd.display().to_string();
        match &self.listing {
            Listing::Paged(paged) => match render(paged, self.pager.current(), width, &context) {
                Ok(page) => println!("{page}"),
                Err(e) => eprintln!("Error: {e}"),
            },
            Listing::Unavailable(message) => {
                println!("{}", render_unavailable(message, width, &context));
            }
        }
    }

    /// Handle one line of input.
    ///
    /// # Errors
    ///
    /// Returns an error only for I/O failures while prompting; command
    /// failures are reported and the loop continues.
    pub fn handle_command(&mut self, line: &str) -> Result<LoopOutcome> {
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(e) => {
                println!("Error: {e}");
                return Ok(LoopOutcome::Continue);
            }
        };
        match command {
            SessionCommand::Help => {
                println!("{HELP}");
                self.pause()?;
            }
            SessionCommand::Info => {
                self.print_info();
                self.pause()?;
            }
            SessionCommand::ShowWarranty => {
                println!("Refer to the GNU GPL, section 15 <https://www.gnu.org/licenses/>.");
            }
            SessionCommand::ShowConditions => {
                println!("Refer to the GNU GPL, section 4-6 <https://www.gnu.org/licenses/>.");
            }
            SessionCommand::Exit => return Ok(LoopOutcome::Quit),
            SessionCommand::Next => self.navigate(PagerState::next),
            SessionCommand::Prev => self.navigate(|pager, _| pager.prev()),
            SessionCommand::Goto(page) => self.goto(page)?,
            SessionCommand::Cd(None) => {
                let e = InputError::MissingArgument {
                    command: "cd".to_string(),
                    count: 1,
                };
                println!("Error: {e}");
            }
            SessionCommand::Cd(Some(path)) => self.change_directory(&path),
            SessionCommand::Refresh => {
                self.refresh();
                self.display();
            }
            SessionCommand::Shell => println!("{}", self.runner.shell().display()),
            SessionCommand::Forward(command) => self.forward(&command),
        }
        Ok(LoopOutcome::Continue)
    }

    /// Apply a pager transition and redisplay on success.
    fn navigate<F>(&mut self, transition: F)
    where
        F: FnOnce(&mut PagerState, &PagedListing) -> std::result::Result<(), PagerError>,
    {
        let Some(paged) = self.listing.paged() else {
            println!("Error: no directory listing to page through");
            return;
        };
        match transition(&mut self.pager, paged) {
            Ok(()) => self.display(),
            Err(e) => println!("Error: {e}"),
        }
    }

    /// `goto`, prompting for the page number when it was not given inline.
    fn goto(&mut self, page: Option<i64>) -> Result<()> {
        let Some(paged) = self.listing.paged() else {
            println!("Error: no directory listing to page through");
            return Ok(());
        };
        let count = paged.page_count();

        let requested = match page {
            Some(n) => n,
            None => {
                let prompt = format!("Which page to display? [1-{count}] ");
                let Some(answer) = self.prompter.read_line(&prompt)? else {
                    return Ok(());
                };
                match answer.trim().parse::<i64>() {
                    Ok(n) => n,
                    Err(_) => {
                        let e = InputError::InvalidNumber(answer.trim().to_string());
                        println!("Error: {e}");
                        return Ok(());
                    }
                }
            }
        };

        // re-borrow: the prompt above needed `self` mutably
        let Some(paged) = self.listing.paged() else {
            return Ok(());
        };
        match self.pager.goto(paged, requested) {
            Ok(()) => self.display(),
            Err(e) => println!("Error: {e}"),
        }
        Ok(())
    }

    /// Change the working directory, reset the pager and recapture the
    /// listing. Failures are reported; the session stays where it was.
    fn change_directory(&mut self, path: &str) {
        let target = self.cwd.join(path);
        let target = match target.canonicalize() {
            Ok(dir) => dir,
            Err(e) => {
                println!("Error: cannot change directory to {path}: {e}");
                return;
            }
        };
        if !target.is_dir() {
            println!("Error: not a directory: {path}");
            return;
        }
        if let Err(e) = std::env::set_current_dir(&target) {
            println!("Error: cannot change directory to {path}: {e}");
            return;
        }
        self.cwd = target;
        self.pager.reset();
        println!("Success: changed directory to {path}");
        self.refresh();
        self.display();
    }

    /// Forward a non-keyword line to the shell and report its exit code.
    fn forward(&mut self, command: &str) {
        if command.trim().is_empty() {
            return;
        }
        match self.runner.run(command) {
            Ok(0) => println!("Success: {command}"),
            Ok(code) => println!("Failed executing command: {command} (return code {code})"),
            Err(e) => println!("Error: {e}"),
        }
    }
}
