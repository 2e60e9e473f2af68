// parashell-rs: `ParaShell` Interactive Shell Wrapper - Rust Port
//
// SPDX-FileCopyrightText: 2026 Oliver Nguyen
// SPDX-License-Identifier: GPL-3.0-or-later

//! Menu dispatch loop.
//!
//! Holds an explicit menu stack (Main at the bottom), reads one line per
//! iteration, maps it through [`map_input`] and either transitions or runs
//! a git action. Quit is a returned signal; the process exit happens at the
//! top level, never inside a handler.

use tracing::debug;

use crate::core::input::Prompter;
use crate::core::process::{CommandRunner, terminal_width};
use crate::error::Result;
use crate::git::VcsClient;
use crate::pager::render::center;

use super::{GitAction, MenuCommand, MenuState, map_input};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const DEV_STATE: &str = "development";

/// Interactive dispatcher over the menu hierarchy.
pub struct MenuDispatcher<'a> {
    vcs: &'a dyn VcsClient,
    prompter: &'a mut dyn Prompter,
    runner: Option<&'a CommandRunner>,
    stack: Vec<MenuState>,
}

impl<'a> MenuDispatcher<'a> {
    pub fn new(
        vcs: &'a dyn VcsClient,
        prompter: &'a mut dyn Prompter,
        runner: Option<&'a CommandRunner>,
    ) -> Self {
        Self {
            vcs,
            prompter,
            runner,
            stack: vec![MenuState::Main],
        }
    }

    /// Current menu state (top of the stack).
    #[must_use]
    pub fn state(&self) -> MenuState {
        *self.stack.last().unwrap_or(&MenuState::Main)
    }

    /// Run menus until the user quits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error only for I/O failures on the prompt itself; failed
    /// git actions and invalid choices are reported and the loop continues.
    pub fn run(&mut self) -> Result<()> {
        self.show_menu();
        loop {
            let label = self.prompt_label();
            let Some(line) = self.prompter.read_line(&label)? else {
                debug!("end of input, leaving git menus");
                return Ok(());
            };
            if self.step(&line)? {
                println!("Leaving Parashell GitUI...");
                return Ok(());
            }
        }
    }

    /// Process one line of input. Returns `true` when the session ends.
    ///
    /// # Errors
    ///
    /// Returns an error only for I/O failures while prompting for action
    /// arguments.
    pub fn step(&mut self, line: &str) -> Result<bool> {
        match map_input(self.state(), line) {
            Ok(MenuCommand::Enter(next)) => {
                self.stack.push(next);
                self.show_menu();
            }
            Ok(MenuCommand::Back) => {
                if self.stack.len() > 1 {
                    self.stack.pop();
                }
                self.show_menu();
            }
            Ok(MenuCommand::Quit) => return Ok(true),
            Ok(MenuCommand::Action(action)) => self.perform(action)?,
            Err(e) => println!("Error: {e}"),
        }
        Ok(false)
    }

    /// Clear the screen (when a runner is attached), print the repo
    /// overview and the options of the current menu.
    fn show_menu(&self) {
        if let Some(runner) = self.runner {
            runner.clear_screen();
        }
        if matches!(self.state(), MenuState::Main | MenuState::Work) {
            println!("{}", self.render_overview(terminal_width()));
        }
        println!("{}", self.state().options_text());
    }

    /// Status + recent log framed with dividers.
    fn render_overview(&self, width: usize) -> String {
        let repo = self
            .vcs
            .current_repo_name()
            .unwrap_or_else(|_| "?".to_string());
        let branch = self.vcs.current_branch().unwrap_or_else(|_| "?".to_string());

        let title = format!("[Parashell GitUI {VERSION} - {repo} on {branch}]");
        let warning = format!("[Warning: {DEV_STATE} release. Bugs may be present.]");
        let divider = "=".repeat(width);

        let status = self
            .vcs
            .status()
            .unwrap_or_else(|e| format!("Error: cannot get status: {e}"));
        let log = self
            .vcs
            .log(6)
            .unwrap_or_else(|e| format!("Error: cannot get log: {e}"));

        let mut out = Vec::with_capacity(8);
        out.push(center(&title, '=', width));
        out.push(center(&warning, '-', width));
        out.push(status.trim_end().to_string());
        out.push(divider.clone());
        out.push(log.trim_end().to_string());
        out.push(divider);
        out.join("\n")
    }

    fn prompt_label(&self) -> String {
        let repo = self
            .vcs
            .current_repo_name()
            .unwrap_or_else(|_| "?".to_string());
        let branch = self.vcs.current_branch().unwrap_or_else(|_| "?".to_string());
        format!("{}{repo} on {branch}> ", self.state().prompt_prefix())
    }

    /// Prompt for one argument; `None` means input ended and the action is
    /// abandoned.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        self.prompter.read_line(prompt)
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(self
            .ask(prompt)?
            .is_some_and(|answer| answer.trim().eq_ignore_ascii_case("y")))
    }

    /// Gather arguments and run one git action, reporting the outcome in
    /// one line. Failures never propagate; control returns to the prompt.
    fn perform(&mut self, action: GitAction) -> Result<()> {
        match action {
            GitAction::Add => {
                let Some(path) = self.ask("Pathspec to add to staged changes: ")? else {
                    return Ok(());
                };
                match self.vcs.add(&path) {
                    Ok(()) => println!("Successfully added {path}"),
                    Err(e) => eprintln!("Failed to add {path}: {e}"),
                }
            }
            GitAction::Move => {
                let Some(source) = self.ask("Source file to move: ")? else {
                    return Ok(());
                };
                let Some(destination) = self.ask("Destination directory or path: ")? else {
                    return Ok(());
                };
                match self.vcs.mv(&source, &destination) {
                    Ok(()) => println!("Successfully moved {source} to {destination}"),
                    Err(e) => eprintln!("Failed to move {source} to {destination}: {e}"),
                }
            }
            GitAction::Unstage => {
                let Some(path) = self.ask("Pathspec to unstage changes to: ")? else {
                    return Ok(());
                };
                match self.vcs.restore_staged(&path) {
                    Ok(()) => println!("Successfully unstaged changes to {path}"),
                    Err(e) => eprintln!("Failed to unstage changes to {path}: {e}"),
                }
            }
            GitAction::RestoreWorking => {
                let Some(path) = self.ask("Pathspec to restore to last commit: ")? else {
                    return Ok(());
                };
                match self.vcs.restore_working(&path) {
                    Ok(()) => println!("Successfully restored {path}"),
                    Err(e) => eprintln!("Failed to restore {path}: {e}"),
                }
            }
            GitAction::RestoreFromCommit => {
                let Some(path) = self.ask("Pathspec to restore: ")? else {
                    return Ok(());
                };
                println!("Hint: Type HEAD~# to reference a commit relatively.");
                println!("Hint: This means # commits ago (from HEAD).");
                let Some(commit) = self.ask("Commit to restore file from: ")? else {
                    return Ok(());
                };
                match self.vcs.restore_from_commit(&path, &commit) {
                    Ok(()) => println!("Successfully restored {path} from {commit}"),
                    Err(e) => eprintln!("Failed to restore {path} from {commit}: {e}"),
                }
            }
            GitAction::DiscardStaged => match self.vcs.restore_staged(".") {
                Ok(()) => println!("Successfully unstaged all staged changes"),
                Err(e) => eprintln!("Failed to unstage changes: {e}"),
            },
            GitAction::Remove => {
                let Some(path) = self.ask("File(s) to remove: ")? else {
                    return Ok(());
                };
                match self.vcs.remove(&path) {
                    Ok(()) => println!("Successfully removed {path}"),
                    Err(e) => eprintln!("Failed to remove {path}: {e}"),
                }
            }
            GitAction::Commit => self.perform_commit()?,
        }
        Ok(())
    }

    /// Commit flow: show status, confirm, commit, then offer a chained
    /// push. Push is only ever reached after a successful commit.
    fn perform_commit(&mut self) -> Result<()> {
        match self.vcs.status() {
            Ok(status) => println!("{}", status.trim_end()),
            Err(e) => eprintln!("Error: cannot get status: {e}"),
        }
        if !self.confirm("Are you sure you want to commit all staged changes? [y/n] ")? {
            return Ok(());
        }
        let Some(message) = self.ask("Commit message: ")? else {
            return Ok(());
        };
        match self.vcs.commit(&message) {
            Ok(()) => println!("Successfully committed changes"),
            Err(e) => {
                eprintln!("Failed to commit changes: {e}");
                return Ok(());
            }
        }
        if self.confirm("Push changes to remote? [y/n] ")? {
            match self.vcs.push() {
                Ok(()) => println!("Successfully pushed to remote"),
                Err(e) => eprintln!("Failed to push to remote: {e}"),
            }
        }
        Ok(())
    }
}
