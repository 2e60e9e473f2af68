// parashell-rs: `ParaShell` Interactive Shell Wrapper - Rust Port
//
// SPDX-FileCopyrightText: 2026 Oliver Nguyen
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git menu hierarchy.
//!
//! ```text
//! Main --w--> Work --r--> Restore
//!   |           |            |
//!   q         a/m/v/c      u/r/c/d
//! (quit)     (actions)    (actions)
//!             b: back      b: back
//! ```
//!
//! `map_input` is the pure transition table; [`dispatch::MenuDispatcher`]
//! holds the menu stack and performs the side effects. Unrecognized input
//! reports `InvalidChoice` and stays in the same state - bad input is never
//! fatal anywhere in the hierarchy.

pub mod dispatch;


use crate::error::MenuError;

/// A node in the menu hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Main,
    Work,
    Restore,
}

impl MenuState {
    /// The option lines shown when this menu is entered.
    #[must_use]
    pub const fn options_text(self) -> &'static str {
        match self {
            Self::Main => {
                "Select an option below:\n\
                 [W] - Work\n\
                 [Q] - Quit"
            }
            Self::Work => {
                "Select an option below:\n\
                 [A] - Add - Stage Changes\n\
                 [M] - Move\n\
                 [R] - Restore\n\
                 [V] - Remove\n\
                 [C] - Commit\n\
                 [B] - Back to main menu\n\
                 [Q] - Quit"
            }
            Self::Restore => {
                "Select an option below:\n\
                 [U] - Unstage\n\
                 [R] - Restore\n\
                 [C] - Restore from Commit\n\
                 [D] - Discard Staged Changes\n\
                 [B] - Back to work menu\n\
                 [Q] - Quit"
            }
        }
    }

    /// Prompt prefix identifying a submenu, e.g. `[restore] `.
    #[must_use]
    pub const fn prompt_prefix(self) -> &'static str {
        match self {
            Self::Main | Self::Work => "",
            Self::Restore => "[restore] ",
        }
    }
}

/// A side-effecting git action selected from a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitAction {
    Add,
    Move,
    Unstage,
    RestoreWorking,
    RestoreFromCommit,
    DiscardStaged,
    Remove,
    Commit,
}

/// What a menu input resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    /// Descend into a submenu.
    Enter(MenuState),
    /// Run a git action, staying in the current menu.
    Action(GitAction),
    /// Return to the parent menu.
    Back,
    /// End the session.
    Quit,
}

/// Map one line of input to a command for the given menu state.
///
/// Case-insensitive on the leading character; surplus characters are
/// ignored so `w`, `W` and `work` all enter the work menu.
///
/// # Errors
///
/// Returns [`MenuError::InvalidChoice`] when the input maps to nothing;
/// the caller re-prompts in the same state.
pub fn map_input(state: MenuState, input: &str) -> Result<MenuCommand, MenuError> {
    let invalid = || MenuError::InvalidChoice {
        input: input.trim().to_string(),
    };
    let Some(choice) = input.trim().chars().next() else {
        return Err(invalid());
    };

    let command = match (state, choice.to_ascii_lowercase()) {
        (MenuState::Main, 'w') => MenuCommand::Enter(MenuState::Work),
        (MenuState::Work, 'a') => MenuCommand::Action(GitAction::Add),
        (MenuState::Work, 'm') => MenuCommand::Action(GitAction::Move),
        (MenuState::Work, 'r') => MenuCommand::Enter(MenuState::Restore),
        (MenuState::Work, 'v') => MenuCommand::Action(GitAction::Remove),
        (MenuState::Work, 'c') => MenuCommand::Action(GitAction::Commit),
        (MenuState::Restore, 'u') => MenuCommand::Action(GitAction::Unstage),
        (MenuState::Restore, 'r') => MenuCommand::Action(GitAction::RestoreWorking),
        (MenuState::Restore, 'c') => MenuCommand::Action(GitAction::RestoreFromCommit),
        (MenuState::Restore, 'd') => MenuCommand::Action(GitAction::DiscardStaged),
        (MenuState::Work | MenuState::Restore, 'b') => MenuCommand::Back,
        (_, 'q') => MenuCommand::Quit,
        _ => return Err(invalid()),
    };
    Ok(command)
}
