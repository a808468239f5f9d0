//! Command handlers module
//!
//! This module contains the `/pop` and `/apop` handlers and the parser that
//! maps chat text onto them.

pub mod admin;
pub mod pop;

use std::fmt;
use std::str::FromStr;
use crate::models::ChatPlayer;
use crate::utils::errors::{PopCommandError, Result};
use super::CommandContext;

/// All available chat commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `/pop`: population for players
    Pop,
    /// `/apop`: full population report for administrators
    PopAdmin,
}

impl Command {
    pub const ALL: [Command; 2] = [Command::Pop, Command::PopAdmin];

    /// Chat name, without the leading slash
    pub fn name(&self) -> &'static str {
        match self {
            Command::Pop => "pop",
            Command::PopAdmin => "apop",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.name())
    }
}

impl FromStr for Command {
    type Err = PopCommandError;

    /// Parse chat text such as `/pop` or `/APOP extra args`; arguments are ignored
    fn from_str(text: &str) -> Result<Self> {
        let unknown = || PopCommandError::UnknownCommand(text.trim().to_string());

        let name = text
            .trim()
            .strip_prefix('/')
            .and_then(|rest| rest.split_whitespace().next())
            .ok_or_else(unknown)?;

        Command::ALL
            .into_iter()
            .find(|cmd| cmd.name().eq_ignore_ascii_case(name))
            .ok_or_else(unknown)
    }
}

/// Main command dispatcher
pub fn handle_command(ctx: &CommandContext, player: &ChatPlayer, cmd: Command) -> Result<()> {
    match cmd {
        Command::Pop => pop::handle_pop(ctx, player),
        Command::PopAdmin => admin::handle_pop_admin(ctx, player),
    }
}
