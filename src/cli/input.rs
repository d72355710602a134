//! Text commands typed at the terminal

use std::str::FromStr;

use crate::{Result, board::Position, error::Error, session::Session};

/// One user command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `row,col`
    Place(Position),
    /// `p N`
    SelectPiece(usize),
    /// `j N`
    Jump(usize),
    /// `q`
    Quit,
}

impl Command {
    /// Forward the command to the session as the matching event.
    /// `Quit` is a no-op here; callers decide when to stop.
    pub fn apply(self, session: &mut Session) -> Result<()> {
        match self {
            Command::Place(position) => session.on_cell_selected(position),
            Command::SelectPiece(index) => session.on_piece_selected(index),
            Command::Jump(step) => session.on_jump_requested(step),
            Command::Quit => Ok(()),
        }
    }
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = |usage: &'static str| Error::ParseCommand {
            input: trimmed.to_string(),
            usage,
        };

        if matches!(trimmed, "q" | "quit") {
            return Ok(Command::Quit);
        }
        if let Some(rest) = trimmed.strip_prefix('p') {
            let index = rest
                .trim()
                .parse()
                .map_err(|_| invalid("'p N' with a piece number"))?;
            return Ok(Command::SelectPiece(index));
        }
        if let Some(rest) = trimmed.strip_prefix('j') {
            let step = rest
                .trim()
                .parse()
                .map_err(|_| invalid("'j N' with a history step"))?;
            return Ok(Command::Jump(step));
        }
        trimmed.parse().map(Command::Place)
    }
}
