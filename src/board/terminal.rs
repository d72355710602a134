//! Terminal state evaluation results

use serde::{Deserialize, Serialize};

use crate::identifiers::PlayerId;

/// Result of evaluating a board for a finished game
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Evaluation {
    /// Owner of the first completed line in scan order
    pub winner: Option<PlayerId>,
    /// Every cell is occupied and no line is complete
    pub is_draw: bool,
}

impl Evaluation {
    pub fn is_terminal(&self) -> bool {
        self.winner.is_some() || self.is_draw
    }

    /// Collapse into an outcome, or `None` while the game continues
    pub fn outcome(&self) -> Option<GameOutcome> {
        match (&self.winner, self.is_draw) {
            (Some(winner), _) => Some(GameOutcome::Win(winner.clone())),
            (None, true) => Some(GameOutcome::Draw),
            (None, false) => None,
        }
    }
}

/// Outcome of a finished game
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(PlayerId),
    Draw,
}

impl GameOutcome {
    /// Rename the winner. Useful when comparing games under relabelled players.
    pub fn relabel(self, rename: impl Fn(&PlayerId) -> PlayerId) -> Self {
        match self {
            GameOutcome::Win(player) => GameOutcome::Win(rename(&player)),
            GameOutcome::Draw => GameOutcome::Draw,
        }
    }
}
