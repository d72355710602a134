//! Derived views: the status line and move-list labels

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{board::Piece, identifiers::PlayerId};

/// What a renderer should announce for the current snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Winner(PlayerId),
    Draw,
    InProgress {
        player: PlayerId,
        /// Piece the next placement will use
        piece: Piece,
    },
}

impl Status {
    pub fn is_over(&self) -> bool {
        !matches!(self, Status::InProgress { .. })
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Winner(player) => write!(f, "Winner: {player}"),
            Status::Draw => write!(f, "Draw"),
            Status::InProgress { player, piece } => {
                write!(f, "Current player: {player}\nCurrent piece: {}", piece.value)
            }
        }
    }
}

/// Label for one entry of the move list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveLabel {
    pub step: usize,
}

impl MoveLabel {
    pub fn for_step(step: usize) -> Self {
        Self { step }
    }
}

impl fmt::Display for MoveLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.step {
            0 => write!(f, "Go to game start"),
            n => write!(f, "Go to move #{n}"),
        }
    }
}
