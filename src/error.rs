//! Error types for the grove crate

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::Position;

/// Why a move was refused by the board engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IllegalMoveReason {
    /// The target cell already holds a piece
    AlreadyOccupied,
    /// A line has already been completed on this board
    GameOver,
}

impl fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMoveReason::AlreadyOccupied => write!(f, "cell is already occupied"),
            IllegalMoveReason::GameOver => write!(f, "game already over"),
        }
    }
}

/// Main error type for the grove crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("illegal move at {position}: {reason}")]
    IllegalMove {
        position: Position,
        reason: IllegalMoveReason,
    },

    #[error("position {position} is out of bounds for a {rows}x{cols} board")]
    InvalidPosition {
        position: Position,
        rows: usize,
        cols: usize,
    },

    #[error("step {step} is out of range (history has {len} entries)")]
    StepOutOfRange { step: usize, len: usize },

    #[error("piece {index} does not exist ({available} pieces configured)")]
    UnknownPiece { index: usize, available: usize },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("invalid position '{input}' (expected format: 'row,col')")]
    ParsePosition { input: String },

    #[error("invalid command '{input}' (expected {usage})")]
    ParseCommand { input: String, usage: &'static str },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// The rejection reason, if this error is an illegal move
    pub fn illegal_move_reason(&self) -> Option<IllegalMoveReason> {
        match self {
            Error::IllegalMove { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
