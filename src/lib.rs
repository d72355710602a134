//! Turn-based line-completion board games
//!
//! This crate provides:
//! - A board engine that applies moves, ages placed pieces and detects
//!   wins and draws on any grid
//! - A move history with a time-travel cursor
//! - A game session that a renderer reads state from and sends moves,
//!   piece selections and jumps to
//! - A terminal front-end (`grove` binary)
//!
//! Two rule sets ship as presets: classic tic-tac-toe and tree planting.
//! In tree planting a line must hold one owner's trees of a single species,
//! and trees age every turn.

pub mod adapters;
pub mod board;
pub mod cli;
pub mod config;
pub mod error;
pub mod history;
pub mod identifiers;
pub mod ports;
pub mod session;
pub mod status;

pub use board::{Board, Evaluation, GameOutcome, Growth, Move, Piece, Position};
pub use config::GameConfig;
pub use error::{Error, IllegalMoveReason, Result};
pub use history::{History, Snapshot};
pub use identifiers::PlayerId;
pub use session::Session;
pub use status::{MoveLabel, Status};
