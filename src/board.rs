//! Board engine: grid state, move application and terminal evaluation

pub mod cell;
pub mod grid;
pub mod lines;
pub mod position;
pub mod terminal;

pub use cell::{Cell, Piece, Placement};
pub use grid::{Board, Growth, Move};
pub use lines::{Line, WinningLines};
pub use position::Position;
pub use terminal::{Evaluation, GameOutcome};
