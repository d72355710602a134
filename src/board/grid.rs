//! Board state representation and the move rules

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Cell, Evaluation, Piece, Placement, Position, WinningLines};
use crate::{error::IllegalMoveReason, identifiers::PlayerId};

/// Whether placed pieces age as the game goes on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Growth {
    /// Pieces never change once placed
    #[default]
    Static,
    /// Every placed piece ages by one at each turn boundary
    Aging,
}

/// A move: which piece goes where, on whose behalf
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: Position,
    pub piece: Piece,
    pub owner: PlayerId,
}

impl Move {
    pub fn new(position: impl Into<Position>, piece: Piece, owner: PlayerId) -> Self {
        Self {
            position: position.into(),
            piece,
            owner,
        }
    }
}

/// A `rows` x `cols` grid of cells, stored row-major.
///
/// Engine operations take `&self` and return a new board, so any board held
/// in a history snapshot stays valid after later moves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardData")]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

/// Unchecked serialized form of a [`Board`]
#[derive(Deserialize)]
struct BoardData {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl TryFrom<BoardData> for Board {
    type Error = crate::Error;

    fn try_from(data: BoardData) -> Result<Self, Self::Error> {
        let expected = Board::cell_count(data.rows, data.cols)?;
        if data.cells.len() != expected {
            return Err(crate::Error::InvalidConfiguration {
                message: format!(
                    "a {}x{} board needs {expected} cells, got {}",
                    data.rows,
                    data.cols,
                    data.cells.len()
                ),
            });
        }
        Ok(Board {
            rows: data.rows,
            cols: data.cols,
            cells: data.cells,
        })
    }
}

impl Board {
    /// Create an empty board.
    ///
    /// # Errors
    ///
    /// Returns error if either dimension is zero or the cell count does not
    /// fit in `usize`.
    pub fn new(rows: usize, cols: usize) -> Result<Self, crate::Error> {
        let len = Self::cell_count(rows, cols)?;
        Ok(Board {
            rows,
            cols,
            cells: vec![Cell::Empty; len],
        })
    }

    /// Number of cells on a `rows` x `cols` board.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if a dimension is zero or
    /// `rows * cols` overflows.
    ///
    /// [`Error::InvalidConfiguration`]: crate::Error::InvalidConfiguration
    pub fn cell_count(rows: usize, cols: usize) -> Result<usize, crate::Error> {
        if rows == 0 || cols == 0 {
            return Err(crate::Error::InvalidConfiguration {
                message: format!("board dimensions must be positive, got {rows}x{cols}"),
            });
        }
        rows.checked_mul(cols).ok_or_else(|| crate::Error::InvalidConfiguration {
            message: format!("board dimensions {rows}x{cols} are too large"),
        })
    }

    /// The standard empty 3x3 board
    pub fn classic() -> Self {
        Board {
            rows: 3,
            cols: 3,
            cells: vec![Cell::Empty; 9],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Get the cell at a position, or `None` when off the board
    pub fn get(&self, position: Position) -> Option<&Cell> {
        if !position.is_within(self.rows, self.cols) {
            return None;
        }
        self.cells.get(position.to_index(self.cols))
    }

    /// Check if a position is on the board and empty
    pub fn is_empty(&self, position: Position) -> bool {
        self.get(position).is_some_and(Cell::is_empty)
    }

    /// Get all empty positions in row-major order
    pub fn empty_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(i, _)| Position::from_index(i, self.cols))
            .collect()
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    fn index_of(&self, position: Position) -> Result<usize, crate::Error> {
        if position.is_within(self.rows, self.cols) {
            Ok(position.to_index(self.cols))
        } else {
            Err(crate::Error::InvalidPosition {
                position,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Apply a move and return the resulting board.
    ///
    /// Under [`Growth::Aging`] every piece already on the board ages by one
    /// before the new piece is placed, so the new piece starts at age 0.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidPosition`] if the position is off the board
    /// - [`Error::IllegalMove`] with [`IllegalMoveReason::GameOver`] if a line
    ///   is already complete
    /// - [`Error::IllegalMove`] with [`IllegalMoveReason::AlreadyOccupied`] if
    ///   the target cell holds a piece
    ///
    /// [`Error::InvalidPosition`]: crate::Error::InvalidPosition
    /// [`Error::IllegalMove`]: crate::Error::IllegalMove
    #[must_use = "apply_move returns a new board; the original is unchanged"]
    pub fn apply_move(&self, mv: &Move, growth: Growth) -> Result<Board, crate::Error> {
        let index = self.index_of(mv.position)?;

        let illegal = |reason| crate::Error::IllegalMove {
            position: mv.position,
            reason,
        };
        if self.winner().is_some() {
            return Err(illegal(IllegalMoveReason::GameOver));
        }
        if !self.cells[index].is_empty() {
            return Err(illegal(IllegalMoveReason::AlreadyOccupied));
        }

        let mut next = match growth {
            Growth::Aging => self.advance_time(),
            Growth::Static => self.clone(),
        };
        next.cells[index] = Cell::Occupied(Placement::new(mv.piece.clone(), mv.owner.clone()));
        Ok(next)
    }

    /// Age every placed piece by one turn
    #[must_use = "advance_time returns a new board; the original is unchanged"]
    pub fn advance_time(&self) -> Board {
        let mut next = self.clone();
        for cell in &mut next.cells {
            if let Cell::Occupied(placement) = cell {
                placement.age = placement.age.saturating_add(1);
            }
        }
        next
    }

    /// Evaluate whether the game on this board is won or drawn
    pub fn evaluate_terminal(&self) -> Evaluation {
        let winner = self.winner();
        let is_draw = winner.is_none() && self.is_full();
        Evaluation { winner, is_draw }
    }

    /// Owner of the first completed line, if any
    pub fn winner(&self) -> Option<PlayerId> {
        WinningLines::generate(self.rows, self.cols)
            .first_completed(&self.cells)
            .map(|placement| placement.owner.clone())
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        self.evaluate_terminal().is_draw
    }

    /// Rename every owner on the board.
    #[must_use = "relabel_owners returns a new board; the original is unchanged"]
    pub fn relabel_owners(&self, rename: impl Fn(&PlayerId) -> PlayerId) -> Board {
        let mut relabelled = self.clone();
        for cell in &mut relabelled.cells {
            if let Cell::Occupied(placement) = cell {
                placement.owner = rename(&placement.owner);
            }
        }
        relabelled
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::classic()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(self.cols).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let symbols: Vec<&str> = cells.iter().map(Cell::symbol).collect();
            write!(f, "{}", symbols.join(" "))?;
        }
        Ok(())
    }
}
