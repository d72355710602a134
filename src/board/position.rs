//! Grid addressing

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A cell address on the board, zero-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Convert a row-major flat index into a position on a grid `cols` wide.
    pub fn from_index(index: usize, cols: usize) -> Self {
        Self {
            row: index / cols,
            col: index % cols,
        }
    }

    /// Row-major flat index on a grid `cols` wide.
    pub fn to_index(self, cols: usize) -> usize {
        self.row * cols + self.col
    }

    /// Check whether the position lies on a `rows` x `cols` grid
    pub fn is_within(self, rows: usize, cols: usize) -> bool {
        self.row < rows && self.col < cols
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl FromStr for Position {
    type Err = crate::Error;

    /// Parse `"row,col"`, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || crate::Error::ParsePosition {
            input: s.to_string(),
        };

        let (row, col) = s.split_once(',').ok_or_else(invalid)?;
        let row = row.trim().parse().map_err(|_| invalid())?;
        let col = col.trim().parse().map_err(|_| invalid())?;
        Ok(Self { row, col })
    }
}
