//! Winning line generation and analysis

use super::{Cell, Placement};

/// Flat cell indices making up one line
pub type Line = Vec<usize>;

/// The winning lines of a grid, in scan order.
///
/// Rows come first (top to bottom), then columns (left to right), then the
/// main diagonal and the anti-diagonal. Diagonals only exist on square grids.
/// On a 3x3 grid this is the classic eight-line table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningLines {
    lines: Vec<Line>,
}

impl WinningLines {
    /// Enumerate every winning line on a `rows` x `cols` grid
    pub fn generate(rows: usize, cols: usize) -> Self {
        let mut lines = Vec::with_capacity(rows + cols + 2);

        for row in 0..rows {
            lines.push((0..cols).map(|col| row * cols + col).collect());
        }
        for col in 0..cols {
            lines.push((0..rows).map(|row| row * cols + col).collect());
        }
        if rows == cols && rows > 0 {
            let n = rows;
            lines.push((0..n).map(|i| i * n + i).collect());
            lines.push((0..n).map(|i| i * n + (n - 1 - i)).collect());
        }

        Self { lines }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The placement completing the first satisfied line, if any.
    pub fn first_completed<'a>(&self, cells: &'a [Cell]) -> Option<&'a Placement> {
        self.lines
            .iter()
            .find_map(|line| Self::completed_line(cells, line))
    }

    /// Returns the leading placement if every cell of the line is occupied
    /// by a matching placement.
    fn completed_line<'a>(cells: &'a [Cell], line: &[usize]) -> Option<&'a Placement> {
        let (&first, rest) = line.split_first()?;
        let lead = cells.get(first)?.placement()?;

        rest.iter()
            .all(|&idx| {
                cells
                    .get(idx)
                    .and_then(Cell::placement)
                    .is_some_and(|p| p.matches(lead))
            })
            .then_some(lead)
    }
}
