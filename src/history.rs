//! Move history with a time-travel cursor
//!
//! A [`History`] holds every board reached in the current line of play plus a
//! cursor pointing at the board being shown. Jumping moves only the cursor.
//! Recording a move while the cursor sits on an earlier step discards every
//! later snapshot before appending, so there is a single line of play and
//! no redo branch is kept.

use serde::Serialize;
use tracing::trace;

use crate::{board::Board, status::MoveLabel};

/// One historical state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub board: Board,
}

/// Ordered snapshots plus a cursor.
///
/// Invariant: `step < snapshots.len()`, and there is always at least one
/// snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    snapshots: Vec<Snapshot>,
    step: usize,
}

impl History {
    /// Start a history at `board`, cursor on step 0
    pub fn new(board: Board) -> Self {
        Self {
            snapshots: vec![Snapshot { board }],
            step: 0,
        }
    }

    /// Index of the snapshot currently shown
    pub fn step(&self) -> usize {
        self.step
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; a history starts with its initial snapshot.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// The snapshot under the cursor
    pub fn current(&self) -> &Snapshot {
        &self.snapshots[self.step]
    }

    pub fn current_board(&self) -> &Board {
        &self.current().board
    }

    /// Whether the cursor sits on the latest snapshot
    pub fn is_at_latest(&self) -> bool {
        self.step + 1 == self.snapshots.len()
    }

    /// Append the board produced by a move.
    ///
    /// Snapshots after the cursor are dropped first; the cursor then points
    /// at the new snapshot.
    pub fn record_move(&mut self, board: Board) {
        let keep = self.step + 1;
        if keep < self.snapshots.len() {
            trace!(
                discarded = self.snapshots.len() - keep,
                step = self.step,
                "truncating history before recording move"
            );
            self.snapshots.truncate(keep);
        }
        self.snapshots.push(Snapshot { board });
        self.step = self.snapshots.len() - 1;
    }

    /// Move the cursor to `step` without touching the snapshots.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StepOutOfRange`] if `step` is not a recorded step.
    ///
    /// [`Error::StepOutOfRange`]: crate::Error::StepOutOfRange
    pub fn jump(&mut self, step: usize) -> Result<(), crate::Error> {
        if step >= self.snapshots.len() {
            return Err(crate::Error::StepOutOfRange {
                step,
                len: self.snapshots.len(),
            });
        }
        self.step = step;
        Ok(())
    }

    /// Index of the player whose turn it is at the cursor.
    ///
    /// Derived from the step alone, so it is correct after any jump.
    pub fn current_player_index(&self, num_players: usize) -> usize {
        if num_players == 0 {
            return 0;
        }
        self.step % num_players
    }

    /// One label per snapshot, for a move list
    pub fn move_labels(&self) -> Vec<MoveLabel> {
        (0..self.snapshots.len()).map(MoveLabel::for_step).collect()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Board::default())
    }
}
