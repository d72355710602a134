//! Observer port - hooks for watching a game session
//!
//! Renderers, transcripts and tests can follow a session without the session
//! knowing how the events are consumed.

use crate::{
    Result,
    board::{Board, GameOutcome, Move},
    error::Error,
};

/// Observer trait for monitoring a session
///
/// All hooks default to doing nothing. A hook is called after the session
/// state has changed, so an observer always sees the new state. An error
/// returned from a hook is logged by the session and otherwise ignored.
///
/// # Event Sequence
///
/// - `on_move_recorded` after each accepted move, followed by
///   `on_game_over` if that move ended the game
/// - `on_move_rejected` for each refused move (state unchanged)
/// - `on_jump` after the cursor moves
///
/// # Examples
///
/// ```
/// use grove::{board::GameOutcome, ports::SessionObserver};
///
/// #[derive(Default)]
/// struct Scoreboard {
///     finished: usize,
/// }
///
/// impl SessionObserver for Scoreboard {
///     fn on_game_over(&mut self, _step: usize, _outcome: &GameOutcome) -> grove::Result<()> {
///         self.finished += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait SessionObserver: Send {
    /// Called after a move has been appended to the history.
    ///
    /// # Parameters
    ///
    /// * `step` - History step of the new snapshot
    /// * `mv` - The move that was applied
    /// * `board` - Board after the move
    fn on_move_recorded(&mut self, _step: usize, _mv: &Move, _board: &Board) -> Result<()> {
        Ok(())
    }

    /// Called when the engine refuses a move.
    fn on_move_rejected(&mut self, _mv: &Move, _error: &Error) -> Result<()> {
        Ok(())
    }

    /// Called after the cursor moves from `from` to `to`.
    fn on_jump(&mut self, _from: usize, _to: usize) -> Result<()> {
        Ok(())
    }

    /// Called when a recorded move finishes the game.
    fn on_game_over(&mut self, _step: usize, _outcome: &GameOutcome) -> Result<()> {
        Ok(())
    }
}
