//! In-memory event log observer.
//!
//! Records every session event in order. Clones share the same log, so a
//! caller can keep one handle and hand another to the session.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;

use crate::{
    Result,
    board::{Board, GameOutcome, Move, Position},
    error::{Error, IllegalMoveReason},
    ports::SessionObserver,
};

/// One observed session event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SessionEvent {
    MoveRecorded { step: usize, mv: Move },
    MoveRejected {
        position: Position,
        reason: Option<IllegalMoveReason>,
    },
    Jumped { from: usize, to: usize },
    GameOver { step: usize, outcome: GameOutcome },
}

/// Shared, append-only list of session events.
///
/// # Examples
///
/// ```
/// use grove::{adapters::EventLog, config::GameConfig, session::Session, board::Position};
///
/// let log = EventLog::new();
/// let mut session = Session::new(GameConfig::classic())?;
/// session.add_observer(log.clone());
///
/// session.on_cell_selected(Position::new(1, 1))?;
/// assert_eq!(log.len(), 1);
/// # Ok::<(), grove::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<SessionEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<SessionEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of all events recorded so far
    pub fn events(&self) -> Vec<SessionEvent> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn push(&self, event: SessionEvent) {
        self.lock().push(event);
    }
}

impl SessionObserver for EventLog {
    fn on_move_recorded(&mut self, step: usize, mv: &Move, _board: &Board) -> Result<()> {
        self.push(SessionEvent::MoveRecorded {
            step,
            mv: mv.clone(),
        });
        Ok(())
    }

    fn on_move_rejected(&mut self, mv: &Move, error: &Error) -> Result<()> {
        self.push(SessionEvent::MoveRejected {
            position: mv.position,
            reason: error.illegal_move_reason(),
        });
        Ok(())
    }

    fn on_jump(&mut self, from: usize, to: usize) -> Result<()> {
        self.push(SessionEvent::Jumped { from, to });
        Ok(())
    }

    fn on_game_over(&mut self, step: usize, outcome: &GameOutcome) -> Result<()> {
        self.push(SessionEvent::GameOver {
            step,
            outcome: outcome.clone(),
        });
        Ok(())
    }
}
