//! Game session: the state a renderer reads from and sends events to
//!
//! A session owns one [`History`], the validated [`GameConfig`] and the
//! currently selected piece. Whose turn it is comes from the history step,
//! never from a separate counter, so jumping back always hands the turn to
//! the player who was to move at that step.

use std::fmt;

use tracing::{debug, info, warn};

use crate::{
    Result,
    board::{Board, Evaluation, Move, Piece, Position},
    config::{GameConfig, PieceAssignment},
    error::Error,
    history::History,
    identifiers::PlayerId,
    ports::SessionObserver,
    status::{MoveLabel, Status},
};

/// A single running game
pub struct Session {
    config: GameConfig,
    history: History,
    selected_piece: usize,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl Session {
    /// Start a session on the configuration's empty board.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the configuration does not
    /// validate.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let board = config.initial_board()?;
        debug!(
            rows = config.rows,
            cols = config.cols,
            players = config.players.len(),
            growth = ?config.growth,
            "starting session"
        );

        Ok(Self {
            config,
            history: History::new(board),
            selected_piece: 0,
            observers: Vec::new(),
        })
    }

    /// Attach an observer; it sees every later event.
    pub fn add_observer(&mut self, observer: impl SessionObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Board at the history cursor
    pub fn current_board(&self) -> &Board {
        self.history.current_board()
    }

    /// Player to move at the history cursor
    pub fn current_player(&self) -> &PlayerId {
        let index = self
            .history
            .current_player_index(self.config.players.len());
        &self.config.players[index]
    }

    pub fn selected_piece_index(&self) -> usize {
        self.selected_piece
    }

    /// Palette entry currently selected
    pub fn selected_piece(&self) -> &Piece {
        &self.config.pieces[self.selected_piece]
    }

    /// Piece the current player would place next
    pub fn next_piece(&self) -> &Piece {
        match self.config.assignment {
            PieceAssignment::Palette => self.selected_piece(),
            PieceAssignment::PerPlayer => {
                let index = self
                    .history
                    .current_player_index(self.config.players.len());
                &self.config.pieces[index % self.config.pieces.len()]
            }
        }
    }

    pub fn evaluation(&self) -> Evaluation {
        self.current_board().evaluate_terminal()
    }

    /// Status line for the board at the cursor
    pub fn status(&self) -> Status {
        let evaluation = self.evaluation();
        match evaluation.winner {
            Some(winner) => Status::Winner(winner),
            None if evaluation.is_draw => Status::Draw,
            None => Status::InProgress {
                player: self.current_player().clone(),
                piece: self.next_piece().clone(),
            },
        }
    }

    /// Move list labels, or `None` when the configuration hides the list
    pub fn move_labels(&self) -> Option<Vec<MoveLabel>> {
        self.config.debug.then(|| self.history.move_labels())
    }

    /// Place the next piece for the current player.
    ///
    /// On success the new board is recorded after the cursor, discarding any
    /// snapshots beyond it.
    ///
    /// # Errors
    ///
    /// Returns the engine's rejection ([`Error::IllegalMove`] or
    /// [`Error::InvalidPosition`]); the session is left unchanged. Observer
    /// failures never turn an accepted move into an error.
    pub fn on_cell_selected(&mut self, position: Position) -> Result<()> {
        let mv = Move {
            position,
            piece: self.next_piece().clone(),
            owner: self.current_player().clone(),
        };

        let next = match self.current_board().apply_move(&mv, self.config.growth) {
            Ok(next) => next,
            Err(error) => {
                debug!(%position, owner = %mv.owner, %error, "move rejected");
                notify(&mut self.observers, "on_move_rejected", |observer| {
                    observer.on_move_rejected(&mv, &error)
                });
                return Err(error);
            }
        };

        let evaluation = next.evaluate_terminal();
        self.history.record_move(next);
        let step = self.history.step();
        debug!(step, %position, owner = %mv.owner, piece = %mv.piece.value, "move recorded");

        let board = self.history.current_board();
        notify(&mut self.observers, "on_move_recorded", |observer| {
            observer.on_move_recorded(step, &mv, board)
        });

        if let Some(outcome) = evaluation.outcome() {
            info!(step, ?outcome, "game over");
            notify(&mut self.observers, "on_game_over", |observer| {
                observer.on_game_over(step, &outcome)
            });
        }

        Ok(())
    }

    /// Choose which palette piece the next placement uses. The selection is
    /// kept under [`PieceAssignment::PerPlayer`] but has no effect there.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownPiece`] if `index` is not in the palette.
    pub fn on_piece_selected(&mut self, index: usize) -> Result<()> {
        if index >= self.config.pieces.len() {
            return Err(Error::UnknownPiece {
                index,
                available: self.config.pieces.len(),
            });
        }
        self.selected_piece = index;
        Ok(())
    }

    /// Move the history cursor to `step`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StepOutOfRange`] if `step` was never recorded.
    pub fn on_jump_requested(&mut self, step: usize) -> Result<()> {
        let from = self.history.step();
        self.history.jump(step)?;
        debug!(from, to = step, "jumped");

        notify(&mut self.observers, "on_jump", |observer| {
            observer.on_jump(from, step)
        });
        Ok(())
    }
}

/// Call every observer in turn. A failing observer is logged and skipped.
fn notify(
    observers: &mut [Box<dyn SessionObserver>],
    hook: &str,
    mut call: impl FnMut(&mut dyn SessionObserver) -> Result<()>,
) {
    for observer in observers.iter_mut() {
        if let Err(error) = call(observer.as_mut()) {
            warn!(hook, %error, "session observer failed");
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("config", &self.config)
            .field("history", &self.history)
            .field("selected_piece", &self.selected_piece)
            .field("observers", &self.observers.len())
            .finish()
    }
}
