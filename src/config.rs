//! Session configuration.

use std::{collections::HashSet, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    board::{Board, Growth, Piece},
    error::Error,
    identifiers::PlayerId,
};

/// Which piece a player places
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PieceAssignment {
    /// Whatever piece is currently selected from the shared palette
    #[default]
    Palette,
    /// Player `i` always places `pieces[i % pieces.len()]`
    PerPlayer,
}

/// Options fixed at the start of a game session.
///
/// # Examples
///
/// ```
/// use grove::config::{GameConfig, PieceAssignment};
/// use grove::board::{Growth, Piece};
///
/// let config = GameConfig::classic()
///     .with_dimensions(4, 4)
///     .with_players(["red", "green", "blue"])
///     .with_pieces([Piece::new("*", "star")])
///     .with_assignment(PieceAssignment::Palette)
///     .with_growth(Growth::Aging);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    /// Players in turn order
    pub players: Vec<PlayerId>,
    /// Piece palette; the first entry is selected at start
    pub pieces: Vec<Piece>,
    pub assignment: PieceAssignment,
    pub growth: Growth,
    /// Expose the move list to the renderer
    pub debug: bool,
}

impl GameConfig {
    /// Tic-tac-toe: 3x3, players X and O, each placing their own symbol.
    pub fn classic() -> Self {
        Self {
            rows: 3,
            cols: 3,
            players: vec![PlayerId::new("X"), PlayerId::new("O")],
            pieces: vec![Piece::new("X", "cross"), Piece::new("O", "nought")],
            assignment: PieceAssignment::PerPlayer,
            growth: Growth::Static,
            debug: true,
        }
    }

    /// Tree planting: two seasons plant from a shared palette of trees,
    /// and trees age every turn.
    pub fn tree_planting() -> Self {
        Self {
            rows: 3,
            cols: 3,
            players: vec![PlayerId::new("summer"), PlayerId::new("winter")],
            pieces: vec![Piece::new("⋀", "pine"), Piece::new("Y", "oak")],
            assignment: PieceAssignment::Palette,
            growth: Growth::Aging,
            debug: true,
        }
    }

    /// Set the board dimensions.
    pub fn with_dimensions(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Set the players, in turn order.
    pub fn with_players<I, P>(mut self, players: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PlayerId>,
    {
        self.players = players.into_iter().map(Into::into).collect();
        self
    }

    /// Set the piece palette.
    pub fn with_pieces(mut self, pieces: impl IntoIterator<Item = Piece>) -> Self {
        self.pieces = pieces.into_iter().collect();
        self
    }

    /// Set how pieces are assigned to players.
    pub fn with_assignment(mut self, assignment: PieceAssignment) -> Self {
        self.assignment = assignment;
        self
    }

    /// Set the growth rule.
    pub fn with_growth(mut self, growth: Growth) -> Self {
        self.growth = growth;
        self
    }

    /// Enable or disable the move list.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Check the configuration can start a game.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if a dimension is zero, the
    /// board has more cells than `usize` can count, fewer than two players
    /// are listed, a player appears twice, or there are no
    /// pieces.
    pub fn validate(&self) -> Result<()> {
        let invalid = |message: String| Err(Error::InvalidConfiguration { message });

        Board::cell_count(self.rows, self.cols)?;
        if self.players.len() < 2 {
            return invalid(format!(
                "at least 2 players are required, got {}",
                self.players.len()
            ));
        }
        let mut seen = HashSet::new();
        if let Some(duplicate) = self.players.iter().find(|p| !seen.insert(*p)) {
            return invalid(format!("player '{duplicate}' is listed more than once"));
        }
        if self.pieces.is_empty() {
            return invalid("at least 1 piece is required".to_string());
        }
        Ok(())
    }

    /// The empty board this configuration starts from.
    pub fn initial_board(&self) -> Result<Board> {
        Board::new(self.rows, self.cols)
    }

    /// Load a configuration from a JSON file. Missing fields take their
    /// [`GameConfig::classic`] values.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, is not valid JSON, or fails
    /// [`GameConfig::validate`].
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config file {}", path.display()),
            source,
        })?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        assert!(GameConfig::classic().validate().is_ok());
        assert!(GameConfig::tree_planting().validate().is_ok());
        assert_eq!(GameConfig::tree_planting().growth, Growth::Aging);
    }

    #[test]
    fn test_rejects_zero_dimension() {
        let err = GameConfig::classic()
            .with_dimensions(0, 3)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("positive"));
    }

    #[test]
    fn test_rejects_overflowing_dimensions() {
        let err = GameConfig::classic()
            .with_dimensions(usize::MAX, 2)
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_rejects_single_player() {
        let err = GameConfig::classic()
            .with_players(["solo"])
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("at least 2 players"));
    }

    #[test]
    fn test_rejects_duplicate_players() {
        let err = GameConfig::classic()
            .with_players(["a", "b", "a"])
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("'a'"));
    }

    #[test]
    fn test_rejects_empty_palette() {
        let result = GameConfig::classic().with_pieces(Vec::new()).validate();
        assert!(result.is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "rows": 4, "cols": 4, "growth": "aging" }"#).unwrap();
        assert_eq!(config.rows, 4);
        assert_eq!(config.growth, Growth::Aging);
        assert_eq!(config.players, GameConfig::classic().players);
        assert_eq!(config.assignment, PieceAssignment::PerPlayer);
    }
}
