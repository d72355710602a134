//! Cell contents: pieces, their owners and their age

use serde::{Deserialize, Serialize};

use crate::identifiers::PlayerId;

/// A kind of piece that can be placed, such as a symbol or a tree species
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    /// Symbol compared by the winning rule
    pub value: String,
    /// Human-readable label
    pub name: String,
}

impl Piece {
    pub fn new(value: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            name: name.into(),
        }
    }
}

/// A piece sitting on the board
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub piece: Piece,
    pub owner: PlayerId,
    /// Turns elapsed since placement; only advances under [`Growth::Aging`].
    ///
    /// [`Growth::Aging`]: super::Growth::Aging
    pub age: u32,
}

impl Placement {
    pub fn new(piece: Piece, owner: PlayerId) -> Self {
        Self {
            piece,
            owner,
            age: 0,
        }
    }

    /// Whether two placements count as the same for line completion:
    /// same symbol and same owner. Age is ignored.
    pub fn matches(&self, other: &Placement) -> bool {
        self.piece.value == other.piece.value && self.owner == other.owner
    }
}

/// A cell on the board
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Placement),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn placement(&self) -> Option<&Placement> {
        match self {
            Cell::Occupied(placement) => Some(placement),
            Cell::Empty => None,
        }
    }

    pub fn owner(&self) -> Option<&PlayerId> {
        self.placement().map(|p| &p.owner)
    }

    /// Symbol shown for this cell, `.` when empty
    pub fn symbol(&self) -> &str {
        match self {
            Cell::Occupied(placement) => &placement.piece.value,
            Cell::Empty => ".",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_requires_symbol_and_owner() {
        let pine = Piece::new("⋀", "pine");
        let oak = Piece::new("Y", "oak");
        let summer = PlayerId::new("summer");
        let winter = PlayerId::new("winter");

        let a = Placement::new(pine.clone(), summer.clone());
        let mut older = a.clone();
        older.age = 4;

        assert!(a.matches(&older));
        assert!(!a.matches(&Placement::new(oak, summer)));
        assert!(!a.matches(&Placement::new(pine, winter)));
    }

    #[test]
    fn test_empty_cell() {
        let cell = Cell::default();
        assert!(cell.is_empty());
        assert_eq!(cell.symbol(), ".");
        assert!(cell.owner().is_none());
    }
}
