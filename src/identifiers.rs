//! Identifier types for players.

use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

/// Name of a player taking part in a game.
///
/// Owners recorded on the board are player ids, so two boards that differ
/// only by a consistent renaming of players evaluate to the same outcome
/// under that renaming.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    /// Create a new player identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::identifiers::PlayerId;
    ///
    /// let player = PlayerId::new("summer");
    /// assert_eq!(player.as_str(), "summer");
    /// ```
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First character of the name, used to tag cells on a text board
    pub fn initial(&self) -> char {
        self.0.chars().next().unwrap_or('?')
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<&str> for PlayerId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl Borrow<str> for PlayerId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<String> for PlayerId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
