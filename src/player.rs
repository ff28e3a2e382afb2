//! Players and the seat marks stamped onto claimed edges and boxes.

use alloc::string::{String, ToString};
use core::fmt;

use crate::common::MatchError;

/// Seat of a player within a match. Used as the claimant mark on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// The seat whose turn follows this one.
    pub fn other(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Zero-based index, handy for per-seat arrays.
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

/// A named participant with a running box count.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    score: usize,
}

impl Player {
    /// Create a player, trimming the name. Blank names are rejected.
    pub fn new(name: &str) -> Result<Self, MatchError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(MatchError::EmptyName);
        }
        Ok(Self {
            name: name.to_string(),
            score: 0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> usize {
        self.score
    }

    /// Up to the first two characters of the name, upper-cased.
    pub fn initials(&self) -> String {
        self.name
            .chars()
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }

    pub(crate) fn add_score(&mut self, points: usize) {
        self.score += points;
    }

    pub(crate) fn reset_score(&mut self) {
        self.score = 0;
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Player {}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} points)", self.name, self.score)
    }
}
