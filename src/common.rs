//! Common types for Dots and Boxes: grid and match errors.

use crate::edge::Orientation;
use core::fmt;

/// Errors returned by `Grid` operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Requested grid size is outside the playable range.
    InvalidDimensions { rows: usize, cols: usize },
    /// Edge coordinates do not address a slot on this grid.
    OutOfRange {
        orientation: Orientation,
        row: usize,
        col: usize,
    },
    /// Edge has already been claimed.
    AlreadyClaimed {
        orientation: Orientation,
        row: usize,
        col: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidDimensions { rows, cols } => write!(
                f,
                "Grid size {}x{} is invalid - rows and cols must be between {} and {}",
                rows,
                cols,
                crate::config::MIN_DIMENSION,
                crate::config::MAX_DIMENSION
            ),
            GridError::OutOfRange {
                orientation,
                row,
                col,
            } => write!(f, "Edge {} {} {} is out of range", orientation, row, col),
            GridError::AlreadyClaimed {
                orientation,
                row,
                col,
            } => write!(f, "Edge {} {} {} is already claimed", orientation, row, col),
        }
    }
}

/// Errors returned by `Match` operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchError {
    /// Requested grid size is outside the playable range.
    InvalidDimensions { rows: usize, cols: usize },
    /// Both players were given the same name.
    DuplicateNames,
    /// A player name was empty after trimming.
    EmptyName,
    /// No game has been started yet.
    NotStarted,
    /// The game is over; start a new one to keep playing.
    AlreadyFinished,
    /// The grid rejected the move.
    Grid(GridError),
}

impl MatchError {
    /// Move-time errors the caller can answer by asking for another move.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            MatchError::NotStarted | MatchError::AlreadyFinished | MatchError::Grid(_)
        )
    }
}

impl From<GridError> for MatchError {
    fn from(err: GridError) -> Self {
        match err {
            GridError::InvalidDimensions { rows, cols } => {
                MatchError::InvalidDimensions { rows, cols }
            }
            other => MatchError::Grid(other),
        }
    }
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::InvalidDimensions { rows, cols } => {
                write!(f, "{}", GridError::InvalidDimensions { rows: *rows, cols: *cols })
            }
            MatchError::DuplicateNames => write!(f, "Players must have different names"),
            MatchError::EmptyName => write!(f, "Player name cannot be empty"),
            MatchError::NotStarted => write!(f, "No game in progress"),
            MatchError::AlreadyFinished => write!(f, "Game is already finished"),
            MatchError::Grid(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GridError {}

#[cfg(feature = "std")]
impl std::error::Error for MatchError {}
