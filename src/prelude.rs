//! Commonly used types and utilities for ease of import.

pub use crate::{Edge, Grid, Match, MatchError, MoveResult, Orientation, Outcome, PlayerId};

#[cfg(feature = "std")]
pub use crate::{parse_move, render, Session};
