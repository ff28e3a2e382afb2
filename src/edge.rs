//! Edge addressing and the claim bookkeeping shared by edges and boxes.

use core::fmt;

/// Orientation of an edge on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Letter used for this orientation in move input (`H` or `V`).
    pub fn letter(&self) -> char {
        match self {
            Orientation::Horizontal => 'H',
            Orientation::Vertical => 'V',
        }
    }

    /// Parse an orientation letter, ignoring case.
    pub fn from_letter(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'H' => Some(Orientation::Horizontal),
            'V' => Some(Orientation::Vertical),
            _ => None,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A dot on the grid, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// An edge address in the 1-based convention shown to players.
///
/// Horizontal edges run `row ∈ [1, rows+1]`, `col ∈ [1, cols]`; vertical
/// edges run `row ∈ [1, rows]`, `col ∈ [1, cols+1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub orientation: Orientation,
    pub row: usize,
    pub col: usize,
}

impl Edge {
    pub const fn new(orientation: Orientation, row: usize, col: usize) -> Self {
        Self {
            orientation,
            row,
            col,
        }
    }

    pub const fn horizontal(row: usize, col: usize) -> Self {
        Self::new(Orientation::Horizontal, row, col)
    }

    pub const fn vertical(row: usize, col: usize) -> Self {
        Self::new(Orientation::Vertical, row, col)
    }

    /// The two dots this edge joins, or `None` for a zero coordinate.
    pub fn endpoints(&self) -> Option<(Position, Position)> {
        let r = self.row.checked_sub(1)?;
        let c = self.col.checked_sub(1)?;
        let start = Position::new(r, c);
        let end = match self.orientation {
            Orientation::Horizontal => Position::new(r, c + 1),
            Orientation::Vertical => Position::new(r + 1, c),
        };
        Some((start, end))
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.orientation, self.row, self.col)
    }
}

/// Ownership slot carried by every edge and box.
///
/// Once claimed the owner never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Claimable<M> {
    owner: Option<M>,
}

impl<M: Copy> Claimable<M> {
    pub const fn new() -> Self {
        Self { owner: None }
    }

    pub fn is_claimed(&self) -> bool {
        self.owner.is_some()
    }

    pub fn owner(&self) -> Option<M> {
        self.owner
    }

    /// Stamp `mark` as the owner. Returns `false`, leaving the slot
    /// untouched, when it was already claimed.
    pub fn claim(&mut self, mark: M) -> bool {
        if self.owner.is_some() {
            return false;
        }
        self.owner = Some(mark);
        true
    }
}

impl<M: Copy> Default for Claimable<M> {
    fn default() -> Self {
        Self::new()
    }
}
