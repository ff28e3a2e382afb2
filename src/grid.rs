//! Grid state: which edges are claimed and which boxes are owned.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::GridError;
use crate::config::dimensions_in_range;
use crate::edge::{Claimable, Edge, Orientation};
use crate::player::PlayerId;

type Slot = Claimable<PlayerId>;

/// Plain copy of the grid for rendering or comparison.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GridState {
    pub rows: usize,
    pub cols: usize,
    /// Row-major `(rows+1) × cols` horizontal edge owners.
    pub horizontal: Vec<Option<PlayerId>>,
    /// Row-major `rows × (cols+1)` vertical edge owners.
    pub vertical: Vec<Option<PlayerId>>,
    /// Row-major `rows × cols` box owners.
    pub boxes: Vec<Option<PlayerId>>,
}

/// `rows × cols` boxes with their bounding edges.
///
/// Edges are addressed in the 1-based convention of [`Edge`]; boxes are
/// addressed zero-based. Storage is allocated once and never resized.
pub struct Grid {
    rows: usize,
    cols: usize,
    horizontal: Vec<Slot>,
    vertical: Vec<Slot>,
    boxes: Vec<Slot>,
}

impl Grid {
    /// Create an empty grid. Both dimensions must lie in
    /// `[MIN_DIMENSION, MAX_DIMENSION]`.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if !dimensions_in_range(rows, cols) {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        Ok(Grid {
            rows,
            cols,
            horizontal: vec![Slot::new(); (rows + 1) * cols],
            vertical: vec![Slot::new(); rows * (cols + 1)],
            boxes: vec![Slot::new(); rows * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of edge slots, `(rows+1)·cols + rows·(cols+1)`.
    pub fn total_edges(&self) -> usize {
        self.horizontal.len() + self.vertical.len()
    }

    pub fn claimed_edges(&self) -> usize {
        self.horizontal
            .iter()
            .chain(self.vertical.iter())
            .filter(|s| s.is_claimed())
            .count()
    }

    /// Claim an edge for `mark` and award any boxes it closes.
    ///
    /// Returns how many boxes this claim completed (0, 1 or 2). On error the
    /// grid is left untouched.
    pub fn claim(
        &mut self,
        orientation: Orientation,
        row: usize,
        col: usize,
        mark: PlayerId,
    ) -> Result<usize, GridError> {
        let idx = self.slot_index(orientation, row, col)?;
        let slot = match orientation {
            Orientation::Horizontal => &mut self.horizontal[idx],
            Orientation::Vertical => &mut self.vertical[idx],
        };
        if !slot.claim(mark) {
            return Err(GridError::AlreadyClaimed {
                orientation,
                row,
                col,
            });
        }

        let (r, c) = (row - 1, col - 1);
        let mut made = 0;
        match orientation {
            Orientation::Horizontal => {
                // box above, then box below
                if r > 0 && self.settle_box(r - 1, c, mark) {
                    made += 1;
                }
                if r < self.rows && self.settle_box(r, c, mark) {
                    made += 1;
                }
            }
            Orientation::Vertical => {
                // box left, then box right
                if c > 0 && self.settle_box(r, c - 1, mark) {
                    made += 1;
                }
                if c < self.cols && self.settle_box(r, c, mark) {
                    made += 1;
                }
            }
        }
        log::debug!("{:?} claimed {} {} {}, closing {} box(es)", mark, orientation, row, col, made);
        Ok(made)
    }

    /// Claim an [`Edge`] value. See [`Grid::claim`].
    pub fn claim_edge(&mut self, edge: Edge, mark: PlayerId) -> Result<usize, GridError> {
        self.claim(edge.orientation, edge.row, edge.col, mark)
    }

    /// Returns `true` once every box has an owner.
    pub fn is_full(&self) -> bool {
        self.boxes.iter().all(|b| b.is_claimed())
    }

    /// Owner of the edge, `None` while unclaimed.
    pub fn edge_owner(
        &self,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Result<Option<PlayerId>, GridError> {
        let idx = self.slot_index(orientation, row, col)?;
        Ok(match orientation {
            Orientation::Horizontal => self.horizontal[idx].owner(),
            Orientation::Vertical => self.vertical[idx].owner(),
        })
    }

    pub fn is_claimed(
        &self,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Result<bool, GridError> {
        Ok(self.edge_owner(orientation, row, col)?.is_some())
    }

    /// Owner of the zero-based box `(row, col)`; `None` when unowned or off
    /// the grid.
    pub fn box_owner(&self, row: usize, col: usize) -> Option<PlayerId> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.boxes[row * self.cols + col].owner()
    }

    /// Number of boxes stamped with `mark`.
    pub fn owned_by(&self, mark: PlayerId) -> usize {
        self.boxes
            .iter()
            .filter(|b| b.owner() == Some(mark))
            .count()
    }

    pub fn owned_boxes(&self) -> usize {
        self.boxes.iter().filter(|b| b.is_claimed()).count()
    }

    /// Every edge still open, horizontal edges first, row-major.
    pub fn unclaimed_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let cols = self.cols;
        let h = self
            .horizontal
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.is_claimed())
            .map(move |(i, _)| Edge::horizontal(i / cols + 1, i % cols + 1));
        let v = self
            .vertical
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.is_claimed())
            .map(move |(i, _)| Edge::vertical(i / (cols + 1) + 1, i % (cols + 1) + 1));
        h.chain(v)
    }

    /// Copy out the full grid for rendering or comparison.
    pub fn state(&self) -> GridState {
        GridState::from(self)
    }

    fn slot_index(
        &self,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Result<usize, GridError> {
        let (max_row, max_col, width) = match orientation {
            Orientation::Horizontal => (self.rows + 1, self.cols, self.cols),
            Orientation::Vertical => (self.rows, self.cols + 1, self.cols + 1),
        };
        if row == 0 || col == 0 || row > max_row || col > max_col {
            return Err(GridError::OutOfRange {
                orientation,
                row,
                col,
            });
        }
        Ok((row - 1) * width + (col - 1))
    }

    fn h(&self, r: usize, c: usize) -> bool {
        self.horizontal[r * self.cols + c].is_claimed()
    }

    fn v(&self, r: usize, c: usize) -> bool {
        self.vertical[r * (self.cols + 1) + c].is_claimed()
    }

    fn is_box_complete(&self, r: usize, c: usize) -> bool {
        self.h(r, c) && self.h(r + 1, c) && self.v(r, c) && self.v(r, c + 1)
    }

    /// Award the zero-based box to `mark` if its last edge just went down.
    fn settle_box(&mut self, r: usize, c: usize, mark: PlayerId) -> bool {
        let idx = r * self.cols + c;
        // An owned box had all four edges claimed already, including the one
        // being claimed right now.
        debug_assert!(
            !self.boxes[idx].is_claimed(),
            "box ({}, {}) owned before its last edge was claimed",
            r,
            c
        );
        self.is_box_complete(r, c) && self.boxes[idx].claim(mark)
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Grid {{ size: {}x{}, edges: {}/{}, boxes: {}/{} }}",
            self.rows,
            self.cols,
            self.claimed_edges(),
            self.total_edges(),
            self.owned_boxes(),
            self.boxes.len()
        )
    }
}

impl From<&Grid> for GridState {
    fn from(g: &Grid) -> Self {
        GridState {
            rows: g.rows,
            cols: g.cols,
            horizontal: owners(&g.horizontal),
            vertical: owners(&g.vertical),
            boxes: owners(&g.boxes),
        }
    }
}

fn owners(slots: &[Slot]) -> Vec<Option<PlayerId>> {
    slots.iter().map(|s| s.owner()).collect()
}
