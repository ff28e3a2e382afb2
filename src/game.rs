use crate::{
    common::MatchError,
    edge::{Edge, Orientation},
    grid::{Grid, GridState},
    player::{Player, PlayerId},
};

/// Lifecycle of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum MatchStatus {
    NotStarted,
    InProgress,
    Finished,
}

/// Result of a finished (or unfinished) match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Outcome {
    Winner(PlayerId),
    Tie,
    NotFinished,
}

/// What an accepted move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub edge: Edge,
    pub mover: PlayerId,
    /// Boxes closed by this move: 0, 1 or 2.
    pub boxes_completed: usize,
    /// The move filled the grid and ended the match.
    pub finished: bool,
}

impl MoveResult {
    /// The mover keeps the turn after closing at least one box.
    pub fn extra_turn(&self) -> bool {
        self.boxes_completed > 0
    }
}

/// Everything a renderer needs, detached from the live match.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Snapshot {
    pub grid: Option<GridState>,
    pub scores: [usize; 2],
    pub current: PlayerId,
    pub status: MatchStatus,
}

#[cfg(feature = "std")]
impl Snapshot {
    /// Compact binary encoding, stable for identical snapshots.
    pub fn encode(&self) -> anyhow::Result<std::vec::Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }
}

/// Turn order, scoring and win detection on top of a [`Grid`].
///
/// Players are registered once; each [`Match::new_game`] allocates a fresh
/// grid and resets both scores.
#[derive(Debug)]
pub struct Match {
    players: [Player; 2],
    grid: Option<Grid>,
    current: PlayerId,
    status: MatchStatus,
}

impl Match {
    /// Register two players. Names are trimmed and must differ.
    pub fn new(player1: &str, player2: &str) -> Result<Self, MatchError> {
        let p1 = Player::new(player1)?;
        let p2 = Player::new(player2)?;
        if p1 == p2 {
            return Err(MatchError::DuplicateNames);
        }
        Ok(Self {
            players: [p1, p2],
            grid: None,
            current: PlayerId::One,
            status: MatchStatus::NotStarted,
        })
    }

    /// Register two players and immediately start a `rows × cols` game.
    pub fn new_match(
        player1: &str,
        player2: &str,
        rows: usize,
        cols: usize,
    ) -> Result<Self, MatchError> {
        let mut m = Self::new(player1, player2)?;
        m.new_game(rows, cols)?;
        Ok(m)
    }

    /// Start a fresh game. On error the current game, if any, is kept.
    pub fn new_game(&mut self, rows: usize, cols: usize) -> Result<(), MatchError> {
        let grid = Grid::new(rows, cols)?;
        self.grid = Some(grid);
        for p in self.players.iter_mut() {
            p.reset_score();
        }
        self.current = PlayerId::One;
        self.status = MatchStatus::InProgress;
        log::info!(
            "new {}x{} game: {} vs {}",
            rows,
            cols,
            self.players[0].name(),
            self.players[1].name()
        );
        Ok(())
    }

    /// Claim an edge for the player whose turn it is.
    ///
    /// A rejected move changes nothing: the turn stays put and no score
    /// moves, so the caller can simply ask again.
    pub fn apply_move(
        &mut self,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Result<MoveResult, MatchError> {
        match self.status {
            MatchStatus::NotStarted => return Err(MatchError::NotStarted),
            MatchStatus::Finished => return Err(MatchError::AlreadyFinished),
            MatchStatus::InProgress => {}
        }
        let grid = self.grid.as_mut().ok_or(MatchError::NotStarted)?;
        let mover = self.current;
        let made = grid.claim(orientation, row, col, mover)?;

        if made > 0 {
            self.players[mover.index()].add_score(made);
        } else {
            self.current = mover.other();
        }
        debug_assert_eq!(self.players[mover.index()].score(), grid.owned_by(mover));

        let finished = grid.is_full();
        if finished {
            self.status = MatchStatus::Finished;
            log::info!(
                "game over: {} {} - {} {}",
                self.players[0].name(),
                self.players[0].score(),
                self.players[1].score(),
                self.players[1].name()
            );
        }
        Ok(MoveResult {
            edge: Edge::new(orientation, row, col),
            mover,
            boxes_completed: made,
            finished,
        })
    }

    /// Claim an [`Edge`] value. See [`Match::apply_move`].
    pub fn apply_edge(&mut self, edge: Edge) -> Result<MoveResult, MatchError> {
        self.apply_move(edge.orientation, edge.row, edge.col)
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status == MatchStatus::Finished
    }

    /// Seat whose turn it is.
    pub fn current(&self) -> PlayerId {
        self.current
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn score(&self, id: PlayerId) -> usize {
        self.player(id).score()
    }

    /// The live grid, absent before the first game.
    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    /// Strictly more boxes wins; equal counts tie.
    pub fn outcome(&self) -> Outcome {
        if self.status != MatchStatus::Finished {
            return Outcome::NotFinished;
        }
        let (s1, s2) = (self.players[0].score(), self.players[1].score());
        if s1 > s2 {
            Outcome::Winner(PlayerId::One)
        } else if s2 > s1 {
            Outcome::Winner(PlayerId::Two)
        } else {
            Outcome::Tie
        }
    }

    /// The winning player, `None` on a tie or while the game is running.
    pub fn winner(&self) -> Option<&Player> {
        match self.outcome() {
            Outcome::Winner(id) => Some(self.player(id)),
            Outcome::Tie | Outcome::NotFinished => None,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.grid.as_ref().map(Grid::state),
            scores: [self.players[0].score(), self.players[1].score()],
            current: self.current,
            status: self.status,
        }
    }
}
