#![cfg(feature = "std")]

//! Text rendering of a match: dots, claimed edges, box owners and scores.

use std::fmt;
use std::string::String;

use crate::{
    edge::Orientation,
    game::{Match, MatchStatus},
    grid::Grid,
    player::PlayerId,
};

/// Display adapter drawing a [`Match`] as text.
pub struct MatchView<'a> {
    game: &'a Match,
}

impl<'a> MatchView<'a> {
    pub fn new(game: &'a Match) -> Self {
        Self { game }
    }

    fn mark(&self, id: PlayerId) -> char {
        self.game
            .player(id)
            .initials()
            .chars()
            .next()
            .unwrap_or('?')
    }

    fn fmt_grid(&self, f: &mut fmt::Formatter<'_>, grid: &Grid) -> fmt::Result {
        let (m, n) = (grid.rows(), grid.cols());
        let claimed = |o, r, c| grid.is_claimed(o, r, c).unwrap_or(false);

        writeln!(f, "   Dots & Boxes {}x{}", m, n)?;
        writeln!(f, "   Input: H r c  (1<=r<={}, 1<=c<={})", m + 1, n)?;
        writeln!(f, "          V r c  (1<=r<={}, 1<=c<={})", m, n + 1)?;
        writeln!(f)?;

        for r in 1..=m + 1 {
            write!(f, "   ")?;
            for c in 1..=n {
                let line = if claimed(Orientation::Horizontal, r, c) {
                    "---"
                } else {
                    "   "
                };
                write!(f, "+{}", line)?;
            }
            writeln!(f, "+")?;

            if r <= m {
                write!(f, "   ")?;
                for c in 1..=n + 1 {
                    let wall = if claimed(Orientation::Vertical, r, c) {
                        '|'
                    } else {
                        ' '
                    };
                    write!(f, "{}", wall)?;
                    if c <= n {
                        let owner = grid
                            .box_owner(r - 1, c - 1)
                            .map(|id| self.mark(id))
                            .unwrap_or(' ');
                        write!(f, " {} ", owner)?;
                    }
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for MatchView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(grid) = self.game.grid() else {
            return writeln!(f, "(no board)");
        };
        self.fmt_grid(f, grid)?;

        let [p1, p2] = self.game.players();
        writeln!(f)?;
        writeln!(
            f,
            "Scores: {}: {}, {}: {}",
            p1.name(),
            p1.score(),
            p2.name(),
            p2.score()
        )?;
        if self.game.status() == MatchStatus::InProgress {
            writeln!(f, "Current player: {}", self.game.current_player().name())?;
        }
        Ok(())
    }
}

/// Render the match as a multi-line string.
pub fn render(game: &Match) -> String {
    MatchView::new(game).to_string()
}
