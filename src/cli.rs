#![cfg(feature = "std")]

//! Line-oriented prompt loop for two players sharing a terminal.

use std::io::{BufRead, Write};
use std::string::{String, ToString};

use crate::{
    config::{MAX_DIMENSION, MIN_DIMENSION},
    edge::{Edge, Orientation},
    game::{Match, Outcome},
    ui::MatchView,
    MatchError,
};

/// Parse a move written as `H r c` or `V r c` (letter case ignored).
pub fn parse_move(input: &str) -> Result<Edge, String> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    let [kind, row, col] = parts.as_slice() else {
        return Err(format!(
            "Expected 3 parts (e.g. H 1 2), got {}",
            parts.len()
        ));
    };
    let mut letters = kind.chars();
    let orientation = match (letters.next(), letters.next()) {
        (Some(ch), None) => Orientation::from_letter(ch),
        _ => None,
    }
    .ok_or_else(|| format!("Invalid edge type '{}' - must be H or V", kind))?;
    let row: usize = row
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number", row))?;
    let col: usize = col
        .parse()
        .map_err(|_| format!("Invalid column '{}' - must be a number", col))?;
    Ok(Edge::new(orientation, row, col))
}

/// Interactive session reading answers from `R` and writing prompts to `W`.
///
/// Names or a board size given up front skip the matching prompts. End of
/// input ends the session quietly.
pub struct Session<R, W> {
    input: R,
    output: W,
    names: Option<(String, String)>,
    size: Option<(usize, usize)>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            names: None,
            size: None,
        }
    }

    pub fn with_players(mut self, player1: &str, player2: &str) -> Self {
        self.names = Some((player1.to_string(), player2.to_string()));
        self
    }

    pub fn with_size(mut self, rows: usize, cols: usize) -> Self {
        self.size = Some((rows, cols));
        self
    }

    /// Give back the output sink, e.g. to inspect a transcript.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run games until the players decline another or input runs out.
    pub fn run(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "\n=== DOTS AND BOXES ===")?;
        let Some(mut game) = self.register_players()? else {
            return Ok(());
        };
        loop {
            let Some((rows, cols)) = self.board_size()? else {
                return Ok(());
            };
            game.new_game(rows, cols)?;
            writeln!(self.output, "\nGame started! Players take turns claiming edges.")?;
            writeln!(
                self.output,
                "Enter edges as 'H r c' for horizontal or 'V r c' for vertical."
            )?;
            writeln!(self.output, "Coordinates are 1-based as shown in the board display.\n")?;

            if !self.play(&mut game)? {
                return Ok(());
            }
            let again = self.prompt("Play another game? (y/n): ")?;
            if !again.is_some_and(|a| a.eq_ignore_ascii_case("y")) {
                writeln!(self.output, "Thanks for playing! Goodbye!")?;
                return Ok(());
            }
        }
    }

    fn register_players(&mut self) -> anyhow::Result<Option<Match>> {
        if let Some((p1, p2)) = self.names.take() {
            match Match::new(&p1, &p2) {
                Ok(game) => return Ok(Some(game)),
                Err(e) => writeln!(self.output, "{}.", e)?,
            }
        }
        let Some(p1) = self.read_name("Player 1 name: ")? else {
            return Ok(None);
        };
        loop {
            let Some(p2) = self.read_name("Player 2 name: ")? else {
                return Ok(None);
            };
            match Match::new(&p1, &p2) {
                Ok(game) => return Ok(Some(game)),
                Err(MatchError::DuplicateNames) => {
                    writeln!(self.output, "Players must have different names.")?
                }
                Err(e) => return Err(anyhow::anyhow!(e)),
            }
        }
    }

    fn read_name(&mut self, msg: &str) -> anyhow::Result<Option<String>> {
        loop {
            match self.prompt(msg)? {
                None => return Ok(None),
                Some(name) if name.is_empty() => {
                    writeln!(self.output, "Player name cannot be empty.")?
                }
                Some(name) => return Ok(Some(name)),
            }
        }
    }

    fn board_size(&mut self) -> anyhow::Result<Option<(usize, usize)>> {
        if let Some(size) = self.size {
            return Ok(Some(size));
        }
        let rows_msg = format!("Number of rows ({} - {}): ", MIN_DIMENSION, MAX_DIMENSION);
        let Some(rows) = self.read_in_range(&rows_msg)? else {
            return Ok(None);
        };
        let cols_msg = format!("Number of cols ({} - {}): ", MIN_DIMENSION, MAX_DIMENSION);
        let Some(cols) = self.read_in_range(&cols_msg)? else {
            return Ok(None);
        };
        Ok(Some((rows, cols)))
    }

    fn read_in_range(&mut self, msg: &str) -> anyhow::Result<Option<usize>> {
        loop {
            let Some(line) = self.prompt(msg)? else {
                return Ok(None);
            };
            match line.parse::<usize>() {
                Ok(v) if (MIN_DIMENSION..=MAX_DIMENSION).contains(&v) => return Ok(Some(v)),
                _ => writeln!(
                    self.output,
                    "Please enter an integer in [{}, {}].",
                    MIN_DIMENSION, MAX_DIMENSION
                )?,
            }
        }
    }

    /// Play one game to the end. Returns `false` if input ran out first.
    fn play(&mut self, game: &mut Match) -> anyhow::Result<bool> {
        loop {
            writeln!(self.output, "{}", MatchView::new(game))?;

            if game.is_finished() {
                match game.outcome() {
                    Outcome::Winner(id) => {
                        let winner = game.player(id);
                        writeln!(
                            self.output,
                            "Congratulations {}! You won with {} points!",
                            winner.name(),
                            winner.score()
                        )?;
                    }
                    Outcome::Tie | Outcome::NotFinished => writeln!(
                        self.output,
                        "It's a tie! Both players have {} points.",
                        game.players()[0].score()
                    )?,
                }
                return Ok(true);
            }

            let msg = format!(
                "{}, select an edge (H r c or V r c): ",
                game.current_player().name()
            );
            let Some(line) = self.prompt(&msg)? else {
                return Ok(false);
            };
            let edge = match parse_move(&line) {
                Ok(edge) => edge,
                Err(e) => {
                    log::warn!("unparsable move {:?}: {}", line, e);
                    writeln!(
                        self.output,
                        "Invalid format. Use 'H r c' for horizontal or 'V r c' for vertical edges."
                    )?;
                    continue;
                }
            };
            match game.apply_edge(edge) {
                Ok(res) if res.extra_turn() && !res.finished => writeln!(
                    self.output,
                    "{} completed {} box(es) and goes again.",
                    game.player(res.mover).name(),
                    res.boxes_completed
                )?,
                Ok(_) => {}
                Err(e) => {
                    log::warn!("rejected move {}: {}", edge, e);
                    writeln!(self.output, "Invalid move. {}.", e)?;
                }
            }
        }
    }

    /// Print `msg` and read one trimmed line; `None` at end of input.
    fn prompt(&mut self, msg: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{}", msg)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
