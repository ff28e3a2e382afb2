use dots_and_boxes::prelude::*;
use dots_and_boxes::{DEFAULT_COLS, DEFAULT_ROWS};
use rand::{rngs::SmallRng, seq::IteratorRandom, SeedableRng};
use serde_json::json;

/// Self-play with uniformly random edges, printing a JSON summary.
fn main() -> anyhow::Result<()> {
    dots_and_boxes::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 4 {
        eprintln!("Usage: {} <seed> [rows] [cols]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let rows: usize = args.get(2).map(|s| s.parse()).transpose()?.unwrap_or(DEFAULT_ROWS);
    let cols: usize = args.get(3).map(|s| s.parse()).transpose()?.unwrap_or(DEFAULT_COLS);

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut game = Match::new_match("player1", "player2", rows, cols)
        .map_err(|e| anyhow::anyhow!(e))?;

    let mut moves = 0usize;
    while !game.is_finished() {
        let grid = game.grid().ok_or_else(|| anyhow::anyhow!("no grid"))?;
        let edge = grid
            .unclaimed_edges()
            .choose(&mut rng)
            .ok_or_else(|| anyhow::anyhow!("no open edge left on an unfinished grid"))?;
        game.apply_edge(edge).map_err(|e| anyhow::anyhow!(e))?;
        moves += 1;
    }

    let winner = match game.outcome() {
        Outcome::Winner(PlayerId::One) => Some("player1"),
        Outcome::Winner(PlayerId::Two) => Some("player2"),
        Outcome::Tie | Outcome::NotFinished => None,
    };
    let result = json!({
        "rows": rows,
        "cols": cols,
        "moves": moves,
        "scores": {
            "player1": game.score(PlayerId::One),
            "player2": game.score(PlayerId::Two),
        },
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
