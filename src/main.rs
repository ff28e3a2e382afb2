#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use dots_and_boxes::{dimensions_in_range, init_logging, Session, DEFAULT_COLS, DEFAULT_ROWS};

#[derive(Parser)]
#[command(author, version, about = "Two-player Dots and Boxes in the terminal", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Rows of boxes (2-9). Prompted for when neither size flag is given.
    #[arg(long)]
    rows: Option<usize>,
    /// Columns of boxes (2-9). Prompted for when neither size flag is given.
    #[arg(long)]
    cols: Option<usize>,
    #[arg(long, requires = "player2", help = "Name of the first player")]
    player1: Option<String>,
    #[arg(long, requires = "player1", help = "Name of the second player")]
    player2: Option<String>,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let stdin = std::io::stdin();
    let mut session = Session::new(stdin.lock(), std::io::stdout());

    if cli.rows.is_some() || cli.cols.is_some() {
        let rows = cli.rows.unwrap_or(DEFAULT_ROWS);
        let cols = cli.cols.unwrap_or(DEFAULT_COLS);
        if !dimensions_in_range(rows, cols) {
            anyhow::bail!(dots_and_boxes::GridError::InvalidDimensions { rows, cols });
        }
        session = session.with_size(rows, cols);
    }
    if let (Some(p1), Some(p2)) = (&cli.player1, &cli.player2) {
        session = session.with_players(p1, p2);
    }

    session.run()
}
