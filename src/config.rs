/// Smallest number of box rows or columns a grid may have.
pub const MIN_DIMENSION: usize = 2;
/// Largest number of box rows or columns a grid may have.
pub const MAX_DIMENSION: usize = 9;

pub const DEFAULT_ROWS: usize = 3;
pub const DEFAULT_COLS: usize = 3;

/// Environment variable read by `init_logging` for the log level.
pub const LOG_ENV_VAR: &str = "DOTS_LOG";

/// Returns `true` when `rows × cols` is a playable grid size.
pub const fn dimensions_in_range(rows: usize, cols: usize) -> bool {
    rows >= MIN_DIMENSION && rows <= MAX_DIMENSION && cols >= MIN_DIMENSION && cols <= MAX_DIMENSION
}
