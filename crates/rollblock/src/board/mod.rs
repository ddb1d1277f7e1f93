//! Puzzle board: grid parsing, cell lookup, and the two predicates the search
//! asks of every rolled state (off-board/blocked, fully in the hole).
//!
//! Symbols
//! - `'0'` blocked, `'1'` floor, `'X'` hole, `'B'` start (walkable floor).
//! - Rows need not share a length; cells past a row's end are off the board.

mod grid;
pub mod rand;

pub use grid::{Cell, Grid};

/// The 6×10 reference puzzle; its shortest solution is `RDDRRDR`.
pub const SAMPLE_GRID: &str = "\
1110000000
1B11110000
1111111110
0111111111
0000011X11
0000001110";

/// Parse [`SAMPLE_GRID`].
pub fn sample_grid() -> Grid {
    Grid::parse(SAMPLE_GRID).expect("sample grid is valid")
}
