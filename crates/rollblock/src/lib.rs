//! Rolling-block puzzle solver.
//!
//! A two-cube block stands on a grid of floor, blocked, and hole cells. Each
//! move tips it over one bottom edge (a "roll"). The crate finds the shortest
//! roll sequence that lands both cubes over hole cells.
//!
//! Layout
//! - `geometry`: block state and the 4×4 homogeneous roll transforms.
//! - `board`: grid parsing and the off-board / in-hole predicates.
//! - `start`: initial state from the `'B'` marker.
//! - `search`: per-path exhaustive DFS, replay of direction strings.
//!
//! API Policy
//! - The crate is consumed by the workspace CLI only; there is no stable
//!   public API and breaking changes are fine when they simplify things.

pub mod api;
pub mod board;
mod cfg;
mod error;
pub mod geometry;
pub mod search;
pub mod start;

pub use error::RollError;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::board::{sample_grid, Cell, Grid, SAMPLE_GRID};
    pub use crate::geometry::{roll, BlockState, Direction};
    pub use crate::search::{replay, solve, solve_grid, Path, Replay, SearchCfg};
    pub use crate::start::locate;
    pub use crate::RollError;
}
