//! Shortest roll sequence by exhaustive depth-first search.
//!
//! Purpose
//! - From a start state, try the four rolls in the fixed order U, D, L, R,
//!   drop rolls that leave the board or revisit a state on the current path,
//!   finish on rolls that land in the hole, and recurse on the rest. Each node
//!   keeps the strictly shortest candidate, so ties resolve to the earliest
//!   direction.
//!
//! Visited states
//! - Tracked per root-to-node path, not globally: every branch receives its own
//!   copy of the set. Identical states reached through different branches are
//!   explored independently. This keeps the reported path identical to the
//!   plain per-path search, but costs exponential time on open grids.
//!
//! Pruning
//! - `Prune::Exhaustive` is the plain per-path search. `Incumbent` and
//!   `DistanceBound` (default) cut only branches that cannot yield a strictly
//!   shorter path than one already found, so the result is unchanged.

mod dfs;
mod replay;
mod types;

pub use dfs::{solve, solve_grid, solve_with_cfg};
pub use replay::{replay, Replay};
pub use types::{Path, Prune, SearchCfg, SearchStats, Solution, VisitedSet};
