//! Curated internal API (UNSTABLE).
//!
//! Convenience surface for the CLI, benches, and examples. Breaking changes
//! are allowed.

// Geometry
pub use crate::geometry::{linear_part, pivot, roll, roll_all, roll_matrix, BlockState, Direction};
// Board
pub use crate::board::rand::{draw_grid, draw_grids, GridCfg, ReplayToken};
pub use crate::board::{sample_grid, Cell, Grid, SAMPLE_GRID};
// Search
pub use crate::search::{
    replay, solve, solve_grid, solve_with_cfg, Path, Prune, Replay, SearchCfg, SearchStats,
    Solution,
};
pub use crate::start::locate;
pub use crate::RollError;

/// Parse grid text and solve it with `cfg`.
pub fn solve_text(text: &str, cfg: SearchCfg) -> Result<Solution, RollError> {
    let grid = Grid::parse(text)?;
    let start = locate(&grid)?;
    Ok(solve_with_cfg(&start, &grid, cfg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solve_text_runs_the_whole_pipeline() {
        let sol = solve_text(SAMPLE_GRID, SearchCfg::default()).unwrap();
        assert_eq!(sol.path.map(|p| p.to_string()).as_deref(), Some("RDDRRDR"));
        assert!(sol.stats.nodes > 0);
    }

    #[test]
    fn solve_text_surfaces_grid_errors() {
        let err = solve_text("11\n1X", SearchCfg::default()).unwrap_err();
        assert!(err.to_string().starts_with("invalid grid"));
    }
}
