//! Depth-first search over roll sequences with path-local visited sets.

use std::collections::{HashSet, VecDeque};

use crate::board::Grid;
use crate::cfg::MAX_ROLL_SHIFT;
use crate::error::RollError;
use crate::geometry::{roll, BlockState, Direction};
use crate::start::locate;

use super::types::{Path, Prune, SearchCfg, SearchStats, Solution, VisitedSet};

/// Shortest roll sequence from `initial` into the hole, with default pruning.
///
/// Directions are tried in the order U, D, L, R; among equally short paths the
/// first one in that order wins.
pub fn solve(initial: &BlockState, grid: &Grid) -> Option<Path> {
    solve_with_cfg(initial, grid, SearchCfg::default()).path
}

/// Solve with an explicit configuration and return the search counters too.
pub fn solve_with_cfg(initial: &BlockState, grid: &Grid, cfg: SearchCfg) -> Solution {
    DfsRunner::new(grid, cfg).solve(initial)
}

/// Convenience: locate the start marker and solve with defaults.
pub fn solve_grid(grid: &Grid) -> Result<Option<Path>, RollError> {
    let start = locate(grid)?;
    Ok(solve(&start, grid))
}

/// DFS runner carrying the grid, the incumbent, and counters.
struct DfsRunner<'a> {
    grid: &'a Grid,
    cfg: SearchCfg,
    holes: Vec<(f64, f64)>,
    /// Slack subtracted from the hole distance when a lying block can finish
    /// across two hole cells.
    hole_slack: f64,
    best: Option<usize>,
    stats: SearchStats,
}

impl<'a> DfsRunner<'a> {
    fn new(grid: &'a Grid, cfg: SearchCfg) -> Self {
        let holes: Vec<(f64, f64)> = grid
            .holes()
            .into_iter()
            .map(|(x, y)| (x as f64, y as f64))
            .collect();
        let hole_slack = if holes.len() > 1 { 0.5 } else { 0.0 };
        Self {
            grid,
            cfg,
            holes,
            hole_slack,
            best: None,
            stats: SearchStats::default(),
        }
    }

    fn solve(mut self, initial: &BlockState) -> Solution {
        // unsolvable grids never set an incumbent; settle them before the DFS
        if self.cfg.prune != Prune::Exhaustive && !self.hole_reachable(initial) {
            return Solution {
                path: None,
                stats: self.stats,
            };
        }
        let visited = VisitedSet::with_root(initial.key());
        let path = self.recur(initial, &visited, 0);
        Solution {
            path,
            stats: self.stats,
        }
    }

    /// Shortest sub-path from `state`, which sits `depth` rolls below the root.
    fn recur(&mut self, state: &BlockState, visited: &VisitedSet, depth: usize) -> Option<Path> {
        self.stats.nodes += 1;
        let mut shortest: Option<Path> = None;
        for dir in Direction::ALL {
            let next = roll(state, dir);
            if self.grid.is_out_of_bounds(&next) {
                self.stats.out_of_bounds += 1;
                continue;
            }
            let key = next.key();
            if visited.contains(&key) {
                self.stats.revisits += 1;
                continue;
            }
            let candidate = if self.grid.is_at_hole(&next) {
                if self.over_cap(depth + 1) {
                    self.stats.pruned += 1;
                    continue;
                }
                self.record(depth + 1);
                Some(Path(vec![dir]))
            } else {
                if self.cannot_improve(&next, depth + 1) {
                    self.stats.pruned += 1;
                    continue;
                }
                self.recur(&next, &visited.extended(key), depth + 1)
                    .map(|sub| sub.prepend(dir))
            };
            if let Some(path) = candidate {
                // strict: ties keep the earlier direction
                if shortest.as_ref().map_or(true, |s| path.len() < s.len()) {
                    shortest = Some(path);
                }
            }
        }
        shortest
    }

    /// Breadth-first sweep over the finite state space with one global seen
    /// set. Same rules as [`DfsRunner::recur`]: blocked and off-board states
    /// are dropped, hole states end a line. Honours `max_depth`.
    fn hole_reachable(&mut self, initial: &BlockState) -> bool {
        let mut seen = HashSet::from([initial.key()]);
        let mut frontier = VecDeque::from([(*initial, 0usize)]);
        while let Some((state, depth)) = frontier.pop_front() {
            if self.over_cap(depth + 1) {
                continue;
            }
            for dir in Direction::ALL {
                let next = roll(&state, dir);
                if self.grid.is_out_of_bounds(&next) || !seen.insert(next.key()) {
                    continue;
                }
                self.stats.reachable += 1;
                if self.grid.is_at_hole(&next) {
                    return true;
                }
                frontier.push_back((next, depth + 1));
            }
        }
        false
    }

    fn record(&mut self, total: usize) {
        if self.best.map_or(true, |b| total < b) {
            self.best = Some(total);
            self.stats.improvements += 1;
        }
    }

    #[inline]
    fn over_cap(&self, total: usize) -> bool {
        self.cfg.max_depth.is_some_and(|cap| total > cap)
    }

    /// Whether every completion through `next` (reached at `depth`) is too long.
    fn cannot_improve(&self, next: &BlockState, depth: usize) -> bool {
        // `next` is not in the hole, so at least one more roll is needed.
        let remaining = match self.cfg.prune {
            Prune::DistanceBound => self.lower_bound(next).max(1),
            Prune::Exhaustive | Prune::Incumbent => 1,
        };
        let min_total = depth.saturating_add(remaining);
        if self.over_cap(min_total) {
            return true;
        }
        match self.cfg.prune {
            Prune::Exhaustive => false,
            Prune::Incumbent | Prune::DistanceBound => self.best.is_some_and(|b| min_total >= b),
        }
    }

    /// Admissible roll count to the hole: Manhattan distance of the footprint
    /// centre over the largest per-roll shift.
    fn lower_bound(&self, state: &BlockState) -> usize {
        let (cx, cy) = state.centre();
        let dist = self
            .holes
            .iter()
            .map(|&(hx, hy)| (cx - hx).abs() + (cy - hy).abs())
            .fold(f64::INFINITY, f64::min);
        if !dist.is_finite() {
            return usize::MAX;
        }
        let dist = (dist - self.hole_slack).max(0.0);
        (dist / MAX_ROLL_SHIFT - 1e-9).ceil().max(0.0) as usize
    }
}
