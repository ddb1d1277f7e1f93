//! Step-by-step replay of a roll sequence against a grid.

use crate::board::Grid;
use crate::geometry::{roll, BlockState};

use super::types::{Path, VisitedSet};

/// Where a replayed path ends up. Steps are 1-based.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Replay {
    /// Lands in the hole on the last roll.
    ReachedHole { steps: usize },
    /// Roll `step` leaves the board or hits a blocked cell.
    FellOff { step: usize },
    /// Roll `step` returns to a state already on the path.
    Revisited { step: usize },
    /// Roll `step` is in the hole but more rolls follow.
    PassedHole { step: usize },
    /// All rolls valid, block still on the board outside the hole.
    Stranded { state: BlockState },
}

/// Replay `path` from `initial`, applying the same rules as the search.
pub fn replay(initial: &BlockState, path: &Path, grid: &Grid) -> Replay {
    let mut state = *initial;
    let mut visited = VisitedSet::with_root(state.key());
    for (i, &dir) in path.directions().iter().enumerate() {
        let step = i + 1;
        state = roll(&state, dir);
        if grid.is_out_of_bounds(&state) {
            return Replay::FellOff { step };
        }
        let key = state.key();
        if visited.contains(&key) {
            return Replay::Revisited { step };
        }
        if grid.is_at_hole(&state) {
            return if step == path.len() {
                Replay::ReachedHole { steps: step }
            } else {
                Replay::PassedHole { step }
            };
        }
        visited = visited.extended(key);
    }
    Replay::Stranded { state }
}
