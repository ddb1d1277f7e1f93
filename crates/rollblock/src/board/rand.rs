//! Random puzzle grids (Bernoulli floor + one start + one hole, replayable).
//!
//! Purpose
//! - Small deterministic sampler for property tests and benchmarks. Draws are
//!   addressed by a replay token `(seed, index)` so a failing grid can be
//!   regenerated from the two numbers alone.
//!
//! Model
//! - Each cell is floor with probability `floor_density`, blocked otherwise.
//! - With `ragged`, every row is cut to a random length in `[1, width]`.
//! - A start cell and a distinct hole cell are then placed uniformly among the
//!   remaining cells. Solvability is not guaranteed.

use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};

use super::grid::{Cell, Grid};
use crate::error::RollError;

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct GridCfg {
    pub width: usize,
    pub height: usize,
    /// Probability that a cell is floor. Clamped to [0, 1]; must be finite.
    pub floor_density: f64,
    /// Cut rows to random lengths.
    pub ragged: bool,
}

impl Default for GridCfg {
    fn default() -> Self {
        Self {
            width: 8,
            height: 6,
            floor_density: 0.7,
            ragged: false,
        }
    }
}

/// Replay token: identical tokens and configs give identical grids.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    fn rng(self) -> StdRng {
        // fold the index into the seed with a multiplicative hash so that
        // neighbouring indices land far apart
        let k = self
            .index
            .wrapping_add(1)
            .wrapping_mul(0x9e37_79b9_7f4a_7c15)
            .rotate_left(29)
            ^ self.seed;
        StdRng::seed_from_u64(k)
    }
}

/// Draw one grid.
pub fn draw_grid(cfg: GridCfg, tok: ReplayToken) -> Result<Grid, RollError> {
    if cfg.width == 0 || cfg.height == 0 {
        return Err(RollError::invalid_grid("sampler needs a non-empty shape"));
    }
    if !cfg.floor_density.is_finite() {
        return Err(RollError::invalid_grid(format!(
            "floor density must be finite, got {}",
            cfg.floor_density
        )));
    }
    let mut rng = tok.rng();
    let p = cfg.floor_density.clamp(0.0, 1.0);
    let mut rows: Vec<Vec<Cell>> = (0..cfg.height)
        .map(|_| {
            let len = if cfg.ragged {
                rng.gen_range(1..=cfg.width)
            } else {
                cfg.width
            };
            (0..len)
                .map(|_| {
                    if rng.gen_bool(p) {
                        Cell::Floor
                    } else {
                        Cell::Blocked
                    }
                })
                .collect()
        })
        .collect();

    let slots: Vec<(usize, usize)> = rows
        .iter()
        .enumerate()
        .flat_map(|(y, row)| (0..row.len()).map(move |x| (x, y)))
        .collect();
    if slots.len() < 2 {
        return Err(RollError::invalid_grid(
            "sampler needs at least two cells for start and hole",
        ));
    }
    let picks = sample(&mut rng, slots.len(), 2);
    let (sx, sy) = slots[picks.index(0)];
    let (hx, hy) = slots[picks.index(1)];
    rows[sy][sx] = Cell::Start;
    rows[hy][hx] = Cell::Hole;
    Grid::from_cells(rows)
}

/// Draw `count` grids with consecutive indices starting at `tok.index`
/// (wrapping past `u64::MAX`).
pub fn draw_grids(cfg: GridCfg, tok: ReplayToken, count: usize) -> Result<Vec<Grid>, RollError> {
    (0..count as u64)
        .map(|i| draw_grid(cfg, ReplayToken::new(tok.seed, tok.index.wrapping_add(i))))
        .collect()
}
