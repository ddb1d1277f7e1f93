//! Rolling geometry for a two-cube block.
//!
//! Purpose
//! - Describe the block as two unit cubes in 3D (grid column, grid row, layer)
//!   and compute how a quarter-turn about a bottom edge moves them.
//! - Express each roll as a 4×4 homogeneous matrix (rotation plus the
//!   translation that re-seats the block on the floor) so one matrix moves both
//!   cubes at once.
//!
//! Conventions
//! - `z = 0` rests on the floor and `z = -1` is the layer above it; at rest all
//!   coordinates are integral.
//! - Pivots sit on half-integers, so every transform is exact in `f64`.
//!
//! Code cross-refs: `search::dfs` (consumer), `board::Grid` (validity checks).

mod roll;
mod types;

pub use roll::{apply, linear_part, pivot, roll, roll_all, roll_matrix};
pub use types::{BlockState, Direction, StateKey, Vec3};

#[cfg(test)]
mod tests;
