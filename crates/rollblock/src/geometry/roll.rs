//! Quarter-turn transforms in homogeneous coordinates.

use nalgebra::{Matrix3, Matrix4, Vector4};

use super::types::{BlockState, Direction, Vec3};
use crate::cfg::SNAP_EPS;

/// Pivot offset for a roll, taken from the block's bounding extents.
///
/// `Down`/`Right` use the far corner `(max x + ½, max y + ½, ½)`; `Up`/`Left`
/// use the near corner `(min x − ½, min y − ½, ½)`. Only the component along
/// the roll axis and `z` enter the matrix.
pub fn pivot(state: &BlockState, dir: Direction) -> Vec3 {
    let [a, b] = state.cubes;
    match dir {
        Direction::Down | Direction::Right => {
            Vec3::new(a.x.max(b.x) + 0.5, a.y.max(b.y) + 0.5, 0.5)
        }
        Direction::Up | Direction::Left => Vec3::new(a.x.min(b.x) - 0.5, a.y.min(b.y) - 0.5, 0.5),
    }
}

/// Homogeneous transform for rolling in `dir` about the edge through `o`.
///
/// `Down`/`Up` rotate about the x axis, `Left`/`Right` about the y axis; each
/// pair is mutually inverse for a fixed footprint.
#[rustfmt::skip]
pub fn roll_matrix(dir: Direction, o: Vec3) -> Matrix4<f64> {
    match dir {
        Direction::Down => Matrix4::new(
            1.0, 0.0,  0.0, 0.0,
            0.0, 0.0, -1.0, o.y + o.z,
            0.0, 1.0,  0.0, o.z - o.y,
            0.0, 0.0,  0.0, 1.0,
        ),
        Direction::Up => Matrix4::new(
            1.0,  0.0, 0.0, 0.0,
            0.0,  0.0, 1.0, o.y - o.z,
            0.0, -1.0, 0.0, o.y + o.z,
            0.0,  0.0, 0.0, 1.0,
        ),
        Direction::Left => Matrix4::new(
             0.0, 0.0, 1.0, o.x - o.z,
             0.0, 1.0, 0.0, 0.0,
            -1.0, 0.0, 0.0, o.x + o.z,
             0.0, 0.0, 0.0, 1.0,
        ),
        Direction::Right => Matrix4::new(
            0.0, 0.0, -1.0, o.x + o.z,
            0.0, 1.0,  0.0, 0.0,
            1.0, 0.0,  0.0, o.z - o.x,
            0.0, 0.0,  0.0, 1.0,
        ),
    }
}

/// Rotation block of [`roll_matrix`]; independent of the pivot.
pub fn linear_part(dir: Direction) -> Matrix3<f64> {
    roll_matrix(dir, Vec3::zeros())
        .fixed_view::<3, 3>(0, 0)
        .into_owned()
}

/// Apply a homogeneous transform to a cube position: append 1, multiply, drop.
#[inline]
pub fn apply(m: &Matrix4<f64>, p: Vec3) -> Vec3 {
    let h = m * Vector4::new(p.x, p.y, p.z, 1.0);
    Vec3::new(snap_f(h.x), snap_f(h.y), snap_f(h.z))
}

/// Roll the block one quarter-turn in `dir`. Pure: the input is untouched.
pub fn roll(state: &BlockState, dir: Direction) -> BlockState {
    let m = roll_matrix(dir, pivot(state, dir));
    BlockState {
        cubes: state.cubes.map(|c| apply(&m, c)),
    }
}

/// Roll through a sequence of directions.
pub fn roll_all<I>(state: &BlockState, dirs: I) -> BlockState
where
    I: IntoIterator<Item = Direction>,
{
    dirs.into_iter().fold(*state, |s, d| roll(&s, d))
}

#[inline]
fn snap_f(v: f64) -> f64 {
    let r = v.round();
    if (v - r).abs() < SNAP_EPS {
        r
    } else {
        v
    }
}
