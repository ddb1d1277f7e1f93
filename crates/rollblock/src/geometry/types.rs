//! Block state, roll directions, and the canonical state signature.

use nalgebra::Vector3;
use std::fmt;

use crate::cfg::SNAP_EPS;
use crate::error::RollError;

pub type Vec3 = Vector3<f64>;

/// Named roll direction. Grid rows grow downwards, so `Down` is `+y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Exploration order used by the search; also the tie-break order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }

    /// The roll that undoes this one.
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = RollError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'U' => Ok(Direction::Up),
            'D' => Ok(Direction::Down),
            'L' => Ok(Direction::Left),
            'R' => Ok(Direction::Right),
            other => Err(RollError::InvalidDirection(other)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Two unit cubes making up the domino.
///
/// `x, y` are grid column/row, `z` is the layer: 0 rests on the floor, -1 is the
/// cube stacked on top. Cube order carries no meaning; equality goes through
/// [`StateKey`].
#[derive(Clone, Copy, Debug)]
pub struct BlockState {
    pub cubes: [Vec3; 2],
}

impl BlockState {
    #[inline]
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self { cubes: [a, b] }
    }

    /// Block standing upright on cell `(x, y)`.
    pub fn standing(x: usize, y: usize) -> Self {
        let (x, y) = (x as f64, y as f64);
        Self::new(Vec3::new(x, y, 0.0), Vec3::new(x, y, -1.0))
    }

    /// Grid cells under the cubes (one cell twice when standing).
    pub fn footprint(&self) -> [(i64, i64); 2] {
        self.cubes.map(|c| (snap(c.x), snap(c.y)))
    }

    #[inline]
    pub fn is_standing(&self) -> bool {
        let [a, b] = self.footprint();
        a == b
    }

    /// Centre of the footprint in the grid plane.
    pub fn centre(&self) -> (f64, f64) {
        let [a, b] = self.cubes;
        ((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
    }

    /// Order-independent signature used for visited-set membership.
    pub fn key(&self) -> StateKey {
        let mut cubes = self.cubes.map(|c| [snap(c.x), snap(c.y), snap(c.z)]);
        cubes.sort_unstable();
        StateKey(cubes)
    }
}

impl PartialEq for BlockState {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}
impl Eq for BlockState {}

/// Canonical signature: both cubes as integer triples, sorted lexicographically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateKey(pub [[i64; 3]; 2]);

#[inline]
pub(crate) fn snap(v: f64) -> i64 {
    let r = v.round();
    debug_assert!(
        (v - r).abs() < SNAP_EPS,
        "block coordinate {v} is not integral at rest"
    );
    r as i64
}
