//! Data types for the roll search: paths, the path-local visited set, and the
//! search configuration.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::error::RollError;
use crate::geometry::{Direction, StateKey};

/// Ordered roll sequence, rendered as a string over `{U, D, L, R}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Path(pub Vec<Direction>);

impl Path {
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn directions(&self) -> &[Direction] {
        &self.0
    }

    /// `head ++ self`.
    pub fn prepend(mut self, head: Direction) -> Path {
        self.0.insert(0, head);
        self
    }
}

impl From<Vec<Direction>> for Path {
    fn from(dirs: Vec<Direction>) -> Self {
        Path(dirs)
    }
}

impl FromStr for Path {
    type Err = RollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .chars()
            .map(Direction::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map(Path)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.0 {
            write!(f, "{}", d.symbol())?;
        }
        Ok(())
    }
}

/// Signatures seen on the current root-to-node path.
///
/// Value semantics: extending returns a new set and leaves `self` untouched,
/// so sibling branches never observe each other's states.
#[derive(Clone, Debug, Default)]
pub struct VisitedSet {
    keys: HashSet<StateKey>,
}

impl VisitedSet {
    pub fn with_root(key: StateKey) -> Self {
        Self {
            keys: HashSet::from([key]),
        }
    }

    #[inline]
    pub fn contains(&self, key: &StateKey) -> bool {
        self.keys.contains(key)
    }

    /// Copy-on-extend.
    pub fn extended(&self, key: StateKey) -> Self {
        let mut keys = self.keys.clone();
        keys.insert(key);
        Self { keys }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Branch pruning on top of the per-path exhaustive search.
///
/// All modes return the same path; they differ only in how much of the tree
/// they visit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Prune {
    /// Visit every non-revisiting roll sequence. Exponential in grid size.
    Exhaustive,
    /// Skip branches that cannot beat the best complete path found so far.
    Incumbent,
    /// `Incumbent` plus a footprint-to-hole distance lower bound.
    #[default]
    DistanceBound,
}

impl FromStr for Prune {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exhaustive" => Ok(Prune::Exhaustive),
            "incumbent" => Ok(Prune::Incumbent),
            "distance" => Ok(Prune::DistanceBound),
            other => Err(format!(
                "unknown prune mode {other:?} (expected exhaustive, incumbent, or distance)"
            )),
        }
    }
}

/// Search configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchCfg {
    pub prune: Prune,
    /// Longest path length explored; `None` for no cap.
    pub max_depth: Option<usize>,
}

impl SearchCfg {
    pub fn exhaustive() -> Self {
        Self {
            prune: Prune::Exhaustive,
            max_depth: None,
        }
    }
}

/// Counters collected during one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes whose four rolls were evaluated.
    pub nodes: u64,
    /// Rolls rejected as off-board or blocked.
    pub out_of_bounds: u64,
    /// Rolls rejected because the state is already on the path.
    pub revisits: u64,
    /// Branches cut by the incumbent / distance bound or the depth cap.
    pub pruned: u64,
    /// Times a strictly shorter complete path was found.
    pub improvements: u64,
    /// Distinct states touched by the reachability sweep (pruning modes only).
    pub reachable: u64,
}

/// Search result: the shortest path (if any) plus counters.
#[derive(Clone, Debug, Default)]
pub struct Solution {
    pub path: Option<Path>,
    pub stats: SearchStats,
}
