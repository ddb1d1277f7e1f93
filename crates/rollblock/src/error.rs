//! Error type shared by grid construction, start location, and path parsing.
//!
//! "No solution" is not an error: the search reports it as `None`.

use std::fmt;

/// Errors surfaced by the solver crate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RollError {
    /// A direction symbol outside `{U, D, L, R}`.
    InvalidDirection(char),
    /// The grid cannot be searched (empty, unknown symbol, no start marker).
    InvalidGrid { reason: String },
}

impl RollError {
    pub(crate) fn invalid_grid(reason: impl Into<String>) -> Self {
        Self::InvalidGrid {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for RollError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDirection(c) => {
                write!(f, "direction must be U, D, L, or R (got {c:?})")
            }
            Self::InvalidGrid { reason } => write!(f, "invalid grid: {reason}"),
        }
    }
}

impl std::error::Error for RollError {}
