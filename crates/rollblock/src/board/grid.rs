//! Immutable puzzle grid and the validity/terminal checks used by the search.

use std::fmt;
use std::str::FromStr;

use crate::error::RollError;
use crate::geometry::BlockState;

/// Cell symbols: `'0'` blocked, `'1'` floor, `'X'` hole, `'B'` start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Blocked,
    Floor,
    Hole,
    Start,
}

impl Cell {
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Cell::Blocked => '0',
            Cell::Floor => '1',
            Cell::Hole => 'X',
            Cell::Start => 'B',
        }
    }

    /// Whether a cube may rest on this cell.
    #[inline]
    pub fn is_walkable(self) -> bool {
        !matches!(self, Cell::Blocked)
    }
}

impl TryFrom<char> for Cell {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '0' => Ok(Cell::Blocked),
            '1' => Ok(Cell::Floor),
            'X' => Ok(Cell::Hole),
            'B' => Ok(Cell::Start),
            other => Err(other),
        }
    }
}

/// Rows of cells, top to bottom. Rows may differ in length; anything past a
/// row's end is off the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Build from text rows. Each line keeps its exact column positions: only a
    /// trailing `'\r'` is stripped, and interior blank lines become empty
    /// rows. Trailing blank lines are dropped.
    ///
    /// Fails on an empty grid, an unknown symbol (whitespace included), or a
    /// missing start marker.
    pub fn from_rows<I, S>(rows: I) -> Result<Self, RollError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<S> = rows.into_iter().collect();
        let used = lines
            .iter()
            .rposition(|l| !strip_cr(l.as_ref()).is_empty())
            .map_or(0, |i| i + 1);
        let parsed = lines[..used]
            .iter()
            .enumerate()
            .map(|(y, line)| {
                strip_cr(line.as_ref())
                    .chars()
                    .enumerate()
                    .map(|(x, c)| {
                        Cell::try_from(c).map_err(|c| {
                            RollError::invalid_grid(format!(
                                "unknown symbol {c:?} at row {y}, column {x}"
                            ))
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_cells(parsed)
    }

    /// Build from already-decoded cells (same validation as [`Grid::from_rows`]).
    pub fn from_cells(rows: Vec<Vec<Cell>>) -> Result<Self, RollError> {
        if rows.iter().all(|r| r.is_empty()) {
            return Err(RollError::invalid_grid("grid has no cells"));
        }
        let grid = Self { rows };
        if grid.start().is_none() {
            return Err(RollError::invalid_grid("no start marker 'B'"));
        }
        Ok(grid)
    }

    /// Parse newline-separated rows.
    pub fn parse(text: &str) -> Result<Self, RollError> {
        Self::from_rows(text.lines())
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Cell at column `x`, row `y`; `None` when off the board.
    #[inline]
    pub fn cell(&self, x: i64, y: i64) -> Option<Cell> {
        let row = self.rows.get(usize::try_from(y).ok()?)?;
        row.get(usize::try_from(x).ok()?).copied()
    }

    /// First start marker in row-major order, as `(x, y)`.
    pub fn start(&self) -> Option<(usize, usize)> {
        self.find(Cell::Start).next()
    }

    /// All hole cells, as `(x, y)`.
    pub fn holes(&self) -> Vec<(usize, usize)> {
        self.find(Cell::Hole).collect()
    }

    fn find(&self, target: Cell) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(move |(y, row)| {
            row.iter()
                .enumerate()
                .filter(move |(_, c)| **c == target)
                .map(move |(x, _)| (x, y))
        })
    }

    /// True if any cube is off the board or over a blocked cell.
    pub fn is_out_of_bounds(&self, state: &BlockState) -> bool {
        state
            .footprint()
            .iter()
            .any(|&(x, y)| !self.cell(x, y).is_some_and(Cell::is_walkable))
    }

    /// True only if every cube is over a hole cell.
    pub fn is_at_hole(&self, state: &BlockState) -> bool {
        state
            .footprint()
            .iter()
            .all(|&(x, y)| self.cell(x, y) == Some(Cell::Hole))
    }
}

fn strip_cr(line: &str) -> &str {
    line.trim_end_matches('\r')
}

impl FromStr for Grid {
    type Err = RollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for c in row {
                write!(f, "{}", c.symbol())?;
            }
        }
        Ok(())
    }
}
