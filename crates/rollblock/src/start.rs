//! Initial block state from the grid's start marker.

use crate::board::Grid;
use crate::error::RollError;
use crate::geometry::BlockState;

/// Block standing upright on the first `'B'` cell (row-major scan):
/// cubes `(x, y, 0)` and `(x, y, -1)`.
pub fn locate(grid: &Grid) -> Result<BlockState, RollError> {
    grid.start()
        .map(|(x, y)| BlockState::standing(x, y))
        .ok_or_else(|| RollError::invalid_grid("no start marker 'B'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{sample_grid, Cell};
    use crate::geometry::Vec3;

    #[test]
    fn sample_start_is_upright_on_b() {
        let s = locate(&sample_grid()).unwrap();
        assert_eq!(s.cubes[0], Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(s.cubes[1], Vec3::new(1.0, 1.0, -1.0));
        assert!(s.is_standing());
    }

    #[test]
    fn first_marker_in_row_major_order_wins() {
        let g = Grid::parse("111\n11B\nB1X").unwrap();
        assert_eq!(locate(&g).unwrap(), BlockState::standing(2, 1));
    }

    #[test]
    fn missing_marker_is_rejected_at_construction() {
        let err = Grid::from_cells(vec![vec![Cell::Floor, Cell::Hole]]).unwrap_err();
        assert!(matches!(err, RollError::InvalidGrid { .. }));
    }
}
