//! Run scanning along grid lines.
//!
//! A run is a maximal contiguous sequence of same-seed cells. Win detection
//! for both games is built from these primitives.

use super::grid::Grid;
use super::types::{Cell, Coord, Seed};
use tracing::instrument;

/// The four line directions through a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, strum::Display)]
pub enum Direction {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Direction {
    /// Row/column step for one cell in the forward direction.
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }
}

/// Counts consecutive `seed` cells starting one step away from `from`.
fn count_toward(grid: &Grid, from: Coord, (d_row, d_col): (isize, isize), seed: Seed) -> usize {
    let mut count = 0;
    let mut at = from;
    while let Some(next) = at.offset(d_row, d_col) {
        if grid.get(next) != Some(Cell::Occupied(seed)) {
            break;
        }
        count += 1;
        at = next;
    }
    count
}

/// Length of the run of `seed` through `at` along `direction`.
///
/// Returns 0 when `at` does not hold `seed`.
pub fn run_length(grid: &Grid, at: Coord, direction: Direction, seed: Seed) -> usize {
    if grid.get(at) != Some(Cell::Occupied(seed)) {
        return 0;
    }
    let (d_row, d_col) = direction.step();
    1 + count_toward(grid, at, (d_row, d_col), seed)
        + count_toward(grid, at, (-d_row, -d_col), seed)
}

/// Longest run of `seed` through `at` over all four directions.
#[instrument(skip(grid))]
pub fn longest_run(grid: &Grid, at: Coord, seed: Seed) -> usize {
    <Direction as strum::IntoEnumIterator>::iter()
        .map(|direction| run_length(grid, at, direction, seed))
        .max()
        .unwrap_or(0)
}
