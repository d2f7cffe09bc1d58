//! Fixed-size board storage.

use super::action::MoveError;
use super::types::{Cell, Coord};
use serde::{Deserialize, Serialize};

/// Rectangular board of cells in row-major order.
///
/// Dimensions are fixed at construction. The grid knows nothing about
/// rules; it only stores cells and checks bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an empty grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Checks whether a coordinate lies on the grid.
    pub fn contains(&self, at: Coord) -> bool {
        at.row < self.rows && at.col < self.cols
    }

    fn index(&self, at: Coord) -> Option<usize> {
        self.contains(at).then_some(at.row * self.cols + at.col)
    }

    /// Gets the cell at a coordinate, `None` when out of bounds.
    pub fn get(&self, at: Coord) -> Option<Cell> {
        self.index(at).map(|i| self.cells[i])
    }

    /// Sets the cell at a coordinate.
    pub fn set(&mut self, at: Coord, cell: Cell) -> Result<(), MoveError> {
        let i = self.index(at).ok_or(MoveError::OutOfBounds {
            row: at.row,
            col: at.col,
        })?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Checks if an in-bounds cell is empty.
    pub fn is_empty(&self, at: Coord) -> bool {
        matches!(self.get(at), Some(Cell::Empty))
    }

    /// Checks if no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Counts occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Empties every cell.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Iterates over one row, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Cell> + '_ {
        let start = (row * self.cols).min(self.cells.len());
        let end = ((row + 1) * self.cols).min(self.cells.len());
        self.cells[start..end].iter().copied()
    }

    /// Iterates over every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Coord::new(row, col)))
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            let line: String = self.row(row).map(Cell::glyph).collect();
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::types::Seed;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(6, 7);
        assert_eq!(grid.occupied(), 0);
        assert!(grid.coords().all(|at| grid.is_empty(at)));
        assert_eq!(grid.coords().count(), 42);
    }

    #[test]
    fn test_bounds() {
        let mut grid = Grid::new(3, 3);
        assert_eq!(grid.get(Coord::new(3, 0)), None);
        assert!(!grid.is_empty(Coord::new(0, 3)));
        assert_eq!(
            grid.set(Coord::new(0, 3), Cell::Occupied(Seed::Cross)),
            Err(MoveError::OutOfBounds { row: 0, col: 3 })
        );
    }

    #[test]
    fn test_full_and_clear() {
        let mut grid = Grid::new(2, 2);
        for at in grid.coords().collect::<Vec<_>>() {
            grid.set(at, Cell::Occupied(Seed::Nought)).unwrap();
        }
        assert!(grid.is_full());
        assert_eq!(grid.occupied(), 4);

        grid.clear();
        assert!(!grid.is_full());
        assert_eq!(grid.occupied(), 0);
    }

    #[test]
    fn test_display() {
        let mut grid = Grid::new(2, 3);
        grid.set(Coord::new(0, 0), Cell::Occupied(Seed::Cross)).unwrap();
        grid.set(Coord::new(1, 2), Cell::Occupied(Seed::Nought)).unwrap();
        assert_eq!(grid.to_string(), "X..\n..O");
    }
}
