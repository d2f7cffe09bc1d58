//! Cursor movement for keyboard navigation.

use crate::games::Coord;
use crossterm::event::KeyCode;

/// Moves the cursor one cell with the arrow keys, staying on the board.
pub fn move_cursor(cursor: Coord, key: KeyCode, rows: usize, cols: usize) -> Coord {
    let Coord { row, col } = cursor;
    match key {
        KeyCode::Left => Coord::new(row, col.saturating_sub(1)),
        KeyCode::Right if col + 1 < cols => Coord::new(row, col + 1),
        KeyCode::Up => Coord::new(row.saturating_sub(1), col),
        KeyCode::Down if row + 1 < rows => Coord::new(row + 1, col),
        _ => cursor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_within_board() {
        let at = move_cursor(Coord::new(1, 1), KeyCode::Right, 3, 3);
        assert_eq!(at, Coord::new(1, 2));
        assert_eq!(move_cursor(at, KeyCode::Up, 3, 3), Coord::new(0, 2));
    }

    #[test]
    fn test_stops_at_edges() {
        assert_eq!(move_cursor(Coord::new(0, 0), KeyCode::Left, 3, 3), Coord::new(0, 0));
        assert_eq!(move_cursor(Coord::new(0, 0), KeyCode::Up, 3, 3), Coord::new(0, 0));
        assert_eq!(move_cursor(Coord::new(5, 6), KeyCode::Right, 6, 7), Coord::new(5, 6));
        assert_eq!(move_cursor(Coord::new(5, 6), KeyCode::Down, 6, 7), Coord::new(5, 6));
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(move_cursor(Coord::new(1, 1), KeyCode::Char('x'), 3, 3), Coord::new(1, 1));
    }
}
