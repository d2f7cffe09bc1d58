//! Column selection for Connect Four.

use crate::games::action::MoveError;
use serde::{Deserialize, Serialize};

/// A board column, guaranteed to lie in `0..Column::COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Column(usize);

impl Column {
    /// Number of columns on the board.
    pub const COUNT: usize = 7;

    /// Creates a column, rejecting indices past the right edge.
    pub fn new(index: usize) -> Result<Self, MoveError> {
        if index < Self::COUNT {
            Ok(Self(index))
        } else {
            Err(MoveError::ColumnOutOfRange(index))
        }
    }

    /// Zero-based column index.
    pub fn index(self) -> usize {
        self.0
    }

    /// Every column, left to right.
    pub fn all() -> impl Iterator<Item = Column> {
        (0..Self::COUNT).map(Column)
    }
}

impl TryFrom<usize> for Column {
    type Error = MoveError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl From<Column> for usize {
    fn from(column: Column) -> Self {
        column.0
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "column {}", self.0 + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert_eq!(Column::new(6).map(Column::index), Ok(6));
        assert_eq!(Column::new(7), Err(MoveError::ColumnOutOfRange(7)));
        assert_eq!(Column::all().count(), Column::COUNT);
    }

    #[test]
    fn test_display_is_one_based() {
        assert_eq!(Column::new(0).unwrap().to_string(), "column 1");
    }
}
