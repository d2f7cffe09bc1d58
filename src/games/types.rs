//! Core domain types shared by both grid games.

use serde::{Deserialize, Serialize};

/// Player marker placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seed {
    /// Cross (moves first).
    Cross,
    /// Nought (moves second).
    Nought,
}

impl Seed {
    /// Returns the opposing seed.
    pub fn opponent(self) -> Self {
        match self {
            Seed::Cross => Seed::Nought,
            Seed::Nought => Seed::Cross,
        }
    }

    /// Single-character glyph used in text rendering.
    pub fn glyph(self) -> char {
        match self {
            Seed::Cross => 'X',
            Seed::Nought => 'O',
        }
    }

    /// Default display name.
    pub fn icon(self) -> &'static str {
        match self {
            Seed::Cross => "Snowy",
            Seed::Nought => "Stormy",
        }
    }
}

impl std::fmt::Display for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Content of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a seed.
    Occupied(Seed),
}

impl Cell {
    /// Returns the seed in this cell, if any.
    pub fn seed(self) -> Option<Seed> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(seed) => Some(seed),
        }
    }

    /// Glyph for text rendering, `.` when empty.
    pub fn glyph(self) -> char {
        self.seed().map_or('.', Seed::glyph)
    }
}

/// Row/column address on a grid. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("({row}, {col})")]
pub struct Coord {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Offsets the coordinate by a signed step, `None` if it would go negative.
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        Some(Self { row, col })
    }
}

/// Display names for the two seeds, used in status messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerNames {
    /// Name shown for [`Seed::Cross`].
    #[serde(default = "default_cross")]
    pub cross: String,
    /// Name shown for [`Seed::Nought`].
    #[serde(default = "default_nought")]
    pub nought: String,
}

fn default_cross() -> String {
    Seed::Cross.icon().to_string()
}

fn default_nought() -> String {
    Seed::Nought.icon().to_string()
}

impl PlayerNames {
    /// Returns the display name of a seed.
    pub fn name(&self, seed: Seed) -> &str {
        match seed {
            Seed::Cross => &self.cross,
            Seed::Nought => &self.nought,
        }
    }
}

impl Default for PlayerNames {
    fn default() -> Self {
        Self {
            cross: default_cross(),
            nought: default_nought(),
        }
    }
}
