//! Board square representation.

use std::fmt;

/// A square on the 8×8 board, addressed by (row, col).
///
/// Row 0 is the top of the board (Black's home edge), row 7 the bottom
/// (Red's home edge). A `Square` is always on the grid: every constructor
/// rejects coordinates outside `0..8`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Board dimension.
    pub const SIZE: u8 = 8;

    /// Creates a square from row and column, or `None` if off the board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < Self::SIZE && col < Self::SIZE {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Creates a square from a row-major index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square {
                row: index / 8,
                col: index % 8,
            })
        } else {
            None
        }
    }

    /// Returns the row-major index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.row * Self::SIZE + self.col
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns true for the dark squares pieces may stand on: `(row + col)` odd.
    #[inline]
    pub const fn is_playable(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// Returns the square displaced by the given deltas, or `None` if that leaves the board.
    #[inline]
    pub const fn offset(self, row_delta: i8, col_delta: i8) -> Option<Self> {
        let (row, col) = match (
            (self.row as i8).checked_add(row_delta),
            (self.col as i8).checked_add(col_delta),
        ) {
            (Some(row), Some(col)) => (row, col),
            _ => return None,
        };
        if row < 0 || col < 0 {
            return None;
        }
        Self::new(row as u8, col as u8)
    }

    /// Returns the square seen from the other side of the board (`row ↔ 7 - row`,
    /// `col ↔ 7 - col`). Playable squares stay playable.
    #[inline]
    pub const fn rotated(self) -> Self {
        Square {
            row: Self::SIZE - 1 - self.row,
            col: Self::SIZE - 1 - self.col,
        }
    }

    /// Parses `"row,col"` (e.g. `"5,4"`).
    pub fn parse(s: &str) -> Option<Self> {
        let (row, col) = s.trim().split_once(',')?;
        let row = row.trim().parse().ok()?;
        let col = col.trim().parse().ok()?;
        Self::new(row, col)
    }

    /// Iterates over all 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).filter_map(Square::from_index)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({},{})", self.row, self.col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}
