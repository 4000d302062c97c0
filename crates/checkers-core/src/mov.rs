//! Move representation.

use crate::Square;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing move notation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("invalid move: expected 'row,col-row,col' or 'row,col x row,col', got '{0}'")]
    InvalidFormat(String),

    #[error("invalid square: {0}")]
    InvalidSquare(String),
}

/// A checkers move from one square to another.
///
/// A move is a value: it carries no piece and no board. The captured square of
/// a jump is not stored; it is derived from `from` and `to`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Returns the source square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Signed row displacement (`to.row - from.row`).
    #[inline]
    pub const fn row_delta(self) -> i8 {
        self.to.row() as i8 - self.from.row() as i8
    }

    /// Signed column displacement (`to.col - from.col`).
    #[inline]
    pub const fn col_delta(self) -> i8 {
        self.to.col() as i8 - self.from.col() as i8
    }

    /// Returns true if the move spans two rows, i.e. it is a capture.
    #[inline]
    pub const fn is_jump(self) -> bool {
        self.row_delta().abs() == 2
    }

    /// Returns the jumped-over square for a capture, `None` for a simple step.
    #[inline]
    pub const fn jumped(self) -> Option<Square> {
        if self.is_jump() {
            self.from.offset(self.row_delta() / 2, self.col_delta() / 2)
        } else {
            None
        }
    }

    /// Returns the move seen from the other side of the board.
    #[inline]
    pub const fn rotated(self) -> Self {
        Move {
            from: self.from.rotated(),
            to: self.to.rotated(),
        }
    }

    /// Returns the notation for this move: `5,4-4,3` for a step, `5,4x3,6` for a jump.
    pub fn to_notation(self) -> String {
        let sep = if self.is_jump() { 'x' } else { '-' };
        format!("{}{}{}", self.from, sep, self.to)
    }

    /// Parses a move from notation. Either separator is accepted.
    ///
    /// Note: parsing only checks that both squares are on the board. Legality
    /// is decided by the engine.
    pub fn from_notation(s: &str) -> Result<Self, MoveParseError> {
        let (from, to) = s
            .split_once(['-', 'x', 'X'])
            .ok_or_else(|| MoveParseError::InvalidFormat(s.to_string()))?;
        let from = Square::parse(from)
            .ok_or_else(|| MoveParseError::InvalidSquare(from.trim().to_string()))?;
        let to =
            Square::parse(to).ok_or_else(|| MoveParseError::InvalidSquare(to.trim().to_string()))?;
        Ok(Move::new(from, to))
    }

    /// A null move (used as placeholder, not a legal move).
    pub const NULL: Move = match Square::new(0, 0) {
        Some(sq) => Move { from: sq, to: sq },
        None => unreachable!(),
    };
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::from_notation(s)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_notation())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}
