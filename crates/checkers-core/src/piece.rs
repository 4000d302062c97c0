//! Checkers piece representation.

use crate::{GridCell, Player, Square};
use std::fmt;

/// Stable identity of a piece.
///
/// A piece is identified by its owner and the square it occupied when it was
/// placed on the board. The id never changes as the piece moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceId {
    pub player: Player,
    pub origin: Square,
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}",
            self.player,
            self.origin.row(),
            self.origin.col()
        )
    }
}

/// A piece on the board: a man, or a king once crowned.
///
/// Pieces are plain values. Every board snapshot owns its own copies, so
/// crowning a piece on one board never affects another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    id: PieceId,
    king: bool,
}

impl Piece {
    /// Creates an uncrowned piece placed at `origin`.
    #[inline]
    pub const fn new(player: Player, origin: Square) -> Self {
        Piece {
            id: PieceId { player, origin },
            king: false,
        }
    }

    #[inline]
    pub const fn id(self) -> PieceId {
        self.id
    }

    #[inline]
    pub const fn player(self) -> Player {
        self.id.player
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        self.king
    }

    /// Returns this piece crowned. Crowning a king is a no-op.
    #[inline]
    pub const fn crowned(self) -> Self {
        Piece {
            id: self.id,
            king: true,
        }
    }

    /// Returns the grid symbol: `R`, `RK`, `B` or `BK`.
    pub const fn symbol(self) -> &'static str {
        GridCell {
            player: self.id.player,
            king: self.king,
        }
        .symbol()
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn piece_id_display() {
        assert_eq!(Piece::new(Player::Red, sq(5, 0)).id().to_string(), "red-5-0");
        assert_eq!(
            Piece::new(Player::Black, sq(2, 3)).id().to_string(),
            "black-2-3"
        );
    }

    #[test]
    fn crowning_keeps_identity() {
        let man = Piece::new(Player::Black, sq(2, 1));
        let king = man.crowned();
        assert!(!man.is_king());
        assert!(king.is_king());
        assert_eq!(king.id(), man.id());
        assert_eq!(king.crowned(), king);
    }

    #[test]
    fn symbols() {
        let red = Piece::new(Player::Red, sq(5, 0));
        let black = Piece::new(Player::Black, sq(0, 1));
        assert_eq!(red.symbol(), "R");
        assert_eq!(red.crowned().symbol(), "RK");
        assert_eq!(black.symbol(), "B");
        assert_eq!(black.crowned().to_string(), "BK");
    }
}
