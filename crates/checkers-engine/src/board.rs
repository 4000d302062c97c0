//! Checkers board representation.

use checkers_core::grid::{self, Grid, GridCell};
use checkers_core::{GridError, Piece, Player, Square};
use std::fmt;

/// An 8×8 checkers board.
///
/// A board is a snapshot: the rules engine never mutates a board it was
/// given, it returns a new one. Pieces are stored by value, so two boards
/// never share a piece.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

/// The standard starting position: Black on rows 0-2, Red on rows 5-7,
/// twelve men each on the dark squares.
pub const INITIAL_BOARD: Board = Board::initial();

impl Board {
    /// Creates an empty board.
    pub const fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// Creates the standard starting position.
    pub const fn initial() -> Self {
        let mut cells = [[None; 8]; 8];
        let mut row = 0;
        while row < 8 {
            let mut col = 0;
            while col < 8 {
                if let Some(square) = Square::new(row, col) {
                    if square.is_playable() {
                        if row < 3 {
                            cells[row as usize][col as usize] =
                                Some(Piece::new(Player::Black, square));
                        } else if row > 4 {
                            cells[row as usize][col as usize] =
                                Some(Piece::new(Player::Red, square));
                        }
                    }
                }
                col += 1;
            }
            row += 1;
        }
        Board { cells }
    }

    /// Parses a board from the text grid (see [`checkers_core::grid`]).
    ///
    /// Each piece is given an id derived from the square it is read on.
    pub fn from_grid(text: &str) -> Result<Self, GridError> {
        let parsed = grid::parse(text)?;
        let mut board = Board::empty();
        for square in Square::all() {
            if let Some(cell) = parsed[square.row() as usize][square.col() as usize] {
                let piece = Piece::new(cell.player, square);
                board.set(square, Some(if cell.king { piece.crowned() } else { piece }));
            }
        }
        Ok(board)
    }

    /// Serializes the board to the text grid used by the analysis prompt.
    pub fn to_grid(&self) -> String {
        let mut cells: Grid = [[None; 8]; 8];
        for (square, piece) in self.pieces() {
            cells[square.row() as usize][square.col() as usize] = Some(GridCell {
                player: piece.player(),
                king: piece.is_king(),
            });
        }
        grid::format(&cells)
    }

    /// Returns the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize]
    }

    /// Returns true if the square is empty.
    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Returns a copy of this board with `piece` placed on `square`.
    ///
    /// Intended for setting up positions. Pieces belong on playable squares.
    pub fn with_piece(mut self, square: Square, piece: Piece) -> Self {
        debug_assert!(square.is_playable(), "piece placed on light square {square}");
        self.set(square, Some(piece));
        self
    }

    /// Returns a copy of this board with `square` emptied.
    pub fn without_piece(mut self, square: Square) -> Self {
        self.set(square, None);
        self
    }

    #[inline]
    pub(crate) fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square.row() as usize][square.col() as usize] = piece;
    }

    #[inline]
    pub(crate) fn take(&mut self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize].take()
    }

    /// Iterates over occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Iterates over the squares holding `player`'s pieces.
    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.player() == player)
    }

    /// Counts `player`'s pieces.
    pub fn count(&self, player: Player) -> usize {
        self.pieces_of(player).count()
    }

    /// Counts `player`'s kings.
    pub fn kings(&self, player: Player) -> usize {
        self.pieces_of(player).filter(|(_, p)| p.is_king()).count()
    }

    /// Returns the board seen from the other side: every square rotated half
    /// a turn and every piece handed to the opposite player.
    pub fn rotated(&self) -> Board {
        let mut board = Board::empty();
        for (square, piece) in self.pieces() {
            let target = square.rotated();
            let swapped = Piece::new(piece.player().opposite(), piece.id().origin.rotated());
            board.set(target, Some(if piece.is_king() { swapped.crowned() } else { swapped }));
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_grid())
    }
}
