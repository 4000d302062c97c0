//! Move generation.
//!
//! This module provides the three rule primitives the game is built from:
//! - [`is_legal`] decides whether a single move is legal for a player
//! - [`moves_for`] and [`all_moves`] enumerate legal moves, with
//!   mandatory capture applied to the whole-board list
//! - [`execute`] applies a validated move and returns the new board

mod execute;
mod legality;
pub mod perft;

use crate::Board;
use checkers_core::{Move, Player, Square};

pub use execute::{execute, try_execute, Executed, MoveError};
pub use legality::is_legal;

/// Row deltas considered for a red man, in generation order.
const RED_MAN_ROWS: [i8; 2] = [-1, -2];
/// Row deltas considered for a black man, in generation order.
const BLACK_MAN_ROWS: [i8; 2] = [1, 2];
/// Row deltas considered for a king, in generation order.
const KING_ROWS: [i8; 4] = [-2, -1, 1, 2];
/// Column deltas paired with each row delta of the same magnitude.
const COL_DELTAS: [i8; 4] = [-2, -1, 1, 2];

/// A list of moves with a fixed maximum capacity.
///
/// A side has at most 12 pieces with at most 8 candidate moves each, so we
/// use a fixed-size array to avoid heap allocations during move generation.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; Self::MAX_MOVES],
    len: usize,
}

impl MoveList {
    /// Capacity of the list.
    pub const MAX_MOVES: usize = 128;

    /// Creates an empty move list.
    #[inline]
    pub const fn new() -> Self {
        MoveList {
            moves: [Move::NULL; Self::MAX_MOVES],
            len: 0,
        }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: Move) {
        debug_assert!(self.len < Self::MAX_MOVES);
        self.moves[self.len] = m;
        self.len += 1;
    }

    /// Appends every move of `other`.
    pub fn extend_from(&mut self, other: &MoveList) {
        for &m in other {
            self.push(m);
        }
    }

    /// Returns the number of moves.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    /// Returns an iterator over the moves.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    /// Returns true if the list contains the move.
    #[inline]
    pub fn contains(&self, m: &Move) -> bool {
        self.as_slice().contains(m)
    }

    /// Returns true if any move in the list is a capture.
    #[inline]
    pub fn has_jump(&self) -> bool {
        self.iter().any(|m| m.is_jump())
    }

    /// Clears the move list.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Retains only moves for which the predicate returns true.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&Move) -> bool,
    {
        let mut write = 0;
        for read in 0..self.len {
            if f(&self.moves[read]) {
                self.moves[write] = self.moves[read];
                write += 1;
            }
        }
        self.len = write;
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for MoveList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for MoveList {}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < self.len);
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Generates the legal moves of the piece on `square`.
///
/// Returns an empty list if the square is empty or holds an opponent piece.
/// Mandatory capture is not applied here; see [`all_moves`].
pub fn moves_for(board: &Board, square: Square, player: Player) -> MoveList {
    let mut moves = MoveList::new();
    let Some(piece) = board.piece_at(square) else {
        return moves;
    };
    if piece.player() != player {
        return moves;
    }

    let rows: &[i8] = if piece.is_king() {
        &KING_ROWS
    } else {
        match player {
            Player::Red => &RED_MAN_ROWS,
            Player::Black => &BLACK_MAN_ROWS,
        }
    };

    for &dr in rows {
        for &dc in COL_DELTAS.iter().filter(|dc| dc.abs() == dr.abs()) {
            // Off-board targets are never built.
            let Some(target) = square.offset(dr, dc) else {
                continue;
            };
            let m = Move::new(square, target);
            if is_legal(board, m, player) {
                moves.push(m);
            }
        }
    }

    moves
}

/// Generates the legal capture moves of the piece on `square`.
///
/// Used to decide whether a piece that has just jumped must keep jumping.
pub fn captures_for(board: &Board, square: Square, player: Player) -> MoveList {
    let mut moves = moves_for(board, square, player);
    moves.retain(|m| m.is_jump());
    moves
}

/// Generates all legal moves for `player`.
///
/// Pieces are visited in row-major order. If any capture is available only
/// captures are returned (mandatory capture); otherwise every simple step is.
pub fn all_moves(board: &Board, player: Player) -> MoveList {
    let mut moves = MoveList::new();
    for (square, _) in board.pieces_of(player) {
        moves.extend_from(&moves_for(board, square, player));
    }

    if moves.has_jump() {
        moves.retain(|m| m.is_jump());
    }
    moves
}
