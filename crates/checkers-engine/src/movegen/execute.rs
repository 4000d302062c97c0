//! Move execution.

use super::is_legal;
use crate::Board;
use checkers_core::{Move, Player};
use thiserror::Error;

/// Errors from the checked move executor.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum MoveError {
    /// The move is not legal for the player on the board.
    #[error("illegal move: {0}")]
    Illegal(Move),
}

/// The result of executing a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Executed {
    /// The board after the move.
    pub board: Board,
    /// True if the move captured a piece.
    pub jump_taken: bool,
    /// True if the moving piece was crowned by this move.
    pub promoted: bool,
}

/// Applies `m` to `board` and returns the resulting board.
///
/// The move must already be legal (see [`is_legal`]); it is not re-validated.
/// The input board is left untouched.
pub fn execute(board: &Board, m: Move) -> Executed {
    let mut next = board.clone();
    let piece = next.take(m.from());
    debug_assert!(piece.is_some(), "executing {m} from an empty square");

    let jumped = m.jumped();
    if let Some(mid) = jumped {
        next.set(mid, None);
    }

    let mut promoted = false;
    let piece = piece.map(|p| {
        if m.to().row() == p.player().promotion_row() && !p.is_king() {
            promoted = true;
            p.crowned()
        } else {
            p
        }
    });
    next.set(m.to(), piece);

    Executed {
        board: next,
        jump_taken: jumped.is_some(),
        promoted,
    }
}

/// Validates `m` for `player` and executes it.
pub fn try_execute(board: &Board, m: Move, player: Player) -> Result<Executed, MoveError> {
    if !is_legal(board, m, player) {
        return Err(MoveError::Illegal(m));
    }
    Ok(execute(board, m))
}
