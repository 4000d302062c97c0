//! Single-move legality.

use crate::Board;
use checkers_core::{Move, Player};

/// Returns true if `m` is a legal move for `player` on `board`.
///
/// Mandatory capture is a whole-board rule and is not checked here: a simple
/// step can be legal in isolation even while a capture is available
/// elsewhere. Use [`all_moves`](super::all_moves) for the filtered list.
pub fn is_legal(board: &Board, m: Move, player: Player) -> bool {
    // Both squares are on the board by construction of `Square`.
    let Some(piece) = board.piece_at(m.from()) else {
        return false;
    };
    if piece.player() != player {
        return false;
    }
    if !board.is_empty(m.to()) || !m.to().is_playable() {
        return false;
    }

    let row_delta = m.row_delta();
    let col_delta = m.col_delta().abs();
    let forward = row_delta.signum() == player.forward();

    match (row_delta.abs(), col_delta) {
        (1, 1) => piece.is_king() || forward,
        (2, 2) => {
            if !piece.is_king() && !forward {
                return false;
            }
            m.jumped()
                .and_then(|mid| board.piece_at(mid))
                .is_some_and(|captured| captured.player() != player)
        }
        _ => false,
    }
}
