//! Standard checkers rules implementation.

use super::RuleSet;
use crate::movegen::{self, Executed, MoveList};
use crate::Board;
use checkers_core::{Move, Player, Square};

/// Standard 8×8 checkers (English draughts).
///
/// - Men step one square diagonally forward and capture forward only
/// - Kings step and capture in all four diagonal directions
/// - Captures are mandatory; multi-jumps continue with the same piece
/// - A man reaching the far row is crowned
/// - A player with no legal move loses
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardCheckers;

impl RuleSet for StandardCheckers {
    fn initial_board(&self) -> Board {
        Board::initial()
    }

    fn generate_moves(&self, board: &Board, player: Player) -> MoveList {
        movegen::all_moves(board, player)
    }

    fn moves_for(&self, board: &Board, square: Square, player: Player) -> MoveList {
        movegen::moves_for(board, square, player)
    }

    fn is_legal(&self, board: &Board, m: Move, player: Player) -> bool {
        movegen::is_legal(board, m, player)
    }

    fn make_move(&self, board: &Board, m: Move) -> Executed {
        movegen::execute(board, m)
    }
}
