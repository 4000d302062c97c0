//! Rule set abstraction for checkers variants.
//!
//! This module provides the [`RuleSet`] trait which abstracts over the
//! game-specific logic. The game driver is rule-agnostic in the sense that it
//! only reaches the board through a rule set.

mod standard;

pub use standard::StandardCheckers;

use crate::movegen::{Executed, MoveList};
use crate::Board;
use checkers_core::{Move, Player, Square};
use std::fmt;

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    /// Red wins: Black has no legal move.
    RedWins,
    /// Black wins: Red has no legal move.
    BlackWins,
    /// Draw. Standard rules never produce this result; there is no
    /// repetition or move-count rule.
    Draw,
}

impl GameResult {
    /// The result in which `player` wins.
    pub const fn win_for(player: Player) -> Self {
        match player {
            Player::Red => GameResult::RedWins,
            Player::Black => GameResult::BlackWins,
        }
    }

    /// Returns the winner, or `None` for a draw.
    pub const fn winner(self) -> Option<Player> {
        match self {
            GameResult::RedWins => Some(Player::Red),
            GameResult::BlackWins => Some(Player::Black),
            GameResult::Draw => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::RedWins => write!(f, "red_wins"),
            GameResult::BlackWins => write!(f, "black_wins"),
            GameResult::Draw => write!(f, "draw"),
        }
    }
}

/// Trait for implementing checkers variants.
///
/// # Example
///
/// ```
/// use checkers_core::Player;
/// use checkers_engine::rules::RuleSet;
/// use checkers_engine::StandardCheckers;
///
/// let board = StandardCheckers.initial_board();
/// let moves = StandardCheckers.generate_moves(&board, Player::Red);
/// assert_eq!(moves.len(), 7);
/// ```
pub trait RuleSet {
    /// Returns the initial board for this variant.
    fn initial_board(&self) -> Board;

    /// Generates all legal moves for `player`.
    fn generate_moves(&self, board: &Board, player: Player) -> MoveList;

    /// Generates the legal moves of the piece on `square`.
    fn moves_for(&self, board: &Board, square: Square, player: Player) -> MoveList;

    /// Returns true if the given move is legal for `player`.
    fn is_legal(&self, board: &Board, m: Move, player: Player) -> bool;

    /// Makes a move on the board, returning the new board.
    ///
    /// The move is not validated. Use [`is_legal`](RuleSet::is_legal) to
    /// check first, or use [`try_make_move`](RuleSet::try_make_move).
    fn make_move(&self, board: &Board, m: Move) -> Executed;

    /// Attempts to make a move, returning `None` if illegal.
    fn try_make_move(&self, board: &Board, m: Move, player: Player) -> Option<Executed> {
        if self.is_legal(board, m, player) {
            Some(self.make_move(board, m))
        } else {
            None
        }
    }

    /// Returns the game result if `to_move` cannot move, otherwise `None`.
    fn game_result(&self, board: &Board, to_move: Player) -> Option<GameResult> {
        if self.generate_moves(board, to_move).is_empty() {
            Some(GameResult::win_for(to_move.opposite()))
        } else {
            None
        }
    }

    /// Returns true if the game is over with `to_move` to play.
    fn is_game_over(&self, board: &Board, to_move: Player) -> bool {
        self.game_result(board, to_move).is_some()
    }
}
