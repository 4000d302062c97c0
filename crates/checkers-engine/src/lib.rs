//! Checkers rules engine.
//!
//! This crate provides:
//! - [`Board`] - immutable 8×8 board snapshot
//! - [`GameState`] - turn, selection and multi-jump state machine
//! - [`RuleSet`] - trait for implementing checkers variants
//! - Move generation, validation and execution
//!
//! # Architecture
//!
//! Every operation is pure: moves are applied to a board and a new board is
//! returned. [`GameState`] layers turn handling on top, so a whole game can be
//! replayed or branched by keeping old states around.
//!
//! # Example
//!
//! ```
//! use checkers_core::{Move, Player};
//! use checkers_engine::rules::RuleSet;
//! use checkers_engine::{GameState, StandardCheckers};
//!
//! // Using the rules directly (stateless)
//! let board = StandardCheckers.initial_board();
//! let moves = StandardCheckers.generate_moves(&board, Player::Red);
//! assert_eq!(moves.len(), 7);
//!
//! // Using GameState for turn management
//! let game = GameState::new();
//! let m: Move = "5,2-4,3".parse().unwrap();
//! let game = game.apply_move(m).unwrap();
//! assert_eq!(game.to_move(), Player::Black);
//! ```

mod board;
mod game;
pub mod movegen;
pub mod rules;

pub use board::{Board, INITIAL_BOARD};
pub use game::{GameError, GameState, Phase};
pub use movegen::{
    all_moves, captures_for, execute, is_legal, moves_for, try_execute, Executed, MoveError,
    MoveList,
};
pub use rules::{GameResult, RuleSet, StandardCheckers};
