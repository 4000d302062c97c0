//! Core types for checkers.
//!
//! This crate provides the fundamental types used across the checkers engine:
//! - [`Player`] for the two sides
//! - [`Piece`] and [`PieceId`] for piece identity and king status
//! - [`Square`] for board coordinates
//! - [`Move`] for move representation and notation
//! - Board grid notation parsing and serialization

pub mod grid;
mod mov;
mod piece;
mod player;
mod square;

pub use grid::{GridCell, GridError};
pub use mov::{Move, MoveParseError};
pub use piece::{Piece, PieceId};
pub use player::Player;
pub use square::Square;
