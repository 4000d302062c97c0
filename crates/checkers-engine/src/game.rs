//! Game state machine.
//!
//! [`GameState`] holds everything a front-end needs to run a game: the
//! board, the player to move, the current selection or multi-jump in
//! progress, and the result. It is a value. Every transition returns a new
//! state, so the machine can be driven and tested without any UI.
//!
//! ```text
//!   Selecting ──click own piece──▶ PieceSelected ──click target──▶ (apply_move)
//!       ▲                               │                            │
//!       └──────click elsewhere──────────┘                            │
//!                                                                    ▼
//!   Continuing ◀── jump with further captures ──┬── turn passes ──▶ Selecting
//!       │                                       │                     or Over
//!       └────── click capture target ───────────┘
//! ```

use crate::movegen::{captures_for, MoveList};
use crate::rules::{GameResult, RuleSet, StandardCheckers};
use crate::Board;
use checkers_core::{Move, Player, Square};
use thiserror::Error;

/// Error type for game operations.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum GameError {
    /// The move is not legal in the current state.
    #[error("illegal move: {0}")]
    IllegalMove(Move),
    /// The game has already ended.
    #[error("game has already ended")]
    GameAlreadyOver,
}

/// Where the game is within a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the player to pick a piece.
    Selecting,
    /// A piece is selected; `moves` are its legal moves.
    PieceSelected { square: Square, moves: MoveList },
    /// The piece on `square` has jumped and must keep capturing with `moves`.
    Continuing { square: Square, moves: MoveList },
    /// The game is over.
    Over(GameResult),
}

/// A checkers game at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    to_move: Player,
    phase: Phase,
    ply: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a new game from the standard starting board, Red to move.
    pub fn new() -> Self {
        Self::from_board(StandardCheckers.initial_board(), Player::Red)
    }

    /// Creates a game from any board with `to_move` to play.
    ///
    /// The result is computed immediately, so a board on which `to_move` has
    /// no legal move starts out finished.
    pub fn from_board(board: Board, to_move: Player) -> Self {
        Self::turn_start(board, to_move, 0)
    }

    fn turn_start(board: Board, to_move: Player, ply: u32) -> Self {
        let phase = match StandardCheckers.game_result(&board, to_move) {
            Some(result) => Phase::Over(result),
            None => Phase::Selecting,
        };
        GameState {
            board,
            to_move,
            phase,
            ply,
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the current phase.
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Returns the number of moves applied so far (each jump of a
    /// multi-jump counts once).
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// Returns the game result if the game is over.
    pub fn result(&self) -> Option<GameResult> {
        match self.phase {
            Phase::Over(result) => Some(result),
            _ => None,
        }
    }

    /// Returns true if the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.result().is_some()
    }

    /// Returns true while a multi-jump is in progress.
    pub fn is_continuing(&self) -> bool {
        matches!(self.phase, Phase::Continuing { .. })
    }

    /// Returns the selected square, if any.
    pub fn selected(&self) -> Option<Square> {
        match self.phase {
            Phase::PieceSelected { square, .. } | Phase::Continuing { square, .. } => Some(square),
            _ => None,
        }
    }

    /// Returns the moves available from the selected square.
    pub fn highlighted(&self) -> &[Move] {
        match &self.phase {
            Phase::PieceSelected { moves, .. } | Phase::Continuing { moves, .. } => {
                moves.as_slice()
            }
            _ => &[],
        }
    }

    /// Returns the number of pieces `player` has on the board.
    pub fn piece_count(&self, player: Player) -> usize {
        self.board.count(player)
    }

    /// Returns every move the player to move may make now.
    ///
    /// During a multi-jump only the jumping piece's captures are allowed.
    pub fn legal_moves(&self) -> MoveList {
        match &self.phase {
            Phase::Over(_) => MoveList::new(),
            Phase::Continuing { moves, .. } => moves.clone(),
            Phase::Selecting | Phase::PieceSelected { .. } => {
                StandardCheckers.generate_moves(&self.board, self.to_move)
            }
        }
    }

    /// Applies a move and returns the next state.
    ///
    /// If the move was a capture and the same piece can capture again, the
    /// same player stays to move in [`Phase::Continuing`]. Otherwise the turn
    /// passes and the result is recomputed for the new player.
    pub fn apply_move(&self, m: Move) -> Result<GameState, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameAlreadyOver);
        }
        if !self.legal_moves().contains(&m) {
            return Err(GameError::IllegalMove(m));
        }

        let executed = StandardCheckers.make_move(&self.board, m);
        let ply = self.ply + 1;

        if executed.jump_taken {
            let further = captures_for(&executed.board, m.to(), self.to_move);
            if !further.is_empty() {
                return Ok(GameState {
                    board: executed.board,
                    to_move: self.to_move,
                    phase: Phase::Continuing {
                        square: m.to(),
                        moves: further,
                    },
                    ply,
                });
            }
        }

        Ok(Self::turn_start(executed.board, self.to_move.opposite(), ply))
    }

    /// Handles a click on `square` and returns the next state.
    ///
    /// - Clicking one of the mover's pieces selects it.
    /// - Clicking a destination of the selected piece plays that move.
    /// - Clicking anywhere else clears the selection.
    ///
    /// During a multi-jump the jumping piece stays selected: only its capture
    /// destinations react. After the game ends clicks are ignored.
    pub fn click(&self, square: Square) -> GameState {
        match &self.phase {
            Phase::Over(_) => self.clone(),
            Phase::Continuing { moves, .. } => match moves.iter().find(|m| m.to() == square) {
                Some(&m) => self.apply_move(m).unwrap_or_else(|_| self.clone()),
                None => self.clone(),
            },
            Phase::Selecting | Phase::PieceSelected { .. } => {
                let own_piece = self
                    .board
                    .piece_at(square)
                    .is_some_and(|p| p.player() == self.to_move);
                if own_piece {
                    return self.select(square);
                }

                let target = self.highlighted().iter().find(|m| m.to() == square).copied();
                match target {
                    Some(m) => self.apply_move(m).unwrap_or_else(|_| self.clone()),
                    None => self.with_phase(Phase::Selecting),
                }
            }
        }
    }

    fn select(&self, square: Square) -> GameState {
        let mut moves = self.legal_moves();
        moves.retain(|m| m.from() == square);
        self.with_phase(Phase::PieceSelected { square, moves })
    }

    fn with_phase(&self, phase: Phase) -> GameState {
        GameState {
            board: self.board.clone(),
            to_move: self.to_move,
            phase,
            ply: self.ply,
        }
    }
}
