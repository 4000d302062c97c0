//! Interactive game session.
//!
//! A [`Session`] wraps a [`GameState`] and turns typed commands into state
//! transitions. It does no I/O; the binary reads lines, feeds them through
//! [`parse_command`] and prints the returned [`Reply`].

use crate::render::{render_game, render_moves};
use checkers_core::{Move, MoveParseError, Square};
use checkers_engine::{GameError, GameState};
use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing a command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// The input was empty.
    #[error("empty command")]
    Empty,
    /// The first word is not a known command and not a move.
    #[error("unknown command: {0} (type `help`)")]
    Unknown(String),
    /// A command argument was missing or malformed.
    #[error("bad argument for `{command}`: {reason}")]
    BadArgument { command: &'static str, reason: String },
    /// The move notation could not be parsed.
    #[error(transparent)]
    Move(#[from] MoveParseError),
}

/// A command typed by the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play a move.
    Move(Move),
    /// Click a square, as the browser front-end would.
    Click(Square),
    /// List the legal moves.
    Moves,
    /// Print the board.
    Board,
    /// Request an analysis of the current board.
    Analyze,
    /// Start a new game.
    Reset,
    /// Print the command summary.
    Help,
    /// Leave the session.
    Quit,
}

/// Parses one input line.
///
/// A bare move such as `5,2-4,3` is accepted without the `move` keyword.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Err(CommandError::Empty);
    };
    let arg = words.next();

    match head.to_ascii_lowercase().as_str() {
        "move" | "m" => {
            let notation = arg.ok_or(CommandError::BadArgument {
                command: "move",
                reason: "expected a move like 5,2-4,3".to_string(),
            })?;
            Ok(Command::Move(Move::from_str(notation)?))
        }
        "click" | "c" => {
            let square = arg.and_then(Square::parse).ok_or(CommandError::BadArgument {
                command: "click",
                reason: "expected a square like 5,2".to_string(),
            })?;
            Ok(Command::Click(square))
        }
        "moves" => Ok(Command::Moves),
        "board" | "b" => Ok(Command::Board),
        "analyze" | "a" => Ok(Command::Analyze),
        "reset" | "new" => Ok(Command::Reset),
        "help" | "h" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        _ if head.contains(',') => Ok(Command::Move(Move::from_str(head)?)),
        _ => Err(CommandError::Unknown(head.to_string())),
    }
}

/// Command summary printed by `help`.
pub const HELP: &str = "\
commands:
  <from>-<to>        play a move, e.g. 5,2-4,3 (or 5,4x3,6 for a jump)
  move <from>-<to>   same as above
  click <r>,<c>      select a piece or a highlighted destination
  moves              list legal moves
  board              print the board
  analyze            ask the analysis service about this position
  reset              start a new game
  quit               leave";

/// What the caller should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print this text.
    Text(String),
    /// Run an analysis of the current board.
    Analyze,
    /// End the session.
    Quit,
}

/// An interactive game.
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: GameState,
    turn_passed: bool,
}

impl Session {
    /// Starts a session from the standard starting board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session from an existing game state.
    pub fn from_state(state: GameState) -> Self {
        Session {
            state,
            turn_passed: false,
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns true if the last command handed the turn to the other player.
    ///
    /// Starting a new game does not count as a turn.
    pub fn turn_passed(&self) -> bool {
        self.turn_passed
    }

    /// Executes a command.
    pub fn handle(&mut self, command: Command) -> Reply {
        let before = (self.state.to_move(), self.state.ply());
        let reply = self.dispatch(command);
        self.turn_passed = self.state.ply() > before.1 && self.state.to_move() != before.0;
        reply
    }

    fn dispatch(&mut self, command: Command) -> Reply {
        match command {
            Command::Move(m) => match self.state.apply_move(m) {
                Ok(next) => {
                    tracing::debug!(%m, ply = next.ply(), "move applied");
                    self.state = next;
                    Reply::Text(render_game(&self.state))
                }
                Err(e @ GameError::IllegalMove(_)) => Reply::Text(format!(
                    "{e}; legal moves: {}",
                    render_moves(&self.state.legal_moves())
                )),
                Err(e) => Reply::Text(e.to_string()),
            },
            Command::Click(square) => {
                self.state = self.state.click(square);
                Reply::Text(render_game(&self.state))
            }
            Command::Moves => {
                let moves = self.state.legal_moves();
                if moves.is_empty() {
                    Reply::Text("no legal moves".to_string())
                } else {
                    Reply::Text(render_moves(&moves))
                }
            }
            Command::Board => Reply::Text(render_game(&self.state)),
            Command::Analyze => Reply::Analyze,
            Command::Reset => {
                self.state = GameState::new();
                Reply::Text(render_game(&self.state))
            }
            Command::Help => Reply::Text(HELP.to_string()),
            Command::Quit => Reply::Quit,
        }
    }
}
