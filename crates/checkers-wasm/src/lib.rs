//! WebAssembly bindings for the checkers engine.
//!
//! This crate provides a JavaScript-friendly API for the rules engine, so a
//! browser front-end can render the board and forward clicks while all rule
//! decisions stay in Rust.
//!
//! Boards cross the boundary as the text grid (`R RK B BK .`, one row per
//! line). Moves cross as `{ from: [row, col], to: [row, col], jump }`.
//!
//! # Usage
//!
//! ```javascript
//! import init, { Game, allMoves, initialBoard } from 'checkers-wasm';
//!
//! await init();
//!
//! const game = new Game();
//! game.click(5, 2);              // select the red man on (5,2)
//! console.log(game.highlighted()); // [{from:[5,2],to:[4,1],jump:false}, ...]
//! game.click(4, 3);              // move it
//! console.log(game.currentPlayer()); // "black"
//!
//! console.log(allMoves(initialBoard(), "red").length); // 7
//! ```

use checkers_core::{Move, Player, Square};
use checkers_engine::{Board, GameState, MoveList};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// A move as seen from JavaScript.
///
/// `jump` is informational; it is recomputed from the squares on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveDto {
    pub from: [u8; 2],
    pub to: [u8; 2],
    #[serde(default)]
    pub jump: bool,
}

impl From<Move> for MoveDto {
    fn from(m: Move) -> Self {
        MoveDto {
            from: [m.from().row(), m.from().col()],
            to: [m.to().row(), m.to().col()],
            jump: m.is_jump(),
        }
    }
}

impl TryFrom<MoveDto> for Move {
    type Error = String;

    fn try_from(dto: MoveDto) -> Result<Self, Self::Error> {
        let from = parse_square(dto.from[0], dto.from[1])?;
        let to = parse_square(dto.to[0], dto.to[1])?;
        Ok(Move::new(from, to))
    }
}

/// Result of [`execute`] as seen from JavaScript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutedDto {
    pub board: String,
    pub jump_taken: bool,
    pub promoted: bool,
}

fn parse_square(row: u8, col: u8) -> Result<Square, String> {
    Square::new(row, col).ok_or_else(|| format!("square out of range: {row},{col}"))
}

fn parse_board(grid: &str) -> Result<Board, String> {
    Board::from_grid(grid).map_err(|e| e.to_string())
}

fn parse_player(name: &str) -> Result<Player, String> {
    name.parse()
}

fn to_dtos(moves: &MoveList) -> Vec<MoveDto> {
    moves.iter().map(|&m| MoveDto::from(m)).collect()
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn from_js_move(value: JsValue) -> Result<Move, JsError> {
    let dto: MoveDto =
        serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))?;
    Move::try_from(dto).map_err(|e| JsError::new(&e))
}

fn js_err(message: String) -> JsError {
    JsError::new(&message)
}

fn all_moves_dto(grid: &str, player: &str) -> Result<Vec<MoveDto>, String> {
    let board = parse_board(grid)?;
    let player = parse_player(player)?;
    Ok(to_dtos(&checkers_engine::all_moves(&board, player)))
}

fn moves_for_dto(grid: &str, row: u8, col: u8, player: &str) -> Result<Vec<MoveDto>, String> {
    let board = parse_board(grid)?;
    let square = parse_square(row, col)?;
    let player = parse_player(player)?;
    Ok(to_dtos(&checkers_engine::moves_for(&board, square, player)))
}

fn execute_dto(grid: &str, m: Move) -> Result<ExecutedDto, String> {
    let board = parse_board(grid)?;
    if board.piece_at(m.from()).is_none() {
        return Err(format!("no piece on {}", m.from()));
    }
    let executed = checkers_engine::execute(&board, m);
    Ok(ExecutedDto {
        board: executed.board.to_grid(),
        jump_taken: executed.jump_taken,
        promoted: executed.promoted,
    })
}

fn is_legal_dto(grid: &str, m: Move, player: &str) -> Result<bool, String> {
    let board = parse_board(grid)?;
    let player = parse_player(player)?;
    Ok(checkers_engine::is_legal(&board, m, player))
}

/// Returns every legal move for `player` with mandatory capture applied.
#[wasm_bindgen(js_name = allMoves)]
pub fn all_moves(grid: &str, player: &str) -> Result<JsValue, JsError> {
    to_js(&all_moves_dto(grid, player).map_err(js_err)?)
}

/// Returns the legal moves of the piece on (`row`, `col`).
#[wasm_bindgen(js_name = movesFor)]
pub fn moves_for(grid: &str, row: u8, col: u8, player: &str) -> Result<JsValue, JsError> {
    to_js(&moves_for_dto(grid, row, col, player).map_err(js_err)?)
}

/// Applies a move that has already been validated and returns
/// `{ board, jumpTaken, promoted }`.
///
/// The move is not re-validated; only an empty source square is rejected.
#[wasm_bindgen]
pub fn execute(grid: &str, mv: JsValue) -> Result<JsValue, JsError> {
    let m = from_js_move(mv)?;
    to_js(&execute_dto(grid, m).map_err(js_err)?)
}

/// Returns true if the move is legal for `player`.
#[wasm_bindgen(js_name = isLegal)]
pub fn is_legal(grid: &str, mv: JsValue, player: &str) -> Result<bool, JsError> {
    let m = from_js_move(mv)?;
    is_legal_dto(grid, m, player).map_err(js_err)
}

/// Returns the starting board as a text grid.
#[wasm_bindgen(js_name = initialBoard)]
pub fn initial_board() -> String {
    checkers_engine::INITIAL_BOARD.to_grid()
}

/// A checkers game that can be driven from JavaScript.
#[wasm_bindgen]
pub struct Game {
    state: GameState,
}

#[wasm_bindgen]
impl Game {
    /// Creates a new game with the standard starting board.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Game {
            state: GameState::new(),
        }
    }

    /// Creates a game from a text grid with `player` to move.
    #[wasm_bindgen(js_name = fromBoard)]
    pub fn from_board(grid: &str, player: &str) -> Result<Game, JsError> {
        Self::from_grid(grid, player).map_err(js_err)
    }

    /// Handles a click on (`row`, `col`). Out-of-range squares are ignored.
    pub fn click(&mut self, row: u8, col: u8) {
        if let Some(square) = Square::new(row, col) {
            self.state = self.state.click(square);
        }
    }

    /// Makes a move given in `row,col-row,col` notation (`x` for jumps).
    #[wasm_bindgen(js_name = makeMove)]
    pub fn make_move(&mut self, notation: &str) -> Result<(), JsError> {
        self.apply_notation(notation).map_err(js_err)
    }

    /// Returns the moves available right now.
    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self) -> Result<JsValue, JsError> {
        to_js(&self.legal_move_dtos())
    }

    /// Returns the board as a text grid.
    pub fn board(&self) -> String {
        self.state.board().to_grid()
    }

    /// Returns the player to move ("red" or "black").
    #[wasm_bindgen(js_name = currentPlayer)]
    pub fn current_player(&self) -> String {
        self.state.to_move().name().to_string()
    }

    /// Returns "red_wins", "black_wins" or "draw", or null while in progress.
    pub fn result(&self) -> Option<String> {
        self.state.result().map(|r| r.to_string())
    }

    /// Returns true if the game is over.
    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// Returns true while a multi-jump is in progress.
    #[wasm_bindgen(js_name = isContinuing)]
    pub fn is_continuing(&self) -> bool {
        self.state.is_continuing()
    }

    /// Returns the selected square as `[row, col]`, or null.
    pub fn selected(&self) -> Option<Vec<u8>> {
        self.state.selected().map(|sq| vec![sq.row(), sq.col()])
    }

    /// Returns the highlighted destinations of the selection.
    pub fn highlighted(&self) -> Result<JsValue, JsError> {
        to_js(&self.highlighted_dtos())
    }

    /// Returns how many pieces `player` has left.
    #[wasm_bindgen(js_name = pieceCount)]
    pub fn piece_count(&self, player: &str) -> Result<usize, JsError> {
        let player = parse_player(player).map_err(js_err)?;
        Ok(self.state.piece_count(player))
    }

    /// Resets the game to the starting board.
    pub fn reset(&mut self) {
        self.state = GameState::new();
    }
}

impl Game {
    fn from_grid(grid: &str, player: &str) -> Result<Game, String> {
        let board = parse_board(grid)?;
        let player = parse_player(player)?;
        Ok(Game {
            state: GameState::from_board(board, player),
        })
    }

    fn apply_notation(&mut self, notation: &str) -> Result<(), String> {
        let m = Move::from_notation(notation).map_err(|e| e.to_string())?;
        self.state = self.state.apply_move(m).map_err(|e| e.to_string())?;
        Ok(())
    }

    fn legal_move_dtos(&self) -> Vec<MoveDto> {
        to_dtos(&self.state.legal_moves())
    }

    fn highlighted_dtos(&self) -> Vec<MoveDto> {
        self.state
            .highlighted()
            .iter()
            .map(|&m| MoveDto::from(m))
            .collect()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAPTURE_GRID: &str = ". . . . . . . .\n\
                                . . B . . . . .\n\
                                . . . . . . . .\n\
                                . . . . . . . .\n\
                                . . . . . B . .\n\
                                . . . . R . . .\n\
                                . . . . . . . .\n\
                                . . . . . . . .";

    #[test]
    fn game_new() {
        let game = Game::new();
        assert_eq!(game.current_player(), "red");
        assert_eq!(game.board(), initial_board());
        assert_eq!(game.result(), None);
        assert_eq!(game.legal_move_dtos().len(), 7);
    }

    #[test]
    fn click_flow() {
        let mut game = Game::new();
        game.click(5, 2);
        assert_eq!(game.selected(), Some(vec![5, 2]));
        assert_eq!(
            game.highlighted_dtos(),
            vec![
                MoveDto {
                    from: [5, 2],
                    to: [4, 1],
                    jump: false,
                },
                MoveDto {
                    from: [5, 2],
                    to: [4, 3],
                    jump: false,
                },
            ]
        );
        game.click(4, 3);
        assert_eq!(game.current_player(), "black");
        assert_eq!(game.selected(), None);

        // Off-board clicks are ignored.
        game.click(9, 9);
        assert_eq!(game.current_player(), "black");
    }

    #[test]
    fn make_move_by_notation() {
        let mut game = Game::new();
        game.apply_notation("5,2-4,3").unwrap();
        assert_eq!(game.current_player(), "black");
        assert!(game.apply_notation("5,0-4,1").is_err());
        assert!(game.apply_notation("garbage").is_err());
        game.reset();
        assert_eq!(game.current_player(), "red");
    }

    #[test]
    fn game_from_grid() {
        let game = Game::from_grid(CAPTURE_GRID, "red").unwrap();
        assert_eq!(
            game.legal_move_dtos(),
            vec![MoveDto {
                from: [5, 4],
                to: [3, 6],
                jump: true,
            }]
        );
        assert!(Game::from_grid(CAPTURE_GRID, "green").is_err());
        assert!(Game::from_grid("R", "red").is_err());
    }

    #[test]
    fn free_functions() {
        assert_eq!(all_moves_dto(&initial_board(), "red").unwrap().len(), 7);
        // Per-piece moves keep the step; the whole-board list keeps only the jump.
        assert_eq!(
            moves_for_dto(CAPTURE_GRID, 5, 4, "red").unwrap(),
            vec![
                MoveDto {
                    from: [5, 4],
                    to: [4, 3],
                    jump: false,
                },
                MoveDto {
                    from: [5, 4],
                    to: [3, 6],
                    jump: true,
                },
            ]
        );
        assert_eq!(all_moves_dto(CAPTURE_GRID, "red").unwrap().len(), 1);
        assert!(moves_for_dto(CAPTURE_GRID, 8, 4, "red").is_err());

        let jump = Move::try_from(MoveDto {
            from: [5, 4],
            to: [3, 6],
            jump: false,
        })
        .unwrap();
        assert!(is_legal_dto(CAPTURE_GRID, jump, "red").unwrap());
        assert!(!is_legal_dto(CAPTURE_GRID, jump, "black").unwrap());

        let executed = execute_dto(CAPTURE_GRID, jump).unwrap();
        assert!(executed.jump_taken);
        assert!(!executed.promoted);
        let board = Board::from_grid(&executed.board).unwrap();
        assert_eq!(board.count(Player::Black), 1);
    }

    #[test]
    fn execute_rejects_empty_source() {
        let m = Move::try_from(MoveDto {
            from: [4, 1],
            to: [3, 0],
            jump: false,
        })
        .unwrap();
        assert!(execute_dto(&initial_board(), m).is_err());
    }

    #[test]
    fn dto_out_of_range() {
        let dto = MoveDto {
            from: [8, 0],
            to: [7, 1],
            jump: false,
        };
        assert!(Move::try_from(dto).is_err());
    }
}
