//! Browser-side tests. Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use checkers_wasm::{all_moves, initial_board, is_legal, Game, MoveDto};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn all_moves_crosses_the_boundary() {
    let moves = all_moves(&initial_board(), "red").unwrap();
    let moves: Vec<MoveDto> = serde_wasm_bindgen::from_value(moves).unwrap();
    assert_eq!(moves.len(), 7);
    assert_eq!(moves[0].from, [5, 0]);
}

#[wasm_bindgen_test]
fn is_legal_accepts_move_objects() {
    let dto = MoveDto { from: [5, 2], to: [4, 3], jump: false };
    let value = serde_wasm_bindgen::to_value(&dto).unwrap();
    assert!(is_legal(&initial_board(), value, "red").unwrap());
}

#[wasm_bindgen_test]
fn game_class_round() {
    let mut game = Game::new();
    game.click(5, 2);
    let highlighted: Vec<MoveDto> =
        serde_wasm_bindgen::from_value(game.highlighted().unwrap()).unwrap();
    assert_eq!(highlighted.len(), 2);
    game.make_move("5,2-4,3").unwrap();
    assert_eq!(game.current_player(), "black");
}
