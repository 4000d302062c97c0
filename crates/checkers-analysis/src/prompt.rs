//! Prompt and request body construction.

use checkers_core::Player;
use checkers_engine::Board;
use serde_json::{json, Value};

/// Builds the natural-language prompt for `board` with `player` to move.
///
/// The board is rendered with [`Board::to_grid`]: `R`, `RK`, `B`, `BK` and
/// `.`, one row per line.
pub fn build_prompt(board: &Board, player: Player) -> String {
    let grid = board.to_grid();
    format!(
        "Analyze this 8x8 Checkers board. R=Red, B=Black, RK=Red King, BK=Black King, .=Empty.\n\
         Rows and columns are numbered 0-7 from the top-left corner; write moves as row,col-row,col.\n\
         Current Turn: {player}\n\
         Board:\n\
         {grid}\n\
         \n\
         Provide a strategic summary and the best next move for {player}."
    )
}

/// Builds the `generateContent` request body for `prompt`.
///
/// The reply is constrained to a JSON object with `analysis`, `bestMove` and
/// `confidence`, and thinking is disabled.
pub fn request_body(prompt: &str) -> Value {
    json!({
        "contents": [
            { "parts": [ { "text": prompt } ] }
        ],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "analysis": { "type": "STRING" },
                    "bestMove": { "type": "STRING" },
                    "confidence": { "type": "NUMBER" }
                },
                "required": ["analysis", "bestMove", "confidence"]
            },
            "thinkingConfig": { "thinkingBudget": 0 }
        }
    })
}
