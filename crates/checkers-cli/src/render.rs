//! Text rendering for the terminal.

use checkers_core::{Move, Player, Square};
use checkers_engine::{Board, GameState};

/// Renders `board` with row and column indices.
///
/// Squares in `marks` are shown as `*` when empty.
pub fn render_board(board: &Board, marks: &[Square]) -> String {
    let mut out = String::from("   0  1  2  3  4  5  6  7\n");
    for row in 0..Square::SIZE {
        out.push_str(&row.to_string());
        for col in 0..Square::SIZE {
            let cell = Square::new(row, col).map_or_else(String::new, |square| {
                match board.piece_at(square) {
                    Some(piece) => piece.symbol().to_string(),
                    None if marks.contains(&square) => "*".to_string(),
                    None => ".".to_string(),
                }
            });
            out.push_str(&format!(" {cell:>2}"));
        }
        out.push('\n');
    }
    out
}

/// Renders the game: board with highlighted destinations, then a status line.
pub fn render_game(game: &GameState) -> String {
    let marks: Vec<Square> = game.highlighted().iter().map(|m| m.to()).collect();
    let mut out = render_board(game.board(), &marks);
    out.push_str(&status_line(game));
    out
}

/// One-line summary of whose turn it is or who won.
pub fn status_line(game: &GameState) -> String {
    if let Some(result) = game.result() {
        return match result.winner() {
            Some(winner) => format!("Game over: {winner} wins"),
            None => "Game over: draw".to_string(),
        };
    }
    let counts = format!(
        "red {} / black {}",
        game.piece_count(Player::Red),
        game.piece_count(Player::Black)
    );
    match game.selected() {
        Some(square) if game.is_continuing() => {
            format!("{} to move, continue jumping from {square} ({counts})", game.to_move())
        }
        Some(square) => format!("{} to move, {square} selected ({counts})", game.to_move()),
        None => format!("{} to move ({counts})", game.to_move()),
    }
}

/// Renders moves in notation, space-separated.
pub fn render_moves<'a>(moves: impl IntoIterator<Item = &'a Move>) -> String {
    moves
        .into_iter()
        .map(|m| m.to_notation())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkers_engine::INITIAL_BOARD;

    #[test]
    fn initial_board_rendering() {
        let text = render_board(&INITIAL_BOARD, &[]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "   0  1  2  3  4  5  6  7");
        assert_eq!(lines[1], "0  .  B  .  B  .  B  .  B");
        assert_eq!(lines[8], "7  R  .  R  .  R  .  R  .");
    }

    #[test]
    fn highlighted_squares_marked() {
        let game = GameState::new().click(Square::new(5, 2).unwrap());
        let text = render_game(&game);
        assert!(text.contains("4  .  *  .  *  .  .  .  ."));
        assert!(text.ends_with("red to move, 5,2 selected (red 12 / black 12)"));
    }

    #[test]
    fn moves_rendering() {
        let moves = GameState::new().legal_moves();
        assert!(render_moves(&moves).starts_with("5,0-4,1 5,2-4,1 5,2-4,3"));
    }

    #[test]
    fn finished_status() {
        let board = Board::empty().with_piece(
            Square::new(5, 0).unwrap(),
            checkers_core::Piece::new(Player::Red, Square::new(5, 0).unwrap()),
        );
        let game = GameState::from_board(board, Player::Black);
        assert_eq!(status_line(&game), "Game over: red wins");
    }
}
