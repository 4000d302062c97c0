//! Board grid notation parsing and serialization.
//!
//! The grid is the plain-text board format shared with the analysis prompt:
//! eight newline-separated rows, each with eight space-separated cells.
//! Cells are `R` (red man), `RK` (red king), `B` (black man), `BK` (black
//! king) or `.` (empty). Row 0 comes first.
//!
//! ```text
//! . B . B . B . B
//! B . B . B . B .
//! . B . B . B . B
//! . . . . . . . .
//! . . . . . . . .
//! R . R . R . R .
//! . R . R . R . R
//! R . R . R . R .
//! ```

use crate::{Player, Square};
use thiserror::Error;

/// Errors that can occur when parsing a board grid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid grid: expected 8 rows, got {0}")]
    InvalidRowCount(usize),

    #[error("invalid grid: row {row} has {count} cells, expected 8")]
    InvalidCellCount { row: usize, count: usize },

    #[error("invalid grid: unknown symbol '{symbol}' at {square}")]
    InvalidSymbol { symbol: String, square: Square },

    #[error("invalid grid: piece on light square {0}")]
    PieceOnLightSquare(Square),
}

/// Contents of an occupied grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub player: Player,
    pub king: bool,
}

impl GridCell {
    /// Returns the grid symbol for this cell.
    pub const fn symbol(self) -> &'static str {
        match (self.player, self.king) {
            (Player::Red, false) => "R",
            (Player::Red, true) => "RK",
            (Player::Black, false) => "B",
            (Player::Black, true) => "BK",
        }
    }

    fn from_symbol(symbol: &str) -> Option<Option<Self>> {
        let cell = |player, king| Some(Some(GridCell { player, king }));
        match symbol {
            "." => Some(None),
            "R" | "r" => cell(Player::Red, false),
            "RK" | "rk" => cell(Player::Red, true),
            "B" | "b" => cell(Player::Black, false),
            "BK" | "bk" => cell(Player::Black, true),
            _ => None,
        }
    }
}

/// Raw parsed grid, indexed `[row][col]`.
pub type Grid = [[Option<GridCell>; 8]; 8];

/// The symbol for a possibly empty cell.
pub fn cell_symbol(cell: Option<GridCell>) -> &'static str {
    cell.map_or(".", GridCell::symbol)
}

/// Parses a grid. Blank lines and surrounding whitespace are ignored.
pub fn parse(text: &str) -> Result<Grid, GridError> {
    let rows: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if rows.len() != 8 {
        return Err(GridError::InvalidRowCount(rows.len()));
    }

    let mut grid: Grid = [[None; 8]; 8];
    for (row, line) in rows.iter().enumerate() {
        let symbols: Vec<&str> = line.split_whitespace().collect();
        if symbols.len() != 8 {
            return Err(GridError::InvalidCellCount {
                row,
                count: symbols.len(),
            });
        }

        for (col, symbol) in symbols.iter().enumerate() {
            // Indices are bounded by the length checks above.
            let Some(square) = Square::new(row as u8, col as u8) else {
                continue;
            };
            let cell = GridCell::from_symbol(symbol).ok_or_else(|| GridError::InvalidSymbol {
                symbol: symbol.to_string(),
                square,
            })?;
            if cell.is_some() && !square.is_playable() {
                return Err(GridError::PieceOnLightSquare(square));
            }
            grid[row][col] = cell;
        }
    }

    Ok(grid)
}

/// Serializes a grid: space-separated columns, newline-separated rows, no trailing newline.
pub fn format(grid: &Grid) -> String {
    grid.iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell_symbol(*cell))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Piece;

    const START: &str = "\
. B . B . B . B
B . B . B . B .
. B . B . B . B
. . . . . . . .
. . . . . . . .
R . R . R . R .
. R . R . R . R
R . R . R . R .";

    #[test]
    fn parse_start_grid() {
        let grid = parse(START).unwrap();
        let black = grid[0][1].unwrap();
        assert_eq!(black.player, Player::Black);
        assert!(!black.king);
        assert_eq!(grid[0][0], None);
        assert_eq!(grid[7][0].unwrap().player, Player::Red);
        let count = grid.iter().flatten().filter(|c| c.is_some()).count();
        assert_eq!(count, 24);
    }

    #[test]
    fn format_roundtrip() {
        assert_eq!(format(&parse(START).unwrap()), START);
    }

    #[test]
    fn parse_kings_and_whitespace() {
        let text = "\n  . RK . . . . . .\n. . . . . . . .\n. . . . . . . .\n. . . . . . . .\n\
                    . . . . . . . .\n. . . . . . . .\n. . . . . . . .\nBK . . . . . . .\n";
        let grid = parse(text).unwrap();
        assert_eq!(
            grid[0][1],
            Some(GridCell {
                player: Player::Red,
                king: true
            })
        );
        assert_eq!(grid[7][0].map(GridCell::symbol), Some("BK"));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(parse(". . ."), Err(GridError::InvalidRowCount(1)));

        let short_row = START.replacen(". B . B . B . B", ". B . B", 1);
        assert_eq!(
            parse(&short_row),
            Err(GridError::InvalidCellCount { row: 0, count: 4 })
        );

        let bad_symbol = START.replacen("R", "Q", 1);
        assert!(matches!(
            parse(&bad_symbol),
            Err(GridError::InvalidSymbol { ref symbol, .. }) if symbol == "Q"
        ));

        let light = START.replacen(". B", "B B", 1);
        assert_eq!(
            parse(&light),
            Err(GridError::PieceOnLightSquare(Square::new(0, 0).unwrap()))
        );
    }

    #[test]
    fn empty_cell_symbol() {
        assert_eq!(cell_symbol(None), ".");
    }

    #[test]
    fn piece_symbols_parse_back() {
        let origin = Square::new(0, 1).unwrap();
        for player in [Player::Red, Player::Black] {
            for piece in [Piece::new(player, origin), Piece::new(player, origin).crowned()] {
                let cell = GridCell::from_symbol(piece.symbol()).flatten().unwrap();
                assert_eq!(cell.player, piece.player());
                assert_eq!(cell.king, piece.is_king());
            }
        }
    }
}
