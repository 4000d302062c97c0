//! Player representation.

use std::fmt;
use std::str::FromStr;

/// Represents the two players in checkers.
///
/// Red starts at the bottom of the board (rows 5-7) and moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Player {
    Red = 0,
    Black = 1,
}

impl Player {
    /// Both players, in turn order.
    pub const ALL: [Player; 2] = [Player::Red, Player::Black];

    /// Returns the opposite player.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Player::Red => Player::Black,
            Player::Black => Player::Red,
        }
    }

    /// Returns the forward row direction for this player's men (-1 for Red, +1 for Black).
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Player::Red => -1,
            Player::Black => 1,
        }
    }

    /// Returns the row on which this player's men are crowned (0 for Red, 7 for Black).
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Player::Red => 0,
            Player::Black => 7,
        }
    }

    /// Returns the lowercase name used in prompts and bindings.
    pub const fn name(self) -> &'static str {
        match self {
            Player::Red => "red",
            Player::Black => "black",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Player {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" | "r" => Ok(Player::Red),
            "black" | "b" => Ok(Player::Black),
            other => Err(format!("unknown player: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_player() {
        assert_eq!(Player::Red.opposite(), Player::Black);
        assert_eq!(Player::Black.opposite(), Player::Red);
    }

    #[test]
    fn forward_direction() {
        assert_eq!(Player::Red.forward(), -1);
        assert_eq!(Player::Black.forward(), 1);
    }

    #[test]
    fn promotion_row() {
        assert_eq!(Player::Red.promotion_row(), 0);
        assert_eq!(Player::Black.promotion_row(), 7);
    }

    #[test]
    fn display_and_parse() {
        assert_eq!(Player::Red.to_string(), "red");
        assert_eq!(Player::Black.to_string(), "black");
        assert_eq!("Red".parse::<Player>(), Ok(Player::Red));
        assert_eq!("b".parse::<Player>(), Ok(Player::Black));
        assert!("white".parse::<Player>().is_err());
    }
}
