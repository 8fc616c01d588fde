//! Classification of a board position.

use crate::Player;
use serde::{Deserialize, Serialize};

/// Result of evaluating a board. Exactly one applies to any board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player holds a complete line.
    Won(Player),
    /// The board is full with no complete line.
    Draw,
    /// At least one square is empty and nobody has won.
    Ongoing,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(*player),
            Outcome::Draw | Outcome::Ongoing => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Returns true once the game can accept no further moves.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won(player) => write!(f, "{} wins", player),
            Outcome::Draw => write!(f, "Draw"),
            Outcome::Ongoing => write!(f, "Ongoing"),
        }
    }
}
