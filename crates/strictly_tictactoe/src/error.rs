//! Error types for board construction and session turn discipline.

use crate::position::Position;
use crate::types::Player;
use derive_more::{Display, Error};

/// Error building a board or mark from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// The input did not describe exactly nine squares.
    #[display("Board must have exactly 9 squares, found {}", found)]
    WrongLength {
        /// Number of squares supplied.
        found: usize,
    },

    /// A character that is neither a mark nor an empty marker.
    #[display("Invalid square {:?} at offset {}", ch, offset)]
    InvalidCell {
        /// The offending character.
        ch: char,
        /// Character offset in the input.
        offset: usize,
    },

    /// A mark other than X or O.
    #[display("Invalid mark {:?} (expected X or O)", _0)]
    InvalidMark(#[error(not(source))] String),
}

/// Error when a move is requested out of turn or after the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SessionError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's the other side's turn; carries the mark that is to move.
    #[display("Not your turn: {} is to move", _0)]
    NotYourTurn(#[error(not(source))] Player),
}
