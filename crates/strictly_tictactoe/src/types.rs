//! Core domain types for tic-tac-toe.

use crate::error::BoardError;
use crate::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the symbol used for this player in board notation.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Player {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            other => Err(BoardError::InvalidMark(other.to_string())),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Parses a single notation character.
    fn from_char(ch: char) -> Option<Self> {
        match ch {
            'X' | 'x' => Some(Square::Occupied(Player::X)),
            'O' | 'o' => Some(Square::Occupied(Player::O)),
            '.' | '-' | '_' => Some(Square::Empty),
            _ => None,
        }
    }

    fn to_char(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(player) => player.symbol(),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Serializes as its compact notation (`"XX..O...O"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Returns a copy of this board with `player` placed at `pos`.
    pub fn with_mark(&self, pos: Position, player: Player) -> Self {
        let mut next = *self;
        next.set(pos, Square::Occupied(player));
        next
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns the empty positions in ascending index order.
    #[instrument(skip(self), fields(board = %self))]
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Counts the squares held by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Returns the player whose turn it is, assuming X moved first.
    pub fn next_to_move(&self) -> Player {
        if self.count(Player::X) > self.count(Player::O) {
            Player::O
        } else {
            Player::X
        }
    }

    /// Formats the board as a human-readable grid, numbering empty squares 1-9.
    pub fn grid(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for square in &self.squares {
            write!(f, "{}", square.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses board notation. Row separators (`/`) and whitespace are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(9);
        for (offset, ch) in s.chars().enumerate() {
            if ch == '/' || ch.is_whitespace() {
                continue;
            }
            let square = Square::from_char(ch).ok_or(BoardError::InvalidCell { ch, offset })?;
            squares.push(square);
        }
        Board::try_from(squares.as_slice())
    }
}

impl TryFrom<&[Square]> for Board {
    type Error = BoardError;

    fn try_from(squares: &[Square]) -> Result<Self, Self::Error> {
        let squares: [Square; 9] = squares
            .try_into()
            .map_err(|_| BoardError::WrongLength {
                found: squares.len(),
            })?;
        Ok(Self { squares })
    }
}

impl TryFrom<String> for Board {
    type Error = BoardError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let board: Board = "XX./.O./..O".parse().unwrap();
        assert_eq!(board.to_string(), "XX..O...O");
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::O));
        assert!(board.is_empty(Position::TopRight));
    }

    #[test]
    fn test_parse_lowercase_and_dashes() {
        let board: Board = "x-o _-_ ---".parse().unwrap();
        assert_eq!(board.to_string(), "X.O......");
    }

    #[test]
    fn test_parse_wrong_length() {
        let err = "XXO".parse::<Board>().unwrap_err();
        assert_eq!(err, BoardError::WrongLength { found: 3 });

        let err = "..........".parse::<Board>().unwrap_err();
        assert_eq!(err, BoardError::WrongLength { found: 10 });
    }

    #[test]
    fn test_parse_invalid_cell() {
        let err = "XX?......".parse::<Board>().unwrap_err();
        assert_eq!(err, BoardError::InvalidCell { ch: '?', offset: 2 });
    }

    #[test]
    fn test_try_from_slice_rejects_short_input() {
        let squares = [Square::Empty; 8];
        let err = Board::try_from(&squares[..]).unwrap_err();
        assert_eq!(err, BoardError::WrongLength { found: 8 });
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_mark(Position::Center, Player::X);
        assert!(board.is_empty(Position::Center));
        assert_eq!(next.get(Position::Center), Square::Occupied(Player::X));
    }

    #[test]
    fn test_empty_positions_skips_occupied_squares() {
        assert_eq!(Board::new().empty_positions(), Position::ALL.to_vec());
        let board: Board = "X...O...X".parse().unwrap();
        assert_eq!(
            board.empty_positions(),
            vec![
                Position::TopCenter,
                Position::TopRight,
                Position::MiddleLeft,
                Position::MiddleRight,
                Position::BottomLeft,
                Position::BottomCenter,
            ]
        );
    }

    #[test]
    fn test_next_to_move() {
        assert_eq!(Board::new().next_to_move(), Player::X);
        let board: Board = "X........".parse().unwrap();
        assert_eq!(board.next_to_move(), Player::O);
        let board: Board = "XO.......".parse().unwrap();
        assert_eq!(board.next_to_move(), Player::X);
    }

    #[test]
    fn test_grid_numbers_empty_squares() {
        let board: Board = "X...O....".parse().unwrap();
        assert_eq!(board.grid(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_player_from_str() {
        assert_eq!("x".parse::<Player>().unwrap(), Player::X);
        assert_eq!("O".parse::<Player>().unwrap(), Player::O);
        assert!("Z".parse::<Player>().is_err());
    }
}
