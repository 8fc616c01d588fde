//! Tests for board evaluation.

mod common;

use strictly_tictactoe::{Board, Outcome, Player, Square, evaluate};

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

fn board(s: &str) -> Board {
    s.parse().expect("valid board notation")
}

#[test]
fn test_row_win() {
    assert_eq!(evaluate(&board("XXX......")), Outcome::Won(Player::X));
}

#[test]
fn test_column_win() {
    assert_eq!(evaluate(&board("O..O..O..")), Outcome::Won(Player::O));
}

#[test]
fn test_diagonal_win() {
    assert_eq!(evaluate(&board("X...X...X")), Outcome::Won(Player::X));
}

#[test]
fn test_draw() {
    assert_eq!(evaluate(&board("XOXXOOOXX")), Outcome::Draw);
}

#[test]
fn test_ongoing() {
    assert_eq!(evaluate(&board("XOX.O....")), Outcome::Ongoing);
    assert_eq!(evaluate(&Board::new()), Outcome::Ongoing);
}

#[test]
fn test_win_on_full_board_is_not_draw() {
    assert_eq!(evaluate(&board("XXXOOXXOO")), Outcome::Won(Player::X));
}

#[test]
fn test_all_boards_covers_each_assignment_once() {
    let boards: std::collections::HashSet<Board> = common::all_boards().collect();
    assert_eq!(boards.len(), 19683);
}

#[test]
fn test_matches_reference_on_every_board() {
    for b in common::all_boards() {
        let squares = b.squares();
        let first_line = LINES.iter().find_map(|&[a, c, d]| match squares[a] {
            Square::Occupied(p) if squares[c] == squares[a] && squares[d] == squares[a] => Some(p),
            _ => None,
        });
        let expected = match first_line {
            Some(p) => Outcome::Won(p),
            None if squares.iter().all(|s| *s != Square::Empty) => Outcome::Draw,
            None => Outcome::Ongoing,
        };
        assert_eq!(evaluate(&b), expected, "board {}", b);
    }
}

#[test]
fn test_evaluate_is_repeatable() {
    for b in common::all_boards().step_by(97) {
        assert_eq!(evaluate(&b), evaluate(&b));
    }
}

#[test]
fn test_outcome_helpers() {
    assert_eq!(Outcome::Won(Player::O).winner(), Some(Player::O));
    assert_eq!(Outcome::Draw.winner(), None);
    assert!(Outcome::Draw.is_draw());
    assert!(Outcome::Draw.is_over());
    assert!(Outcome::Won(Player::X).is_over());
    assert!(!Outcome::Ongoing.is_over());
    assert_eq!(Outcome::Won(Player::X).to_string(), "X wins");
}

#[test]
fn test_board_serializes_as_notation() {
    let b = board("XX./.O./..O");
    let json = serde_json::to_string(&b).unwrap();
    assert_eq!(json, "\"XX..O...O\"");
    let back: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(back, b);
    assert!(serde_json::from_str::<Board>("\"XX\"").is_err());
}
