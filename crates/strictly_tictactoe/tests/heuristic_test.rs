//! Tests for the heuristic move selector.

mod common;

use strictly_tictactoe::{
    Board, FixedRandom, Outcome, Player, Position, RngRandom, Rule, SequenceRandom, decide,
    evaluate, select_move,
};

fn board(s: &str) -> Board {
    s.parse().expect("valid board notation")
}

fn wins_for(b: &Board, player: Player) -> Vec<Position> {
    b.empty_positions()
        .into_iter()
        .filter(|&pos| evaluate(&b.with_mark(pos, player)) == Outcome::Won(player))
        .collect()
}

#[test]
fn test_takes_immediate_win() {
    let b = board("XX..O...O");
    assert_eq!(select_move(&b, Player::X, Player::O, &mut FixedRandom(0.0)), Some(Position::TopRight));
}

#[test]
fn test_blocks_opponent_win() {
    let b = board("OO.X.....");
    assert_eq!(select_move(&b, Player::X, Player::O, &mut FixedRandom(0.0)), Some(Position::TopRight));
}

#[test]
fn test_takes_center_on_empty_board() {
    assert_eq!(
        select_move(&Board::new(), Player::X, Player::O, &mut FixedRandom(0.0)),
        Some(Position::Center)
    );
}

#[test]
fn test_takes_corner_when_center_taken() {
    let b = board("....O....");
    let pos = select_move(&b, Player::X, Player::O, &mut FixedRandom(0.0)).unwrap();
    assert_eq!(pos, Position::TopLeft);
    for r in [0.1, 0.4, 0.7, 0.95] {
        let pos = select_move(&b, Player::X, Player::O, &mut FixedRandom(r)).unwrap();
        assert!(Position::CORNERS.contains(&pos));
    }
}

#[test]
fn test_single_empty_square() {
    let b = board("XOXOXO.OX");
    assert_eq!(select_move(&b, Player::X, Player::O, &mut FixedRandom(0.0)), Some(Position::BottomLeft));
}

#[test]
fn test_ai_playing_o() {
    // X threatens the left column at 6; O must block.
    let b = board("XO.X.....");
    let d = decide(&b, Player::O, Player::X, &mut FixedRandom(0.0)).unwrap();
    assert_eq!(*d.position(), Position::BottomLeft);
    assert_eq!(*d.rule(), Rule::Block);
}

#[test]
fn test_full_board_has_no_move() {
    let b = board("XOXXOOOXX");
    assert_eq!(select_move(&b, Player::X, Player::O, &mut FixedRandom(0.0)), None);
    assert_eq!(decide(&b, Player::O, Player::X, &mut FixedRandom(0.0)), None);
}

#[test]
fn test_misbehaving_random_source_never_panics() {
    let samples = [1.0, 1.5, -0.5, f64::NAN, f64::INFINITY, f64::NEG_INFINITY, f64::MAX, f64::MIN];
    let boards = ["....O....", "X...O...X", "XOX.X.OXO"];
    for s in boards {
        let b = board(s);
        for r in samples {
            let pos = select_move(&b, Player::X, Player::O, &mut FixedRandom(r))
                .expect("board has empty squares");
            assert!(b.is_empty(pos), "board {} sample {} chose {:?}", b, r, pos);
        }
    }
}

#[test]
fn test_sample_of_one_picks_last_choice() {
    let b = board("....O....");
    assert_eq!(
        select_move(&b, Player::X, Player::O, &mut FixedRandom(1.0)),
        Some(Position::BottomRight)
    );
}

#[test]
fn test_board_not_mutated() {
    let b = board("XX..O...O");
    let before = b;
    let _ = select_move(&b, Player::X, Player::O, &mut FixedRandom(0.0));
    assert_eq!(b, before);
}

#[test]
fn test_properties_hold_on_every_board() {
    let mut rng = SequenceRandom::new(vec![0.0, 0.37, 0.99, 1.0, f64::NAN]);
    for b in common::all_boards() {
        for (ai, opponent) in [(Player::X, Player::O), (Player::O, Player::X)] {
            let decision = decide(&b, ai, opponent, &mut rng);
            let empty = b.empty_positions();

            let Some(decision) = decision else {
                assert!(empty.is_empty(), "no move on non-full board {}", b);
                continue;
            };
            assert!(b.is_empty(*decision.position()), "occupied square on {}", b);
            assert!(decision.position().to_index() <= 8);

            let wins = wins_for(&b, ai);
            let blocks = wins_for(&b, opponent);
            let expected_rule = if !wins.is_empty() {
                assert_eq!(*decision.position(), wins[0], "lowest win on {}", b);
                Rule::Win
            } else if !blocks.is_empty() {
                assert_eq!(*decision.position(), blocks[0], "lowest block on {}", b);
                Rule::Block
            } else if b.is_empty(Position::Center) {
                assert_eq!(*decision.position(), Position::Center);
                Rule::Center
            } else if Position::CORNERS.iter().any(|c| b.is_empty(*c)) {
                assert!(Position::CORNERS.contains(&*decision.position()));
                Rule::Corner
            } else {
                Rule::Fallback
            };
            assert_eq!(*decision.rule(), expected_rule, "rule on {}", b);
        }
    }
}

#[test]
fn test_seeded_games_are_reproducible() {
    let play = |seed: u64| {
        let mut rng = RngRandom::seeded(seed);
        let mut b = Board::new();
        let mut mover = Player::X;
        let mut moves = Vec::new();
        while evaluate(&b) == Outcome::Ongoing {
            let pos = select_move(&b, mover, mover.opponent(), &mut rng).unwrap();
            b = b.with_mark(pos, mover);
            moves.push(pos);
            mover = mover.opponent();
        }
        (moves, evaluate(&b))
    };
    assert_eq!(play(7), play(7));
}
