//! One-ply heuristic opponent.
//!
//! Rules are tried in a fixed priority and the first that applies decides:
//!
//! 1. [`Rule::Win`]: complete a line this turn.
//! 2. [`Rule::Block`]: occupy the square the opponent would win on.
//! 3. [`Rule::Center`]: take the center.
//! 4. [`Rule::Corner`]: take a random free corner.
//! 5. [`Rule::Fallback`]: take a random free square.
//!
//! Win and block scans run in ascending index order and stop at the first hit.

use crate::random::{RandomSource, RngRandom, pick_index};
use crate::rules::evaluate;
use crate::{Board, Outcome, Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The heuristic rule that produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule {
    /// The move completes a line for the mover.
    Win,
    /// The move stops the opponent completing a line next turn.
    Block,
    /// The center was free.
    Center,
    /// A free corner, chosen at random.
    Corner,
    /// Any free square, chosen at random.
    Fallback,
}

impl Rule {
    /// Returns a short label for logs and command output.
    pub fn label(self) -> &'static str {
        match self {
            Rule::Win => "win",
            Rule::Block => "block",
            Rule::Center => "center",
            Rule::Corner => "corner",
            Rule::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A chosen move and the rule that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Decision {
    /// Where to play.
    position: Position,
    /// Why.
    rule: Rule,
}

/// Picks a move for `ai` and reports which rule fired.
///
/// Returns `None` when the board has no empty square. The board is never
/// modified; hypothetical placements happen on copies.
///
/// # Panics
///
/// Panics if `ai == opponent`; the two marks in play must differ.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn decide<R>(board: &Board, ai: Player, opponent: Player, rng: &mut R) -> Option<Decision>
where
    R: RandomSource + ?Sized,
{
    assert_ne!(ai, opponent, "AI and opponent must play different marks");

    let empty = board.empty_positions();
    if empty.is_empty() {
        debug!("No legal move");
        return None;
    }

    let decision = if let Some(position) = winning_square(board, &empty, ai) {
        Decision {
            position,
            rule: Rule::Win,
        }
    } else if let Some(position) = winning_square(board, &empty, opponent) {
        Decision {
            position,
            rule: Rule::Block,
        }
    } else if board.is_empty(Position::Center) {
        Decision {
            position: Position::Center,
            rule: Rule::Center,
        }
    } else {
        let corners: Vec<Position> = Position::CORNERS
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect();
        let (pool, rule) = if corners.is_empty() {
            (empty, Rule::Fallback)
        } else {
            (corners, Rule::Corner)
        };
        let sample = rng.next_unit();
        // `pool` is non-empty on both branches, so an index always comes back.
        let index = pick_index(sample, pool.len()).unwrap_or(0);
        debug!(sample, choices = pool.len(), index, "Random pick");
        Decision {
            position: pool[index],
            rule,
        }
    };

    debug!(position = %decision.position(), rule = %decision.rule(), "Chose move");
    Some(decision)
}

/// Picks a move for `ai`; `None` when the board is full.
///
/// # Panics
///
/// Panics if `ai == opponent`.
pub fn select_move<R>(board: &Board, ai: Player, opponent: Player, rng: &mut R) -> Option<Position>
where
    R: RandomSource + ?Sized,
{
    decide(board, ai, opponent, rng).map(|decision| *decision.position())
}

/// [`select_move`] with the thread-local generator as the random source.
pub fn select_move_with_thread_rng(board: &Board, ai: Player, opponent: Player) -> Option<Position> {
    select_move(board, ai, opponent, &mut RngRandom::thread())
}

/// First empty square (ascending) where `player` would complete a line.
fn winning_square(board: &Board, empty: &[Position], player: Player) -> Option<Position> {
    empty
        .iter()
        .copied()
        .find(|&pos| evaluate(&board.with_mark(pos, player)) == Outcome::Won(player))
}
