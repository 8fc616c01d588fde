//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the heuristic can probe hypothetical boards freely.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WIN_LINES, check_winner};

use crate::{Board, Outcome};
use tracing::{instrument, trace};

/// Classifies a board as won, drawn or still in play.
///
/// A completed line takes precedence over a full board.
#[instrument(skip(board), fields(board = %board))]
pub fn evaluate(board: &Board) -> Outcome {
    let outcome = if let Some(winner) = check_winner(board) {
        Outcome::Won(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    };
    trace!(%outcome, "Evaluated board");
    outcome
}
