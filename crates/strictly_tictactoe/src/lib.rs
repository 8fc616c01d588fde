//! Pure tic-tac-toe rules and a one-ply heuristic opponent.
//!
//! The crate has no I/O and no UI types. A frontend owns the board and
//! calls in after each move:
//!
//! - [`evaluate`] classifies a board as won, drawn or ongoing.
//! - [`select_move`] picks the automated opponent's next square.
//! - [`Session`] optionally tracks turn order for a human-vs-AI game.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Board, FixedRandom, Outcome, Player, Position, evaluate, select_move};
//!
//! let board: Board = "XX..O...O".parse()?;
//! assert_eq!(evaluate(&board), Outcome::Ongoing);
//!
//! let chosen = select_move(&board, Player::X, Player::O, &mut FixedRandom(0.0));
//! assert_eq!(chosen, Some(Position::TopRight));
//! # Ok::<(), strictly_tictactoe::BoardError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod heuristic;
mod outcome;
mod position;
mod random;
pub mod rules;
mod session;
mod types;

pub use error::{BoardError, SessionError};
pub use heuristic::{Decision, Rule, decide, select_move, select_move_with_thread_rng};
pub use outcome::Outcome;
pub use position::Position;
pub use random::{FixedRandom, RandomSource, RngRandom, SequenceRandom, pick_index};
pub use rules::{WIN_LINES, check_winner, evaluate, is_full};
pub use session::{Session, Verdict};
pub use types::{Board, Player, Square};

/// Alias for the symbol a player places.
pub type Mark = Player;
