//! Heuristic-vs-heuristic games.

use serde::Serialize;
use strictly_tictactoe::{Board, Outcome, Player, RandomSource, evaluate, select_move};
use tracing::{debug, info, instrument, warn};

/// Results of a batch of self-play games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    /// Finished games counted.
    pub games: u32,
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Tally {
    /// Counts a finished game. Unfinished games are logged and skipped.
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won(Player::X) => self.x_wins += 1,
            Outcome::Won(Player::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Ongoing => {
                warn!("Game ended without a result; not counted");
                return;
            }
        }
        self.games += 1;
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: X wins {}, O wins {}, draws {}",
            self.games, self.x_wins, self.o_wins, self.draws
        )
    }
}

/// Plays one game to completion, X first, both sides using the heuristic.
pub fn play_game<R>(rng: &mut R) -> (Board, Outcome)
where
    R: RandomSource + ?Sized,
{
    let mut board = Board::new();
    let mut mover = Player::X;
    loop {
        let outcome = evaluate(&board);
        if outcome.is_over() {
            return (board, outcome);
        }
        match select_move(&board, mover, mover.opponent(), rng) {
            Some(position) => board = board.with_mark(position, mover),
            None => return (board, outcome),
        }
        mover = mover.opponent();
    }
}

/// Plays `games` games and tallies the outcomes.
#[instrument(skip(rng))]
pub fn run<R>(games: u32, rng: &mut R) -> Tally
where
    R: RandomSource + ?Sized,
{
    let mut tally = Tally::default();
    for game in 0..games {
        let (board, outcome) = play_game(rng);
        debug!(game, %board, %outcome, "Game finished");
        tally.record(outcome);
    }
    info!(%tally, "Self-play complete");
    tally
}
