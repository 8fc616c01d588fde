//! Headless human-vs-AI game session.
//!
//! Tracks the state a frontend needs between turns: who plays which mark,
//! whose turn it is, and whether the game has ended. Rendering, input and
//! any "thinking" delay before the AI replies belong to the frontend.

use crate::error::SessionError;
use crate::heuristic::decide;
use crate::random::RandomSource;
use crate::rules::evaluate;
use crate::{Board, Outcome, Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// How a finished game went, from the human's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// The human completed a line.
    HumanWon(Player),
    /// The AI completed a line.
    AiWon(Player),
    /// Board filled with no line.
    Draw,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::HumanWon(mark) => write!(f, "You win as {}!", mark),
            Verdict::AiWon(mark) => write!(f, "AI wins as {}.", mark),
            Verdict::Draw => write!(f, "Draw!"),
        }
    }
}

/// One game between a human and the heuristic AI.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Session {
    /// The board.
    board: Board,
    /// Mark played by the human.
    human: Player,
    /// Mark played by the AI.
    ai: Player,
    /// Mark to move next.
    to_move: Player,
    /// Result of the last evaluation.
    outcome: Outcome,
    /// Positions played, in order.
    history: Vec<Position>,
}

impl Session {
    /// Starts a game with the human playing `human`. X always moves first.
    #[instrument]
    pub fn new(human: Player) -> Self {
        info!(human = %human, "Starting session");
        Self {
            board: Board::new(),
            human,
            ai: human.opponent(),
            to_move: Player::X,
            outcome: Outcome::Ongoing,
            history: Vec::new(),
        }
    }

    /// Starts a game with the human's mark drawn from `rng`: X below 0.5.
    pub fn with_random_marks<R>(rng: &mut R) -> Self
    where
        R: RandomSource + ?Sized,
    {
        let human = if rng.next_unit() < 0.5 {
            Player::X
        } else {
            Player::O
        };
        Self::new(human)
    }

    /// Clears the board for a new game, optionally swapping sides.
    #[instrument(skip(self), fields(human = %self.human))]
    pub fn restart(&mut self, swap_marks: bool) {
        if swap_marks {
            self.human = self.human.opponent();
            self.ai = self.human.opponent();
        }
        self.board = Board::new();
        self.to_move = Player::X;
        self.outcome = Outcome::Ongoing;
        self.history.clear();
        info!(human = %self.human, ai = %self.ai, "Session restarted");
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    /// Returns true when the frontend should ask the AI for a move.
    pub fn awaiting_ai(&self) -> bool {
        !self.is_over() && self.to_move == self.ai
    }

    /// Returns the result relative to the human, once the game is over.
    pub fn verdict(&self) -> Option<Verdict> {
        match self.outcome {
            Outcome::Ongoing => None,
            Outcome::Draw => Some(Verdict::Draw),
            Outcome::Won(mark) if mark == self.human => Some(Verdict::HumanWon(mark)),
            Outcome::Won(mark) => Some(Verdict::AiWon(mark)),
        }
    }

    /// Plays the human's mark at `position`.
    ///
    /// # Errors
    ///
    /// Fails if the game is over, it is the AI's turn, or the square is taken.
    #[instrument(skip(self), fields(human = %self.human))]
    pub fn play_human(&mut self, position: Position) -> Result<Outcome, SessionError> {
        self.check_turn(self.human)?;
        if !self.board.is_empty(position) {
            return Err(SessionError::SquareOccupied(position));
        }
        Ok(self.place(position, self.human))
    }

    /// Lets the AI choose and play its move.
    ///
    /// Returns the square played, or `None` if the board had no empty square.
    ///
    /// # Errors
    ///
    /// Fails if the game is over or it is the human's turn.
    #[instrument(skip(self, rng), fields(ai = %self.ai))]
    pub fn play_ai<R>(&mut self, rng: &mut R) -> Result<Option<Position>, SessionError>
    where
        R: RandomSource + ?Sized,
    {
        self.check_turn(self.ai)?;
        let Some(decision) = decide(&self.board, self.ai, self.human, rng) else {
            debug!("AI has no legal move");
            self.outcome = evaluate(&self.board);
            return Ok(None);
        };
        debug!(position = %decision.position(), rule = %decision.rule(), "AI move");
        self.place(*decision.position(), self.ai);
        Ok(Some(*decision.position()))
    }

    fn check_turn(&self, mark: Player) -> Result<(), SessionError> {
        if self.is_over() {
            return Err(SessionError::GameOver);
        }
        if self.to_move != mark {
            return Err(SessionError::NotYourTurn(self.to_move));
        }
        Ok(())
    }

    fn place(&mut self, position: Position, mark: Player) -> Outcome {
        self.board = self.board.with_mark(position, mark);
        self.history.push(position);
        self.to_move = mark.opponent();
        self.outcome = evaluate(&self.board);
        if self.outcome.is_over() {
            info!(outcome = %self.outcome, board = %self.board, "Game over");
        }
        self.outcome
    }
}
