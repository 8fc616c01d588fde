//! Line-based game against the AI.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use strictly_tictactoe::{Position, RandomSource, Session};
use tracing::{debug, info, instrument};

/// What the player typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Move(Position),
    Restart,
    Quit,
}

fn parse_input(line: &str) -> Option<Input> {
    match line.trim().to_lowercase().as_str() {
        "q" | "quit" | "exit" => Some(Input::Quit),
        "r" | "restart" => Some(Input::Restart),
        other => Position::from_label_or_number(other).map(Input::Move),
    }
}

/// Runs the game loop until the player quits or input ends.
#[instrument(skip_all, fields(human = %session.human()))]
pub fn run<I, O, R>(
    mut session: Session,
    swap_on_restart: bool,
    rng: &mut R,
    input: I,
    out: &mut O,
) -> Result<Session>
where
    I: BufRead,
    O: Write,
    R: RandomSource + ?Sized,
{
    info!("Starting interactive game");
    writeln!(out, "You are {}. Enter 0-8 or a position name; r restarts, q quits.", session.human())?;
    ai_turn(&mut session, rng, out)?;
    prompt(&session, out)?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        match parse_input(&line) {
            Some(Input::Quit) => break,
            Some(Input::Restart) => {
                session.restart(swap_on_restart);
                writeln!(out, "New game. You are {}.", session.human())?;
                ai_turn(&mut session, rng, out)?;
            }
            Some(Input::Move(position)) => match session.play_human(position) {
                Ok(_) => ai_turn(&mut session, rng, out)?,
                Err(e) => {
                    debug!(error = %e, "Rejected move");
                    writeln!(out, "{}", e)?;
                }
            },
            None => writeln!(out, "Unrecognized input: {:?}", line.trim())?,
        }
        prompt(&session, out)?;
    }

    Ok(session)
}

fn ai_turn<O, R>(session: &mut Session, rng: &mut R, out: &mut O) -> Result<()>
where
    O: Write,
    R: RandomSource + ?Sized,
{
    if !session.awaiting_ai() {
        return Ok(());
    }
    if let Some(position) = session.play_ai(rng)? {
        writeln!(out, "AI plays {} ({}).", position, position.to_index())?;
    }
    Ok(())
}

fn prompt<O: Write>(session: &Session, out: &mut O) -> Result<()> {
    writeln!(out, "\n{}\n", session.board().grid())?;
    match session.verdict() {
        Some(verdict) => writeln!(out, "{} Type r to play again or q to quit.", verdict)?,
        None => writeln!(out, "Your move ({}):", session.human())?,
    }
    out.flush()?;
    Ok(())
}
