//! Match drivers: paced AI steps and the stdin loop.
//!
//! The engine never sleeps. Drivers decide how long to wait before each
//! AI step and when to deal the next round.

use crate::command::{HELP, HumanCommand, execute};
use crate::render::{describe_event, render, status_line};
use anyhow::{Result, bail};
use derive_getters::Getters;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::time::Duration;
use strictly_backgammon::{Backgammon, GameEvent, MatchSettings, RoundResult, Seat, Status};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, instrument, warn};

/// Upper bound on AI steps in one simulated match.
pub const MAX_SIMULATION_STEPS: usize = 1_000_000;

/// Outcome of one finished match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct MatchSummary {
    /// Seed the dice were drawn from.
    seed: u64,
    /// Rounds dealt.
    rounds: u32,
    /// Winning seat.
    winner: Seat,
    /// Winner's name.
    winner_name: String,
    /// Final scores by seat.
    scores: [u32; 2],
    /// Every round result in order.
    results: Vec<RoundResult>,
}

/// Plays an AI-versus-AI match to the end.
///
/// Both seats are forced to the AI whatever `settings` says.
#[instrument(skip(settings))]
pub async fn simulate_match(
    settings: MatchSettings,
    seed: u64,
    delay: Duration,
) -> Result<MatchSummary> {
    let settings = settings.with_player1_is_ai(true).with_player2_is_ai(true);
    let mut game = Backgammon::seeded(seed);
    game.start_new_game(settings);
    let mut results = Vec::new();

    for _ in 0..MAX_SIMULATION_STEPS {
        for event in game.drain_events() {
            if let GameEvent::RoundEnded(result) = event {
                debug!(winner = ?result.winner(), points = *result.points(), "Round recorded");
                results.push(result);
            }
        }

        if let Some(winner) = game.match_winner() {
            let summary = MatchSummary {
                seed,
                rounds: game.round(),
                winner,
                winner_name: game.player(winner).name().to_string(),
                scores: [game.player(Seat::One).score(), game.player(Seat::Two).score()],
                results,
            };
            info!(
                ?winner,
                scores = ?summary.scores,
                rounds = summary.rounds,
                "Simulation finished"
            );
            return Ok(summary);
        }

        if game.status() == Status::NotPlaying {
            game.start_next_round()?;
            continue;
        }
        if !game.step_ai()? {
            bail!("No AI due in an AI-only match");
        }
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    bail!("Match with seed {seed} did not finish within {MAX_SIMULATION_STEPS} steps")
}

fn announce<R: Rng, W: Write>(game: &mut Backgammon<R>, out: &mut W) -> Result<bool> {
    let mut redraw = false;
    for event in game.drain_events() {
        if let Some(line) = describe_event(game, &event) {
            writeln!(out, "{line}")?;
        }
        redraw |= matches!(
            event,
            GameEvent::TurnStarted { .. } | GameEvent::TurnUndone { .. } | GameEvent::RoundEnded(_)
        );
    }
    Ok(redraw)
}

/// Plays a match reading human commands from `input`.
///
/// AI seats are stepped after waiting `delay`. Returns the match winner, or
/// `None` if the player quit or input ran out first.
#[instrument(skip(game, input, out))]
pub async fn play_match<R, I, W>(
    game: &mut Backgammon<R>,
    settings: MatchSettings,
    delay: Duration,
    input: I,
    mut out: W,
) -> Result<Option<Seat>>
where
    R: Rng,
    I: AsyncBufRead + Unpin,
    W: Write,
{
    game.start_new_game(settings);
    let mut lines = input.lines();
    writeln!(out, "{}", render(game))?;

    loop {
        if announce(game, &mut out)? {
            writeln!(out, "{}", render(game))?;
        }

        if let Some(winner) = game.match_winner() {
            return Ok(Some(winner));
        }

        if game.status() == Status::NotPlaying {
            game.start_next_round()?;
            continue;
        }

        if game.ai_to_act().is_some() {
            tokio::time::sleep(delay).await;
            game.step_ai()?;
            continue;
        }

        write!(out, "{}> ", status_line(game))?;
        out.flush()?;
        let Some(line) = lines.next_line().await? else {
            info!("Input closed");
            return Ok(None);
        };
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<HumanCommand>() {
            Ok(HumanCommand::Quit) => return Ok(None),
            Ok(HumanCommand::Help) => writeln!(out, "{HELP}")?,
            Ok(HumanCommand::Board) => writeln!(out, "{}", render(game))?,
            Ok(command) => match execute(game, command) {
                Ok(message) => writeln!(out, "{message}")?,
                Err(err) => {
                    warn!(%err, "Command rejected");
                    writeln!(out, "{err}")?;
                }
            },
            Err(err) => writeln!(out, "{err}")?,
        }
    }
}
