//! Strictly Backgammon - terminal driver
//!
//! Play against the built-in AI on stdin, or let it play itself.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::time::Duration;
use strictly_backgammon::{Backgammon, MatchSettings};
use strictly_backgammon_cli::{
    Cli, Command, MatchArgs, play_match, resolve_settings, simulate_match,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            common,
            hotseat,
            clockwise,
            name,
            delay_ms,
        } => run_play(common, hotseat, clockwise, name, delay_ms).await,
        Command::Simulate {
            common,
            matches,
            delay_ms,
            json,
        } => run_simulate(common, matches, delay_ms, json).await,
    }
}

/// Run an interactive match on stdin
#[instrument(skip(common, name))]
async fn run_play(
    common: MatchArgs,
    hotseat: bool,
    clockwise: bool,
    name: Option<String>,
    delay_ms: u64,
) -> Result<()> {
    let mut settings = resolve_settings(&common)?;
    if hotseat {
        settings = settings.with_player1_is_ai(false).with_player2_is_ai(false);
    }
    if clockwise {
        settings = settings.with_player1_clockwise(true);
    }
    if let Some(name) = name {
        settings = settings.with_player1_name(name);
    }

    let mut game = match common.seed {
        Some(seed) => Backgammon::seeded(seed),
        None => Backgammon::new(),
    };
    info!(target_score = *settings.target_score(), "Starting match");

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let winner = play_match(
        &mut game,
        settings,
        Duration::from_millis(delay_ms),
        stdin,
        std::io::stdout(),
    )
    .await?;

    match winner {
        Some(seat) => println!("{} wins the match", game.player(seat).name()),
        None => println!("Match abandoned"),
    }
    Ok(())
}

/// Run AI-versus-AI matches and print summaries
#[instrument(skip(common))]
async fn run_simulate(common: MatchArgs, matches: u32, delay_ms: u64, json: bool) -> Result<()> {
    let settings: MatchSettings = resolve_settings(&common)?;
    let base_seed = common.seed.unwrap_or_else(rand::random);
    let delay = Duration::from_millis(delay_ms);

    let mut summaries = Vec::new();
    for index in 0..matches {
        let seed = base_seed.wrapping_add(u64::from(index));
        let summary = simulate_match(settings.clone(), seed, delay).await?;
        if !json {
            println!(
                "match {} (seed {}): {} wins {} - {} in {} rounds",
                index + 1,
                seed,
                summary.winner_name(),
                summary.scores()[0],
                summary.scores()[1],
                summary.rounds(),
            );
        }
        summaries.push(summary);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    }
    Ok(())
}
