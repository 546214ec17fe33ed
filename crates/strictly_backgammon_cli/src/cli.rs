//! Command-line interface for the backgammon driver.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Backgammon - contract-checked backgammon in the terminal
#[derive(Parser, Debug)]
#[command(name = "backgammon")]
#[command(about = "Backgammon against the built-in AI, a friend, or itself", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every match-running command
#[derive(Args, Debug, Clone, Default)]
pub struct MatchArgs {
    /// TOML file with match settings
    #[arg(short, long)]
    pub settings: Option<PathBuf>,

    /// Score that ends the match (overrides the settings file)
    #[arg(long)]
    pub target_score: Option<u32>,

    /// Seed for reproducible dice and AI choices
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a match on stdin
    Play {
        /// Shared match options
        #[command(flatten)]
        common: MatchArgs,

        /// Both seats are human (hot seat)
        #[arg(long)]
        hotseat: bool,

        /// Player 1 moves clockwise, from point 23 towards point 0
        #[arg(long)]
        clockwise: bool,

        /// Display name of player 1
        #[arg(long)]
        name: Option<String>,

        /// Pause before each AI step, in milliseconds
        #[arg(long, default_value = "600")]
        delay_ms: u64,
    },

    /// Let the AI play itself
    Simulate {
        /// Shared match options
        #[command(flatten)]
        common: MatchArgs,

        /// Number of matches to play
        #[arg(short, long, default_value = "1")]
        matches: u32,

        /// Pause between AI steps, in milliseconds
        #[arg(long, default_value = "0")]
        delay_ms: u64,

        /// Print match summaries as JSON
        #[arg(long)]
        json: bool,
    },
}
