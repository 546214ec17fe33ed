//! Strictly Backgammon CLI - terminal driver for the rules engine
//!
//! # Architecture
//!
//! - **Cli**: clap commands `play` and `simulate`
//! - **Settings**: TOML match settings with command-line overrides
//! - **Command**: text commands typed by human players
//! - **Driver**: paced AI steps, the stdin loop and match summaries

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod command;
mod driver;
mod render;
mod settings;

// Crate-level exports - Command line
pub use cli::{Cli, Command, MatchArgs};

// Crate-level exports - Settings
pub use settings::{SettingsError, load_settings, parse_settings, resolve_settings, to_toml};

// Crate-level exports - Human input
pub use command::{CommandError, HELP, HumanCommand, execute};

// Crate-level exports - Drivers
pub use driver::{MAX_SIMULATION_STEPS, MatchSummary, play_match, simulate_match};
pub use render::{describe_event, render, status_line};
