//! Text commands typed by a human player.

use derive_more::Display;
use rand::Rng;
use std::str::FromStr;
use strictly_backgammon::{Backgammon, Destination, GameError, Selection, Source};
use tracing::{debug, instrument};

/// Help text listing every command.
pub const HELP: &str = "\
commands:
  roll               roll the dice
  double             offer the doubling cube
  accept | decline   answer a double
  move <from> <to>   play a piece; <from> is 0-23 or bar, <to> is 0-23 or off
  select <from>      mark where a piece can go
  to <to>            play the selected piece
  moves              list legal movements
  end                finish the turn
  undo               take back this turn's moves
  board              redraw the board
  help               show this text
  quit               leave the match";

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HumanCommand {
    /// Roll the dice.
    Roll,
    /// Offer a double.
    Double,
    /// Take a pending double.
    Accept,
    /// Refuse a pending double.
    Decline,
    /// Select and play in one go.
    Move {
        /// Piece to move.
        from: Source,
        /// Where it goes.
        to: Destination,
    },
    /// Select a source.
    Select(Source),
    /// Play the selected source.
    To(Destination),
    /// List legal movements.
    Moves,
    /// Confirm the end of the turn.
    End,
    /// Undo the turn.
    Undo,
    /// Redraw the board.
    Board,
    /// Show help.
    Help,
    /// Leave.
    Quit,
}

/// A line that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CommandError {
    /// Unrecognized verb.
    #[display("Unknown command '{}', type help", _0)]
    Unknown(String),
    /// A source that is neither a point nor the bar.
    #[display("Expected a point 0-23 or 'bar', got '{}'", _0)]
    BadSource(String),
    /// A destination that is neither a point nor off.
    #[display("Expected a point 0-23 or 'off', got '{}'", _0)]
    BadDestination(String),
    /// A verb without its argument.
    #[display("'{}' needs an argument", _0)]
    MissingArgument(&'static str),
}

impl std::error::Error for CommandError {}

fn point(token: &str) -> Option<usize> {
    token.parse::<usize>().ok().filter(|index| *index < 24)
}

fn parse_source(token: Option<&str>, verb: &'static str) -> Result<Source, CommandError> {
    let token = token.ok_or(CommandError::MissingArgument(verb))?;
    if token.eq_ignore_ascii_case("bar") {
        return Ok(Source::Bar);
    }
    point(token)
        .map(Source::Point)
        .ok_or_else(|| CommandError::BadSource(token.to_string()))
}

fn parse_destination(token: Option<&str>, verb: &'static str) -> Result<Destination, CommandError> {
    let token = token.ok_or(CommandError::MissingArgument(verb))?;
    if token.eq_ignore_ascii_case("off") {
        return Ok(Destination::Goal);
    }
    point(token)
        .map(Destination::Point)
        .ok_or_else(|| CommandError::BadDestination(token.to_string()))
}

impl FromStr for HumanCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let verb = tokens.next().unwrap_or_default().to_ascii_lowercase();
        let command = match verb.as_str() {
            "roll" | "r" => HumanCommand::Roll,
            "double" => HumanCommand::Double,
            "accept" | "take" => HumanCommand::Accept,
            "decline" | "drop" => HumanCommand::Decline,
            "move" | "m" => HumanCommand::Move {
                from: parse_source(tokens.next(), "move")?,
                to: parse_destination(tokens.next(), "move")?,
            },
            "select" | "s" => HumanCommand::Select(parse_source(tokens.next(), "select")?),
            "to" => HumanCommand::To(parse_destination(tokens.next(), "to")?),
            "moves" => HumanCommand::Moves,
            "end" | "e" => HumanCommand::End,
            "undo" | "u" => HumanCommand::Undo,
            "board" | "b" => HumanCommand::Board,
            "help" | "?" => HumanCommand::Help,
            "quit" | "q" | "exit" => HumanCommand::Quit,
            _ => return Err(CommandError::Unknown(line.trim().to_string())),
        };
        Ok(command)
    }
}

fn describe(selection: Selection) -> String {
    match selection {
        Selection::Moved(applied) if applied.captured => {
            format!("Played {} and hit", applied.movement)
        }
        Selection::Moved(applied) => format!("Played {}", applied.movement),
        Selection::Selected(destinations) => {
            let list = destinations
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            format!("Can reach: {list}")
        }
        Selection::Ignored => "Nothing playable there".to_string(),
    }
}

/// Runs a command against the game and describes what happened.
///
/// `Board`, `Help` and `Quit` are handled by the caller and answer with
/// an empty string here.
#[instrument(skip(game))]
pub fn execute<R: Rng>(
    game: &mut Backgammon<R>,
    command: HumanCommand,
) -> Result<String, GameError> {
    debug!("Executing human command");
    let message = match command {
        HumanCommand::Roll => {
            game.roll_dice()?;
            let [a, b] = game.dice().values();
            format!("Rolled {a} and {b}")
        }
        HumanCommand::Double => {
            if game.request_double()? {
                "Double offered".to_string()
            } else {
                "The cube cannot be offered now".to_string()
            }
        }
        HumanCommand::Accept => {
            game.respond_double(true)?;
            "Double accepted".to_string()
        }
        HumanCommand::Decline => {
            game.respond_double(false)?;
            "Double declined".to_string()
        }
        HumanCommand::Move { from, to } => match game.select_source(from)? {
            Selection::Ignored => format!("Nothing playable from {from}"),
            Selection::Selected(_) => describe(game.select_destination(to)?),
            moved => describe(moved),
        },
        HumanCommand::Select(source) => describe(game.select_source(source)?),
        HumanCommand::To(destination) => describe(game.select_destination(destination)?),
        HumanCommand::Moves => {
            let movements = game.legal_movements();
            if movements.is_empty() {
                "No legal movements".to_string()
            } else {
                movements
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
        HumanCommand::End => {
            game.confirm_end_turn()?;
            "Turn ended".to_string()
        }
        HumanCommand::Undo => {
            game.undo_turn()?;
            "Turn undone".to_string()
        }
        HumanCommand::Board | HumanCommand::Help | HumanCommand::Quit => String::new(),
    };
    Ok(message)
}
