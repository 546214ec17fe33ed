//! Player strategies.
//!
//! A strategy is consulted whenever its player is expected to act. Humans
//! only expose what they may do next; the AI plays synchronously.

mod ai;
mod human;

pub use ai::{Ai, accept_probability, offer_probability};
pub use human::Human;

use crate::error::GameError;
use crate::game::Backgammon;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// What a strategy did when asked to act.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Reaction {
    /// Nothing happened; input is awaited.
    Waiting,
    /// The strategy advanced the game.
    Continue,
    /// A pending double was taken.
    Accept,
    /// A pending double was refused.
    Decline,
}

/// Interaction flags a front end should enable for a human.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Affordances {
    /// Dice may be rolled.
    pub roll: bool,
    /// A double may be offered.
    pub double: bool,
    /// A pending double awaits accept or decline.
    pub respond: bool,
    /// Pieces may be selected and moved.
    pub points: bool,
    /// The turn may be confirmed as finished.
    pub end_turn: bool,
    /// The turn may be rolled back.
    pub undo: bool,
}

/// Trait for anything that can act for a player.
pub trait Strategy {
    /// Acts for the player expected to move in `game`.
    ///
    /// `double_request` is true when that player must answer a double.
    fn act<R: Rng>(
        &self,
        game: &mut Backgammon<R>,
        double_request: bool,
    ) -> Result<Reaction, GameError>;

    /// Short label for logs.
    fn name(&self) -> &'static str;
}

/// Which strategy drives a player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
)]
pub enum PlayerKind {
    /// Input comes from a person.
    #[default]
    Human,
    /// The built-in random-mover.
    Ai,
}

impl PlayerKind {
    /// Kind for a settings flag.
    pub fn from_is_ai(is_ai: bool) -> Self {
        if is_ai { PlayerKind::Ai } else { PlayerKind::Human }
    }
}

impl Strategy for PlayerKind {
    fn act<R: Rng>(
        &self,
        game: &mut Backgammon<R>,
        double_request: bool,
    ) -> Result<Reaction, GameError> {
        match self {
            PlayerKind::Human => Human.act(game, double_request),
            PlayerKind::Ai => Ai::default().act(game, double_request),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            PlayerKind::Human => Human.name(),
            PlayerKind::Ai => Ai::default().name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_follow_strategy() {
        assert_eq!(PlayerKind::Human.name(), Human.name());
        assert_eq!(PlayerKind::from_is_ai(true).name(), "ai");
        assert_eq!(PlayerKind::from_is_ai(false).name(), "human");
    }
}
