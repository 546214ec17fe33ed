//! Match settings chosen before a game starts.

use crate::types::{PieceColor, Side};
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Settings for a match.
///
/// Player 2 always takes the side and color player 1 does not.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_", into)]
pub struct MatchSettings {
    /// Score that ends the match.
    #[serde(default = "default_target_score")]
    target_score: u32,

    /// Display name of player 1.
    #[serde(default = "default_player1_name")]
    player1_name: String,

    /// Display name of player 2.
    #[serde(default = "default_player2_name")]
    player2_name: String,

    /// Player 1 is driven by the AI strategy.
    #[serde(default)]
    player1_is_ai: bool,

    /// Player 2 is driven by the AI strategy.
    #[serde(default = "default_player2_is_ai")]
    player2_is_ai: bool,

    /// Player 1 moves clockwise, from point 23 towards point 0.
    #[serde(default)]
    player1_clockwise: bool,

    /// Piece color of player 1.
    #[serde(default)]
    player1_piece_color: PieceColor,
}

#[instrument]
fn default_target_score() -> u32 {
    15
}

#[instrument]
fn default_player1_name() -> String {
    "Human".to_string()
}

#[instrument]
fn default_player2_name() -> String {
    "AI".to_string()
}

#[instrument]
fn default_player2_is_ai() -> bool {
    true
}

impl MatchSettings {
    /// Side moved by player 1.
    pub fn player1_side(&self) -> Side {
        if self.player1_clockwise {
            Side::Descending
        } else {
            Side::Ascending
        }
    }

    /// Side moved by player 2.
    pub fn player2_side(&self) -> Side {
        self.player1_side().opponent()
    }

    /// Piece color of player 2.
    pub fn player2_piece_color(&self) -> PieceColor {
        self.player1_piece_color.other()
    }
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            target_score: default_target_score(),
            player1_name: default_player1_name(),
            player2_name: default_player2_name(),
            player1_is_ai: false,
            player2_is_ai: default_player2_is_ai(),
            player1_clockwise: false,
            player1_piece_color: PieceColor::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_serde_defaults() {
        let parsed: MatchSettings = serde_json::from_str("{}").expect("empty object");
        assert_eq!(parsed, MatchSettings::default());
        assert_eq!(*parsed.target_score(), 15);
        assert_eq!(parsed.player1_name(), "Human");
        assert!(*parsed.player2_is_ai());
    }

    #[test]
    fn test_clockwise_swaps_sides() {
        let settings = MatchSettings::default().with_player1_clockwise(true);
        assert_eq!(settings.player1_side(), Side::Descending);
        assert_eq!(settings.player2_side(), Side::Ascending);
    }

    #[test]
    fn test_player2_gets_other_color() {
        let settings = MatchSettings::default().with_player1_piece_color(PieceColor::White);
        assert_eq!(settings.player2_piece_color(), PieceColor::Black);
    }
}
