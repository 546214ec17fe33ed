//! Players at the table.

use crate::strategy::PlayerKind;
use crate::types::{PieceColor, Side};
use serde::{Deserialize, Serialize};

/// A player's identity and match score.
///
/// The side is fixed for the whole match; the color is display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    color: PieceColor,
    side: Side,
    score: u32,
    kind: PlayerKind,
}

impl Player {
    /// Creates a player with a score of zero.
    pub fn new(name: impl Into<String>, color: PieceColor, side: Side, kind: PlayerKind) -> Self {
        Self {
            name: name.into(),
            color,
            side,
            score: 0,
            kind,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Piece color.
    pub fn color(&self) -> PieceColor {
        self.color
    }

    /// Side this player moves.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Cumulative match score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Strategy driving this player.
    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    /// True when the AI strategy drives this player.
    pub fn is_ai(&self) -> bool {
        self.kind == PlayerKind::Ai
    }

    pub(crate) fn add_points(&mut self, points: u32) {
        self.score += points;
    }
}
