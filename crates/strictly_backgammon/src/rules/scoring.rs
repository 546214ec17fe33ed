//! Round scoring: single, gammon and backgammon wins.

use crate::board::Board;
use crate::types::Side;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// How a round was won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum WinKind {
    /// Loser had borne off at least one piece.
    Single,
    /// Loser had borne off nothing.
    Gammon,
    /// Gammon with a loser piece still on the bar or in the winner's home.
    Backgammon,
    /// Loser declined a double.
    Resigned,
}

impl WinKind {
    /// Points before the cube multiplier.
    pub fn base_points(self) -> u32 {
        match self {
            WinKind::Single | WinKind::Resigned => 1,
            WinKind::Gammon => 2,
            WinKind::Backgammon => 3,
        }
    }
}

/// Classifies a finished round won by `winner`.
#[instrument(skip(board))]
pub fn classify_win(board: &Board, winner: Side) -> WinKind {
    let loser = winner.opponent();
    if board.goal(loser) > 0 {
        return WinKind::Single;
    }
    if board.bar(loser) > 0 || board.has_piece_in_home_of(loser, winner) {
        WinKind::Backgammon
    } else {
        WinKind::Gammon
    }
}

/// Points earned by `winner`: base points times the cube multiplier.
pub fn compute_winner_points(board: &Board, winner: Side, multiplier: u32) -> (WinKind, u32) {
    let kind = classify_win(board, winner);
    (kind, kind.base_points() * multiplier)
}
