//! Notifications emitted by the game for front ends.

use crate::game::RoundResult;
use crate::movement::Movement;
use crate::types::{Seat, Side};
use serde::{Deserialize, Serialize};

/// Something a front end may want to redraw or announce.
///
/// Events queue inside the game until drained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A player's turn began at the roll.
    TurnStarted {
        /// Player to act.
        seat: Seat,
        /// Side that player moves.
        side: Side,
    },
    /// Dice were rolled.
    DiceRolled {
        /// Player who rolled.
        seat: Seat,
        /// Both faces.
        values: [u8; 2],
    },
    /// The roll left nothing to play.
    NoLegalMoves {
        /// Player who rolled.
        seat: Seat,
    },
    /// A piece moved.
    MoveApplied {
        /// Player who moved.
        seat: Seat,
        /// The movement.
        movement: Movement,
        /// An opposing blot went to the bar.
        captured: bool,
    },
    /// A player's turn is over.
    TurnEnded {
        /// Player whose turn ended.
        seat: Seat,
    },
    /// A double is waiting for an answer.
    DoubleOffered {
        /// Player offering.
        by: Seat,
        /// Stake the offerer holds if accepted.
        stake: u32,
    },
    /// A double was answered.
    DoubleResolved {
        /// Player who offered.
        by: Seat,
        /// True when the opponent took the double.
        accepted: bool,
        /// Multiplier in force afterwards.
        multiplier: u32,
    },
    /// The turn was rolled back to its start.
    TurnUndone {
        /// Player who undid.
        seat: Seat,
    },
    /// A round finished.
    RoundEnded(RoundResult),
    /// A player reached the target score.
    MatchEnded {
        /// Match winner.
        winner: Seat,
        /// Winner's final score.
        score: u32,
    },
    /// An AI player is expected to act; the driver should call `step_ai`.
    AiToAct {
        /// Seat of the AI.
        seat: Seat,
    },
}
