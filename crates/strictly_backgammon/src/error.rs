//! Errors returned by the game state machine.

use crate::contracts::ContractViolation;
use crate::game::Status;

/// Rejected game operation.
///
/// Every rejection leaves the game untouched.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The operation is not valid in the current status.
    #[display("Expected status {}, game is in {}", expected, actual)]
    WrongStatus {
        /// Status the operation needs.
        expected: &'static str,
        /// Status the game is in.
        actual: Status,
    },

    /// The acting player is driven by the AI.
    #[display("The acting player is not human")]
    NotHumanTurn,

    /// No snapshot was taken this turn.
    #[display("Nothing to undo this turn")]
    NoUndoSnapshot,

    /// The match has already been decided.
    #[display("The match is over")]
    MatchOver,

    /// No match has been started.
    #[display("No match has been started")]
    NotStarted,

    /// Move generation and application disagreed.
    #[display("{}", _0)]
    Contract(ContractViolation),
}

impl std::error::Error for GameError {}

impl From<ContractViolation> for GameError {
    fn from(violation: ContractViolation) -> Self {
        Self::Contract(violation)
    }
}
