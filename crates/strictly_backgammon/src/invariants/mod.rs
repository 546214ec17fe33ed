//! First-class invariants for backgammon.
//!
//! Invariants are logical properties that hold at every reachable state.
//! The applier checks the board after each move and the game checks the
//! cube after each accepted double, both in debug builds. The tests check
//! them after every step of simulated matches.

pub mod cube_stakes;
pub mod exclusive_ownership;
pub mod piece_conservation;

pub use cube_stakes::CubeStakesInvariant;
pub use exclusive_ownership::ExclusiveOwnershipInvariant;
pub use piece_conservation::PieceConservationInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariants every board must satisfy.
pub type BoardInvariants = (PieceConservationInvariant, ExclusiveOwnershipInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Point};
    use crate::types::Side;

    #[test]
    fn test_board_invariants_hold_for_opening() {
        assert!(BoardInvariants::check_all(&Board::standard()).is_ok());
    }

    #[test]
    fn test_board_invariants_report_each_violation() {
        let mut board = Board::standard();
        board.set_point(3, Point::Occupied { side: Side::Ascending, count: 0 });
        board.set_point(9, Point::Occupied { side: Side::Descending, count: 1 });

        let violations = BoardInvariants::check_all(&board).unwrap_err();
        assert_eq!(violations.len(), 2);
    }
}
