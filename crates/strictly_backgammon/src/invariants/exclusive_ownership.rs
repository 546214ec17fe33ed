//! Exclusive ownership: an occupied point holds pieces of one side only.

use super::Invariant;
use crate::board::{Board, Point};
use crate::types::PIECES_PER_SIDE;

/// Invariant: every occupied point has between 1 and 15 pieces of its owner.
///
/// Ownership is a single side by construction; the count bound rules out
/// empty "occupied" points left behind by a bad capture.
pub struct ExclusiveOwnershipInvariant;

impl Invariant<Board> for ExclusiveOwnershipInvariant {
    fn holds(board: &Board) -> bool {
        board.points().iter().all(|point| match point {
            Point::Empty => true,
            Point::Occupied { count, .. } => (1..=PIECES_PER_SIDE).contains(count),
        })
    }

    fn description() -> &'static str {
        "Occupied points hold 1-15 pieces of a single side"
    }
}
