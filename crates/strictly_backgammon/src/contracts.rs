//! Contract-checked move application.
//!
//! The scanner's output is the applier's only legal input. Preconditions are
//! checked on every application; a failure means scanner and applier disagree
//! and is reported as a [`ContractViolation`] before anything is mutated.
//! Postconditions run in debug builds.

use crate::board::Board;
use crate::dice::{Dice, DiceError};
#[cfg(debug_assertions)]
use crate::invariants::{BoardInvariants, InvariantSet};
use crate::movement::{Destination, Movement, Source};
use tracing::{debug, error, instrument};

/// A generator/applier desynchronization.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ContractViolation {
    /// The source holds no piece of the moving side.
    #[display("No piece to move at {}", _0)]
    EmptySource(Source),

    /// A board piece was moved while the bar still holds pieces.
    #[display("Bar must be emptied before moving {}", _0)]
    BarNotEmpty(Source),

    /// No unconsumed die matches the movement.
    #[display("{}", _0)]
    Dice(DiceError),

    /// The destination is held by two or more opposing pieces.
    #[display("Destination {} is blocked", _0)]
    Blocked(Destination),

    /// Source, destination and die do not agree.
    #[display("Movement {} does not travel its die", _0)]
    WrongDistance(Movement),

    /// Bearing off while pieces remain outside home, or overshooting from a non-rearmost point.
    #[display("Bear-off not allowed: {}", _0)]
    BearOffNotAllowed(Movement),

    /// A board invariant failed after the move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for ContractViolation {}

impl From<DiceError> for ContractViolation {
    fn from(err: DiceError) -> Self {
        Self::Dice(err)
    }
}

/// Outcome of applying a movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Applied {
    /// The movement that was played.
    pub movement: Movement,
    /// True when an opposing blot was sent to the bar.
    pub captured: bool,
}

// ─────────────────────────────────────────────────────────────
//  Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the source holds a piece of the mover, and the bar rule holds.
pub struct SourceHasPiece;

impl SourceHasPiece {
    /// Checks the source of `movement`.
    pub fn check(movement: &Movement, board: &Board) -> Result<(), ContractViolation> {
        let side = movement.side;
        match movement.source {
            Source::Bar if board.bar(side) == 0 => Err(ContractViolation::EmptySource(Source::Bar)),
            Source::Point(_) if board.bar(side) > 0 => {
                Err(ContractViolation::BarNotEmpty(movement.source))
            }
            Source::Point(index) if board.point(index).count_for(side) == 0 => {
                Err(ContractViolation::EmptySource(movement.source))
            }
            _ => Ok(()),
        }
    }
}

/// Precondition: an unconsumed die shows the movement's value.
pub struct DieAvailable;

impl DieAvailable {
    /// Checks the die of `movement`.
    pub fn check(movement: &Movement, dice: &Dice) -> Result<(), ContractViolation> {
        if dice.has_unconsumed(movement.die) {
            Ok(())
        } else {
            Err(DiceError::NoMatchingDie(movement.die).into())
        }
    }
}

/// Precondition: the piece travels exactly its die and lands somewhere open.
pub struct DestinationReachable;

impl DestinationReachable {
    /// Checks the destination of `movement`.
    pub fn check(movement: &Movement, board: &Board) -> Result<(), ContractViolation> {
        let side = movement.side;
        match (movement.source, movement.destination) {
            (Source::Bar, Destination::Point(target)) => {
                if side.entry_point(movement.die) != target {
                    return Err(ContractViolation::WrongDistance(*movement));
                }
                Self::open(movement, board, target)
            }
            (Source::Point(index), Destination::Point(target)) => {
                if side.advance(index, movement.die) != Some(target) {
                    return Err(ContractViolation::WrongDistance(*movement));
                }
                Self::open(movement, board, target)
            }
            (Source::Point(index), Destination::Goal) => {
                let distance = side.distance_home(index);
                let rearmost = board.farthest_from_home(side) == Some(distance);
                let fits = movement.die == distance || (movement.die > distance && rearmost);
                if board.all_pieces_home(side) && fits {
                    Ok(())
                } else {
                    Err(ContractViolation::BearOffNotAllowed(*movement))
                }
            }
            (Source::Bar, Destination::Goal) => Err(ContractViolation::WrongDistance(*movement)),
        }
    }

    fn open(movement: &Movement, board: &Board, target: usize) -> Result<(), ContractViolation> {
        if board.point(target).blocks(movement.side) {
            Err(ContractViolation::Blocked(movement.destination))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition for any movement.
pub struct LegalMovement;

impl LegalMovement {
    /// Validates all preconditions for a movement.
    #[instrument(skip(board, dice))]
    pub fn check(movement: &Movement, board: &Board, dice: &Dice) -> Result<(), ContractViolation> {
        SourceHasPiece::check(movement, board)?;
        DieAvailable::check(movement, dice)?;
        DestinationReachable::check(movement, board)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Application
// ─────────────────────────────────────────────────────────────

/// Applies `movement` to the board and consumes its die.
///
/// # Errors
///
/// Returns a [`ContractViolation`] if the movement could not have come from
/// the scanner for this board and dice. Nothing is mutated in that case.
#[instrument(skip(board, dice), fields(movement = %movement))]
pub fn apply(
    board: &mut Board,
    dice: &mut Dice,
    movement: Movement,
) -> Result<Applied, ContractViolation> {
    if let Err(violation) = LegalMovement::check(&movement, board, dice) {
        error!(%violation, "Movement rejected by contract");
        return Err(violation);
    }

    let side = movement.side;
    match movement.source {
        Source::Bar => board.take_from_bar(side),
        Source::Point(index) => board.pop_piece(index, side),
    }
    dice.consume(movement.die)?;

    let captured = match movement.destination {
        Destination::Goal => {
            board.add_to_goal(side);
            false
        }
        Destination::Point(target) => {
            let hit = board.point(target).is_blot_against(side);
            if hit {
                board.pop_piece(target, side.opponent());
                board.add_to_bar(side.opponent());
            }
            board.push_piece(target, side);
            hit
        }
    };

    #[cfg(debug_assertions)]
    if let Err(violations) = BoardInvariants::check_all(board) {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        error!(%descriptions, "Postcondition failed");
        return Err(ContractViolation::InvariantViolation(descriptions));
    }

    debug!(captured, "Movement applied");
    Ok(Applied { movement, captured })
}
