//! Legal move generation.
//!
//! The scanner is a pure function of board, side and dice. It is re-run after
//! every roll and every applied move; lists are never patched in place.

use crate::board::Board;
use crate::dice::Dice;
use crate::movement::{Destination, Movement, Source};
use crate::types::{POINTS, Side};
use tracing::{instrument, trace};

/// Every legal movement for `side` with the unconsumed dice.
///
/// While the bar holds pieces only entries are returned. Bear-offs appear only
/// when every piece of `side` is home.
#[instrument(skip(board, dice), fields(dice = ?dice.values()))]
pub fn legal_movements(board: &Board, side: Side, dice: &Dice) -> Vec<Movement> {
    let values = dice.unconsumed_values();
    if values.is_empty() {
        return Vec::new();
    }

    if board.bar(side) > 0 {
        return entry_movements(board, side, &values);
    }

    let bearing_off = board.all_pieces_home(side);
    let farthest = board.farthest_from_home(side);
    let mut movements = Vec::new();

    for index in 0..POINTS {
        if board.point(index).count_for(side) == 0 {
            continue;
        }

        for &die in &values {
            if let Some(target) = side.advance(index, die) {
                if !board.point(target).blocks(side) {
                    movements.push(Movement::new(
                        side,
                        Source::Point(index),
                        Destination::Point(target),
                        die,
                    ));
                }
            } else if bearing_off && may_bear_off(side, index, die, farthest) {
                movements.push(Movement::new(side, Source::Point(index), Destination::Goal, die));
            }
        }
    }

    trace!(count = movements.len(), "Scanned movements");
    movements
}

/// Movements whose source is `source`, as used to light up destinations.
pub fn movements_from(board: &Board, side: Side, dice: &Dice, source: Source) -> Vec<Movement> {
    legal_movements(board, side, dice)
        .into_iter()
        .filter(|m| m.source == source)
        .collect()
}

/// Distinct destinations reachable from `source`, used to mark the board.
pub fn destinations_from(
    board: &Board,
    side: Side,
    dice: &Dice,
    source: Source,
) -> Vec<Destination> {
    let mut destinations = Vec::new();
    for movement in movements_from(board, side, dice, source) {
        if !destinations.contains(&movement.destination) {
            destinations.push(movement.destination);
        }
    }
    destinations
}

/// True when `side` has at least one legal movement.
pub fn can_move(board: &Board, side: Side, dice: &Dice) -> bool {
    !legal_movements(board, side, dice).is_empty()
}

fn entry_movements(board: &Board, side: Side, values: &[u8]) -> Vec<Movement> {
    values
        .iter()
        .map(|&die| (die, side.entry_point(die)))
        .filter(|&(_, target)| !board.point(target).blocks(side))
        .map(|(die, target)| Movement::new(side, Source::Bar, Destination::Point(target), die))
        .collect()
}

/// Bear-off rule for a home piece at `index` with `die`.
///
/// An exact die always bears off. A larger die only bears off the rearmost
/// piece, the one at distance `farthest`.
fn may_bear_off(side: Side, index: usize, die: u8, farthest: Option<u8>) -> bool {
    let distance = side.distance_home(index);
    if die == distance {
        return true;
    }
    die > distance && farthest == Some(distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Point;

    fn home_board(side: Side, stacks: &[(usize, u8)]) -> Board {
        let mut board = Board::new();
        let mut on_board = 0;
        for &(index, count) in stacks {
            board.set_point(index, Point::Occupied { side, count });
            on_board += count;
        }
        board.set_goal(side, 15 - on_board);
        board
    }

    #[test]
    fn test_exact_bear_off() {
        let board = home_board(Side::Ascending, &[(20, 2), (22, 1)]);
        let dice = Dice::from_values(2, 4);
        let moves = legal_movements(&board, Side::Ascending, &dice);
        assert!(moves.contains(&Movement::new(
            Side::Ascending,
            Source::Point(22),
            Destination::Goal,
            2
        )));
        assert!(moves.contains(&Movement::new(
            Side::Ascending,
            Source::Point(20),
            Destination::Goal,
            4
        )));
    }

    #[test]
    fn test_overshoot_only_from_rearmost() {
        // Rearmost piece at distance 3 (point 2), a closer one at distance 1.
        let board = home_board(Side::Descending, &[(2, 1), (0, 1)]);
        let dice = Dice::from_values(5, 6);
        let moves = legal_movements(&board, Side::Descending, &dice);
        let bear_offs: Vec<_> = moves.iter().filter(|m| m.is_bear_off()).collect();
        assert_eq!(bear_offs.len(), 2);
        assert!(bear_offs.iter().all(|m| m.source == Source::Point(2)));
    }

    #[test]
    fn test_no_bear_off_with_straggler() {
        let mut board = home_board(Side::Ascending, &[(23, 3)]);
        board.set_point(10, Point::Occupied { side: Side::Ascending, count: 1 });
        board.set_goal(Side::Ascending, 11);
        let dice = Dice::from_values(1, 6);
        let moves = legal_movements(&board, Side::Ascending, &dice);
        assert!(moves.iter().all(|m| !m.is_bear_off()));
    }

    #[test]
    fn test_bar_entry_blocked_point_skipped() {
        let mut board = Board::standard();
        board.pop_piece(0, Side::Ascending);
        board.add_to_bar(Side::Ascending);
        // Descending holds point 5 with five pieces.
        let dice = Dice::from_values(6, 2);
        let moves = legal_movements(&board, Side::Ascending, &dice);
        assert_eq!(
            moves,
            vec![Movement::new(Side::Ascending, Source::Bar, Destination::Point(1), 2)]
        );
    }

    #[test]
    fn test_doubles_do_not_duplicate_moves() {
        let board = Board::standard();
        let dice = Dice::from_values(1, 1);
        let moves = legal_movements(&board, Side::Ascending, &dice);
        let unique: std::collections::HashSet<_> = moves.iter().collect();
        assert_eq!(moves.len(), unique.len());
        assert!(!moves.is_empty());
    }

    #[test]
    fn test_destinations_from_selected_point() {
        let board = Board::standard();
        let dice = Dice::from_values(3, 5);
        let destinations = destinations_from(&board, Side::Ascending, &dice, Source::Point(16));
        assert_eq!(destinations, vec![Destination::Point(19), Destination::Point(21)]);
        assert!(destinations_from(&board, Side::Ascending, &dice, Source::Point(1)).is_empty());
    }

    #[test]
    fn test_consumed_dice_yield_nothing() {
        let board = Board::standard();
        assert!(legal_movements(&board, Side::Ascending, &Dice::neutral()).is_empty());
    }
}
