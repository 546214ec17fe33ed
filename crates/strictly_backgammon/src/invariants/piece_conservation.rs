//! Piece conservation: each side always owns exactly 15 pieces.

use super::Invariant;
use crate::board::Board;
use crate::types::{PIECES_PER_SIDE, Side};
use strum::IntoEnumIterator;
use tracing::warn;

/// Invariant: points + bar + goal add up to 15 for each side.
pub struct PieceConservationInvariant;

impl Invariant<Board> for PieceConservationInvariant {
    fn holds(board: &Board) -> bool {
        Side::iter().all(|side| {
            let total = board.total_pieces(side);
            let held = total == u32::from(PIECES_PER_SIDE);
            if !held {
                warn!(%side, total, "Piece conservation violated");
            }
            held
        })
    }

    fn description() -> &'static str {
        "Each side owns exactly 15 pieces across points, bar and goal"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Point;

    #[test]
    fn test_capture_keeps_totals() {
        let mut board = Board::standard();
        board.pop_piece(0, Side::Ascending);
        board.add_to_bar(Side::Ascending);
        assert!(PieceConservationInvariant::holds(&board));
    }

    #[test]
    fn test_lost_piece_violates() {
        let mut board = Board::standard();
        board.pop_piece(18, Side::Ascending);
        assert!(!PieceConservationInvariant::holds(&board));
    }

    #[test]
    fn test_huge_stacks_violate_without_overflow() {
        let mut board = Board::new();
        board.set_point(2, Point::Occupied { side: Side::Descending, count: 255 });
        board.set_point(3, Point::Occupied { side: Side::Descending, count: 255 });
        assert_eq!(board.total_pieces(Side::Descending), 510);
        assert!(!PieceConservationInvariant::holds(&board));
    }
}
