//! Board state: the 24-point track, bars, goals and destination marks.

use crate::types::{HOME_WIDTH, PIECES_PER_SIDE, POINTS, Side};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Occupancy of a single point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Point {
    /// No pieces.
    #[default]
    Empty,
    /// One or more pieces of a single side.
    Occupied {
        /// Owner of every piece on the point.
        side: Side,
        /// Pieces stacked here, never zero.
        count: u8,
    },
}

impl Point {
    /// Owner of the point, if any.
    pub fn owner(self) -> Option<Side> {
        match self {
            Point::Empty => None,
            Point::Occupied { side, .. } => Some(side),
        }
    }

    /// Pieces on the point regardless of owner.
    pub fn count(self) -> u8 {
        match self {
            Point::Empty => 0,
            Point::Occupied { count, .. } => count,
        }
    }

    /// Pieces `side` has on this point.
    pub fn count_for(self, side: Side) -> u8 {
        match self {
            Point::Occupied { side: owner, count } if owner == side => count,
            _ => 0,
        }
    }

    /// True when two or more opposing pieces make the point unplayable for `side`.
    pub fn blocks(self, side: Side) -> bool {
        matches!(self, Point::Occupied { side: owner, count } if owner != side && count >= 2)
    }

    /// True when exactly one opposing piece sits here.
    pub fn is_blot_against(self, side: Side) -> bool {
        matches!(self, Point::Occupied { side: owner, count: 1 } if owner != side)
    }

    /// Signed view: positive for ascending pieces, negative for descending.
    pub fn signed(self) -> i8 {
        match self {
            Point::Empty => 0,
            Point::Occupied { side, count } => side.direction() * count as i8,
        }
    }
}

/// Copy of the piece layout taken at the start of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    points: [Point; POINTS],
    bar: [u8; 2],
    goal: [u8; 2],
}

/// The full piece layout plus presentation marks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    points: [Point; POINTS],
    bar: [u8; 2],
    goal: [u8; 2],
    marks: [bool; POINTS],
    goal_mark: bool,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            points: [Point::Empty; POINTS],
            bar: [0; 2],
            goal: [0; 2],
            marks: [false; POINTS],
            goal_mark: false,
        }
    }

    /// Creates a board in the opening arrangement.
    pub fn standard() -> Self {
        let mut board = Self::new();
        board.initialize_standard_layout();
        board
    }

    /// Clears every point, bar, goal and mark.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Places the 15-per-side opening arrangement on a cleared board.
    ///
    /// Each side gets 2 pieces on its farthest point, 5 at the far end of the
    /// opponent's outer half, 3 in its own outer half and 5 on the edge of
    /// its home.
    #[instrument(skip(self))]
    pub fn initialize_standard_layout(&mut self) {
        self.reset();
        for side in Side::iter() {
            for (distance, count) in [(24, 2), (13, 5), (8, 3), (6, 5)] {
                let index = match side {
                    Side::Ascending => POINTS - distance,
                    Side::Descending => distance - 1,
                };
                self.points[index] = Point::Occupied { side, count };
            }
        }
        debug!("Standard layout placed");
    }

    /// Point at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 24 or more.
    pub fn point(&self, index: usize) -> Point {
        self.points[index]
    }

    /// All 24 points.
    pub fn points(&self) -> &[Point; POINTS] {
        &self.points
    }

    /// Signed occupancy for renderers: positive ascending, negative descending.
    pub fn signed_occupancy(&self) -> [i8; POINTS] {
        self.points.map(Point::signed)
    }

    /// Pieces `side` has waiting on the bar.
    pub fn bar(&self, side: Side) -> u8 {
        self.bar[side.slot()]
    }

    /// Pieces `side` has borne off.
    pub fn goal(&self, side: Side) -> u8 {
        self.goal[side.slot()]
    }

    /// Pieces `side` has on the 24 points.
    pub fn pieces_on_board(&self, side: Side) -> u32 {
        self.points.iter().map(|p| u32::from(p.count_for(side))).sum()
    }

    /// Every piece of `side`, wherever it is.
    ///
    /// Counted wide so a hand-built board cannot overflow.
    pub fn total_pieces(&self, side: Side) -> u32 {
        self.pieces_on_board(side) + u32::from(self.bar(side)) + u32::from(self.goal(side))
    }

    /// True when every piece of `side` is borne off.
    pub fn all_borne_off(&self, side: Side) -> bool {
        self.goal(side) >= PIECES_PER_SIDE
    }

    /// True when `side` has an empty bar and no piece outside its home.
    #[instrument(skip(self))]
    pub fn all_pieces_home(&self, side: Side) -> bool {
        self.bar(side) == 0
            && self
                .points
                .iter()
                .enumerate()
                .all(|(index, p)| p.count_for(side) == 0 || side.is_home(index))
    }

    /// Distance to off-board of the rearmost piece `side` has on the points.
    ///
    /// Scanned fresh on every call since the layout changes after each move.
    pub fn farthest_from_home(&self, side: Side) -> Option<u8> {
        self.points
            .iter()
            .enumerate()
            .filter(|(_, p)| p.count_for(side) > 0)
            .map(|(index, _)| side.distance_home(index))
            .max()
    }

    /// Total pips `side` needs to bear everything off; bar pieces count 24.
    pub fn pip_count(&self, side: Side) -> u32 {
        let on_board: u32 = self
            .points
            .iter()
            .enumerate()
            .map(|(index, p)| p.count_for(side) as u32 * side.distance_home(index) as u32)
            .sum();
        on_board + self.bar(side) as u32 * POINTS as u32
    }

    /// True when `side` still has a piece in the home territory of `home_of`.
    pub fn has_piece_in_home_of(&self, side: Side, home_of: Side) -> bool {
        let range = match home_of {
            Side::Ascending => POINTS - HOME_WIDTH..POINTS,
            Side::Descending => 0..HOME_WIDTH,
        };
        range.into_iter().any(|index| self.points[index].count_for(side) > 0)
    }

    /// Destination marks for the current selection.
    pub fn marks(&self) -> &[bool; POINTS] {
        &self.marks
    }

    /// True when bearing off is a marked destination.
    pub fn goal_marked(&self) -> bool {
        self.goal_mark
    }

    /// Removes every destination mark.
    pub fn clear_destination_marks(&mut self) {
        self.marks = [false; POINTS];
        self.goal_mark = false;
    }

    pub(crate) fn mark_point(&mut self, index: usize) {
        self.marks[index] = true;
    }

    pub(crate) fn mark_goal(&mut self) {
        self.goal_mark = true;
    }

    /// Copies the piece layout.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            points: self.points,
            bar: self.bar,
            goal: self.goal,
        }
    }

    /// Restores a layout taken with [`Board::snapshot`] and drops all marks.
    #[instrument(skip_all)]
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.points = snapshot.points;
        self.bar = snapshot.bar;
        self.goal = snapshot.goal;
        self.clear_destination_marks();
    }

    /// Adds one piece of `side` to a point it may legally occupy.
    pub(crate) fn push_piece(&mut self, index: usize, side: Side) {
        self.points[index] = Point::Occupied {
            side,
            count: self.points[index].count_for(side) + 1,
        };
    }

    /// Takes one piece of `side` off a point it owns.
    pub(crate) fn pop_piece(&mut self, index: usize, side: Side) {
        let remaining = self.points[index].count_for(side).saturating_sub(1);
        self.points[index] = if remaining == 0 {
            Point::Empty
        } else {
            Point::Occupied {
                side,
                count: remaining,
            }
        };
    }

    pub(crate) fn add_to_bar(&mut self, side: Side) {
        self.bar[side.slot()] += 1;
    }

    pub(crate) fn take_from_bar(&mut self, side: Side) {
        self.bar[side.slot()] = self.bar[side.slot()].saturating_sub(1);
    }

    pub(crate) fn add_to_goal(&mut self, side: Side) {
        self.goal[side.slot()] += 1;
    }

    /// Overwrites a point directly; used to set up positions.
    pub fn set_point(&mut self, index: usize, point: Point) {
        self.points[index] = point;
    }

    /// Overwrites the bar counter of `side`.
    pub fn set_bar(&mut self, side: Side, count: u8) {
        self.bar[side.slot()] = count;
    }

    /// Overwrites the goal counter of `side`.
    pub fn set_goal(&mut self, side: Side, count: u8) {
        self.goal[side.slot()] = count;
    }

    /// Formats the board as plain text, top row 12-23 and bottom row 11-0.
    pub fn display(&self) -> String {
        let cell = |index: usize| match self.points[index] {
            Point::Empty => " . ".to_string(),
            Point::Occupied { side, count } => {
                let glyph = match side {
                    Side::Ascending => 'A',
                    Side::Descending => 'D',
                };
                format!("{glyph}{count:<2}")
            }
        };
        let mut out = String::new();
        out.push_str(&(12..POINTS).map(|i| format!("{i:<3}")).collect::<Vec<_>>().join(" "));
        out.push('\n');
        out.push_str(&(12..POINTS).map(cell).collect::<Vec<_>>().join(" "));
        out.push('\n');
        out.push_str(&(0..12).rev().map(cell).collect::<Vec<_>>().join(" "));
        out.push('\n');
        out.push_str(&(0..12).rev().map(|i| format!("{i:<3}")).collect::<Vec<_>>().join(" "));
        out.push_str(&format!(
            "\nbar A:{} D:{}  goal A:{} D:{}",
            self.bar(Side::Ascending),
            self.bar(Side::Descending),
            self.goal(Side::Ascending),
            self.goal(Side::Descending),
        ));
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout_matches_opening() {
        let board = Board::standard();
        let occupancy = board.signed_occupancy();
        for (index, expected) in [
            (0, 2),
            (5, -5),
            (7, -3),
            (11, 5),
            (12, -5),
            (16, 3),
            (18, 5),
            (23, -2),
        ] {
            assert_eq!(occupancy[index], expected, "point {index}");
        }
        assert_eq!(occupancy.iter().filter(|v| **v != 0).count(), 8);
        for side in Side::iter() {
            assert_eq!(board.total_pieces(side), u32::from(PIECES_PER_SIDE));
        }
    }

    #[test]
    fn test_opening_pip_count() {
        let board = Board::standard();
        assert_eq!(board.pip_count(Side::Ascending), 167);
        assert_eq!(board.pip_count(Side::Descending), 167);
    }

    #[test]
    fn test_bar_pieces_count_full_track() {
        let mut board = Board::new();
        board.set_bar(Side::Descending, 2);
        assert_eq!(board.pip_count(Side::Descending), 48);
    }

    #[test]
    fn test_all_pieces_home_requires_empty_bar() {
        let mut board = Board::new();
        board.set_point(20, Point::Occupied { side: Side::Ascending, count: 14 });
        board.set_bar(Side::Ascending, 1);
        assert!(!board.all_pieces_home(Side::Ascending));
        board.set_bar(Side::Ascending, 0);
        board.set_point(19, Point::Occupied { side: Side::Ascending, count: 1 });
        assert!(board.all_pieces_home(Side::Ascending));
        board.set_point(17, Point::Occupied { side: Side::Ascending, count: 1 });
        assert!(!board.all_pieces_home(Side::Ascending));
    }

    #[test]
    fn test_farthest_from_home() {
        let mut board = Board::new();
        board.set_point(2, Point::Occupied { side: Side::Descending, count: 3 });
        board.set_point(4, Point::Occupied { side: Side::Descending, count: 1 });
        board.set_point(10, Point::Occupied { side: Side::Ascending, count: 1 });
        assert_eq!(board.farthest_from_home(Side::Descending), Some(5));
        assert_eq!(board.farthest_from_home(Side::Ascending), Some(14));
        board.reset();
        assert_eq!(board.farthest_from_home(Side::Ascending), None);
    }

    #[test]
    fn test_pop_last_piece_empties_point() {
        let mut board = Board::new();
        board.push_piece(3, Side::Ascending);
        assert_eq!(board.point(3), Point::Occupied { side: Side::Ascending, count: 1 });
        board.pop_piece(3, Side::Ascending);
        assert_eq!(board.point(3), Point::Empty);
    }

    #[test]
    fn test_restore_clears_marks() {
        let mut board = Board::standard();
        let snapshot = board.snapshot();
        board.mark_point(4);
        board.mark_goal();
        board.pop_piece(0, Side::Ascending);
        board.restore(&snapshot);
        assert_eq!(board.snapshot(), snapshot);
        assert!(!board.marks().iter().any(|m| *m));
        assert!(!board.goal_marked());
    }
}
