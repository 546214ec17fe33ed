//! Core domain types for backgammon.

use serde::{Deserialize, Serialize};

/// Number of points on the track.
pub const POINTS: usize = 24;

/// Pieces each side starts with.
pub const PIECES_PER_SIDE: u8 = 15;

/// Width of a home territory in points.
pub const HOME_WIDTH: usize = 6;

/// One of the two movement sides on the track.
///
/// A side fixes the direction of travel, which end of the track is home,
/// and which bar and goal slot belongs to it. It says nothing about the
/// color used to draw the pieces.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Side {
    /// Moves from point 0 towards point 23; home is 18-23.
    Ascending,
    /// Moves from point 23 towards point 0; home is 0-5.
    Descending,
}

impl Side {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Ascending => Side::Descending,
            Side::Descending => Side::Ascending,
        }
    }

    /// Signed step applied to a point index per pip.
    pub fn direction(self) -> i8 {
        match self {
            Side::Ascending => 1,
            Side::Descending => -1,
        }
    }

    /// Slot used for this side's bar and goal counters.
    pub fn slot(self) -> usize {
        match self {
            Side::Ascending => 0,
            Side::Descending => 1,
        }
    }

    /// Pips needed to carry a piece at `index` off the board.
    pub fn distance_home(self, index: usize) -> u8 {
        match self {
            Side::Ascending => (POINTS - index) as u8,
            Side::Descending => (index + 1) as u8,
        }
    }

    /// Point a bar piece lands on when entering with `die`.
    pub fn entry_point(self, die: u8) -> usize {
        match self {
            Side::Ascending => die as usize - 1,
            Side::Descending => POINTS - die as usize,
        }
    }

    /// Destination of a piece at `index` moved `die` pips, if still on the board.
    pub fn advance(self, index: usize, die: u8) -> Option<usize> {
        let target = index as i16 + die as i16 * self.direction() as i16;
        (0..POINTS as i16)
            .contains(&target)
            .then_some(target as usize)
    }

    /// True when `index` lies in this side's home territory.
    pub fn is_home(self, index: usize) -> bool {
        match self {
            Side::Ascending => index >= POINTS - HOME_WIDTH && index < POINTS,
            Side::Descending => index < HOME_WIDTH,
        }
    }
}

/// Seat at the table, independent of side and color.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Seat {
    /// First player from the match settings.
    One,
    /// Second player from the match settings.
    Two,
}

impl Seat {
    /// Returns the other seat.
    pub fn other(self) -> Self {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }

    /// Index into per-seat arrays.
    pub fn index(self) -> usize {
        match self {
            Seat::One => 0,
            Seat::Two => 1,
        }
    }
}

/// Display color of a player's pieces.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum PieceColor {
    /// Dark pieces.
    #[default]
    Black,
    /// Light pieces.
    White,
}

impl PieceColor {
    /// Returns the other color.
    pub fn other(self) -> Self {
        match self {
            PieceColor::Black => PieceColor::White,
            PieceColor::White => PieceColor::Black,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_points_mirror() {
        assert_eq!(Side::Ascending.entry_point(1), 0);
        assert_eq!(Side::Ascending.entry_point(6), 5);
        assert_eq!(Side::Descending.entry_point(1), 23);
        assert_eq!(Side::Descending.entry_point(6), 18);
    }

    #[test]
    fn test_advance_stays_on_track() {
        assert_eq!(Side::Ascending.advance(20, 3), Some(23));
        assert_eq!(Side::Ascending.advance(21, 3), None);
        assert_eq!(Side::Descending.advance(2, 2), Some(0));
        assert_eq!(Side::Descending.advance(2, 3), None);
    }

    #[test]
    fn test_distance_home() {
        assert_eq!(Side::Ascending.distance_home(23), 1);
        assert_eq!(Side::Ascending.distance_home(18), 6);
        assert_eq!(Side::Descending.distance_home(0), 1);
        assert_eq!(Side::Descending.distance_home(5), 6);
    }

    #[test]
    fn test_home_territory() {
        assert!(Side::Ascending.is_home(18));
        assert!(!Side::Ascending.is_home(17));
        assert!(Side::Descending.is_home(5));
        assert!(!Side::Descending.is_home(6));
    }
}
