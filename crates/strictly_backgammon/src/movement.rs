//! First-class movement types.
//!
//! A movement is a candidate legal play produced by the scanner. Movements
//! carry everything the applier needs and are discarded once one of them is
//! applied.

use crate::types::Side;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Where a moving piece comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    /// The mover's bar.
    Bar,
    /// A point index 0-23.
    Point(usize),
}

/// Where a moving piece ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    /// A point index 0-23.
    Point(usize),
    /// Off the board into the mover's goal.
    Goal,
}

/// A legal move for one side using one die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Movement {
    /// Side making the move.
    pub side: Side,
    /// Origin of the piece.
    pub source: Source,
    /// Landing spot of the piece.
    pub destination: Destination,
    /// Die value the move consumes.
    pub die: u8,
}

impl Movement {
    /// True for bar entries.
    pub fn is_entry(&self) -> bool {
        self.source == Source::Bar
    }

    /// True for bear-offs.
    pub fn is_bear_off(&self) -> bool {
        self.destination == Destination::Goal
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Bar => write!(f, "bar"),
            Source::Point(index) => write!(f, "{index}"),
        }
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Destination::Point(index) => write!(f, "{index}"),
            Destination::Goal => write!(f, "off"),
        }
    }
}

impl std::fmt::Display for Movement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} -> {} ({})",
            self.side, self.source, self.destination, self.die
        )
    }
}
