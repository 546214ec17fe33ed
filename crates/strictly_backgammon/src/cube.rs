//! Doubling cube stakes.

use crate::types::Seat;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Highest stake the cube reaches.
pub const MAX_STAKE: u32 = 64;

/// Stake held by each seat.
///
/// Both stakes start at 1 and at most one of them is ever above 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoublingCube {
    stakes: [u32; 2],
}

impl DoublingCube {
    /// Cube in the middle: both stakes at 1.
    pub fn new() -> Self {
        Self { stakes: [1, 1] }
    }

    /// Stake held by `seat`.
    pub fn stake(&self, seat: Seat) -> u32 {
        self.stakes[seat.index()]
    }

    /// Stakes for both seats.
    pub fn stakes(&self) -> [u32; 2] {
        self.stakes
    }

    /// Final-score multiplier: the product of both stakes.
    pub fn multiplier(&self) -> u32 {
        self.stakes[0] * self.stakes[1]
    }

    /// Stake `seat` would hold after a successful double.
    pub fn next_stake(&self, seat: Seat) -> u32 {
        self.stake(seat.other()) * 2
    }

    /// True when `seat` may offer a double.
    pub fn can_offer(&self, seat: Seat) -> bool {
        self.stake(seat) == 1 && self.next_stake(seat) <= MAX_STAKE
    }

    /// Transfers the doubled stake to `seat`.
    ///
    /// Returns the new stake, or `None` if the offer is refused because
    /// `seat` already holds the cube or the cap would be exceeded.
    #[instrument(skip(self))]
    pub fn double(&mut self, seat: Seat) -> Option<u32> {
        if !self.can_offer(seat) {
            warn!(stakes = ?self.stakes, "Double refused");
            return None;
        }
        let stake = self.next_stake(seat);
        self.stakes[seat.other().index()] = 1;
        self.stakes[seat.index()] = stake;
        debug!(stake, "Cube doubled");
        Some(stake)
    }

    /// Centers the cube for a new round.
    pub fn reset(&mut self) {
        self.stakes = [1, 1];
    }

    /// Overwrites both stakes; used to set up positions.
    pub fn with_stakes(stakes: [u32; 2]) -> Self {
        Self { stakes }
    }
}

impl Default for DoublingCube {
    fn default() -> Self {
        Self::new()
    }
}
