//! Dice rolls and per-slot consumption bookkeeping.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Error raised when a die value cannot be consumed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum DiceError {
    /// No unconsumed slot shows the requested value.
    #[display("No unconsumed die shows {}", _0)]
    NoMatchingDie(u8),
}

impl std::error::Error for DiceError {}

/// The pair of dice plus four consumption slots.
///
/// Slot `i` plays the value of die `i % 2`. Only the first two slots are
/// in play unless both dice show the same face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dice {
    values: [u8; 2],
    consumed: [bool; 4],
}

impl Dice {
    /// Dice before any roll: nothing left to play.
    pub fn neutral() -> Self {
        Self {
            values: [1, 1],
            consumed: [true; 4],
        }
    }

    /// Fresh dice showing the given faces.
    ///
    /// # Panics
    ///
    /// Panics if either face is outside 1-6.
    pub fn from_values(first: u8, second: u8) -> Self {
        assert!((1..=6).contains(&first), "die face out of range: {first}");
        assert!((1..=6).contains(&second), "die face out of range: {second}");
        Self {
            values: [first, second],
            consumed: [false; 4],
        }
    }

    /// Rolls both dice and clears every consumed flag.
    #[instrument(skip(self, rng))]
    pub fn roll<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.consumed = [false; 4];
        self.values = [rng.random_range(1..=6), rng.random_range(1..=6)];
        debug!(values = ?self.values, "Dice rolled");
    }

    /// Face values of both dice.
    pub fn values(&self) -> [u8; 2] {
        self.values
    }

    /// Consumed flags for all four slots.
    pub fn consumed(&self) -> [bool; 4] {
        self.consumed
    }

    /// True when both dice show the same face.
    pub fn is_double(&self) -> bool {
        self.values[0] == self.values[1]
    }

    /// Number of moves this roll grants.
    pub fn available_slot_count(&self) -> usize {
        if self.is_double() { 4 } else { 2 }
    }

    fn slots(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        (0..self.available_slot_count()).map(|slot| (slot, self.values[slot % 2]))
    }

    /// Marks the first unconsumed slot showing `value`.
    #[instrument(skip(self))]
    pub fn consume(&mut self, value: u8) -> Result<usize, DiceError> {
        let slot = self
            .slots()
            .find(|&(slot, face)| face == value && !self.consumed[slot])
            .map(|(slot, _)| slot)
            .ok_or(DiceError::NoMatchingDie(value))?;
        self.consumed[slot] = true;
        Ok(slot)
    }

    /// Distinct unconsumed values, smallest first.
    pub fn unconsumed_values(&self) -> Vec<u8> {
        let mut values: Vec<u8> = self
            .slots()
            .filter(|&(slot, _)| !self.consumed[slot])
            .map(|(_, face)| face)
            .collect();
        values.sort_unstable();
        values.dedup();
        values
    }

    /// True when some unconsumed slot shows `value`.
    pub fn has_unconsumed(&self, value: u8) -> bool {
        self.slots()
            .any(|(slot, face)| face == value && !self.consumed[slot])
    }

    /// Moves still available this roll.
    pub fn remaining(&self) -> usize {
        self.slots().filter(|&(slot, _)| !self.consumed[slot]).count()
    }

    /// True when every available slot has been played.
    pub fn all_consumed(&self) -> bool {
        self.remaining() == 0
    }

    /// Makes every slot playable again without rerolling.
    pub fn reset_consumption(&mut self) {
        self.consumed = [false; 4];
    }
}

impl Default for Dice {
    fn default() -> Self {
        Self::neutral()
    }
}
