//! Random-mover AI with pip-count doubling heuristics.

use super::{Reaction, Strategy};
use crate::error::GameError;
use crate::game::{Backgammon, Status};
use crate::types::Seat;
use rand::Rng;
use tracing::{debug, info, instrument};

/// Chance of offering a double when leading the race by `lead` pips.
pub fn offer_probability(lead: i64) -> f64 {
    match lead {
        l if l >= 30 => 0.5,
        l if l >= 20 => 0.25,
        l if l >= 5 => 0.1,
        _ => 0.0,
    }
}

/// Chance of taking a double when trailing the race by `deficit` pips.
pub fn accept_probability(deficit: i64) -> f64 {
    match deficit {
        d if d < 5 => 1.0,
        d if d < 20 => 0.75,
        d if d < 30 => 0.5,
        _ => 0.2,
    }
}

/// Plays uniformly random legal moves and doubles by pip count.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ai;

impl Ai {
    /// Pips by which `seat` leads its opponent; negative when trailing.
    fn lead<R: Rng>(game: &Backgammon<R>, seat: Seat) -> i64 {
        i64::from(game.pip_count(seat.other())) - i64::from(game.pip_count(seat))
    }

    fn wants_double<R: Rng>(game: &mut Backgammon<R>, seat: Seat) -> bool {
        if !game.cube().can_offer(seat) {
            return false;
        }
        let p = offer_probability(Self::lead(game, seat));
        p > 0.0 && game.rng_mut().random_bool(p)
    }

    fn accepts_double<R: Rng>(game: &mut Backgammon<R>, seat: Seat) -> bool {
        let p = accept_probability(-Self::lead(game, seat));
        game.rng_mut().random_bool(p)
    }

    /// Plays random legal movements until the dice or the moves run out.
    fn play_out<R: Rng>(game: &mut Backgammon<R>) -> Result<(), GameError> {
        while game.status() == Status::MovePieces {
            let movements = game.legal_movements();
            if movements.is_empty() {
                break;
            }
            let choice = game.rng_mut().random_range(0..movements.len());
            game.play(movements[choice])?;
        }
        if game.status() == Status::EndTurn {
            game.advance_turn();
        }
        Ok(())
    }
}

impl Strategy for Ai {
    #[instrument(skip(self, game))]
    fn act<R: Rng>(
        &self,
        game: &mut Backgammon<R>,
        double_request: bool,
    ) -> Result<Reaction, GameError> {
        let seat = game.acting_seat();

        if double_request {
            let Status::DoubleOffered { by } = game.status() else {
                return Ok(Reaction::Waiting);
            };
            let accept = Self::accepts_double(game, seat);
            info!(?seat, accept, "AI answers double");
            game.resolve_double(by, accept)?;
            return Ok(if accept { Reaction::Accept } else { Reaction::Decline });
        }

        match game.status() {
            Status::RollDice => {
                if Self::wants_double(game, seat) && game.offer_double(seat) {
                    debug!(?seat, "AI offered a double");
                    return Ok(Reaction::Waiting);
                }
                game.perform_roll();
                Self::play_out(game)?;
                Ok(Reaction::Continue)
            }
            Status::MovePieces | Status::EndTurn => {
                Self::play_out(game)?;
                Ok(Reaction::Continue)
            }
            Status::NotPlaying | Status::DoubleOffered { .. } => Ok(Reaction::Waiting),
        }
    }

    fn name(&self) -> &'static str {
        "ai"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offer_bands() {
        assert_eq!(offer_probability(-10), 0.0);
        assert_eq!(offer_probability(4), 0.0);
        assert_eq!(offer_probability(5), 0.1);
        assert_eq!(offer_probability(20), 0.25);
        assert_eq!(offer_probability(45), 0.5);
    }

    #[test]
    fn test_accept_bands() {
        assert_eq!(accept_probability(-30), 1.0);
        assert_eq!(accept_probability(4), 1.0);
        assert_eq!(accept_probability(19), 0.75);
        assert_eq!(accept_probability(29), 0.5);
        assert_eq!(accept_probability(30), 0.2);
    }
}
