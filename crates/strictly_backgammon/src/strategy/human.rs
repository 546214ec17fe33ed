//! Human strategy: expose affordances and wait.

use super::{Affordances, Reaction, Strategy};
use crate::error::GameError;
use crate::game::{Backgammon, Status};
use rand::Rng;
use tracing::{instrument, trace};

/// Strategy for a person at the table.
#[derive(Debug, Clone, Copy, Default)]
pub struct Human;

impl Strategy for Human {
    #[instrument(skip(self, game))]
    fn act<R: Rng>(
        &self,
        game: &mut Backgammon<R>,
        double_request: bool,
    ) -> Result<Reaction, GameError> {
        let seat = game.acting_seat();
        let status = game.status();
        let affordances = Affordances {
            roll: status == Status::RollDice,
            double: status == Status::RollDice && game.cube().can_offer(seat),
            respond: double_request,
            points: status == Status::MovePieces,
            end_turn: status == Status::EndTurn,
            undo: matches!(status, Status::MovePieces | Status::EndTurn) && game.can_undo(),
        };
        trace!(?affordances, "Human affordances");
        game.set_affordances(affordances);
        Ok(Reaction::Waiting)
    }

    fn name(&self) -> &'static str {
        "human"
    }
}
