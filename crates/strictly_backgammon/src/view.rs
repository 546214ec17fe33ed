//! Serializable read model for front ends.

use crate::game::{Backgammon, RoundResult, Status};
use crate::strategy::Affordances;
use crate::types::{POINTS, PieceColor, Seat, Side};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One player as seen by a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    /// Display name.
    pub name: String,
    /// Piece color.
    pub color: PieceColor,
    /// Side moved.
    pub side: Side,
    /// Match score.
    pub score: u32,
    /// Driven by the AI.
    pub is_ai: bool,
    /// Cube stake held.
    pub stake: u32,
    /// Pips left to travel.
    pub pip_count: u32,
    /// Pieces on the bar.
    pub bar: u8,
    /// Pieces borne off.
    pub goal: u8,
}

/// Everything needed to draw the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Match status.
    pub status: Status,
    /// Rounds dealt so far.
    pub round: u32,
    /// Seat whose turn it is.
    pub current_seat: Seat,
    /// Signed occupancy: positive ascending, negative descending.
    pub occupancy: [i8; POINTS],
    /// Destination marks.
    pub marks: [bool; POINTS],
    /// Bearing off is a marked destination.
    pub goal_marked: bool,
    /// Dice faces.
    pub dice: [u8; 2],
    /// Distinct die values still playable.
    pub playable_dice: Vec<u8>,
    /// Both players, by seat.
    pub players: [PlayerView; 2],
    /// Human interaction flags.
    pub affordances: Affordances,
    /// Latest round result.
    pub last_result: Option<RoundResult>,
    /// Match winner once decided.
    pub match_winner: Option<Seat>,
}

impl<R: Rng> From<&Backgammon<R>> for GameView {
    fn from(game: &Backgammon<R>) -> Self {
        let board = game.board();
        let player_view = |seat: Seat| {
            let player = game.player(seat);
            PlayerView {
                name: player.name().to_string(),
                color: player.color(),
                side: player.side(),
                score: player.score(),
                is_ai: player.is_ai(),
                stake: game.cube().stake(seat),
                pip_count: game.pip_count(seat),
                bar: board.bar(player.side()),
                goal: board.goal(player.side()),
            }
        };

        GameView {
            status: game.status(),
            round: game.round(),
            current_seat: game.current_seat(),
            occupancy: board.signed_occupancy(),
            marks: *board.marks(),
            goal_marked: board.goal_marked(),
            dice: game.dice().values(),
            playable_dice: game.dice().unconsumed_values(),
            players: [player_view(Seat::One), player_view(Seat::Two)],
            affordances: game.affordances(),
            last_result: game.last_result().copied(),
            match_winner: game.match_winner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::game::Backgammon;
    use crate::settings::MatchSettings;

    #[test]
    fn test_view_serializes_opening() {
        let mut game = Backgammon::seeded(11);
        game.start_new_game(MatchSettings::default());
        let view = game.view();
        assert_eq!(view.occupancy[0], 2);
        assert_eq!(view.occupancy[23], -2);
        assert_eq!(view.players[0].pip_count, 167);

        let json = serde_json::to_string(&view).expect("serialize");
        let back: super::GameView = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, view);
    }
}
