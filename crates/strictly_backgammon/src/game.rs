//! The match state machine.
//!
//! [`Backgammon`] owns the board, dice, cube and players and moves through
//! [`Status`] as rolls, moves and doubles arrive. Every inbound operation
//! checks the status it needs and is rejected without mutation otherwise.
//! Front ends read queries and drain [`GameEvent`]s; they never touch state
//! directly.

use crate::board::{Board, Snapshot};
use crate::contracts::{self, Applied, ContractViolation};
use crate::cube::DoublingCube;
use crate::dice::Dice;
use crate::error::GameError;
use crate::events::GameEvent;
use crate::invariants::{BoardInvariants, InvariantSet};
#[cfg(debug_assertions)]
use crate::invariants::{CubeStakesInvariant, Invariant};
use crate::movement::{Destination, Movement, Source};
use crate::player::Player;
use crate::rules::{
    WinKind, can_move, compute_winner_points, destinations_from, legal_movements, movements_from,
};
use crate::settings::MatchSettings;
use crate::strategy::{Affordances, Human, PlayerKind, Strategy};
use crate::types::{Seat, Side};
use crate::view::GameView;
use derive_getters::Getters;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};
#[cfg(debug_assertions)]
use tracing::error;

/// Where the match stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Status {
    /// No round in progress.
    NotPlaying,
    /// The current player must roll or offer a double.
    RollDice,
    /// A double was offered and the opponent must answer.
    DoubleOffered {
        /// Player who offered.
        by: Seat,
    },
    /// The current player has dice left to play.
    MovePieces,
    /// Nothing left to play; the turn awaits confirmation.
    EndTurn,
}

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct RoundResult {
    /// Round winner.
    winner: Seat,
    /// How the round was won.
    kind: WinKind,
    /// Points before the cube.
    base_points: u32,
    /// Cube multiplier in force.
    multiplier: u32,
    /// Points added to the winner's score.
    points: u32,
    /// Both match scores after the award, by seat.
    totals: [u32; 2],
}

/// Result of a human board selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// A source was selected; these destinations are now marked.
    Selected(Vec<Destination>),
    /// A marked destination was chosen and the movement played.
    Moved(Applied),
    /// Nothing playable there; selection and marks were cleared.
    Ignored,
}

/// A backgammon match between two seats.
///
/// Dice come from `R`, which defaults to an OS-seeded [`StdRng`].
#[derive(Debug)]
pub struct Backgammon<R = StdRng> {
    board: Board,
    dice: Dice,
    cube: DoublingCube,
    players: [Player; 2],
    current: Seat,
    status: Status,
    settings: MatchSettings,
    affordances: Affordances,
    selected: Option<Source>,
    undo: Option<Snapshot>,
    round: u32,
    last_result: Option<RoundResult>,
    match_winner: Option<Seat>,
    events: Vec<GameEvent>,
    ai_busy: bool,
    rng: R,
}

fn players_from(settings: &MatchSettings) -> [Player; 2] {
    [
        Player::new(
            settings.player1_name().clone(),
            *settings.player1_piece_color(),
            settings.player1_side(),
            PlayerKind::from_is_ai(*settings.player1_is_ai()),
        ),
        Player::new(
            settings.player2_name().clone(),
            settings.player2_piece_color(),
            settings.player2_side(),
            PlayerKind::from_is_ai(*settings.player2_is_ai()),
        ),
    ]
}

impl Backgammon<StdRng> {
    /// Creates an idle game with OS-seeded dice.
    #[instrument]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates an idle game with reproducible dice.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for Backgammon<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Backgammon<R> {
    /// Creates an idle game drawing dice from `rng`.
    pub fn with_rng(rng: R) -> Self {
        let settings = MatchSettings::default();
        Self {
            board: Board::new(),
            dice: Dice::neutral(),
            cube: DoublingCube::new(),
            players: players_from(&settings),
            current: Seat::One,
            status: Status::NotPlaying,
            settings,
            affordances: Affordances::default(),
            selected: None,
            undo: None,
            round: 0,
            last_result: None,
            match_winner: None,
            events: Vec::new(),
            ai_busy: false,
            rng,
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Match and round lifecycle
    // ─────────────────────────────────────────────────────────────

    /// Starts a new match: players fixed, scores zeroed, first round dealt.
    #[instrument(skip(self, settings), fields(target_score = *settings.target_score()))]
    pub fn start_new_game(&mut self, settings: MatchSettings) {
        self.players = players_from(&settings);
        self.settings = settings;
        self.round = 0;
        self.match_winner = None;
        self.events.clear();
        info!(
            player1 = self.players[0].name(),
            player2 = self.players[1].name(),
            "New match"
        );
        self.begin_round(Seat::One);
    }

    /// Deals the next round of a match still in progress.
    ///
    /// The starting seat alternates between rounds.
    #[instrument(skip(self))]
    pub fn start_next_round(&mut self) -> Result<(), GameError> {
        if self.round == 0 {
            return Err(GameError::NotStarted);
        }
        if self.match_winner.is_some() {
            return Err(GameError::MatchOver);
        }
        self.expect_status(Status::NotPlaying, "NotPlaying")?;
        let starter = if self.round % 2 == 0 { Seat::One } else { Seat::Two };
        self.begin_round(starter);
        Ok(())
    }

    /// Clears the board and dice and disables all interaction.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.dice = Dice::neutral();
        self.status = Status::NotPlaying;
        self.affordances = Affordances::default();
        self.selected = None;
        self.undo = None;
    }

    fn begin_round(&mut self, starter: Seat) {
        self.round += 1;
        self.board.initialize_standard_layout();
        self.dice = Dice::neutral();
        self.cube.reset();
        self.undo = None;
        self.selected = None;
        self.last_result = None;
        self.current = starter;
        info!(round = self.round, ?starter, "Round started");
        self.start_turn();
    }

    fn start_turn(&mut self) {
        self.status = Status::RollDice;
        let seat = self.current;
        let side = self.players[seat.index()].side();
        debug!(?seat, ?side, "Turn started");
        self.events.push(GameEvent::TurnStarted { seat, side });
        self.next_step();
    }

    // ─────────────────────────────────────────────────────────────
    //  Human operations
    // ─────────────────────────────────────────────────────────────

    /// Rolls the dice for a human current player.
    ///
    /// Moves to `MovePieces`, or straight to `EndTurn` when the roll
    /// cannot be played.
    #[instrument(skip(self))]
    pub fn roll_dice(&mut self) -> Result<(), GameError> {
        self.expect_status(Status::RollDice, "RollDice")?;
        self.ensure_human()?;
        self.perform_roll();
        Ok(())
    }

    /// Selects a source and marks its reachable destinations.
    #[instrument(skip(self))]
    pub fn select_source(&mut self, source: Source) -> Result<Selection, GameError> {
        self.expect_status(Status::MovePieces, "MovePieces")?;
        self.ensure_human()?;
        Ok(self.mark_source(source))
    }

    /// Plays the selected source to `destination` if it is marked.
    ///
    /// Choosing an unmarked point the player owns selects it instead.
    /// When two dice reach the same destination the smaller is used.
    #[instrument(skip(self))]
    pub fn select_destination(
        &mut self,
        destination: Destination,
    ) -> Result<Selection, GameError> {
        self.expect_status(Status::MovePieces, "MovePieces")?;
        self.ensure_human()?;
        let Some(source) = self.selected else {
            debug!("No source selected");
            return Ok(Selection::Ignored);
        };

        let side = self.current_side();
        let chosen = movements_from(&self.board, side, &self.dice, source)
            .into_iter()
            .find(|movement| movement.destination == destination);

        match chosen {
            Some(movement) => Ok(Selection::Moved(self.play(movement)?)),
            None => {
                self.clear_selection();
                let owned = |index: usize| {
                    self.board
                        .points()
                        .get(index)
                        .is_some_and(|point| point.count_for(side) > 0)
                };
                match destination {
                    Destination::Point(index) if owned(index) => {
                        Ok(self.mark_source(Source::Point(index)))
                    }
                    _ => Ok(Selection::Ignored),
                }
            }
        }
    }

    /// Passes the dice to the other player.
    #[instrument(skip(self))]
    pub fn confirm_end_turn(&mut self) -> Result<(), GameError> {
        self.expect_status(Status::EndTurn, "EndTurn")?;
        self.ensure_human()?;
        self.advance_turn();
        Ok(())
    }

    /// Offers a double before rolling.
    ///
    /// Returns `Ok(false)` when the cube rules refuse the offer.
    #[instrument(skip(self))]
    pub fn request_double(&mut self) -> Result<bool, GameError> {
        self.expect_status(Status::RollDice, "RollDice")?;
        self.ensure_human()?;
        Ok(self.offer_double(self.current))
    }

    /// Answers a pending double for a human opponent.
    #[instrument(skip(self))]
    pub fn respond_double(&mut self, accept: bool) -> Result<(), GameError> {
        let Status::DoubleOffered { by } = self.status else {
            return Err(GameError::WrongStatus {
                expected: "DoubleOffered",
                actual: self.status,
            });
        };
        self.ensure_human()?;
        self.resolve_double(by, accept)
    }

    /// Rolls the board back to the start of the turn.
    ///
    /// Dice keep their faces but every slot becomes playable again. The
    /// snapshot stays, so undoing twice lands on the same position.
    #[instrument(skip(self))]
    pub fn undo_turn(&mut self) -> Result<(), GameError> {
        if !matches!(self.status, Status::MovePieces | Status::EndTurn) {
            return Err(GameError::WrongStatus {
                expected: "MovePieces or EndTurn",
                actual: self.status,
            });
        }
        self.ensure_human()?;
        let snapshot = self.undo.ok_or(GameError::NoUndoSnapshot)?;

        self.board.restore(&snapshot);
        self.dice.reset_consumption();
        self.selected = None;
        self.status = if self.can_current_move() {
            Status::MovePieces
        } else {
            Status::EndTurn
        };
        info!(seat = ?self.current, "Turn undone");
        self.events.push(GameEvent::TurnUndone { seat: self.current });
        self.next_step();
        Ok(())
    }

    /// Replaces the position mid-turn, for puzzles and replays.
    ///
    /// The current player keeps the turn with `dice` to play. The new
    /// position becomes the undo snapshot.
    ///
    /// # Errors
    ///
    /// Rejected outside a turn, or when `board` breaks piece conservation
    /// or point ownership.
    #[instrument(skip(self, board))]
    pub fn load_position(&mut self, board: Board, dice: Dice) -> Result<(), GameError> {
        if matches!(self.status, Status::NotPlaying | Status::DoubleOffered { .. }) {
            return Err(GameError::WrongStatus {
                expected: "RollDice, MovePieces or EndTurn",
                actual: self.status,
            });
        }
        if let Err(violations) = BoardInvariants::check_all(&board) {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Position rejected");
            return Err(ContractViolation::InvariantViolation(descriptions).into());
        }

        self.board = board;
        self.board.clear_destination_marks();
        self.dice = dice;
        self.undo = Some(self.board.snapshot());
        self.selected = None;
        self.status = if self.can_current_move() {
            Status::MovePieces
        } else {
            Status::EndTurn
        };
        debug!(status = %self.status, "Position loaded");
        self.next_step();
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────
    //  AI driving
    // ─────────────────────────────────────────────────────────────

    /// Seat of the AI expected to act, if any.
    pub fn ai_to_act(&self) -> Option<Seat> {
        if self.status == Status::NotPlaying {
            return None;
        }
        let seat = self.acting_seat();
        self.players[seat.index()].is_ai().then_some(seat)
    }

    /// Lets the pending AI act once.
    ///
    /// One step covers a whole turn: a possible double offer, the roll,
    /// every move and the hand-over. Returns `Ok(false)` when no AI is due.
    #[instrument(skip(self))]
    pub fn step_ai(&mut self) -> Result<bool, GameError> {
        let Some(seat) = self.ai_to_act() else {
            return Ok(false);
        };
        let double_request = matches!(self.status, Status::DoubleOffered { .. });
        let kind = self.players[seat.index()].kind();

        self.ai_busy = true;
        let reaction = kind.act(self, double_request);
        self.ai_busy = false;

        let reaction = reaction?;
        debug!(?seat, strategy = kind.name(), %reaction, "AI stepped");
        self.next_step();
        Ok(true)
    }

    // ─────────────────────────────────────────────────────────────
    //  Transitions shared by humans and the AI
    // ─────────────────────────────────────────────────────────────

    pub(crate) fn perform_roll(&mut self) {
        self.dice.roll(&mut self.rng);
        self.undo = Some(self.board.snapshot());
        self.clear_selection();

        let seat = self.current;
        let values = self.dice.values();
        info!(?seat, ?values, "Dice rolled");
        self.events.push(GameEvent::DiceRolled { seat, values });

        if self.can_current_move() {
            self.status = Status::MovePieces;
        } else {
            info!(?seat, "No legal moves");
            self.status = Status::EndTurn;
            self.events.push(GameEvent::NoLegalMoves { seat });
        }
        self.next_step();
    }

    pub(crate) fn play(&mut self, movement: Movement) -> Result<Applied, GameError> {
        let applied = contracts::apply(&mut self.board, &mut self.dice, movement)?;
        self.clear_selection();

        let seat = self.current;
        debug!(?seat, %movement, captured = applied.captured, "Move played");
        self.events.push(GameEvent::MoveApplied {
            seat,
            movement,
            captured: applied.captured,
        });

        if self.board.all_borne_off(movement.side) {
            self.end_round(seat);
            return Ok(applied);
        }
        if self.dice.all_consumed() || !self.can_current_move() {
            self.status = Status::EndTurn;
        }
        self.next_step();
        Ok(applied)
    }

    pub(crate) fn advance_turn(&mut self) {
        let seat = self.current;
        info!(?seat, "Turn ended");
        self.events.push(GameEvent::TurnEnded { seat });
        self.current = seat.other();
        self.dice = Dice::neutral();
        self.undo = None;
        self.clear_selection();
        self.start_turn();
    }

    pub(crate) fn offer_double(&mut self, by: Seat) -> bool {
        if !self.cube.can_offer(by) {
            warn!(?by, stakes = ?self.cube.stakes(), "Double refused by cube");
            return false;
        }
        let stake = self.cube.next_stake(by);
        info!(?by, stake, "Double offered");
        self.status = Status::DoubleOffered { by };
        self.events.push(GameEvent::DoubleOffered { by, stake });
        self.next_step();
        true
    }

    pub(crate) fn resolve_double(&mut self, by: Seat, accepted: bool) -> Result<(), GameError> {
        if accepted {
            let mut cube = self.cube;
            if cube.double(by).is_none() {
                warn!(?by, "Accepted double could not be applied");
            }
            #[cfg(debug_assertions)]
            if !CubeStakesInvariant::holds(&cube) {
                error!(stakes = ?cube.stakes(), "Cube postcondition failed");
                let description = CubeStakesInvariant::description().to_string();
                return Err(ContractViolation::InvariantViolation(description).into());
            }
            self.cube = cube;
            let multiplier = self.cube.multiplier();
            info!(?by, multiplier, "Double accepted");
            self.events.push(GameEvent::DoubleResolved {
                by,
                accepted,
                multiplier,
            });
            self.status = Status::RollDice;
            self.next_step();
        } else {
            let multiplier = self.cube.multiplier();
            info!(?by, multiplier, "Double declined");
            self.events.push(GameEvent::DoubleResolved {
                by,
                accepted,
                multiplier,
            });
            let points = WinKind::Resigned.base_points() * multiplier;
            self.finish_round(by, WinKind::Resigned, multiplier, points);
        }
        Ok(())
    }

    fn end_round(&mut self, winner: Seat) {
        let side = self.players[winner.index()].side();
        let multiplier = self.cube.multiplier();
        let (kind, points) = compute_winner_points(&self.board, side, multiplier);
        self.finish_round(winner, kind, multiplier, points);
    }

    fn finish_round(&mut self, winner: Seat, kind: WinKind, multiplier: u32, points: u32) {
        self.players[winner.index()].add_points(points);
        let result = RoundResult {
            winner,
            kind,
            base_points: kind.base_points(),
            multiplier,
            points,
            totals: [self.players[0].score(), self.players[1].score()],
        };

        self.status = Status::NotPlaying;
        self.dice = Dice::neutral();
        self.undo = None;
        self.clear_selection();
        self.affordances = Affordances::default();
        self.last_result = Some(result);
        info!(?winner, %kind, points, totals = ?result.totals, "Round ended");
        self.events.push(GameEvent::RoundEnded(result));

        let score = self.players[winner.index()].score();
        if score >= *self.settings.target_score() {
            info!(?winner, score, "Match won");
            self.match_winner = Some(winner);
            self.events.push(GameEvent::MatchEnded { winner, score });
        }
    }

    /// Hands control to whoever acts next.
    fn next_step(&mut self) {
        if self.status == Status::NotPlaying {
            self.affordances = Affordances::default();
            return;
        }
        let seat = self.acting_seat();
        let double_request = matches!(self.status, Status::DoubleOffered { .. });
        match self.players[seat.index()].kind() {
            PlayerKind::Human => {
                if let Err(err) = Human.act(self, double_request) {
                    warn!(%err, strategy = Human.name(), "Strategy failed");
                }
            }
            PlayerKind::Ai => {
                self.affordances = Affordances::default();
                if !self.ai_busy {
                    self.events.push(GameEvent::AiToAct { seat });
                }
            }
        }
    }

    fn mark_source(&mut self, source: Source) -> Selection {
        self.clear_selection();
        let destinations = destinations_from(&self.board, self.current_side(), &self.dice, source);
        if destinations.is_empty() {
            debug!(%source, "Nothing playable from source");
            return Selection::Ignored;
        }
        for destination in &destinations {
            match destination {
                Destination::Point(index) => self.board.mark_point(*index),
                Destination::Goal => self.board.mark_goal(),
            }
        }
        self.selected = Some(source);
        Selection::Selected(destinations)
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.board.clear_destination_marks();
    }

    fn expect_status(&self, expected: Status, label: &'static str) -> Result<(), GameError> {
        if self.status == expected {
            Ok(())
        } else {
            warn!(expected = label, actual = %self.status, "Operation rejected");
            Err(GameError::WrongStatus {
                expected: label,
                actual: self.status,
            })
        }
    }

    fn ensure_human(&self) -> Result<(), GameError> {
        if self.players[self.acting_seat().index()].is_ai() {
            warn!(seat = ?self.acting_seat(), "Human input during AI turn");
            return Err(GameError::NotHumanTurn);
        }
        Ok(())
    }

    fn can_current_move(&self) -> bool {
        can_move(&self.board, self.current_side(), &self.dice)
    }

    fn current_side(&self) -> Side {
        self.players[self.current.index()].side()
    }

    pub(crate) fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    pub(crate) fn set_affordances(&mut self, affordances: Affordances) {
        self.affordances = affordances;
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The dice.
    pub fn dice(&self) -> &Dice {
        &self.dice
    }

    /// Destination marks for the selected source.
    pub fn marks(&self) -> &[bool; 24] {
        self.board.marks()
    }

    /// Current status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Both players, by seat.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Player in `seat`.
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// Seat whose turn it is.
    pub fn current_seat(&self) -> Seat {
        self.current
    }

    /// Seat expected to act now: the responder while a double is pending.
    pub fn acting_seat(&self) -> Seat {
        match self.status {
            Status::DoubleOffered { by } => by.other(),
            _ => self.current,
        }
    }

    /// The doubling cube.
    pub fn cube(&self) -> &DoublingCube {
        &self.cube
    }

    /// Pips `seat` still has to travel.
    pub fn pip_count(&self, seat: Seat) -> u32 {
        self.board.pip_count(self.players[seat.index()].side())
    }

    /// What a human may do right now.
    pub fn affordances(&self) -> Affordances {
        self.affordances
    }

    /// Legal movements for the current player; empty outside `MovePieces`.
    pub fn legal_movements(&self) -> Vec<Movement> {
        if self.status != Status::MovePieces {
            return Vec::new();
        }
        legal_movements(&self.board, self.current_side(), &self.dice)
    }

    /// Source currently selected by a human.
    pub fn selected(&self) -> Option<Source> {
        self.selected
    }

    /// True when the turn can be rolled back.
    pub fn can_undo(&self) -> bool {
        self.undo.is_some()
    }

    /// Result of the most recent round.
    pub fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Winner of the match once decided.
    pub fn match_winner(&self) -> Option<Seat> {
        self.match_winner
    }

    /// Rounds dealt so far in this match.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Settings of the running match.
    pub fn settings(&self) -> &MatchSettings {
        &self.settings
    }

    /// Takes every queued event.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Serializable snapshot for front ends.
    pub fn view(&self) -> GameView {
        GameView::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn human_match() -> Backgammon {
        let mut game = Backgammon::seeded(7);
        game.start_new_game(MatchSettings::default().with_player2_is_ai(false));
        game
    }

    #[test]
    fn test_new_game_waits_for_roll() {
        let game = human_match();
        assert_eq!(game.status(), Status::RollDice);
        assert_eq!(game.current_seat(), Seat::One);
        assert!(game.affordances().roll);
        assert!(game.affordances().double);
        assert!(!game.affordances().points);
        assert_eq!(game.pip_count(Seat::One), 167);
    }

    #[cfg(debug_assertions)]
    #[test]
    fn test_accept_rejects_cube_breaking_stakes() {
        let mut game = human_match();
        game.cube = DoublingCube::with_stakes([1, 3]);
        game.status = Status::DoubleOffered { by: Seat::One };

        let result = game.respond_double(true);

        assert!(matches!(
            result,
            Err(GameError::Contract(ContractViolation::InvariantViolation(_)))
        ));
        assert_eq!(game.cube().stakes(), [1, 3]);
        assert_eq!(game.status(), Status::DoubleOffered { by: Seat::One });
    }

    #[test]
    fn test_wrong_status_rejected_without_mutation() {
        let mut game = human_match();
        let before = game.board().clone();
        let result = game.confirm_end_turn();
        assert_eq!(
            result,
            Err(GameError::WrongStatus {
                expected: "EndTurn",
                actual: Status::RollDice
            })
        );
        assert_eq!(game.board(), &before);
        assert_eq!(game.status(), Status::RollDice);
    }

    #[test]
    fn test_roll_takes_snapshot() {
        let mut game = human_match();
        game.roll_dice().expect("roll");
        assert!(game.can_undo());
        assert!(matches!(game.status(), Status::MovePieces | Status::EndTurn));
    }

    #[test]
    fn test_ai_turn_rejects_human_input() {
        let mut game = Backgammon::seeded(3);
        game.start_new_game(MatchSettings::default().with_player1_is_ai(true));
        assert_eq!(game.ai_to_act(), Some(Seat::One));
        assert_eq!(game.roll_dice(), Err(GameError::NotHumanTurn));
        assert!(game.drain_events().contains(&GameEvent::AiToAct { seat: Seat::One }));
    }

    #[test]
    fn test_next_round_requires_finished_round() {
        let mut game = Backgammon::seeded(1);
        assert_eq!(game.start_next_round(), Err(GameError::NotStarted));
        game.start_new_game(MatchSettings::default());
        assert!(matches!(
            game.start_next_round(),
            Err(GameError::WrongStatus { .. })
        ));
    }

    #[test]
    fn test_reset_disables_everything() {
        let mut game = human_match();
        game.reset();
        assert_eq!(game.status(), Status::NotPlaying);
        assert_eq!(game.affordances(), Affordances::default());
        assert_eq!(game.board().pieces_on_board(Side::Ascending), 0);
        assert!(game.dice().all_consumed());
    }
}
