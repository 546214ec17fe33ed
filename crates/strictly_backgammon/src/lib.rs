//! Strictly Backgammon - a contract-checked backgammon rules engine
//!
//! The engine models a two-player match with bar entry, bearing off,
//! gammons and the doubling cube. It has no UI handles: front ends call
//! inbound operations, read queries and drain events.
//!
//! # Architecture
//!
//! - **Board**: points, bars, goals and destination marks
//! - **Rules**: legal move scanner and round scoring, pure functions
//! - **Contracts**: precondition-checked move application
//! - **Game**: the match state machine, cube and undo
//! - **Strategy**: human and AI players behind one trait
//!
//! # Example
//!
//! ```
//! use strictly_backgammon::{Backgammon, MatchSettings, Status};
//!
//! let mut game = Backgammon::seeded(42);
//! game.start_new_game(MatchSettings::default().with_player2_is_ai(false));
//! assert_eq!(game.status(), Status::RollDice);
//!
//! game.roll_dice().unwrap();
//! for movement in game.legal_movements() {
//!     assert_eq!(movement.side, game.player(game.current_seat()).side());
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod contracts;
mod cube;
mod dice;
mod error;
mod events;
mod game;
mod invariants;
mod movement;
mod player;
mod rules;
mod settings;
mod strategy;
mod types;
mod view;

// Crate-level exports - Board and pieces
pub use board::{Board, Point, Snapshot};
pub use dice::{Dice, DiceError};
pub use movement::{Destination, Movement, Source};
pub use types::{HOME_WIDTH, PIECES_PER_SIDE, POINTS, PieceColor, Seat, Side};

// Crate-level exports - Rules and contracts
pub use contracts::{
    Applied, ContractViolation, DestinationReachable, DieAvailable, LegalMovement, SourceHasPiece,
    apply,
};
pub use invariants::{
    BoardInvariants, CubeStakesInvariant, ExclusiveOwnershipInvariant, Invariant, InvariantSet,
    InvariantViolation, PieceConservationInvariant,
};
pub use rules::{
    WinKind, can_move, classify_win, compute_winner_points, destinations_from, legal_movements,
    movements_from,
};

// Crate-level exports - Match state machine
pub use cube::{DoublingCube, MAX_STAKE};
pub use error::GameError;
pub use events::GameEvent;
pub use game::{Backgammon, RoundResult, Selection, Status};
pub use player::Player;
pub use settings::MatchSettings;
pub use strategy::{
    Affordances, Ai, Human, PlayerKind, Reaction, Strategy, accept_probability, offer_probability,
};
pub use view::{GameView, PlayerView};
