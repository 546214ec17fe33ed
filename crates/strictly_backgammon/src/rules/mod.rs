//! Game rules for backgammon.
//!
//! Pure functions over board and dice state. Rules are kept apart from the
//! state machine so contracts and strategies can reuse them.

pub mod scanner;
pub mod scoring;

pub use scanner::{can_move, destinations_from, legal_movements, movements_from};
pub use scoring::{WinKind, classify_win, compute_winner_points};
