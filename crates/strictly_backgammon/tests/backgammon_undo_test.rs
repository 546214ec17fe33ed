//! Tests for rolling a turn back to its start.

use strictly_backgammon::{
    Backgammon, Board, Destination, Dice, GameError, GameEvent, MatchSettings, Seat, Source,
    Status,
};

fn two_humans() -> Backgammon {
    let mut game = Backgammon::seeded(21);
    game.start_new_game(MatchSettings::default().with_player2_is_ai(false));
    game
}

#[test]
fn test_undo_restores_turn_start() {
    let mut game = two_humans();
    let before = game.board().clone();
    game.roll_dice().expect("roll");
    let rolled = game.dice().values();

    let first = game.legal_movements()[0];
    let Source::Point(from) = first.source else {
        panic!("Opening moves start on the board");
    };
    let Destination::Point(to) = first.destination else {
        panic!("Opening moves stay on the board");
    };
    game.select_source(Source::Point(from)).expect("select");
    game.select_destination(Destination::Point(to)).expect("move");
    assert_ne!(game.board(), &before);

    game.undo_turn().expect("undo");
    assert_eq!(game.board(), &before);
    assert_eq!(game.dice().values(), rolled);
    assert_eq!(game.dice().remaining(), game.dice().available_slot_count());
    assert_eq!(game.status(), Status::MovePieces);
    assert!(game.drain_events().contains(&GameEvent::TurnUndone { seat: Seat::One }));
}

#[test]
fn test_undo_from_end_turn() {
    let mut game = two_humans();
    game.load_position(Board::standard(), Dice::from_values(6, 5)).expect("load");
    game.select_source(Source::Point(0)).expect("select");
    game.select_destination(Destination::Point(6)).expect("first");
    game.select_source(Source::Point(6)).expect("select again");
    game.select_destination(Destination::Point(11)).expect("second");
    assert_eq!(game.status(), Status::EndTurn);
    assert!(game.affordances().undo);

    game.undo_turn().expect("undo");
    assert_eq!(game.board(), &Board::standard());
    assert_eq!(game.status(), Status::MovePieces);

    // The snapshot survives, so a second undo lands on the same position.
    game.undo_turn().expect("undo again");
    assert_eq!(game.board(), &Board::standard());
}

#[test]
fn test_undo_before_roll_is_rejected() {
    let mut game = two_humans();
    assert!(matches!(
        game.undo_turn(),
        Err(GameError::WrongStatus { actual: Status::RollDice, .. })
    ));
}

#[test]
fn test_undo_is_human_only() {
    let mut game = Backgammon::seeded(4);
    game.start_new_game(
        MatchSettings::default()
            .with_player1_is_ai(true)
            .with_player2_is_ai(false),
    );
    game.load_position(Board::standard(), Dice::from_values(2, 1)).expect("load");
    assert_eq!(game.undo_turn(), Err(GameError::NotHumanTurn));
}
