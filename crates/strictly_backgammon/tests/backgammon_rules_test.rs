//! Tests for move generation and human selection through the game.

use strictly_backgammon::{
    Backgammon, Board, Destination, Dice, GameError, MatchSettings, Movement, Point, Seat,
    Selection, Side, Source, Status,
};

fn two_humans() -> Backgammon {
    let mut game = Backgammon::seeded(5);
    game.start_new_game(MatchSettings::default().with_player2_is_ai(false));
    game
}

fn closed_out_board() -> Board {
    // Descending holds all six points of Ascending's entry zone.
    let mut board = Board::new();
    for index in 0..5 {
        board.set_point(index, Point::Occupied { side: Side::Descending, count: 2 });
    }
    board.set_point(5, Point::Occupied { side: Side::Descending, count: 5 });
    board.set_point(18, Point::Occupied { side: Side::Ascending, count: 14 });
    board.set_bar(Side::Ascending, 1);
    board
}

#[test]
fn test_opening_three_five() {
    let mut game = two_humans();
    game.load_position(Board::standard(), Dice::from_values(3, 5))
        .expect("load opening");

    let played: Vec<(usize, usize)> = game
        .legal_movements()
        .into_iter()
        .map(|m| match (m.source, m.destination) {
            (Source::Point(from), Destination::Point(to)) => (from, to),
            other => panic!("Unexpected movement {other:?}"),
        })
        .collect();

    assert_eq!(
        played,
        vec![(0, 3), (11, 14), (11, 16), (16, 19), (16, 21), (18, 21)]
    );
}

#[test]
fn test_capture_through_selection() {
    let mut game = two_humans();
    let mut board = Board::standard();
    board.set_point(3, Point::Occupied { side: Side::Descending, count: 1 });
    board.set_point(5, Point::Occupied { side: Side::Descending, count: 4 });
    game.load_position(board, Dice::from_values(3, 4)).expect("load");

    let selection = game.select_source(Source::Point(0)).expect("select");
    assert_eq!(
        selection,
        Selection::Selected(vec![Destination::Point(3), Destination::Point(4)])
    );
    assert!(game.marks()[3] && game.marks()[4]);

    match game.select_destination(Destination::Point(3)).expect("move") {
        Selection::Moved(applied) => assert!(applied.captured),
        other => panic!("Expected a move, got {other:?}"),
    }
    assert_eq!(game.board().bar(Side::Descending), 1);
    assert_eq!(game.board().point(3), Point::Occupied { side: Side::Ascending, count: 1 });
    assert_eq!(game.status(), Status::MovePieces);
    assert_eq!(game.dice().unconsumed_values(), vec![4]);
    assert!(game.marks().iter().all(|marked| !marked));
}

#[test]
fn test_closed_board_skips_to_end_turn() {
    let mut game = two_humans();
    game.load_position(closed_out_board(), Dice::from_values(1, 6))
        .expect("load");

    assert_eq!(game.status(), Status::EndTurn);
    assert!(game.legal_movements().is_empty());
    assert!(game.affordances().end_turn);

    game.confirm_end_turn().expect("end turn");
    assert_eq!(game.current_seat(), Seat::Two);
    assert_eq!(game.status(), Status::RollDice);
}

#[test]
fn test_bar_priority_ignores_board_pieces() {
    let mut game = two_humans();
    let mut board = Board::standard();
    board.set_point(0, Point::Occupied { side: Side::Ascending, count: 1 });
    board.set_bar(Side::Ascending, 1);
    game.load_position(board, Dice::from_values(2, 4)).expect("load");

    assert_eq!(game.select_source(Source::Point(11)).expect("select"), Selection::Ignored);
    assert!(game.legal_movements().iter().all(Movement::is_entry));

    let selection = game.select_source(Source::Bar).expect("select bar");
    assert_eq!(
        selection,
        Selection::Selected(vec![Destination::Point(1), Destination::Point(3)])
    );
}

#[test]
fn test_invalid_selections_clear_marks() {
    let mut game = two_humans();
    game.load_position(Board::standard(), Dice::from_values(3, 5)).expect("load");

    game.select_source(Source::Point(16)).expect("select");
    assert!(game.marks()[19]);

    assert_eq!(game.select_source(Source::Point(1)).expect("empty"), Selection::Ignored);
    assert!(game.marks().iter().all(|marked| !marked));
    assert_eq!(game.selected(), None);

    assert_eq!(game.select_source(Source::Point(23)).expect("opponent"), Selection::Ignored);
    assert_eq!(
        game.select_destination(Destination::Point(7)).expect("no source"),
        Selection::Ignored
    );
}

#[test]
fn test_unmarked_own_point_reselects() {
    let mut game = two_humans();
    game.load_position(Board::standard(), Dice::from_values(3, 5)).expect("load");

    game.select_source(Source::Point(0)).expect("select");
    let selection = game.select_destination(Destination::Point(11)).expect("reselect");

    assert_eq!(
        selection,
        Selection::Selected(vec![Destination::Point(14), Destination::Point(16)])
    );
    assert_eq!(game.selected(), Some(Source::Point(11)));
    assert!(!game.marks()[3]);
}

#[test]
fn test_destination_off_the_track_is_ignored() {
    let mut game = two_humans();
    game.load_position(Board::standard(), Dice::from_values(3, 5)).expect("load");

    game.select_source(Source::Point(0)).expect("select");
    assert_eq!(
        game.select_destination(Destination::Point(24)).expect("off track"),
        Selection::Ignored
    );
    assert_eq!(game.selected(), None);
    assert!(game.marks().iter().all(|marked| !marked));

    assert_eq!(
        game.select_source(Source::Point(99)).expect("off track source"),
        Selection::Ignored
    );
    assert_eq!(game.status(), Status::MovePieces);
}

#[test]
fn test_doubles_play_four_times() {
    let mut game = two_humans();
    game.load_position(Board::standard(), Dice::from_values(1, 1)).expect("load");

    for _ in 0..4 {
        assert_eq!(game.status(), Status::MovePieces);
        game.select_source(Source::Point(18)).expect("select");
        game.select_destination(Destination::Point(19)).expect("move");
    }

    assert_eq!(game.status(), Status::EndTurn);
    assert_eq!(game.board().point(19), Point::Occupied { side: Side::Ascending, count: 4 });
    assert_eq!(game.board().point(18).count(), 1);
    assert!(game.dice().all_consumed());
}

#[test]
fn test_selection_outside_move_phase_is_rejected() {
    let mut game = two_humans();
    assert!(matches!(
        game.select_source(Source::Point(0)),
        Err(GameError::WrongStatus { expected: "MovePieces", .. })
    ));
}

#[test]
fn test_load_position_rejects_broken_board() {
    let mut game = two_humans();
    let mut board = Board::standard();
    board.set_point(11, Point::Occupied { side: Side::Ascending, count: 9 });
    assert!(matches!(
        game.load_position(board, Dice::from_values(2, 3)),
        Err(GameError::Contract(_))
    ));
    assert_eq!(game.status(), Status::RollDice);
}

#[test]
fn test_load_position_rejects_oversized_stacks() {
    let mut game = two_humans();
    let mut board = Board::new();
    board.set_point(4, Point::Occupied { side: Side::Ascending, count: 200 });
    board.set_point(9, Point::Occupied { side: Side::Ascending, count: 200 });
    assert!(matches!(
        game.load_position(board, Dice::from_values(2, 3)),
        Err(GameError::Contract(_))
    ));
    assert_eq!(game.status(), Status::RollDice);
}
