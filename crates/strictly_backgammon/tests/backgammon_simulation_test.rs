//! Seeded AI-versus-AI matches checked step by step.

use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_backgammon::{
    Backgammon, BoardInvariants, CubeStakesInvariant, GameEvent, Invariant, InvariantSet,
    MatchSettings, PIECES_PER_SIDE, Side, Status,
};

const MAX_STEPS: usize = 200_000;

fn ai_match(seed: u64, target: u32) -> Backgammon {
    let mut game = Backgammon::with_rng(StdRng::seed_from_u64(seed));
    game.start_new_game(
        MatchSettings::default()
            .with_player1_is_ai(true)
            .with_player2_is_ai(true)
            .with_target_score(target),
    );
    game
}

fn assert_consistent(game: &Backgammon) {
    assert!(
        BoardInvariants::check_all(game.board()).is_ok(),
        "Board invariants broken:\n{}",
        game.board().display()
    );
    assert!(CubeStakesInvariant::holds(game.cube()));
    for side in [Side::Ascending, Side::Descending] {
        assert_eq!(game.board().total_pieces(side), u32::from(PIECES_PER_SIDE));
    }
}

/// Plays a match to completion and returns the number of rounds.
fn play_out(game: &mut Backgammon) -> u32 {
    for _ in 0..MAX_STEPS {
        if game.match_winner().is_some() {
            return game.round();
        }
        if game.status() == Status::NotPlaying {
            game.start_next_round().expect("next round");
            continue;
        }
        let stepped = game.step_ai().expect("AI step");
        assert!(stepped, "An AI must always be due in an AI-only match");
        assert_consistent(game);
        game.drain_events();
    }
    panic!("Match did not finish within {MAX_STEPS} steps");
}

#[test]
fn test_seeded_matches_finish_consistently() {
    for seed in 0..4 {
        let mut game = ai_match(seed, 5);
        let rounds = play_out(&mut game);
        let winner = game.match_winner().expect("winner");

        assert!(rounds >= 1);
        assert!(game.player(winner).score() >= 5);
        assert!(game.player(winner.other()).score() < 5);
        let result = game.last_result().expect("final round");
        assert_eq!(*result.winner(), winner);
        assert_eq!(*result.points(), result.kind().base_points() * result.multiplier());
    }
}

#[test]
fn test_same_seed_same_match() {
    let mut first = ai_match(77, 3);
    let mut second = ai_match(77, 3);
    play_out(&mut first);
    play_out(&mut second);
    assert_eq!(first.view(), second.view());
}

#[test]
fn test_ai_step_announces_next_ai() {
    let mut game = ai_match(3, 1);
    let events = game.drain_events();
    assert!(matches!(events.last(), Some(GameEvent::AiToAct { .. })));

    game.step_ai().expect("step");
    let events = game.drain_events();
    assert!(events.iter().any(|e| matches!(
        e,
        GameEvent::DiceRolled { .. } | GameEvent::DoubleOffered { .. }
    )));
}
