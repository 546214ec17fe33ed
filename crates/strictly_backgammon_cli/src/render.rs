//! Plain-text rendering of the table.

use rand::Rng;
use strictly_backgammon::{Backgammon, GameEvent, Seat, Status};

/// Board, dice, cube and scores as text.
pub fn render<R: Rng>(game: &Backgammon<R>) -> String {
    let view = game.view();
    let mut out = game.board().display();
    out.push('\n');
    for (seat, player) in [Seat::One, Seat::Two].into_iter().zip(view.players.iter()) {
        let marker = if seat == view.current_seat { '*' } else { ' ' };
        out.push_str(&format!(
            "{marker} {} ({}, {}{}) score {} pips {} stake {}\n",
            player.name,
            player.side,
            player.color,
            if player.is_ai { ", ai" } else { "" },
            player.score,
            player.pip_count,
            player.stake,
        ));
    }
    if view.status == Status::MovePieces || view.status == Status::EndTurn {
        out.push_str(&format!("dice {:?} left {:?}\n", view.dice, view.playable_dice));
    }
    out.push_str(&format!("status {}", status_line(game)));
    out
}

/// One-line description of what the game is waiting for.
pub fn status_line<R: Rng>(game: &Backgammon<R>) -> String {
    let name = |seat: Seat| game.player(seat).name().to_string();
    match game.status() {
        Status::NotPlaying => match game.match_winner() {
            Some(winner) => format!("match won by {}", name(winner)),
            None => "between rounds".to_string(),
        },
        Status::RollDice => format!("{} to roll", name(game.current_seat())),
        Status::DoubleOffered { by } => {
            format!("{} offers a double to {}", name(by), name(by.other()))
        }
        Status::MovePieces => format!("{} to move", name(game.current_seat())),
        Status::EndTurn => format!("{} to end the turn", name(game.current_seat())),
    }
}

/// Announcement for an event, if it deserves one.
pub fn describe_event<R: Rng>(game: &Backgammon<R>, event: &GameEvent) -> Option<String> {
    let name = |seat: &Seat| game.player(*seat).name().to_string();
    let line = match event {
        GameEvent::DiceRolled { seat, values } => {
            format!("{} rolls {} and {}", name(seat), values[0], values[1])
        }
        GameEvent::NoLegalMoves { seat } => format!("{} cannot move", name(seat)),
        GameEvent::MoveApplied {
            seat,
            movement,
            captured,
        } => format!(
            "{} plays {} -> {}{}",
            name(seat),
            movement.source,
            movement.destination,
            if *captured { " and hits" } else { "" }
        ),
        GameEvent::DoubleOffered { by, stake } => format!("{} doubles to {}", name(by), stake),
        GameEvent::DoubleResolved { by, accepted, .. } => {
            let answer = if *accepted { "takes" } else { "drops" };
            format!("{} {} the double", name(&by.other()), answer)
        }
        GameEvent::TurnUndone { seat } => format!("{} takes the turn back", name(seat)),
        GameEvent::RoundEnded(result) => format!(
            "{} wins a {} for {} point(s); score {} - {}",
            name(result.winner()),
            result.kind(),
            result.points(),
            result.totals()[0],
            result.totals()[1],
        ),
        GameEvent::MatchEnded { winner, score } => {
            format!("{} wins the match with {}", name(winner), score)
        }
        GameEvent::TurnStarted { .. } | GameEvent::TurnEnded { .. } | GameEvent::AiToAct { .. } => {
            return None;
        }
    };
    Some(line)
}
