//! Round resolution scenarios with scripted dice.
//!
//! Draw order: opening hands in player order, then during evaluation one
//! draw per pass, then re-rolls in player order then hand order.

use dice_pass::{
    next_active, Die, EventLog, Game, GameConfig, GameEvent, GameState, Hand, PassEvent,
    PlayerId, RoundPhase, ScriptedDice,
};

fn pid(id: u32) -> PlayerId {
    PlayerId::new(id).unwrap()
}

fn faces(dice: &[Die]) -> Vec<u8> {
    dice.iter().map(|d| d.value()).collect()
}

fn hand(values: &[u8]) -> Hand {
    values.iter().map(|&v| Die::new(v).unwrap()).collect()
}

/// Two players, one die each; player 1 rolls a 6.
#[test]
fn test_two_players_first_scores_and_game_ends() {
    let config = GameConfig::new(2, 1).unwrap();
    // Deal: p1 [6], p2 [4]. Reroll p2 -> 2.
    let mut dice = ScriptedDice::new([6, 4, 2]);
    let mut game = Game::new(&config, &mut dice);

    let report = game.play_round(&mut ()).unwrap();

    let p1 = game.state().player(pid(1)).unwrap();
    let p2 = game.state().player(pid(2)).unwrap();
    assert_eq!(p1.score(), 1);
    assert!(p1.dice().is_empty());
    assert_eq!(p2.score(), 0);
    assert_eq!(p2.dice().len(), 1);

    assert!(report.game_over);
    assert_eq!(game.phase(), RoundPhase::GameOver);
    assert_eq!(game.state().last_standing(), Some(pid(2)));

    drop(game);
    assert_eq!(dice.remaining(), 0);
}

/// Three players roll 1, 3 and 6. The passed die lands with player 2 and
/// sits out evaluation until the next round.
#[test]
fn test_three_players_pass_keep_score() {
    let config = GameConfig::new(3, 1).unwrap();
    // Deal [1], [3], [6]; pass replacement 6; rerolls p2 [3, 6] -> [2, 5].
    let mut game = Game::new(&config, ScriptedDice::new([1, 3, 6, 6, 2, 5]));

    let report = game.play_round(&mut ()).unwrap();

    assert_eq!(report.active_order, vec![pid(1), pid(2), pid(3)]);

    let p1 = report.turn(pid(1)).unwrap();
    assert_eq!(p1.recipient, pid(2));
    assert_eq!(p1.passed.len(), 1);

    // Player 2 only evaluated its own 3; the passed 6 was not scored.
    let p2 = report.turn(pid(2)).unwrap();
    assert_eq!(faces(&p2.evaluated), vec![3]);
    assert_eq!(p2.scored, 0);

    let p3 = report.turn(pid(3)).unwrap();
    assert_eq!(p3.scored, 1);

    let state = game.state();
    assert_eq!(state.player(pid(2)).unwrap().score(), 0);
    assert_eq!(faces(state.player(pid(2)).unwrap().dice()), vec![2, 5]);
    assert!(state.player(pid(1)).unwrap().dice().is_empty());
    assert_eq!(state.player(pid(3)).unwrap().score(), 1);
    assert!(report.game_over);
}

/// A die passed to an earlier player is still not evaluated this round.
#[test]
fn test_pass_to_earlier_player_waits_for_next_round() {
    // p1 keeps 3, p2 passes (replacement 6) back to p1.
    let state = GameState::with_hands([hand(&[3]), hand(&[1, 4])]);
    // Round 1: replacement 6, rerolls p1 [3, 6] -> [2, 2], p2 [4] -> [3].
    // Round 2: all keep, rerolls -> [4, 4], [5].
    let mut game = Game::from_state(state, ScriptedDice::new([6, 2, 2, 3, 4, 4, 5]));

    let round1 = game.play_round(&mut ()).unwrap();
    assert_eq!(round1.turn(pid(1)).unwrap().scored, 0);
    assert_eq!(
        round1.passes().collect::<Vec<_>>(),
        vec![&PassEvent {
            from: pid(2),
            to: pid(1),
            die: Die::MAX
        }]
    );

    let round2 = game.play_round(&mut ()).unwrap();
    assert_eq!(faces(&round2.turn(pid(1)).unwrap().evaluated), vec![2, 2]);
    assert_eq!(round2.round, 2);
    assert_eq!(game.state().player(pid(1)).unwrap().score(), 0);
}

/// The active order is frozen for the round, even when a player runs out
/// partway through.
#[test]
fn test_active_order_frozen_for_round() {
    // p2 scores its only die before p3 passes; p3 still passes to p1,
    // and p1's pass still targets p2.
    let state = GameState::with_hands([hand(&[1]), hand(&[6]), hand(&[1, 2])]);
    // Replacements 4 (p1 -> p2) and 5 (p3 -> p1); rerolls p1 [5]->3, p2 [4]->3, p3 [2]->3.
    let mut game = Game::from_state(state, ScriptedDice::new([4, 5, 3, 3, 3]));

    let report = game.play_round(&mut ()).unwrap();

    assert_eq!(report.turn(pid(1)).unwrap().recipient, pid(2));
    assert_eq!(report.turn(pid(3)).unwrap().recipient, pid(1));
    assert_eq!(game.state().active_count(), 3);
    assert!(!report.game_over);
}

#[test]
fn test_turn_order_wraparound() {
    let order = vec![pid(2), pid(4), pid(7)];
    assert_eq!(next_active(pid(7), &order), pid(2));
}

#[test]
fn test_emptied_player_stays_out() {
    let state = GameState::with_hands([Hand::new(), hand(&[2]), hand(&[3])]);
    // Round 1 rerolls p2 -> 6, p3 -> 4; round 2 p2 scores out, p3 rerolls -> 2.
    let mut game = Game::from_state(state, ScriptedDice::new([6, 4, 2]));

    let round1 = game.play_round(&mut ()).unwrap();
    assert!(round1.turn(pid(1)).is_none());

    let round2 = game.play_round(&mut ()).unwrap();
    assert!(round2.turn(pid(1)).is_none());
    assert!(game.state().player(pid(1)).unwrap().dice().is_empty());
    assert!(round2.game_over);
}

#[test]
fn test_run_reports_initial_state_once() {
    let config = GameConfig::new(2, 1).unwrap();
    let mut game = Game::new(&config, ScriptedDice::new([6, 4, 2]));
    let mut log = EventLog::new();

    let summary = game.run(&mut log);

    let initial: Vec<_> = log
        .events()
        .iter()
        .filter(|e| matches!(e, GameEvent::InitialState { .. }))
        .collect();
    assert_eq!(initial.len(), 1);

    match log.events().last() {
        Some(GameEvent::GameOver(over)) => assert_eq!(over, &summary),
        other => panic!("expected GameOver last, got {other:?}"),
    }
}
