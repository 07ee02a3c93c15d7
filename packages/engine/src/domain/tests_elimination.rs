//! Unit tests for the mode-keyed elimination policy.

use crate::domain::betting::{call_bet, raise_bet, Bet};
use crate::domain::config::{GameConfig, GameMode};
use crate::domain::lifecycle::begin_next_round;
use crate::domain::state::{current_raiser, GameState, Phase, PlayerId};
use crate::domain::test_state_helpers::{open_round_with_cups, set_cup};

/// Three seats with one scripted die each: 4, 4, 2.
fn scripted_three(mode: GameMode) -> GameState {
    let cups: Vec<(PlayerId, &[u8])> = vec![(1, &[4]), (2, &[4]), (3, &[2])];
    open_round_with_cups(&cups, GameConfig::default().with_dice(1, 6).with_mode(mode))
}

/// Force a loss onto the current opening raiser: they claim the impossible
/// and the next seat calls.
fn force_loss_on_opener(state: &mut GameState) -> PlayerId {
    let opener = current_raiser(state).expect("raiser");
    let sides = state.config.dice_sides;
    raise_bet(state, opener, Bet::new(1000, sides)).expect("raise");
    let caller = current_raiser(state).expect("raiser");
    let outcome = call_bet(state, caller).expect("call");
    assert!(!outcome.bet_met);
    assert_eq!(outcome.loser, opener);
    opener
}

#[test]
fn sudden_death_removes_the_loser_immediately() {
    let mut state = scripted_three(GameMode::SuddenDeath);
    let loser = force_loss_on_opener(&mut state);

    assert_eq!(loser, 1);
    assert_eq!(state.seating, vec![2, 3]);
    assert!(!state.cups.contains_key(&1));
    assert_eq!(state.dice_left[&1], 0);
    assert_eq!(state.losses[&1], 1);
    assert_eq!(state.phase, Phase::RoundResolved);
}

#[test]
fn sudden_death_finishes_at_one_live_player() {
    let cups: Vec<(PlayerId, &[u8])> = vec![(1, &[4]), (2, &[4])];
    let mut state = open_round_with_cups(
        &cups,
        GameConfig::default().with_dice(1, 6).with_mode(GameMode::SuddenDeath),
    );
    let outcome = {
        raise_bet(&mut state, 1, Bet::new(1000, 6)).unwrap();
        call_bet(&mut state, 2).unwrap()
    };
    assert!(outcome.finished);
    assert_eq!(state.phase, Phase::Finished);
    assert_eq!(state.seating, vec![2]);
}

#[test]
fn last_man_standing_strips_a_die_per_loss() {
    let mut state = scripted_three(GameMode::LastManStanding);
    for player in [1i64, 2, 3] {
        set_cup(&mut state, player, &[4, 4]);
    }

    let loser = force_loss_on_opener(&mut state);
    assert_eq!(state.dice_left[&loser], 1);
    assert_eq!(state.losses[&loser], 1);
    assert!(state.is_seated(loser));

    // Next round the loser rolls one fewer die.
    begin_next_round(&mut state).unwrap();
    assert_eq!(state.cups[&loser].total(), 1);
}

#[test]
fn last_man_standing_removes_at_zero_dice() {
    let mut state = scripted_three(GameMode::LastManStanding);
    let loser = force_loss_on_opener(&mut state);

    // One die each, so a single loss empties the loser's cup.
    assert_eq!(state.dice_left[&loser], 0);
    assert!(!state.is_seated(loser));
    assert_eq!(state.live_count(), 2);
    assert_eq!(state.phase, Phase::RoundResolved);
}

#[test]
fn first_elimination_keeps_the_loser_seated() {
    let mut state = scripted_three(GameMode::FirstElimination);
    for player in [1i64, 2, 3] {
        set_cup(&mut state, player, &[4, 4]);
    }

    let loser = force_loss_on_opener(&mut state);
    assert!(state.is_seated(loser));
    assert_eq!(state.dice_left[&loser], 1);
    assert_eq!(state.phase, Phase::RoundResolved);
}

#[test]
fn first_elimination_finishes_the_moment_a_cup_empties() {
    // One die per player: the first loss ends the game even with three live.
    let mut state = scripted_three(GameMode::FirstElimination);
    let loser = force_loss_on_opener(&mut state);

    assert_eq!(state.phase, Phase::Finished);
    assert_eq!(state.dice_left[&loser], 0);
    assert_eq!(state.live_count(), 3);
}

#[test]
fn infinite_only_counts_losses() {
    let mut state = scripted_three(GameMode::Infinite);
    for _ in 0..5 {
        let loser = force_loss_on_opener(&mut state);
        assert!(state.is_seated(loser));
        assert_eq!(state.phase, Phase::RoundResolved);
        begin_next_round(&mut state).unwrap();
    }
    assert_eq!(state.live_count(), 3);
    let total: u32 = state.losses.values().sum();
    assert_eq!(total, 5);
    assert_eq!(state.dice_left[&1], 1);
}

#[test]
fn removal_before_the_cursor_keeps_the_pointer_live() {
    // Seat 0 is eliminated while the cursor had advanced past it; every
    // subsequent read must still resolve to a live seat.
    let mut state = scripted_three(GameMode::SuddenDeath);
    let loser = force_loss_on_opener(&mut state);
    assert_eq!(loser, 1);

    let raiser = current_raiser(&state).expect("raiser");
    assert!(state.is_seated(raiser));

    begin_next_round(&mut state).unwrap();
    let opener = current_raiser(&state).expect("raiser");
    assert!(state.is_seated(opener));
    // Round 2 over two live seats opens at seat index 1.
    assert_eq!(opener, state.seating[1]);
}

#[test]
fn removal_after_the_cursor_keeps_the_pointer_live() {
    // The last raiser loses while the cursor points back at seat 0.
    let cups: Vec<(PlayerId, &[u8])> = vec![(1, &[2]), (2, &[2]), (3, &[4])];
    let mut state = open_round_with_cups(
        &cups,
        GameConfig::default().with_dice(1, 6).with_mode(GameMode::SuddenDeath),
    );
    raise_bet(&mut state, 1, Bet::new(1, 4)).unwrap();
    raise_bet(&mut state, 2, Bet::new(2, 4)).unwrap();
    let outcome = call_bet(&mut state, 1).unwrap();
    assert_eq!(outcome.loser, 2);
    assert_eq!(state.seating, vec![1, 3]);

    let raiser = current_raiser(&state).expect("raiser");
    assert!(state.is_seated(raiser));
}

#[test]
fn elimination_is_mode_pure() {
    // Identical scripted cups and call sequences produce identical state.
    for mode in [
        GameMode::SuddenDeath,
        GameMode::LastManStanding,
        GameMode::FirstElimination,
        GameMode::Infinite,
    ] {
        let mut a = scripted_three(mode);
        let mut b = scripted_three(mode);
        for state in [&mut a, &mut b] {
            raise_bet(state, 1, Bet::new(2, 4)).unwrap();
            call_bet(state, 2).unwrap();
        }
        assert_eq!(a.seating, b.seating, "{mode:?}");
        assert_eq!(a.losses, b.losses, "{mode:?}");
        assert_eq!(a.dice_left, b.dice_left, "{mode:?}");
        assert_eq!(a.phase, b.phase, "{mode:?}");
    }
}
