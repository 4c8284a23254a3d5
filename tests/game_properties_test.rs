//! Frame progression properties of a full game.

use proptest::prelude::*;
use rstest::rstest;

use tui_bowling::core::{BowlingGame, FrameMachine};
use tui_bowling::types::{FrameEvent, FrameState, ValidationError};

fn play(throws: &[i64]) -> BowlingGame {
    let mut game = BowlingGame::new();
    for &t in throws {
        game.submit(t).unwrap();
    }
    game
}

#[test]
fn perfect_game_ends_with_three_throws_in_frame_ten() {
    let game = play(&[10; 12]);
    assert_eq!(game.current_state(), FrameState::Completed);
    assert_eq!(game.context().frame_index(), 10);
    assert_eq!(game.history().frame(10), &[10, 10, 10]);
    for n in 1..=9 {
        assert_eq!(game.history().frame(n), &[10]);
    }
}

#[test]
fn gutter_game_ends_with_two_throws_in_frame_ten() {
    let game = play(&[0; 20]);
    assert_eq!(game.current_state(), FrameState::Completed);
    assert_eq!(game.context().frame_index(), 10);
    assert_eq!(game.history().frame(10), &[0, 0]);
    assert_eq!(game.history().throw_count(), 20);
}

#[test]
fn over_budget_second_throw_is_rejected_without_change() {
    let mut game = play(&[5]);
    let before = game.snapshot();
    assert_eq!(
        game.submit(6),
        Err(ValidationError::BudgetExceeded { pins_left: 5 })
    );
    assert_eq!(game.current_state(), FrameState::FrameSecondThrow);
    assert_eq!(game.snapshot(), before);
}

#[test]
fn strike_on_frame_nine_enters_the_last_frame() {
    let game = play(&[10; 9]);
    assert_eq!(game.current_state(), FrameState::LastFrameFirstThrow);
    assert_eq!(game.context().frame_index(), 10);
    assert!(game.context().throws().is_empty());
}

#[rstest]
#[case(&[5, 5], FrameState::LastFrameThirdThrow)]
#[case(&[10, 0], FrameState::LastFrameThirdThrow)]
#[case(&[5, 4], FrameState::Completed)]
#[case(&[0, 0], FrameState::Completed)]
fn last_frame_outcome(#[case] last: &[i64], #[case] expected: FrameState) {
    let mut throws = vec![0i64; 18];
    throws.extend_from_slice(last);
    let game = play(&throws);
    assert_eq!(game.current_state(), expected);
}

#[test]
fn final_frame_strike_then_open_rack_budget() {
    let mut game = play(&[10; 10]);
    game.submit(3).unwrap();
    assert_eq!(game.current_state(), FrameState::LastFrameThirdThrow);
    assert_eq!(game.pins_left(), 7);
    assert_eq!(
        game.submit(8),
        Err(ValidationError::BudgetExceeded { pins_left: 7 })
    );
    game.submit(7).unwrap();
    assert_eq!(game.current_state(), FrameState::Completed);
    assert_eq!(game.history().frame(10), &[10, 3, 7]);
}

#[rstest]
#[case(&[])]
#[case(&[3])]
#[case(&[10, 10, 10, 10])]
#[case(&[10; 12])]
fn reset_always_yields_a_fresh_game(#[case] throws: &[i64]) {
    let mut game = play(throws);
    let first = game.reset();
    let second = game.reset();
    for snap in [&first, &second] {
        assert_eq!(snap.state, FrameState::FrameFirstThrow);
        assert_eq!(snap.frame_index(), 1);
        assert!(snap.throws().is_empty());
        assert_eq!(snap.history.throw_count(), 0);
    }
    assert_eq!(first.context, second.context);
}

#[test]
fn throws_after_completion_change_nothing() {
    let mut game = play(&[10; 12]);
    let before = game.snapshot();
    for pins in 0..=10 {
        assert_eq!(game.submit(pins), Ok(before.clone()));
    }
    assert_eq!(game.snapshot(), before);
}

/// A random game that respects the per-frame pin budget, as a list of throws.
fn legal_game() -> impl Strategy<Value = Vec<i64>> {
    let regular = (0i64..=10, 0i64..=10).prop_map(|(a, b)| {
        if a == 10 {
            vec![10]
        } else {
            vec![a, b % (11 - a)]
        }
    });
    let last = (0i64..=10, 0i64..=10, 0i64..=10).prop_map(|(a, b, c)| {
        let b = if a == 10 { b } else { b % (11 - a) };
        let reopened = a + b >= 10;
        if !reopened {
            return vec![a, b];
        }
        let standing = if a == 10 && b < 10 { 10 - b } else { 10 };
        vec![a, b, c % (standing + 1)]
    });
    (prop::collection::vec(regular, 9), last).prop_map(|(frames, last)| {
        let mut throws: Vec<i64> = frames.into_iter().flatten().collect();
        throws.extend(last);
        throws
    })
}

proptest! {
    #[test]
    fn legal_games_always_complete_on_frame_ten(throws in legal_game()) {
        let game = play(&throws);
        prop_assert_eq!(game.current_state(), FrameState::Completed);
        prop_assert_eq!(game.context().frame_index(), 10);
        prop_assert_eq!(game.history().throw_count(), throws.len());
    }

    #[test]
    fn frame_index_counts_completed_regular_frames(throws in legal_game(), cut in 0usize..24) {
        let cut = cut.min(throws.len());
        let mut machine = FrameMachine::new();
        for &t in &throws[..cut] {
            machine.send(FrameEvent::Throw(t as u8));
            prop_assert!((1..=10).contains(&machine.context().frame_index()));
        }

        // Walk the same prefix frame by frame: a strike closes a regular frame, else two throws do.
        let mut completed = 0u8;
        let mut i = 0usize;
        while completed < 9 && i < cut {
            let needed = if throws[i] == 10 { 1 } else { 2 };
            if i + needed > cut {
                break;
            }
            i += needed;
            completed += 1;
        }
        prop_assert_eq!(machine.context().frame_index(), (1 + completed).min(10));
    }

    #[test]
    fn history_credits_match_throw_order(throws in legal_game()) {
        let game = play(&throws);
        let recorded: Vec<i64> = game
            .history()
            .frames()
            .iter()
            .flat_map(|f| f.iter().map(|&p| p as i64))
            .collect();
        prop_assert_eq!(recorded, throws);
    }

    #[test]
    fn out_of_range_is_always_rejected(pins in prop_oneof![i64::MIN..0, 11i64..i64::MAX]) {
        let mut game = BowlingGame::new();
        prop_assert_eq!(game.submit(pins), Err(ValidationError::OutOfRange));
    }
}
