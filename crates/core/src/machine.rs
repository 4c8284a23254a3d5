//! Frame machine - which frame and which throw comes next.
//!
//! The machine is a pure function `(FrameState, GameContext, FrameEvent) ->
//! (FrameState, GameContext)`. Guards for a state are checked in a fixed order
//! and the first one that holds wins; several of them overlap (a strike on
//! frame 9 also satisfies the plain fallthrough), so the order is part of the
//! rules.
//!
//! Throws are assumed to be validated already (see [`crate::validator`]).
//! Every state ends in an unconditional arm, so `transition` never fails.

use crate::context::GameContext;
use crate::types::{FrameEvent, FrameState, LAST_REGULAR_FRAME, PINS_PER_FRAME};

/// Strike on frames 1-8: the next frame is another regular one.
fn is_strike_in_regular_frame(ctx: &GameContext, pins: u8) -> bool {
    pins == PINS_PER_FRAME && ctx.frame_index < LAST_REGULAR_FRAME
}

/// Strike on frame 9: the next frame is the final one.
fn is_strike_with_last_frame_next(ctx: &GameContext, pins: u8) -> bool {
    pins == PINS_PER_FRAME && ctx.frame_index == LAST_REGULAR_FRAME
}

fn is_last_frame_next(ctx: &GameContext) -> bool {
    ctx.frame_index == LAST_REGULAR_FRAME
}

/// Strike or spare on the first two throws of the final frame.
///
/// Only the first recorded throw of the frame is read, never a running total.
fn is_strike_or_spare_in_last_frame(ctx: &GameContext, pins: u8) -> bool {
    let first = ctx.first_throw().unwrap_or(0);
    pins + first >= PINS_PER_FRAME
}

/// Apply one event and return the next state together with the updated context.
///
/// # Examples
///
/// ```
/// use tui_bowling_core::{transition, GameContext};
/// use tui_bowling_core::types::{FrameEvent, FrameState};
///
/// let ctx = GameContext::new();
/// let (state, ctx) = transition(FrameState::FrameFirstThrow, &ctx, FrameEvent::Throw(10));
/// assert_eq!(state, FrameState::FrameFirstThrow);
/// assert_eq!(ctx.frame_index(), 2);
/// ```
pub fn transition(
    state: FrameState,
    ctx: &GameContext,
    event: FrameEvent,
) -> (FrameState, GameContext) {
    let pins = match event {
        FrameEvent::Reset => return (FrameState::FrameFirstThrow, GameContext::new()),
        FrameEvent::Throw(pins) => pins,
    };

    let mut next = ctx.clone();
    let to = match state {
        FrameState::FrameFirstThrow => {
            if is_strike_in_regular_frame(ctx, pins) {
                next.advance_frame();
                next.clear_throws();
                FrameState::FrameFirstThrow
            } else if is_strike_with_last_frame_next(ctx, pins) {
                next.advance_frame();
                next.clear_throws();
                FrameState::LastFrameFirstThrow
            } else {
                next.record_throw(pins);
                FrameState::FrameSecondThrow
            }
        }
        FrameState::FrameSecondThrow => {
            next.advance_frame();
            next.clear_throws();
            if is_last_frame_next(ctx) {
                FrameState::LastFrameFirstThrow
            } else {
                FrameState::FrameFirstThrow
            }
        }
        FrameState::LastFrameFirstThrow => {
            next.record_throw(pins);
            FrameState::LastFrameSecondThrow
        }
        FrameState::LastFrameSecondThrow => {
            if is_strike_or_spare_in_last_frame(ctx, pins) {
                next.record_throw(pins);
                FrameState::LastFrameThirdThrow
            } else {
                FrameState::Completed
            }
        }
        FrameState::LastFrameThirdThrow => FrameState::Completed,
        // Late throws are dropped silently.
        FrameState::Completed => FrameState::Completed,
    };

    (to, next)
}

/// Owns the current state and context and feeds events through [`transition`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrameMachine {
    state: FrameState,
    context: GameContext,
}

impl FrameMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FrameState {
        self.state
    }

    pub fn context(&self) -> &GameContext {
        &self.context
    }

    /// Apply an event and return the state after it.
    pub fn send(&mut self, event: FrameEvent) -> FrameState {
        let (state, context) = transition(self.state, &self.context, event);
        self.state = state;
        self.context = context;
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn machine_at_frame(frame_index: u8) -> FrameMachine {
        let mut m = FrameMachine::new();
        while m.context().frame_index() < frame_index {
            m.send(FrameEvent::Throw(10));
        }
        m
    }

    #[test]
    fn initial_state_is_frame_first_throw() {
        let m = FrameMachine::new();
        assert_eq!(m.state(), FrameState::FrameFirstThrow);
        assert_eq!(m.context().frame_index(), 1);
        assert!(m.context().throws().is_empty());
    }

    #[rstest]
    #[case(1)]
    #[case(4)]
    #[case(8)]
    fn strike_in_regular_frame_moves_to_next_frame(#[case] frame: u8) {
        let mut m = machine_at_frame(frame);
        assert_eq!(m.send(FrameEvent::Throw(10)), FrameState::FrameFirstThrow);
        assert_eq!(m.context().frame_index(), frame + 1);
        assert!(m.context().throws().is_empty());
    }

    #[test]
    fn strike_on_frame_nine_enters_last_frame() {
        let mut m = machine_at_frame(9);
        assert_eq!(m.send(FrameEvent::Throw(10)), FrameState::LastFrameFirstThrow);
        assert_eq!(m.context().frame_index(), 10);
        assert!(m.context().throws().is_empty());
    }

    #[test]
    fn open_first_throw_is_recorded() {
        let mut m = FrameMachine::new();
        assert_eq!(m.send(FrameEvent::Throw(4)), FrameState::FrameSecondThrow);
        assert_eq!(m.context().frame_index(), 1);
        assert_eq!(m.context().throws(), &[4]);
    }

    #[test]
    fn second_throw_closes_the_frame_without_recording() {
        let mut m = FrameMachine::new();
        m.send(FrameEvent::Throw(4));
        assert_eq!(m.send(FrameEvent::Throw(6)), FrameState::FrameFirstThrow);
        assert_eq!(m.context().frame_index(), 2);
        assert!(m.context().throws().is_empty());
    }

    #[test]
    fn second_throw_on_frame_nine_enters_last_frame() {
        let mut m = machine_at_frame(9);
        m.send(FrameEvent::Throw(2));
        assert_eq!(m.send(FrameEvent::Throw(3)), FrameState::LastFrameFirstThrow);
        assert_eq!(m.context().frame_index(), 10);
    }

    #[rstest]
    #[case(10, 10, FrameState::LastFrameThirdThrow)]
    #[case(10, 0, FrameState::LastFrameThirdThrow)]
    #[case(5, 5, FrameState::LastFrameThirdThrow)]
    #[case(0, 10, FrameState::LastFrameThirdThrow)]
    #[case(5, 4, FrameState::Completed)]
    #[case(0, 0, FrameState::Completed)]
    fn last_frame_reopens_only_on_strike_or_spare(
        #[case] first: u8,
        #[case] second: u8,
        #[case] expected: FrameState,
    ) {
        let mut m = machine_at_frame(10);
        assert_eq!(m.send(FrameEvent::Throw(first)), FrameState::LastFrameSecondThrow);
        assert_eq!(m.send(FrameEvent::Throw(second)), expected);
        assert_eq!(m.context().frame_index(), 10);
    }

    #[test]
    fn closing_last_frame_leaves_throws_untouched() {
        let mut m = machine_at_frame(10);
        m.send(FrameEvent::Throw(5));
        m.send(FrameEvent::Throw(4));
        assert_eq!(m.state(), FrameState::Completed);
        assert_eq!(m.context().throws(), &[5]);
    }

    #[test]
    fn third_throw_completes_the_game() {
        let mut m = machine_at_frame(10);
        m.send(FrameEvent::Throw(10));
        m.send(FrameEvent::Throw(10));
        assert_eq!(m.context().throws(), &[10, 10]);
        assert_eq!(m.send(FrameEvent::Throw(10)), FrameState::Completed);
        assert_eq!(m.context().throws(), &[10, 10]);
    }

    #[test]
    fn completed_ignores_throws() {
        let mut m = machine_at_frame(10);
        m.send(FrameEvent::Throw(0));
        m.send(FrameEvent::Throw(0));
        let before = m.clone();
        assert_eq!(m.send(FrameEvent::Throw(7)), FrameState::Completed);
        assert_eq!(m, before);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    fn reset_from_any_state_returns_to_start(#[case] extra_throws: usize) {
        let mut m = machine_at_frame(10);
        for _ in 0..extra_throws {
            m.send(FrameEvent::Throw(10));
        }
        assert_eq!(m.send(FrameEvent::Reset), FrameState::FrameFirstThrow);
        assert_eq!(m, FrameMachine::new());
        assert_eq!(m.send(FrameEvent::Reset), FrameState::FrameFirstThrow);
        assert_eq!(m, FrameMachine::new());
    }

    #[test]
    fn transition_does_not_touch_its_input() {
        let ctx = GameContext::new();
        let (_, next) = transition(FrameState::FrameFirstThrow, &ctx, FrameEvent::Throw(3));
        assert!(ctx.throws().is_empty());
        assert_eq!(next.throws(), &[3]);
    }
}
