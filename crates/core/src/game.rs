//! Bowling game - the surface collaborators talk to.
//!
//! Ties together the throw validator, the frame machine and the frame history.
//! Each `submit` runs to completion before returning; there is exactly one
//! writer and the snapshot is how readers see the result.

use crate::context::GameContext;
use crate::history::FrameHistory;
use crate::machine::FrameMachine;
use crate::snapshot::GameSnapshot;
use crate::types::{FrameEvent, FrameState, ThrowEvent, ValidationError};
use crate::validator::{check_range, parse_throw, pins_left, validate_throw};

#[derive(Debug, Clone, Default)]
pub struct BowlingGame {
    machine: FrameMachine,
    history: FrameHistory,
    /// Monotonic episode id (increments on reset).
    episode_id: u32,
    /// Accepted throws this episode, including ones the final frame does not keep in context.
    throw_count: u32,
    /// Last accepted throw (consumed by observers).
    last_event: Option<ThrowEvent>,
}

impl BowlingGame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_state(&self) -> FrameState {
        self.machine.state()
    }

    pub fn context(&self) -> &GameContext {
        self.machine.context()
    }

    pub fn history(&self) -> &FrameHistory {
        &self.history
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn pins_left(&self) -> u8 {
        pins_left(self.machine.context())
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.state = self.machine.state();
        out.context.clone_from(self.machine.context());
        out.history.clone_from(&self.history);
        out.pins_left = self.pins_left();
        out.episode_id = self.episode_id;
        out.throw_count = self.throw_count;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Validate a throw and apply it.
    ///
    /// On error nothing changes. Throws made after the game is completed are
    /// ignored: the snapshot comes back unchanged and nothing is recorded.
    pub fn submit(&mut self, candidate: i64) -> Result<GameSnapshot, ValidationError> {
        if self.machine.state().is_completed() {
            // Range is still enforced so bad input is reported consistently.
            check_range(candidate)?;
            return Ok(self.snapshot());
        }

        let pins = validate_throw(self.machine.context(), candidate)?;
        let frame_index = self.machine.context().frame_index();
        let from = self.machine.state();

        // Credit goes to the frame active at throw time.
        let recorded = self.history.record(frame_index, pins);
        debug_assert!(recorded, "frame {frame_index} history is full");
        let to = self.machine.send(FrameEvent::Throw(pins));

        self.throw_count = self.throw_count.wrapping_add(1);
        self.last_event = Some(ThrowEvent {
            frame_index,
            pins,
            from,
            to,
        });
        Ok(self.snapshot())
    }

    /// Parse raw pin-entry text, then [`submit`](Self::submit) it.
    pub fn submit_raw(&mut self, raw: &str) -> Result<GameSnapshot, ValidationError> {
        let candidate = parse_throw(raw)?;
        self.submit(candidate)
    }

    /// Start over from frame 1. Valid from every state, including completed.
    pub fn reset(&mut self) -> GameSnapshot {
        self.machine.send(FrameEvent::Reset);
        self.history.clear();
        self.throw_count = 0;
        self.last_event = None;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.snapshot()
    }

    /// Take the last throw event (if any).
    pub fn take_last_event(&mut self) -> Option<ThrowEvent> {
        self.last_event.take()
    }
}
