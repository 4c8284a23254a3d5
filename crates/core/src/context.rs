//! Game context - the frame machine's only mutable data.

use arrayvec::ArrayVec;

use crate::types::{FRAME_COUNT, MAX_THROWS_PER_FRAME};

/// Current frame number plus the throws recorded for it so far.
///
/// Only the frame machine mutates a context. Everything else reads it through
/// the accessors or a [`GameSnapshot`](crate::snapshot::GameSnapshot).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameContext {
    pub(crate) frame_index: u8,
    pub(crate) throws: ArrayVec<u8, MAX_THROWS_PER_FRAME>,
}

impl GameContext {
    /// Fresh context: frame 1, no throws.
    pub fn new() -> Self {
        Self {
            frame_index: 1,
            throws: ArrayVec::new(),
        }
    }

    /// 1-based frame number, always in `1..=10`.
    pub fn frame_index(&self) -> u8 {
        self.frame_index
    }

    pub fn throws(&self) -> &[u8] {
        &self.throws
    }

    /// Sum of the throws recorded for the current frame.
    pub fn pins_down(&self) -> u8 {
        self.throws.iter().sum()
    }

    pub fn first_throw(&self) -> Option<u8> {
        self.throws.first().copied()
    }

    pub(crate) fn advance_frame(&mut self) {
        debug_assert!(self.frame_index < FRAME_COUNT);
        self.frame_index = (self.frame_index + 1).min(FRAME_COUNT);
    }

    pub(crate) fn clear_throws(&mut self) {
        self.throws.clear();
    }

    pub(crate) fn record_throw(&mut self, pins: u8) {
        // The machine keeps two throws at most; the third throw of frame 10 only reaches history.
        let kept = self.throws.try_push(pins).is_ok();
        debug_assert!(kept, "frame {} context is full", self.frame_index);
    }
}

impl Default for GameContext {
    fn default() -> Self {
        Self::new()
    }
}
