//! Frame history - every accepted throw, filed under the frame it was made in.
//!
//! The recorder makes no decisions. It appends whatever it is told to the frame
//! it is told, which is the frame active *before* the machine transitions.

use arrayvec::ArrayVec;

use crate::types::{FRAME_COUNT, MAX_THROWS_PER_FRAME};

/// Throws recorded for one frame.
pub type FrameThrows = ArrayVec<u8, MAX_THROWS_PER_FRAME>;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrameHistory {
    frames: [FrameThrows; FRAME_COUNT as usize],
}

impl FrameHistory {
    pub fn new() -> Self {
        Self {
            frames: std::array::from_fn(|_| ArrayVec::new()),
        }
    }

    /// Append `pins` to frame `frame_index` (1-based).
    ///
    /// Returns `false` when the frame does not exist or is already full.
    pub fn record(&mut self, frame_index: u8, pins: u8) -> bool {
        let Some(slot) = (frame_index as usize)
            .checked_sub(1)
            .and_then(|i| self.frames.get_mut(i))
        else {
            return false;
        };
        slot.try_push(pins).is_ok()
    }

    /// Throws of frame `frame_index` (1-based), empty for unknown frames.
    pub fn frame(&self, frame_index: u8) -> &[u8] {
        (frame_index as usize)
            .checked_sub(1)
            .and_then(|i| self.frames.get(i))
            .map(|f| f.as_slice())
            .unwrap_or(&[])
    }

    pub fn frames(&self) -> &[FrameThrows; FRAME_COUNT as usize] {
        &self.frames
    }

    /// Frames that have at least one throw, with their 1-based numbers.
    pub fn played(&self) -> impl Iterator<Item = (u8, &[u8])> + '_ {
        self.frames
            .iter()
            .enumerate()
            .filter(|(_, f)| !f.is_empty())
            .map(|(i, f)| ((i + 1) as u8, f.as_slice()))
    }

    pub fn throw_count(&self) -> usize {
        self.frames.iter().map(|f| f.len()).sum()
    }

    pub fn clear(&mut self) {
        for f in self.frames.iter_mut() {
            f.clear();
        }
    }
}

impl Default for FrameHistory {
    fn default() -> Self {
        Self::new()
    }
}
