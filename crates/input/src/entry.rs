//! Pin-entry field: the text a throw is typed into before submitting.
//!
//! Validation is not done here. The field keeps whatever was typed (within a
//! small bound) so the game can report `out of range` for it.

use arrayvec::ArrayString;

/// Longest text the field keeps (enough for `-10` or `10.5`).
pub const PIN_ENTRY_CAPACITY: usize = 4;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PinEntry {
    text: ArrayString<PIN_ENTRY_CAPACITY>,
}

impl PinEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a character. Returns `false` if it was ignored.
    pub fn push(&mut self, ch: char) -> bool {
        if !(ch.is_ascii_digit() || ch == '-' || ch == '.') {
            return false;
        }
        self.text.try_push(ch).is_ok()
    }

    pub fn pop(&mut self) -> Option<char> {
        self.text.pop()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
