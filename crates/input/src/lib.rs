//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and holds the
//! pin-entry field where a throw is typed before it is submitted.

pub mod entry;
pub mod map;

pub use tui_bowling_types as types;

pub use entry::PinEntry;
pub use map::{handle_key_event, should_quit};
