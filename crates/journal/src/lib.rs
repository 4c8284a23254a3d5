//! Session journal - configuration and append-only JSON-lines logging.
//!
//! Every accepted, rejected or ignored throw and every reset can be written as
//! one JSON object per line. The journal is off unless a path is configured.

pub mod config;
pub mod journal;
pub mod record;

pub use tui_bowling_core as core;
pub use tui_bowling_types as types;

pub use config::SessionConfig;
pub use journal::Journal;
pub use record::{JournalLine, JournalRecord, StateTag};
