//! TUI Bowling (workspace facade crate).
//!
//! Re-exports the workspace crates under one `tui_bowling::{core,input,journal,term,types}`
//! path and adds [`session::Session`], the glue between key input, the game and the journal.

pub use tui_bowling_core as core;
pub use tui_bowling_input as input;
pub use tui_bowling_journal as journal;
pub use tui_bowling_term as term;
pub use tui_bowling_types as types;

pub mod session;

pub use session::Session;
