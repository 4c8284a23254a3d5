//! Core bowling logic module - pure, deterministic, and testable
//!
//! This crate tracks the progression of a ten-pin bowling game: which frame is
//! being played and which throw within it comes next. It has **zero
//! dependencies** on UI or I/O, and does no score tallying.
//!
//! # Module Structure
//!
//! - [`context`]: frame number and the throws recorded for the current frame
//! - [`machine`]: the six-state frame machine and its ordered guards
//! - [`validator`]: range and pin-budget checks run before the machine sees a throw
//! - [`history`]: per-frame throw list for display
//! - [`game`]: the collaborator-facing surface (`submit`, `reset`, snapshots)
//! - [`snapshot`]: read-only copies of game state
//!
//! # Frame Rules
//!
//! - Frames 1-9: a strike closes the frame at once, otherwise two throws close it
//! - Frame 10: two throws, plus a third when the first two make a strike or spare
//! - At most ten pins per rack; the final frame re-racks after a strike or spare
//! - Throws after the game is completed are ignored; reset works from any state
//!
//! # Example
//!
//! ```
//! use tui_bowling_core::BowlingGame;
//! use tui_bowling_core::types::{FrameState, ValidationError};
//!
//! let mut game = BowlingGame::new();
//! game.submit(10).unwrap();
//! game.submit(5).unwrap();
//!
//! assert_eq!(game.context().frame_index(), 2);
//! assert_eq!(game.current_state(), FrameState::FrameSecondThrow);
//! assert_eq!(game.submit(6), Err(ValidationError::BudgetExceeded { pins_left: 5 }));
//! ```

pub mod context;
pub mod game;
pub mod history;
pub mod machine;
pub mod snapshot;
pub mod validator;

pub use tui_bowling_types as types;

// Re-export commonly used types for convenience
pub use context::GameContext;
pub use game::BowlingGame;
pub use history::{FrameHistory, FrameThrows};
pub use machine::{transition, FrameMachine};
pub use snapshot::GameSnapshot;
pub use validator::{check_range, parse_throw, pins_left, validate_throw};
