//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no I/O, making them usable in any context
//! (frame machine, terminal rendering, session journal).
//!
//! # Game Shape
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PINS_PER_FRAME` | 10 | Pins racked at the start of a frame |
//! | `FRAME_COUNT` | 10 | Frames in one game |
//! | `LAST_REGULAR_FRAME` | 9 | Last frame that follows the two-throw rules |
//! | `MAX_THROWS_PER_FRAME` | 3 | Only reachable in the final frame |
//!
//! # Examples
//!
//! ```
//! use tui_bowling_types::{FrameState, GameAction, ValidationError, FRAME_COUNT};
//!
//! let state = FrameState::from_str("last frame third throw").unwrap();
//! assert_eq!(state, FrameState::LastFrameThirdThrow);
//! assert!(state.is_last_frame());
//!
//! assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
//!
//! let err = ValidationError::BudgetExceeded { pins_left: 5 };
//! assert_eq!(err.reason(), "exceeds pins left");
//! assert_eq!(err.pins_left(), Some(5));
//!
//! assert_eq!(FRAME_COUNT, 10);
//! ```

use thiserror::Error;

/// Pins standing at the start of every frame (and every re-rack in the final frame).
pub const PINS_PER_FRAME: u8 = 10;

/// Frames in one game.
pub const FRAME_COUNT: u8 = 10;

/// The last frame played with regular two-throw rules.
pub const LAST_REGULAR_FRAME: u8 = FRAME_COUNT - 1;

/// Upper bound on throws recorded for a single frame (final frame only).
pub const MAX_THROWS_PER_FRAME: usize = 3;


/// The six exclusive states of the frame machine.
///
/// - **FrameFirstThrow**: frames 1-9, rack is fresh (initial state)
/// - **FrameSecondThrow**: frames 1-9, first throw was not a strike
/// - **LastFrameFirstThrow** / **LastFrameSecondThrow** / **LastFrameThirdThrow**: frame 10
/// - **Completed**: terminal, only a reset leaves it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FrameState {
    #[default]
    FrameFirstThrow,
    FrameSecondThrow,
    LastFrameFirstThrow,
    LastFrameSecondThrow,
    LastFrameThirdThrow,
    Completed,
}

impl FrameState {
    /// Every state, in declaration order.
    pub const ALL: [FrameState; 6] = [
        FrameState::FrameFirstThrow,
        FrameState::FrameSecondThrow,
        FrameState::LastFrameFirstThrow,
        FrameState::LastFrameSecondThrow,
        FrameState::LastFrameThirdThrow,
        FrameState::Completed,
    ];

    /// Parse a state from its machine name or its display label (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_bowling_types::FrameState;
    ///
    /// assert_eq!(FrameState::from_str("completed"), Some(FrameState::Completed));
    /// assert_eq!(FrameState::from_str("finished"), Some(FrameState::Completed));
    /// assert_eq!(FrameState::from_str("Second Throw"), Some(FrameState::FrameSecondThrow));
    /// assert_eq!(FrameState::from_str("bonus"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "frame_first_throw" | "first throw" => Some(FrameState::FrameFirstThrow),
            "frame_second_throw" | "second throw" => Some(FrameState::FrameSecondThrow),
            "last_frame_first_throw" | "last frame first throw" => {
                Some(FrameState::LastFrameFirstThrow)
            }
            "last_frame_second_throw" | "last frame second throw" => {
                Some(FrameState::LastFrameSecondThrow)
            }
            "last_frame_third_throw" | "last frame third throw" => {
                Some(FrameState::LastFrameThirdThrow)
            }
            "completed" | "finished" => Some(FrameState::Completed),
            _ => None,
        }
    }

    /// Machine name (snake_case), used by the session journal.
    pub fn as_str(&self) -> &'static str {
        match self {
            FrameState::FrameFirstThrow => "frame_first_throw",
            FrameState::FrameSecondThrow => "frame_second_throw",
            FrameState::LastFrameFirstThrow => "last_frame_first_throw",
            FrameState::LastFrameSecondThrow => "last_frame_second_throw",
            FrameState::LastFrameThirdThrow => "last_frame_third_throw",
            FrameState::Completed => "completed",
        }
    }

    /// Contextual label for the presentation layer.
    pub fn label(&self) -> &'static str {
        match self {
            FrameState::FrameFirstThrow => "first throw",
            FrameState::FrameSecondThrow => "second throw",
            FrameState::LastFrameFirstThrow => "last frame first throw",
            FrameState::LastFrameSecondThrow => "last frame second throw",
            FrameState::LastFrameThirdThrow => "last frame third throw",
            FrameState::Completed => "finished",
        }
    }

    pub fn is_last_frame(&self) -> bool {
        !matches!(self, FrameState::FrameFirstThrow | FrameState::FrameSecondThrow)
    }

    pub fn is_completed(&self) -> bool {
        *self == FrameState::Completed
    }
}

/// Events accepted by the frame machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameEvent {
    /// Pins knocked down by one throw (already validated, 0..=10)
    Throw(u8),
    /// Discard the game and start over from frame 1
    Reset,
}

/// Presentation-level intents produced by the input layer.
///
/// These map user keys onto the pin-entry field and the two game commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Type one character into the pin-entry field
    Digit(char),
    /// Remove the last typed character
    Erase,
    /// Empty the pin-entry field
    ClearEntry,
    /// Submit the pin-entry field as a throw
    Throw,
    /// Start a new game
    Restart,
}

impl GameAction {
    /// Parse a payload-free action from string.
    ///
    /// `Digit` carries a character and has no string form to parse from.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_bowling_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("throw"), Some(GameAction::Throw));
    /// assert_eq!(GameAction::from_str("Restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "erase" => Some(GameAction::Erase),
            "clearentry" => Some(GameAction::ClearEntry),
            "throw" => Some(GameAction::Throw),
            "restart" | "reset" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Digit(_) => "digit",
            GameAction::Erase => "erase",
            GameAction::ClearEntry => "clearEntry",
            GameAction::Throw => "throw",
            GameAction::Restart => "restart",
        }
    }
}

/// Why a candidate throw was refused before it reached the frame machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Not an integer in `0..=10`.
    #[error("out of range")]
    OutOfRange,
    /// More pins than are still standing in the current frame.
    #[error("exceeds pins left ({pins_left})")]
    BudgetExceeded { pins_left: u8 },
}

impl ValidationError {
    /// Short machine-readable reason.
    pub fn reason(&self) -> &'static str {
        match self {
            ValidationError::OutOfRange => "out of range",
            ValidationError::BudgetExceeded { .. } => "exceeds pins left",
        }
    }

    pub fn pins_left(&self) -> Option<u8> {
        match self {
            ValidationError::OutOfRange => None,
            ValidationError::BudgetExceeded { pins_left } => Some(*pins_left),
        }
    }
}

/// Core-side event emitted after an accepted throw.
///
/// `frame_index` is the frame credited with the throw: the frame active when
/// the throw was made, before any transition moved the game forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrowEvent {
    pub frame_index: u8,
    pub pins: u8,
    pub from: FrameState,
    pub to: FrameState,
}
