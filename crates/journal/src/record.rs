//! Journal record types - one JSON object per line.
//!
//! All lines have: type, ts (timestamp in ms), episode

use serde::{Deserialize, Serialize};

use crate::core::GameSnapshot;
use crate::types::{FrameState, ThrowEvent, ValidationError};

/// Frame state in snake_case for the journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateTag {
    FrameFirstThrow,
    FrameSecondThrow,
    LastFrameFirstThrow,
    LastFrameSecondThrow,
    LastFrameThirdThrow,
    Completed,
}

impl From<FrameState> for StateTag {
    fn from(value: FrameState) -> Self {
        match value {
            FrameState::FrameFirstThrow => StateTag::FrameFirstThrow,
            FrameState::FrameSecondThrow => StateTag::FrameSecondThrow,
            FrameState::LastFrameFirstThrow => StateTag::LastFrameFirstThrow,
            FrameState::LastFrameSecondThrow => StateTag::LastFrameSecondThrow,
            FrameState::LastFrameThirdThrow => StateTag::LastFrameThirdThrow,
            FrameState::Completed => StateTag::Completed,
        }
    }
}

impl From<StateTag> for FrameState {
    fn from(value: StateTag) -> Self {
        match value {
            StateTag::FrameFirstThrow => FrameState::FrameFirstThrow,
            StateTag::FrameSecondThrow => FrameState::FrameSecondThrow,
            StateTag::LastFrameFirstThrow => FrameState::LastFrameFirstThrow,
            StateTag::LastFrameSecondThrow => FrameState::LastFrameSecondThrow,
            StateTag::LastFrameThirdThrow => FrameState::LastFrameThirdThrow,
            StateTag::Completed => FrameState::Completed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JournalRecord {
    /// First line written by a session.
    Session { version: String, episode: u32 },
    /// Accepted throw. `frame` is the frame credited with it.
    Throw {
        episode: u32,
        frame: u8,
        pins: u8,
        from: StateTag,
        to: StateTag,
        throws: Vec<u8>,
        pins_left: u8,
    },
    /// Throw refused by the validator.
    Rejected {
        episode: u32,
        input: String,
        reason: String,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        pins_left: Option<u8>,
    },
    /// Throw submitted after the game was completed.
    Ignored {
        episode: u32,
        input: String,
        state: StateTag,
    },
    Reset { episode: u32 },
}

impl JournalRecord {
    pub fn session(episode: u32) -> Self {
        JournalRecord::Session {
            version: env!("CARGO_PKG_VERSION").to_string(),
            episode,
        }
    }

    /// Accepted throw; `after` is the snapshot returned by the submit.
    pub fn throw(event: &ThrowEvent, after: &GameSnapshot) -> Self {
        JournalRecord::Throw {
            episode: after.episode_id,
            frame: event.frame_index,
            pins: event.pins,
            from: event.from.into(),
            to: event.to.into(),
            throws: after.throws().to_vec(),
            pins_left: after.pins_left,
        }
    }

    pub fn rejected(episode: u32, input: &str, err: &ValidationError) -> Self {
        JournalRecord::Rejected {
            episode,
            input: input.to_string(),
            reason: err.reason().to_string(),
            pins_left: err.pins_left(),
        }
    }

    pub fn ignored(snapshot: &GameSnapshot, input: &str) -> Self {
        JournalRecord::Ignored {
            episode: snapshot.episode_id,
            input: input.to_string(),
            state: snapshot.state.into(),
        }
    }

    pub fn reset(episode: u32) -> Self {
        JournalRecord::Reset { episode }
    }
}

/// A record as written to disk, stamped with the wall-clock time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalLine {
    pub ts: u64,
    #[serde(flatten)]
    pub record: JournalRecord,
}

impl JournalLine {
    pub fn now(record: JournalRecord) -> Self {
        let ts = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        Self { ts, record }
    }
}
