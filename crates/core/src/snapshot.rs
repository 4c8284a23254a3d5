use crate::context::GameContext;
use crate::history::FrameHistory;
use crate::types::FrameState;

/// Read-only copy of everything a collaborator may display or log.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub state: FrameState,
    pub context: GameContext,
    pub history: FrameHistory,
    pub pins_left: u8,
    pub episode_id: u32,
    pub throw_count: u32,
}

impl GameSnapshot {
    pub fn frame_index(&self) -> u8 {
        self.context.frame_index()
    }

    pub fn throws(&self) -> &[u8] {
        self.context.throws()
    }

    pub fn completed(&self) -> bool {
        self.state.is_completed()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            state: FrameState::default(),
            context: GameContext::new(),
            history: FrameHistory::new(),
            pins_left: crate::types::PINS_PER_FRAME,
            episode_id: 0,
            throw_count: 0,
        }
    }
}
