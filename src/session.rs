//! Interactive session: pin entry, game, last message and journal in one place.
//!
//! The terminal loop and the tests drive a session only through
//! [`Session::apply`], so everything a key press can do is covered here.

use anyhow::Result;

use crate::core::{BowlingGame, GameSnapshot};
use crate::input::PinEntry;
use crate::journal::{Journal, JournalRecord};
use crate::term::SheetModel;
use crate::types::GameAction;

#[derive(Debug)]
pub struct Session {
    game: BowlingGame,
    entry: PinEntry,
    message: Option<String>,
    journal: Journal,
    snapshot: GameSnapshot,
}

impl Session {
    /// Start a session and write its opening journal line.
    pub fn new(mut journal: Journal) -> Result<Self> {
        let game = BowlingGame::new();
        journal.write(JournalRecord::session(game.episode_id()))?;
        let snapshot = game.snapshot();
        Ok(Self {
            game,
            entry: PinEntry::new(),
            message: None,
            journal,
            snapshot,
        })
    }

    pub fn game(&self) -> &BowlingGame {
        &self.game
    }

    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    pub fn entry(&self) -> &str {
        self.entry.as_str()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// What the sheet view needs to draw this session.
    pub fn sheet_model(&self) -> SheetModel<'_> {
        SheetModel {
            snapshot: &self.snapshot,
            entry: self.entry.as_str(),
            message: self.message.as_deref(),
        }
    }

    /// Apply one input action. Only journal I/O can fail.
    pub fn apply(&mut self, action: GameAction) -> Result<()> {
        match action {
            GameAction::Digit(ch) => {
                self.entry.push(ch);
            }
            GameAction::Erase => {
                self.entry.pop();
            }
            GameAction::ClearEntry => self.entry.clear(),
            GameAction::Throw => self.throw()?,
            GameAction::Restart => self.restart()?,
        }
        Ok(())
    }

    fn throw(&mut self) -> Result<()> {
        let was_completed = self.game.current_state().is_completed();
        match self.game.submit_raw(self.entry.as_str()) {
            Ok(snapshot) => {
                let record = match self.game.take_last_event() {
                    Some(event) => JournalRecord::throw(&event, &snapshot),
                    None => {
                        debug_assert!(was_completed);
                        JournalRecord::ignored(&snapshot, self.entry.as_str())
                    }
                };
                self.snapshot = snapshot;
                self.entry.clear();
                self.message = None;
                self.journal.write(record)
            }
            Err(err) => {
                self.message = Some(err.to_string());
                self.journal.write(JournalRecord::rejected(
                    self.game.episode_id(),
                    self.entry.as_str(),
                    &err,
                ))
            }
        }
    }

    fn restart(&mut self) -> Result<()> {
        self.snapshot = self.game.reset();
        self.entry.clear();
        self.message = None;
        self.journal
            .write(JournalRecord::reset(self.game.episode_id()))
    }
}
