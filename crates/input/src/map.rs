//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        // Pin entry
        KeyCode::Char(c @ ('0'..='9' | '-' | '.')) => Some(GameAction::Digit(c)),
        KeyCode::Backspace | KeyCode::Delete => Some(GameAction::Erase),
        KeyCode::Esc => Some(GameAction::ClearEntry),

        // Submit
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('t') | KeyCode::Char('T') => {
            Some(GameAction::Throw)
        }

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
