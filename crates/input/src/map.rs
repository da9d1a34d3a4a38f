//! Key mapping from terminal keys to well inputs.

use crate::types::InputType;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a terminal key to the well input it drives.
pub fn map_key(code: KeyCode) -> Option<InputType> {
    match code {
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => Some(InputType::Left),
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => Some(InputType::Right),
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => Some(InputType::Down),

        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W' | 'x' | 'X') => {
            Some(InputType::RotateCw)
        }
        KeyCode::Char('z' | 'Z' | 'y' | 'Y') => Some(InputType::RotateCcw),

        KeyCode::Char(' ') => Some(InputType::HardDrop),
        KeyCode::Enter => Some(InputType::Up),
        KeyCode::Char('c' | 'C') => Some(InputType::Hold),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q' | 'Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
