//! Key mapping from terminal events to game input.

use crate::types::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Turn(Direction),
    Quit,
}

/// Map keyboard input to game input.
///
/// WASD and the arrow keys steer; `q`, `Esc` and Ctrl+C quit. Anything else
/// is ignored.
pub fn map_key(key: KeyEvent) -> Option<Input> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Input::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Input::Turn(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Input::Turn(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Input::Turn(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Input::Turn(Direction::Right))
        }

        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Input::Quit),

        _ => None,
    }
}
