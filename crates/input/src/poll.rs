//! Non-blocking key polling.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::map::{map_key, Input};

/// Return the next pending key press, or `None` if nothing is waiting.
///
/// Release/repeat events and non-key events (resize, focus, mouse) are drained
/// and skipped so they never count as input.
pub fn poll_key() -> io::Result<Option<KeyEvent>> {
    while event::poll(Duration::ZERO)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(Some(key));
            }
        }
    }
    Ok(None)
}

/// Drain pending key presses until one maps to game input.
///
/// Returns `None` only when the queue ran dry without a recognised key.
pub fn poll_input() -> io::Result<Option<Input>> {
    first_input(std::iter::from_fn(|| poll_key().transpose()))
}

/// First key in `keys` that maps to game input.
///
/// Unmapped keys before it are consumed; keys after it are left in the iterator.
pub fn first_input<I>(keys: I) -> io::Result<Option<Input>>
where
    I: IntoIterator<Item = io::Result<KeyEvent>>,
{
    for key in keys {
        if let Some(input) = map_key(key?) {
            return Ok(Some(input));
        }
    }
    Ok(None)
}

/// Block until a key press arrives.
pub fn wait_key() -> io::Result<KeyEvent> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(key);
            }
        }
    }
}
