//! Terminal input module.
//!
//! Maps `crossterm` key events into [`Input`] values and polls the terminal for
//! a pending key press without blocking. Nothing here knows about the board.

pub mod map;
pub mod poll;

pub use tui_snake_types as types;

pub use map::{map_key, Input};
pub use poll::{first_input, poll_input, poll_key, wait_key};
