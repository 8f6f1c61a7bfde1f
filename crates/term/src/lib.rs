//! Terminal surface module.
//!
//! Two implementations of [`TerminalSurface`](crate::core::TerminalSurface):
//! - [`FrameBuffer`]: an in-memory grid, used headless (tests, benches)
//! - [`TerminalRenderer`]: a real terminal driven through crossterm
//!
//! Plus a small centred message overlay used for the game-over screen.

pub mod fb;
pub mod overlay;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, FrameBuffer};
pub use overlay::{message_rect, show_message, MessageRect};
pub use renderer::TerminalRenderer;
