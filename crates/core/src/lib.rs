//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the snake's positional state machine and the board's
//! per-tick update. It has **no dependency** on a real terminal: rendering goes
//! through the [`TerminalSurface`] trait, so the whole simulation runs headless in
//! tests and benches.
//!
//! # Module Structure
//!
//! - [`position`]: cell coordinate plus facing, with the no-reversal step rule
//! - [`chain`]: fixed-length chain of segments advanced by a one-tick direction relay
//! - [`surface`]: the character-grid surface the board draws into
//! - [`board`]: validity check, erase, commit, redraw (one tick)
//! - [`game`]: Running/Over state machine fed by optional direction input
//!
//! # Example
//!
//! ```
//! use std::io;
//! use tui_snake_core::{Board, Game, GameState, SnakeChain, TerminalSurface};
//! use tui_snake_types::{Direction, Rgb};
//!
//! struct Null;
//!
//! impl TerminalSurface for Null {
//!     fn configure(&mut self, _w: u16, _h: u16) -> io::Result<()> { Ok(()) }
//!     fn write_cell(&mut self, _x: u16, _y: u16, _g: char, _fg: Rgb) -> io::Result<()> { Ok(()) }
//!     fn flush(&mut self) -> io::Result<()> { Ok(()) }
//! }
//!
//! let board = Board::new(SnakeChain::new(), Null, 150, 40).unwrap();
//! let mut game = Game::new(board);
//!
//! game.cycle(Some(Direction::Down)).unwrap();
//! game.cycle(None).unwrap();
//! assert_eq!(*game.state(), GameState::Running);
//! assert_eq!(game.ticks(), 2);
//! ```

pub mod board;
pub mod chain;
pub mod game;
pub mod position;
pub mod surface;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, TickOutcome, Violation};
pub use chain::{ChainError, Segment, SnakeChain};
pub use game::{Game, GameState};
pub use position::Position;
pub use surface::TerminalSurface;
