//! TUI Snake (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_snake::{core,input,term,types}` and
//! adds the process-level pieces: environment [`config`] and file [`logging`].

pub mod config;
pub mod logging;

pub use tui_snake_core as core;
pub use tui_snake_input as input;
pub use tui_snake_term as term;
pub use tui_snake_types as types;

pub use config::Config;
