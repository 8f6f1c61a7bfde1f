//! Key probe: prints how each key press maps to game input.
//!
//! Useful for checking which keys a terminal actually delivers. Press `q`,
//! `Esc` or Ctrl+C to stop.

use anyhow::Result;
use crossterm::terminal;

use tui_snake::input::{map_key, wait_key, Input};

fn main() -> Result<()> {
    terminal::enable_raw_mode()?;
    let result = run();
    let _ = terminal::disable_raw_mode();
    result
}

fn run() -> Result<()> {
    print!("press keys (q/Esc/Ctrl+C to stop)\r\n");
    loop {
        let key = wait_key()?;
        let mapped = map_key(key);
        print!("{:?} {:?} -> {:?}\r\n", key.code, key.modifiers, mapped);
        if mapped == Some(Input::Quit) {
            return Ok(());
        }
    }
}
