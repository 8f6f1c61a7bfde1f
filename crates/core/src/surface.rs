//! Terminal surface contract.
//!
//! The board only needs a fixed-size grid of character cells it can write one
//! coloured glyph at a time. A real terminal and an in-memory framebuffer both
//! satisfy this, which keeps the tick logic testable.

use std::io;

use crate::types::Rgb;

/// A fixed-size character grid that the board renders into.
pub trait TerminalSurface {
    /// Fix the grid to `width` x `height` cells and hide the cursor.
    fn configure(&mut self, width: u16, height: u16) -> io::Result<()>;

    /// Write a single glyph with a foreground colour at `(x, y)`.
    fn write_cell(&mut self, x: u16, y: u16, glyph: char, fg: Rgb) -> io::Result<()>;

    /// Push any queued writes to the underlying device.
    fn flush(&mut self) -> io::Result<()>;
}

impl<S: TerminalSurface + ?Sized> TerminalSurface for &mut S {
    fn configure(&mut self, width: u16, height: u16) -> io::Result<()> {
        (**self).configure(width, height)
    }

    fn write_cell(&mut self, x: u16, y: u16, glyph: char, fg: Rgb) -> io::Result<()> {
        (**self).write_cell(x, y, glyph, fg)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}
