//! TerminalRenderer: the real-terminal surface.
//!
//! Cell writes are queued as crossterm commands into a byte buffer and written
//! to stdout in one go on `flush`. There is no diffing: the board decides which
//! cells to touch each tick.

use std::io::{self, Write};

use anyhow::Result;
use tracing::{debug, warn};

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::core::TerminalSurface;
use crate::types::Rgb;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
    fg: Option<Rgb>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
            fg: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        self.buf.clear();
        Ok(())
    }
}

impl TerminalSurface for TerminalRenderer {
    fn configure(&mut self, width: u16, height: u16) -> io::Result<()> {
        self.buf.queue(terminal::SetSize(width, height))?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.buf.queue(cursor::Hide)?;
        self.fg = None;
        self.flush_buf()?;

        match terminal::size() {
            Ok((w, h)) if w < width || h < height => {
                warn!(
                    requested_w = width,
                    requested_h = height,
                    actual_w = w,
                    actual_h = h,
                    "terminal is smaller than the playfield"
                );
            }
            Ok((w, h)) => debug!(w, h, "terminal configured"),
            Err(e) => warn!(error = %e, "could not read terminal size"),
        }
        Ok(())
    }

    fn write_cell(&mut self, x: u16, y: u16, glyph: char, fg: Rgb) -> io::Result<()> {
        self.buf.queue(cursor::MoveTo(x, y))?;
        if self.fg != Some(fg) {
            self.buf.queue(SetForegroundColor(rgb_to_color(fg)))?;
            self.fg = Some(fg);
        }
        self.buf.queue(Print(glyph))?;
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_buf()
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
