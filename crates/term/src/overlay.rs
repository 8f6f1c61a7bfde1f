//! Centred message box drawn on top of the playfield.
//!
//! Layout is pure ([`message_rect`]); drawing goes through any
//! [`TerminalSurface`], so the same code serves the terminal and tests.

use std::io;

use crate::core::TerminalSurface;
use crate::types::TEXT;

/// Placement of a message box on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

/// Compute a box that fits `lines` with a border and one cell of padding,
/// centred in a `grid_w` x `grid_h` grid and clipped to it.
pub fn message_rect(grid_w: u16, grid_h: u16, lines: &[&str]) -> MessageRect {
    let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16;
    let width = longest.saturating_add(4).min(grid_w);
    let height = (lines.len() as u16).saturating_add(4).min(grid_h);

    MessageRect {
        x: grid_w.saturating_sub(width) / 2,
        y: grid_h.saturating_sub(height) / 2,
        width,
        height,
    }
}

/// Draw `lines` centred in a bordered box and flush.
pub fn show_message<S: TerminalSurface>(
    surface: &mut S,
    grid_w: u16,
    grid_h: u16,
    lines: &[&str],
) -> io::Result<MessageRect> {
    let rect = message_rect(grid_w, grid_h, lines);
    if rect.width < 2 || rect.height < 2 {
        return Ok(rect);
    }

    let right = rect.x + rect.width - 1;
    let bottom = rect.y + rect.height - 1;

    for y in rect.y..=bottom {
        for x in rect.x..=right {
            let ch = match (x == rect.x, x == right, y == rect.y, y == bottom) {
                (true, _, true, _) => '┌',
                (_, true, true, _) => '┐',
                (true, _, _, true) => '└',
                (_, true, _, true) => '┘',
                (_, _, true, _) | (_, _, _, true) => '─',
                (true, _, _, _) | (_, true, _, _) => '│',
                _ => ' ',
            };
            surface.write_cell(x, y, ch, TEXT)?;
        }
    }

    let inner = rect.width.saturating_sub(4) as usize;
    for (i, line) in lines.iter().enumerate() {
        let y = rect.y + 2 + i as u16;
        if y >= bottom {
            break;
        }
        let padded = format!("{line: ^width$}", line = line, width = inner);
        for (dx, ch) in padded.chars().take(inner).enumerate() {
            surface.write_cell(rect.x + 2 + dx as u16, y, ch, TEXT)?;
        }
    }

    surface.flush()?;
    Ok(rect)
}
