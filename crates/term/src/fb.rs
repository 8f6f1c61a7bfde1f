//! Framebuffer for headless rendering.

use std::io;

use crate::core::TerminalSurface;
use crate::types::{Rgb, BACKGROUND, BLANK_GLYPH};

/// A single character cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Rgb,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: BLANK_GLYPH,
            fg: BACKGROUND,
        }
    }
}

/// 2D framebuffer of coloured character cells.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    writes: usize,
    flushes: usize,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
            writes: 0,
            flushes: 0,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cell writes since creation
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn flushes(&self) -> usize {
        self.flushes
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn glyph_at(&self, x: u16, y: u16) -> Option<char> {
        self.get(x, y).map(|c| c.ch)
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Row `y` as a string, or empty if out of range.
    pub fn row_string(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        (0..self.width)
            .filter_map(|x| self.glyph_at(x, y))
            .collect()
    }

    /// Count cells holding `ch`.
    pub fn count(&self, ch: char) -> usize {
        self.cells.iter().filter(|c| c.ch == ch).count()
    }
}

impl TerminalSurface for FrameBuffer {
    fn configure(&mut self, width: u16, height: u16) -> io::Result<()> {
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.clear();
        self.cells.resize(len, Cell::default());
        Ok(())
    }

    fn write_cell(&mut self, x: u16, y: u16, glyph: char, fg: Rgb) -> io::Result<()> {
        self.set(x, y, Cell { ch: glyph, fg });
        self.writes += 1;
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configure_resets_the_grid() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.write_cell(1, 1, 'X', Rgb::new(1, 2, 3)).unwrap();

        fb.configure(4, 3).unwrap();
        assert_eq!(fb.width(), 4);
        assert_eq!(fb.height(), 3);
        assert_eq!(fb.cells().len(), 12);
        assert_eq!(fb.count('X'), 0);
    }

    #[test]
    fn out_of_range_writes_are_dropped() {
        let mut fb = FrameBuffer::new(3, 1);
        fb.write_cell(5, 0, 'X', Rgb::default()).unwrap();
        assert_eq!(fb.count('X'), 0);
        assert_eq!(fb.get(5, 0), None);
    }

    #[test]
    fn row_string_reads_back_glyphs() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.write_cell(0, 1, 'a', Rgb::default()).unwrap();
        fb.write_cell(2, 1, 'c', Rgb::default()).unwrap();
        assert_eq!(fb.row_string(1), "a c");
        assert_eq!(fb.row_string(9), "");
    }
}
