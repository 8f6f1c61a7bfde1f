//! Board module - owns the chain and the surface, runs one tick at a time
//!
//! A tick is:
//! 1. validity check on the prospective head position (boundary, then collision)
//! 2. erase the glyph at the current tail
//! 3. advance the chain
//! 4. redraw every segment
//!
//! The check runs before anything is touched, so a failed tick leaves both the
//! chain and the surface exactly as they were.

use std::fmt;
use std::io;

use tracing::{debug, warn};

use crate::chain::SnakeChain;
use crate::position::Position;
use crate::surface::TerminalSurface;
use crate::types::{Direction, Rgb, BACKGROUND, BLANK_GLYPH};

/// Reasons a tick cannot be committed. All of them end the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// The prospective head cell is off the grid
    Boundary { x: i16, y: i16 },
    /// The prospective head cell is occupied by segment `segment`
    Collision { x: i16, y: i16, segment: usize },
    /// The chain has no head
    MissingHead,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Boundary { x, y } => write!(f, "hit the wall at ({}, {})", x, y),
            Violation::Collision { x, y, segment } => {
                write!(f, "ran into segment {} at ({}, {})", segment, x, y)
            }
            Violation::MissingHead => write!(f, "chain has no head"),
        }
    }
}

impl std::error::Error for Violation {}

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The chain moved and was redrawn
    Advanced,
    /// Nothing was committed
    GameOver(Violation),
}

/// The playfield: a chain rendered into a fixed-size surface
#[derive(Debug)]
pub struct Board<S> {
    chain: SnakeChain,
    surface: S,
    width: u16,
    height: u16,
}

impl<S: TerminalSurface> Board<S> {
    /// Configure the surface to `width` x `height` and draw the chain.
    pub fn new(chain: SnakeChain, mut surface: S, width: u16, height: u16) -> io::Result<Self> {
        surface.configure(width, height)?;
        let mut board = Self {
            chain,
            surface,
            width,
            height,
        };
        board.plot()?;
        Ok(board)
    }

    pub fn chain(&self) -> &SnakeChain {
        &self.chain
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Check if `(x, y)` lies on the grid
    pub fn in_bounds(&self, x: i16, y: i16) -> bool {
        x >= 0 && y >= 0 && (x as u16) < self.width && (y as u16) < self.height
    }

    /// Compute where the head would land for `direction` and validate it.
    pub fn before_tick(&self, direction: Direction) -> Result<Position, Violation> {
        let head = self.chain.head().ok_or(Violation::MissingHead)?;
        let next = head.position.step(direction);

        if !self.in_bounds(next.x, next.y) {
            return Err(Violation::Boundary {
                x: next.x,
                y: next.y,
            });
        }

        if let Some(segment) = self.chain.occupies(&next) {
            return Err(Violation::Collision {
                x: next.x,
                y: next.y,
                segment,
            });
        }

        Ok(next)
    }

    /// Run one tick steering the head towards `direction`.
    pub fn next_tick(&mut self, direction: Direction) -> io::Result<TickOutcome> {
        let next = match self.before_tick(direction) {
            Ok(next) => next,
            Err(violation) => {
                warn!(%violation, direction = direction.as_str(), "tick rejected");
                return Ok(TickOutcome::GameOver(violation));
            }
        };

        if let Some(tail) = self.chain.tail().copied() {
            self.put(tail.position.x, tail.position.y, BLANK_GLYPH, BACKGROUND)?;
        }

        self.chain.advance(direction);
        debug!(x = next.x, y = next.y, facing = next.facing.as_str(), "head advanced");

        self.plot()?;
        Ok(TickOutcome::Advanced)
    }

    /// Repeat the last tick: keep going in the head's current facing.
    pub fn repeat_tick(&mut self) -> io::Result<TickOutcome> {
        match self.chain.head() {
            Some(head) => {
                let facing = head.position.facing;
                self.next_tick(facing)
            }
            None => {
                warn!("repeat tick on an empty chain");
                Ok(TickOutcome::GameOver(Violation::MissingHead))
            }
        }
    }

    /// Draw every segment at its current position and flush.
    pub fn plot(&mut self) -> io::Result<()> {
        for i in 0..self.chain.len() {
            let segment = self.chain.segments()[i];
            self.put(
                segment.position.x,
                segment.position.y,
                segment.glyph(),
                segment.color(),
            )?;
        }
        self.surface.flush()
    }

    /// Write a glyph if the cell is on the grid; off-grid cells are skipped.
    fn put(&mut self, x: i16, y: i16, glyph: char, fg: Rgb) -> io::Result<()> {
        if !self.in_bounds(x, y) {
            return Ok(());
        }
        self.surface.write_cell(x as u16, y as u16, glyph, fg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records writes into a flat grid of glyphs.
    #[derive(Debug, Default)]
    struct Grid {
        width: u16,
        cells: Vec<char>,
        writes: usize,
        flushes: usize,
    }

    impl Grid {
        fn at(&self, x: u16, y: u16) -> char {
            self.cells[y as usize * self.width as usize + x as usize]
        }
    }

    impl TerminalSurface for Grid {
        fn configure(&mut self, width: u16, height: u16) -> io::Result<()> {
            self.width = width;
            self.cells = vec![' '; width as usize * height as usize];
            Ok(())
        }

        fn write_cell(&mut self, x: u16, y: u16, glyph: char, _fg: Rgb) -> io::Result<()> {
            let w = self.width as usize;
            self.cells[y as usize * w + x as usize] = glyph;
            self.writes += 1;
            Ok(())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    fn board(chain: SnakeChain) -> Board<Grid> {
        Board::new(chain, Grid::default(), 20, 10).unwrap()
    }

    #[test]
    fn new_board_plots_the_chain() {
        let b = board(SnakeChain::straight(5, 2, Direction::Right, 3).unwrap());
        assert_eq!(b.surface().at(5, 2), '█');
        assert_eq!(b.surface().at(4, 2), '▓');
        assert_eq!(b.surface().at(3, 2), '░');
        assert_eq!(b.surface().flushes, 1);
    }

    #[test]
    fn tick_erases_tail_and_redraws() {
        let mut b = board(SnakeChain::straight(5, 2, Direction::Right, 3).unwrap());
        assert_eq!(b.next_tick(Direction::Right).unwrap(), TickOutcome::Advanced);

        assert_eq!(b.surface().at(6, 2), '█');
        assert_eq!(b.surface().at(5, 2), '▓');
        assert_eq!(b.surface().at(4, 2), '░');
        assert_eq!(b.surface().at(3, 2), ' ');
    }

    #[test]
    fn boundary_on_the_left_edge() {
        let mut b = board(SnakeChain::straight(0, 4, Direction::Left, 3).unwrap());
        let before = b.chain().clone();
        let writes = b.surface().writes;

        let outcome = b.next_tick(Direction::Left).unwrap();
        assert_eq!(
            outcome,
            TickOutcome::GameOver(Violation::Boundary { x: -1, y: 4 })
        );
        assert_eq!(b.chain(), &before);
        assert_eq!(b.surface().writes, writes);
    }

    #[test]
    fn boundary_on_the_far_edges() {
        let b = board(SnakeChain::straight(19, 9, Direction::Right, 2).unwrap());
        assert_eq!(
            b.before_tick(Direction::Right),
            Err(Violation::Boundary { x: 20, y: 9 })
        );
        assert_eq!(
            b.before_tick(Direction::Down),
            Err(Violation::Boundary { x: 19, y: 10 })
        );
        assert!(b.before_tick(Direction::Up).is_ok());
    }

    #[test]
    fn missing_head_is_reported() {
        let mut b = board(SnakeChain::from_positions(Vec::new()).unwrap());
        assert_eq!(b.before_tick(Direction::Up), Err(Violation::MissingHead));
        assert_eq!(
            b.repeat_tick().unwrap(),
            TickOutcome::GameOver(Violation::MissingHead)
        );
    }

    #[test]
    fn violation_messages() {
        assert_eq!(
            Violation::Boundary { x: -1, y: 3 }.to_string(),
            "hit the wall at (-1, 3)"
        );
        assert_eq!(
            Violation::Collision {
                x: 2,
                y: 3,
                segment: 4
            }
            .to_string(),
            "ran into segment 4 at (2, 3)"
        );
        assert_eq!(Violation::MissingHead.to_string(), "chain has no head");
    }
}
