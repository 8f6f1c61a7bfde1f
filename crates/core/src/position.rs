//! Position module - a cell coordinate and the direction it last moved in
//!
//! Coordinates: (x, y) where x grows to the right and y grows downwards.
//! Values are signed so a step off the top or left edge is representable
//! (and detectable) as -1.

use crate::types::Direction;

/// A cell on the grid together with its current facing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i16,
    pub y: i16,
    pub facing: Direction,
}

impl Position {
    pub fn new(x: i16, y: i16, facing: Direction) -> Self {
        Self { x, y, facing }
    }

    pub fn cell(&self) -> (i16, i16) {
        (self.x, self.y)
    }

    /// Check if both positions occupy the same cell (facing is ignored)
    pub fn same_cell(&self, other: &Position) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Move one cell, turning towards `requested` unless it would reverse.
    ///
    /// A request for the exact opposite of the current facing is ignored: the
    /// facing is kept and the move continues straight ahead.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_core::Position;
    /// use tui_snake_types::Direction;
    ///
    /// let p = Position::new(5, 5, Direction::Right);
    ///
    /// let turned = p.step(Direction::Up);
    /// assert_eq!((turned.x, turned.y, turned.facing), (5, 4, Direction::Up));
    ///
    /// let reversed = p.step(Direction::Left);
    /// assert_eq!((reversed.x, reversed.y, reversed.facing), (6, 5, Direction::Right));
    /// ```
    pub fn step(self, requested: Direction) -> Position {
        let facing = if self.facing.is_opposite(requested) {
            self.facing
        } else {
            requested
        };
        let (dx, dy) = facing.delta();
        Position {
            x: self.x + dx,
            y: self.y + dy,
            facing,
        }
    }
}
