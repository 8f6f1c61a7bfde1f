//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! The playfield is a fixed character grid:
//!
//! - **Width**: 150 columns (indexed 0-149)
//! - **Height**: 40 rows (indexed 0-39)
//! - **Initial head**: (10, 1), with the rest of the chain trailing left to x = 1
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 1000 | Fixed sleep between game cycles |
//!
//! There is no delta-time accumulation: one cycle is one poll, one tick, one sleep.
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, SegmentRole, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(Direction::Up.opposite(), Direction::Down);
//! assert!(Direction::Left.is_opposite(Direction::Right));
//!
//! assert_eq!(Direction::Left.as_str(), "left");
//!
//! // Glyph lookup is keyed by role
//! assert_eq!(SegmentRole::Head.glyph(), '█');
//!
//! assert_eq!(BOARD_WIDTH, 150);
//! assert_eq!(BOARD_HEIGHT, 40);
//! ```

/// Grid width in cells (150 columns)
pub const BOARD_WIDTH: u16 = 150;

/// Grid height in cells (40 rows)
pub const BOARD_HEIGHT: u16 = 40;

/// Sleep between game cycles in milliseconds
pub const TICK_MS: u32 = 1000;

/// Number of segments in the chain at start
pub const INITIAL_CHAIN_LEN: usize = 10;

/// Head cell of the initial chain
pub const INITIAL_HEAD: (i16, i16) = (10, 1);

/// Capacity of the fixed-size chain storage
pub const MAX_CHAIN_LEN: usize = 64;

/// Glyph written over a vacated cell
pub const BLANK_GLYPH: char = ' ';


/// Movement directions on the grid
///
/// Screen coordinates grow right (x) and down (y), so `Up` decrements y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in declaration order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The direction pointing the other way
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// assert_eq!(Direction::Right.opposite(), Direction::Left);
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Cell offset `(dx, dy)` of one step in this direction
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Foreground used for vacated cells
pub const BACKGROUND: Rgb = Rgb::new(0, 0, 0);

/// Foreground used for text overlays
pub const TEXT: Rgb = Rgb::new(255, 255, 255);

/// Role of a segment within the chain
///
/// The role only selects the glyph and colour; every segment moves the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentRole {
    Head,
    Body,
    Tail,
}

/// Glyph and colour per role, indexed by [`SegmentRole::index`]
const ROLE_STYLES: [(char, Rgb); 3] = [
    ('█', Rgb::new(255, 255, 255)),
    ('▓', Rgb::new(220, 220, 220)),
    ('░', Rgb::new(170, 170, 170)),
];

impl SegmentRole {
    fn index(&self) -> usize {
        match self {
            SegmentRole::Head => 0,
            SegmentRole::Body => 1,
            SegmentRole::Tail => 2,
        }
    }

    /// Glyph drawn for this role
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::SegmentRole;
    ///
    /// assert_eq!(SegmentRole::Head.glyph(), '█');
    /// assert_eq!(SegmentRole::Body.glyph(), '▓');
    /// assert_eq!(SegmentRole::Tail.glyph(), '░');
    /// ```
    pub fn glyph(&self) -> char {
        ROLE_STYLES[self.index()].0
    }

    pub fn color(&self) -> Rgb {
        ROLE_STYLES[self.index()].1
    }

    /// Role of the segment at `index` in a chain of `len` segments
    ///
    /// Index 0 is always the head; a chain longer than one ends in a tail.
    pub fn for_index(index: usize, len: usize) -> Self {
        if index == 0 {
            SegmentRole::Head
        } else if index + 1 == len {
            SegmentRole::Tail
        } else {
            SegmentRole::Body
        }
    }
}
