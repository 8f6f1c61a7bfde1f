//! Chain module - the ordered segments of the snake, head first
//!
//! The chain has a fixed length for its whole lifetime. It advances as a shift
//! register of directions: the head takes the externally requested direction and
//! every other segment takes the facing its predecessor held *before* the tick.
//! That one-tick delay makes each segment land on the cell its predecessor just
//! left.
//!
//! Storage is an `ArrayVec`, so advancing never allocates.

use std::fmt;

use arrayvec::ArrayVec;

use crate::position::Position;
use crate::types::{Direction, Rgb, SegmentRole, INITIAL_CHAIN_LEN, INITIAL_HEAD, MAX_CHAIN_LEN};

/// One rendered unit of the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    pub position: Position,
    pub role: SegmentRole,
}

impl Segment {
    pub fn new(position: Position, role: SegmentRole) -> Self {
        Self { position, role }
    }

    pub fn glyph(&self) -> char {
        self.role.glyph()
    }

    pub fn color(&self) -> Rgb {
        self.role.color()
    }
}

/// Errors raised while building a chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainError {
    /// More segments than the fixed storage can hold
    TooLong { len: usize, max: usize },
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainError::TooLong { len, max } => {
                write!(f, "chain of {} segments exceeds capacity {}", len, max)
            }
        }
    }
}

impl std::error::Error for ChainError {}

/// Fixed-length chain of segments (index 0 = head, last = tail)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnakeChain {
    segments: ArrayVec<Segment, MAX_CHAIN_LEN>,
}

impl Default for SnakeChain {
    fn default() -> Self {
        Self::new()
    }
}

impl SnakeChain {
    /// The starting chain: a horizontal line with its head at [`INITIAL_HEAD`],
    /// trailing left, every segment facing right.
    pub fn new() -> Self {
        let (x, y) = INITIAL_HEAD;
        let mut segments = ArrayVec::new();
        for i in 0..INITIAL_CHAIN_LEN {
            let position = Position::new(x - i as i16, y, Direction::Right);
            segments.push(Segment::new(
                position,
                SegmentRole::for_index(i, INITIAL_CHAIN_LEN),
            ));
        }
        Self { segments }
    }

    /// A straight chain of `len` segments whose head sits at `(head_x, head_y)`
    /// facing `facing`; the body trails behind in the opposite direction.
    pub fn straight(
        head_x: i16,
        head_y: i16,
        facing: Direction,
        len: usize,
    ) -> Result<Self, ChainError> {
        let (dx, dy) = facing.delta();
        Self::from_positions((0..len).map(|i| {
            let back = i as i16;
            Position::new(head_x - dx * back, head_y - dy * back, facing)
        }))
    }

    /// Build a chain from positions listed head first.
    ///
    /// Roles are assigned by index. An empty iterator yields an empty chain.
    pub fn from_positions<I>(positions: I) -> Result<Self, ChainError>
    where
        I: IntoIterator<Item = Position>,
    {
        let mut segments = ArrayVec::new();
        let mut len = 0;
        for position in positions {
            len += 1;
            // Past capacity we only keep counting, so the error reports the full length.
            // Roles are fixed up once the length is known.
            let _ = segments.try_push(Segment::new(position, SegmentRole::Body));
        }
        if len > MAX_CHAIN_LEN {
            return Err(ChainError::TooLong {
                len,
                max: MAX_CHAIN_LEN,
            });
        }

        for (i, segment) in segments.iter_mut().enumerate() {
            segment.role = SegmentRole::for_index(i, len);
        }
        Ok(Self { segments })
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn head(&self) -> Option<&Segment> {
        self.segments.first()
    }

    pub fn tail(&self) -> Option<&Segment> {
        self.segments.last()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    /// Index of the first non-head segment on the same cell as `position`
    pub fn occupies(&self, position: &Position) -> Option<usize> {
        self.segments
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, seg)| seg.position.same_cell(position))
            .map(|(i, _)| i)
    }

    /// Advance every segment by one cell.
    ///
    /// Pre-tick facings are captured first, then applied shifted by one index,
    /// so no segment reads a facing that was already updated this tick.
    pub fn advance(&mut self, direction: Direction) {
        let facings: ArrayVec<Direction, MAX_CHAIN_LEN> =
            self.segments.iter().map(|s| s.position.facing).collect();

        for (i, segment) in self.segments.iter_mut().enumerate() {
            let dir = if i == 0 { direction } else { facings[i - 1] };
            segment.position = segment.position.step(dir);
        }
    }
}

impl<'a> IntoIterator for &'a SnakeChain {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
