use crate::config::SpeedCurve;
use crate::input::{direction_change_is_valid, Direction};

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring cell one step towards `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Segments a freshly reset body occupies, head first.
pub const START_LAYOUT: [Cell; 4] = [
    Cell::new(7, 3),
    Cell::new(6, 3),
    Cell::new(5, 3),
    Cell::new(5, 4),
];

/// Direction a freshly reset body travels in.
pub const START_DIRECTION: Direction = Direction::Right;

/// Creates a segment value at `(x, y)`.
#[must_use]
pub fn create_segment(x: i32, y: i32) -> Cell {
    Cell::new(x, y)
}

/// The creature: an ordered chain of cells (index 0 is the head) plus its
/// movement state.
#[derive(Debug, Clone)]
pub struct Body {
    segments: Vec<Cell>,
    pub(crate) direction: Direction,
    pub(crate) next_direction: Direction,
    pub(crate) speed: u32,
    pub(crate) pending_growth: u32,
    curve: SpeedCurve,
}

impl Body {
    /// Creates a body in the fixed starting layout.
    #[must_use]
    pub fn new(curve: SpeedCurve) -> Self {
        let mut body = Self {
            segments: Vec::with_capacity(START_LAYOUT.len()),
            direction: START_DIRECTION,
            next_direction: START_DIRECTION,
            speed: curve.initial_ms,
            pending_growth: 0,
            curve,
        };
        body.reset();
        body
    }

    /// Creates a body from explicit segments (first is head). `segments` must
    /// not be empty.
    #[cfg(test)]
    #[must_use]
    pub(crate) fn from_segments(
        segments: Vec<Cell>,
        direction: Direction,
        curve: SpeedCurve,
    ) -> Self {
        assert!(!segments.is_empty(), "a body needs at least one segment");

        Self {
            segments,
            direction,
            next_direction: direction,
            speed: curve.initial_ms,
            pending_growth: 0,
            curve,
        }
    }

    /// Drops every segment and rebuilds the starting layout with default
    /// speed and direction.
    pub fn reset(&mut self) {
        self.segments.clear();
        self.direction = START_DIRECTION;
        self.next_direction = START_DIRECTION;
        self.speed = self.curve.initial_ms;
        self.pending_growth = 0;

        for cell in START_LAYOUT {
            self.append(create_segment(cell.x, cell.y));
        }
    }

    /// Attaches `segment` after the current tail.
    pub fn append(&mut self, segment: Cell) {
        self.segments.push(segment);
    }

    /// Buffers a turn for the next tick unless it reverses the committed
    /// direction. Returns whether the request was accepted.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if !direction_change_is_valid(self.direction, direction) {
            return false;
        }

        self.next_direction = direction;
        true
    }

    /// Queues one growth event, materialised on the next advance.
    pub fn queue_growth(&mut self) {
        self.pending_growth += 1;
    }

    #[must_use]
    pub fn head(&self) -> Cell {
        self.segments[0]
    }

    #[must_use]
    pub fn tail(&self) -> Cell {
        self.segments[self.segments.len() - 1]
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterates over segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.segments.iter()
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn next_direction(&self) -> Direction {
        self.next_direction
    }

    /// Current delay between ticks in milliseconds.
    #[must_use]
    pub fn speed(&self) -> u32 {
        self.speed
    }

    #[must_use]
    pub fn pending_growth(&self) -> u32 {
        self.pending_growth
    }

    #[must_use]
    pub fn curve(&self) -> SpeedCurve {
        self.curve
    }

    pub(crate) fn segments_mut(&mut self) -> &mut [Cell] {
        &mut self.segments
    }
}
